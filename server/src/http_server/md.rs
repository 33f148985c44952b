use markdown::mdast::{
    Blockquote, Break, Code, Delete, Emphasis, Heading, Html, InlineCode, Link, List, ListItem,
    Node, Paragraph, Root, Strong, Text, ThematicBreak,
};
use maud::{html, Markup, PreEscaped};
use recipes::MarkdownAst;

/// Renders a recipe's markdown body to HTML. The body is author-owned
/// content; only the inline recipe *step* text goes through the sanitizer,
/// which lives with the renderer.
pub(crate) trait IntoHtml {
    fn into_html(self) -> Markup;
}

impl IntoHtml for MarkdownAst {
    fn into_html(self) -> Markup {
        self.0.into_html()
    }
}

impl IntoHtml for Root {
    fn into_html(self) -> Markup {
        self.children.into_html()
    }
}

impl IntoHtml for Vec<Node> {
    fn into_html(self) -> Markup {
        html! {
          @for node in self {
            (node.into_html())
          }
        }
    }
}

impl IntoHtml for Node {
    fn into_html(self) -> Markup {
        match self {
            Node::Root(r) => r.into_html(),
            Node::Blockquote(x) => x.into_html(),
            Node::List(l) => l.into_html(),
            Node::ListItem(i) => i.into_html(),
            Node::Break(b) => b.into_html(),
            Node::InlineCode(c) => c.into_html(),
            Node::Delete(d) => d.into_html(),
            Node::Emphasis(e) => e.into_html(),
            Node::Strong(s) => s.into_html(),
            Node::Html(h) => h.into_html(),
            Node::Link(l) => l.into_html(),
            Node::Text(t) => t.into_html(),
            Node::Code(c) => c.into_html(),
            Node::Heading(h) => h.into_html(),
            Node::Paragraph(p) => p.into_html(),
            Node::ThematicBreak(b) => b.into_html(),
            // Frontmatter is metadata, not body content, and anything this
            // renderer doesn't know is dropped rather than rendered raw.
            _ => html! {},
        }
    }
}

impl IntoHtml for Paragraph {
    fn into_html(self) -> Markup {
        html! {
            p { (self.children.into_html()) }
        }
    }
}

impl IntoHtml for Text {
    fn into_html(self) -> Markup {
        html! { (self.value) }
    }
}

impl IntoHtml for Html {
    fn into_html(self) -> Markup {
        html! { (PreEscaped(self.value)) }
    }
}

impl IntoHtml for Break {
    fn into_html(self) -> Markup {
        html! { br; }
    }
}

impl IntoHtml for ThematicBreak {
    fn into_html(self) -> Markup {
        html! { hr; }
    }
}

impl IntoHtml for Blockquote {
    fn into_html(self) -> Markup {
        html! {
          blockquote { (self.children.into_html()) }
        }
    }
}

impl IntoHtml for List {
    fn into_html(self) -> Markup {
        html! {
            @let inner = self.children.into_html();
            @if self.ordered {
                ol { (inner) }
            } @else {
                ul { (inner) }
            }
        }
    }
}

impl IntoHtml for ListItem {
    fn into_html(self) -> Markup {
        html! {
            li { (self.children.into_html()) }
        }
    }
}

impl IntoHtml for InlineCode {
    fn into_html(self) -> Markup {
        html! {
          code { (self.value) }
        }
    }
}

impl IntoHtml for Code {
    fn into_html(self) -> Markup {
        html! {
          pre { code { (self.value) } }
        }
    }
}

impl IntoHtml for Delete {
    fn into_html(self) -> Markup {
        html! {
          del { (self.children.into_html()) }
        }
    }
}

impl IntoHtml for Emphasis {
    fn into_html(self) -> Markup {
        html! {
          em { (self.children.into_html()) }
        }
    }
}

impl IntoHtml for Strong {
    fn into_html(self) -> Markup {
        html! {
          strong { (self.children.into_html()) }
        }
    }
}

impl IntoHtml for Link {
    fn into_html(self) -> Markup {
        html! {
            a href=(self.url) title=[self.title] { (self.children.into_html()) }
        }
    }
}

impl IntoHtml for Heading {
    fn into_html(self) -> Markup {
        let inner = self.children.into_html();

        html! {
            @match self.depth {
                1 => h1 { (inner) },
                2 => h2 { (inner) },
                3 => h3 { (inner) },
                4 => h4 { (inner) },
                5 => h5 { (inner) },
                _ => h6 { (inner) },
            }
        }
    }
}
