use maud::{html, Markup};

pub(crate) fn head() -> Markup {
    html! {
      head {
        title { "Recipe Box" }
        meta charset="utf-8";
        meta name="viewport" content="width=device-width, initial-scale=1";
        link rel="stylesheet" href="/styles/site.css";
      }
    }
}

pub(crate) fn header() -> Markup {
    html! {
      div class="site-header" {
        a href="/" { "Recipe Box" }

        nav {
          ul {
            li {
              a href="/" { "Home" }
            }

            li {
              a href="/recipes" { "Recipes" }
            }
          }
        }
      }
    }
}

pub(crate) fn base(inner: Markup) -> Markup {
    html! {
      (head())

      body {
        (header())

        (inner)
      }
    }
}
