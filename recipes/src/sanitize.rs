use std::sync::OnceLock;

use ammonia::Builder;

/// Inline formatting tags allowed through in instruction step text. Anything
/// outside this list, scripts included, is stripped on render.
const ALLOWED_TAGS: &[&str] = &[
    "a", "b", "br", "code", "del", "em", "i", "mark", "strong", "sub", "sup",
];

fn builder() -> &'static Builder<'static> {
    static BUILDER: OnceLock<Builder<'static>> = OnceLock::new();

    BUILDER.get_or_init(|| {
        let mut builder = Builder::default();
        builder.tags(ALLOWED_TAGS.iter().copied().collect());
        builder
    })
}

/// Sanitizes step text against the allow-list. The result is safe to inject
/// pre-escaped into a rendered fragment.
pub fn clean_step(input: &str) -> String {
    builder().clean(input).to_string()
}
