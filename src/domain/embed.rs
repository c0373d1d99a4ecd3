//! Embedded-image references in note text

use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

/// Regex for matching embeds: ![[name]] where name contains no closing bracket
fn embed_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"!\[\[([^\]]+)\]\]").unwrap())
}

/// A single `![[name]]` occurrence in a note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedReference {
    /// Byte range of the whole reference in the source text
    pub range: Range<usize>,

    /// Literal matched text, brackets included
    pub original: String,

    /// Attachment file name captured between the brackets
    pub name: String,
}

/// Find every embed reference in `text`, in order of appearance.
pub fn find_embeds(text: &str) -> Vec<EmbedReference> {
    embed_regex()
        .captures_iter(text)
        .map(|cap| {
            let whole = cap.get(0).unwrap();
            EmbedReference {
                range: whole.range(),
                original: whole.as_str().to_string(),
                name: cap[1].to_string(),
            }
        })
        .collect()
}

/// Build the inline-image markup for an embed: `![name](data-uri)`
pub fn inline_markup(name: &str, data_uri: &str) -> String {
    format!("![{}]({})", name, data_uri)
}
