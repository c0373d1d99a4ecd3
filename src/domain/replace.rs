//! Position-based text replacement

use std::ops::Range;

/// One pending substitution of an embed by its inline markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub range: Range<usize>,
    pub original: String,
    pub markup: String,
}

impl Replacement {
    pub fn new(range: Range<usize>, original: String, markup: String) -> Self {
        Replacement {
            range,
            original,
            markup,
        }
    }
}

/// Apply replacements to `text` by byte range.
///
/// Ranges must come from a single scan of `text` and must not overlap.
/// A replacement whose range no longer holds its `original` text is skipped.
pub fn apply_replacements(text: &str, replacements: &[Replacement]) -> String {
    let mut ordered: Vec<&Replacement> = replacements.iter().collect();
    ordered.sort_by_key(|r| r.range.start);

    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;

    for replacement in ordered {
        let Range { start, end } = replacement.range;
        if start < cursor || text.get(start..end) != Some(replacement.original.as_str()) {
            continue;
        }

        output.push_str(&text[cursor..start]);
        output.push_str(&replacement.markup);
        cursor = end;
    }

    output.push_str(&text[cursor..]);
    output
}
