//! Reduction of the CMS's structured rich text down to plain strings.

use crate::content::RichTextBlock;

/// Shown in place of a description the author never wrote. A fixed fallback
/// rather than an empty string, so cards never render a blank body.
pub const NO_DESCRIPTION: &str = "No description available for this project.";

/// Flatten rich-text blocks into a single plain-text string.
///
/// Each `"paragraph"` block contributes its children's `text` concatenated in
/// order with no separator; every other block type contributes an empty
/// string. Per-block strings are joined with `\n`, preserving block order.
///
/// This is a flat, one-level reduction: nested block structures are dropped.
pub fn plain_text(blocks: &[RichTextBlock]) -> String {
    blocks
        .iter()
        .map(|block| {
            if block.block_type == "paragraph" {
                block
                    .children
                    .iter()
                    .map(|child| child.text.as_str())
                    .collect::<String>()
            } else {
                String::new()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Plain text for an optional description, falling back to [`NO_DESCRIPTION`]
/// when the author left it absent.
pub fn description_text(blocks: Option<&[RichTextBlock]>) -> String {
    match blocks {
        Some(blocks) => plain_text(blocks),
        None => NO_DESCRIPTION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::RichTextChild;

    fn block(block_type: &str, texts: &[&str]) -> RichTextBlock {
        RichTextBlock {
            block_type: block_type.to_string(),
            children: texts
                .iter()
                .map(|t| RichTextChild {
                    text: t.to_string(),
                    extra: serde_json::Map::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn paragraphs_concatenate_children_and_join_with_newline() {
        let blocks = vec![
            block("paragraph", &["Hello, ", "world"]),
            block("paragraph", &["Second line"]),
        ];
        assert_eq!(plain_text(&blocks), "Hello, world\nSecond line");
    }

    #[test]
    fn non_paragraph_block_contributes_empty_string_at_its_position() {
        let blocks = vec![
            block("paragraph", &["before"]),
            block("heading", &["ignored"]),
            block("paragraph", &["after"]),
        ];
        assert_eq!(plain_text(&blocks), "before\n\nafter");
    }

    #[test]
    fn empty_input_reduces_to_empty_string() {
        assert_eq!(plain_text(&[]), "");
    }

    #[test]
    fn absent_description_yields_fallback_not_empty() {
        assert_eq!(description_text(None), NO_DESCRIPTION);
        assert!(!description_text(None).is_empty());
    }

    #[test]
    fn present_description_is_reduced() {
        let blocks = vec![block("paragraph", &["Written by hand"])];
        assert_eq!(description_text(Some(blocks.as_slice())), "Written by hand");
    }
}
