//! Message content parser.
//!
//! Splits the raw text of a message into line-level blocks: numbered list
//! items, bullet items and plain paragraphs. Classification is purely
//! syntactic and line-local; there are no nested or multi-line items.

use once_cell::sync::Lazy;
use regex::Regex;

/// Digits, then `.` or `)`, then exactly one space, then at least one character.
/// ASCII digits only: `\d` in this regex engine would also accept other scripts.
static NUMBERED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)[.)] (.+)$").expect("numbered item regex is valid"));

const BULLET_PREFIXES: [&str; 2] = ["• ", "* "];

/// One classified line of message content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentBlock {
    /// `label` is the numeral exactly as written, e.g. `"07"`.
    Numbered { label: String, content: String },
    Bullet { content: String },
    Paragraph { content: String },
}

impl ContentBlock {
    pub fn content(&self) -> &str {
        match self {
            ContentBlock::Numbered { content, .. }
            | ContentBlock::Bullet { content }
            | ContentBlock::Paragraph { content } => content,
        }
    }
}

/// Parse message text into an ordered list of blocks, one per non-blank line.
///
/// Never fails: empty or whitespace-only input yields an empty list.
pub fn parse_content(text: &str) -> Vec<ContentBlock> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(classify_line)
        .collect()
}

fn classify_line(line: &str) -> ContentBlock {
    if let Some(caps) = NUMBERED_RE.captures(line) {
        return ContentBlock::Numbered {
            label: caps[1].to_string(),
            content: caps[2].trim().to_string(),
        };
    }

    for prefix in BULLET_PREFIXES {
        if let Some(rest) = line.strip_prefix(prefix) {
            return ContentBlock::Bullet {
                content: rest.trim().to_string(),
            };
        }
    }

    // Paragraphs keep their spacing as written.
    ContentBlock::Paragraph {
        content: line.to_string(),
    }
}
