//! Rich-text parsing: HTML entry content into renderable structure
//!
//! User-authored markup may be arbitrarily malformed; every function in this
//! module degrades to plain-text extraction instead of failing.

pub mod block;
pub mod color;
pub mod inline;
mod scan;

pub use block::{parse_blocks, BlockKind, ContentBlock};
pub use color::{parse_css_color, RgbColor};
pub use inline::{parse_inline, TextSegment};

use regex::Regex;
use std::sync::OnceLock;

/// Regex for removing any HTML tag
fn tag_strip_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"<[^>]*>").unwrap())
}

/// Strip all markup from an HTML fragment and decode entities.
///
/// Used for plain-text fallbacks and code block content.
pub fn strip_html(html: &str) -> String {
    let stripped = tag_strip_regex().replace_all(html, "");
    decode_entities(&stripped).trim().to_string()
}

/// Decode the HTML entities a rich-text editor emits.
///
/// Named entities outside the recognized set are kept literally.
pub fn decode_entities(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < text.len() {
        if bytes[i] == b'&' {
            let semi = text[i + 1..]
                .find(';')
                .map(|offset| i + 1 + offset)
                .filter(|semi| semi - i <= 9);
            if let Some(semi) = semi {
                if let Some(decoded) = decode_entity(&text[i + 1..semi]) {
                    out.push(decoded);
                    i = semi + 1;
                    continue;
                }
            }
        }

        let Some(ch) = text[i..].chars().next() else {
            break;
        };
        out.push(ch);
        i += ch.len_utf8();
    }

    out
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let code = entity.strip_prefix('#')?;
            let value = if let Some(hex) = code.strip_prefix(['x', 'X']) {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                code.parse::<u32>().ok()?
            };
            char::from_u32(value)
        }
    }
}
