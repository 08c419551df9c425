//! Inline style parsing
//!
//! Turns a block's HTML content into runs of identically-formatted text.
//! Styling tags compose onto everything they contain; any other tag is
//! transparent, so arbitrary markup degrades to its visible text.

use super::color::{parse_css_color, RgbColor};
use super::scan::{self, TagToken};
use super::{decode_entities, strip_html};
use regex::Regex;
use std::sync::OnceLock;

/// Regex for a style="..." attribute (double or single quoted)
fn style_attr_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r#"(?i)style\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap())
}

/// Regex for a class="..." attribute (double or single quoted)
fn class_attr_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r#"(?i)class\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap())
}

/// A run of text sharing one formatting state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSegment {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub color: Option<RgbColor>,
    pub background: Option<RgbColor>,
}

impl TextSegment {
    /// An unstyled segment
    pub fn plain(text: impl Into<String>) -> Self {
        TextSegment {
            text: text.into(),
            bold: false,
            italic: false,
            underline: false,
            strikethrough: false,
            color: None,
            background: None,
        }
    }
}

/// Formatting accumulated from enclosing tags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct StyleState {
    bold: bool,
    italic: bool,
    underline: bool,
    strikethrough: bool,
    color: Option<RgbColor>,
    background: Option<RgbColor>,
}

impl StyleState {
    fn matches(&self, segment: &TextSegment) -> bool {
        self.bold == segment.bold
            && self.italic == segment.italic
            && self.underline == segment.underline
            && self.strikethrough == segment.strikethrough
            && self.color == segment.color
            && self.background == segment.background
    }
}

/// Parse a block's inline HTML into text segments.
///
/// Never fails; if nothing parses out of non-empty input, falls back to one
/// segment holding the stripped plain text.
pub fn parse_inline(html: &str) -> Vec<TextSegment> {
    let mut segments = Vec::new();
    parse_into(html, StyleState::default(), 0, &mut segments);

    if segments.is_empty() {
        let text = strip_html(html);
        if !text.is_empty() {
            segments.push(TextSegment::plain(text));
        }
    }
    segments
}

/// Nesting beyond this depth degrades to plain text
const MAX_DEPTH: usize = 64;

fn parse_into(html: &str, state: StyleState, depth: usize, out: &mut Vec<TextSegment>) {
    if depth > MAX_DEPTH {
        push_raw(&strip_html(html), state, out);
        return;
    }

    let mut pos = 0;

    while pos < html.len() {
        let Some(offset) = html[pos..].find('<') else {
            push_text(&html[pos..], state, out);
            break;
        };
        let at = pos + offset;
        push_text(&html[pos..at], state, out);

        match scan::tag_at(html, at) {
            Some(token) if token.closing => {
                // Stray close tag; nothing to balance
                pos = token.end;
            }
            Some(token) if token.name == "br" => {
                push_raw("\n", state, out);
                pos = token.end;
            }
            Some(token) if token.self_closing => {
                pos = token.end;
            }
            Some(token) => {
                let (inner_end, next) = scan::find_close(html, &token.name, token.end);
                let inner_state = apply_tag(&token, state);
                parse_into(&html[token.end..inner_end], inner_state, depth + 1, out);
                pos = next;
            }
            None => {
                push_raw("<", state, out);
                pos = at + 1;
            }
        }
    }
}

/// Compose a tag's styling onto the inherited state.
///
/// Tags outside the recognized set change nothing: their content is still
/// parsed, their own semantics are dropped.
fn apply_tag(token: &TagToken, mut state: StyleState) -> StyleState {
    match token.name.as_str() {
        "strong" | "b" => state.bold = true,
        "em" | "i" => state.italic = true,
        "u" => state.underline = true,
        "s" | "strike" => state.strikethrough = true,
        "span" => apply_span_attrs(&token.attrs, &mut state),
        _ => {}
    }
    state
}

fn apply_span_attrs(attrs: &str, state: &mut StyleState) {
    if let Some(captures) = style_attr_regex().captures(attrs) {
        let value = captures.get(1).or_else(|| captures.get(2));
        if let Some(style) = value {
            for declaration in style.as_str().split(';') {
                let Some((property, value)) = declaration.split_once(':') else {
                    continue;
                };
                match property.trim().to_lowercase().as_str() {
                    "color" => {
                        if let Some(color) = parse_css_color(value) {
                            state.color = Some(color);
                        }
                    }
                    "background-color" | "background" => {
                        if let Some(color) = parse_css_color(value) {
                            state.background = Some(color);
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    if let Some(captures) = class_attr_regex().captures(attrs) {
        let value = captures.get(1).or_else(|| captures.get(2));
        if let Some(classes) = value {
            for class in classes.as_str().split_whitespace() {
                if let Some(name) = class.strip_prefix("ql-color-") {
                    if let Some(color) = parse_css_color(name) {
                        state.color = Some(color);
                    }
                } else if let Some(name) = class.strip_prefix("ql-bg-") {
                    if let Some(color) = parse_css_color(name) {
                        state.background = Some(color);
                    }
                }
            }
        }
    }
}

/// Append entity-decoded text under the given style
fn push_text(text: &str, state: StyleState, out: &mut Vec<TextSegment>) {
    if text.is_empty() {
        return;
    }
    push_raw(&decode_entities(text), state, out);
}

/// Append already-decoded text, merging adjacent identically-styled runs
fn push_raw(text: &str, state: StyleState, out: &mut Vec<TextSegment>) {
    if text.is_empty() {
        return;
    }

    if let Some(last) = out.last_mut() {
        if state.matches(last) {
            last.text.push_str(text);
            return;
        }
    }

    out.push(TextSegment {
        text: text.to_string(),
        bold: state.bold,
        italic: state.italic,
        underline: state.underline,
        strikethrough: state.strikethrough,
        color: state.color,
        background: state.background,
    });
}
