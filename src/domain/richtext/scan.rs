//! Low-level HTML tag scanning shared by the block and inline parsers
//!
//! This is a tolerant tokenizer over a minimal HTML subset, not a conforming
//! parser: anything that does not look like a tag is treated as literal text,
//! and unclosed elements run to the end of the input.

/// A single scanned tag, e.g. `<span style="...">` or `</p>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TagToken {
    /// Tag name, lowercased
    pub name: String,
    /// Raw attribute text between the name and the closing '>'
    pub attrs: String,
    /// True for `</name>`
    pub closing: bool,
    /// True for `<name ... />`
    pub self_closing: bool,
    /// Byte index just past the terminating '>'
    pub end: usize,
}

/// Try to read a tag at `pos`, which must point at a '<'.
///
/// Returns None when the text cannot be a tag (e.g. `a < b`), in which case
/// the caller should treat the '<' as literal text.
pub(crate) fn tag_at(input: &str, pos: usize) -> Option<TagToken> {
    let bytes = input.as_bytes();
    debug_assert_eq!(bytes.get(pos), Some(&b'<'));

    let mut i = pos + 1;
    let closing = bytes.get(i) == Some(&b'/');
    if closing {
        i += 1;
    }

    let name_start = i;
    while i < bytes.len() && (bytes[i].is_ascii_alphanumeric()) {
        i += 1;
    }
    if i == name_start || !bytes[name_start].is_ascii_alphabetic() {
        return None;
    }
    let name = input[name_start..i].to_lowercase();

    // Scan to '>' respecting quoted attribute values.
    let attrs_start = i;
    let mut quote: Option<u8> = None;
    while i < bytes.len() {
        match (quote, bytes[i]) {
            (Some(q), b) if b == q => quote = None,
            (None, b'"') | (None, b'\'') => quote = Some(bytes[i]),
            (None, b'>') => {
                let raw_attrs = &input[attrs_start..i];
                let self_closing = raw_attrs.trim_end().ends_with('/');
                let attrs = raw_attrs.trim_end().trim_end_matches('/').to_string();
                return Some(TagToken {
                    name,
                    attrs,
                    closing,
                    self_closing,
                    end: i + 1,
                });
            }
            _ => {}
        }
        i += 1;
    }

    // Ran off the end without '>': not a tag.
    None
}

/// Find the matching close tag for `name`, starting just past its open tag.
///
/// Returns `(inner_end, next_pos)`: the byte range end of the inner content
/// and the position just past the close tag. Unclosed elements extend to the
/// end of the input.
pub(crate) fn find_close(input: &str, name: &str, from: usize) -> (usize, usize) {
    let mut depth = 1usize;
    let mut pos = from;

    while let Some(offset) = input[pos..].find('<') {
        let at = pos + offset;
        match tag_at(input, at) {
            Some(token) if token.name == name => {
                if token.closing {
                    depth -= 1;
                    if depth == 0 {
                        return (at, token.end);
                    }
                } else if !token.self_closing {
                    depth += 1;
                }
                pos = token.end;
            }
            Some(token) => pos = token.end,
            None => pos = at + 1,
        }
    }

    (input.len(), input.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_open_tag() {
        let token = tag_at("<p>text", 0).unwrap();
        assert_eq!(token.name, "p");
        assert!(!token.closing);
        assert!(!token.self_closing);
        assert_eq!(token.end, 3);
    }

    #[test]
    fn test_closing_tag() {
        let token = tag_at("</em>", 0).unwrap();
        assert_eq!(token.name, "em");
        assert!(token.closing);
    }

    #[test]
    fn test_tag_name_is_lowercased() {
        let token = tag_at("<STRONG>", 0).unwrap();
        assert_eq!(token.name, "strong");
    }

    #[test]
    fn test_self_closing_tag() {
        let token = tag_at("<br/>", 0).unwrap();
        assert_eq!(token.name, "br");
        assert!(token.self_closing);

        let token = tag_at("<br />", 0).unwrap();
        assert!(token.self_closing);
    }

    #[test]
    fn test_attributes_are_captured() {
        let token = tag_at("<span style=\"color: red\">x", 0).unwrap();
        assert_eq!(token.name, "span");
        assert!(token.attrs.contains("color: red"));
    }

    #[test]
    fn test_gt_inside_quoted_attribute() {
        let token = tag_at("<span style=\"a > b\">x", 0).unwrap();
        assert_eq!(token.name, "span");
        assert!(token.attrs.contains("a > b"));
    }

    #[test]
    fn test_not_a_tag() {
        assert!(tag_at("< b", 0).is_none()); // space after '<'
        assert!(tag_at("<3 hearts", 0).is_none()); // digit first
        assert!(tag_at("<unterminated", 0).is_none());
    }

    #[test]
    fn test_find_close_simple() {
        let html = "<b>bold</b>after";
        let (inner_end, next) = find_close(html, "b", 3);
        assert_eq!(&html[3..inner_end], "bold");
        assert_eq!(&html[next..], "after");
    }

    #[test]
    fn test_find_close_nested_same_tag() {
        let html = "<div>a<div>b</div>c</div>rest";
        let (inner_end, next) = find_close(html, "div", 5);
        assert_eq!(&html[5..inner_end], "a<div>b</div>c");
        assert_eq!(&html[next..], "rest");
    }

    #[test]
    fn test_find_close_unclosed_runs_to_end() {
        let html = "<b>never closed";
        let (inner_end, next) = find_close(html, "b", 3);
        assert_eq!(inner_end, html.len());
        assert_eq!(next, html.len());
    }
}
