//! Block-level HTML parsing
//!
//! Splits an entry's HTML content into structural blocks (headings,
//! paragraphs, list items, quotes, code). Inline markup inside a block is
//! left in place for the style parser; code blocks are the exception and
//! carry plain text only.

use super::scan;
use super::strip_html;
use regex::Regex;
use std::sync::OnceLock;

/// Structural type of a content block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    Heading1,
    Heading2,
    Heading3,
    OrderedItem,
    UnorderedItem,
    Blockquote,
    CodeBlock,
}

/// One structural unit of entry content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    pub kind: BlockKind,
    /// Inner content; may still carry inline HTML except for CodeBlock
    pub content: String,
    /// 1-based position within an ordered list
    pub list_index: Option<usize>,
}

impl ContentBlock {
    fn new(kind: BlockKind, content: impl Into<String>) -> Self {
        ContentBlock {
            kind,
            content: content.into(),
            list_index: None,
        }
    }
}

const BLOCK_TAGS: [&str; 8] = ["h1", "h2", "h3", "p", "ol", "ul", "blockquote", "pre"];

fn is_block_tag(name: &str) -> bool {
    BLOCK_TAGS.contains(&name)
}

/// Regex for the fallback split on paragraph and line-break markers
fn separator_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?i)<br\s*/?>|</p>|\r?\n").unwrap())
}

/// Parse an HTML string into an ordered block list.
///
/// Never fails: malformed markup degrades to plain-text paragraphs, and only
/// literally empty input produces an empty list.
pub fn parse_blocks(html: &str) -> Vec<ContentBlock> {
    let mut blocks = Vec::new();
    let mut text_run = String::new();
    let mut pos = 0;

    while pos < html.len() {
        let Some(offset) = html[pos..].find('<') else {
            text_run.push_str(&html[pos..]);
            break;
        };
        let at = pos + offset;
        text_run.push_str(&html[pos..at]);

        match scan::tag_at(html, at) {
            Some(token) if token.closing => {
                // A stray block-level close tag ends the current run; inline
                // close tags stay in the run for the style parser.
                if is_block_tag(&token.name) || token.name == "li" {
                    flush_text_run(&mut text_run, &mut blocks);
                } else {
                    text_run.push_str(&html[at..token.end]);
                }
                pos = token.end;
            }
            Some(token) if token.name == "br" => {
                flush_text_run(&mut text_run, &mut blocks);
                pos = token.end;
            }
            Some(token) if is_block_tag(&token.name) && !token.self_closing => {
                flush_text_run(&mut text_run, &mut blocks);
                let (inner_end, next) = scan::find_close(html, &token.name, token.end);
                emit_block(&token.name, &html[token.end..inner_end], &mut blocks);
                pos = next;
            }
            Some(token) if token.name == "li" && !token.self_closing => {
                // Standalone item outside any list context
                flush_text_run(&mut text_run, &mut blocks);
                let (inner_end, next) = scan::find_close(html, "li", token.end);
                push_block(
                    ContentBlock::new(BlockKind::UnorderedItem, html[token.end..inner_end].trim()),
                    &mut blocks,
                );
                pos = next;
            }
            Some(token) => {
                // Inline or unknown tag: keep it in the run for the style parser
                text_run.push_str(&html[at..token.end]);
                pos = token.end;
            }
            None => {
                text_run.push('<');
                pos = at + 1;
            }
        }
    }
    flush_text_run(&mut text_run, &mut blocks);

    if blocks.is_empty() {
        return fallback_paragraphs(html);
    }
    blocks
}

fn emit_block(name: &str, inner: &str, blocks: &mut Vec<ContentBlock>) {
    match name {
        "h1" => push_block(ContentBlock::new(BlockKind::Heading1, inner.trim()), blocks),
        "h2" => push_block(ContentBlock::new(BlockKind::Heading2, inner.trim()), blocks),
        "h3" => push_block(ContentBlock::new(BlockKind::Heading3, inner.trim()), blocks),
        "p" => push_block(ContentBlock::new(BlockKind::Paragraph, inner.trim()), blocks),
        "blockquote" => push_block(ContentBlock::new(BlockKind::Blockquote, inner.trim()), blocks),
        "pre" => {
            // Code blocks carry no inline styling at all.
            let code = strip_html(inner);
            if !code.is_empty() {
                blocks.push(ContentBlock::new(BlockKind::CodeBlock, code));
            }
        }
        "ol" => parse_list_items(inner, true, blocks),
        "ul" => parse_list_items(inner, false, blocks),
        _ => {}
    }
}

/// Emit one block per inner `<li>`; the list element itself produces nothing
fn parse_list_items(inner: &str, ordered: bool, blocks: &mut Vec<ContentBlock>) {
    let mut pos = 0;
    let mut index = 0usize;

    while pos < inner.len() {
        let Some(offset) = inner[pos..].find('<') else {
            break;
        };
        let at = pos + offset;
        match scan::tag_at(inner, at) {
            Some(token) if token.name == "li" && !token.closing && !token.self_closing => {
                let (inner_end, next) = scan::find_close(inner, "li", token.end);
                let content = inner[token.end..inner_end].trim();
                if !strip_html(content).is_empty() {
                    index += 1;
                    let kind = if ordered {
                        BlockKind::OrderedItem
                    } else {
                        BlockKind::UnorderedItem
                    };
                    blocks.push(ContentBlock {
                        kind,
                        content: content.to_string(),
                        list_index: ordered.then_some(index),
                    });
                }
                pos = next;
            }
            Some(token) => pos = token.end,
            None => pos = at + 1,
        }
    }
}

/// Turn the accumulated bare-text run into a paragraph if it has any content
fn flush_text_run(run: &mut String, blocks: &mut Vec<ContentBlock>) {
    if !run.is_empty() {
        push_block(ContentBlock::new(BlockKind::Paragraph, run.trim()), blocks);
        run.clear();
    }
}

fn push_block(block: ContentBlock, blocks: &mut Vec<ContentBlock>) {
    if !strip_html(&block.content).is_empty() {
        blocks.push(block);
    }
}

/// Last resort: split on paragraph/line-break markers and keep plain text
fn fallback_paragraphs(html: &str) -> Vec<ContentBlock> {
    separator_regex()
        .split(html)
        .filter_map(|fragment| {
            let text = strip_html(fragment);
            (!text.is_empty()).then(|| ContentBlock::new(BlockKind::Paragraph, text))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_and_list() {
        let blocks = parse_blocks("<h1>Title</h1><ul><li>a</li><li>b</li></ul>");

        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].kind, BlockKind::Heading1);
        assert_eq!(blocks[0].content, "Title");
        assert_eq!(blocks[1].kind, BlockKind::UnorderedItem);
        assert_eq!(blocks[1].content, "a");
        assert_eq!(blocks[2].kind, BlockKind::UnorderedItem);
        assert_eq!(blocks[2].content, "b");
    }

    #[test]
    fn test_paragraph_keeps_inline_markup() {
        let blocks = parse_blocks("<p>Hello <b>world</b></p>");

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::Paragraph);
        assert_eq!(blocks[0].content, "Hello <b>world</b>");
    }

    #[test]
    fn test_plain_text_becomes_single_paragraph() {
        let blocks = parse_blocks("  just some text  ");

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::Paragraph);
        assert_eq!(blocks[0].content, "just some text");
    }

    #[test]
    fn test_ordered_list_indices_are_one_based() {
        let blocks = parse_blocks("<ol><li>first</li><li>second</li><li>third</li></ol>");

        assert_eq!(blocks.len(), 3);
        for (i, block) in blocks.iter().enumerate() {
            assert_eq!(block.kind, BlockKind::OrderedItem);
            assert_eq!(block.list_index, Some(i + 1));
        }
    }

    #[test]
    fn test_unordered_items_have_no_index() {
        let blocks = parse_blocks("<ul><li>x</li></ul>");
        assert_eq!(blocks[0].list_index, None);
    }

    #[test]
    fn test_heading_levels() {
        let blocks = parse_blocks("<h1>a</h1><h2>b</h2><h3>c</h3>");
        assert_eq!(blocks[0].kind, BlockKind::Heading1);
        assert_eq!(blocks[1].kind, BlockKind::Heading2);
        assert_eq!(blocks[2].kind, BlockKind::Heading3);
    }

    #[test]
    fn test_blockquote() {
        let blocks = parse_blocks("<blockquote>wise words</blockquote>");
        assert_eq!(blocks[0].kind, BlockKind::Blockquote);
        assert_eq!(blocks[0].content, "wise words");
    }

    #[test]
    fn test_code_block_is_fully_stripped() {
        let blocks = parse_blocks("<pre>let x = <b>1</b>;</pre>");

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::CodeBlock);
        assert_eq!(blocks[0].content, "let x = 1;");
    }

    #[test]
    fn test_standalone_li_outside_list() {
        let blocks = parse_blocks("<li>orphan item</li>");

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::UnorderedItem);
        assert_eq!(blocks[0].content, "orphan item");
        assert_eq!(blocks[0].list_index, None);
    }

    #[test]
    fn test_br_separates_text_runs() {
        let blocks = parse_blocks("first line<br>second line");

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].content, "first line");
        assert_eq!(blocks[1].content, "second line");
    }

    #[test]
    fn test_text_between_blocks_becomes_paragraph() {
        let blocks = parse_blocks("<h1>Head</h1>loose text<p>para</p>");

        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[1].kind, BlockKind::Paragraph);
        assert_eq!(blocks[1].content, "loose text");
    }

    #[test]
    fn test_unclosed_inline_tag_does_not_fail() {
        let blocks = parse_blocks("<b>unclosed");

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::Paragraph);
        assert!(blocks[0].content.contains("unclosed"));
    }

    #[test]
    fn test_unclosed_block_tag_runs_to_end() {
        let blocks = parse_blocks("<p>never closed");

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "never closed");
    }

    #[test]
    fn test_empty_input_yields_no_blocks() {
        assert!(parse_blocks("").is_empty());
        assert!(parse_blocks("   ").is_empty());
    }

    #[test]
    fn test_empty_paragraphs_are_skipped() {
        let blocks = parse_blocks("<p></p><p>real</p><p>&nbsp;</p>");

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "real");
    }

    #[test]
    fn test_stray_close_tags_are_tolerated() {
        let blocks = parse_blocks("</p>text</ul>");

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "text");
    }

    #[test]
    fn test_literal_less_than_is_text() {
        let blocks = parse_blocks("a < b and c");

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "a < b and c");
    }

    #[test]
    fn test_quill_style_document() {
        let html = "<h2>Day one</h2><p>It <i>rained</i>.</p>\
                    <ol><li>pack</li><li>travel</li></ol><blockquote>quote</blockquote>";
        let blocks = parse_blocks(html);

        let kinds: Vec<BlockKind> = blocks.iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Heading2,
                BlockKind::Paragraph,
                BlockKind::OrderedItem,
                BlockKind::OrderedItem,
                BlockKind::Blockquote,
            ]
        );
    }
}
