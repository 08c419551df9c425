//! Entry document composition: cover page, entry header, metadata panel,
//! and the rich-text block flow

use super::layout::{
    FontVariant, InlineRun, PageComposer, CONTENT_WIDTH_MM, MARGIN_MM, PT_TO_MM,
};
use super::theme;
use crate::domain::entry::JournalEntry;
use crate::domain::mood::format_mood_name;
use crate::domain::richtext::{parse_blocks, parse_inline, BlockKind, ContentBlock, RgbColor};
use chrono::Local;

const PANEL_PADDING_MM: f32 = 5.0;

/// Cover page for a multi-entry export
pub(crate) fn compose_cover(composer: &mut PageComposer, entries: &[JournalEntry]) {
    composer.advance(35.0);

    composer.advance(12.0);
    composer.draw_text_centered(
        composer.cursor(),
        "Memoir",
        FontVariant::Bold,
        32.0,
        theme::ACCENT,
    );

    composer.advance(14.0);
    composer.draw_text_centered(
        composer.cursor(),
        "Exported Entries",
        FontVariant::Regular,
        18.0,
        theme::MUTED,
    );

    composer.advance(18.0);
    composer.draw_text_centered(
        composer.cursor(),
        &format!("{} entries", entries.len()),
        FontVariant::Regular,
        14.0,
        theme::MUTED,
    );

    let date_range = match (
        entries.iter().min_by_key(|e| e.created_at),
        entries.iter().max_by_key(|e| e.created_at),
    ) {
        (Some(first), Some(last)) => format!(
            "{} - {}",
            first.formatted_created_date(),
            last.formatted_created_date()
        ),
        _ => "No entries".to_string(),
    };
    composer.advance(8.0);
    composer.draw_text_centered(
        composer.cursor(),
        &date_range,
        FontVariant::Regular,
        12.0,
        theme::MUTED,
    );

    composer.advance(18.0);
    composer.draw_text_centered(
        composer.cursor(),
        &format!("Generated: {}", Local::now().format("%B %d, %Y")),
        FontVariant::Regular,
        10.0,
        theme::FAINT,
    );
}

/// One entry: header, metadata panel, content body
pub(crate) fn compose_entry(composer: &mut PageComposer, entry: &JournalEntry) {
    compose_header(composer, entry);
    compose_meta_panel(composer, entry);

    let blocks = parse_blocks(&entry.content);
    if blocks.is_empty() {
        composer.advance(4.0);
        composer.write_paragraph(
            &[InlineRun::plain("No content", FontVariant::Italic, theme::MUTED)],
            11.0,
            1.6,
            0.0,
        );
        return;
    }

    composer.advance(4.0);
    for block in &blocks {
        compose_block(composer, block);
    }
}

fn compose_header(composer: &mut PageComposer, entry: &JournalEntry) {
    composer.write_paragraph(
        &[InlineRun::plain(
            entry.display_title(),
            FontVariant::Bold,
            theme::INK_DARK,
        )],
        24.0,
        1.25,
        0.0,
    );

    composer.advance(2.0);
    let date_line = format!(
        "{} at {}",
        entry.local_created().format("%A, %B %-d, %Y"),
        entry.formatted_time()
    );
    composer.write_paragraph(
        &[InlineRun::plain(date_line, FontVariant::Regular, theme::MUTED)],
        12.0,
        1.3,
        0.0,
    );

    composer.advance(3.0);
    composer.ensure_room(2.0);
    composer.hline(MARGIN_MM, composer.cursor(), CONTENT_WIDTH_MM, 2.0, theme::ACCENT);
    composer.advance(6.0);
}

fn compose_meta_panel(composer: &mut PageComposer, entry: &JournalEntry) {
    let mut moods = format_mood_name(&entry.primary_mood);
    for secondary in [&entry.secondary_mood1, &entry.secondary_mood2] {
        if let Some(mood) = secondary {
            if !mood.is_empty() {
                moods.push_str(", ");
                moods.push_str(&format_mood_name(mood));
            }
        }
    }

    let category = entry
        .category_name
        .clone()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "None".to_string());
    let tags = if entry.tag_names.is_empty() {
        "None".to_string()
    } else {
        entry.tag_names.join(", ")
    };

    let rows = [
        [("Mood", moods), ("Word Count", format!("{} words", entry.word_count()))],
        [("Category", category), ("Tags", tags)],
    ];

    let column_width = (CONTENT_WIDTH_MM - 2.0 * PANEL_PADDING_MM) / 2.0;
    let label_height = 10.0 * 1.4 * PT_TO_MM;
    let value_line = 12.0 * 1.4 * PT_TO_MM;
    let row_gap = 3.0;

    // Measure before drawing so the panel background fits its content.
    let mut row_heights = [0.0f32; 2];
    for (i, row) in rows.iter().enumerate() {
        let lines = row
            .iter()
            .map(|(_, value)| {
                let runs = [InlineRun::plain(value.clone(), FontVariant::Regular, theme::INK)];
                PageComposer::measure_lines(&runs, 12.0, column_width - 4.0)
            })
            .max()
            .unwrap_or(1);
        row_heights[i] = label_height + lines as f32 * value_line + row_gap;
    }
    let panel_height = 2.0 * PANEL_PADDING_MM + row_heights.iter().sum::<f32>();

    composer.ensure_room(panel_height.min(composer.page_room()));
    let top = composer.cursor();
    composer.fill_rect(
        MARGIN_MM,
        top - panel_height,
        CONTENT_WIDTH_MM,
        panel_height,
        theme::PANEL,
    );

    composer.advance(PANEL_PADDING_MM);
    for row in &rows {
        let row_top = composer.cursor();
        let mut row_bottom = composer.cursor();
        for (column, (label, value)) in row.iter().enumerate() {
            composer.set_cursor(row_top);
            let indent = PANEL_PADDING_MM + column as f32 * column_width;
            composer.write_column(
                &[InlineRun::plain(*label, FontVariant::Bold, theme::MUTED)],
                10.0,
                1.4,
                indent,
                column_width - 4.0,
            );
            composer.write_column(
                &[InlineRun::plain(value.clone(), FontVariant::Regular, theme::INK)],
                12.0,
                1.4,
                indent,
                column_width - 4.0,
            );
            row_bottom = row_bottom.min(composer.cursor());
        }
        composer.set_cursor(row_bottom - 3.0);
    }
    composer.set_cursor((top - panel_height).min(composer.cursor()));
}

/// Map a block to its visual treatment and write it
fn compose_block(composer: &mut PageComposer, block: &ContentBlock) {
    match block.kind {
        BlockKind::Heading1 => compose_heading(composer, block, 18.0),
        BlockKind::Heading2 => compose_heading(composer, block, 15.0),
        BlockKind::Heading3 => compose_heading(composer, block, 13.0),
        BlockKind::Paragraph => {
            composer.advance(2.0);
            let runs = styled_runs(&block.content, false, false, theme::INK);
            composer.write_paragraph(&runs, 11.0, 1.6, 0.0);
        }
        BlockKind::OrderedItem | BlockKind::UnorderedItem => compose_list_item(composer, block),
        BlockKind::Blockquote => compose_blockquote(composer, block),
        BlockKind::CodeBlock => compose_code_block(composer, block),
    }
}

fn compose_heading(composer: &mut PageComposer, block: &ContentBlock, size: f32) {
    composer.advance(3.5);
    let runs = styled_runs(&block.content, true, false, theme::INK_DARK);
    composer.write_paragraph(&runs, size, 1.3, 0.0);
}

fn compose_list_item(composer: &mut PageComposer, block: &ContentBlock) {
    composer.advance(1.2);
    let marker = match block.list_index {
        Some(index) => format!("{}.", index),
        None => "\u{2022}".to_string(),
    };

    let line_height = 11.0 * 1.5 * PT_TO_MM;
    composer.ensure_room(line_height);
    let marker_baseline = composer.cursor() - line_height;
    composer.draw_text(
        MARGIN_MM + 1.5,
        marker_baseline,
        &marker,
        FontVariant::Regular,
        11.0,
        theme::INK,
    );

    let runs = styled_runs(&block.content, false, false, theme::INK);
    composer.write_paragraph(&runs, 11.0, 1.5, 8.0);
}

fn compose_blockquote(composer: &mut PageComposer, block: &ContentBlock) {
    composer.advance(2.5);
    let runs = styled_runs(&block.content, false, true, theme::INK);

    let padding = 2.5;
    let indent = 6.0;
    let line_height = 11.0 * 1.5 * PT_TO_MM;
    let lines = PageComposer::measure_lines(&runs, 11.0, CONTENT_WIDTH_MM - indent);
    let height = lines as f32 * line_height + 2.0 * padding;

    if height <= composer.page_room() {
        composer.ensure_room(height);
        let top = composer.cursor();
        composer.fill_rect(MARGIN_MM, top - height, CONTENT_WIDTH_MM, height, theme::QUOTE_TINT);
        composer.fill_rect(MARGIN_MM, top - height, 1.5, height, theme::ACCENT);
        composer.advance(padding);
        composer.write_paragraph(&runs, 11.0, 1.5, indent);
        composer.set_cursor(top - height);
    } else {
        // Too tall for one page; keep the italic voice, drop the panel.
        composer.write_paragraph(&runs, 11.0, 1.5, indent);
    }
}

fn compose_code_block(composer: &mut PageComposer, block: &ContentBlock) {
    composer.advance(2.5);
    let runs = [InlineRun::plain(block.content.clone(), FontVariant::Mono, theme::INK)];

    let padding = 3.0;
    let indent = 4.0;
    let line_height = 10.0 * 1.4 * PT_TO_MM;
    let lines = PageComposer::measure_lines(&runs, 10.0, CONTENT_WIDTH_MM - indent);
    let height = lines as f32 * line_height + 2.0 * padding;

    if height <= composer.page_room() {
        composer.ensure_room(height);
        let top = composer.cursor();
        composer.fill_rect(MARGIN_MM, top - height, CONTENT_WIDTH_MM, height, theme::PANEL);
        composer.advance(padding);
        composer.write_paragraph(&runs, 10.0, 1.4, indent);
        composer.set_cursor(top - height);
    } else {
        composer.write_paragraph(&runs, 10.0, 1.4, indent);
    }
}

/// Run the inline style parser and lift segments into layout runs
fn styled_runs(
    content: &str,
    base_bold: bool,
    base_italic: bool,
    base_color: RgbColor,
) -> Vec<InlineRun> {
    parse_inline(content)
        .into_iter()
        .map(|segment| InlineRun {
            variant: FontVariant::styled(segment.bold || base_bold, segment.italic || base_italic),
            color: segment.color.unwrap_or(base_color),
            background: segment.background,
            underline: segment.underline,
            strikethrough: segment.strikethrough,
            text: segment.text,
        })
        .collect()
}
