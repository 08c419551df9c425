//! Page composition primitives over printpdf
//!
//! A thin layout engine: top-down cursor on A4 pages, word-wrapped styled
//! text, filled rectangles and rules, and a page-number footer stamped onto
//! every page when the document is finished.

use crate::domain::richtext::RgbColor;
use crate::error::{MemoirError, Result};
use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerIndex, PdfLayerReference, PdfPageIndex, Point, Rect, Rgb,
};

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
/// 40 pt page margin
pub const MARGIN_MM: f32 = 14.11;
pub const CONTENT_WIDTH_MM: f32 = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
pub const PT_TO_MM: f32 = 0.352_778;

/// Space above the bottom margin reserved for the footer
const FOOTER_CLEARANCE_MM: f32 = 6.0;
const FOOTER_BASELINE_MM: f32 = 8.0;

/// Which of the document fonts a run uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontVariant {
    Regular,
    Bold,
    Italic,
    BoldItalic,
    Mono,
}

impl FontVariant {
    pub fn styled(bold: bool, italic: bool) -> Self {
        match (bold, italic) {
            (true, true) => FontVariant::BoldItalic,
            (true, false) => FontVariant::Bold,
            (false, true) => FontVariant::Italic,
            (false, false) => FontVariant::Regular,
        }
    }

    /// Average glyph width as a fraction of the font size.
    ///
    /// Helvetica metrics are approximated; Courier is genuinely fixed-pitch.
    fn width_factor(&self) -> f32 {
        match self {
            FontVariant::Regular | FontVariant::Italic => 0.50,
            FontVariant::Bold | FontVariant::BoldItalic => 0.53,
            FontVariant::Mono => 0.60,
        }
    }
}

/// One styled piece of a paragraph
#[derive(Debug, Clone, PartialEq)]
pub struct InlineRun {
    pub text: String,
    pub variant: FontVariant,
    pub color: RgbColor,
    pub background: Option<RgbColor>,
    pub underline: bool,
    pub strikethrough: bool,
}

impl InlineRun {
    pub fn plain(text: impl Into<String>, variant: FontVariant, color: RgbColor) -> Self {
        InlineRun {
            text: text.into(),
            variant,
            color,
            background: None,
            underline: false,
            strikethrough: false,
        }
    }
}

/// Estimated width of a text run in millimeters
pub fn text_width_mm(text: &str, variant: FontVariant, size_pt: f32) -> f32 {
    text.chars().count() as f32 * size_pt * variant.width_factor() * PT_TO_MM
}

/// A wrapped chunk placed on one line
#[derive(Debug, Clone)]
struct Chunk {
    text: String,
    variant: FontVariant,
    color: RgbColor,
    background: Option<RgbColor>,
    underline: bool,
    strikethrough: bool,
    width: f32,
}

/// Word-wrap runs into lines fitting `max_width` millimeters
fn wrap_runs(runs: &[InlineRun], size_pt: f32, max_width: f32) -> Vec<Vec<Chunk>> {
    let mut lines: Vec<Vec<Chunk>> = Vec::new();
    let mut current: Vec<Chunk> = Vec::new();
    let mut x = 0.0f32;

    fn flush(current: &mut Vec<Chunk>, lines: &mut Vec<Vec<Chunk>>) {
        lines.push(std::mem::take(current));
    }

    for run in runs {
        for (i, paragraph_line) in run.text.split('\n').enumerate() {
            if i > 0 {
                flush(&mut current, &mut lines);
                x = 0.0;
            }
            for word in paragraph_line.split_inclusive(' ') {
                let mut word = word;
                let mut width = text_width_mm(word, run.variant, size_pt);
                if x + width > max_width && !current.is_empty() {
                    flush(&mut current, &mut lines);
                    x = 0.0;
                    word = word.trim_start();
                    width = text_width_mm(word, run.variant, size_pt);
                }
                if word.is_empty() {
                    continue;
                }
                // Merge into the previous chunk when the style is unchanged.
                match current.last_mut() {
                    Some(last)
                        if last.variant == run.variant
                            && last.color == run.color
                            && last.background == run.background
                            && last.underline == run.underline
                            && last.strikethrough == run.strikethrough =>
                    {
                        last.text.push_str(word);
                        last.width += width;
                    }
                    _ => current.push(Chunk {
                        text: word.to_string(),
                        variant: run.variant,
                        color: run.color,
                        background: run.background,
                        underline: run.underline,
                        strikethrough: run.strikethrough,
                        width,
                    }),
                }
                x += width;
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

struct FontSet {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    oblique: IndirectFontRef,
    bold_oblique: IndirectFontRef,
    mono: IndirectFontRef,
}

impl FontSet {
    fn get(&self, variant: FontVariant) -> &IndirectFontRef {
        match variant {
            FontVariant::Regular => &self.regular,
            FontVariant::Bold => &self.bold,
            FontVariant::Italic => &self.oblique,
            FontVariant::BoldItalic => &self.bold_oblique,
            FontVariant::Mono => &self.mono,
        }
    }
}

fn pdf_color(color: RgbColor) -> Color {
    Color::Rgb(Rgb::new(
        color.r as f32 / 255.0,
        color.g as f32 / 255.0,
        color.b as f32 / 255.0,
        None,
    ))
}

/// Cursor-based composer for a multi-page A4 document
pub struct PageComposer {
    doc: PdfDocumentReference,
    pages: Vec<(PdfPageIndex, PdfLayerIndex)>,
    fonts: FontSet,
    /// Current baseline, millimeters from the bottom edge
    y: f32,
}

impl PageComposer {
    pub fn new(title: &str) -> Result<Self> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");
        let load = |font: BuiltinFont| -> Result<IndirectFontRef> {
            doc.add_builtin_font(font)
                .map_err(|e| MemoirError::Export(e.to_string()))
        };
        let fonts = FontSet {
            regular: load(BuiltinFont::Helvetica)?,
            bold: load(BuiltinFont::HelveticaBold)?,
            oblique: load(BuiltinFont::HelveticaOblique)?,
            bold_oblique: load(BuiltinFont::HelveticaBoldOblique)?,
            mono: load(BuiltinFont::Courier)?,
        };

        Ok(PageComposer {
            doc,
            pages: vec![(page, layer)],
            fonts,
            y: PAGE_HEIGHT_MM - MARGIN_MM,
        })
    }

    fn layer(&self) -> PdfLayerReference {
        let (page, layer) = self.pages[self.pages.len() - 1];
        self.doc.get_page(page).get_layer(layer)
    }

    /// Start a fresh page and reset the cursor below the top margin
    pub fn new_page(&mut self) {
        let (page, layer) = self
            .doc
            .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");
        self.pages.push((page, layer));
        self.y = PAGE_HEIGHT_MM - MARGIN_MM;
    }

    /// Break to a new page unless `needed` millimeters fit above the footer
    pub fn ensure_room(&mut self, needed: f32) {
        if self.y - needed < MARGIN_MM + FOOTER_CLEARANCE_MM {
            self.new_page();
        }
    }

    pub fn cursor(&self) -> f32 {
        self.y
    }

    /// Move the cursor down
    pub fn advance(&mut self, dy: f32) {
        self.y -= dy;
    }

    /// Place the cursor at an absolute height on the current page
    pub fn set_cursor(&mut self, y: f32) {
        self.y = y;
    }

    /// Full content height of an empty page
    pub fn page_room(&self) -> f32 {
        PAGE_HEIGHT_MM - 2.0 * MARGIN_MM - FOOTER_CLEARANCE_MM
    }

    /// Draw text at an absolute position; does not move the cursor
    pub fn draw_text(
        &self,
        x: f32,
        y: f32,
        text: &str,
        variant: FontVariant,
        size_pt: f32,
        color: RgbColor,
    ) {
        let layer = self.layer();
        layer.set_fill_color(pdf_color(color));
        layer.use_text(text, size_pt, Mm(x), Mm(y), self.fonts.get(variant));
    }

    /// Draw text horizontally centered between the margins
    pub fn draw_text_centered(
        &self,
        y: f32,
        text: &str,
        variant: FontVariant,
        size_pt: f32,
        color: RgbColor,
    ) {
        let width = text_width_mm(text, variant, size_pt);
        let x = (PAGE_WIDTH_MM - width) / 2.0;
        self.draw_text(x, y, text, variant, size_pt, color);
    }

    /// Draw text so it ends at `right_x`
    pub fn draw_text_right(
        &self,
        right_x: f32,
        y: f32,
        text: &str,
        variant: FontVariant,
        size_pt: f32,
        color: RgbColor,
    ) {
        let width = text_width_mm(text, variant, size_pt);
        self.draw_text(right_x - width, y, text, variant, size_pt, color);
    }

    /// Fill a rectangle; `y` is the bottom edge
    pub fn fill_rect(&self, x: f32, y: f32, width: f32, height: f32, color: RgbColor) {
        let layer = self.layer();
        layer.set_fill_color(pdf_color(color));
        let rect = Rect::new(Mm(x), Mm(y), Mm(x + width), Mm(y + height))
            .with_mode(PaintMode::Fill);
        layer.add_rect(rect);
    }

    /// Stroke a horizontal rule
    pub fn hline(&self, x: f32, y: f32, width: f32, thickness_pt: f32, color: RgbColor) {
        let layer = self.layer();
        layer.set_outline_color(pdf_color(color));
        layer.set_outline_thickness(thickness_pt);
        let line = Line {
            points: vec![
                (Point::new(Mm(x), Mm(y)), false),
                (Point::new(Mm(x + width), Mm(y)), false),
            ],
            is_closed: false,
        };
        layer.add_line(line);
    }

    /// Number of lines `runs` occupy at the given size and width
    pub fn measure_lines(runs: &[InlineRun], size_pt: f32, max_width: f32) -> usize {
        wrap_runs(runs, size_pt, max_width).len()
    }

    /// Write a word-wrapped paragraph starting at the cursor, advancing it.
    ///
    /// Handles per-run backgrounds, underline and strikethrough decorations,
    /// and page breaks between lines.
    pub fn write_paragraph(
        &mut self,
        runs: &[InlineRun],
        size_pt: f32,
        line_height_mult: f32,
        indent: f32,
    ) {
        self.write_column(runs, size_pt, line_height_mult, indent, CONTENT_WIDTH_MM - indent);
    }

    /// Like [`write_paragraph`](Self::write_paragraph), but wrapped to an
    /// explicit column width instead of the full content width
    pub fn write_column(
        &mut self,
        runs: &[InlineRun],
        size_pt: f32,
        line_height_mult: f32,
        indent: f32,
        max_width: f32,
    ) {
        let line_height = size_pt * line_height_mult * PT_TO_MM;
        let ascent = size_pt * 0.72 * PT_TO_MM;

        for line in wrap_runs(runs, size_pt, max_width) {
            self.ensure_room(line_height);
            self.y -= line_height;
            let baseline = self.y;
            let mut x = MARGIN_MM + indent;

            for chunk in line {
                if let Some(background) = chunk.background {
                    self.fill_rect(
                        x,
                        baseline - 0.2 * ascent,
                        chunk.width,
                        ascent * 1.4,
                        background,
                    );
                }
                self.draw_text(x, baseline, &chunk.text, chunk.variant, size_pt, chunk.color);
                if chunk.underline {
                    self.hline(x, baseline - 0.7, chunk.width, 0.5, chunk.color);
                }
                if chunk.strikethrough {
                    self.hline(x, baseline + ascent * 0.35, chunk.width, 0.5, chunk.color);
                }
                x += chunk.width;
            }
        }
    }

    /// Stamp the footer on every page and produce the document bytes
    pub fn finish(self, footer_prefix: &str) -> Result<Vec<u8>> {
        let total = self.pages.len();
        for (number, (page, layer)) in self.pages.iter().enumerate() {
            let text = format!("{} | Page {} of {}", footer_prefix, number + 1, total);
            let width = text_width_mm(&text, FontVariant::Regular, 9.0);
            let layer = self.doc.get_page(*page).get_layer(*layer);
            layer.set_fill_color(pdf_color(RgbColor::new(0x9E, 0x9E, 0x9E)));
            layer.use_text(
                text,
                9.0,
                Mm((PAGE_WIDTH_MM - width) / 2.0),
                Mm(FOOTER_BASELINE_MM),
                &self.fonts.regular,
            );
        }

        self.doc
            .save_to_bytes()
            .map_err(|e| MemoirError::Export(e.to_string()))
    }
}
