//! Paginated PDF rendering
//!
//! Renders a normalized [`Document`] onto A4 portrait pages using the
//! builtin Helvetica and Courier faces. Layout is a single downward
//! pass: the title banner first, then each block in order, with page
//! breaks inserted whenever a pending write would cross the bottom
//! margin. Diagrams are rasterized through the injected
//! [`DiagramRasterizer`]; when rasterization fails the diagram source is
//! rendered in the code style instead, so one bad diagram never aborts
//! an export.

use notemark_ast::{
    plain_text, Block, DiagramBlock, Document, FormatType, Heading, Inline, List, ListKind,
    Paragraph, Quote,
};
use notemark_diagrams::{DiagramRasterizer, RasterImage};
use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, ColorBits, ColorSpace, Image, ImageTransform, ImageXObject,
    IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference, Point, Px,
    Rect, Rgb,
};

use crate::cursor::{PageCursor, CONTENT_WIDTH, FOOTER_Y, MARGIN, PAGE_HEIGHT, PAGE_WIDTH};
use crate::error::{PdfError, Result};
use crate::wrap::{text_width_mm, wrap_text, FontFace};

const TITLE_SIZE: f32 = 22.0;
const TITLE_LINE_HEIGHT: f32 = 10.0;
const TITLE_GAP: f32 = 6.0;
const RULE_GAP: f32 = 8.0;

const BODY_SIZE: f32 = 11.0;
const LINE_HEIGHT: f32 = 6.0;
const RUN_GAP: f32 = 2.0;
const PARAGRAPH_GAP: f32 = 3.0;

const CODE_SIZE: f32 = 9.0;
const CODE_LINE_HEIGHT: f32 = 5.0;
const CODE_PADDING: f32 = 6.0;

const QUOTE_GAP: f32 = 4.0;

const BULLET_INDENT: f32 = 2.0;
const LIST_TEXT_INDENT: f32 = 8.0;
const NESTED_INDENT: f32 = 6.0;
const ITEM_GAP: f32 = 1.0;
const LIST_GAP: f32 = 3.0;

const IMAGE_MAX_WIDTH: f32 = 150.0;
const IMAGE_GAP: f32 = 5.0;
const IMAGE_DPI: f32 = 96.0;
const MM_PER_INCH: f32 = 25.4;

const FOOTER_SIZE: f32 = 9.0;

// Grayscale intensities, 0.0 black to 1.0 white
const RULE_GRAY: f32 = 200.0 / 255.0;
const QUOTE_RULE_GRAY: f32 = 180.0 / 255.0;
const QUOTE_TEXT_GRAY: f32 = 120.0 / 255.0;
const CODE_BG_GRAY: f32 = 240.0 / 255.0;
const FOOTER_GRAY: f32 = 150.0 / 255.0;

/// Renders documents to paginated PDF bytes
///
/// The renderer is stateless between calls; per-document state lives in
/// an internal render session. A rasterizer is optional: without one,
/// diagrams are rendered as source listings.
pub struct PdfRenderer {
    rasterizer: Option<Box<dyn DiagramRasterizer>>,
}

impl Default for PdfRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfRenderer {
    /// Create a renderer without diagram support
    pub fn new() -> Self {
        Self { rasterizer: None }
    }

    /// Create a renderer that rasterizes diagrams with the given engine
    pub fn with_rasterizer(rasterizer: Box<dyn DiagramRasterizer>) -> Self {
        Self {
            rasterizer: Some(rasterizer),
        }
    }

    /// Render a document to PDF bytes
    pub fn render(&self, document: &Document) -> Result<Vec<u8>> {
        let (doc, page, layer) = PdfDocument::new(
            document.title.as_str(),
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            "Layer 1",
        );
        let fonts = Fonts::load(&doc)?;
        let layer = doc.get_page(page).get_layer(layer);

        let mut session = RenderSession {
            doc,
            layer,
            fonts,
            cursor: PageCursor::new(),
            rasterizer: self.rasterizer.as_deref(),
        };

        session.render_title(&document.title);
        for block in &document.blocks {
            session.render_block(block);
        }
        session.write_footer();

        session
            .doc
            .save_to_bytes()
            .map_err(|e| PdfError::Surface(e.to_string()))
    }
}

/// Render a document without diagram rasterization
pub fn render_pdf(document: &Document) -> Result<Vec<u8>> {
    PdfRenderer::new().render(document)
}

/// The builtin faces, registered once per document
struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    oblique: IndirectFontRef,
    mono: IndirectFontRef,
}

impl Fonts {
    fn load(doc: &PdfDocumentReference) -> Result<Self> {
        let add = |font: BuiltinFont| {
            doc.add_builtin_font(font)
                .map_err(|e| PdfError::Surface(e.to_string()))
        };
        Ok(Self {
            regular: add(BuiltinFont::Helvetica)?,
            bold: add(BuiltinFont::HelveticaBold)?,
            oblique: add(BuiltinFont::HelveticaOblique)?,
            mono: add(BuiltinFont::Courier)?,
        })
    }

    fn get(&self, face: FontFace) -> &IndirectFontRef {
        match face {
            FontFace::Helvetica => &self.regular,
            FontFace::HelveticaBold => &self.bold,
            FontFace::HelveticaOblique => &self.oblique,
            FontFace::Courier => &self.mono,
        }
    }
}

/// Per-document render state
struct RenderSession<'a> {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    fonts: Fonts,
    cursor: PageCursor,
    rasterizer: Option<&'a dyn DiagramRasterizer>,
}

impl RenderSession<'_> {
    /// Break the page first if `needed` millimeters no longer fit
    fn ensure_room(&mut self, needed: f32) {
        if self.cursor.needs_break(needed) {
            self.write_footer();
            let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.cursor.break_page();
        }
    }

    /// Centered page number at the bottom of the current page
    fn write_footer(&self) {
        let text = format!("Page {}", self.cursor.page());
        let width = text_width_mm(&text, FontFace::Helvetica, FOOTER_SIZE);
        let x = (PAGE_WIDTH - width) / 2.0;
        self.set_fill_gray(FOOTER_GRAY);
        self.layer.use_text(
            text,
            FOOTER_SIZE,
            Mm(x),
            Mm(PAGE_HEIGHT - FOOTER_Y),
            self.fonts.get(FontFace::Helvetica),
        );
        self.set_fill_gray(0.0);
    }

    fn set_fill_gray(&self, value: f32) {
        self.layer
            .set_fill_color(Color::Rgb(Rgb::new(value, value, value, None)));
    }

    fn set_stroke_gray(&self, value: f32, thickness: f32) {
        self.layer
            .set_outline_color(Color::Rgb(Rgb::new(value, value, value, None)));
        self.layer.set_outline_thickness(thickness);
    }

    /// Write pre-wrapped lines at `x`, breaking pages between lines
    fn draw_lines(&mut self, lines: &[String], face: FontFace, size: f32, x: f32, line_height: f32, gray: f32) {
        for line in lines {
            self.ensure_room(line_height);
            if !line.is_empty() {
                self.set_fill_gray(gray);
                self.layer.use_text(
                    line.as_str(),
                    size,
                    Mm(x),
                    Mm(PAGE_HEIGHT - self.cursor.y()),
                    self.fonts.get(face),
                );
            }
            self.cursor.advance(line_height);
        }
        self.set_fill_gray(0.0);
    }

    fn draw_horizontal_rule(&self, gray: f32, thickness: f32) {
        self.set_stroke_gray(gray, thickness);
        let y = Mm(PAGE_HEIGHT - self.cursor.y());
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(MARGIN), y), false),
                (Point::new(Mm(PAGE_WIDTH - MARGIN), y), false),
            ],
            is_closed: false,
        });
    }

    fn render_title(&mut self, title: &str) {
        let lines = wrap_text(title, FontFace::HelveticaBold, TITLE_SIZE, CONTENT_WIDTH);
        self.draw_lines(
            &lines,
            FontFace::HelveticaBold,
            TITLE_SIZE,
            MARGIN,
            TITLE_LINE_HEIGHT,
            0.0,
        );
        self.cursor.advance(TITLE_GAP);
        self.draw_horizontal_rule(RULE_GRAY, 0.3);
        self.cursor.advance(RULE_GAP);
    }

    fn render_block(&mut self, block: &Block) {
        match block {
            Block::Paragraph(paragraph) => self.render_paragraph(paragraph),
            Block::Heading(heading) => self.render_heading(heading),
            Block::List(list) => self.render_list(list, 0.0),
            Block::Quote(quote) => self.render_quote(quote),
            Block::Code(code) => self.render_code(&code.content),
            Block::Diagram(diagram) => self.render_diagram(diagram),
            Block::Rule => self.render_rule(),
        }
    }

    fn render_heading(&mut self, heading: &Heading) {
        let (size, advance) = match heading.level {
            1 => (18.0, 10.0),
            2 => (15.0, 9.0),
            _ => (13.0, 8.0),
        };
        let text = plain_text(&heading.inlines);
        let lines = wrap_text(&text, FontFace::HelveticaBold, size, CONTENT_WIDTH);
        self.draw_lines(&lines, FontFace::HelveticaBold, size, MARGIN, advance, 0.0);
    }

    /// Paragraphs render as a sequence of styled text runs; each run is
    /// wrapped independently in its own face
    fn render_paragraph(&mut self, paragraph: &Paragraph) {
        for (face, text) in text_runs(&paragraph.inlines) {
            let lines = wrap_text(&text, face, BODY_SIZE, CONTENT_WIDTH);
            if lines.is_empty() {
                continue;
            }
            self.draw_lines(&lines, face, BODY_SIZE, MARGIN, LINE_HEIGHT, 0.0);
            self.cursor.advance(RUN_GAP);
        }
        self.cursor.advance(PARAGRAPH_GAP);
    }

    fn render_list(&mut self, list: &List, indent: f32) {
        for (index, item) in list.items.iter().enumerate() {
            let text = item_text(&item.blocks);
            if !text.trim().is_empty() {
                let marker = match list.kind {
                    ListKind::Bulleted => "\u{2022}".to_string(),
                    ListKind::Numbered => format!("{}.", index + 1),
                };
                let lines = wrap_text(
                    &text,
                    FontFace::Helvetica,
                    BODY_SIZE,
                    CONTENT_WIDTH - LIST_TEXT_INDENT - indent,
                );
                self.ensure_room(LINE_HEIGHT);
                self.set_fill_gray(0.0);
                self.layer.use_text(
                    marker,
                    BODY_SIZE,
                    Mm(MARGIN + BULLET_INDENT + indent),
                    Mm(PAGE_HEIGHT - self.cursor.y()),
                    self.fonts.get(FontFace::Helvetica),
                );
                self.draw_lines(
                    &lines,
                    FontFace::Helvetica,
                    BODY_SIZE,
                    MARGIN + LIST_TEXT_INDENT + indent,
                    LINE_HEIGHT,
                    0.0,
                );
                self.cursor.advance(ITEM_GAP);
            }
            for block in &item.blocks {
                if let Block::List(nested) = block {
                    self.render_list(nested, indent + NESTED_INDENT);
                }
            }
        }
        self.cursor.advance(LIST_GAP);
    }

    /// Quotes are laid out in page-sized segments so the left rule can
    /// span each segment exactly
    fn render_quote(&mut self, quote: &Quote) {
        let text = item_text(&quote.blocks);
        let lines = wrap_text(
            &text,
            FontFace::HelveticaOblique,
            BODY_SIZE,
            CONTENT_WIDTH - 10.0,
        );
        let mut rest = lines.as_slice();
        while !rest.is_empty() {
            self.ensure_room(LINE_HEIGHT);
            let available = self.cursor.limit() - self.cursor.y();
            let fit = ((available / LINE_HEIGHT).floor() as usize).clamp(1, rest.len());
            let (chunk, tail) = rest.split_at(fit);

            let top = self.cursor.y();
            self.set_stroke_gray(QUOTE_RULE_GRAY, 0.5);
            let x = Mm(MARGIN + 2.0);
            self.layer.add_line(Line {
                points: vec![
                    (Point::new(x, Mm(PAGE_HEIGHT - (top - 4.0))), false),
                    (
                        Point::new(x, Mm(PAGE_HEIGHT - (top + chunk.len() as f32 * LINE_HEIGHT - 4.0))),
                        false,
                    ),
                ],
                is_closed: false,
            });
            self.draw_lines(
                chunk,
                FontFace::HelveticaOblique,
                BODY_SIZE,
                MARGIN + 6.0,
                LINE_HEIGHT,
                QUOTE_TEXT_GRAY,
            );
            rest = tail;
        }
        self.cursor.advance(QUOTE_GAP);
    }

    /// Code blocks are laid out in page-sized segments, each on its own
    /// shaded background
    fn render_code(&mut self, content: &str) {
        let lines = wrap_text(content, FontFace::Courier, CODE_SIZE, CONTENT_WIDTH - 8.0);
        let mut rest = lines.as_slice();
        while !rest.is_empty() {
            self.ensure_room(CODE_LINE_HEIGHT + CODE_PADDING);
            let available = self.cursor.limit() - self.cursor.y() - CODE_PADDING;
            let fit = ((available / CODE_LINE_HEIGHT).floor() as usize).clamp(1, rest.len());
            let (chunk, tail) = rest.split_at(fit);

            let top = self.cursor.y() - 3.0;
            let box_height = chunk.len() as f32 * CODE_LINE_HEIGHT + CODE_PADDING;
            self.set_fill_gray(CODE_BG_GRAY);
            self.layer.add_rect(
                Rect::new(
                    Mm(MARGIN),
                    Mm(PAGE_HEIGHT - (top + box_height)),
                    Mm(PAGE_WIDTH - MARGIN),
                    Mm(PAGE_HEIGHT - top),
                )
                .with_mode(PaintMode::Fill),
            );
            self.draw_lines(
                chunk,
                FontFace::Courier,
                CODE_SIZE,
                MARGIN + 4.0,
                CODE_LINE_HEIGHT,
                0.0,
            );
            self.cursor.advance(CODE_PADDING);
            rest = tail;
        }
    }

    fn render_diagram(&mut self, diagram: &DiagramBlock) {
        if let Some(rasterizer) = self.rasterizer {
            match rasterizer.rasterize(&diagram.source) {
                Ok(image) => {
                    self.draw_image(&image);
                    return;
                }
                Err(e) => log::warn!(
                    "diagram rasterization failed ({}), rendering source instead: {}",
                    rasterizer.name(),
                    e
                ),
            }
        } else {
            log::debug!("no rasterizer configured, rendering diagram source as code");
        }
        self.render_code(&diagram.source);
    }

    fn render_rule(&mut self) {
        self.ensure_room(RULE_GAP);
        self.draw_horizontal_rule(RULE_GRAY, 0.3);
        self.cursor.advance(RULE_GAP);
    }

    fn draw_image(&mut self, image: &RasterImage) {
        if image.width == 0 || image.height == 0 {
            return;
        }
        let ratio = image.aspect_ratio() as f32;
        let mut width = CONTENT_WIDTH.min(IMAGE_MAX_WIDTH);
        let mut height = width * ratio;
        // Clamp very tall diagrams to one page
        let usable = PAGE_HEIGHT - 2.0 * MARGIN - IMAGE_GAP;
        if height > usable {
            height = usable;
            width = height / ratio;
        }
        self.ensure_room(height + IMAGE_GAP);

        let native_width = image.width as f32 * MM_PER_INCH / IMAGE_DPI;
        let native_height = image.height as f32 * MM_PER_INCH / IMAGE_DPI;
        let xobject = ImageXObject {
            width: Px(image.width as usize),
            height: Px(image.height as usize),
            color_space: ColorSpace::Rgb,
            bits_per_component: ColorBits::Bit8,
            interpolate: true,
            image_data: image.pixels.clone(),
            image_filter: None,
            smask: None,
            clipping_bbox: None,
        };
        Image::from(xobject).add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(Mm(MARGIN)),
                translate_y: Some(Mm(PAGE_HEIGHT - (self.cursor.y() + height))),
                scale_x: Some(width / native_width),
                scale_y: Some(height / native_height),
                dpi: Some(IMAGE_DPI),
                ..Default::default()
            },
        );
        self.cursor.advance(height + IMAGE_GAP);
    }
}

/// Flatten inline content into styled runs, merging adjacent runs that
/// share a face
fn text_runs(inlines: &[Inline]) -> Vec<(FontFace, String)> {
    let mut runs = Vec::new();
    collect_runs(inlines, FontFace::Helvetica, &mut runs);
    runs
}

fn collect_runs(inlines: &[Inline], face: FontFace, runs: &mut Vec<(FontFace, String)>) {
    for inline in inlines {
        match inline {
            Inline::Text(text) => push_run(runs, face, text),
            Inline::Format(format, inner) => {
                let face = match format {
                    FormatType::Bold => FontFace::HelveticaBold,
                    FormatType::Italic => FontFace::HelveticaOblique,
                };
                collect_runs(std::slice::from_ref(inner), face, runs);
            }
            Inline::Span(children) => collect_runs(children, face, runs),
            Inline::Break => push_run(runs, face, "\n"),
        }
    }
}

fn push_run(runs: &mut Vec<(FontFace, String)>, face: FontFace, text: &str) {
    if let Some((last_face, last)) = runs.last_mut() {
        if *last_face == face {
            last.push_str(text);
            return;
        }
    }
    runs.push((face, text.to_string()));
}

/// Plain text of a block sub-sequence, used for list items and quotes
fn item_text(blocks: &[Block]) -> String {
    let mut parts = Vec::new();
    for block in blocks {
        match block {
            Block::Paragraph(paragraph) => parts.push(plain_text(&paragraph.inlines)),
            Block::Heading(heading) => parts.push(plain_text(&heading.inlines)),
            Block::Code(code) => parts.push(code.content.clone()),
            Block::Diagram(diagram) => parts.push(diagram.source.clone()),
            Block::Quote(quote) => parts.push(item_text(&quote.blocks)),
            Block::List(_) | Block::Rule => {}
        }
    }
    parts.join("\n")
}
