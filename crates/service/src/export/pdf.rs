use printpdf::{BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference, Point};

use models::{attendee, event};

use crate::errors::ServiceError;

use super::RosterExport;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

// A4 portrait, millimetres; cursor runs top-down like the printed page.
const PAGE_W: f32 = 210.0;
const PAGE_H: f32 = 297.0;
const MARGIN: f32 = 10.0;
// No rows below this guard; the next row opens a fresh page.
const BOTTOM_GUARD: f32 = 20.0;

const ROW_H: f32 = 10.0;
const CELL_PAD: f32 = 1.0;
const COL_WIDTHS: [f32; 4] = [40.0, 35.0, 35.0, 45.0];
// Address is deliberately absent here; the spreadsheet is the full record.
const COL_HEADERS: [&str; 4] = ["Name", "Phone", "Parent Ph", "Email"];

const TITLE_PT: f32 = 12.0;
const BODY_PT: f32 = 10.0;

/// Clip to `max` characters: longer text keeps the first `keep` characters
/// and gains a `..` marker. Counted in characters, not measured width, so the
/// fixed column widths hold for any input.
fn clip(text: &str, max: usize, keep: usize) -> String {
    if text.chars().count() > max {
        let mut clipped: String = text.chars().take(keep).collect();
        clipped.push_str("..");
        clipped
    } else {
        text.to_string()
    }
}

/// The four printed cells for one attendee. Phones go out verbatim.
fn row_cells(a: &attendee::Model) -> [String; 4] {
    [
        clip(&a.name, 20, 18),
        a.phone.clone().unwrap_or_default(),
        a.parent_phone.clone().unwrap_or_default(),
        a.email.as_deref().map(|e| clip(e, 25, 23)).unwrap_or_default(),
    ]
}

/// Builtin font metrics are not exposed; centring approximates the Helvetica
/// advance at half the point size per character.
fn text_width_mm(text: &str, size_pt: f32) -> f32 {
    const PT_TO_MM: f32 = 0.352_778;
    text.chars().count() as f32 * size_pt * 0.5 * PT_TO_MM
}

struct PageWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y: f32,
}

impl PageWriter {
    fn new(doc_title: &str) -> Result<Self, ServiceError> {
        let (doc, page, layer) = PdfDocument::new(doc_title, Mm(PAGE_W), Mm(PAGE_H), "Layer 1");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ServiceError::Export(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ServiceError::Export(e.to_string()))?;
        let layer = doc.get_page(page).get_layer(layer);
        layer.set_outline_thickness(0.75);
        Ok(Self { doc, layer, regular, bold, y: MARGIN })
    }

    fn break_page_if_needed(&mut self) {
        if self.y + ROW_H > PAGE_H - BOTTOM_GUARD {
            let (page, layer) = self.doc.add_page(Mm(PAGE_W), Mm(PAGE_H), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.layer.set_outline_thickness(0.75);
            self.y = MARGIN;
        }
    }

    /// Centered full-width line without a border, advancing one row.
    fn centered_line(&mut self, text: &str, size: f32) {
        let width = text_width_mm(text, size);
        let x = MARGIN + (PAGE_W - 2.0 * MARGIN - width) / 2.0;
        self.text(text, size, false, x, self.y + ROW_H - 3.5);
        self.y += ROW_H;
    }

    /// One bordered four-column row at the cursor, advancing one row.
    fn table_row(&mut self, cells: &[String; 4], bold: bool) {
        self.break_page_if_needed();
        let mut x = MARGIN;
        for (cell, width) in cells.iter().zip(COL_WIDTHS) {
            self.cell_border(x, self.y, width, ROW_H);
            self.text(cell, BODY_PT, bold, x + CELL_PAD, self.y + ROW_H - 3.5);
            x += width;
        }
        self.y += ROW_H;
    }

    fn text(&self, text: &str, size: f32, bold: bool, x: f32, baseline_from_top: f32) {
        if text.is_empty() {
            return;
        }
        let font = if bold { &self.bold } else { &self.regular };
        // pdf y runs bottom-up; flip the top-down cursor
        self.layer.use_text(text, size, Mm(x), Mm(PAGE_H - baseline_from_top), font);
    }

    fn cell_border(&self, x: f32, y_top: f32, width: f32, height: f32) {
        let y = PAGE_H - y_top;
        let points = vec![
            (Point::new(Mm(x), Mm(y)), false),
            (Point::new(Mm(x + width), Mm(y)), false),
            (Point::new(Mm(x + width), Mm(y - height)), false),
            (Point::new(Mm(x), Mm(y - height)), false),
        ];
        self.layer.add_line(Line { points, is_closed: true });
    }
}

/// Serialize the roster as a paginated, fixed-column printable document.
pub fn pdf_roster(event: &event::Model, attendees: &[attendee::Model]) -> Result<RosterExport, ServiceError> {
    let mut writer = PageWriter::new(&event.title)?;

    writer.centered_line(&format!("Event: {}", event.title), TITLE_PT);
    writer.centered_line(&format!("Date: {}", event.date), TITLE_PT);
    writer.y += ROW_H;

    let headers = COL_HEADERS.map(str::to_string);
    writer.table_row(&headers, true);
    for a in attendees {
        writer.table_row(&row_cells(a), false);
    }

    let bytes = writer.doc.save_to_bytes().map_err(|e| ServiceError::Export(e.to_string()))?;
    Ok(RosterExport {
        filename: format!("{}_attendees.pdf", event.title),
        content_type: PDF_CONTENT_TYPE,
        bytes,
    })
}
