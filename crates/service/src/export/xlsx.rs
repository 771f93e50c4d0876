use rust_xlsxwriter::Workbook;

use models::{attendee, event};

use crate::errors::ServiceError;

use super::RosterExport;

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const SHEET_NAME: &str = "Attendees";
const HEADERS: [&str; 5] = ["Name", "Phone", "Parent Phone", "Email", "Address"];

/// One spreadsheet row per attendee, columns in header order. Absent optional
/// fields become empty cells, never the text "None".
fn roster_rows(attendees: &[attendee::Model]) -> Vec<[String; 5]> {
    attendees
        .iter()
        .map(|a| {
            [
                a.name.clone(),
                a.phone.clone().unwrap_or_default(),
                a.parent_phone.clone().unwrap_or_default(),
                a.email.clone().unwrap_or_default(),
                a.address.clone().unwrap_or_default(),
            ]
        })
        .collect()
}

/// Serialize the roster as a single-sheet workbook.
pub fn excel_roster(event: &event::Model, attendees: &[attendee::Model]) -> Result<RosterExport, ServiceError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME).map_err(|e| ServiceError::Export(e.to_string()))?;

    for (col, header) in HEADERS.iter().enumerate() {
        sheet
            .write_string(0, col as u16, *header)
            .map_err(|e| ServiceError::Export(e.to_string()))?;
    }
    for (row, cells) in roster_rows(attendees).iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            sheet
                .write_string(row as u32 + 1, col as u16, cell.as_str())
                .map_err(|e| ServiceError::Export(e.to_string()))?;
        }
    }

    let bytes = workbook.save_to_buffer().map_err(|e| ServiceError::Export(e.to_string()))?;
    Ok(RosterExport {
        filename: format!("{}_attendees.xlsx", event.title),
        content_type: XLSX_CONTENT_TYPE,
        bytes,
    })
}
