use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use service::events;
use service::export::{self, RosterExport};

use crate::errors::ApiError;
use crate::routes::auth::ServerState;

fn attachment(export: RosterExport) -> Response {
    (
        [
            (header::CONTENT_TYPE, export.content_type.to_string()),
            (header::CONTENT_DISPOSITION, format!("attachment; filename=\"{}\"", export.filename)),
        ],
        export.bytes,
    )
        .into_response()
}

#[utoipa::path(get, path = "/events/{id}/export/excel", tag = "exports", params(("id" = i32, Path, description = "Event id")), responses((status = 200, description = "Workbook download"), (status = 404, description = "Unknown event")))]
pub async fn excel(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Response, ApiError> {
    let (event, roster) = events::get_event_with_attendees(&state.db, id).await?;
    let export = export::excel_roster(&event, &roster)?;
    Ok(attachment(export))
}

#[utoipa::path(get, path = "/events/{id}/export/pdf", tag = "exports", params(("id" = i32, Path, description = "Event id")), responses((status = 200, description = "Printable roster download"), (status = 404, description = "Unknown event")))]
pub async fn pdf(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Response, ApiError> {
    let (event, roster) = events::get_event_with_attendees(&state.db, id).await?;
    let export = export::pdf_roster(&event, &roster)?;
    Ok(attachment(export))
}
