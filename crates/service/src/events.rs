use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, TransactionTrait};
use serde::Deserialize;
use tracing::{info, instrument};

use models::{attendee, event};

use crate::errors::ServiceError;

/// Form input for creating or fully replacing an event.
#[derive(Debug, Clone, Deserialize)]
pub struct EventInput {
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub description: Option<String>,
}

pub async fn create_event(db: &DatabaseConnection, input: &EventInput) -> Result<event::Model, ServiceError> {
    let created = event::create(db, &input.title, &input.date, input.description.as_deref()).await?;
    info!(event_id = created.id, "event_created");
    Ok(created)
}

/// All events, ordered by the literal date text.
pub async fn list_events(db: &DatabaseConnection) -> Result<Vec<event::Model>, ServiceError> {
    Ok(event::list_by_date(db).await?)
}

pub async fn get_event(db: &DatabaseConnection, id: i32) -> Result<event::Model, ServiceError> {
    event::find(db, id).await?.ok_or_else(|| ServiceError::not_found("event"))
}

/// An event together with its roster in insertion order.
pub async fn get_event_with_attendees(
    db: &DatabaseConnection,
    id: i32,
) -> Result<(event::Model, Vec<attendee::Model>), ServiceError> {
    let ev = get_event(db, id).await?;
    let roster = attendee::list_by_event(db, ev.id).await?;
    Ok((ev, roster))
}

pub async fn update_event(db: &DatabaseConnection, id: i32, input: &EventInput) -> Result<event::Model, ServiceError> {
    let updated = event::update(db, id, &input.title, &input.date, input.description.as_deref()).await?;
    updated.ok_or_else(|| ServiceError::not_found("event"))
}

/// Delete an event together with its whole roster: children first, parent
/// second, inside one transaction. A failure of either step leaves both in
/// place. Returns the number of attendees removed.
#[instrument(skip(db))]
pub async fn delete_event(db: &DatabaseConnection, id: i32) -> Result<u64, ServiceError> {
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;

    let found = event::Entity::find_by_id(id)
        .one(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("event"))?;

    let removed = attendee::Entity::delete_many()
        .filter(attendee::Column::EventId.eq(found.id))
        .exec(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .rows_affected;

    event::Entity::delete_by_id(found.id)
        .exec(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;

    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(event_id = id, attendees_removed = removed, "event_deleted");
    Ok(removed)
}
