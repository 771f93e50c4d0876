use sea_orm::DatabaseConnection;
use serde::Deserialize;
use tracing::{info, instrument};

use models::attendee;

use crate::errors::ServiceError;
use crate::events;

/// Form input for registering or fully replacing an attendee. Only the name
/// is required.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendeeInput {
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub parent_phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Register a person for an event. The owning event must exist.
#[instrument(skip(db, input), fields(name = %input.name))]
pub async fn add_attendee(
    db: &DatabaseConnection,
    event_id: i32,
    input: &AttendeeInput,
) -> Result<attendee::Model, ServiceError> {
    let ev = events::get_event(db, event_id).await?;
    let created = attendee::create(
        db,
        ev.id,
        &input.name,
        input.phone.as_deref(),
        input.parent_phone.as_deref(),
        input.email.as_deref(),
        input.address.as_deref(),
    )
    .await?;
    info!(attendee_id = created.id, event_id = ev.id, "attendee_added");
    Ok(created)
}

pub async fn get_attendee(db: &DatabaseConnection, id: i32) -> Result<attendee::Model, ServiceError> {
    attendee::find(db, id).await?.ok_or_else(|| ServiceError::not_found("attendee"))
}

/// Full replace of the attendee's fields; the owning event never changes.
pub async fn update_attendee(
    db: &DatabaseConnection,
    id: i32,
    input: &AttendeeInput,
) -> Result<attendee::Model, ServiceError> {
    let updated = attendee::update(
        db,
        id,
        &input.name,
        input.phone.as_deref(),
        input.parent_phone.as_deref(),
        input.email.as_deref(),
        input.address.as_deref(),
    )
    .await?;
    updated.ok_or_else(|| ServiceError::not_found("attendee"))
}

/// Remove one attendee; the event keeps the rest of its roster. Returns the
/// owning event id so callers can return to its detail view.
pub async fn delete_attendee(db: &DatabaseConnection, id: i32) -> Result<i32, ServiceError> {
    let found = get_attendee(db, id).await?;
    attendee::delete(db, id).await?;
    info!(attendee_id = id, event_id = found.event_id, "attendee_removed");
    Ok(found.event_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{create_event, get_event, EventInput};
    use crate::test_support::get_db;

    fn event_input() -> EventInput {
        EventInput { title: "Camp".into(), date: "2024-07-01".into(), description: None }
    }

    fn full_input() -> AttendeeInput {
        AttendeeInput {
            name: "Ann Lee".into(),
            phone: Some("555".into()),
            parent_phone: None,
            email: None,
            address: Some("12 Elm".into()),
        }
    }

    #[tokio::test]
    async fn add_requires_existing_event() -> anyhow::Result<()> {
        let db = get_db().await?;
        let err = add_attendee(&db, 404, &full_input()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        Ok(())
    }

    #[tokio::test]
    async fn update_is_full_replace_and_delete_spares_the_event() -> anyhow::Result<()> {
        let db = get_db().await?;
        let ev = create_event(&db, &event_input()).await?;
        let a = add_attendee(&db, ev.id, &full_input()).await?;

        let replaced = update_attendee(
            &db,
            a.id,
            &AttendeeInput { name: "Ann L.".into(), phone: None, parent_phone: None, email: None, address: None },
        )
        .await?;
        assert_eq!(replaced.name, "Ann L.");
        assert_eq!(replaced.phone, None);
        assert_eq!(replaced.address, None);

        let owner = delete_attendee(&db, a.id).await?;
        assert_eq!(owner, ev.id);
        assert!(get_event(&db, ev.id).await.is_ok());

        assert!(matches!(get_attendee(&db, a.id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(delete_attendee(&db, a.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
