use anyhow::Result;

use super::support::memory_db;
use crate::{admin, attendee, event};

#[tokio::test]
async fn admin_create_lookup_and_password_update() -> Result<()> {
    let db = memory_db().await;

    let created = admin::create(&db, "shepherd", "$argon2id$stub-hash", "argon2").await?;
    assert_eq!(created.username, "shepherd");
    assert_eq!(created.password_algorithm, "argon2");

    let found = admin::find_by_username(&db, "shepherd").await?.expect("present");
    assert_eq!(found.id, created.id);

    // Lookup is exact and case-sensitive
    assert!(admin::find_by_username(&db, "Shepherd").await?.is_none());

    let updated = admin::update_password(&db, created.id, "$argon2id$new-hash", "argon2")
        .await?
        .expect("admin still present");
    assert_eq!(updated.password_hash, "$argon2id$new-hash");

    assert!(admin::update_password(&db, 9999, "$argon2id$x", "argon2").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn admin_username_required_and_unique() -> Result<()> {
    let db = memory_db().await;

    assert!(admin::create(&db, "  ", "hash", "argon2").await.is_err());

    admin::create(&db, "deacon", "hash-a", "argon2").await?;
    // Unique column rejects the duplicate at the storage layer
    assert!(admin::create(&db, "deacon", "hash-b", "argon2").await.is_err());

    let all = admin::list(&db).await?;
    assert_eq!(all.len(), 1);
    Ok(())
}

#[tokio::test]
async fn event_requires_title_and_date() -> Result<()> {
    let db = memory_db().await;
    assert!(event::create(&db, "", "2024-06-01", None).await.is_err());
    assert!(event::create(&db, "Lock-in", "  ", None).await.is_err());
    let created = event::create(&db, "Lock-in", "2024-06-01", Some("overnight")).await?;
    assert_eq!(created.description.as_deref(), Some("overnight"));
    Ok(())
}

#[tokio::test]
async fn event_update_is_full_replace() -> Result<()> {
    let db = memory_db().await;
    let created = event::create(&db, "Retreat", "2024-09-13", Some("fall retreat")).await?;

    let updated = event::update(&db, created.id, "Fall Retreat", "2024-09-20", None)
        .await?
        .expect("event present");
    assert_eq!(updated.title, "Fall Retreat");
    assert_eq!(updated.date, "2024-09-20");
    // Omitted description clears the stored one
    assert_eq!(updated.description, None);

    assert!(event::update(&db, 404, "X", "2024-01-01", None).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn events_order_by_literal_date_text() -> Result<()> {
    let db = memory_db().await;
    event::create(&db, "B", "2024-12-01", None).await?;
    event::create(&db, "C", "9999-01-01", None).await?;
    event::create(&db, "A", "2024-03-01", None).await?;

    let dates: Vec<String> = event::list_by_date(&db).await?.into_iter().map(|e| e.date).collect();
    // Plain text ordering, calendar-invalid values included
    assert_eq!(dates, vec!["2024-03-01", "2024-12-01", "9999-01-01"]);
    Ok(())
}

#[tokio::test]
async fn attendee_optional_fields_roundtrip() -> Result<()> {
    let db = memory_db().await;
    let ev = event::create(&db, "Camp", "2024-07-01", None).await?;

    assert!(attendee::create(&db, ev.id, " ", None, None, None, None).await.is_err());

    let a = attendee::create(&db, ev.id, "Ann Lee", Some("555"), None, None, Some("12 Elm")).await?;
    assert_eq!(a.phone.as_deref(), Some("555"));
    assert_eq!(a.parent_phone, None);
    assert_eq!(a.email, None);
    assert_eq!(a.address.as_deref(), Some("12 Elm"));
    assert_eq!(a.event_id, ev.id);

    let found = attendee::find(&db, a.id).await?.expect("present");
    assert_eq!(found.name, "Ann Lee");
    Ok(())
}

#[tokio::test]
async fn attendee_update_is_full_replace() -> Result<()> {
    let db = memory_db().await;
    let ev = event::create(&db, "Camp", "2024-07-01", None).await?;
    let a = attendee::create(&db, ev.id, "Ben", Some("111"), Some("222"), Some("b@x.org"), None).await?;

    let updated = attendee::update(&db, a.id, "Benjamin", None, None, None, Some("3 Oak"))
        .await?
        .expect("attendee present");
    assert_eq!(updated.name, "Benjamin");
    assert_eq!(updated.phone, None);
    assert_eq!(updated.parent_phone, None);
    assert_eq!(updated.email, None);
    assert_eq!(updated.address.as_deref(), Some("3 Oak"));
    assert_eq!(updated.event_id, ev.id);

    assert!(attendee::update(&db, 404, "X", None, None, None, None).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn attendee_roster_keeps_insertion_order() -> Result<()> {
    let db = memory_db().await;
    let ev = event::create(&db, "Camp", "2024-07-01", None).await?;
    attendee::create(&db, ev.id, "Zoe", None, None, None, None).await?;
    attendee::create(&db, ev.id, "Abe", None, None, None, None).await?;
    attendee::create(&db, ev.id, "Mia", None, None, None, None).await?;

    let names: Vec<String> = attendee::list_by_event(&db, ev.id)
        .await?
        .into_iter()
        .map(|a| a.name)
        .collect();
    assert_eq!(names, vec!["Zoe", "Abe", "Mia"]);
    Ok(())
}

#[tokio::test]
async fn last_write_wins_on_same_row() -> Result<()> {
    let db = memory_db().await;
    let ev = event::create(&db, "Camp", "2024-07-01", None).await?;
    let a = attendee::create(&db, ev.id, "Ann", None, None, None, None).await?;

    attendee::update(&db, a.id, "Ann", Some("111"), None, None, None).await?;
    attendee::update(&db, a.id, "Ann", Some("222"), None, None, None).await?;

    let final_state = attendee::find(&db, a.id).await?.expect("present");
    assert_eq!(final_state.phone.as_deref(), Some("222"));
    Ok(())
}
