use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::event;

/// One person registered for one event. All contact fields are optional.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "attendee")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub phone: Option<String>,
    pub parent_phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub event_id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Event,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Event => Entity::belongs_to(event::Entity)
                .from(Column::EventId)
                .to(event::Column::Id)
                .into(),
        }
    }
}

impl Related<event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    Ok(())
}

pub async fn create(
    db: &DatabaseConnection,
    event_id: i32,
    name: &str,
    phone: Option<&str>,
    parent_phone: Option<&str>,
    email: Option<&str>,
    address: Option<&str>,
) -> Result<Model, ModelError> {
    validate_name(name)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        name: Set(name.to_string()),
        phone: Set(phone.map(str::to_string)),
        parent_phone: Set(parent_phone.map(str::to_string)),
        email: Set(email.map(str::to_string)),
        address: Set(address.map(str::to_string)),
        event_id: Set(event_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn find(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, ModelError> {
    Entity::find_by_id(id).one(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

/// Roster of one event in insertion (primary key) order.
pub async fn list_by_event(db: &DatabaseConnection, event_id: i32) -> Result<Vec<Model>, ModelError> {
    Entity::find()
        .filter(Column::EventId.eq(event_id))
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}

/// Full replace of every contact field; the owning event never changes.
/// Returns `None` on a missing attendee.
pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    name: &str,
    phone: Option<&str>,
    parent_phone: Option<&str>,
    email: Option<&str>,
    address: Option<&str>,
) -> Result<Option<Model>, ModelError> {
    validate_name(name)?;
    let found = match Entity::find_by_id(id).one(db).await.map_err(|e| ModelError::Db(e.to_string()))? {
        Some(m) => m,
        None => return Ok(None),
    };
    let mut am: ActiveModel = found.into();
    am.name = Set(name.to_string());
    am.phone = Set(phone.map(str::to_string));
    am.parent_phone = Set(parent_phone.map(str::to_string));
    am.email = Set(email.map(str::to_string));
    am.address = Set(address.map(str::to_string));
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await.map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(Some(updated))
}

/// Delete one attendee; the owning event is untouched. Returns whether a row
/// was removed.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}
