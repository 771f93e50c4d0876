use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::attendee;
use crate::errors::ModelError;

/// A scheduled gathering. `date` is opaque text, never parsed as a calendar
/// date; ordering is byte-wise on the stored string.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub date: String,
    pub description: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Attendee,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Attendee => Entity::has_many(attendee::Entity).into(),
        }
    }
}

impl Related<attendee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_title(title: &str) -> Result<(), ModelError> {
    if title.trim().is_empty() {
        return Err(ModelError::Validation("title required".into()));
    }
    Ok(())
}

pub fn validate_date(date: &str) -> Result<(), ModelError> {
    if date.trim().is_empty() {
        return Err(ModelError::Validation("date required".into()));
    }
    Ok(())
}

pub async fn create(
    db: &DatabaseConnection,
    title: &str,
    date: &str,
    description: Option<&str>,
) -> Result<Model, ModelError> {
    validate_title(title)?;
    validate_date(date)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        title: Set(title.to_string()),
        date: Set(date.to_string()),
        description: Set(description.map(str::to_string)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn find(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, ModelError> {
    Entity::find_by_id(id).one(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

/// All events ordered by the literal date text ascending.
pub async fn list_by_date(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Entity::find()
        .order_by_asc(Column::Date)
        .all(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}

/// Full replace of title, date and description. Returns `None` on a missing
/// event.
pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    title: &str,
    date: &str,
    description: Option<&str>,
) -> Result<Option<Model>, ModelError> {
    validate_title(title)?;
    validate_date(date)?;
    let found = match Entity::find_by_id(id).one(db).await.map_err(|e| ModelError::Db(e.to_string()))? {
        Some(m) => m,
        None => return Ok(None),
    };
    let mut am: ActiveModel = found.into();
    am.title = Set(title.to_string());
    am.date = Set(date.to_string());
    am.description = Set(description.map(str::to_string));
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await.map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(Some(updated))
}
