//! Supporting indexes: roster lookups by owning event and the date-ordered
//! event listing.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_attendee_event_id")
                    .table(Attendee::Table)
                    .col(Attendee::EventId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_event_date")
                    .table(Event::Table)
                    .col(Event::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_attendee_event_id").table(Attendee::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_event_date").table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Attendee { Table, EventId }

#[derive(DeriveIden)]
enum Event { Table, Date }
