//! Create `attendee` table.
//! Links to `event` via FK; deleting an event must take its roster with it,
//! so the FK carries ON DELETE CASCADE as a structural backstop.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Attendee::Table)
                    .if_not_exists()
                    .col(pk_auto(Attendee::Id))
                    .col(string_len(Attendee::Name, 150).not_null())
                    .col(string_len_null(Attendee::Phone, 50))
                    .col(string_len_null(Attendee::ParentPhone, 50))
                    .col(string_len_null(Attendee::Email, 120))
                    .col(string_len_null(Attendee::Address, 200))
                    .col(integer(Attendee::EventId).not_null())
                    .col(timestamp_with_time_zone(Attendee::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Attendee::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendee_event")
                            .from(Attendee::Table, Attendee::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Attendee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Attendee {
    Table,
    Id,
    Name,
    Phone,
    ParentPhone,
    Email,
    Address,
    EventId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Event { Table, Id }
