use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_hotel_table::Hotel;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Room::Table)
                    .if_not_exists()
                    .col(pk_uuid(Room::Id))
                    .col(uuid(Room::HotelId))
                    .col(integer(Room::Number))
                    .col(string(Room::Description))
                    .col(integer(Room::Capacity))
                    .col(double(Room::Price))
                    .col(boolean(Room::Available))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_hotel_id")
                            .from(Room::Table, Room::HotelId)
                            .to(Hotel::Table, Hotel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Room numbers are unique within a hotel
        manager
            .create_index(
                Index::create()
                    .name("idx_room_hotel_id_number")
                    .table(Room::Table)
                    .col(Room::HotelId)
                    .col(Room::Number)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Room::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Room {
    Table,
    Id,
    HotelId,
    Number,
    Description,
    Capacity,
    Price,
    Available,
}
