use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_room_table::Room;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoomTag::Table)
                    .if_not_exists()
                    .col(uuid(RoomTag::RoomId))
                    .col(string(RoomTag::Tag))
                    .primary_key(
                        Index::create()
                            .col(RoomTag::RoomId)
                            .col(RoomTag::Tag),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_tag_room_id")
                            .from(RoomTag::Table, RoomTag::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomTag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RoomTag {
    Table,
    RoomId,
    Tag,
}
