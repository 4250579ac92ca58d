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
                    .table(Excursion::Table)
                    .if_not_exists()
                    .col(pk_uuid(Excursion::Id))
                    .col(uuid(Excursion::HotelId))
                    .col(string(Excursion::Name))
                    .col(string(Excursion::Description))
                    .col(double(Excursion::Price))
                    .col(boolean(Excursion::Enabled).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_excursion_hotel_id")
                            .from(Excursion::Table, Excursion::HotelId)
                            .to(Hotel::Table, Hotel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_excursion_hotel_id_name")
                    .table(Excursion::Table)
                    .col(Excursion::HotelId)
                    .col(Excursion::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Excursion::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Excursion {
    Table,
    Id,
    HotelId,
    Name,
    Description,
    Price,
    Enabled,
}
