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
                    .table(AdditionalService::Table)
                    .if_not_exists()
                    .col(pk_uuid(AdditionalService::Id))
                    .col(uuid(AdditionalService::HotelId))
                    .col(string(AdditionalService::Name))
                    .col(string(AdditionalService::Description))
                    .col(boolean(AdditionalService::Enabled).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_additional_service_hotel_id")
                            .from(AdditionalService::Table, AdditionalService::HotelId)
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
                    .name("idx_additional_service_hotel_id_name")
                    .table(AdditionalService::Table)
                    .col(AdditionalService::HotelId)
                    .col(AdditionalService::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AdditionalService::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AdditionalService {
    Table,
    Id,
    HotelId,
    Name,
    Description,
    Enabled,
}
