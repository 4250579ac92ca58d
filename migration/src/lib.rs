pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_hotel_table;
mod m20260301_000002_create_room_table;
mod m20260301_000003_create_room_tag_table;
mod m20260301_000004_create_additional_service_table;
mod m20260301_000005_create_excursion_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_hotel_table::Migration),
            Box::new(m20260301_000002_create_room_table::Migration),
            Box::new(m20260301_000003_create_room_tag_table::Migration),
            Box::new(m20260301_000004_create_additional_service_table::Migration),
            Box::new(m20260301_000005_create_excursion_table::Migration),
        ]
    }
}
