use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "hotel")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::room::Entity")]
    Room,
    #[sea_orm(has_many = "super::additional_service::Entity")]
    AdditionalService,
    #[sea_orm(has_many = "super::excursion::Entity")]
    Excursion,
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl Related<super::additional_service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AdditionalService.def()
    }
}

impl Related<super::excursion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Excursion.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
