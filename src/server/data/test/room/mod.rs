use crate::server::{
    data::room::RoomRepository,
    model::room::{CreateRoomParam, UpdateRoomParam},
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use std::collections::BTreeSet;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod add_tag;
mod delete;
mod find_by_hotel_id_and_number;
mod find_by_hotel_id_and_tags;

fn tags(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}
