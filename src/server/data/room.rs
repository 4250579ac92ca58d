//! Room data repository for database operations.
//!
//! Provides the `RoomRepository` for managing rooms and their tags. Tags are stored as
//! `room_tag` rows and are loaded alongside rooms in a single batched query so every
//! returned `Room` domain model carries its complete tag set.

use sea_orm::{
    sea_query::{OnConflict, Query},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use std::collections::{BTreeSet, HashMap};
use uuid::Uuid;

use crate::server::model::room::{CreateRoomParam, Room, UpdateRoomParam};

/// Repository providing database operations for room management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and deleting room records and their tags.
pub struct RoomRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomRepository<'a> {
    /// Creates a new RoomRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `RoomRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new room with its tags.
    ///
    /// # Arguments
    /// - `id` - Freshly generated room identifier
    /// - `hotel_id` - Identifier of the owning hotel
    /// - `param` - Room creation parameters with defaults already applied
    ///
    /// # Returns
    /// - `Ok(Room)` - The created room
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        id: Uuid,
        hotel_id: Uuid,
        param: CreateRoomParam,
    ) -> Result<Room, DbErr> {
        let room = Room {
            id,
            hotel_id,
            number: param.number,
            description: param.description,
            capacity: param.capacity,
            price: param.price,
            available: param.available,
            tags: param.tags,
        };

        insert_room(self.db, &room).await?;

        Ok(room)
    }

    /// Finds a room by its number within a hotel.
    ///
    /// # Arguments
    /// - `hotel_id` - Identifier of the owning hotel
    /// - `number` - Room number
    ///
    /// # Returns
    /// - `Ok(Some(Room))` - Room found with its tags
    /// - `Ok(None)` - The hotel has no room with that number
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_hotel_id_and_number(
        &self,
        hotel_id: Uuid,
        number: i32,
    ) -> Result<Option<Room>, DbErr> {
        let entity = entity::prelude::Room::find()
            .filter(entity::room::Column::HotelId.eq(hotel_id))
            .filter(entity::room::Column::Number.eq(number))
            .one(self.db)
            .await?;

        match entity {
            Some(entity) => Ok(self.with_tags(vec![entity]).await?.pop()),
            None => Ok(None),
        }
    }

    /// Checks whether a hotel already has a room with the given number.
    pub async fn exists_in_hotel(&self, hotel_id: Uuid, number: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Room::find()
            .filter(entity::room::Column::HotelId.eq(hotel_id))
            .filter(entity::room::Column::Number.eq(number))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets every room in the database regardless of hotel, ordered by number.
    pub async fn find_all(&self) -> Result<Vec<Room>, DbErr> {
        let entities = entity::prelude::Room::find()
            .order_by_asc(entity::room::Column::Number)
            .all(self.db)
            .await?;

        self.with_tags(entities).await
    }

    /// Gets the rooms of a hotel matching an availability flag, ordered by number.
    pub async fn find_by_hotel_id_and_available(
        &self,
        hotel_id: Uuid,
        available: bool,
    ) -> Result<Vec<Room>, DbErr> {
        let entities = entity::prelude::Room::find()
            .filter(entity::room::Column::HotelId.eq(hotel_id))
            .filter(entity::room::Column::Available.eq(available))
            .order_by_asc(entity::room::Column::Number)
            .all(self.db)
            .await?;

        self.with_tags(entities).await
    }

    /// Gets the rooms of a hotel carrying at least one of the given tags.
    ///
    /// # Arguments
    /// - `hotel_id` - Identifier of the owning hotel
    /// - `tags` - Tags to match; an empty set matches nothing
    ///
    /// # Returns
    /// - `Ok(Vec<Room>)` - Matching rooms ordered by number, each with its full tag set
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_hotel_id_and_tags(
        &self,
        hotel_id: Uuid,
        tags: &BTreeSet<String>,
    ) -> Result<Vec<Room>, DbErr> {
        if tags.is_empty() {
            return Ok(Vec::new());
        }

        let tagged_rooms = Query::select()
            .column(entity::room_tag::Column::RoomId)
            .from(entity::prelude::RoomTag)
            .and_where(entity::room_tag::Column::Tag.is_in(tags.iter().cloned()))
            .to_owned();

        let entities = entity::prelude::Room::find()
            .filter(entity::room::Column::HotelId.eq(hotel_id))
            .filter(entity::room::Column::Id.in_subquery(tagged_rooms))
            .order_by_asc(entity::room::Column::Number)
            .all(self.db)
            .await?;

        self.with_tags(entities).await
    }

    /// Saves the scalar fields of an existing room in place.
    ///
    /// Tags are not touched; use `add_tag` to attach new ones.
    ///
    /// # Returns
    /// - `Ok(Room)` - The saved room
    /// - `Err(DbErr)` - Database error during update
    pub async fn save(&self, room: Room) -> Result<Room, DbErr> {
        entity::room::ActiveModel {
            id: ActiveValue::Unchanged(room.id),
            hotel_id: ActiveValue::Set(room.hotel_id),
            number: ActiveValue::Set(room.number),
            description: ActiveValue::Set(room.description.clone()),
            capacity: ActiveValue::Set(room.capacity),
            price: ActiveValue::Set(room.price),
            available: ActiveValue::Set(room.available),
        }
        .update(self.db)
        .await?;

        Ok(room)
    }

    /// Replaces a room by deleting its row and saving the merged copy.
    ///
    /// The existing row (and its tags) is deleted first, the update is then merged onto
    /// the detached room and the result is inserted again under the same identifier.
    /// Both steps run in one transaction.
    ///
    /// # Arguments
    /// - `existing` - The room as currently stored
    /// - `param` - Update parameters; only present fields are merged
    ///
    /// # Returns
    /// - `Ok(Room)` - The re-created room
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn recreate(&self, existing: Room, param: &UpdateRoomParam) -> Result<Room, DbErr> {
        let txn = self.db.begin().await?;

        delete_room(&txn, existing.id).await?;

        let mut room = existing;
        param.apply_to(&mut room);

        insert_room(&txn, &room).await?;

        txn.commit().await?;

        Ok(room)
    }

    /// Attaches a tag to a room.
    ///
    /// Adding a tag the room already carries is a no-op.
    ///
    /// # Returns
    /// - `Ok(())` - Tag present on the room after the call
    /// - `Err(DbErr)` - Database error during insert
    pub async fn add_tag(&self, room_id: Uuid, tag: &str) -> Result<(), DbErr> {
        entity::prelude::RoomTag::insert(entity::room_tag::ActiveModel {
            room_id: ActiveValue::Set(room_id),
            tag: ActiveValue::Set(tag.to_string()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::room_tag::Column::RoomId,
                entity::room_tag::Column::Tag,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Deletes a room and its tags.
    pub async fn delete(&self, id: Uuid) -> Result<(), DbErr> {
        delete_room(self.db, id).await
    }

    /// Loads the tags of the given rooms in one query and builds domain models.
    async fn with_tags(&self, rooms: Vec<entity::room::Model>) -> Result<Vec<Room>, DbErr> {
        if rooms.is_empty() {
            return Ok(Vec::new());
        }

        let room_ids: Vec<Uuid> = rooms.iter().map(|r| r.id).collect();

        let mut tags_by_room: HashMap<Uuid, Vec<entity::room_tag::Model>> = HashMap::new();
        for tag in entity::prelude::RoomTag::find()
            .filter(entity::room_tag::Column::RoomId.is_in(room_ids))
            .all(self.db)
            .await?
        {
            tags_by_room.entry(tag.room_id).or_default().push(tag);
        }

        Ok(rooms
            .into_iter()
            .map(|room| {
                let tags = tags_by_room.remove(&room.id).unwrap_or_default();
                Room::from_entity(room, tags)
            })
            .collect())
    }
}

/// Inserts the room row followed by one row per tag.
async fn insert_room<C: ConnectionTrait>(db: &C, room: &Room) -> Result<(), DbErr> {
    entity::room::ActiveModel {
        id: ActiveValue::Set(room.id),
        hotel_id: ActiveValue::Set(room.hotel_id),
        number: ActiveValue::Set(room.number),
        description: ActiveValue::Set(room.description.clone()),
        capacity: ActiveValue::Set(room.capacity),
        price: ActiveValue::Set(room.price),
        available: ActiveValue::Set(room.available),
    }
    .insert(db)
    .await?;

    for tag in &room.tags {
        entity::room_tag::ActiveModel {
            room_id: ActiveValue::Set(room.id),
            tag: ActiveValue::Set(tag.clone()),
        }
        .insert(db)
        .await?;
    }

    Ok(())
}

/// Deletes the tag rows of a room, then the room row itself.
async fn delete_room<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<(), DbErr> {
    entity::prelude::RoomTag::delete_many()
        .filter(entity::room_tag::Column::RoomId.eq(id))
        .exec(db)
        .await?;

    entity::prelude::Room::delete_by_id(id).exec(db).await?;

    Ok(())
}
