use sea_orm::DatabaseConnection;
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::server::{
    data::room::RoomRepository,
    error::{hotel::HotelApiError, AppError},
    model::room::{normalize_tag, normalize_tags, CreateRoomParam, Room, UpdateRoomParam},
    service::hotel::HotelService,
};

pub struct RoomService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a room to a hotel.
    ///
    /// The room gets a freshly generated identifier and the resolved hotel's ID. The
    /// returned room is built from the request input, it is not read back from storage.
    ///
    /// # Returns
    /// - `Ok(Room)` - The created room
    /// - `Err(HotelApiError::HotelNotFound)` - No hotel with that name
    /// - `Err(AppError::BadRequest)` - A tag is blank
    /// - `Err(HotelApiError::RoomAlreadyExists)` - The hotel already has a room with that number
    pub async fn add_room(
        &self,
        hotel_name: &str,
        mut param: CreateRoomParam,
    ) -> Result<Room, AppError> {
        let hotel = HotelService::new(self.db)
            .require(hotel_name, "add room")
            .await?;

        param.tags = normalize_tags(&param.tags)?;

        let repo = RoomRepository::new(self.db);

        if repo.exists_in_hotel(hotel.id, param.number).await? {
            return Err(HotelApiError::RoomAlreadyExists(param.number).into());
        }

        let room = repo.create(Uuid::new_v4(), hotel.id, param).await?;

        tracing::info!("Added room {} to hotel '{}'", room.number, hotel.name);

        Ok(room)
    }

    /// Gets a room of a hotel by number
    pub async fn get_room(&self, hotel_name: &str, number: i32) -> Result<Room, AppError> {
        self.require_room(hotel_name, number, "get room").await
    }

    /// Gets every stored room once the hotel is known to exist.
    ///
    /// The listing is not restricted to the named hotel; the hotel only gates the call.
    ///
    /// # Returns
    /// - `Ok(Vec<Room>)` - All rooms, never empty
    /// - `Err(HotelApiError::HotelNotFound)` - No hotel with that name
    /// - `Err(HotelApiError::NoRoomsFound)` - No rooms are stored at all
    pub async fn get_all_rooms(&self, hotel_name: &str) -> Result<Vec<Room>, AppError> {
        HotelService::new(self.db)
            .require(hotel_name, "get all rooms")
            .await?;

        let rooms = RoomRepository::new(self.db).find_all().await?;

        if rooms.is_empty() {
            return Err(HotelApiError::NoRoomsFound.into());
        }

        Ok(rooms)
    }

    /// Updates a room located by the number in the update parameters.
    ///
    /// The stored row is deleted first and the merged room is then saved again under the
    /// same identifier, hotel and number.
    pub async fn update_room(
        &self,
        hotel_name: &str,
        mut param: UpdateRoomParam,
    ) -> Result<Room, AppError> {
        let existing = self
            .require_room(hotel_name, param.number, "update room")
            .await?;

        if let Some(tags) = param.tags.take() {
            param.tags = Some(normalize_tags(&tags)?);
        }

        let room = RoomRepository::new(self.db)
            .recreate(existing, &param)
            .await?;

        tracing::info!("Updated room {} of hotel '{}'", room.number, hotel_name);

        Ok(room)
    }

    /// Deletes a room and returns it as it was before deletion
    pub async fn delete_room(&self, hotel_name: &str, number: i32) -> Result<Room, AppError> {
        let room = self.require_room(hotel_name, number, "delete room").await?;

        RoomRepository::new(self.db).delete(room.id).await?;

        tracing::info!("Deleted room {} of hotel '{}'", room.number, hotel_name);

        Ok(room)
    }

    /// Gets the rooms of a hotel with the given availability.
    ///
    /// Unlike the other listings an empty result is returned as an empty list.
    pub async fn get_all_available_rooms(
        &self,
        hotel_name: &str,
        available: bool,
    ) -> Result<Vec<Room>, AppError> {
        let hotel = HotelService::new(self.db)
            .require(hotel_name, "find rooms")
            .await?;

        Ok(RoomRepository::new(self.db)
            .find_by_hotel_id_and_available(hotel.id, available)
            .await?)
    }

    /// Sets the availability flag of a room
    pub async fn set_room_available(
        &self,
        hotel_name: &str,
        number: i32,
        available: bool,
    ) -> Result<Room, AppError> {
        let mut room = self
            .require_room(hotel_name, number, "set room availability")
            .await?;

        room.available = available;
        let room = RoomRepository::new(self.db).save(room).await?;

        tracing::info!(
            "Set room {} of hotel '{}' available={}",
            room.number,
            hotel_name,
            room.available
        );

        Ok(room)
    }

    /// Attaches a tag to a room and returns the room re-read from storage.
    pub async fn add_tag_to_room(
        &self,
        hotel_name: &str,
        number: i32,
        tag: &str,
    ) -> Result<Room, AppError> {
        let room = self
            .require_room(hotel_name, number, "add tag to room")
            .await?;

        let tag = normalize_tag(tag)?;

        let repo = RoomRepository::new(self.db);
        repo.add_tag(room.id, tag).await?;

        tracing::info!("Tagged room {} of hotel '{}' with '{}'", number, hotel_name, tag);

        repo.find_by_hotel_id_and_number(room.hotel_id, number)
            .await?
            .ok_or_else(|| {
                HotelApiError::RoomNotFound {
                    action: "add tag to room",
                }
                .into()
            })
    }

    /// Gets the rooms of a hotel carrying at least one of the given tags.
    ///
    /// # Returns
    /// - `Ok(Vec<Room>)` - Matching rooms, never empty
    /// - `Err(HotelApiError::HotelNotFound)` - No hotel with that name
    /// - `Err(HotelApiError::NoRoomsFound)` - No room of the hotel carries any of the tags
    pub async fn get_all_rooms_by_hotel_name_and_tags(
        &self,
        hotel_name: &str,
        tags: &BTreeSet<String>,
    ) -> Result<Vec<Room>, AppError> {
        let hotel = HotelService::new(self.db)
            .require(hotel_name, "find rooms by tags")
            .await?;

        let rooms = RoomRepository::new(self.db)
            .find_by_hotel_id_and_tags(hotel.id, tags)
            .await?;

        if rooms.is_empty() {
            return Err(HotelApiError::NoRoomsFound.into());
        }

        Ok(rooms)
    }

    /// Runs both phases of the existence gate for a single room.
    async fn require_room(
        &self,
        hotel_name: &str,
        number: i32,
        action: &'static str,
    ) -> Result<Room, AppError> {
        let hotel = HotelService::new(self.db).require(hotel_name, action).await?;

        RoomRepository::new(self.db)
            .find_by_hotel_id_and_number(hotel.id, number)
            .await?
            .ok_or_else(|| HotelApiError::RoomNotFound { action }.into())
    }
}
