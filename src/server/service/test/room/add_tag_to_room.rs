use super::*;

/// Tests that a tag added to a room makes it show up in a tag search.
///
/// Expected: Ok with room 101 found by "sea-view"
#[tokio::test]
async fn tagged_room_is_found_by_tag() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel_with_name(db, "Grand").await?;
    factory::room::RoomFactory::new(db, hotel.id)
        .number(101)
        .build()
        .await?;

    let service = RoomService::new(db);

    let room = service.add_tag_to_room("Grand", 101, "sea-view").await?;
    assert!(room.tags.contains("sea-view"));

    let rooms = service
        .get_all_rooms_by_hotel_name_and_tags("Grand", &tags(&["sea-view"]))
        .await?;
    assert!(rooms.iter().any(|r| r.number == 101));

    Ok(())
}

/// Expected: Err(BadRequest) for a blank tag
#[tokio::test]
async fn rejects_blank_tag() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel_with_name(db, "Grand").await?;
    factory::room::RoomFactory::new(db, hotel.id)
        .number(101)
        .build()
        .await?;

    let result = RoomService::new(db).add_tag_to_room("Grand", 101, "  ").await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(entity::prelude::RoomTag::find().count(db).await?, 0);

    Ok(())
}

#[tokio::test]
async fn fails_for_unknown_room() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::hotel::create_hotel_with_name(db, "Grand").await?;

    let result = RoomService::new(db)
        .add_tag_to_room("Grand", 101, "sea-view")
        .await;

    assert!(matches!(
        result,
        Err(AppError::HotelApiErr(HotelApiError::RoomNotFound { .. }))
    ));

    Ok(())
}

/// Expected: Err(HotelNotFound) even when the tag itself is blank
#[tokio::test]
async fn fails_for_unknown_hotel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel_with_name(db, "Grand").await?;
    factory::room::RoomFactory::new(db, hotel.id)
        .number(1)
        .build()
        .await?;

    let service = RoomService::new(db);

    let result = service.add_tag_to_room("Nowhere", 1, " ").await;
    assert!(matches!(
        result,
        Err(AppError::HotelApiErr(HotelApiError::HotelNotFound { .. }))
    ));

    let result = service.add_tag_to_room("Nowhere", 1, "sea-view").await;
    assert!(matches!(
        result,
        Err(AppError::HotelApiErr(HotelApiError::HotelNotFound { .. }))
    ));

    assert_eq!(entity::prelude::RoomTag::find().count(db).await?, 0);

    Ok(())
}

/// Expected: the stored tag is trimmed
#[tokio::test]
async fn trims_tag() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel_with_name(db, "Grand").await?;
    factory::room::RoomFactory::new(db, hotel.id)
        .number(101)
        .build()
        .await?;

    let room = RoomService::new(db)
        .add_tag_to_room("Grand", 101, "  sea-view ")
        .await?;

    assert_eq!(room.tags, tags(&["sea-view"]));

    Ok(())
}
