use super::*;

/// Tests that the lookup is scoped to the hotel and loads the tags.
///
/// Expected: Ok(Some) for the hotel's own room, Ok(None) for another hotel's number
#[tokio::test]
async fn finds_room_scoped_to_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let grand = factory::hotel::create_hotel(db).await?;
    let atlantis = factory::hotel::create_hotel(db).await?;
    factory::room::RoomFactory::new(db, grand.id)
        .number(101)
        .tag("sea-view")
        .build()
        .await?;
    factory::room::RoomFactory::new(db, atlantis.id)
        .number(202)
        .build()
        .await?;

    let repo = RoomRepository::new(db);

    let room = repo.find_by_hotel_id_and_number(grand.id, 101).await?;
    let room = room.unwrap();
    assert_eq!(room.hotel_id, grand.id);
    assert_eq!(room.tags, tags(&["sea-view"]));

    let missing = repo.find_by_hotel_id_and_number(grand.id, 202).await?;
    assert!(missing.is_none());

    Ok(())
}

/// Expected: true only for a number taken in the same hotel
#[tokio::test]
async fn reports_existing_numbers_per_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let grand = factory::hotel::create_hotel(db).await?;
    let atlantis = factory::hotel::create_hotel(db).await?;
    factory::room::RoomFactory::new(db, grand.id)
        .number(101)
        .build()
        .await?;

    let repo = RoomRepository::new(db);

    assert!(repo.exists_in_hotel(grand.id, 101).await?);
    assert!(!repo.exists_in_hotel(atlantis.id, 101).await?);

    Ok(())
}
