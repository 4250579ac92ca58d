use super::*;

/// Tests attaching a tag to a room.
///
/// Expected: Ok with the tag present on the room
#[tokio::test]
async fn adds_tag_to_room() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel(db).await?;
    let room = factory::room::RoomFactory::new(db, hotel.id)
        .number(101)
        .build()
        .await?;

    let repo = RoomRepository::new(db);
    repo.add_tag(room.id, "sea-view").await?;

    let stored = repo
        .find_by_hotel_id_and_number(hotel.id, 101)
        .await?
        .unwrap();
    assert_eq!(stored.tags, tags(&["sea-view"]));

    Ok(())
}

/// Tests that adding a tag twice keeps a single tag row.
///
/// Expected: Ok with one row for the tag
#[tokio::test]
async fn adding_existing_tag_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel(db).await?;
    let room = factory::room::RoomFactory::new(db, hotel.id)
        .tag("sea-view")
        .build()
        .await?;

    RoomRepository::new(db).add_tag(room.id, "sea-view").await?;

    let count = entity::prelude::RoomTag::find()
        .filter(entity::room_tag::Column::RoomId.eq(room.id))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}
