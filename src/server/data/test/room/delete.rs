use super::*;

/// Tests deleting a room together with its tag rows.
///
/// Expected: Ok with room and tags gone, sibling rooms untouched
#[tokio::test]
async fn deletes_room_and_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel(db).await?;
    let room = factory::room::RoomFactory::new(db, hotel.id)
        .tag("sea-view")
        .build()
        .await?;
    let sibling = factory::room::create_room(db, hotel.id).await?;

    RoomRepository::new(db).delete(room.id).await?;

    assert!(entity::prelude::Room::find_by_id(room.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Room::find_by_id(sibling.id)
        .one(db)
        .await?
        .is_some());
    assert_eq!(entity::prelude::RoomTag::find().count(db).await?, 0);

    Ok(())
}

/// Expected: Ok with nothing removed when the id matches no room
#[tokio::test]
async fn ignores_unknown_room() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room) = factory::helpers::create_room_with_hotel(db).await?;

    RoomRepository::new(db).delete(Uuid::new_v4()).await?;

    assert!(entity::prelude::Room::find_by_id(room.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
