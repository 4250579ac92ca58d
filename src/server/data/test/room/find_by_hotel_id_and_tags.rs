use super::*;

/// Tests that a room matches when it carries any of the requested tags.
///
/// Expected: Ok with matching rooms carrying their full tag sets
#[tokio::test]
async fn matches_rooms_with_any_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel(db).await?;
    factory::room::RoomFactory::new(db, hotel.id)
        .number(101)
        .tag("sea-view")
        .tag("balcony")
        .build()
        .await?;
    factory::room::RoomFactory::new(db, hotel.id)
        .number(102)
        .tag("quiet")
        .build()
        .await?;
    factory::room::RoomFactory::new(db, hotel.id)
        .number(103)
        .build()
        .await?;

    let rooms = RoomRepository::new(db)
        .find_by_hotel_id_and_tags(hotel.id, &tags(&["sea-view", "quiet"]))
        .await?;

    let numbers: Vec<i32> = rooms.iter().map(|r| r.number).collect();
    assert_eq!(numbers, vec![101, 102]);
    assert_eq!(rooms[0].tags, tags(&["balcony", "sea-view"]));

    Ok(())
}

/// Tests that tags of another hotel's rooms are not matched.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn ignores_rooms_of_other_hotels() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let grand = factory::hotel::create_hotel(db).await?;
    let atlantis = factory::hotel::create_hotel(db).await?;
    factory::room::RoomFactory::new(db, atlantis.id)
        .tag("sea-view")
        .build()
        .await?;

    let rooms = RoomRepository::new(db)
        .find_by_hotel_id_and_tags(grand.id, &tags(&["sea-view"]))
        .await?;

    assert!(rooms.is_empty());

    Ok(())
}

/// Expected: Ok with an empty list for an empty tag set
#[tokio::test]
async fn empty_tag_set_matches_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel(db).await?;
    factory::room::RoomFactory::new(db, hotel.id)
        .tag("sea-view")
        .build()
        .await?;

    let rooms = RoomRepository::new(db)
        .find_by_hotel_id_and_tags(hotel.id, &BTreeSet::new())
        .await?;

    assert!(rooms.is_empty());

    Ok(())
}
