use super::*;

/// Tests creating a hotel with a caller-supplied identifier.
///
/// Expected: Ok with the hotel stored under the given id
#[tokio::test]
async fn creates_hotel_with_given_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let id = Uuid::new_v4();
    let repo = HotelRepository::new(db);
    let hotel = repo
        .create(
            id,
            CreateHotelParam {
                name: "Grand".to_string(),
            },
        )
        .await?;

    assert_eq!(hotel.id, id);
    assert_eq!(hotel.name, "Grand");

    let db_hotel = entity::prelude::Hotel::find_by_id(id).one(db).await?;
    assert_eq!(db_hotel.unwrap().name, "Grand");

    Ok(())
}

/// Tests that the unique constraint on the hotel name is enforced.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::hotel::create_hotel_with_name(db, "Grand").await?;

    let result = HotelRepository::new(db)
        .create(
            Uuid::new_v4(),
            CreateHotelParam {
                name: "Grand".to_string(),
            },
        )
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Hotel::find().count(db).await?, 1);

    Ok(())
}
