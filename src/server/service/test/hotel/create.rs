use super::*;

#[tokio::test]
async fn creates_hotel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = HotelService::new(db)
        .create(CreateHotelParam {
            name: "Grand".to_string(),
        })
        .await?;

    assert_eq!(hotel.name, "Grand");
    assert!(entity::prelude::Hotel::find_by_id(hotel.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Expected: Err(HotelAlreadyExists) and no second row
#[tokio::test]
async fn rejects_duplicate_hotel_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::hotel::create_hotel_with_name(db, "Grand").await?;

    let result = HotelService::new(db)
        .create(CreateHotelParam {
            name: "Grand".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::HotelApiErr(HotelApiError::HotelAlreadyExists(_)))
    ));
    assert_eq!(entity::prelude::Hotel::find().count(db).await?, 1);

    Ok(())
}

/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_empty_hotel_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = HotelService::new(db)
        .create(CreateHotelParam {
            name: String::new(),
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
