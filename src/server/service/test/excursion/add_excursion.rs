use super::*;

#[tokio::test]
async fn adds_excursion() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel_with_name(db, "Grand").await?;

    let excursion = ExcursionService::new(db)
        .add_excursion("Grand", create_param("Boat Trip", 40.0))
        .await?;

    assert_eq!(excursion.hotel_id, hotel.id);
    assert_eq!(excursion.price, 40.0);

    Ok(())
}

/// Tests that a free excursion is accepted.
#[tokio::test]
async fn accepts_zero_price() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::hotel::create_hotel_with_name(db, "Grand").await?;

    let excursion = ExcursionService::new(db)
        .add_excursion("Grand", create_param("Garden Tour", 0.0))
        .await?;

    assert_eq!(excursion.price, 0.0);

    Ok(())
}

/// Expected: Err(BadRequest) and nothing stored
#[tokio::test]
async fn rejects_negative_price() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::hotel::create_hotel_with_name(db, "Grand").await?;

    let result = ExcursionService::new(db)
        .add_excursion("Grand", create_param("Boat Trip", -5.0))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(entity::prelude::Excursion::find().count(db).await?, 0);

    Ok(())
}

#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel_with_name(db, "Grand").await?;
    factory::excursion::ExcursionFactory::new(db, hotel.id)
        .name("Boat Trip")
        .build()
        .await?;

    let result = ExcursionService::new(db)
        .add_excursion("Grand", create_param("Boat Trip", 40.0))
        .await;

    assert!(matches!(
        result,
        Err(AppError::HotelApiErr(HotelApiError::ExcursionAlreadyExists(_)))
    ));

    Ok(())
}

/// Expected: Err(HotelNotFound) even when the price is negative, nothing stored
#[tokio::test]
async fn fails_for_unknown_hotel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::hotel::create_hotel_with_name(db, "Grand").await?;

    let service = ExcursionService::new(db);

    let result = service
        .add_excursion("Nowhere", create_param("Boat Trip", -1.0))
        .await;
    assert!(matches!(
        result,
        Err(AppError::HotelApiErr(HotelApiError::HotelNotFound { .. }))
    ));

    let result = service
        .add_excursion("Nowhere", create_param("Boat Trip", 40.0))
        .await;
    assert!(matches!(
        result,
        Err(AppError::HotelApiErr(HotelApiError::HotelNotFound { .. }))
    ));

    assert_eq!(entity::prelude::Excursion::find().count(db).await?, 0);

    Ok(())
}
