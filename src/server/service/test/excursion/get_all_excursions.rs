use super::*;

#[tokio::test]
async fn lists_excursions_of_hotel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel_with_name(db, "Grand").await?;
    factory::excursion::create_excursion(db, hotel.id).await?;

    let excursions = ExcursionService::new(db).get_all_excursions("Grand").await?;

    assert_eq!(excursions.len(), 1);

    Ok(())
}

#[tokio::test]
async fn fails_when_hotel_has_no_excursions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::hotel::create_hotel_with_name(db, "Grand").await?;

    let result = ExcursionService::new(db).get_all_excursions("Grand").await;

    assert!(matches!(
        result,
        Err(AppError::HotelApiErr(HotelApiError::NoExcursionsFound))
    ));

    Ok(())
}

#[tokio::test]
async fn fails_for_unknown_hotel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel_with_name(db, "Grand").await?;
    factory::excursion::create_excursion(db, hotel.id).await?;

    let result = ExcursionService::new(db).get_all_excursions("Atlantis").await;

    assert!(matches!(
        result,
        Err(AppError::HotelApiErr(HotelApiError::HotelNotFound { .. }))
    ));

    Ok(())
}
