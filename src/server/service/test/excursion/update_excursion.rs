use super::*;

#[tokio::test]
async fn merges_present_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel_with_name(db, "Grand").await?;
    factory::excursion::ExcursionFactory::new(db, hotel.id)
        .name("Boat Trip")
        .price(40.0)
        .build()
        .await?;

    let excursion = ExcursionService::new(db)
        .update_excursion(
            "Grand",
            UpdateExcursionParam {
                name: "Boat Trip".to_string(),
                description: Some("Sunset cruise".to_string()),
                price: None,
                enabled: None,
            },
        )
        .await?;

    assert_eq!(excursion.description, "Sunset cruise");
    assert_eq!(excursion.price, 40.0);
    assert!(excursion.enabled);

    Ok(())
}

/// Expected: Err(BadRequest) and the stored price untouched
#[tokio::test]
async fn rejects_negative_price() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel_with_name(db, "Grand").await?;
    factory::excursion::ExcursionFactory::new(db, hotel.id)
        .name("Boat Trip")
        .price(40.0)
        .build()
        .await?;

    let service = ExcursionService::new(db);
    let result = service
        .update_excursion(
            "Grand",
            UpdateExcursionParam {
                name: "Boat Trip".to_string(),
                description: None,
                price: Some(-1.0),
                enabled: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let stored = service.get_excursion("Grand", "Boat Trip").await?;
    assert_eq!(stored.price, 40.0);

    Ok(())
}

/// Expected: Err(HotelNotFound) even when the price is negative, excursion untouched
#[tokio::test]
async fn fails_for_unknown_hotel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel_with_name(db, "Grand").await?;
    factory::excursion::ExcursionFactory::new(db, hotel.id)
        .name("Boat Trip")
        .price(40.0)
        .build()
        .await?;

    let service = ExcursionService::new(db);
    let result = service
        .update_excursion(
            "Nowhere",
            UpdateExcursionParam {
                name: "Boat Trip".to_string(),
                description: None,
                price: Some(-1.0),
                enabled: None,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::HotelApiErr(HotelApiError::HotelNotFound { .. }))
    ));
    assert_eq!(service.get_excursion("Grand", "Boat Trip").await?.price, 40.0);

    Ok(())
}
