use super::*;

#[tokio::test]
async fn disables_service() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel_with_name(db, "Grand").await?;
    factory::additional_service::AdditionalServiceFactory::new(db, hotel.id)
        .name("Spa")
        .build()
        .await?;

    let service = AdditionalServiceService::new(db);

    let updated = service.set_enabled("Grand", "Spa", false).await?;
    assert!(!updated.enabled);

    let stored = service.get_additional_service("Grand", "Spa").await?;
    assert!(!stored.enabled);

    Ok(())
}

/// Expected: Err(HotelNotFound) and the service of the other hotel still enabled
#[tokio::test]
async fn fails_for_unknown_hotel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel_with_name(db, "Grand").await?;
    factory::additional_service::AdditionalServiceFactory::new(db, hotel.id)
        .name("Spa")
        .enabled(true)
        .build()
        .await?;

    let service = AdditionalServiceService::new(db);
    let result = service.set_enabled("Atlantis", "Spa", false).await;

    assert!(matches!(
        result,
        Err(AppError::HotelApiErr(HotelApiError::HotelNotFound { .. }))
    ));
    assert!(service.get_additional_service("Grand", "Spa").await?.enabled);

    Ok(())
}
