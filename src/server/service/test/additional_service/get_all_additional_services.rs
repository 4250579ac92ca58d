use super::*;

#[tokio::test]
async fn lists_services_of_hotel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel_with_name(db, "Grand").await?;
    factory::additional_service::create_additional_service(db, hotel.id).await?;
    factory::additional_service::create_additional_service(db, hotel.id).await?;

    let services = AdditionalServiceService::new(db)
        .get_all_additional_services("Grand")
        .await?;

    assert_eq!(services.len(), 2);

    Ok(())
}

/// Expected: Err(NoAdditionalServicesFound) for a hotel without services
#[tokio::test]
async fn fails_when_hotel_has_no_services() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::hotel::create_hotel_with_name(db, "Grand").await?;
    let other = factory::hotel::create_hotel(db).await?;
    factory::additional_service::create_additional_service(db, other.id).await?;

    let result = AdditionalServiceService::new(db)
        .get_all_additional_services("Grand")
        .await;

    assert!(matches!(
        result,
        Err(AppError::HotelApiErr(
            HotelApiError::NoAdditionalServicesFound
        ))
    ));

    Ok(())
}

#[tokio::test]
async fn fails_for_unknown_hotel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel_with_name(db, "Grand").await?;
    factory::additional_service::create_additional_service(db, hotel.id).await?;

    let result = AdditionalServiceService::new(db)
        .get_all_additional_services("Atlantis")
        .await;

    assert!(matches!(
        result,
        Err(AppError::HotelApiErr(HotelApiError::HotelNotFound { .. }))
    ));

    Ok(())
}
