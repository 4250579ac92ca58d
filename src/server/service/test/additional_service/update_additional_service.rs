use super::*;

/// Expected: Ok with only the present fields changed
#[tokio::test]
async fn merges_present_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel_with_name(db, "Grand").await?;
    let created = factory::additional_service::AdditionalServiceFactory::new(db, hotel.id)
        .name("Spa")
        .description("Sauna and pool access")
        .build()
        .await?;

    let service = AdditionalServiceService::new(db)
        .update_additional_service(
            "Grand",
            UpdateAdditionalServiceParam {
                name: "Spa".to_string(),
                description: None,
                enabled: Some(false),
            },
        )
        .await?;

    assert_eq!(service.id, created.id);
    assert!(!service.enabled);
    assert_eq!(service.description, "Sauna and pool access");

    Ok(())
}

#[tokio::test]
async fn fails_for_unknown_service() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::hotel::create_hotel_with_name(db, "Grand").await?;

    let result = AdditionalServiceService::new(db)
        .update_additional_service(
            "Grand",
            UpdateAdditionalServiceParam {
                name: "Spa".to_string(),
                description: None,
                enabled: Some(false),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::HotelApiErr(
            HotelApiError::AdditionalServiceNotFound { .. }
        ))
    ));

    Ok(())
}

/// Expected: Err(HotelNotFound) and the service of the other hotel untouched
#[tokio::test]
async fn fails_for_unknown_hotel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel_with_name(db, "Grand").await?;
    factory::additional_service::AdditionalServiceFactory::new(db, hotel.id)
        .name("Spa")
        .description("Sauna and pool")
        .build()
        .await?;

    let service = AdditionalServiceService::new(db);
    let result = service
        .update_additional_service(
            "Atlantis",
            UpdateAdditionalServiceParam {
                name: "Spa".to_string(),
                description: Some("Closed".to_string()),
                enabled: None,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::HotelApiErr(HotelApiError::HotelNotFound { .. }))
    ));
    assert_eq!(
        service.get_additional_service("Grand", "Spa").await?.description,
        "Sauna and pool"
    );

    Ok(())
}
