use super::*;

/// Expected: Ok with the stored row reflecting the saved fields
#[tokio::test]
async fn saves_service_in_place() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel(db).await?;
    factory::additional_service::AdditionalServiceFactory::new(db, hotel.id)
        .name("Spa")
        .build()
        .await?;

    let repo = AdditionalServiceRepository::new(db);
    let mut service = repo
        .find_by_hotel_id_and_name(hotel.id, "Spa")
        .await?
        .unwrap();
    service.enabled = false;
    service.description = "Closed for renovation".to_string();

    let saved = repo.save(service.clone()).await?;

    assert_eq!(saved, service);

    let stored = entity::prelude::AdditionalService::find_by_id(service.id)
        .one(db)
        .await?
        .unwrap();
    assert!(!stored.enabled);
    assert_eq!(stored.description, "Closed for renovation");

    Ok(())
}
