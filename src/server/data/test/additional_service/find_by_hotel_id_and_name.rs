use super::*;

/// Expected: Ok(Some) within the owning hotel, Ok(None) in another hotel
#[tokio::test]
async fn finds_service_scoped_to_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let grand = factory::hotel::create_hotel(db).await?;
    let atlantis = factory::hotel::create_hotel(db).await?;
    factory::additional_service::AdditionalServiceFactory::new(db, grand.id)
        .name("Spa")
        .build()
        .await?;

    let repo = AdditionalServiceRepository::new(db);

    let found = repo.find_by_hotel_id_and_name(grand.id, "Spa").await?;
    assert_eq!(found.unwrap().hotel_id, grand.id);

    let missing = repo.find_by_hotel_id_and_name(atlantis.id, "Spa").await?;
    assert!(missing.is_none());

    Ok(())
}
