use super::*;

/// Expected: Ok(Some) within the owning hotel, Ok(None) for an unknown name
#[tokio::test]
async fn finds_excursion_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel(db).await?;
    factory::excursion::ExcursionFactory::new(db, hotel.id)
        .name("Old Town Walk")
        .build()
        .await?;

    let repo = ExcursionRepository::new(db);

    let found = repo
        .find_by_hotel_id_and_name(hotel.id, "Old Town Walk")
        .await?;
    assert_eq!(found.unwrap().name, "Old Town Walk");

    let missing = repo.find_by_hotel_id_and_name(hotel.id, "Boat Trip").await?;
    assert!(missing.is_none());

    Ok(())
}
