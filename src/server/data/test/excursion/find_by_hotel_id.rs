use super::*;

/// Expected: Ok with an empty list for a hotel without excursions
#[tokio::test]
async fn returns_empty_list_for_hotel_without_excursions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let grand = factory::hotel::create_hotel(db).await?;
    let atlantis = factory::hotel::create_hotel(db).await?;
    factory::excursion::create_excursion(db, atlantis.id).await?;

    let excursions = ExcursionRepository::new(db).find_by_hotel_id(grand.id).await?;

    assert!(excursions.is_empty());

    Ok(())
}
