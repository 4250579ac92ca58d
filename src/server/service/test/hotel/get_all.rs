use super::*;

/// Listing hotels never fails on an empty table.
#[tokio::test]
async fn returns_empty_list_without_hotels() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotels = HotelService::new(db).get_all().await?;

    assert!(hotels.is_empty());

    Ok(())
}

#[tokio::test]
async fn lists_every_hotel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::hotel::create_hotel_with_name(db, "Grand").await?;
    factory::hotel::create_hotel_with_name(db, "Atlantis").await?;

    let hotels = HotelService::new(db).get_all().await?;

    assert_eq!(hotels.len(), 2);
    assert_eq!(hotels[0].name, "Atlantis");

    Ok(())
}
