pub use super::additional_service::Entity as AdditionalService;
pub use super::excursion::Entity as Excursion;
pub use super::hotel::Entity as Hotel;
pub use super::room::Entity as Room;
pub use super::room_tag::Entity as RoomTag;
