mod chat_repo;
pub mod seed;
mod shipment_repo;
mod store;


pub use chat_repo::ChatRepo;
pub use shipment_repo::ShipmentRepo;
pub use store::SessionStore;
