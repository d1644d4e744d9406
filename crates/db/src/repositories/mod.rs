mod account_repo;
mod acreage_range_repo;
mod price_range_repo;
mod room_repo;
mod street_repo;

pub use account_repo::AccountRepo;
pub use acreage_range_repo::AcreageRangeRepo;
pub use price_range_repo::PriceRangeRepo;
pub use room_repo::RoomRepo;
pub use street_repo::StreetRepo;
