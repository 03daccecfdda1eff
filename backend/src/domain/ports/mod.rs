//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod building_repository;
mod room_repository;

#[cfg(test)]
pub use building_repository::MockBuildingRepository;
pub use building_repository::{BuildingRepository, BuildingRepositoryError};
#[cfg(test)]
pub use room_repository::MockRoomRepository;
pub use room_repository::{RoomRepository, RoomRepositoryError};
