pub mod lighting_manager;
pub mod reservation;
pub mod reservation_registry;
pub mod shared_registry;
