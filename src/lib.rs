use crate::api::registry_config_dto::RegistryConfigDto;
use crate::error::Result;
use crate::loader::parser::parse_json_file;

pub mod api;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;

pub use crate::domain::lighting_manager::LightingManager;
pub use crate::domain::reservation::{CourtId, Reservation, ReservationId};
pub use crate::domain::reservation_registry::ReservationRegistry;
pub use crate::domain::shared_registry::SharedReservationRegistry;

/// Builds a [`ReservationRegistry`] from a JSON configuration file.
pub fn generate_registry(file_path: &str) -> Result<ReservationRegistry> {
    logger::init();
    log::info!("Loading registry configuration from '{}'.", file_path);

    let dto: RegistryConfigDto = parse_json_file::<RegistryConfigDto>(file_path)?;
    log::info!("JSON file parsed successfully.");

    let registry = ReservationRegistry::from_dto(dto)?;
    log::info!(
        "Reservation registry constructed: {} courts, {} reservations.",
        registry.max_courts(),
        registry.len()
    );

    Ok(registry)
}
