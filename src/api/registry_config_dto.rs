use chrono::NaiveDate;
use serde::Deserialize;

/// Size of the court pool when the configuration does not name one.
pub const DEFAULT_MAX_COURTS: usize = 10;

/// Largest court pool a configuration may request. Keeps every court index
/// representable as a `CourtId` and the lighting table small.
pub const MAX_CONFIGURED_COURTS: usize = 100_000;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryConfigDto {
    #[serde(default = "default_max_courts")]
    pub max_courts: usize,

    /// Reservations booked in order when the registry is built.
    #[serde(default)]
    pub reservations: Vec<ReservationDto>,

    /// Courts whose lights are switched on when the registry is built.
    #[serde(default)]
    pub lights_on: Vec<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDto {
    pub court_id: i64,
    pub date: NaiveDate,
    pub duration_minutes: i64,
}

fn default_max_courts() -> usize {
    DEFAULT_MAX_COURTS
}
