use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime};

use crate::api::registry_config_dto::{DEFAULT_MAX_COURTS, MAX_CONFIGURED_COURTS, RegistryConfigDto};
use crate::domain::lighting_manager::LightingManager;
use crate::domain::reservation::{CourtId, Reservation, ReservationId};
use crate::error::{Error, Result};

/// Books courts of a fixed-size pool and answers availability queries.
///
/// A court can be reserved at most once per calendar date. Conflicts are
/// decided by exact `(court, date)` equality; durations and times of day never
/// take part in the check.
///
/// Every operation comes in two forms: a boolean one (`book`,
/// `check_availability`, ...) which only reports success, and a `try_` form
/// returning [`Error::InvalidCourt`] or [`Error::Conflict`] so callers can tell
/// the failure kinds apart. The boolean form is always `try_...().is_ok()`.
#[derive(Debug, Clone)]
pub struct ReservationRegistry {
    max_courts: usize,

    /// Reservations in booking order.
    reservations: Vec<Reservation>,

    /// Lookup of the reservation occupying a `(court, date)` slot.
    slot_index: HashMap<(CourtId, NaiveDate), ReservationId>,

    next_id: u64,
    lighting: LightingManager,
}

impl Default for ReservationRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_COURTS)
    }
}

impl ReservationRegistry {
    pub fn new(max_courts: usize) -> Self {
        ReservationRegistry {
            max_courts,
            reservations: Vec::new(),
            slot_index: HashMap::new(),
            next_id: 0,
            lighting: LightingManager::new(max_courts),
        }
    }

    /// Builds a registry from its configuration, booking the seed reservations
    /// in order and switching on the listed lights.
    ///
    /// Fails with [`Error::InvalidConfig`] if the pool is larger than
    /// [`MAX_CONFIGURED_COURTS`] or any seed entry is rejected.
    pub fn from_dto(dto: RegistryConfigDto) -> Result<Self> {
        if dto.max_courts > MAX_CONFIGURED_COURTS {
            return Err(Error::InvalidConfig(format!(
                "maxCourts {} exceeds the limit of {} courts",
                dto.max_courts, MAX_CONFIGURED_COURTS
            )));
        }

        let mut registry = ReservationRegistry::new(dto.max_courts);

        for reservation in dto.reservations {
            registry
                .try_book(reservation.court_id, reservation.date, reservation.duration_minutes)
                .map_err(|e| Error::InvalidConfig(format!("seed reservation rejected: {}", e)))?;
        }

        for court_id in dto.lights_on {
            registry
                .lighting
                .try_turn_on(court_id)
                .map_err(|e| Error::InvalidConfig(format!("cannot switch on lights: {}", e)))?;
        }

        Ok(registry)
    }

    pub fn max_courts(&self) -> usize {
        self.max_courts
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    /// All reservations in booking order.
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn get(&self, id: ReservationId) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.get_id() == id)
    }

    /// The reservation occupying `court_id` on `date`, if any.
    pub fn find(&self, court_id: CourtId, date: NaiveDate) -> Option<&Reservation> {
        let id = self.slot_index.get(&(court_id, date))?;
        self.get(*id)
    }

    pub fn reservations_for_court(&self, court_id: CourtId) -> impl Iterator<Item = &Reservation> + '_ {
        self.reservations.iter().filter(move |r| r.get_court_id() == court_id)
    }

    /// Reserves `court_id` on `date`.
    ///
    /// # Returns
    /// Returns false without changing anything if the court does not exist or
    /// is already reserved on that date.
    pub fn book(&mut self, court_id: CourtId, date: NaiveDate, duration_minutes: i64) -> bool {
        self.try_book(court_id, date, duration_minutes).is_ok()
    }

    /// Reserves `court_id` on `date` and returns the id of the new reservation.
    pub fn try_book(&mut self, court_id: CourtId, date: NaiveDate, duration_minutes: i64) -> Result<ReservationId> {
        self.ensure_free(court_id, date).inspect_err(|e| match e {
            Error::InvalidCourt { .. } => log::warn!("Court {} rejected: pool has {} courts.", court_id, self.max_courts),
            _ => log::info!("Court {} is already reserved on {}.", court_id, date),
        })?;

        let id = ReservationId(self.next_id);
        self.next_id += 1;

        let reservation = Reservation::new(id, court_id, date, duration_minutes);
        log::debug!("Booked {}.", reservation);

        self.slot_index.insert(reservation.slot(), id);
        self.reservations.push(reservation);

        Ok(id)
    }

    /// Removes the first reservation, in booking order, made for court `id`.
    ///
    /// Note that `id` is compared against the **court** number, not against a
    /// [`ReservationId`]. When a court is booked on several dates, only the
    /// earliest booking is removed. Use [`Self::cancel_reservation`] to cancel
    /// one specific reservation.
    pub fn cancel(&mut self, id: CourtId) -> bool {
        self.cancel_by_court(id).is_some()
    }

    /// Same as [`Self::cancel`], returning the removed reservation.
    pub fn cancel_by_court(&mut self, court_id: CourtId) -> Option<Reservation> {
        let position = self.reservations.iter().position(|r| r.get_court_id() == court_id);

        match position {
            Some(position) => Some(self.remove_at(position)),
            None => {
                log::info!("Cancel for court {} ignored: court has no reservation.", court_id);
                None
            }
        }
    }

    /// Removes the reservation with the given id.
    pub fn cancel_reservation(&mut self, id: ReservationId) -> Result<Reservation> {
        let position = self.reservations.iter().position(|r| r.get_id() == id).ok_or_else(|| {
            log::info!("Cancel for reservation {} ignored: unknown id.", id);
            Error::UnknownReservation(id)
        })?;

        Ok(self.remove_at(position))
    }

    /// Checks whether `court_id` can still be booked on `date`.
    ///
    /// `time_of_day` is accepted for callers that track it but does not take
    /// part in the check: a court is either free or taken for the whole date.
    pub fn check_availability(&self, court_id: CourtId, date: NaiveDate, time_of_day: NaiveTime) -> bool {
        self.try_check_availability(court_id, date, time_of_day).is_ok()
    }

    pub fn try_check_availability(&self, court_id: CourtId, date: NaiveDate, _time_of_day: NaiveTime) -> Result<()> {
        self.ensure_free(court_id, date)
            .inspect_err(|e| log::debug!("Court {} unavailable on {}: {}", court_id, date, e))
    }

    pub fn turn_lights_on(&mut self, court_id: CourtId) -> bool {
        self.lighting.turn_on(court_id)
    }

    pub fn turn_lights_off(&mut self, court_id: CourtId) -> bool {
        self.lighting.turn_off(court_id)
    }

    /// Lighting state of `court_id`, or `None` if the court does not exist.
    pub fn is_lit(&self, court_id: CourtId) -> Option<bool> {
        self.lighting.is_on(court_id)
    }

    pub fn lighting(&self) -> &LightingManager {
        &self.lighting
    }

    /// Current reservations as a JSON array, in booking order.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.reservations)?)
    }

    fn ensure_free(&self, court_id: CourtId, date: NaiveDate) -> Result<()> {
        if !self.is_valid_court(court_id) {
            return Err(Error::InvalidCourt { court_id, max_courts: self.max_courts });
        }

        if self.slot_index.contains_key(&(court_id, date)) {
            return Err(Error::Conflict { court_id, date });
        }

        Ok(())
    }

    fn is_valid_court(&self, court_id: CourtId) -> bool {
        usize::try_from(court_id).is_ok_and(|index| index < self.max_courts)
    }

    fn remove_at(&mut self, position: usize) -> Reservation {
        let reservation = self.reservations.remove(position);
        self.slot_index.remove(&reservation.slot());
        log::info!("Cancelled {}.", reservation);
        reservation
    }
}
