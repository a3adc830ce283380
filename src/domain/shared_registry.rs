use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{NaiveDate, NaiveTime};

use crate::domain::reservation::{CourtId, Reservation, ReservationId};
use crate::domain::reservation_registry::ReservationRegistry;
use crate::error::Result;

/// Thread-safe handle to a [`ReservationRegistry`].
///
/// Reservations and lighting state are protected with a single lock, held for
/// the whole of each call. Conflict checks read the full reservation set, so
/// nothing finer-grained is used. Clones share the same registry.
#[derive(Debug, Clone)]
pub struct SharedReservationRegistry {
    inner: Arc<Mutex<ReservationRegistry>>,
}

impl SharedReservationRegistry {
    pub fn new(registry: ReservationRegistry) -> Self {
        Self { inner: Arc::new(Mutex::new(registry)) }
    }

    pub fn with_max_courts(max_courts: usize) -> Self {
        Self::new(ReservationRegistry::new(max_courts))
    }

    pub fn book(&self, court_id: CourtId, date: NaiveDate, duration_minutes: i64) -> bool {
        self.lock().book(court_id, date, duration_minutes)
    }

    pub fn try_book(&self, court_id: CourtId, date: NaiveDate, duration_minutes: i64) -> Result<ReservationId> {
        self.lock().try_book(court_id, date, duration_minutes)
    }

    /// Court-based cancellation, see [`ReservationRegistry::cancel`].
    pub fn cancel(&self, id: CourtId) -> bool {
        self.lock().cancel(id)
    }

    pub fn cancel_reservation(&self, id: ReservationId) -> Result<Reservation> {
        self.lock().cancel_reservation(id)
    }

    pub fn check_availability(&self, court_id: CourtId, date: NaiveDate, time_of_day: NaiveTime) -> bool {
        self.lock().check_availability(court_id, date, time_of_day)
    }

    pub fn turn_lights_on(&self, court_id: CourtId) -> bool {
        self.lock().turn_lights_on(court_id)
    }

    pub fn turn_lights_off(&self, court_id: CourtId) -> bool {
        self.lock().turn_lights_off(court_id)
    }

    pub fn is_lit(&self, court_id: CourtId) -> Option<bool> {
        self.lock().is_lit(court_id)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copy of the current reservations in booking order.
    pub fn snapshot(&self) -> Vec<Reservation> {
        self.lock().reservations().to_vec()
    }

    /// Runs `f` with exclusive access to the registry, for sequences of
    /// operations that must not interleave with other callers.
    pub fn with_registry<R>(&self, f: impl FnOnce(&mut ReservationRegistry) -> R) -> R {
        f(&mut self.lock())
    }

    // A poisoned lock comes from a panic in a registry method or in a
    // `with_registry` closure. Both can only change the registry through its
    // public methods, which complete each update before anything can panic,
    // so the invariants still hold behind the poisoned lock.
    fn lock(&self) -> MutexGuard<'_, ReservationRegistry> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<ReservationRegistry> for SharedReservationRegistry {
    fn from(registry: ReservationRegistry) -> Self {
        Self::new(registry)
    }
}
