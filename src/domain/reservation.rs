use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of a court in the pool. Signed so that out-of-range input from
/// callers (including negative numbers) is rejected instead of unrepresentable.
pub type CourtId = i64;

/// Unique identifier of a reservation within one registry.
///
/// Assigned from a monotonically increasing counter at booking time and never
/// reused, even after the reservation is cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReservationId(pub u64);

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A booked court on a calendar date.
///
/// Reservations are immutable once created; a change means cancelling and
/// booking again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    id: ReservationId,
    court_id: CourtId,
    date: NaiveDate,

    /// Not validated; kept as given by the caller.
    duration_minutes: i64,
}

impl Reservation {
    pub(crate) fn new(id: ReservationId, court_id: CourtId, date: NaiveDate, duration_minutes: i64) -> Self {
        Reservation { id, court_id, date, duration_minutes }
    }

    pub fn get_id(&self) -> ReservationId {
        self.id
    }

    pub fn get_court_id(&self) -> CourtId {
        self.court_id
    }

    pub fn get_date(&self) -> NaiveDate {
        self.date
    }

    pub fn get_duration_minutes(&self) -> i64 {
        self.duration_minutes
    }

    /// Key used for conflict detection.
    pub fn slot(&self) -> (CourtId, NaiveDate) {
        (self.court_id, self.date)
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} court {} on {} ({} min)", self.id, self.court_id, self.date, self.duration_minutes)
    }
}
