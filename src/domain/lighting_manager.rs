use crate::domain::reservation::CourtId;
use crate::error::{Error, Result};

/// Tracks whether the lights of each court are switched on.
///
/// Lighting is independent of reservations: a court can be lit whether or not
/// it is booked. The number of courts is fixed at construction.
#[derive(Debug, Clone)]
pub struct LightingManager {
    lights: Box<[bool]>,
}

impl LightingManager {
    pub fn new(max_courts: usize) -> Self {
        LightingManager { lights: vec![false; max_courts].into_boxed_slice() }
    }

    /// Switches the lights of `court_id` on. Idempotent.
    ///
    /// # Returns
    /// Returns false without changing anything if the court does not exist.
    pub fn turn_on(&mut self, court_id: CourtId) -> bool {
        self.try_turn_on(court_id).is_ok()
    }

    /// Switches the lights of `court_id` off. Idempotent.
    ///
    /// # Returns
    /// Returns false without changing anything if the court does not exist.
    pub fn turn_off(&mut self, court_id: CourtId) -> bool {
        self.try_turn_off(court_id).is_ok()
    }

    pub fn try_turn_on(&mut self, court_id: CourtId) -> Result<()> {
        self.set(court_id, true)
    }

    pub fn try_turn_off(&mut self, court_id: CourtId) -> Result<()> {
        self.set(court_id, false)
    }

    /// Returns the lighting state of a court, or `None` if it does not exist.
    pub fn is_on(&self, court_id: CourtId) -> Option<bool> {
        let index = usize::try_from(court_id).ok()?;
        self.lights.get(index).copied()
    }

    /// Courts whose lights are currently on, in ascending order.
    pub fn lit_courts(&self) -> impl Iterator<Item = CourtId> + '_ {
        self.lights.iter().enumerate().filter(|(_, on)| **on).map(|(index, _)| index as CourtId)
    }

    pub fn len(&self) -> usize {
        self.lights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    fn set(&mut self, court_id: CourtId, on: bool) -> Result<()> {
        let max_courts = self.lights.len();
        let slot = usize::try_from(court_id).ok().and_then(|index| self.lights.get_mut(index));

        match slot {
            Some(light) => {
                *light = on;
                log::debug!("Lights of court {} switched {}.", court_id, if on { "on" } else { "off" });
                Ok(())
            }
            None => {
                log::warn!("Cannot switch lights of court {}: pool has {} courts.", court_id, max_courts);
                Err(Error::InvalidCourt { court_id, max_courts })
            }
        }
    }
}
