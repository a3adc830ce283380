use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::reservation::{CourtId, ReservationId};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Court {court_id} is outside the court pool [0, {max_courts})")]
    InvalidCourt { court_id: CourtId, max_courts: usize },

    #[error("Court {court_id} is already reserved on {date}")]
    Conflict { court_id: CourtId, date: NaiveDate },

    #[error("No reservation with id {0}")]
    UnknownReservation(ReservationId),

    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse registry configuration JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Failed to build reservation registry: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
