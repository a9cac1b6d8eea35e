//! Job scheduling form rules.
//!
//! Pure functions used by the job forms to normalize and validate their
//! fields before a submission payload is built. No I/O.

pub mod receivers;
pub mod recurrence;
pub mod timing;

use thiserror::Error;

/// Form-level validation errors. These block submission locally and are
/// never sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Receiver list contains an invalid address")]
    InvalidEmailList,

    #[error("Send time must be HH:MM")]
    InvalidTimeFormat,

    #[error("{0} is required")]
    Required(&'static str),

    #[error("{0} does not match the expected format")]
    PatternMismatch(&'static str),

    #[error("End date must not be before the start date")]
    EndBeforeStart,
}
