//! Error types shared by the date helpers.

/// Raised when a required date argument is missing.
///
/// This is the only error the date, number and sort helpers return. Anything
/// else that goes wrong (an unparsable string, an odd pattern) degrades to a
/// fallback value instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("date input must not be empty")]
    EmptyDate,
}

pub type Result<T> = std::result::Result<T, ValidationError>;
