use thiserror::Error;

/// Error converting a column value into the requested type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The value's storage class cannot be represented as the target type.
    #[error("cannot convert {from} to {to}")]
    Incompatible {
        from: &'static str,
        to: &'static str,
    },

    /// A text value could not be parsed into the target type.
    #[error("cannot parse '{value}' as {to}")]
    Parse { value: String, to: &'static str },

    /// A numeric value does not fit the target type.
    #[error("{value} out of range for {to}")]
    OutOfRange { value: String, to: &'static str },

    /// NULL where a non-optional type was requested.
    #[error("unexpected NULL value for {to}")]
    UnexpectedNull { to: &'static str },
}
