use std::fmt::{Debug, Display, Error, Formatter};

// Error
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum QRError {
    // Caller facing
    DataTooLong,
    InvalidVersion,
    InvalidMaskingPattern,

    // Internal invariants
    LogOfZero,
    IndexOutOfRange,
}

impl Display for QRError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        let msg = match *self {
            Self::DataTooLong => "Data too long",
            Self::InvalidVersion => "Invalid version",
            Self::InvalidMaskingPattern => "Invalid masking pattern",
            Self::LogOfZero => "Logarithm of zero is undefined in GF(256)",
            Self::IndexOutOfRange => "Bit index out of range",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for QRError {}

pub type QRResult<T> = Result<T, QRError>;
