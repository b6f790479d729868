//! Error types.

/// The entropy source could not supply the requested bytes.
#[derive(Debug, thiserror::Error)]
#[error("entropy source failed: {source}")]
pub struct EntropyError {
    #[from]
    source: rand::Error,
}

/// Errors returned by sampling and by the byte-level codecs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Entropy(#[from] EntropyError),

    /// A buffer handed to a codec has the wrong length.
    #[error("{what}: expected {expected} bytes, got {actual}")]
    BufferSize {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("coefficient {index} is {value}, not below the modulus")]
    CoefficientOutOfRange { index: usize, value: u16 },

    #[error("secret key coefficient {index} is {value}, expected 0 or 1")]
    NonBinarySecret { index: usize, value: u16 },

    #[error("message element {index} is {value}, expected 0 or 1")]
    InvalidMessageBit { index: usize, value: u8 },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Length check shared by every `from_bytes`.
pub(crate) fn check_len(what: &'static str, data: &[u8], expected: usize) -> Result<()> {
    if data.len() != expected {
        return Err(Error::BufferSize {
            what,
            expected,
            actual: data.len(),
        });
    }
    Ok(())
}
