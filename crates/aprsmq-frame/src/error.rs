/// Errors that can occur while decoding a transport line.
///
/// Every variant is a per-frame diagnostic: the receive loop logs it,
/// drops the line, and keeps going. Encoding cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The line could not be split into address and information parts.
    #[error("could not split into address and info parts: {0:?}")]
    AddressSplit(String),

    /// The information part is neither message form nor third-party relay.
    #[error("not APRS \"message\" format: {0:?}")]
    NotMessage(String),

    /// Message form without the `:` + 9 character + `:` addressee field.
    #[error("malformed addressee field: {0:?}")]
    BadAddressee(String),
}

pub type Result<T> = std::result::Result<T, FrameError>;
