use std::fmt;

use thiserror::Error;

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Phase of the conversion in which an I/O operation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Opening the source image
    OpenSource,
    /// Creating the destination image
    CreateDestination,
    /// Reading the 16-byte probe from the first sector
    ProbeRead,
    /// Determining the total source length
    SourceLength,
    /// Reading a full sector from the source
    SectorRead,
    /// Writing a 2048-byte payload to the destination
    PayloadWrite,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::OpenSource => "opening source image",
            Phase::CreateDestination => "creating destination image",
            Phase::ProbeRead => "probe read",
            Phase::SourceLength => "determining source length",
            Phase::SectorRead => "sector read",
            Phase::PayloadWrite => "payload write",
        };
        f.write_str(name)
    }
}

/// Errors that can occur when converting a BIN image
#[derive(Debug, Error)]
pub enum ConvertError {
    /// I/O failure; fatal, conversion is aborted immediately
    #[error("I/O error during {phase}: {source}")]
    Io {
        /// Phase in which the failure occurred
        phase: Phase,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The probe sector has a sync header but an unknown mode byte
    #[error("Unsupported track mode {observed}")]
    UnsupportedMode {
        /// Value found in the mode field of the first sector
        observed: u8,
    },
}

impl ConvertError {
    /// Create an I/O error tagged with the phase it occurred in
    pub fn io(phase: Phase, source: std::io::Error) -> Self {
        ConvertError::Io { phase, source }
    }
}
