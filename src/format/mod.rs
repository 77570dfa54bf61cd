/// Sector layouts and layout detection

/// Layout constants
pub mod constants;

pub use constants::*;

use crate::error::{ConvertError, Result};

/// Sector layout of a BIN image
///
/// Chosen once from the first sector and used unchanged for the rest of
/// the image. Every layout carries exactly 2048 bytes of user data per
/// sector; the layouts differ only in sector size and how many leading
/// bytes are skipped to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectorLayout {
    /// Mode 1 raw sector: sync (12), address (3), mode (1), data (2048), ECC (288)
    Mode1,
    /// Mode 2 raw sector: sync (12), address (3), mode (1), subheader (8), data (2048), ECC (280)
    Mode2,
    /// Mode 2 without the sync/address/mode header: subheader (8), data (2048), ECC (280)
    Mode2Headerless,
}

impl SectorLayout {
    /// Number of bytes to skip at the start of each sector to reach the payload
    pub fn header_size(&self) -> usize {
        match self {
            SectorLayout::Mode1 => MODE1_HEADER_SIZE,
            SectorLayout::Mode2 => MODE2_HEADER_SIZE,
            SectorLayout::Mode2Headerless => SUBHEADER_SIZE,
        }
    }

    /// Total size of one sector in bytes
    pub fn sector_size(&self) -> usize {
        match self {
            SectorLayout::Mode1 | SectorLayout::Mode2 => RAW_SECTOR_SIZE,
            SectorLayout::Mode2Headerless => HEADERLESS_SECTOR_SIZE,
        }
    }

    /// Expected value of the mode field, if this layout has one to validate
    pub fn mode_byte(&self) -> Option<u8> {
        match self {
            SectorLayout::Mode1 => Some(1),
            SectorLayout::Mode2 => Some(2),
            SectorLayout::Mode2Headerless => None,
        }
    }

    /// Get a human-readable name for this layout
    pub fn name(&self) -> &'static str {
        match self {
            SectorLayout::Mode1 => "Mode 1 (2352)",
            SectorLayout::Mode2 => "Mode 2 (2352)",
            SectorLayout::Mode2Headerless => "Mode 2 (2336)",
        }
    }
}

/// Detect the sector layout from the first bytes of the image
///
/// A missing sync pattern means the image has headerless Mode 2 sectors.
/// With the sync pattern present, the mode field distinguishes Mode 1
/// from Mode 2; any other mode value is fatal.
pub fn detect_layout(probe: &[u8; PROBE_SIZE]) -> Result<SectorLayout> {
    if probe[..SYNC_HEADER.len()] != SYNC_HEADER {
        return Ok(SectorLayout::Mode2Headerless);
    }

    match probe[MODE_OFFSET] {
        1 => Ok(SectorLayout::Mode1),
        2 => Ok(SectorLayout::Mode2),
        observed => Err(ConvertError::UnsupportedMode { observed }),
    }
}
