/// Sector-by-sector BIN to ISO conversion

use std::fmt;
use std::io::{Read, Seek, SeekFrom, Write};

use crate::error::{ConvertError, Phase, Result};
use crate::format::{detect_layout, SectorLayout, MAX_SECTOR_SIZE, MODE_OFFSET, PAYLOAD_SIZE, PROBE_SIZE};
use crate::geometry::ImageGeometry;

/// Non-fatal condition noticed during conversion
///
/// Warnings never change which bytes are extracted; they are logged and
/// collected into the [`ConversionReport`] while conversion continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// Image length is not a multiple of the sector size; the tail is dropped
    SizeMisaligned {
        /// Sector size the image was measured against
        sector_size: u64,
        /// Trailing bytes excluded from the output
        dropped_bytes: u64,
    },
    /// A sector's mode field differs from the mode detected at the start
    ModeMismatch {
        /// Zero-based index of the offending sector
        sector: u64,
        /// Mode value found in the sector
        observed: u8,
        /// Mode value the detected layout expects
        expected: u8,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::SizeMisaligned {
                sector_size,
                dropped_bytes,
            } => write!(
                f,
                "Image size is not a factor of sector size {sector_size}, \
                 last {dropped_bytes} bytes will be dropped"
            ),
            Warning::ModeMismatch {
                sector,
                observed,
                expected,
            } => write!(
                f,
                "Sector {sector} has different mode ({observed} instead of {expected})"
            ),
        }
    }
}

/// Summary of a completed conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    /// Layout detected from the first sector
    pub layout: SectorLayout,
    /// Number of sectors converted
    pub sectors: u64,
    /// Number of payload bytes written to the destination
    pub bytes_written: u64,
    /// Non-fatal conditions noticed along the way
    pub warnings: Vec<Warning>,
}

/// Convert a BIN image to ISO, detecting the layout from the first sector
///
/// Reads a 16-byte probe, detects the layout, measures the source by
/// seeking to its end and rewinding, then converts every complete sector.
/// The source must be positioned at offset 0.
pub fn convert<R, W>(source: &mut R, dest: &mut W) -> Result<ConversionReport>
where
    R: Read + Seek,
    W: Write,
{
    let mut probe = [0u8; PROBE_SIZE];
    source
        .read_exact(&mut probe)
        .map_err(|e| ConvertError::io(Phase::ProbeRead, e))?;

    let layout = detect_layout(&probe)?;

    let total_len = source
        .seek(SeekFrom::End(0))
        .map_err(|e| ConvertError::io(Phase::SourceLength, e))?;
    source
        .seek(SeekFrom::Start(0))
        .map_err(|e| ConvertError::io(Phase::SourceLength, e))?;

    let geometry = ImageGeometry::for_length(total_len, layout.sector_size() as u64);

    convert_sectors(source, dest, layout, geometry)
}

/// Convert with an already-detected layout and precomputed geometry
///
/// The source must be positioned at the first sector. Sectors are
/// processed in ascending order; any short read or write aborts the
/// conversion. A sector whose mode field disagrees with the layout is
/// still extracted using the detected layout, with a warning.
pub fn convert_sectors<R, W>(
    source: &mut R,
    dest: &mut W,
    layout: SectorLayout,
    geometry: ImageGeometry,
) -> Result<ConversionReport>
where
    R: Read,
    W: Write,
{
    let mut warnings = Vec::new();

    if !geometry.is_aligned() {
        push_warning(
            &mut warnings,
            Warning::SizeMisaligned {
                sector_size: layout.sector_size() as u64,
                dropped_bytes: geometry.tail_bytes,
            },
        );
    }

    // One scratch buffer for the whole run, sliced to the sector size in use
    let mut buf = [0u8; MAX_SECTOR_SIZE];
    let sector = &mut buf[..layout.sector_size()];
    let payload_range = layout.header_size()..layout.header_size() + PAYLOAD_SIZE;

    for index in 0..geometry.sector_count {
        source
            .read_exact(sector)
            .map_err(|e| ConvertError::io(Phase::SectorRead, e))?;

        if let Some(expected) = layout.mode_byte() {
            let observed = sector[MODE_OFFSET];
            if observed != expected {
                push_warning(
                    &mut warnings,
                    Warning::ModeMismatch {
                        sector: index,
                        observed,
                        expected,
                    },
                );
            }
        }

        dest.write_all(&sector[payload_range.clone()])
            .map_err(|e| ConvertError::io(Phase::PayloadWrite, e))?;
    }

    Ok(ConversionReport {
        layout,
        sectors: geometry.sector_count,
        bytes_written: geometry.sector_count * PAYLOAD_SIZE as u64,
        warnings,
    })
}

fn push_warning(warnings: &mut Vec<Warning>, warning: Warning) {
    log::warn!("{warning}");
    warnings.push(warning);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::SYNC_HEADER;
    use std::io::Cursor;

    /// Build a raw 2352-byte sector with the given mode and payload fill
    fn raw_sector(mode: u8, fill: u8) -> Vec<u8> {
        let mut sector = vec![0u8; 2352];
        sector[..12].copy_from_slice(&SYNC_HEADER);
        sector[12] = 0x00; // minute
        sector[13] = 0x02; // second
        sector[14] = 0x00; // frame
        sector[MODE_OFFSET] = mode;
        let header = if mode == 1 { 16 } else { 24 };
        for b in &mut sector[header..header + PAYLOAD_SIZE] {
            *b = fill;
        }
        sector
    }

    /// Build a headerless 2336-byte Mode 2 sector with the given payload fill
    fn headerless_sector(fill: u8) -> Vec<u8> {
        let mut sector = vec![0x20u8; 2336];
        for b in &mut sector[8..8 + PAYLOAD_SIZE] {
            *b = fill;
        }
        sector
    }

    #[test]
    fn test_convert_mode1_image() {
        let mut image = Vec::new();
        image.extend_from_slice(&raw_sector(1, 0xAA));
        image.extend_from_slice(&raw_sector(1, 0xBB));

        let mut dest = Vec::new();
        let report = convert(&mut Cursor::new(image), &mut dest).unwrap();

        assert_eq!(report.layout, SectorLayout::Mode1);
        assert_eq!(report.sectors, 2);
        assert_eq!(report.bytes_written, 4096);
        assert!(report.warnings.is_empty());
        assert_eq!(dest.len(), 4096);
        assert!(dest[..2048].iter().all(|&b| b == 0xAA));
        assert!(dest[2048..].iter().all(|&b| b == 0xBB));
    }

    #[test]
    fn test_convert_mode2_image() {
        let mut image = Vec::new();
        image.extend_from_slice(&raw_sector(2, 0x11));

        let mut dest = Vec::new();
        let report = convert(&mut Cursor::new(image), &mut dest).unwrap();

        assert_eq!(report.layout, SectorLayout::Mode2);
        assert_eq!(dest.len(), 2048);
        assert!(dest.iter().all(|&b| b == 0x11));
    }

    #[test]
    fn test_convert_headerless_image() {
        let mut image = Vec::new();
        image.extend_from_slice(&headerless_sector(0x5A));
        image.extend_from_slice(&headerless_sector(0xA5));

        let mut dest = Vec::new();
        let report = convert(&mut Cursor::new(image), &mut dest).unwrap();

        assert_eq!(report.layout, SectorLayout::Mode2Headerless);
        assert_eq!(report.sectors, 2);
        assert_eq!(dest.len(), 4096);
        assert!(dest[..2048].iter().all(|&b| b == 0x5A));
        assert!(dest[2048..].iter().all(|&b| b == 0xA5));
    }

    #[test]
    fn test_misaligned_tail_is_dropped_with_warning() {
        let mut image = Vec::new();
        image.extend_from_slice(&raw_sector(1, 0xAA));
        image.extend_from_slice(&[0xEE; 100]);

        let mut dest = Vec::new();
        let report = convert(&mut Cursor::new(image), &mut dest).unwrap();

        assert_eq!(report.sectors, 1);
        assert_eq!(dest.len(), 2048);
        assert_eq!(
            report.warnings,
            vec![Warning::SizeMisaligned {
                sector_size: 2352,
                dropped_bytes: 100,
            }]
        );
    }

    #[test]
    fn test_mode_mismatch_warns_and_continues() {
        let mut image = Vec::new();
        image.extend_from_slice(&raw_sector(1, 0xAA));
        image.extend_from_slice(&raw_sector(2, 0xBB)); // corrupted mode field

        let mut dest = Vec::new();
        let report = convert(&mut Cursor::new(image), &mut dest).unwrap();

        assert_eq!(report.layout, SectorLayout::Mode1);
        assert_eq!(report.sectors, 2);
        assert_eq!(
            report.warnings,
            vec![Warning::ModeMismatch {
                sector: 1,
                observed: 2,
                expected: 1,
            }]
        );
        // Extraction still uses the Mode 1 header offset for the odd sector
        assert!(dest[2048..2056].iter().all(|&b| b == 0x00));
        assert!(dest[2056..4096].iter().all(|&b| b == 0xBB));
    }

    #[test]
    fn test_unsupported_mode_writes_nothing() {
        let mut image = raw_sector(7, 0xAA);
        image.extend_from_slice(&raw_sector(7, 0xBB));

        let mut dest = Vec::new();
        let result = convert(&mut Cursor::new(image), &mut dest);

        assert!(matches!(
            result,
            Err(ConvertError::UnsupportedMode { observed: 7 })
        ));
        assert!(dest.is_empty());
    }

    #[test]
    fn test_truncated_image_fails_probe() {
        let image = vec![0u8; 10];
        let mut dest = Vec::new();
        let result = convert(&mut Cursor::new(image), &mut dest);

        assert!(matches!(
            result,
            Err(ConvertError::Io {
                phase: Phase::ProbeRead,
                ..
            })
        ));
        assert!(dest.is_empty());
    }

    #[test]
    fn test_warning_messages() {
        let size = Warning::SizeMisaligned {
            sector_size: 2336,
            dropped_bytes: 41,
        };
        assert_eq!(
            size.to_string(),
            "Image size is not a factor of sector size 2336, last 41 bytes will be dropped"
        );

        let mode = Warning::ModeMismatch {
            sector: 5,
            observed: 2,
            expected: 1,
        };
        assert_eq!(
            mode.to_string(),
            "Sector 5 has different mode (2 instead of 1)"
        );
    }
}
