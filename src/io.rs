/// File-based conversion entry point

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::convert::{convert, ConversionReport};
use crate::error::{ConvertError, Phase, Result};

/// Convert a BIN file on disk to an ISO file
///
/// Opens `source` read-only and creates (or truncates) `dest`, then runs
/// the conversion over buffered handles. The destination is flushed
/// before returning.
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    dest: Q,
) -> Result<ConversionReport> {
    let src = File::open(source).map_err(|e| ConvertError::io(Phase::OpenSource, e))?;
    let dst = File::create(dest).map_err(|e| ConvertError::io(Phase::CreateDestination, e))?;

    let mut reader = BufReader::new(src);
    let mut writer = BufWriter::new(dst);

    let report = convert(&mut reader, &mut writer)?;

    writer
        .flush()
        .map_err(|e| ConvertError::io(Phase::PayloadWrite, e))?;

    Ok(report)
}
