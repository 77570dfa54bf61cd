/*!
# bin2iso

A Rust library and CLI for converting raw BIN disc images to standard
data-only ISO images (2048 bytes/sector).

## Features

- Detects Mode 1/2352, Mode 2/2352 and headerless Mode 2/2336 images
  from the first sector alone
- Strips sync/address/mode/subheader and ECC bytes from every sector
- Validates per-sector mode consistency and reports misaligned images
  without aborting
- Idiomatic Rust API with comprehensive error handling

## Quick Start

```rust,no_run
use bin2iso::convert_file;

let report = convert_file("image.bin", "image.iso")?;
println!("{}: {} sectors", report.layout.name(), report.sectors);

for warning in &report.warnings {
    eprintln!("warning: {warning}");
}
# Ok::<(), bin2iso::ConvertError>(())
```

## Sector layouts

Raw images store 2352 or 2336 bytes per sector, of which 2048 bytes are
user data:

- Mode 1 (2352): Sync (12), Address (3), Mode (1), Data (2048), ECC (288)
- Mode 2 (2352): Sync (12), Address (3), Mode (1), Subheader (8), Data (2048), ECC (280)
- Mode 2 (2336): Subheader (8), Data (2048), ECC (280)

The sector size is detected by the presence of the sync pattern; the mode
is read from the mode field.

## Modules

- `format`: Sector layouts, detection and layout constants
- `geometry`: Image geometry derived from the source length
- `convert`: The sector conversion loop, warnings and report
- `io`: File-based conversion entry point
- `error`: Error types and Result alias
*/

#![warn(missing_docs)]

/// The sector conversion loop, warnings and report
pub mod convert;
/// Error types and Result alias
pub mod error;
/// Sector layouts, detection and layout constants
pub mod format;
/// Image geometry derived from the source length
pub mod geometry;
/// File-based conversion entry point
pub mod io;

// Re-export common types
pub use convert::{convert, convert_sectors, ConversionReport, Warning};
pub use error::{ConvertError, Phase, Result};
pub use format::{detect_layout, SectorLayout, PAYLOAD_SIZE};
pub use geometry::ImageGeometry;
pub use io::convert_file;
