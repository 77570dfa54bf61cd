//! bin2iso CLI
//!
//! Converts a raw BIN disc image (2352 or 2336 bytes/sector) to a
//! standard data-only ISO image.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;

use bin2iso::convert_file;

#[derive(Parser)]
#[command(name = "bin2iso")]
#[command(about = "Convert raw BIN disc images to standard ISO images", version)]
struct Cli {
    /// Source BIN image (raw 2352 or Mode 2 2336 sectors)
    image: PathBuf,

    /// Destination ISO file (defaults to the source name with an .iso extension)
    output: Option<PathBuf>,
}

/// Derive the destination name from the source name
///
/// `image.bin` becomes `image.iso`; any other name gets `.iso` appended.
fn derive_output_path(source: &Path) -> PathBuf {
    match source.extension() {
        Some(ext) if ext.eq_ignore_ascii_case("bin") => source.with_extension("iso"),
        _ => {
            let mut name = source.as_os_str().to_os_string();
            name.push(".iso");
            PathBuf::from(name)
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| derive_output_path(&cli.image));

    match convert_file(&cli.image, &output) {
        Ok(report) => {
            println!(
                "{}: {} sectors -> {} ({} bytes)",
                report.layout.name(),
                report.sectors,
                output.display(),
                report.bytes_written
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
