//! Generates the equalizer app icon set: a dark radial-gradient disc with
//! five green bars, rendered at every size the macOS asset catalog needs.

pub mod icon_gen;
pub mod palette;
pub mod render;

/// Install the stderr log subscriber shared by the binaries.
pub fn init_logging(verbose: bool) {
    let log_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
}
