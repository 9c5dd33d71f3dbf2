use anyhow::Result;
use app_icon_gen::icon_gen::{self, DEFAULT_OUTPUT_DIR, ICON_SIZES};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[clap(
    name = "app-icon-gen",
    about = "Render the equalizer app icon at every macOS icon size"
)]
struct Args {
    /// Output directory. It must already exist. Defaults to the asset
    /// catalog folder under the repository root.
    #[clap(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Log rendering details to stderr
    #[clap(short, long)]
    verbose: bool,
}

/// Asset catalog folder resolved against the repository root, independent
/// of the working directory.
fn default_output_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_OUTPUT_DIR)
}

fn main() -> Result<()> {
    let args = Args::parse();
    app_icon_gen::init_logging(args.verbose);

    let output = args.output.unwrap_or_else(default_output_dir);
    icon_gen::generate_all(&ICON_SIZES, &output)?;
    Ok(())
}
