//! Code Launcher - opens files in Visual Studio Code for a host authoring tool
//!
//! This is the binary entry point. All logic lives in the library.

use std::ffi::OsString;

use clap::Parser;
use code_launcher_core::{logging, PlatformContext};
use color_eyre::Result;

/// Every argument is a file to open; there are no options.
#[derive(Parser, Debug)]
#[command(name = "code-launcher")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Files to open, without line numbers
    #[arg(value_name = "FILE", allow_hyphen_values = true, trailing_var_arg = true)]
    files: Vec<OsString>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    // The host only sees our exit status; a missing log dir must not block the launch.
    if let Err(e) = logging::init() {
        eprintln!("code-launcher: logging disabled: {e}");
    }

    let platform = PlatformContext::detect()?;
    tracing::info!(
        "Opening {} file(s) on {} ({})",
        args.files.len(),
        platform.os,
        platform.arch
    );

    if let Err(e) = code_launcher::run(&args.files, platform) {
        tracing::error!("Launch failed: {e}");
        return Err(e.into());
    }

    Ok(())
}
