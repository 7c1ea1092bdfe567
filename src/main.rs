use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use eyeslash_icons::GeneratorConfig;

/// Generate the Feed Customizer extension icons
#[derive(Parser, Debug)]
#[command(name = "eyeslash-icons", version, about)]
struct Cli {
    /// Write icons here instead of `icons/` next to the executable
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug); ignored when RUST_LOG is set
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // Progress lines own stdout; diagnostics go to stderr.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = GeneratorConfig {
        out_dir: cli.out_dir,
        ..Default::default()
    };

    println!("Generating Feed Customizer icons...");
    let out_dir = eyeslash_icons::generate::resolve_out_dir(&config)
        .context("could not resolve output directory")?;
    println!("Icons directory: {}", out_dir.display());
    println!();

    let config = GeneratorConfig {
        out_dir: Some(out_dir),
        ..config
    };
    let report = eyeslash_icons::generate(&config).context("icon generation aborted")?;

    for outcome in &report.outcomes {
        let name = eyeslash_icons::generate::icon_file_name(outcome.size);
        match &outcome.result {
            Ok(()) => println!("✓ Created {} ({}x{}px)", name, outcome.size, outcome.size),
            Err(e) => eprintln!("✗ Failed to create {}: {}", name, e),
        }
    }

    println!();
    let failed = report.failed().count();
    if failed > 0 {
        println!(
            "Finished with {} of {} icons created ({} failed).",
            report.succeeded().count(),
            report.outcomes.len(),
            failed
        );
    } else {
        println!("All icons created successfully!");
    }
    println!("You can now load the extension in Chrome");
    Ok(())
}
