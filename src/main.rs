//! convergence-compare - Main CLI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use convergence_compare::{
    cli::{Args, Config},
    execution::{run, RunSettings},
    Console,
};
use std::io::IsTerminal;

fn main() {
    let args = Args::parse();
    let console = Console::terminal(args.verbosity());

    if let Err(e) = run_cli(&args, &console) {
        console.error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run_cli(args: &Args, console: &Console) -> Result<()> {
    if let Err(msg) = args.validate() {
        anyhow::bail!(msg);
    }

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let root = args.root_dir();
    let config = Config::load(args.config.as_deref(), &root)
        .context("Failed to load configuration")?;

    let mut settings = RunSettings::from_config(&config, &root);
    if let Some(output) = &args.output {
        settings = settings.with_output(output.clone());
    }
    if args.no_plot {
        settings = settings.without_plot();
    }

    console.detail(&format!("Root: {}", root.display()));
    for dataset in &settings.datasets {
        console.detail(&format!("{}: {}", dataset.label, dataset.directory.display()));
    }

    run(&settings, console).context("Convergence comparison failed")?;

    Ok(())
}
