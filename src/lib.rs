pub mod backends;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod error_suggestions;
pub mod project_identity;
pub mod ui;
pub mod utils;

use clap::Parser;
use error_suggestions::ErrorSuggestions;
use std::process::exit;
use ui::ColorMode;

/// Run pkgx CLI entrypoint.
pub fn run_cli() {
    // 1. Signal handling: the child shares our terminal and gets SIGINT itself;
    //    we only remember that the user asked to stop.
    if let Err(e) = ctrlc::set_handler(move || {
        eprintln!();
        ui::mark_interrupted();
        ui::warning("Operation cancelled by user");
    }) {
        ui::warning(&format!("Could not install Ctrl-C handler: {}", e));
    }

    // 2. Parse & configure output
    let args = cli::args::Cli::parse();
    ui::set_quiet(args.global.quiet);
    ui::set_verbose(args.global.verbose);
    ui::init_colors(args.global.color.map(ColorMode::from).unwrap_or_default());

    // 3. Run
    let outcome = cli::dispatcher::dispatch(&args);
    let code = match cli::dispatcher::settle(outcome, ui::is_interrupted()) {
        Ok(code) => code,
        // The Ctrl-C handler already printed the cancellation notice
        Err(e @ error::PkgxError::Interrupted) => e.exit_code(),
        Err(e) => {
            ui::error(&e.display_with_suggestion());
            e.exit_code()
        }
    };

    exit(code);
}
