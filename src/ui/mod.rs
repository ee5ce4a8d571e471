use colored::Colorize;
use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);
static VERBOSE: AtomicBool = AtomicBool::new(false);
static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Terminal color policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            other => Err(format!(
                "Invalid color mode '{}'. Valid: auto, always, never",
                other
            )),
        }
    }
}

/// Apply the color policy. `NO_COLOR` wins over `auto`.
pub fn init_colors(mode: ColorMode) {
    match mode {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => {
            if std::env::var_os("NO_COLOR").is_some() {
                colored::control::set_override(false);
            } else {
                colored::control::unset_override();
            }
        }
    }
}

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

pub fn mark_interrupted() {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

pub fn is_interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

pub fn header(title: &str) {
    if is_quiet() {
        return;
    }
    println!("{}", title.bold());
}

/// Progress notes that must never mix with a command's stdout.
pub fn note(msg: &str) {
    if is_quiet() {
        return;
    }
    eprintln!("{} {}", "→".blue().bold(), msg);
}

/// Debug trace, shown only with `--verbose`.
pub fn verbose(msg: &str) {
    if !is_verbose() {
        return;
    }
    eprintln!("{}", format!("  {}", msg).dimmed());
}

pub fn warning(msg: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg);
}
