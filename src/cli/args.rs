use crate::ui::ColorMode;
use crate::utils::machine_output::OutputFormat;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(
    name = "pkgx",
    about = "Universal Package Manager - A wrapper for various system package managers",
    long_about = "Universal Package Manager - A wrapper for various system package managers.\n\
                  Runs install/remove/update/upgrade/search through apt, dnf, yum, microdnf,\n\
                  zypper, apk, brew or chocolatey, whichever fits this system.",
    after_help = "Examples:\n  \
                  pkgx install git vim          # Install packages\n  \
                  pkgx remove old-package       # Remove packages\n  \
                  pkgx update                   # Update package lists\n  \
                  pkgx upgrade                  # Upgrade all packages\n  \
                  pkgx upgrade git vim          # Upgrade specific packages\n  \
                  pkgx search firefox           # Search for packages\n  \
                  pkgx list-managers            # List available package managers",
    version,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalFlags {
    /// Verbose output (detection and spawn details on stderr)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Quiet mode
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// When to use colors
    #[arg(long, value_name = "WHEN", global = true)]
    pub color: Option<ColorArg>,
}

/// `--color` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorMode {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorMode::Auto,
            ColorArg::Always => ColorMode::Always,
            ColorArg::Never => ColorMode::Never,
        }
    }
}

/// Manager selection and dry-run flags shared by every package operation
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Force specific package manager
    #[arg(short = 'm', long, value_name = "NAME")]
    pub manager: Option<String>,

    /// Show command that would be run
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Install packages
    Install {
        /// Packages to install
        #[arg(required = true, num_args = 1..)]
        packages: Vec<String>,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Remove packages
    Remove {
        /// Packages to remove
        #[arg(required = true, num_args = 1..)]
        packages: Vec<String>,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Update package lists
    Update {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Upgrade packages (all of them when none are given)
    Upgrade {
        /// Specific packages to upgrade (optional)
        packages: Vec<String>,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Search for packages
    Search {
        /// Search query
        query: String,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// List available package managers
    ListManagers {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Show version information
    Version,

    /// Generate shell completions
    #[command(hide = true)]
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}
