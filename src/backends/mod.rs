//! # Package Manager Backends
//!
//! Native package managers are described as data rather than one type per
//! manager.
//!
//! ## Module Structure
//!
//! ### [`config`] - Manager Descriptors
//!
//! `ManagerDescriptor` holds a manager's name, its executable, and an
//! argument template for every operation (install, remove, update, upgrade,
//! search). Templates use `{packages}` as the package-list placeholder; an
//! operation a manager lacks is `ArgTemplate::Unsupported`.
//!
//! ### [`registry`] - Built-in Managers
//!
//! The ordered `ManagerRegistry` of apt, dnf, microdnf, yum, zypper, apk, brew
//! and chocolatey. Order is the last-resort detection fallback.
//!
//! ### [`probe`] - Availability
//!
//! `AvailabilityProbe` answers "is this binary on PATH?" without running it.
//!
//! ### [`generic`] - Dispatch
//!
//! `Dispatcher` renders a descriptor template and spawns the manager with the
//! caller's terminal attached, or only describes the command in dry-run mode.
//!
//! ## Example: Adding a New Manager
//!
//! ```rust
//! use pkgx::backends::config::{ArgTemplate, ManagerDescriptor};
//!
//! let pacman = ManagerDescriptor {
//!     name: "pacman",
//!     command: "pacman",
//!     install: ArgTemplate::Args("-S --noconfirm {packages}"),
//!     remove: ArgTemplate::Args("-R --noconfirm {packages}"),
//!     update: ArgTemplate::Args("-Sy"),
//!     upgrade_all: ArgTemplate::Args("-Syu --noconfirm"),
//!     upgrade: ArgTemplate::Args("-S --noconfirm {packages}"),
//!     search: ArgTemplate::Args("-Ss {packages}"),
//! };
//! assert_eq!(pacman.command, "pacman");
//! ```

pub mod config;
pub mod generic;
pub mod probe;
pub mod registry;

pub use config::{ArgTemplate, ManagerDescriptor};
pub use generic::{CommandRunner, Dispatcher, SystemRunner};
pub use probe::{AvailabilityProbe, PathProbe, StaticProbe};
pub use registry::{ManagerRegistry, builtin_managers};
