pub mod completions;
pub mod list_managers;
pub mod operation;
pub mod version;

use crate::backends::{AvailabilityProbe, CommandRunner, ManagerRegistry};
use crate::core::{Detector, PlatformSignal};

/// Everything a command needs about the host for one invocation.
///
/// Built fresh per run; nothing here is cached between invocations.
pub struct Context<'a> {
    pub registry: &'a ManagerRegistry,
    pub detector: &'a Detector,
    pub platform: &'a PlatformSignal,
    pub probe: &'a dyn AvailabilityProbe,
    pub runner: &'a dyn CommandRunner,
}
