use std::collections::HashSet;

/// Answers whether a command can be found on the search path.
///
/// Implementations must not spawn processes; a missing command is `false`.
pub trait AvailabilityProbe {
    fn is_available(&self, command: &str) -> bool;
}

/// Probe backed by a PATH lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathProbe;

impl AvailabilityProbe for PathProbe {
    fn is_available(&self, command: &str) -> bool {
        which::which(command).is_ok()
    }
}

/// Probe with a fixed answer set, for synthetic environments.
#[derive(Debug, Clone, Default)]
pub struct StaticProbe {
    available: HashSet<String>,
}

impl StaticProbe {
    pub fn new<I, S>(commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            available: commands.into_iter().map(Into::into).collect(),
        }
    }
}

impl AvailabilityProbe for StaticProbe {
    fn is_available(&self, command: &str) -> bool {
        self.available.contains(command)
    }
}
