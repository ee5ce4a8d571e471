//! Package manager auto-detection
//!
//! Picks the best available manager for the host: platform preferences first,
//! then the first available manager in registry order.

use crate::backends::config::ManagerDescriptor;
use crate::backends::probe::AvailabilityProbe;
use crate::backends::registry::ManagerRegistry;
use crate::ui;
use crate::utils::distro::{self, DistroMarker, FsMarkers, MarkerLookup};
use crate::utils::platform::OsFamily;

/// Host facts used as detection hints. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformSignal {
    pub os: OsFamily,
    pub markers: Vec<DistroMarker>,
}

impl PlatformSignal {
    pub fn new(os: OsFamily, markers: Vec<DistroMarker>) -> Self {
        Self { os, markers }
    }

    /// Read the signal for the running host.
    pub fn current() -> Self {
        Self::probe(OsFamily::current(), &FsMarkers)
    }

    /// Build a signal, consulting `lookup` only on Linux.
    pub fn probe(os: OsFamily, lookup: &dyn MarkerLookup) -> Self {
        let markers = if os == OsFamily::Linux {
            distro::present_markers(lookup)
        } else {
            Vec::new()
        };
        Self { os, markers }
    }

    pub fn has_marker(&self, marker: DistroMarker) -> bool {
        self.markers.contains(&marker)
    }
}

/// When a preference rule applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleCondition {
    Os(OsFamily),
    LinuxMarker(DistroMarker),
}

impl RuleCondition {
    fn matches(&self, signal: &PlatformSignal) -> bool {
        match self {
            Self::Os(os) => signal.os == *os,
            Self::LinuxMarker(marker) => {
                signal.os == OsFamily::Linux && signal.has_marker(*marker)
            }
        }
    }
}

/// One row of the preference table: managers tried in order when `when` holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceRule {
    pub when: RuleCondition,
    pub prefer: Vec<&'static str>,
}

/// Ordered platform preferences. Only the first matching rule is consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceTable {
    rules: Vec<PreferenceRule>,
}

impl PreferenceTable {
    pub fn new(rules: Vec<PreferenceRule>) -> Self {
        Self { rules }
    }

    /// First rule whose condition holds for `signal`.
    pub fn matching_rule(&self, signal: &PlatformSignal) -> Option<&PreferenceRule> {
        self.rules.iter().find(|rule| rule.when.matches(signal))
    }

    pub fn rules(&self) -> &[PreferenceRule] {
        &self.rules
    }
}

impl Default for PreferenceTable {
    fn default() -> Self {
        let rule = |when, prefer| PreferenceRule { when, prefer };
        Self::new(vec![
            rule(RuleCondition::Os(OsFamily::Windows), vec!["chocolatey"]),
            rule(RuleCondition::Os(OsFamily::Darwin), vec!["brew"]),
            rule(RuleCondition::LinuxMarker(DistroMarker::Debian), vec!["apt"]),
            rule(RuleCondition::LinuxMarker(DistroMarker::RedHat), vec!["dnf", "yum"]),
            rule(RuleCondition::LinuxMarker(DistroMarker::Alpine), vec!["apk"]),
            rule(RuleCondition::LinuxMarker(DistroMarker::Suse), vec!["zypper"]),
        ])
    }
}

/// Manager selection policy.
#[derive(Debug, Clone, Default)]
pub struct Detector {
    table: PreferenceTable,
}

impl Detector {
    pub fn new(table: PreferenceTable) -> Self {
        Self { table }
    }

    /// Select a manager, or `None` when nothing in the registry is installed.
    ///
    /// The result is always one of the currently available managers.
    pub fn detect<'r>(
        &self,
        registry: &'r ManagerRegistry,
        platform: &PlatformSignal,
        probe: &dyn AvailabilityProbe,
    ) -> Option<&'r ManagerDescriptor> {
        let available = registry.available(probe);
        ui::verbose(&format!(
            "Available managers: [{}]",
            available
                .iter()
                .map(|m| m.name)
                .collect::<Vec<_>>()
                .join(", ")
        ));

        let first = *available.first()?;

        if let Some(rule) = self.table.matching_rule(platform) {
            ui::verbose(&format!(
                "Platform {} prefers: {}",
                platform.os,
                rule.prefer.join(", ")
            ));
            for preferred in &rule.prefer {
                if let Some(found) = available.iter().find(|m| m.name == *preferred) {
                    return Some(*found);
                }
            }
        }

        ui::verbose(&format!("Falling back to first available: {}", first.name));
        Some(first)
    }
}

/// Detect with the default preference table.
pub fn detect<'r>(
    registry: &'r ManagerRegistry,
    platform: &PlatformSignal,
    probe: &dyn AvailabilityProbe,
) -> Option<&'r ManagerDescriptor> {
    Detector::default().detect(registry, platform, probe)
}
