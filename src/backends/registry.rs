use crate::backends::config::{ArgTemplate, ManagerDescriptor};
use crate::backends::probe::AvailabilityProbe;
use crate::error::{PkgxError, Result};
use std::collections::HashSet;

/// Built-in manager descriptors, in fallback order.
pub fn builtin_managers() -> Vec<ManagerDescriptor> {
    vec![
        // === APT (Debian/Ubuntu) ===
        ManagerDescriptor {
            name: "apt",
            command: "apt",
            install: ArgTemplate::Args("install -y {packages}"),
            remove: ArgTemplate::Args("remove -y {packages}"),
            update: ArgTemplate::Args("update"),
            upgrade_all: ArgTemplate::Args("upgrade -y"),
            upgrade: ArgTemplate::Args("upgrade -y {packages}"),
            search: ArgTemplate::Args("search {packages}"),
        },
        // === DNF (Fedora/RHEL 8+) ===
        ManagerDescriptor {
            name: "dnf",
            command: "dnf",
            install: ArgTemplate::Args("install -y {packages}"),
            remove: ArgTemplate::Args("remove -y {packages}"),
            update: ArgTemplate::Args("check-update"),
            upgrade_all: ArgTemplate::Args("update -y"),
            upgrade: ArgTemplate::Args("update -y {packages}"),
            search: ArgTemplate::Args("search {packages}"),
        },
        // === MicroDNF (minimal containers, no search) ===
        ManagerDescriptor {
            name: "microdnf",
            command: "microdnf",
            install: ArgTemplate::Args("install -y {packages}"),
            remove: ArgTemplate::Args("remove -y {packages}"),
            update: ArgTemplate::Args("repolist"),
            upgrade_all: ArgTemplate::Args("update -y"),
            upgrade: ArgTemplate::Args("update -y {packages}"),
            search: ArgTemplate::Unsupported,
        },
        // === YUM (RHEL/CentOS 7) ===
        ManagerDescriptor {
            name: "yum",
            command: "yum",
            install: ArgTemplate::Args("install -y {packages}"),
            remove: ArgTemplate::Args("remove -y {packages}"),
            update: ArgTemplate::Args("check-update"),
            upgrade_all: ArgTemplate::Args("update -y"),
            upgrade: ArgTemplate::Args("update -y {packages}"),
            search: ArgTemplate::Args("search {packages}"),
        },
        // === Zypper (openSUSE) ===
        ManagerDescriptor {
            name: "zypper",
            command: "zypper",
            install: ArgTemplate::Args("install -y {packages}"),
            remove: ArgTemplate::Args("remove -y {packages}"),
            update: ArgTemplate::Args("refresh"),
            upgrade_all: ArgTemplate::Args("update -y"),
            upgrade: ArgTemplate::Args("update -y {packages}"),
            search: ArgTemplate::Args("search {packages}"),
        },
        // === APK (Alpine) ===
        ManagerDescriptor {
            name: "apk",
            command: "apk",
            install: ArgTemplate::Args("add {packages}"),
            remove: ArgTemplate::Args("del {packages}"),
            update: ArgTemplate::Args("update"),
            upgrade_all: ArgTemplate::Args("upgrade"),
            upgrade: ArgTemplate::Args("upgrade {packages}"),
            search: ArgTemplate::Args("search {packages}"),
        },
        // === Homebrew (macOS/Linux) ===
        ManagerDescriptor {
            name: "brew",
            command: "brew",
            install: ArgTemplate::Args("install {packages}"),
            remove: ArgTemplate::Args("uninstall {packages}"),
            update: ArgTemplate::Args("update"),
            upgrade_all: ArgTemplate::Args("upgrade"),
            upgrade: ArgTemplate::Args("upgrade {packages}"),
            search: ArgTemplate::Args("search {packages}"),
        },
        // === Chocolatey (Windows) ===
        ManagerDescriptor {
            name: "chocolatey",
            command: "choco",
            install: ArgTemplate::Args("install {packages} -y"),
            remove: ArgTemplate::Args("uninstall {packages} -y"),
            update: ArgTemplate::Args("outdated"),
            upgrade_all: ArgTemplate::Args("upgrade all -y"),
            upgrade: ArgTemplate::Args("upgrade {packages} -y"),
            search: ArgTemplate::Args("search {packages}"),
        },
    ]
}

/// Ordered, immutable set of known package managers.
///
/// Built once at startup and passed explicitly to detection and dispatch.
#[derive(Debug, Clone)]
pub struct ManagerRegistry {
    managers: Vec<ManagerDescriptor>,
}

impl ManagerRegistry {
    /// Registry holding the built-in managers.
    pub fn builtin() -> Self {
        Self {
            managers: builtin_managers(),
        }
    }

    /// Build a registry from arbitrary descriptors; names must be unique.
    pub fn from_descriptors(managers: Vec<ManagerDescriptor>) -> Result<Self> {
        let mut seen = HashSet::new();
        for manager in &managers {
            if !seen.insert(manager.name) {
                return Err(PkgxError::ConfigError(format!(
                    "Duplicate package manager name: {}",
                    manager.name
                )));
            }
        }
        Ok(Self { managers })
    }

    pub fn iter(&self) -> impl Iterator<Item = &ManagerDescriptor> {
        self.managers.iter()
    }

    pub fn len(&self) -> usize {
        self.managers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.managers.is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        self.managers.iter().map(|m| m.name.to_string()).collect()
    }

    /// Look up a descriptor by name, ignoring availability.
    pub fn get(&self, name: &str) -> Option<&ManagerDescriptor> {
        self.managers.iter().find(|m| m.name == name)
    }

    /// Look up an explicitly requested manager.
    ///
    /// Unknown and not-installed names both yield `None`.
    pub fn find_by_name(
        &self,
        name: &str,
        probe: &dyn AvailabilityProbe,
    ) -> Option<&ManagerDescriptor> {
        self.get(name).filter(|m| probe.is_available(m.command))
    }

    /// Managers whose command is currently on PATH, in registry order.
    pub fn available(&self, probe: &dyn AvailabilityProbe) -> Vec<&ManagerDescriptor> {
        self.managers
            .iter()
            .filter(|m| probe.is_available(m.command))
            .collect()
    }
}

impl Default for ManagerRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
