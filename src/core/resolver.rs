//! Manager selection for one invocation
//!
//! An explicitly requested manager (flag, environment or settings) is looked
//! up by name and must be installed; it is never replaced by detection.
//! Without a request the detector decides.

use crate::backends::config::ManagerDescriptor;
use crate::backends::probe::AvailabilityProbe;
use crate::backends::registry::ManagerRegistry;
use crate::core::detector::{Detector, PlatformSignal};
use crate::error::{PkgxError, Result};
use crate::ui;
use std::fmt;

/// Where an explicit manager name came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerSource {
    Flag,
    Environment,
    Settings,
}

impl fmt::Display for ManagerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag => f.write_str("--manager"),
            Self::Environment => f.write_str("environment"),
            Self::Settings => f.write_str("settings"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerRequest {
    pub name: String,
    pub source: ManagerSource,
}

/// Pick the explicit request with the highest precedence: flag, then
/// environment, then settings. Blank values are ignored.
pub fn requested_manager(
    flag: Option<&str>,
    env: Option<&str>,
    settings: Option<&str>,
) -> Option<ManagerRequest> {
    [
        (flag, ManagerSource::Flag),
        (env, ManagerSource::Environment),
        (settings, ManagerSource::Settings),
    ]
    .into_iter()
    .find_map(|(value, source)| {
        value
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| ManagerRequest {
                name: name.to_string(),
                source,
            })
    })
}

/// Resolve the manager for this invocation.
pub fn resolve_manager<'r>(
    registry: &'r ManagerRegistry,
    request: Option<&ManagerRequest>,
    detector: &Detector,
    platform: &PlatformSignal,
    probe: &dyn AvailabilityProbe,
) -> Result<&'r ManagerDescriptor> {
    if let Some(request) = request {
        ui::verbose(&format!(
            "Manager '{}' requested via {}",
            request.name, request.source
        ));
        return registry
            .find_by_name(&request.name, probe)
            .ok_or_else(|| PkgxError::UnknownManager(request.name.clone()));
    }

    detector
        .detect(registry, platform, probe)
        .ok_or_else(|| PkgxError::NoManagerAvailable {
            supported: registry.names(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::probe::StaticProbe;
    use crate::utils::distro::DistroMarker;
    use crate::utils::platform::OsFamily;

    fn debian() -> PlatformSignal {
        PlatformSignal::new(OsFamily::Linux, vec![DistroMarker::Debian])
    }

    fn request(name: &str) -> ManagerRequest {
        ManagerRequest {
            name: name.to_string(),
            source: ManagerSource::Flag,
        }
    }

    #[test]
    fn flag_beats_env_beats_settings() {
        let picked = requested_manager(Some("apk"), Some("brew"), Some("apt")).unwrap();
        assert_eq!(picked.name, "apk");
        assert_eq!(picked.source, ManagerSource::Flag);

        let picked = requested_manager(None, Some("brew"), Some("apt")).unwrap();
        assert_eq!(picked.source, ManagerSource::Environment);

        let picked = requested_manager(None, Some("  "), Some("apt")).unwrap();
        assert_eq!(picked.name, "apt");
        assert_eq!(picked.source, ManagerSource::Settings);

        assert!(requested_manager(None, None, None).is_none());
    }

    #[test]
    fn explicit_available_manager_is_used_over_detection() {
        let registry = ManagerRegistry::builtin();
        let probe = StaticProbe::new(["apt", "brew"]);
        let picked = resolve_manager(
            &registry,
            Some(&request("brew")),
            &Detector::default(),
            &debian(),
            &probe,
        )
        .unwrap();
        assert_eq!(picked.name, "brew");
    }

    #[test]
    fn unknown_and_unavailable_names_share_one_error() {
        let registry = ManagerRegistry::builtin();
        let probe = StaticProbe::new(["apt"]);
        for name in ["pacman", "dnf"] {
            let err = resolve_manager(
                &registry,
                Some(&request(name)),
                &Detector::default(),
                &debian(),
                &probe,
            )
            .unwrap_err();
            assert!(
                matches!(&err, PkgxError::UnknownManager(n) if n == name),
                "{:?}",
                err
            );
        }
    }

    #[test]
    fn without_request_detection_decides() {
        let registry = ManagerRegistry::builtin();
        let probe = StaticProbe::new(["dnf", "apt"]);
        let picked =
            resolve_manager(&registry, None, &Detector::default(), &debian(), &probe).unwrap();
        assert_eq!(picked.name, "apt");
    }

    #[test]
    fn nothing_installed_lists_supported_managers() {
        let registry = ManagerRegistry::builtin();
        let err = resolve_manager(
            &registry,
            None,
            &Detector::default(),
            &debian(),
            &StaticProbe::default(),
        )
        .unwrap_err();
        match err {
            PkgxError::NoManagerAvailable { supported } => {
                assert_eq!(supported, registry.names());
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
