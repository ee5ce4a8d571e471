use std::path::Path;

/// Linux distribution family, recognised by marker files under `/etc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistroMarker {
    Debian, // Debian, Ubuntu, Mint, ...
    RedHat, // RHEL, CentOS, Fedora, Alma, ...
    Alpine,
    Suse,
}

impl DistroMarker {
    pub const ALL: [DistroMarker; 4] = [
        DistroMarker::Debian,
        DistroMarker::RedHat,
        DistroMarker::Alpine,
        DistroMarker::Suse,
    ];

    /// Files whose mere existence indicates this family.
    pub fn marker_files(&self) -> &'static [&'static str] {
        match self {
            Self::Debian => &["/etc/debian_version"],
            Self::RedHat => &["/etc/redhat-release", "/etc/fedora-release"],
            Self::Alpine => &["/etc/alpine-release"],
            Self::Suse => &["/etc/SuSE-release", "/etc/SUSE-brand"],
        }
    }
}

/// Existence check for marker files.
pub trait MarkerLookup {
    fn exists(&self, path: &Path) -> bool;
}

/// Looks at the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsMarkers;

impl MarkerLookup for FsMarkers {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Every family whose marker is present, in [`DistroMarker::ALL`] order.
pub fn present_markers(lookup: &dyn MarkerLookup) -> Vec<DistroMarker> {
    DistroMarker::ALL
        .into_iter()
        .filter(|marker| {
            marker
                .marker_files()
                .iter()
                .any(|file| lookup.exists(Path::new(file)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::path::PathBuf;

    struct FakeEtc(HashSet<PathBuf>);

    impl MarkerLookup for FakeEtc {
        fn exists(&self, path: &Path) -> bool {
            self.0.contains(path)
        }
    }

    fn etc(files: &[&str]) -> FakeEtc {
        FakeEtc(files.iter().map(PathBuf::from).collect())
    }

    #[test]
    fn empty_etc_has_no_markers() {
        assert!(present_markers(&etc(&[])).is_empty());
    }

    #[test]
    fn either_redhat_file_counts() {
        assert_eq!(
            present_markers(&etc(&["/etc/fedora-release"])),
            vec![DistroMarker::RedHat]
        );
        assert_eq!(
            present_markers(&etc(&["/etc/redhat-release"])),
            vec![DistroMarker::RedHat]
        );
    }

    #[test]
    fn either_suse_file_counts() {
        assert_eq!(
            present_markers(&etc(&["/etc/SUSE-brand"])),
            vec![DistroMarker::Suse]
        );
    }

    #[test]
    fn multiple_markers_keep_fixed_order() {
        let found = present_markers(&etc(&["/etc/alpine-release", "/etc/debian_version"]));
        assert_eq!(found, vec![DistroMarker::Debian, DistroMarker::Alpine]);
    }
}
