//! Bump levels.

use std::fmt;

use semver::Version;

/// Which component of a semantic version to increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum BumpLevel {
    Patch,
    Minor,
    Major,
}

impl BumpLevel {
    /// Compute the next version. Pre-release and build metadata are
    /// dropped.
    pub fn apply_to(&self, version: &Version) -> Version {
        match self {
            BumpLevel::Patch => Version::new(version.major, version.minor, version.patch + 1),
            BumpLevel::Minor => Version::new(version.major, version.minor + 1, 0),
            BumpLevel::Major => Version::new(version.major + 1, 0, 0),
        }
    }
}

impl fmt::Display for BumpLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BumpLevel::Patch => "patch",
            BumpLevel::Minor => "minor",
            BumpLevel::Major => "major",
        };
        f.write_str(name)
    }
}
