use serde::{Deserialize, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Host operating system, as far as toolchain selection cares.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Platform {
    Linux,
    Darwin,
    /// Any other OS, carrying its name as reported by the host
    Other(String),
}

impl Platform {
    /// Detect the platform this binary runs on
    pub fn detect() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map an OS name (`std::env::consts::OS` style) to a platform.
    pub fn from_os(os: &str) -> Self {
        match os.to_ascii_lowercase().as_str() {
            "linux" => Platform::Linux,
            "macos" | "darwin" => Platform::Darwin,
            other => Platform::Other(other.to_string()),
        }
    }

    /// Re-derive the variant from the name, so `Other("darwin")` is `Darwin`.
    pub fn canonical(&self) -> Self {
        Self::from_os(self.as_str())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Platform::Linux => "linux",
            Platform::Darwin => "darwin",
            Platform::Other(name) => name,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_os(s.trim()))
    }
}

impl Serialize for Platform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// What to do with platforms that are neither linux nor darwin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlatformPolicy {
    /// Treat them like linux
    #[default]
    LinuxLike,
    /// Refuse to select a toolchain
    Reject,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_os() {
        assert_eq!(Platform::from_os("linux"), Platform::Linux);
        assert_eq!(Platform::from_os("macos"), Platform::Darwin);
        assert_eq!(Platform::from_os("Darwin"), Platform::Darwin);
        assert_eq!(
            Platform::from_os("freebsd"),
            Platform::Other("freebsd".to_string())
        );
    }

    #[test]
    fn test_canonical_maps_known_names_to_variants() {
        assert_eq!(
            Platform::Other("darwin".to_string()).canonical(),
            Platform::Darwin
        );
        assert_eq!(
            Platform::Other("Linux".to_string()).canonical(),
            Platform::Linux
        );
        assert_eq!(
            Platform::Other("freebsd".to_string()).canonical(),
            Platform::Other("freebsd".to_string())
        );
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for name in ["linux", "darwin", "windows"] {
            let platform: Platform = name.parse().unwrap();
            assert_eq!(platform.to_string(), name);
        }
    }

    #[test]
    fn test_policy_deserializes_from_kebab_case() {
        let policy: PlatformPolicy = serde_json::from_str("\"linux-like\"").unwrap();
        assert_eq!(policy, PlatformPolicy::LinuxLike);
        let policy: PlatformPolicy = serde_json::from_str("\"reject\"").unwrap();
        assert_eq!(policy, PlatformPolicy::Reject);
    }
}
