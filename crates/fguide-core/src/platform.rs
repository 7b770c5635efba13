//! Target operating systems the guide has instructions for

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A supported development platform.
///
/// The set is closed: every content table in this crate has an entry for
/// each variant, so selecting a platform can never fail at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Windows,
    MacOs,
    Linux,
}

impl Platform {
    /// All platforms in selector display order
    pub const ALL: [Platform; 3] = [Platform::Windows, Platform::MacOs, Platform::Linux];

    /// Stable lowercase identifier (`windows`, `macos`, `linux`)
    pub fn id(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::MacOs => "macos",
            Platform::Linux => "linux",
        }
    }

    /// Human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Windows => "Windows",
            Platform::MacOs => "macOS",
            Platform::Linux => "Linux",
        }
    }

    /// Position in [`Platform::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Platform::Windows => 0,
            Platform::MacOs => 1,
            Platform::Linux => 2,
        }
    }

    /// Next platform in display order, wrapping around
    pub fn next(&self) -> Platform {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous platform in display order, wrapping around
    pub fn prev(&self) -> Platform {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Modifier key name used in editor shortcuts on this platform
    pub fn shortcut_modifier(&self) -> &'static str {
        match self {
            Platform::MacOs => "Cmd",
            Platform::Windows | Platform::Linux => "Ctrl",
        }
    }

    /// Minimum machine requirements for Flutter development
    pub fn requirements(&self) -> &'static SystemRequirements {
        match self {
            Platform::Windows => &WINDOWS_REQUIREMENTS,
            Platform::MacOs => &MACOS_REQUIREMENTS,
            Platform::Linux => &LINUX_REQUIREMENTS,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "windows" | "win" => Ok(Platform::Windows),
            "macos" | "mac" | "osx" => Ok(Platform::MacOs),
            "linux" => Ok(Platform::Linux),
            _ => Err(Error::unknown_platform(s)),
        }
    }
}

pub const PLATFORMS_TITLE: &str = "Choose Your Platform";
pub const PLATFORMS_SUBTITLE: &str =
    "Select your operating system to get platform-specific installation instructions";

/// System requirements shown under the platform selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemRequirements {
    pub os: &'static str,
    pub memory: &'static str,
    pub storage: &'static str,
    pub processor: &'static str,
    pub additional: &'static str,
}

impl SystemRequirements {
    /// `(label, value)` pairs in display order
    pub fn rows(&self) -> [(&'static str, &'static str); 5] {
        [
            ("Operating System", self.os),
            ("Memory", self.memory),
            ("Storage", self.storage),
            ("Processor", self.processor),
            ("Additional", self.additional),
        ]
    }
}

static WINDOWS_REQUIREMENTS: SystemRequirements = SystemRequirements {
    os: "Windows 10/11 (64-bit)",
    memory: "4 GB RAM minimum, 8 GB recommended",
    storage: "2 GB free space",
    processor: "Intel i3 or AMD equivalent",
    additional: "Windows PowerShell 5.0 or later",
};

static MACOS_REQUIREMENTS: SystemRequirements = SystemRequirements {
    os: "macOS 10.14 Mojave or later",
    memory: "4 GB RAM minimum, 8 GB recommended",
    storage: "2 GB free space",
    processor: "Intel or Apple Silicon (M1/M2)",
    additional: "Xcode command line tools",
};

static LINUX_REQUIREMENTS: SystemRequirements = SystemRequirements {
    os: "Ubuntu 18.04+, Debian 10+, or equivalent",
    memory: "4 GB RAM minimum, 8 GB recommended",
    storage: "2 GB free space",
    processor: "x64 architecture",
    additional: "curl, git, unzip, xz-utils",
};
