//! Platform selection and one-shot detection from an environment string.

use serde::{Deserialize, Serialize};

/// Platform tab shown on the download page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Windows,
    Mac,
    Linux,
}

impl Platform {
    pub fn all() -> &'static [Platform] {
        &[Platform::Windows, Platform::Mac, Platform::Linux]
    }

    /// Tab label
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Windows => "Windows",
            Platform::Mac => "macOS",
            Platform::Linux => "Linux",
        }
    }

    /// Classify an environment string (a user agent or host signature).
    ///
    /// Case-insensitive substring match, checked in order: "win", "mac", "linux".
    pub fn from_environment(env: &str) -> Option<Platform> {
        let env = env.to_lowercase();
        if env.contains("win") {
            Some(Platform::Windows)
        } else if env.contains("mac") {
            Some(Platform::Mac)
        } else if env.contains("linux") {
            Some(Platform::Linux)
        } else {
            None
        }
    }

    /// Pick the initial tab: the detected platform, or the default when nothing matches.
    pub fn detect(env: &str) -> Platform {
        match Self::from_environment(env) {
            Some(platform) => {
                tracing::debug!("Detected platform {:?} from {:?}", platform, env);
                platform
            }
            None => {
                tracing::debug!("No platform match in {:?}, keeping default", env);
                Platform::default()
            }
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Environment signature of the running host, e.g. "windows x86_64".
///
/// This is the native stand-in for a browser user agent.
pub fn host_signature() -> String {
    format!("{} {}", std::env::consts::OS, std::env::consts::ARCH)
}
