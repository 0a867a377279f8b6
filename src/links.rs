//! Artifact URL construction for a release tag.
//!
//! Every builder here is pure. When no tag is known yet, versioned artifacts
//! resolve to [`PLACEHOLDER`] so the UI can render a link that goes nowhere.

use serde::Serialize;

use crate::config::SiteConfig;
use crate::platform::Platform;

/// Link target used while no release tag is available
pub const PLACEHOLDER: &str = "#";

/// Release notes live on the project blog, not on the release page
pub const RELEASE_NOTES_URL: &str = "https://blog.floorp.app/categories/release/";

/// Downloadable build of the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Artifact {
    /// Full offline installer
    WindowsInstaller,
    /// Online installer that fetches the rest at install time
    WindowsStubInstaller,
    /// Portable archive, published on a separate channel
    WindowsPortable,
    /// Universal disk image for Intel and Apple Silicon
    MacUniversal,
    LinuxX86_64,
    LinuxAarch64,
}

impl Artifact {
    pub fn all() -> &'static [Artifact] {
        &[
            Artifact::WindowsStubInstaller,
            Artifact::WindowsInstaller,
            Artifact::WindowsPortable,
            Artifact::MacUniversal,
            Artifact::LinuxX86_64,
            Artifact::LinuxAarch64,
        ]
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Artifact::WindowsInstaller => "floorp-windows-x86_64.installer.exe",
            Artifact::WindowsStubInstaller => "floorp-stub.installer.exe",
            Artifact::WindowsPortable => "floorp-windows-x86_64.portable.7z",
            Artifact::MacUniversal => "floorp-macOS-universal.dmg",
            Artifact::LinuxX86_64 => "floorp-linux-x86_64.tar.xz",
            Artifact::LinuxAarch64 => "floorp-linux-aarch64.tar.xz",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Artifact::WindowsInstaller => "Windows installer (offline)",
            Artifact::WindowsStubInstaller => "Windows installer (online)",
            Artifact::WindowsPortable => "Windows portable",
            Artifact::MacUniversal => "macOS universal",
            Artifact::LinuxX86_64 => "Linux x86_64 tarball",
            Artifact::LinuxAarch64 => "Linux AArch64 tarball",
        }
    }

    pub fn platform(&self) -> Platform {
        match self {
            Artifact::WindowsInstaller | Artifact::WindowsStubInstaller | Artifact::WindowsPortable => {
                Platform::Windows
            }
            Artifact::MacUniversal => Platform::Mac,
            Artifact::LinuxX86_64 | Artifact::LinuxAarch64 => Platform::Linux,
        }
    }

    /// Whether the URL depends on the release tag
    pub fn is_versioned(&self) -> bool {
        !matches!(self, Artifact::WindowsPortable)
    }
}

/// Strip a single leading `v` from a tag for display.
///
/// `Some("v1.2.3")` → `"1.2.3"`, `None` → `""`.
pub fn format_version(tag: Option<&str>) -> &str {
    match tag {
        Some(tag) => tag.strip_prefix('v').unwrap_or(tag),
        None => "",
    }
}

/// Builds download URLs for one repository
#[derive(Debug, Clone)]
pub struct DownloadLinks {
    release_host: String,
    owner: String,
    repo: String,
    portable_repo: String,
}

impl DownloadLinks {
    pub fn new(site: &SiteConfig) -> Self {
        Self {
            release_host: site.release_host.trim_end_matches('/').to_string(),
            owner: site.owner.clone(),
            repo: site.repo.clone(),
            portable_repo: site.portable_repo.clone(),
        }
    }

    /// URL for an artifact of the given release.
    ///
    /// The raw tag goes into the URL; only display strips the prefix.
    pub fn artifact_url(&self, tag: Option<&str>, artifact: Artifact) -> String {
        if !artifact.is_versioned() {
            return format!(
                "{}/{}/{}/releases/latest/download/{}",
                self.release_host,
                self.owner,
                self.portable_repo,
                artifact.file_name()
            );
        }

        if format_version(tag).is_empty() {
            return PLACEHOLDER.to_string();
        }
        let Some(tag) = tag else {
            return PLACEHOLDER.to_string();
        };

        format!("{}/{}", self.download_base(tag), artifact.file_name())
    }

    /// URL of the SHA hash manifest published with the release
    pub fn hashes_url(&self, tag: Option<&str>) -> String {
        match tag {
            Some(tag) if !tag.is_empty() => format!("{}/hashes.txt", self.download_base(tag)),
            _ => PLACEHOLDER.to_string(),
        }
    }

    /// Canonical releases listing, shown when the fetch fails
    pub fn releases_page(&self) -> String {
        format!("{}/releases", self.repository_page())
    }

    pub fn repository_page(&self) -> String {
        format!("{}/{}/{}", self.release_host, self.owner, self.repo)
    }

    fn download_base(&self, tag: &str) -> String {
        format!("{}/releases/download/{}", self.repository_page(), tag)
    }
}

/// Package manager install instructions shown next to the direct downloads
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PackageCommand {
    pub manager: &'static str,
    pub platform: Platform,
    pub command: &'static str,
    /// Landing page for the package, when there is one
    pub page: Option<&'static str>,
    /// Link text for `page`
    pub page_label: &'static str,
    /// Whether a copy button is offered
    pub copyable: bool,
}

pub const PACKAGE_COMMANDS: &[PackageCommand] = &[
    PackageCommand {
        manager: "winget",
        platform: Platform::Windows,
        command: "winget install Floorp",
        page: None,
        page_label: "",
        copyable: true,
    },
    PackageCommand {
        manager: "Homebrew",
        platform: Platform::Mac,
        command: "brew install --cask floorp",
        page: Some("https://formulae.brew.sh/cask/floorp"),
        page_label: "View package",
        copyable: true,
    },
    PackageCommand {
        manager: "Flatpak",
        platform: Platform::Linux,
        command: "flatpak install flathub one.ablaze.floorp",
        page: Some("https://flathub.org/apps/one.ablaze.floorp"),
        page_label: "View",
        copyable: true,
    },
    PackageCommand {
        manager: "Ubuntu / Debian (PPA)",
        platform: Platform::Linux,
        command: "curl -fsSL https://ppa.floorp.app/KEY.gpg | sudo gpg --dearmor -o /usr/share/keyrings/Floorp.gpg",
        page: Some("https://ppa.floorp.app/"),
        page_label: "Setup",
        copyable: false,
    },
];

/// Package commands offered for one platform
pub fn package_commands(platform: Platform) -> impl Iterator<Item = &'static PackageCommand> {
    PACKAGE_COMMANDS.iter().filter(move |c| c.platform == platform)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links() -> DownloadLinks {
        DownloadLinks::new(&SiteConfig::default())
    }

    #[test]
    fn test_format_version() {
        assert_eq!(format_version(Some("v1.2.3")), "1.2.3");
        assert_eq!(format_version(Some("11.0")), "11.0");
        assert_eq!(format_version(Some("vv2")), "v2");
        assert_eq!(format_version(None), "");
    }

    #[test]
    fn test_absent_tag_yields_placeholder() {
        let links = links();
        for artifact in Artifact::all().iter().filter(|a| a.is_versioned()) {
            assert_eq!(links.artifact_url(None, *artifact), PLACEHOLDER, "{:?}", artifact);
        }
        assert_eq!(links.hashes_url(None), PLACEHOLDER);
    }

    #[test]
    fn test_bare_prefix_tag_yields_placeholder() {
        assert_eq!(links().artifact_url(Some("v"), Artifact::MacUniversal), PLACEHOLDER);
    }

    #[test]
    fn test_urls_keep_raw_tag() {
        let links = links();
        let tag = Some("v1.2.3");

        assert_eq!(
            links.artifact_url(tag, Artifact::WindowsInstaller),
            "https://github.com/Floorp-Projects/Floorp/releases/download/v1.2.3/floorp-windows-x86_64.installer.exe"
        );
        assert_eq!(
            links.artifact_url(tag, Artifact::WindowsStubInstaller),
            "https://github.com/Floorp-Projects/Floorp/releases/download/v1.2.3/floorp-stub.installer.exe"
        );
        assert_eq!(
            links.artifact_url(tag, Artifact::MacUniversal),
            "https://github.com/Floorp-Projects/Floorp/releases/download/v1.2.3/floorp-macOS-universal.dmg"
        );
        assert_eq!(
            links.artifact_url(tag, Artifact::LinuxX86_64),
            "https://github.com/Floorp-Projects/Floorp/releases/download/v1.2.3/floorp-linux-x86_64.tar.xz"
        );
        assert_eq!(
            links.artifact_url(tag, Artifact::LinuxAarch64),
            "https://github.com/Floorp-Projects/Floorp/releases/download/v1.2.3/floorp-linux-aarch64.tar.xz"
        );
        assert_eq!(
            links.hashes_url(tag),
            "https://github.com/Floorp-Projects/Floorp/releases/download/v1.2.3/hashes.txt"
        );
    }

    #[test]
    fn test_portable_is_version_independent() {
        let links = links();
        let expected = "https://github.com/Floorp-Projects/Floorp-Portable-v2/releases/latest/download/floorp-windows-x86_64.portable.7z";
        assert_eq!(links.artifact_url(None, Artifact::WindowsPortable), expected);
        assert_eq!(links.artifact_url(Some("v12.0.0"), Artifact::WindowsPortable), expected);
    }

    #[test]
    fn test_trailing_slash_on_host_is_ignored() {
        let site = SiteConfig {
            release_host: "https://mirror.example.org/".to_string(),
            ..SiteConfig::default()
        };
        let links = DownloadLinks::new(&site);
        assert_eq!(
            links.releases_page(),
            "https://mirror.example.org/Floorp-Projects/Floorp/releases"
        );
    }

    #[test]
    fn test_package_commands_per_platform() {
        let linux: Vec<_> = package_commands(Platform::Linux).map(|c| c.manager).collect();
        assert_eq!(linux, vec!["Flatpak", "Ubuntu / Debian (PPA)"]);

        let mac: Vec<_> = package_commands(Platform::Mac).map(|c| c.command).collect();
        assert_eq!(mac, vec!["brew install --cask floorp"]);
    }
}
