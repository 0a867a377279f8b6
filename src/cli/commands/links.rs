//! Download links for every artifact

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{print_formatted, OutputFormat};
use crate::config::Config;
use crate::github::GitHubClient;
use crate::links::{Artifact, DownloadLinks};
use crate::platform::Platform;

#[derive(Serialize)]
struct LinkEntry {
    platform: Platform,
    label: &'static str,
    url: String,
}

#[derive(Serialize)]
struct LinksResult {
    tag: Option<String>,
    links: Vec<LinkEntry>,
    hashes: String,
    releases_page: String,
}

pub async fn run(tag: Option<String>, format: OutputFormat) -> Result<()> {
    let config = Config::load()?;

    let tag = match tag {
        Some(tag) => Some(tag),
        None => latest_tag(&config).await,
    };

    let result = build(&DownloadLinks::new(&config.site), tag);

    print_formatted(&result, format, |r| {
        let mut lines = vec![format!(
            "Release: {}",
            r.tag.as_deref().unwrap_or("<unknown>")
        )];
        for platform in Platform::all() {
            lines.push(String::new());
            lines.push(format!("{}:", platform));
            for entry in r.links.iter().filter(|e| e.platform == *platform) {
                lines.push(format!("  {:<24} {}", entry.label, entry.url));
            }
        }
        lines.push(String::new());
        lines.push(format!("Hashes:   {}", r.hashes));
        lines.push(format!("Releases: {}", r.releases_page));
        lines.join("\n")
    });

    Ok(())
}

/// Latest tag, or None if the lookup fails. Versioned links fall back to `#`.
async fn latest_tag(config: &Config) -> Option<String> {
    let client = match GitHubClient::new(&config.site) {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!("Could not create GitHub client: {}", e);
            return None;
        }
    };

    match client.get_latest_release().await {
        Ok(release) => Some(release.tag_name),
        Err(e) => {
            tracing::warn!("Error fetching release data: {}", e);
            None
        }
    }
}

fn build(links: &DownloadLinks, tag: Option<String>) -> LinksResult {
    let entries = Artifact::all()
        .iter()
        .map(|artifact| LinkEntry {
            platform: artifact.platform(),
            label: artifact.label(),
            url: links.artifact_url(tag.as_deref(), *artifact),
        })
        .collect();

    LinksResult {
        hashes: links.hashes_url(tag.as_deref()),
        releases_page: links.releases_page(),
        links: entries,
        tag,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn test_unknown_tag_yields_placeholders() {
        let result = build(&DownloadLinks::new(&SiteConfig::default()), None);

        assert_eq!(result.links.len(), Artifact::all().len());
        assert_eq!(result.hashes, "#");
        for entry in &result.links {
            // The portable build always points at its latest release
            if entry.url != "#" {
                assert!(entry.url.contains("/releases/latest/download/"));
            }
        }
    }

    #[test]
    fn test_known_tag_links_every_artifact() {
        let result = build(
            &DownloadLinks::new(&SiteConfig::default()),
            Some("v11.0".to_string()),
        );
        assert!(result.links.iter().all(|e| e.url.starts_with("https://github.com/")));
        assert!(result.hashes.ends_with("/releases/download/v11.0/hashes.txt"));
    }
}
