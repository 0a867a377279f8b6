//! Latest release lookup

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{print_error, print_formatted, OutputFormat};
use crate::config::Config;
use crate::github::{GitHubClient, Release};
use crate::links::{format_version, DownloadLinks};
use crate::state::{format_release_date, FETCH_ERROR_MESSAGE};

#[derive(Serialize)]
struct ReleaseResult {
    tag: String,
    version: String,
    name: String,
    published_at: String,
    release_date: String,
}

impl From<Release> for ReleaseResult {
    fn from(release: Release) -> Self {
        Self {
            version: format_version(Some(release.tag_name.as_str())).to_string(),
            release_date: format_release_date(&release.published_at),
            tag: release.tag_name,
            name: release.name,
            published_at: release.published_at,
        }
    }
}

pub async fn run(format: OutputFormat) -> Result<()> {
    let config = Config::load()?;
    let client = GitHubClient::new(&config.site)?;

    tracing::debug!("Fetching {}", client.latest_url());
    let release = match client.get_latest_release().await {
        Ok(release) => release,
        Err(e) => {
            print_error(FETCH_ERROR_MESSAGE);
            eprintln!("Releases: {}", DownloadLinks::new(&config.site).releases_page());
            return Err(e.into());
        }
    };
    let result = ReleaseResult::from(release);

    print_formatted(&result, format, |r| {
        [
            format!("Release:       {}", r.name),
            format!("Version:       {}", r.version),
            format!("Tag:           {}", r.tag),
            format!("Release date:  {}", r.release_date),
        ]
        .join("\n")
    });

    Ok(())
}
