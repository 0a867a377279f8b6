//! Platform detection

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{print_formatted, status_line, OutputFormat};
use crate::config::Config;
use crate::platform::{host_signature, Platform};

#[derive(Serialize)]
struct DetectResult {
    environment: String,
    /// Platform matched by the environment string, if any
    matched: Option<Platform>,
    /// Tab the page opens on
    platform: Platform,
}

pub fn run(env: Option<String>, format: OutputFormat) -> Result<()> {
    let environment = match env {
        Some(env) => env,
        None => Config::load()
            .ok()
            .and_then(|c| c.site.user_agent)
            .unwrap_or_else(host_signature),
    };

    let result = detect(environment);

    print_formatted(&result, format, |r| {
        let mut lines = vec![format!("Environment: {}", r.environment), String::new()];
        for platform in Platform::all() {
            lines.push(status_line(r.platform == *platform, platform.name()));
        }
        if r.matched.is_none() {
            lines.push(String::new());
            lines.push("No platform matched; using the default tab".to_string());
        }
        lines.join("\n")
    });

    Ok(())
}

fn detect(environment: String) -> DetectResult {
    DetectResult {
        matched: Platform::from_environment(&environment),
        platform: Platform::detect(&environment),
        environment,
    }
}
