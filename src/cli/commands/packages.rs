//! Package manager install commands

use anyhow::Result;

use crate::cli::output::{print_formatted, OutputFormat};
use crate::links::{package_commands, PackageCommand, PACKAGE_COMMANDS};
use crate::platform::Platform;

pub fn run(platform: Option<Platform>, format: OutputFormat) -> Result<()> {
    let commands = select(platform);

    print_formatted(&commands, format, |commands| {
        commands
            .iter()
            .map(|c| {
                let mut line = format!("{} ({})\n  {}", c.manager, c.platform, c.command);
                if let Some(page) = c.page {
                    line.push_str(&format!("\n  {}", page));
                }
                line
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    });

    Ok(())
}

fn select(platform: Option<Platform>) -> Vec<&'static PackageCommand> {
    match platform {
        Some(platform) => package_commands(platform).collect(),
        None => PACKAGE_COMMANDS.iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_filters_by_platform() {
        assert_eq!(select(None).len(), PACKAGE_COMMANDS.len());

        let linux = select(Some(Platform::Linux));
        assert_eq!(linux.len(), 2);
        assert!(linux.iter().all(|c| c.platform == Platform::Linux));

        let windows = select(Some(Platform::Windows));
        assert_eq!(windows[0].command, "winget install Floorp");
    }
}
