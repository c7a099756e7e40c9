//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# comment-lint configuration

[analyzer]
# Root directory to analyze (default: current directory)
# root = "./src"

# Glob patterns to exclude from analysis
exclude = [
    "**/target/**",
    "**/vendor/**",
    "**/generated/**",
]

# Glob patterns to include (default: all *.rs files)
# include = ["**/*.rs"]

# Rule configurations
# Each rule can be enabled/disabled and have its severity overridden

[rules.inline-comment]
enabled = true
# severity = "warning"  # Override default severity
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("comment-lint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;
    println!("Created {}", config_path.display());

    Ok(())
}
