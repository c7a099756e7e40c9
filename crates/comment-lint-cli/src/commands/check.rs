//! Check command implementation.

use anyhow::{Context, Result};
use comment_lint_core::{Analyzer, Config, Rule, RuleBox, Severity};
use comment_lint_rules::InlineComment;
use std::path::Path;

use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    rules_filter: Option<String>,
    exclude: Vec<String>,
    source: &crate::config_resolver::ConfigSource,
) -> Result<()> {
    let config = match source {
        crate::config_resolver::ConfigSource::Default => Config::default(),
        other => {
            // Invariant: non-Default variants always have a path
            let p = other.path().context("resolved config has no path")?;
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            Config::from_file(p)
                .with_context(|| format!("Failed to load config: {}", p.display()))?
        }
    };

    let fail_on = fail_on_severity(&config);

    // Add rules based on filter
    let rules_to_add = if let Some(filter) = rules_filter {
        let rule_names: Vec<&str> = filter.split(',').map(str::trim).collect();
        filter_rules(&rule_names, &config)
    } else {
        vec![Box::new(configured_inline_comment(&config)) as RuleBox]
    };

    // Build analyzer
    let mut builder = Analyzer::builder().root(path).config(config);

    // Add exclude patterns
    for pattern in exclude {
        builder = builder.exclude(pattern);
    }

    for rule in rules_to_add {
        builder = builder.rule_box(rule);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!("Analyzing {:?} with {} rules", path, analyzer.rule_count());

    let result = analyzer.analyze().context("Analysis failed")?;

    // Output results
    super::output::print(&result, format)?;

    // Exit with error code past the failure threshold
    if result.has_violations_at(fail_on) {
        std::process::exit(1);
    }

    Ok(())
}

/// Severity threshold that makes the check command fail.
fn fail_on_severity(config: &Config) -> Severity {
    match config.fail_on.as_deref() {
        Some("info") => Severity::Info,
        Some("warning") => Severity::Warning,
        Some("error") | None => Severity::Error,
        Some(other) => {
            tracing::warn!("Unknown fail_on severity '{}', using 'error'", other);
            Severity::Error
        }
    }
}

/// Builds the inline-comment rule with options from the config file.
fn configured_inline_comment(config: &Config) -> InlineComment {
    let mut rule = InlineComment::new();
    if let Some(rule_config) = config.rules.get(rule.name()) {
        let markers = rule_config.get_str_array("continuation_markers");
        if !markers.is_empty() {
            rule = rule.continuation_markers(markers);
        }
    }
    rule
}

fn filter_rules(names: &[&str], config: &Config) -> Vec<RuleBox> {
    let mut rules: Vec<RuleBox> = Vec::new();

    for name in names {
        match *name {
            "inline-comment" | "CL001" => {
                rules.push(Box::new(configured_inline_comment(config)));
            }
            _ => tracing::warn!("Unknown rule: {}", name),
        }
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fail_on_parses_known_levels() {
        let mut config = Config::default();
        assert_eq!(fail_on_severity(&config), Severity::Error);

        config.fail_on = Some("warning".to_string());
        assert_eq!(fail_on_severity(&config), Severity::Warning);

        config.fail_on = Some("bogus".to_string());
        assert_eq!(fail_on_severity(&config), Severity::Error);
    }

    #[test]
    fn rule_options_reach_the_rule() {
        let config = Config::parse(
            r#"
[rules.inline-comment]
continuation_markers = ["-", "@todo", "*"]
"#,
        )
        .expect("parse config");

        let rule = configured_inline_comment(&config);
        assert_eq!(rule.continuation_markers, vec!["-", "@todo", "*"]);
    }

    #[test]
    fn filter_accepts_name_and_code() {
        let config = Config::default();
        assert_eq!(filter_rules(&["inline-comment"], &config).len(), 1);
        assert_eq!(filter_rules(&["CL001"], &config).len(), 1);
        assert!(filter_rules(&["unknown-rule"], &config).is_empty());
    }
}
