use super::read_tree;
use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use clap::{Args, ValueEnum};
use colored::{ColoredString, Colorize};
use std::path::{Path, PathBuf};
use tessera_validator::{evaluate_with, AppInfo, Status, ValidationOptions, ValidationReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// App metadata JSON file
    pub input: PathBuf,

    /// Serialized page tree to check for design-system usage
    #[arg(short, long)]
    pub tree: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Run validation and print the report. Returns whether the app passed.
pub fn validate(args: ValidateArgs, cwd: &Path) -> Result<bool> {
    let config = Config::load(cwd)?;
    let report = build_report(&args, cwd, &config)?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_report(&args.input, &report),
    }

    Ok(report.passed)
}

fn build_report(args: &ValidateArgs, cwd: &Path, config: &Config) -> Result<ValidationReport> {
    let input = cwd.join(&args.input);
    if !input.is_file() {
        return Err(anyhow!("Input path does not exist: {}", input.display()));
    }
    let content = std::fs::read_to_string(&input)?;
    let info: AppInfo = serde_json::from_str(&content)
        .with_context(|| format!("Cannot parse app info in {}", input.display()))?;

    let tree = match &args.tree {
        Some(path) => Some(read_tree(&cwd.join(path), &config.limits())?),
        None => None,
    };

    let options = ValidationOptions {
        design_system_threshold: config.design_system_threshold,
        ..Default::default()
    };
    Ok(evaluate_with(&info, tree.as_ref(), options))
}

fn status_label(status: Status) -> ColoredString {
    match status {
        Status::Pass => "pass".green().bold(),
        Status::Warning => "warning".yellow().bold(),
        Status::Fail => "fail".red().bold(),
    }
}

fn print_report(input: &Path, report: &ValidationReport) {
    println!("🔍 {} {}", "Validating".green().bold(), input.display());
    println!();

    for item in &report.items {
        println!("  {} [{}] {}", status_label(item.status), item.id, item.message);
        if let Some(fix) = &item.fix {
            if item.status != Status::Pass {
                println!("    {} {}", "💡".dimmed(), fix.dimmed());
            }
        }
    }

    if let Some(usage) = &report.design_system {
        println!();
        println!(
            "  {} [{}] {}% design-system components ({}/{})",
            status_label(usage.item.status),
            usage.item.id,
            usage.percent,
            usage.sanctioned,
            usage.total
        );
    }

    let summary = report.summary();
    println!();
    println!(
        "✨ {} Score {}/100",
        if report.passed {
            "Passed".green().bold()
        } else {
            "Failed".red().bold()
        },
        report.score
    );
    println!(
        "   {} passed, {} warnings, {} failed",
        summary.passed, summary.warnings, summary.failed
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_editor::{serializer, ComponentKind, Props, Tree};

    const COMPLETE: &str = r#"{
        "name": "가계부",
        "englishName": "Budget Book",
        "appName": "budget-book",
        "subtitle": "쉽고 빠른 가계부",
        "category": "finance",
        "description": "Track daily spending in seconds",
        "contactEmail": "team@budget.example",
        "ageRating": "all",
        "privacyPolicyUrl": "https://budget.example/privacy"
    }"#;

    fn args(input: &str, tree: Option<&str>) -> ValidateArgs {
        ValidateArgs {
            input: input.into(),
            tree: tree.map(PathBuf::from),
            format: OutputFormat::Json,
        }
    }

    #[test]
    fn test_complete_app_passes() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("app.json"), COMPLETE).unwrap();
        assert!(validate(args("app.json", None), tmp.path()).unwrap());
    }

    #[test]
    fn test_empty_app_fails() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("app.json"), "{}").unwrap();
        assert!(!validate(args("app.json", None), tmp.path()).unwrap());
    }

    #[test]
    fn test_tree_uses_configured_threshold() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("app.json"), COMPLETE).unwrap();
        std::fs::write(Config::path_in(tmp.path()), r#"{"designSystemThreshold": 40}"#).unwrap();

        let mut tree = Tree::new("page");
        let root = tree.root_id().to_string();
        tree.insert(&root, 0, ComponentKind::Button, Props::new()).unwrap();
        tree.insert(&root, 1, ComponentKind::Html, Props::new()).unwrap();
        let blob = serializer::serialize(&tree).unwrap();
        std::fs::write(tmp.path().join("tree.json"), blob.as_str()).unwrap();

        let config = Config::load(tmp.path()).unwrap();
        let report = build_report(&args("app.json", Some("tree.json")), tmp.path(), &config).unwrap();
        let usage = report.design_system.unwrap();
        assert_eq!(usage.percent, 50);
        assert_eq!(usage.item.status, Status::Pass);
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(validate(args("missing.json", None), tmp.path()).is_err());
    }
}
