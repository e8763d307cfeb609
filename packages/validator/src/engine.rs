use crate::app_info::AppInfo;
use crate::report::ValidationReport;
use crate::rules::{design_system_usage, RuleRegistry};
use tessera_editor::Tree;
use tracing::debug;

pub const DEFAULT_DESIGN_SYSTEM_THRESHOLD: u8 = 80;

/// Options for configuring an evaluation
#[derive(Debug)]
pub struct ValidationOptions {
    /// Custom rule registry (uses default if None)
    pub registry: Option<RuleRegistry>,

    /// Minimum design-system share, in percent
    pub design_system_threshold: u8,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            registry: None,
            design_system_threshold: DEFAULT_DESIGN_SYSTEM_THRESHOLD,
        }
    }
}

/// Evaluate submission metadata (and optionally the active tree) with the built-in rules
pub fn evaluate(info: &AppInfo, tree: Option<&Tree>) -> ValidationReport {
    evaluate_with(info, tree, ValidationOptions::default())
}

pub fn evaluate_with(info: &AppInfo, tree: Option<&Tree>, options: ValidationOptions) -> ValidationReport {
    let registry = options.registry.unwrap_or_default();

    let items = registry.rules().iter().map(|rule| rule.check(info)).collect();
    let mut report = ValidationReport::from_items(items);
    report.design_system = tree.map(|t| design_system_usage(t, options.design_system_threshold));

    debug!(
        score = report.score,
        passed = report.passed,
        items = report.items.len(),
        "Validation complete"
    );
    report
}
