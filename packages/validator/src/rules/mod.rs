mod app_name;
mod banned_category;
mod banned_keywords;
mod design_system;
mod privacy_policy;
mod required_fields;
mod subtitle;

pub use app_name::AppNameFormatRule;
pub use banned_category::{BannedCategoryRule, BANNED_CATEGORIES};
pub use banned_keywords::{BannedKeywordRule, BANNED_KEYWORDS};
pub use design_system::{design_system_usage, is_design_system_kind, DESIGN_SYSTEM_KINDS};
pub use privacy_policy::PrivacyPolicyRule;
pub use required_fields::RequiredFieldsRule;
pub use subtitle::{SubtitleLengthRule, MAX_SUBTITLE_CHARS};

use crate::app_info::AppInfo;
use crate::report::{RuleWeight, ValidationItem};

/// Trait for implementing submission rules
pub trait ValidationRule {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    fn weight(&self) -> RuleWeight;

    /// Evaluate the rule. Exactly one item per call.
    fn check(&self, info: &AppInfo) -> ValidationItem;

    fn pass(&self, message: String) -> ValidationItem {
        ValidationItem::pass(self.id(), self.name(), self.weight(), message)
    }

    fn warning(&self, message: String) -> ValidationItem {
        ValidationItem::warning(self.id(), self.name(), self.weight(), message)
    }

    fn fail(&self, message: String) -> ValidationItem {
        ValidationItem::fail(self.id(), self.name(), self.weight(), message)
    }
}

/// Registry of submission rules, evaluated in registration order
pub struct RuleRegistry {
    rules: Vec<Box<dyn ValidationRule + Send + Sync>>,
}

impl RuleRegistry {
    /// Create a new registry with all built-in rules
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(BannedKeywordRule),
                Box::new(BannedCategoryRule),
                Box::new(AppNameFormatRule),
                Box::new(SubtitleLengthRule),
                Box::new(RequiredFieldsRule),
                Box::new(PrivacyPolicyRule),
            ],
        }
    }

    /// Get all registered rules
    pub fn rules(&self) -> &[Box<dyn ValidationRule + Send + Sync>] {
        &self.rules
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a custom rule to the registry
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule + Send + Sync>) {
        self.rules.push(rule);
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &format!("{} rules", self.rules.len()))
            .finish()
    }
}
