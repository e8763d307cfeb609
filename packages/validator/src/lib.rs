//! # Tessera Validator
//!
//! Deterministic submission checks for a finished mini-app. Each rule yields
//! exactly one pass / warning / fail item; the report carries a weighted
//! 0–100 score. Problems with the metadata are reported as items, never as
//! errors.

mod app_info;
mod engine;
mod report;
mod rules;

pub use app_info::{AgeRating, AppInfo};
pub use engine::{evaluate, evaluate_with, ValidationOptions, DEFAULT_DESIGN_SYSTEM_THRESHOLD};
pub use report::{DesignSystemUsage, RuleWeight, Status, Summary, ValidationItem, ValidationReport};
pub use rules::{
    design_system_usage, is_design_system_kind, AppNameFormatRule, BannedCategoryRule,
    BannedKeywordRule, PrivacyPolicyRule, RequiredFieldsRule, RuleRegistry, SubtitleLengthRule,
    ValidationRule, BANNED_CATEGORIES, BANNED_KEYWORDS, DESIGN_SYSTEM_KINDS, MAX_SUBTITLE_CHARS,
};
