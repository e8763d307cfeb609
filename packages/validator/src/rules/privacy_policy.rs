use crate::app_info::AppInfo;
use crate::report::{RuleWeight, ValidationItem};
use crate::rules::ValidationRule;

/// Recommended: a privacy policy link. Never fails.
pub struct PrivacyPolicyRule;

impl ValidationRule for PrivacyPolicyRule {
    fn id(&self) -> &'static str {
        "privacy-policy"
    }

    fn name(&self) -> &'static str {
        "Privacy policy link"
    }

    fn weight(&self) -> RuleWeight {
        RuleWeight::Recommended
    }

    fn check(&self, info: &AppInfo) -> ValidationItem {
        match info.privacy_policy_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => self.pass(format!("Privacy policy at {}", url)),
            _ => self
                .warning("No privacy policy link".to_string())
                .with_fix("Link a privacy policy page if the app collects personal data"),
        }
    }
}
