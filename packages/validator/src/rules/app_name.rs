use crate::app_info::AppInfo;
use crate::report::{RuleWeight, ValidationItem};
use crate::rules::ValidationRule;
use regex::Regex;
use std::sync::OnceLock;

/// Lowercase letter first, then lowercase letters, digits or hyphens
fn app_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z][a-z0-9-]*$").expect("app name pattern is valid"))
}

pub struct AppNameFormatRule;

impl ValidationRule for AppNameFormatRule {
    fn id(&self) -> &'static str {
        "app-name-format"
    }

    fn name(&self) -> &'static str {
        "App name format"
    }

    fn weight(&self) -> RuleWeight {
        RuleWeight::Required
    }

    fn check(&self, info: &AppInfo) -> ValidationItem {
        if info.app_name.is_empty() {
            return self
                .fail("App name is empty".to_string())
                .with_fix("Set an identifier such as 'my-budget'");
        }
        if app_name_pattern().is_match(&info.app_name) {
            self.pass(format!("'{}' is a valid app name", info.app_name))
        } else {
            self.fail(format!("'{}' is not a valid app name", info.app_name))
                .with_fix("Start with a lowercase letter and use only lowercase letters, digits and hyphens")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Status;

    fn check(name: &str) -> Status {
        let info = AppInfo {
            app_name: name.to_string(),
            ..AppInfo::default()
        };
        AppNameFormatRule.check(&info).status
    }

    #[test]
    fn test_valid_names() {
        assert_eq!(check("my-app2"), Status::Pass);
        assert_eq!(check("a"), Status::Pass);
    }

    #[test]
    fn test_invalid_names() {
        assert_eq!(check("My-App"), Status::Fail);
        assert_eq!(check("2fast"), Status::Fail);
        assert_eq!(check("my_app"), Status::Fail);
        assert_eq!(check(""), Status::Fail);
    }
}
