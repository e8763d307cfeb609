use crate::app_info::AppInfo;
use crate::report::{RuleWeight, ValidationItem};
use crate::rules::ValidationRule;

/// Categories that cannot be listed
pub const BANNED_CATEGORIES: &[&str] = &[
    "도박",
    "gambling",
    "성인",
    "adult",
    "가상자산",
    "crypto",
    "대부",
    "loan",
];

pub struct BannedCategoryRule;

impl ValidationRule for BannedCategoryRule {
    fn id(&self) -> &'static str {
        "banned-category"
    }

    fn name(&self) -> &'static str {
        "Category"
    }

    fn weight(&self) -> RuleWeight {
        RuleWeight::Required
    }

    fn check(&self, info: &AppInfo) -> ValidationItem {
        let category = info.category.to_lowercase();
        match BANNED_CATEGORIES.iter().find(|banned| category.contains(*banned)) {
            Some(banned) => self
                .fail(format!("Category '{}' is not allowed ({})", info.category, banned))
                .with_fix("Choose a category outside gambling, adult, crypto-asset and lending services"),
            None => self.pass("Category is allowed".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Status;

    #[test]
    fn test_banned_substring_fails() {
        let info = AppInfo {
            category: "Finance / Crypto".to_string(),
            ..AppInfo::default()
        };
        let item = BannedCategoryRule.check(&info);
        assert_eq!(item.status, Status::Fail);
        assert!(item.fix.is_some());
    }

    #[test]
    fn test_ordinary_category_passes() {
        let info = AppInfo {
            category: "생활".to_string(),
            ..AppInfo::default()
        };
        assert_eq!(BannedCategoryRule.check(&info).status, Status::Pass);
    }
}
