use crate::app_info::AppInfo;
use crate::report::{RuleWeight, ValidationItem};
use crate::rules::ValidationRule;

/// Platform and brand names a third-party mini-app may not use
pub const BANNED_KEYWORDS: &[&str] = &[
    "토스",
    "toss",
    "비바리퍼블리카",
    "viva republica",
    "공식",
    "official",
];

/// Rejects apps whose public text uses a reserved brand keyword
pub struct BannedKeywordRule;

impl ValidationRule for BannedKeywordRule {
    fn id(&self) -> &'static str {
        "banned-keywords"
    }

    fn name(&self) -> &'static str {
        "Banned keywords"
    }

    fn weight(&self) -> RuleWeight {
        RuleWeight::Required
    }

    fn check(&self, info: &AppInfo) -> ValidationItem {
        let haystacks: Vec<String> = info
            .text_fields()
            .iter()
            .map(|(_, text)| text.to_lowercase())
            .collect();

        let found: Vec<&str> = BANNED_KEYWORDS
            .iter()
            .copied()
            .filter(|keyword| {
                let needle = keyword.to_lowercase();
                haystacks.iter().any(|text| text.contains(&needle))
            })
            .collect();

        if found.is_empty() {
            self.pass("No banned keywords found".to_string())
        } else {
            self.fail(format!("Banned keywords used: {}", found.join(", ")))
                .with_fix("Remove platform brand names from the name, subtitle and description")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Status;

    #[test]
    fn test_lists_keyword_once_across_fields() {
        let info = AppInfo {
            name: "토스 가계부".to_string(),
            description: "토스처럼 쉬운 가계부".to_string(),
            ..AppInfo::default()
        };
        let item = BannedKeywordRule.check(&info);
        assert_eq!(item.status, Status::Fail);
        assert_eq!(item.message, "Banned keywords used: 토스");
    }

    #[test]
    fn test_matches_case_insensitively() {
        let info = AppInfo {
            subtitle: "The OFFICIAL budget".to_string(),
            english_name: "TossBook".to_string(),
            ..AppInfo::default()
        };
        let item = BannedKeywordRule.check(&info);
        assert_eq!(item.status, Status::Fail);
        assert_eq!(item.message, "Banned keywords used: toss, official");
    }

    #[test]
    fn test_clean_text_passes() {
        let info = AppInfo {
            name: "가계부".to_string(),
            description: "Track spending".to_string(),
            ..AppInfo::default()
        };
        assert_eq!(BannedKeywordRule.check(&info).status, Status::Pass);
    }
}
