use crate::app_info::AppInfo;
use crate::report::{RuleWeight, ValidationItem};
use crate::rules::ValidationRule;

pub const MAX_SUBTITLE_CHARS: usize = 20;

pub struct SubtitleLengthRule;

impl ValidationRule for SubtitleLengthRule {
    fn id(&self) -> &'static str {
        "subtitle-length"
    }

    fn name(&self) -> &'static str {
        "Subtitle length"
    }

    fn weight(&self) -> RuleWeight {
        RuleWeight::Required
    }

    fn check(&self, info: &AppInfo) -> ValidationItem {
        // Characters, not bytes: Hangul counts as one. Surrounding blanks don't count.
        let length = info.subtitle.trim().chars().count();
        if length == 0 {
            self.fail("Subtitle is empty".to_string())
                .with_fix(format!("Add a subtitle of at most {} characters", MAX_SUBTITLE_CHARS))
        } else if length > MAX_SUBTITLE_CHARS {
            self.fail(format!(
                "Subtitle is {} characters (max {})",
                length, MAX_SUBTITLE_CHARS
            ))
            .with_fix(format!("Shorten the subtitle to {} characters", MAX_SUBTITLE_CHARS))
        } else {
            self.pass(format!("Subtitle is {} characters", length))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Status;

    fn check(subtitle: &str) -> ValidationItem {
        let info = AppInfo {
            subtitle: subtitle.to_string(),
            ..AppInfo::default()
        };
        SubtitleLengthRule.check(&info)
    }

    #[test]
    fn test_exactly_twenty_passes() {
        let item = check(&"a".repeat(20));
        assert_eq!(item.status, Status::Pass);
        assert_eq!(item.message, "Subtitle is 20 characters");
    }

    #[test]
    fn test_twenty_one_fails_with_length() {
        let item = check(&"a".repeat(21));
        assert_eq!(item.status, Status::Fail);
        assert!(item.message.contains("21"));
    }

    #[test]
    fn test_counts_hangul_as_single_characters() {
        assert_eq!(check(&"가".repeat(20)).status, Status::Pass);
    }

    #[test]
    fn test_empty_fails() {
        assert_eq!(check("").status, Status::Fail);
    }

    #[test]
    fn test_blank_fails_as_empty() {
        let item = check("   ");
        assert_eq!(item.status, Status::Fail);
        assert_eq!(item.message, "Subtitle is empty");
    }
}
