use crate::app_info::AppInfo;
use crate::report::{RuleWeight, ValidationItem};
use crate::rules::ValidationRule;

pub struct RequiredFieldsRule;

impl RequiredFieldsRule {
    /// Wire names of every required field that is blank
    pub fn missing(info: &AppInfo) -> Vec<&'static str> {
        let blank = |s: &str| s.trim().is_empty();
        let mut missing = Vec::new();

        if blank(&info.name) {
            missing.push("name");
        }
        if blank(&info.english_name) {
            missing.push("englishName");
        }
        if blank(&info.app_name) {
            missing.push("appName");
        }
        if blank(&info.category) {
            missing.push("category");
        }
        if blank(&info.description) {
            missing.push("description");
        }
        if info.contact().is_none() {
            missing.push("contactEmail");
        }
        if info.age_rating.is_none() {
            missing.push("ageRating");
        }
        missing
    }
}

impl ValidationRule for RequiredFieldsRule {
    fn id(&self) -> &'static str {
        "required-fields"
    }

    fn name(&self) -> &'static str {
        "Required fields"
    }

    fn weight(&self) -> RuleWeight {
        RuleWeight::Required
    }

    fn check(&self, info: &AppInfo) -> ValidationItem {
        let missing = Self::missing(info);
        if missing.is_empty() {
            self.pass("All required fields are filled in".to_string())
        } else {
            self.fail(format!("Missing required fields: {}", missing.join(", ")))
                .with_fix("Fill in every field marked as required in the submission form")
        }
    }
}
