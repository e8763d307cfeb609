//! End-to-end submission scenarios

use tessera_editor::{ComponentKind, Props, Tree};
use tessera_validator::{
    evaluate, evaluate_with, AgeRating, AppInfo, RuleRegistry, Status, ValidationItem,
    ValidationOptions, ValidationRule, RuleWeight,
};

fn complete_info() -> AppInfo {
    AppInfo {
        name: "가계부".to_string(),
        english_name: "Budget Book".to_string(),
        app_name: "budget-book".to_string(),
        subtitle: "쉽고 빠른 가계부".to_string(),
        category: "finance".to_string(),
        description: "Track daily spending in seconds".to_string(),
        keywords: vec!["budget".to_string()],
        contact_email: Some("team@example.com".to_string()),
        email: None,
        age_rating: Some(AgeRating::All),
        logo: Some("logo.png".to_string()),
        privacy_policy_url: Some("https://example.com/privacy".to_string()),
    }
}

#[test]
fn test_empty_app_info_fails_everything_required() {
    let report = evaluate(&AppInfo::default(), None);
    assert!(!report.passed);
    assert_eq!(report.category, Status::Fail);
    assert_eq!(report.items.len(), 6);

    let required = report.item("required-fields").unwrap();
    assert_eq!(required.status, Status::Fail);
    for field in [
        "name",
        "englishName",
        "appName",
        "category",
        "description",
        "contactEmail",
        "ageRating",
    ] {
        assert!(required.message.contains(field), "missing {}", field);
    }
    assert!(report.design_system.is_none());
}

#[test]
fn test_complete_info_scores_100() {
    let report = evaluate(&complete_info(), None);
    assert!(report.passed);
    assert_eq!(report.category, Status::Pass);
    assert_eq!(report.score, 100);
}

#[test]
fn test_missing_privacy_policy_warns_but_passes() {
    let info = AppInfo {
        privacy_policy_url: None,
        ..complete_info()
    };
    let report = evaluate(&info, None);
    assert!(report.passed);
    assert_eq!(report.category, Status::Warning);
    // 75 + 5 of 85
    assert_eq!(report.score, 94);
}

#[test]
fn test_uppercase_app_name_fails() {
    let info = AppInfo {
        app_name: "My-App".to_string(),
        ..complete_info()
    };
    let report = evaluate(&info, None);
    assert_eq!(report.item("app-name-format").unwrap().status, Status::Fail);
    assert!(!report.passed);

    let info = AppInfo {
        app_name: "my-app2".to_string(),
        ..complete_info()
    };
    assert_eq!(
        evaluate(&info, None).item("app-name-format").unwrap().status,
        Status::Pass
    );
}

#[test]
fn test_banned_keyword_in_two_fields_listed_once() {
    let info = AppInfo {
        name: "토스 가계부".to_string(),
        description: "이 앱은 토스와 무관합니다".to_string(),
        ..complete_info()
    };
    let item = evaluate(&info, None).item("banned-keywords").unwrap().clone();
    assert_eq!(item.status, Status::Fail);
    assert_eq!(item.message.matches("토스").count(), 1);
}

#[test]
fn test_subtitle_boundary() {
    let info = AppInfo {
        subtitle: "x".repeat(21),
        ..complete_info()
    };
    let item = evaluate(&info, None).item("subtitle-length").unwrap().clone();
    assert_eq!(item.status, Status::Fail);
    assert!(item.message.contains("21"));
}

#[test]
fn test_tree_usage_is_reported_beside_score() {
    let mut tree = Tree::new("page");
    let root = tree.root_id().to_string();
    for i in 0..7 {
        tree.insert(&root, i, ComponentKind::ListRow, Props::new()).unwrap();
    }
    for i in 7..10 {
        tree.insert(&root, i, ComponentKind::Container, Props::new()).unwrap();
    }

    let report = evaluate(&complete_info(), Some(&tree));
    let usage = report.design_system.as_ref().unwrap();
    assert_eq!(usage.percent, 70);
    assert_eq!(usage.item.status, Status::Warning);
    // Additive: does not affect the weighted score or category
    assert_eq!(report.score, 100);
    assert_eq!(report.category, Status::Pass);
}

struct LogoRule;

impl ValidationRule for LogoRule {
    fn id(&self) -> &'static str {
        "logo"
    }

    fn name(&self) -> &'static str {
        "Logo"
    }

    fn weight(&self) -> RuleWeight {
        RuleWeight::Optional
    }

    fn check(&self, info: &AppInfo) -> ValidationItem {
        match &info.logo {
            Some(_) => self.pass("Logo uploaded".to_string()),
            None => self.warning("No logo".to_string()),
        }
    }
}

#[test]
fn test_custom_registry() {
    let mut registry = RuleRegistry::empty();
    registry.add_rule(Box::new(LogoRule));
    let options = ValidationOptions {
        registry: Some(registry),
        ..ValidationOptions::default()
    };

    let report = evaluate_with(&AppInfo::default(), None, options);
    assert_eq!(report.items.len(), 1);
    assert_eq!(report.score, 50);
    assert!(report.passed);
}
