use serde::{Deserialize, Serialize};

/// Outcome of a single rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pass,
    Warning,
    Fail,
}

/// Weight class of a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleWeight {
    Required,
    Recommended,
    Optional,
}

impl RuleWeight {
    pub fn points(self) -> u32 {
        match self {
            RuleWeight::Required => 15,
            RuleWeight::Recommended => 10,
            RuleWeight::Optional => 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationItem {
    /// The rule that produced this item
    pub id: String,

    /// Human-readable rule name
    pub name: String,

    pub status: Status,

    pub message: String,

    /// How to resolve a warning or failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<String>,

    pub weight: RuleWeight,
}

impl ValidationItem {
    fn new(
        status: Status,
        id: impl Into<String>,
        name: impl Into<String>,
        weight: RuleWeight,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status,
            message: message.into(),
            fix: None,
            weight,
        }
    }

    pub fn pass(
        id: impl Into<String>,
        name: impl Into<String>,
        weight: RuleWeight,
        message: impl Into<String>,
    ) -> Self {
        Self::new(Status::Pass, id, name, weight, message)
    }

    pub fn warning(
        id: impl Into<String>,
        name: impl Into<String>,
        weight: RuleWeight,
        message: impl Into<String>,
    ) -> Self {
        Self::new(Status::Warning, id, name, weight, message)
    }

    pub fn fail(
        id: impl Into<String>,
        name: impl Into<String>,
        weight: RuleWeight,
        message: impl Into<String>,
    ) -> Self {
        Self::new(Status::Fail, id, name, weight, message)
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    /// Points this item contributes: full for pass, half for warning
    fn earned(&self) -> f64 {
        let points = f64::from(self.weight.points());
        match self.status {
            Status::Pass => points,
            Status::Warning => points / 2.0,
            Status::Fail => 0.0,
        }
    }
}

/// Ratio of sanctioned design-system components in a tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSystemUsage {
    pub sanctioned: usize,
    pub total: usize,

    /// Whole percentage, 100 for an empty tree
    pub percent: u8,

    pub item: ValidationItem,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub passed: bool,

    /// 0–100
    pub score: u8,

    /// Worst status among the items
    pub category: Status,

    pub items: Vec<ValidationItem>,

    /// Tree-dependent check, reported beside the score
    #[serde(skip_serializing_if = "Option::is_none")]
    pub design_system: Option<DesignSystemUsage>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub passed: usize,
    pub warnings: usize,
    pub failed: usize,
}

impl ValidationReport {
    pub fn from_items(items: Vec<ValidationItem>) -> Self {
        let total: u32 = items.iter().map(|i| i.weight.points()).sum();
        let earned: f64 = items.iter().map(ValidationItem::earned).sum();
        let score = if total == 0 {
            100
        } else {
            (100.0 * earned / f64::from(total)).round().clamp(0.0, 100.0) as u8
        };

        let category = items
            .iter()
            .map(|i| i.status)
            .max()
            .unwrap_or(Status::Pass);

        Self {
            passed: category != Status::Fail,
            score,
            category,
            items,
            design_system: None,
        }
    }

    pub fn item(&self, id: &str) -> Option<&ValidationItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn summary(&self) -> Summary {
        let mut summary = Summary::default();
        for item in &self.items {
            match item.status {
                Status::Pass => summary.passed += 1,
                Status::Warning => summary.warnings += 1,
                Status::Fail => summary.failed += 1,
            }
        }
        summary
    }
}
