use serde::{Deserialize, Serialize};

/// Audience tier declared at submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeRating {
    #[serde(rename = "all")]
    All,
    #[serde(rename = "12+")]
    Twelve,
    #[serde(rename = "19+")]
    Nineteen,
}

/// Submission metadata describing the finished mini-app.
///
/// Every field is optional on the wire; missing values become `fail` items
/// during validation instead of decode errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppInfo {
    /// Native-language display name
    pub name: String,
    pub english_name: String,

    /// Machine-safe identifier
    pub app_name: String,
    pub subtitle: String,
    pub category: String,
    pub description: String,
    pub keywords: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_rating: Option<AgeRating>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_policy_url: Option<String>,
}

impl AppInfo {
    /// Free-text fields searched for banned keywords, with their wire names
    pub fn text_fields(&self) -> [(&'static str, &str); 5] {
        [
            ("name", self.name.as_str()),
            ("englishName", self.english_name.as_str()),
            ("appName", self.app_name.as_str()),
            ("subtitle", self.subtitle.as_str()),
            ("description", self.description.as_str()),
        ]
    }

    /// First non-blank contact address
    pub fn contact(&self) -> Option<&str> {
        [&self.contact_email, &self.email]
            .into_iter()
            .flatten()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
    }
}
