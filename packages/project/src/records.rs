//! Record shapes exchanged with the persistence API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: u64,
    pub name: String,

    /// Encoded page collection
    pub canvas_data: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_info: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdate {
    pub name: Option<String>,
    pub canvas_data: Option<String>,
    pub app_info: Option<String>,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionRecord {
    pub project_id: u64,

    /// 1-based, per project
    pub version: u32,
    pub canvas_data: String,
    pub change_description: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportKind {
    Html,
    Sdk,
    Submit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRecord {
    pub project_id: u64,

    #[serde(rename = "type")]
    pub kind: ExportKind,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Draft,
    Submitted,
    Reviewing,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub project_id: u64,
    pub app_name: String,
    pub status: SubmissionStatus,
    pub submitted_at: DateTime<Utc>,

    #[serde(default)]
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_record_wire_shape() {
        let record = ExportRecord {
            project_id: 3,
            kind: ExportKind::Sdk,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "sdk");
        assert_eq!(json["projectId"], 3);
    }

    #[test]
    fn test_submission_status_names() {
        let status: SubmissionStatus = serde_json::from_str("\"reviewing\"").unwrap();
        assert_eq!(status, SubmissionStatus::Reviewing);
    }
}
