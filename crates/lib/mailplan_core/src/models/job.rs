//! Email job models.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Scheduling cadence for a job — matches the backend enum verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecurrencePattern {
    Daily,
    Weekly,
    Monthly,
    Yearly,
    OneTime,
}

impl RecurrencePattern {
    /// All selectable patterns, in form display order.
    pub const ALL: [RecurrencePattern; 5] = [
        RecurrencePattern::Daily,
        RecurrencePattern::Weekly,
        RecurrencePattern::Monthly,
        RecurrencePattern::Yearly,
        RecurrencePattern::OneTime,
    ];

    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecurrencePattern::Daily => "DAILY",
            RecurrencePattern::Weekly => "WEEKLY",
            RecurrencePattern::Monthly => "MONTHLY",
            RecurrencePattern::Yearly => "YEARLY",
            RecurrencePattern::OneTime => "ONE_TIME",
        }
    }
}

impl std::fmt::Display for RecurrencePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Job resource representation, also used as the submission payload.
///
/// `receiver_emails` stays a comma-separated string because that is how the
/// backend stores it; `start_date`/`end_date` carry the send time already
/// combined in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailJob {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub sender_email: String,
    pub receiver_emails: String,
    pub start_date: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDateTime>,
    pub send_time: NaiveTime,
    pub recurrence_pattern: RecurrencePattern,
    pub enabled: bool,
    pub one_time: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_run_time: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_template_id: Option<String>,
}

/// Response of the per-job enable/disable action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobToggleResponse {
    pub success: bool,
    pub message: String,
    pub job_id: String,
    pub enabled: bool,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn pattern_serializes_screaming_snake() {
        assert_eq!(
            serde_json::to_string(&RecurrencePattern::OneTime).expect("serialize"),
            "\"ONE_TIME\""
        );
        let p: RecurrencePattern = serde_json::from_str("\"WEEKLY\"").expect("deserialize");
        assert_eq!(p, RecurrencePattern::Weekly);
    }

    #[test]
    fn job_payload_uses_camel_case_keys() {
        let job = EmailJob {
            id: None,
            sender_email: "ops@example.com".into(),
            receiver_emails: "a@b.com, c@d.com".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1)
                .expect("date")
                .and_hms_opt(9, 5, 0)
                .expect("time"),
            end_date: None,
            send_time: NaiveTime::from_hms_opt(9, 5, 0).expect("time"),
            recurrence_pattern: RecurrencePattern::Daily,
            enabled: true,
            one_time: false,
            next_run_time: None,
            email_template_id: Some("tpl-1".into()),
        };
        let json: serde_json::Value = serde_json::to_value(&job).expect("serialize");
        assert_eq!(json["senderEmail"], "ops@example.com");
        assert_eq!(json["recurrencePattern"], "DAILY");
        assert_eq!(json["oneTime"], false);
        assert_eq!(json["emailTemplateId"], "tpl-1");
        assert_eq!(json["startDate"], "2024-03-01T09:05:00");
        // Absent optionals are omitted, not null.
        assert!(json.get("endDate").is_none());
        assert!(json.get("id").is_none());
    }

    #[test]
    fn toggle_response_parses_backend_shape() {
        let resp: JobToggleResponse = serde_json::from_str(
            r#"{"success":true,"message":"Job enabled successfully","jobId":"j1","enabled":true,"timestamp":"2024-03-01T09:05:00"}"#,
        )
        .expect("parse");
        assert!(resp.success);
        assert!(resp.enabled);
        assert_eq!(resp.job_id, "j1");
    }
}
