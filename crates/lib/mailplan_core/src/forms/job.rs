//! Job editor form: field state, validation, and payload assembly.

use chrono::NaiveDate;

use crate::models::job::{EmailJob, RecurrencePattern};
use crate::schedule::recurrence::{self, RecurrenceChange, RecurrenceState};
use crate::schedule::{FormError, receivers, timing};

/// Send time offered by a fresh form.
pub const DEFAULT_SEND_TIME: &str = "09:00";

/// Editable field set of the job dialog.
///
/// Date fields hold the calendar day only; the send time is combined in when
/// the payload is built.
#[derive(Debug, Clone)]
pub struct JobForm {
    pub sender_email: String,
    pub receiver_emails: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub send_time: String,
    pub recurrence: RecurrenceState,
    pub email_template_id: Option<String>,
    pub enabled: bool,
}

impl Default for JobForm {
    fn default() -> Self {
        Self {
            sender_email: String::new(),
            receiver_emails: String::new(),
            start_date: None,
            end_date: None,
            send_time: DEFAULT_SEND_TIME.to_string(),
            recurrence: RecurrenceState::INITIAL,
            email_template_id: None,
            enabled: true,
        }
    }
}

impl JobForm {
    /// Form state for editing an existing job.
    pub fn from_job(job: &EmailJob) -> Self {
        Self {
            sender_email: job.sender_email.clone(),
            receiver_emails: job.receiver_emails.clone(),
            start_date: Some(job.start_date.date()),
            end_date: job.end_date.map(|dt| dt.date()),
            send_time: job.send_time.format("%H:%M").to_string(),
            recurrence: RecurrenceState {
                pattern: job.recurrence_pattern,
                one_time: job.one_time,
            },
            email_template_id: job.email_template_id.clone(),
            enabled: job.enabled,
        }
    }

    /// The one-time checkbox changed.
    pub fn set_one_time(&mut self, one_time: bool) {
        self.recurrence =
            recurrence::apply(self.recurrence, RecurrenceChange::OneTimeToggled(one_time));
    }

    /// A recurrence pattern was selected.
    pub fn set_pattern(&mut self, pattern: RecurrencePattern) {
        self.recurrence =
            recurrence::apply(self.recurrence, RecurrenceChange::PatternSelected(pattern));
    }

    /// Validate the fields and build the submission payload.
    ///
    /// The first failing check is returned and nothing reaches the backend.
    pub fn build_payload(&self) -> Result<EmailJob, FormError> {
        let sender = self.sender_email.trim();
        if sender.is_empty() {
            return Err(FormError::Required("senderEmail"));
        }
        if !receivers::is_email(sender) {
            return Err(FormError::PatternMismatch("senderEmail"));
        }
        if self.receiver_emails.trim().is_empty() {
            return Err(FormError::Required("receiverEmails"));
        }
        receivers::validate_receiver_list(&self.receiver_emails)?;

        let start_date = self.start_date.ok_or(FormError::Required("startDate"))?;
        if self.send_time.trim().is_empty() {
            return Err(FormError::Required("sendTime"));
        }
        let send_time = timing::parse_send_time(&self.send_time)?;
        let start = timing::combine_date_and_time(start_date, &self.send_time)?;
        let end = match self.end_date {
            Some(date) => Some(timing::combine_date_and_time(date, &self.send_time)?),
            None => None,
        };
        if let Some(end) = end
            && end < start
        {
            return Err(FormError::EndBeforeStart);
        }

        Ok(EmailJob {
            id: None,
            sender_email: sender.to_string(),
            receiver_emails: self.receiver_emails.clone(),
            start_date: start,
            end_date: end,
            send_time,
            recurrence_pattern: self.recurrence.pattern,
            enabled: self.enabled,
            one_time: self.recurrence.one_time,
            next_run_time: None,
            email_template_id: self.email_template_id.clone(),
        })
    }
}
