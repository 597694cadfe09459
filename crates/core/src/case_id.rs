//! Case reference identifiers of the form `[Prefix-]yyMMddHHmm`.

use chrono::{Datelike, NaiveDateTime, Timelike};
use std::fmt;

/// Label placed before the case reference in the body text.
pub const REFERENCE_LABEL: &str = "Reference number: ";

/// Format a date and time as the 10-digit `yyMMddHHmm` timestamp.
///
/// The year contributes its last two digits; every field is zero-padded to
/// width 2.
pub fn format_timestamp(at: &NaiveDateTime) -> String {
    format!(
        "{:02}{:02}{:02}{:02}{:02}",
        at.year().rem_euclid(100),
        at.month(),
        at.day(),
        at.hour(),
        at.minute()
    )
}

/// A derived case reference. Never persisted; built fresh per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseId(String);

impl CaseId {
    /// Join an optional prefix and a timestamp with a hyphen.
    ///
    /// The prefix is used verbatim, including when it is empty.
    pub fn new(prefix: Option<&str>, timestamp: &str) -> Self {
        match prefix {
            Some(prefix) => Self(format!("{}-{}", prefix, timestamp)),
            None => Self(timestamp.to_string()),
        }
    }

    /// Build from template variables: only the first one, if any, is the prefix.
    pub fn from_variables(variables: &[String], at: &NaiveDateTime) -> Self {
        Self::new(
            variables.first().map(String::as_str),
            &format_timestamp(at),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `[CaseID] ` followed by the subject, untouched.
    pub fn prefix_subject(&self, subject: &str) -> String {
        format!("[{}] {}", self.0, subject)
    }

    /// Text handed back to the host for insertion into the body.
    pub fn reference_text(&self) -> String {
        format!("{}{}\n", REFERENCE_LABEL, self.0)
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
