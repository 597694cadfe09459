//! The boundary between the generator and the mail host.
//!
//! A host exposes the in-progress message through [`ComposeHost`]; each
//! invocation hands the generator an [`ExecutionContext`] carrying the
//! template variables and a borrowed host.

use crate::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Snapshot of an in-progress outgoing message.
///
/// Fields the generator does not know about are kept in `extra` so a write
/// back never drops host data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComposeDetails {
    /// Subject line
    #[serde(default)]
    pub subject: String,
    /// Plain text body
    #[serde(default)]
    pub body: String,
    /// Primary recipients
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub to: Vec<String>,
    /// Carbon copy recipients
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cc: Vec<String>,
    /// Blind carbon copy recipients
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bcc: Vec<String>,
    /// Any other host-owned fields
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ComposeDetails {
    pub fn with_subject(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            ..Self::default()
        }
    }

    /// Apply a partial update in place; `None` fields are left alone.
    pub fn apply(&mut self, update: ComposeUpdate) {
        if let Some(subject) = update.subject {
            self.subject = subject;
        }
        if let Some(body) = update.body {
            self.body = body;
        }
    }
}

/// Partial update accepted by [`ComposeHost::set_compose_details`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposeUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl ComposeUpdate {
    pub fn subject(subject: impl Into<String>) -> Self {
        Self {
            subject: Some(subject.into()),
            ..Self::default()
        }
    }

    pub fn body(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            ..Self::default()
        }
    }
}

/// Compose capability provided by the mail host.
///
/// Both calls may fail on the host side; callers propagate the error as-is.
#[async_trait]
pub trait ComposeHost: Send + Sync {
    /// Read the current state of the message being composed.
    async fn get_compose_details(&self) -> Result<ComposeDetails>;

    /// Write back the fields present in `update`, leaving the rest untouched.
    async fn set_compose_details(&self, update: ComposeUpdate) -> Result<()>;
}

/// Per-invocation input: template variables plus the compose capability.
pub struct ExecutionContext<'a, H: ComposeHost + ?Sized> {
    /// Template arguments in invocation order (may be empty)
    pub variables: Vec<String>,
    /// Host compose capability
    pub compose: &'a H,
}

impl<'a, H: ComposeHost + ?Sized> ExecutionContext<'a, H> {
    pub fn new(variables: Vec<String>, compose: &'a H) -> Self {
        Self { variables, compose }
    }
}
