//! casenumber Core Library
//!
//! This crate stamps in-progress mail drafts with a timestamped case
//! reference: it prefixes the compose subject with `[CaseID] ` and hands back
//! `Reference number: CaseID` text for the message body. The mail host is
//! reached only through the [`ComposeHost`] trait, so the generator runs the
//! same against a live host, a draft file, or an in-memory fake.

pub mod case_id;
pub mod clock;
pub mod config;
pub mod context;
pub mod error;
pub mod generator;
pub mod host;
pub mod template;

// Re-exports for convenience
pub use case_id::{format_timestamp, CaseId};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use context::{ComposeDetails, ComposeHost, ComposeUpdate, ExecutionContext};
pub use error::{Error, Result};
pub use generator::CaseNumberGenerator;
pub use host::{DraftFileHost, MemoryComposeHost};
pub use template::{expand, find_calls, ScriptCall};
