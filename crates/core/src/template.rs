//! Expansion of `[[SCRIPT=Name|arg|...]]` template tokens.
//!
//! Mirrors what the mail host does when a template is inserted: every
//! `CaseNumber` token runs the generator with the token's arguments as
//! variables and is replaced by the returned text.

use crate::clock::Clock;
use crate::context::{ComposeHost, ExecutionContext};
use crate::generator::CaseNumberGenerator;
use crate::Result;
use regex::Regex;
use std::sync::OnceLock;
use tracing::warn;

/// Script name that resolves to the case number generator.
pub const CASE_NUMBER_SCRIPT: &str = "CaseNumber";

fn script_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\[\[SCRIPT=([^|\]]+)((?:\|[^|\]]*)*)\]\]").expect("script token pattern")
    })
}

/// A parsed `[[SCRIPT=...]]` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptCall {
    /// Script name
    pub name: String,
    /// Arguments after the name, in order
    pub args: Vec<String>,
}

impl ScriptCall {
    fn from_captures(caps: &regex::Captures<'_>) -> Self {
        let args = caps
            .get(2)
            .map(|m| m.as_str())
            .unwrap_or_default()
            .split('|')
            .skip(1)
            .map(str::to_string)
            .collect();

        Self {
            name: caps[1].to_string(),
            args,
        }
    }
}

/// Find every script token in `text`, with its byte range.
pub fn find_calls(text: &str) -> Vec<(std::ops::Range<usize>, ScriptCall)> {
    script_pattern()
        .captures_iter(text)
        .filter_map(|caps| {
            let range = caps.get(0)?.range();
            Some((range, ScriptCall::from_captures(&caps)))
        })
        .collect()
}

/// Replace `CaseNumber` tokens in `text`, left to right.
///
/// The generator runs once per token, so each token also prefixes the
/// subject once. Tokens for other scripts are kept verbatim. The first host
/// failure aborts expansion.
pub async fn expand<C, H>(
    text: &str,
    compose: &H,
    generator: &CaseNumberGenerator<C>,
) -> Result<String>
where
    C: Clock,
    H: ComposeHost + ?Sized,
{
    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;

    for (range, call) in find_calls(text) {
        output.push_str(&text[cursor..range.start]);
        if call.name == CASE_NUMBER_SCRIPT {
            let ctx = ExecutionContext::new(call.args, compose);
            output.push_str(&generator.invoke(&ctx).await?);
        } else {
            warn!("Leaving unknown script '{}' unexpanded", call.name);
            output.push_str(&text[range.clone()]);
        }
        cursor = range.end;
    }

    output.push_str(&text[cursor..]);
    Ok(output)
}
