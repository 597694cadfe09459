//! The case number callback: stamp the subject, return body text.

use crate::case_id::CaseId;
use crate::clock::{Clock, SystemClock};
use crate::context::{ComposeHost, ComposeUpdate, ExecutionContext};
use crate::Result;
use tracing::{debug, info};

/// Builds a case reference and applies it to the message being composed.
///
/// Holds no state between invocations; two calls in the same minute with the
/// same prefix yield the same reference.
pub struct CaseNumberGenerator<C: Clock = SystemClock> {
    clock: C,
}

impl CaseNumberGenerator<SystemClock> {
    /// Create a generator reading the host's local time.
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl Default for CaseNumberGenerator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> CaseNumberGenerator<C> {
    /// Create a generator with an explicit clock.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Compute the case reference without touching the host.
    pub fn case_id(&self, variables: &[String]) -> CaseId {
        CaseId::from_variables(variables, &self.clock.now())
    }

    /// Run the callback.
    ///
    /// Reads the compose details once, writes `{ subject }` once, and returns
    /// `Reference number: <CaseID>\n`. A failing read means no write is
    /// issued; any host error is returned unchanged.
    pub async fn invoke<H>(&self, ctx: &ExecutionContext<'_, H>) -> Result<String>
    where
        H: ComposeHost + ?Sized,
    {
        let case_id = self.case_id(&ctx.variables);

        debug!("Reading compose details for case {}", case_id);
        let details = ctx.compose.get_compose_details().await?;

        let subject = case_id.prefix_subject(&details.subject);
        debug!("Writing subject {:?}", subject);
        ctx.compose
            .set_compose_details(ComposeUpdate::subject(subject))
            .await?;

        info!("Applied case reference {}", case_id);
        Ok(case_id.reference_text())
    }
}
