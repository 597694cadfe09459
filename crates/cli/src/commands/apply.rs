use super::{clock_for, ApplyArgs};
use crate::prefix::resolve_variables;
use casenumber_core::{
    CaseNumberGenerator, Clock, ComposeHost, ComposeUpdate, Config, DraftFileHost,
    ExecutionContext,
};
use std::io::{self, Write};

pub async fn run(args: ApplyArgs) -> anyhow::Result<()> {
    let config = Config::load()?;
    let generator = CaseNumberGenerator::with_clock(clock_for(args.at.as_deref())?);
    let host = DraftFileHost::new(&args.draft);

    let variables = resolve_variables(args.variables, &config);
    stamp(
        &host,
        &generator,
        variables,
        args.insert_body,
        &mut io::stdout(),
    )
    .await
}

/// Stamp the subject and emit the reference text, then optionally insert it
/// into the body.
///
/// The reference is written out before the body insert so a failed insert
/// still reports the reference the subject now carries.
async fn stamp<C, H, W>(
    host: &H,
    generator: &CaseNumberGenerator<C>,
    variables: Vec<String>,
    insert_body: bool,
    out: &mut W,
) -> anyhow::Result<()>
where
    C: Clock,
    H: ComposeHost + ?Sized,
    W: Write,
{
    let ctx = ExecutionContext::new(variables, host);
    let reference = generator.invoke(&ctx).await?;

    write!(out, "{}", reference)?;
    out.flush()?;

    if insert_body {
        let details = host.get_compose_details().await?;
        let body = format!("{}{}", reference, details.body);
        host.set_compose_details(ComposeUpdate::body(body)).await?;
        tracing::debug!("Inserted reference text into the draft body");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use casenumber_core::{ComposeDetails, FixedClock, MemoryComposeHost};

    fn generator() -> CaseNumberGenerator<FixedClock> {
        CaseNumberGenerator::with_clock(FixedClock::parse("2020-01-31T12:45").unwrap())
    }

    #[tokio::test]
    async fn inserts_reference_into_body() {
        let mut details = ComposeDetails::with_subject("Hi");
        details.body = "Thanks".to_string();
        let host = MemoryComposeHost::new(details);
        let mut out = Vec::new();

        stamp(&host, &generator(), vec!["AREF".to_string()], true, &mut out)
            .await
            .unwrap();

        assert_eq!(out, b"Reference number: AREF-2001311245\n");
        let after = host.snapshot().await;
        assert_eq!(after.subject, "[AREF-2001311245] Hi");
        assert_eq!(after.body, "Reference number: AREF-2001311245\nThanks");
    }

    #[tokio::test]
    async fn failed_body_insert_still_reports_reference() {
        let host =
            MemoryComposeHost::new(ComposeDetails::with_subject("Hi")).fail_writes_after(1);
        let mut out = Vec::new();

        let result = stamp(&host, &generator(), vec!["AREF".to_string()], true, &mut out).await;

        assert!(result.is_err());
        assert_eq!(out, b"Reference number: AREF-2001311245\n");
        let after = host.snapshot().await;
        assert_eq!(after.subject, "[AREF-2001311245] Hi");
        assert_eq!(after.body, "");
    }

    #[tokio::test]
    async fn failed_subject_write_prints_nothing() {
        let host = MemoryComposeHost::new(ComposeDetails::with_subject("Hi")).fail_writes();
        let mut out = Vec::new();

        let result = stamp(&host, &generator(), Vec::new(), true, &mut out).await;

        assert!(result.is_err());
        assert!(out.is_empty());
        assert_eq!(host.writes(), 1);
    }
}
