use super::{clock_for, ExpandArgs};
use casenumber_core::{expand, CaseNumberGenerator, ComposeHost, ComposeUpdate, DraftFileHost};
use colored::Colorize;

pub async fn run(args: ExpandArgs) -> anyhow::Result<()> {
    let generator = CaseNumberGenerator::with_clock(clock_for(args.at.as_deref())?);
    let host = DraftFileHost::new(&args.draft);

    let body = host.get_compose_details().await?.body;
    let expanded = expand(&body, &host, &generator).await?;

    if expanded == body {
        println!("{} No template tokens to expand", "⚠".yellow());
        return Ok(());
    }

    host.set_compose_details(ComposeUpdate::body(expanded)).await?;

    let subject = host.get_compose_details().await?.subject;
    println!("{} Expanded {}", "✓".green(), args.draft.display());
    println!("  Subject: {}", subject.bold());
    Ok(())
}
