use super::ShowArgs;
use casenumber_core::{find_calls, ComposeHost, DraftFileHost};
use colored::Colorize;

pub async fn run(args: ShowArgs) -> anyhow::Result<()> {
    let host = DraftFileHost::new(&args.draft);
    let details = host.get_compose_details().await?;

    println!("{} {}", "Subject:".bold(), details.subject);
    if !details.to.is_empty() {
        println!("{} {}", "To:".bold(), details.to.join(", "));
    }
    if !details.cc.is_empty() {
        println!("{} {}", "Cc:".bold(), details.cc.join(", "));
    }
    println!();
    print!("{}", details.body);
    if !details.body.is_empty() && !details.body.ends_with('\n') {
        println!();
    }

    let calls = find_calls(&details.body);
    if !calls.is_empty() {
        println!();
        println!("{}", "Template tokens:".bold());
        for (_, call) in calls {
            println!("  {} {}", call.name.cyan(), call.args.join(" | "));
        }
    }

    Ok(())
}
