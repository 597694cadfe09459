use super::{clock_for, GenerateArgs};
use crate::prefix::resolve_prefix;
use casenumber_core::{CaseNumberGenerator, Config};

pub async fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let config = Config::load()?;
    let generator = CaseNumberGenerator::with_clock(clock_for(args.at.as_deref())?);

    let variables: Vec<String> = resolve_prefix(args.prefix.as_deref(), &config)
        .into_iter()
        .collect();

    println!("{}", generator.case_id(&variables));
    Ok(())
}
