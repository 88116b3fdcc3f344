//! Daily generation command.

use chrono::NaiveDate;
use clap::Args;

use dailycode_core::{
    Clock, DailyGenerator, FixedClock, GeneratorConfig, SystemClock, TemplateRegistry,
};

#[derive(Args, Default)]
pub struct GenerateArgs {
    /// Generate for this UTC date (YYYY-MM-DD) instead of today
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// Use this template instead of the date-selected one
    #[arg(long)]
    pub template: Option<String>,
    /// Print the rendered file instead of writing it
    #[arg(long)]
    pub dry_run: bool,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: GenerateArgs, config: GeneratorConfig) -> Result<(), Box<dyn std::error::Error>> {
    let registry = TemplateRegistry::builtin();
    match args.date {
        Some(date) => {
            let clock = FixedClock::at_date(date);
            generate(DailyGenerator::new(registry, config, clock), &args)
        }
        None => generate(DailyGenerator::new(registry, config, SystemClock), &args),
    }
}

fn generate<C: Clock>(
    generator: DailyGenerator<C>,
    args: &GenerateArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let template = args.template.as_deref();

    if args.dry_run {
        let plan = generator.plan_with(template)?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&plan)?);
        } else {
            print!("{}", plan.rendered.content);
        }
        return Ok(());
    }

    let generation = generator.run_with(template)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&generation)?);
    } else {
        println!("Wrote {}", generation.written.path.display());
    }
    Ok(())
}
