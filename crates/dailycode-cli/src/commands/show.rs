//! Inspect the selection a date maps to.

use chrono::NaiveDate;
use clap::Args;

use dailycode_core::{seed_for_date, select_for_date, Clock, SystemClock, TemplateRegistry};

#[derive(Args)]
pub struct ShowArgs {
    /// UTC date (YYYY-MM-DD), default today
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let date = args.date.unwrap_or_else(|| SystemClock.today());
    let registry = TemplateRegistry::builtin();
    let selection = select_for_date(&registry, date)?;
    let seed = seed_for_date(date);

    if args.json {
        let value = serde_json::json!({
            "date": date,
            "seed": seed,
            "template": selection.template,
            "params": selection.params,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Date:     {date}");
    println!("Seed:     {seed}");
    println!("Template: {} ({})", selection.template.name, selection.template.description);
    for (name, value) in &selection.params {
        println!("  {name} = {value}");
    }
    Ok(())
}
