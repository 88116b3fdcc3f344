//! Template listing.

use dailycode_core::TemplateRegistry;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let registry = TemplateRegistry::builtin();
    if json {
        println!("{}", serde_json::to_string_pretty(registry.templates())?);
        return Ok(());
    }

    let width = registry.names().iter().map(|n| n.len()).max().unwrap_or(0);
    for template in registry.templates() {
        println!("{:<width$}  {}", template.name, template.description);
    }
    Ok(())
}
