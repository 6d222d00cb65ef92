//! `resid inspect` – every kind's verdict for one source.

use anyhow::Result;
use resid_core::{DescriptorSummary, Resolver};

pub fn run_inspect(resolver: &Resolver, source: &str, json: bool) -> Result<()> {
    let set = resolver.resolve(source);
    let summaries: Vec<DescriptorSummary> = set.descriptors().iter().map(|d| d.summary()).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    println!("{:<20} {:<28} {}", "KIND", "STATUS", "CONTENT TYPE");
    for s in &summaries {
        println!(
            "{:<20} {:<28} {}",
            s.kind.as_str(),
            s.status.to_string(),
            s.content_type.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}
