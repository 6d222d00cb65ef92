//! `resid classify` – best matching kind for a source.

use anyhow::{bail, Result};
use resid_core::{DescriptorSummary, Resolver};

pub fn run_classify(resolver: &Resolver, source: &str, strict: bool, json: bool) -> Result<()> {
    let Some(descriptor) = resolver.classify(source, strict) else {
        let mode = if strict { "strict" } else { "heuristic" };
        bail!("no resource kind matches '{}' ({} mode)", source, mode);
    };
    let summary = descriptor.summary();
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn print_summary(s: &DescriptorSummary) {
    println!("{:<14} {}", "kind:", s.kind);
    println!("{:<14} {}", "status:", s.status);
    println!("{:<14} {}", "uri:", s.uri);
    println!("{:<14} {}", "path:", s.path.as_deref().unwrap_or("-"));
    println!("{:<14} {}", "content type:", s.content_type.as_deref().unwrap_or("-"));
    println!("{:<14} {}", "encoding:", s.encoding.as_deref().unwrap_or("-"));
    println!(
        "{:<14} {}",
        "location:",
        if s.available_locally { "local" } else { "remote" }
    );
}
