//! `resid absolute` – resolve a URL against a base.

use anyhow::{Context, Result};
use resid_core::url_model;

pub fn run_absolute(url: &str, base: &str) -> Result<()> {
    let absolute = url_model::make_absolute(url, base)
        .with_context(|| format!("cannot make '{}' absolute against '{}'", url, base))?;
    println!("{absolute}");
    Ok(())
}
