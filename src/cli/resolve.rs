//! `sitecfg resolve`: print the resolved site descriptor.

use std::fs;
use std::io::{Write, stdout};

use anyhow::{Context, Result};
use sitecfg::{SiteDescriptor, log, utils::plural_count};

use super::args::{OutputFormat, ResolveArgs};
use super::common::{load_input, raw_documents, resolver};

pub fn run(args: &ResolveArgs) -> Result<()> {
    let docs = load_input(&args.input)?;
    let count = docs.len();
    let raw = raw_documents(docs);

    let site = resolver(&args.input)
        .resolve(&raw)
        .context("failed to resolve site config")?;
    let rendered = render(&site, args.format)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("failed to write `{}`", path.display()))?;
            log!("resolve"; "wrote `{}` ({})", path.display(), plural_count(count, "revision"));
        }
        None => {
            let mut out = stdout().lock();
            out.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

fn render(site: &SiteDescriptor, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => site.to_json()?,
        OutputFormat::Toml => site.to_toml()?,
    })
}
