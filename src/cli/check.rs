//! `sitecfg check`: report every config problem at once.

use anyhow::{Context, Result, bail};
use sitecfg::{RouteSet, check_routes, debug, log, utils::plural_count};

use super::args::CheckArgs;
use super::common::{load_input, raw_documents, resolver};

pub fn run(args: &CheckArgs) -> Result<()> {
    let docs = load_input(&args.input)?;
    let ignored: usize = docs.iter().map(|doc| doc.ignored.len()).sum();
    let count = docs.len();
    let raw = raw_documents(docs);

    let resolver = resolver(&args.input);
    let mut diag = resolver.diagnose(&raw);

    let mut missing_routes = 0;
    if let Some(content_dir) = &args.routes
        && !diag.has_errors()
    {
        let routes = RouteSet::scan(content_dir)
            .with_context(|| format!("cannot scan content directory `{}`", content_dir.display()))?;
        debug!("routes"; "found {} in `{}`", plural_count(routes.len(), "route"), content_dir.display());
        let site = resolver.resolve(&raw)?;
        missing_routes = check_routes(&site, &routes, &mut diag);
    }

    diag.print_warnings();

    if diag.has_errors() {
        eprintln!("{diag}");
        bail!("config check failed with {}", plural_count(diag.len(), "error"));
    }
    if args.strict_routes && missing_routes > 0 {
        bail!(
            "config check failed: {} without a content page",
            plural_count(missing_routes, "link")
        );
    }

    log!(
        "check";
        "{} ok ({} ignored)",
        plural_count(count, "revision"),
        plural_count(ignored, "unknown field")
    );
    Ok(())
}
