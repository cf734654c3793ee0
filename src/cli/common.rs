//! Common utilities shared across CLI commands.

use anyhow::{Context, Result, bail};
use sitecfg::config::{LoadedDocument, find_config_file, load_documents};
use sitecfg::{ConfigResolver, LinkPolicy, RawConfig, debug, logger};

use super::args::InputArgs;

/// Load the revisions named on the command line, or the discovered config.
pub fn load_input(args: &InputArgs) -> Result<Vec<LoadedDocument>> {
    logger::set_verbose(args.verbose);

    let files = if args.files.is_empty() {
        match find_config_file(&args.config) {
            Some(path) => vec![path],
            None => bail!(
                "config file '{}' not found in current or parent directories",
                args.config.display()
            ),
        }
    } else {
        args.files.clone()
    };

    debug!("load"; "revisions (oldest first): {:?}", files);
    load_documents(&files).context("failed to load config revisions")
}

/// Build the resolver selected by the input flags.
pub fn resolver(args: &InputArgs) -> ConfigResolver {
    if args.site_wide_links {
        ConfigResolver::with_policy(LinkPolicy::SiteWide)
    } else {
        ConfigResolver::new()
    }
}

/// Drop load metadata, keeping revision order.
pub fn raw_documents(docs: Vec<LoadedDocument>) -> Vec<RawConfig> {
    docs.into_iter().map(|doc| doc.raw).collect()
}
