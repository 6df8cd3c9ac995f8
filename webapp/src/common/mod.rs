pub mod analytics;
pub mod dom;
pub mod storage;
pub mod style;

use std::sync::LazyLock;

use tracing::error;

use common::config::{SiteConfig, parse_config};

// the webapp has no filesystem, so the site config is compiled in
const SITE_TOML: &str = include_str!("../../site.toml");

pub static SITE_CONFIG: LazyLock<SiteConfig> = LazyLock::new(|| match parse_config(SITE_TOML) {
    Ok(config) => config,
    Err(err) => {
        error!("failed to parse embedded site config, using defaults: {err:?}");
        SiteConfig::default()
    }
});
