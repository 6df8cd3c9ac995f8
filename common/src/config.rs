use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use crate::{analytics::AnalyticsConfig, reveal::RevealConfig};

// portfolio configuration
//
// one toml document configures both halves: the webapp embeds it at compile time and the server
// reads it from disk.  every field has a default, so an empty [config] table is a valid config
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    // localStorage key for the theme preference
    pub theme_storage_key: String,

    pub analytics: AnalyticsConfig,
    pub reveal: RevealConfig,

    // page sections in document order, each with a matching #fragment nav link
    pub sections: Vec<SectionConfig>,

    // below this viewport width the hamburger menu replaces the desktop links
    pub mobile_breakpoint_px: u32,

    pub server: ServerConfig,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SectionConfig {
    pub id: String,
    pub label: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    // ip and port for the http server
    pub socket: String,

    // location of the compiled wasm app and its index.html
    pub doc_root: PathBuf,

    // json document served as the portfolio content
    pub content: PathBuf,

    // accepted contact messages are appended here as json lines; None only logs them
    pub inbox: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            socket: String::from("127.0.0.1:8080"),
            doc_root: PathBuf::from("dist"),
            content: PathBuf::from("content.json"),
            inbox: None,
        }
    }
}

fn section(id: &str, label: &str) -> SectionConfig {
    SectionConfig {
        id: id.to_owned(),
        label: label.to_owned(),
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            theme_storage_key: String::from("theme-preference"),
            analytics: AnalyticsConfig::default(),
            reveal: RevealConfig::default(),
            sections: vec![
                section("home", "Home"),
                section("about", "About"),
                section("skills", "Skills"),
                section("experience", "Experience"),
                section("projects", "Projects"),
                section("contact", "Contact"),
            ],
            mobile_breakpoint_px: 768,
            server: ServerConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn section_ids(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.id.as_str())
    }

    pub fn section_label(&self, id: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.label.as_str())
    }
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Default, Deserialize, Serialize)]
struct TomlConfigFile {
    #[serde(default)]
    config: SiteConfig,
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn parse_config(doc: &str) -> Result<SiteConfig> {
    let data: TomlConfigFile = toml::from_str(doc).context("failed to parse config file")?;

    debug!("successfully parsed config file");
    Ok(data.config)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(parse_config("").unwrap(), SiteConfig::default());
        assert_eq!(parse_config("[config]\n").unwrap(), SiteConfig::default());
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let doc = r#"
            [config]
            theme_storage_key = "site-theme"

            [config.analytics]
            tracking_id = "G-ABC123"

            [config.server]
            socket = "0.0.0.0:80"
            inbox = "/var/lib/portfolio/inbox.jsonl"
        "#;

        let config = parse_config(doc).unwrap();

        assert_eq!(config.theme_storage_key, "site-theme");
        assert_eq!(config.analytics.tracking_id.as_deref(), Some("G-ABC123"));
        assert!(config.analytics.enabled);
        assert_eq!(config.analytics.opt_out_key, "analytics_opt_out");
        assert_eq!(config.server.socket, "0.0.0.0:80");
        assert_eq!(config.server.doc_root, PathBuf::from("dist"));
        assert_eq!(
            config.server.inbox,
            Some(PathBuf::from("/var/lib/portfolio/inbox.jsonl"))
        );
        assert_eq!(config.mobile_breakpoint_px, 768);
        assert_eq!(config.reveal, RevealConfig::default());
    }

    #[test]
    fn sections_replace_the_default_list() {
        let doc = r#"
            [[config.sections]]
            id = "intro"
            label = "Intro"

            [[config.sections]]
            id = "work"
            label = "Work"
        "#;

        let config = parse_config(doc).unwrap();
        let ids: Vec<_> = config.section_ids().collect();

        assert_eq!(ids, vec!["intro", "work"]);
        assert_eq!(config.section_label("work"), Some("Work"));
        assert_eq!(config.section_label("home"), None);
    }

    #[test]
    fn shipped_configs_parse() {
        let site = parse_config(include_str!("../../webapp/site.toml")).unwrap();
        assert_eq!(site, SiteConfig::default());

        let server = parse_config(include_str!("../../config.example.toml")).unwrap();
        assert_eq!(server.server, ServerConfig::default());
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(parse_config("[config\n").is_err());
        assert!(parse_config("[config]\nmobile_breakpoint_px = \"wide\"").is_err());
    }
}
