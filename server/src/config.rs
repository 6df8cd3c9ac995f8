use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use tracing::{Level, debug, instrument};

use common::config::{SiteConfig, parse_config};

#[instrument(level=Level::DEBUG)]
pub async fn read_config(filename: PathBuf) -> anyhow::Result<Arc<SiteConfig>> {
    debug!("reading config file");

    let doc = tokio::fs::read_to_string(&filename)
        .await
        .with_context(|| format!("failed to read config file {}", filename.display()))?;

    Ok(Arc::new(parse_config(&doc)?))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[tokio::test]
    async fn reads_config_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[config.server]\nsocket = \"127.0.0.1:9000\"").unwrap();

        let config = read_config(file.path().to_path_buf()).await.unwrap();
        assert_eq!(config.server.socket, "127.0.0.1:9000");
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let err = read_config(PathBuf::from("/nonexistent/portfolio.toml"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
