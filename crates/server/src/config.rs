use clap::Parser;
use std::path::PathBuf;

/// Log directives used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str =
    "scorebook_server=info,scorebook_core=info,scorebook_sheet=info,tower_http=info";

/// Server configuration, from flags or environment variables.
///
/// | Flag              | Env var         | Default     |
/// |-------------------|-----------------|-------------|
/// | `--host`          | `HOST`          | `0.0.0.0`   |
/// | `--port`          | `PORT`          | `8000`      |
/// | `--data-file`     | `DATA_FILE`     | `data.json` |
/// | `--site-dir`      | `SITE_DIR`      | `.`         |
/// | `--max-upload-mb` | `MAX_UPLOAD_MB` | `25`        |
#[derive(Debug, Clone, Parser)]
#[command(name = "scorebook-server")]
#[command(version, about = "Serve the team statistics site and API", long_about = None)]
pub struct ServerConfig {
    /// Bind address
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Bind port
    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Persisted dataset file
    #[arg(long, env = "DATA_FILE", default_value = "data.json")]
    pub data_file: PathBuf,

    /// Directory holding the static front end
    #[arg(long, env = "SITE_DIR", default_value = ".")]
    pub site_dir: PathBuf,

    /// Largest accepted upload, in MiB
    #[arg(long, env = "MAX_UPLOAD_MB", default_value_t = 25)]
    pub max_upload_mb: usize,
}

impl ServerConfig {
    /// `host:port` string to bind.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Upload limit in bytes.
    #[must_use]
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}
