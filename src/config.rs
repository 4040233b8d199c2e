//! Layered configuration: defaults, YAML file, `MEDAI_` environment, CLI flags.

use std::path::PathBuf;

use clap::Parser;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use url::Url;

use crate::error::AppError;

/// Default site title, also used as the brand label.
pub const DEFAULT_TITLE: &str = "MedAI Clerk";
/// Default meta description.
pub const DEFAULT_DESCRIPTION: &str = "Generate SOAP notes and ICD-10 codes with AI";
/// Default base URL for canonical links.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

const ENV_PREFIX: &str = "MEDAI";
const FALLBACK_CONFIG_FILE: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Address to bind
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub site: SiteConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
    pub request_timeout_secs: u64,
}

/// Site metadata and outbound links rendered into every page.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    pub base_url: Url,
    pub contact_email: String,
    /// Backend the client application talks to, exposed as a `<meta>` tag.
    #[serde(default)]
    pub backend_url: Option<Url>,
    /// Where `/soap` redirects. Without it `/soap` is a 404.
    #[serde(default)]
    pub app_url: Option<Url>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            contact_email: "hello@medaiclerk.example".to_string(),
            backend_url: None,
            app_url: None,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args)?;

        let site = SiteConfig::default();
        let mut builder = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("server.static_dir", "static")?
            .set_default("server.request_timeout_secs", 30)?
            .set_default("site.title", site.title)?
            .set_default("site.description", site.description)?
            .set_default("site.base_url", site.base_url.as_str())?
            .set_default("site.contact_email", site.contact_email)?;

        // An explicit file must exist; ./config.yaml is picked up only if present.
        builder = match &cli.config {
            Some(path) => builder.add_source(File::from(path.as_path()).required(true)),
            None => builder
                .add_source(File::new(FALLBACK_CONFIG_FILE, FileFormat::Yaml).required(false)),
        };

        // E.g. MEDAI_SERVER__PORT=8080, MEDAI_SITE__APP_URL=https://app.example
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }

        let cfg = builder.build()?;
        Ok(cfg.try_deserialize()?)
    }

    /// Socket address string for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_defaults_match_published_metadata() {
        let site = SiteConfig::default();
        assert_eq!(site.title, "MedAI Clerk");
        assert_eq!(site.description, "Generate SOAP notes and ICD-10 codes with AI");
        assert_eq!(site.base_url.as_str(), "http://localhost:3000/");
        assert!(site.app_url.is_none());
    }

    #[test]
    fn cli_port_overrides_default() {
        let config = AppConfig::load_from_args(["medai-clerk-web", "--port", "4321"])
            .expect("config should load");
        assert_eq!(config.server.port, 4321);
        assert_eq!(config.bind_address(), format!("{}:4321", config.server.host));
    }

    fn cli_error_kind(args: &[&str]) -> clap::error::ErrorKind {
        match AppConfig::load_from_args(args.iter().copied()) {
            Err(AppError::Cli(e)) => e.kind(),
            other => panic!("expected a command line error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_flag_is_a_cli_error() {
        assert_eq!(
            cli_error_kind(&["medai-clerk-web", "--nope"]),
            clap::error::ErrorKind::UnknownArgument
        );
    }

    #[test]
    fn help_and_version_are_not_config_errors() {
        assert_eq!(
            cli_error_kind(&["medai-clerk-web", "--help"]),
            clap::error::ErrorKind::DisplayHelp
        );
        assert_eq!(
            cli_error_kind(&["medai-clerk-web", "--version"]),
            clap::error::ErrorKind::DisplayVersion
        );
    }
}
