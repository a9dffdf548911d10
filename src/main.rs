//! Stub HTTP responder (v1)
//!
//! Serves a single canned response, optionally echoing request headers and
//! body, on a local address until Ctrl+C.
//!
//! ```text
//! stub-responder --config stub.toml
//! stub-responder --status 404 --body "Not found" --header Foo:Bar --mirror-header Foo
//! ```

use std::path::PathBuf;

use clap::Parser;

use stub_responder::config::{self, HeaderConfig, StubConfig};
use stub_responder::lifecycle::signals::wait_for_ctrl_c;
use stub_responder::observability::logging;
use stub_responder::StubServer;

#[derive(Parser, Debug)]
#[command(name = "stub-responder")]
#[command(about = "Serve a canned HTTP response for tests", long_about = None)]
struct Cli {
    /// TOML configuration file; flags below override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on.
    #[arg(short, long)]
    bind: Option<String>,

    /// Response status code (0 leaves the default 200).
    #[arg(short, long)]
    status: Option<u16>,

    /// Literal response body.
    #[arg(long)]
    body: Option<String>,

    /// Content-Type override.
    #[arg(long)]
    content_type: Option<String>,

    /// Response header as NAME:VALUE, repeatable.
    #[arg(short = 'H', long = "header", value_parser = parse_header)]
    headers: Vec<HeaderConfig>,

    /// Echo every request header.
    #[arg(long)]
    mirror_all_headers: bool,

    /// Echo the named request header, repeatable.
    #[arg(long = "mirror-header")]
    mirror_headers: Vec<String>,

    /// Echo the request body.
    #[arg(long)]
    mirror_body: bool,
}

impl Cli {
    /// Layer command line flags on top of a base configuration.
    fn apply(self, mut config: StubConfig) -> StubConfig {
        if let Some(bind) = self.bind {
            config.server.bind_address = bind;
        }
        if let Some(status) = self.status {
            config.response.status = status;
        }
        if let Some(body) = self.body {
            config.response.body = Some(body);
            config.response.json = None;
        }
        if let Some(content_type) = self.content_type {
            config.response.content_type = Some(content_type);
        }
        config.response.headers.extend(self.headers);
        config.mirror.all_headers |= self.mirror_all_headers;
        config.mirror.headers.extend(self.mirror_headers);
        config.mirror.body |= self.mirror_body;
        config
    }
}

fn parse_header(raw: &str) -> Result<HeaderConfig, String> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected NAME:VALUE, got {raw:?}"))?;
    Ok(HeaderConfig {
        name: name.trim().to_string(),
        value: value.trim().to_string(),
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging(logging::DEFAULT_FILTER);

    let cli = Cli::parse();

    let base = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => StubConfig::default(),
    };
    let stub_config = cli.apply(base);
    config::validate_config(&stub_config).map_err(config::ConfigError::Validation)?;

    tracing::info!(
        bind_address = %stub_config.server.bind_address,
        status = stub_config.response.status,
        mirror_all_headers = stub_config.mirror.all_headers,
        mirror_body = stub_config.mirror.body,
        "Configuration loaded"
    );

    let server = StubServer::start_with_config(stub_config.responder(), &stub_config.server).await?;
    println!("Stub responder listening on {}", server.url());

    wait_for_ctrl_c().await?;
    server.shutdown().await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
