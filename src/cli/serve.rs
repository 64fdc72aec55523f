//! CLI entry-point for serving the comment form.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{api, config::Settings};

/// Serve the comment form until Ctrl-C.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Port the form listens on.
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
    /// Interface to bind; use 0.0.0.0 inside containers.
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let submitter = super::build_submitter(&settings).await?;
    api::serve(submitter, args.host, args.port).await
}
