//! Command-line interface wiring for comment-rater.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::{config::Settings, llm::ChatClient, store, submission::Submitter};

pub mod provision;
pub mod serve;
pub mod submit;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Classify, rate and store user comments", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::run(args, settings).await,
            Commands::Submit(args) => submit::run(args, settings).await,
            Commands::Provision => provision::run(settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the comment form and JSON API.
    Serve(serve::Args),
    /// Classify, rate and store a single comment.
    Submit(submit::Args),
    /// Create the Cosmos DB database and container if absent.
    Provision,
}

/// Wire the completion client and the configured store into a submitter.
pub async fn build_submitter(settings: &Settings) -> Result<Submitter> {
    let completer = ChatClient::new(&settings.completion_endpoint, &settings.completion_key)
        .context("building completion client")?;
    let store = store::open(settings).await.context("opening document store")?;
    Ok(Submitter::new(Arc::new(completer), store))
}
