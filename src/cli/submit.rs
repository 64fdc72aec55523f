//! CLI entry-point for processing one comment without the web form.

use anyhow::{bail, Result};
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{config::Settings, submission::SubmissionState};

/// Args for the `submit` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Comment text to classify, rate and store.
    #[arg(long)]
    pub comment: String,
}

#[instrument(skip_all)]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let submitter = super::build_submitter(&settings).await?;
    let state = submitter.submit(&args.comment).await;
    let message = state.user_message().unwrap_or_default();
    match state {
        SubmissionState::Done { record, .. } => {
            println!("Comentario: {}", record.comentario);
            println!("Tópico: {}", record.topico);
            println!("Estrellas: {}", record.estrellas);
            println!("{message}");
            Ok(())
        }
        SubmissionState::Failed { stage, .. } => bail!("{message} (while {stage})"),
        _ => bail!("{message}"),
    }
}
