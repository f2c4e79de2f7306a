use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};

use crate::app::{App, ApplicationInput, View};
use crate::state::AppState;

#[derive(Parser, Debug)]
#[command(
    name = "portal",
    about = "Hibret Bank careers portal: apply for open positions and review hiring analytics",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show hiring analytics, open positions and shortlisted candidates (default command)
    Dashboard,
    /// List open positions with their ids
    Jobs,
    /// Submit a résumé against an open position and show the evaluation
    Apply(ApplyArgs),
}

#[derive(Args, Debug, Default)]
struct ApplyArgs {
    /// Id of the position to apply for (see `portal jobs`)
    #[arg(long = "job")]
    job_id: Option<i64>,
    /// Résumé file: .pdf, .doc, .docx or .txt, up to 5MB
    #[arg(long)]
    resume: Option<PathBuf>,
}

pub async fn run(cli: Cli, state: AppState) -> Result<String> {
    info!("Backend: {}", state.config.api_url);
    let mut app = App::new(state);

    match cli.command.unwrap_or(Command::Dashboard) {
        Command::Dashboard => {
            let header = app.navigate(View::Dashboard);
            debug!("Active view: {}", app.view().label());
            let body = app.render(ApplicationInput::default()).await;
            Ok(format!("{header}\n\n{body}"))
        }
        Command::Jobs => Ok(app.render_jobs().await),
        Command::Apply(args) => {
            info!("Opening application form");
            let header = app.navigate(View::ApplicationForm);
            debug!("Active view: {}", app.view().label());
            let body = app
                .render(ApplicationInput {
                    job_id: args.job_id,
                    resume: args.resume.as_deref(),
                })
                .await;
            Ok(format!("{header}\n\n{body}"))
        }
    }
}
