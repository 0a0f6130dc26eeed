mod cli;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use cli::{Cli, Commands};
use pagecast::config::ClientConfig;
use pagecast::view::{render_banner, render_pages, render_submit};
use pagecast::FormController;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = ClientConfig::load(cli.config.as_deref())?;
    if let Some(url) = cli.base_url {
        config.base_url = url;
        config.base()?;
    }
    info!(base_url = %config.base_url, "using backend");

    let ctrl = pagecast::connect(&config)?;
    // A failed fetch is reported through the banner
    let _ = ctrl.initialize().await;

    match cli.command {
        Commands::Pages => {
            print!("{}", render_pages(&ctrl));
            Ok(finish(&ctrl))
        }
        Commands::Post { video_url, pages, caption, overlay_text, logo, schedule } => {
            if let Some(banner) = render_banner(&ctrl) {
                println!("{banner}");
                return Ok(ExitCode::FAILURE);
            }
            for id in &pages {
                ctrl.toggle_selection(id, true)?;
            }
            ctrl.set_video_url(video_url);
            ctrl.set_caption(caption);
            ctrl.set_overlay_text(overlay_text);
            if let Some(path) = logo {
                ctrl.set_logo_path(&path).await?;
            }
            if let Some(when) = schedule {
                ctrl.set_schedule_time_str(&when).context("--schedule")?;
            }
            print!("{}", render_pages(&ctrl));
            println!("{}", render_submit(&ctrl));
            // The outcome is carried by the status banner
            let _ = ctrl.submit().await;
            Ok(finish(&ctrl))
        }
    }
}

fn finish(ctrl: &FormController) -> ExitCode {
    match render_banner(ctrl) {
        Some(banner) => {
            println!("{banner}");
            if matches!(ctrl.status(), pagecast::status::SubmissionStatus::Failed(_)) {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        None => ExitCode::SUCCESS,
    }
}
