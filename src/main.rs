//! Command-line front end for the AI Map Generator

use ai_map_generator::{
    config::{LoggingConfig, Settings},
    form::view::{PROMPT_LABEL, STYLE_LABEL, TITLE},
    MapForm, MapStyle, RequestState, SubmissionController,
};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "map-gen", version, about = TITLE)]
struct Args {
    #[arg(help = PROMPT_LABEL)]
    prompt: String,

    #[arg(short, long, default_value_t = MapStyle::Realistic, help = STYLE_LABEL)]
    style: MapStyle,

    /// Configuration file (TOML)
    #[arg(short, long, default_value = "config/default.toml")]
    config: PathBuf,

    /// Override the service base URL
    #[arg(long)]
    base_url: Option<String>,
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "pretty" {
        registry
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Load configuration
    let mut settings = Settings::load_from_path(&args.config)?;
    if let Some(base_url) = args.base_url {
        settings.service.base_url = base_url;
        settings.validate()?;
    }

    init_tracing(&settings.logging);
    let controller = SubmissionController::from_settings(&settings)?;
    info!(
        base_url = %settings.service.base_url,
        ordering = ?controller.ordering(),
        "Starting {}",
        TITLE
    );

    let mut form = MapForm::new(controller);
    form.set_prompt(args.prompt);
    form.set_style(args.style);

    if !form.can_submit() {
        anyhow::bail!("Please describe the map you want to generate");
    }

    let submission = form.submit()?;
    eprintln!("{}", form.view().render_text());
    submission.settled().await;

    let view = form.view();
    match form.state() {
        RequestState::Succeeded { .. } => {
            println!("{}", view.render_text());
            Ok(())
        }
        RequestState::Failed { message } => {
            anyhow::bail!(message)
        }
        state => anyhow::bail!("Generation ended in unexpected phase: {}", state.phase()),
    }
}
