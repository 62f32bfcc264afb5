use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::{info, warn};

use storybook::{
    DocumentComposer, GeminiClient, HtmlRenderer, IllustrationResolver, PicsumReferenceBuilder,
    StoryGenerator, StoryRequest, StorybookConfig, StorybookError, StorybookPipeline,
};

mod cli;
use cli::{Commands, StorybookCli};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env if present
    dotenv::dotenv().ok();

    let args = StorybookCli::parse();
    setup_logging(&args.log_level);

    let config = match &args.config {
        Some(path) => StorybookConfig::from_file(path)?,
        None => StorybookConfig::default(),
    };

    match &args.command {
        Commands::Generate {
            prompt,
            output,
            retries,
        } => {
            let attempts = (*retries).max(1);
            if let Err(e) = generate(&config, prompt, output.clone(), attempts).await {
                cli::ui::print_error(&friendly_message(&e));
                std::process::exit(1);
            }
        }

        Commands::Check => match config.get_api_key() {
            Ok(_) => cli::ui::print_success("An API key for the text-generation service is available."),
            Err(e) => {
                cli::ui::print_error(&e.to_string());
                cli::ui::print_info(
                    "Set GEMINI_API_KEY or GOOGLE_API_KEY, or add an api_key to the config file.",
                );
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

async fn generate(
    config: &StorybookConfig,
    prompt: &str,
    output: Option<PathBuf>,
    attempts: u32,
) -> Result<(), StorybookError> {
    // Input limits are enforced here, before the pipeline is touched
    let request = StoryRequest::new(prompt)?;

    let generator = StoryGenerator::new(GeminiClient::new(config.clone()).map_err(
        storybook::GenerationError::Transport,
    )?);
    let resolver = IllustrationResolver::new(
        PicsumReferenceBuilder,
        config.illustration.width,
        config.illustration.height,
    );
    let composer = DocumentComposer::new(HtmlRenderer::new());
    let pipeline = StorybookPipeline::new(generator, resolver, composer);

    let spinner = cli::ui::create_spinner("Creating your storybook...");

    // Bounded retry on generation failures only; each attempt re-invokes
    // the pipeline with the same prompt
    let mut last_error: Option<StorybookError> = None;
    let mut document = None;
    for attempt in 1..=attempts {
        info!("Pipeline attempt {} of {}", attempt, attempts);
        match pipeline.create_storybook(&request).await {
            Ok(doc) => {
                document = Some(doc);
                break;
            }
            Err(e @ StorybookError::Generation(_)) if attempt < attempts => {
                warn!("Attempt {} failed: {}", attempt, e);
                last_error = Some(e);
            }
            Err(e) => {
                last_error = Some(e);
                break;
            }
        }
    }

    spinner.finish_and_clear();

    let document = match document {
        Some(doc) => doc,
        None => {
            // Loop above always records an error before exiting without a document
            return Err(last_error.unwrap_or_else(|| {
                StorybookError::InvalidInput("No generation attempts were made".to_string())
            }));
        }
    };

    let output_path = output.unwrap_or_else(|| {
        let timestamp = chrono::Utc::now().timestamp_millis();
        PathBuf::from(format!("{}_{}.html", document.title_slug, timestamp))
    });

    std::fs::write(&output_path, &document.bytes)?;
    info!(
        "Wrote {} bytes ({}) to {}",
        document.len(),
        document.media_type,
        output_path.display()
    );
    cli::ui::print_success(&format!("Storybook saved to {}", output_path.display()));

    Ok(())
}

/// Map error kinds to user-facing messages without leaking prompt
/// content or collaborator-internal diagnostics
fn friendly_message(error: &StorybookError) -> String {
    use storybook::GenerationError;

    match error {
        StorybookError::InvalidInput(msg) => msg.clone(),
        StorybookError::Generation(GenerationError::Transport(_)) => {
            "Could not reach the AI service. Please try again.".to_string()
        }
        StorybookError::Generation(GenerationError::Extraction(_)) => {
            "AI service returned an invalid response. Please try again.".to_string()
        }
        StorybookError::Generation(GenerationError::Validation(_)) => {
            "Failed to parse story content. Please try with a different prompt.".to_string()
        }
        StorybookError::Render(_) => "Failed to create the document. Please try again.".to_string(),
        StorybookError::Config(e) => e.to_string(),
        StorybookError::Io(e) => format!("Could not write the output file: {}", e),
    }
}

fn setup_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();
}
