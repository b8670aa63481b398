//! ATS analyzer: resume vs job description match scoring

mod cli;
mod config;
mod error;
mod input;
mod nlp;
mod output;
mod processing;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{AtsError, Result};
use input::manager::InputManager;
use log::{error, info};
use processing::analyzer::AnalysisEngine;
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        // One explanatory message per failure, no stack traces
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            jd,
            jd_text,
            output,
            detailed,
            save,
        } => {
            info!("Starting resume match analysis");

            cli::validate_file_extension(&resume, &["pdf", "docx", "txt", "md"])
                .map_err(|e| AtsError::InvalidInput(format!("Resume file: {}", e)))?;

            let output_format =
                cli::parse_output_format(&output).map_err(AtsError::InvalidInput)?;

            let mut input_manager = InputManager::new();

            // Job description: inline text or a file, but one of them
            let jd_text = match (jd, jd_text) {
                (Some(path), _) => {
                    cli::validate_file_extension(&path, &["txt", "md"])
                        .map_err(|e| AtsError::InvalidInput(format!("Job description file: {}", e)))?;
                    input_manager.extract_text(&path).await?
                }
                (None, Some(text)) => text,
                (None, None) => {
                    return Err(AtsError::InvalidInput(
                        "Provide a job description with --jd or --jd-text".to_string(),
                    ));
                }
            };

            let resume_text = input_manager.extract_text(&resume).await?;

            // Precondition checks: the pipeline never starts on empty input
            if jd_text.trim().is_empty() {
                return Err(AtsError::InvalidInput(
                    "Job description is empty".to_string(),
                ));
            }
            if resume_text.trim().is_empty() {
                return Err(AtsError::InvalidInput(format!(
                    "No text could be recovered from resume: {}",
                    resume.display()
                )));
            }

            info!(
                "Extracted {} resume chars, {} JD chars",
                resume_text.len(),
                jd_text.len()
            );

            let engine = AnalysisEngine::from_config(&config)?;
            let report = engine.analyze(&resume_text, &jd_text)?;

            let rendered = output::formatter::format_report(
                &report,
                &output_format,
                config.output.color_output && save.is_none(),
                detailed || config.output.detailed,
            )?;

            match save {
                Some(path) => {
                    write_output(&path, &rendered).await?;
                    println!("Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }

            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let content = toml::to_string_pretty(&config).map_err(|e| {
                    AtsError::Configuration(format!("Failed to serialize config: {}", e))
                })?;
                println!("{}", content);
                Ok(())
            }
            ConfigAction::Reset => {
                let defaults = Config::default();
                defaults.save()?;
                println!("Configuration reset to defaults");
                Ok(())
            }
        },
    }
}

async fn write_output(path: &PathBuf, content: &str) -> Result<()> {
    tokio::fs::write(path, content).await?;
    Ok(())
}
