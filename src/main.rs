//! Resume analyzer: resume and job description match scoring tool

mod cli;
mod config;
mod error;
mod input;
mod output;
mod processing;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{Result, ResumeAnalyzerError};
use input::manager::InputManager;
use log::{error, info, warn};
use output::formatter::formatter_for;
use processing::analyzer::{AnalysisEngine, AnalysisReport};
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
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            output,
            detailed,
            save,
        } => {
            info!("Starting resume analysis");

            cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
                .map_err(|e| ResumeAnalyzerError::InvalidInput(format!("Resume file: {}", e)))?;

            cli::validate_file_extension(&job, &["txt", "md"]).map_err(|e| {
                ResumeAnalyzerError::InvalidInput(format!("Job description file: {}", e))
            })?;

            let output_format =
                cli::parse_output_format(&output).map_err(ResumeAnalyzerError::InvalidInput)?;

            let mut input_manager = InputManager::new();

            // Extraction failures become a warning report instead of an
            // error; the analysis boundary never faults toward the user.
            let report = match input_manager.extract_text(&resume).await {
                Ok(resume_text) => {
                    let job_text = input_manager.extract_text(&job).await?;

                    let engine = AnalysisEngine::new(&config);
                    engine.analyze(&resume_text, &job_text)
                }
                Err(e) => {
                    warn!("Could not extract resume text: {}", e);
                    AnalysisReport::unreadable_resume()
                }
            };

            let formatter = formatter_for(
                &output_format,
                config.output.color_output,
                detailed || config.output.detailed,
            );
            let rendered = formatter.format_report(&report)?;

            if let Some(save_path) = save {
                std::fs::write(&save_path, &rendered)?;
                println!("Report saved to {}", save_path.display());
            } else {
                println!("{}", rendered);
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Output Format: {:?}", config.output.format);
                println!("\nScoring Weights:");
                println!("  Content: {:.1}%", config.scoring.content_weight * 100.0);
                println!("  Skills: {:.1}%", config.scoring.skill_weight * 100.0);
                println!(
                    "  Rescale: x{} + {}",
                    config.scoring.score_scale, config.scoring.score_floor
                );
                println!("  Max Vocabulary: {}", config.scoring.max_vocabulary);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                let default_config = Config::default();
                default_config.save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}
