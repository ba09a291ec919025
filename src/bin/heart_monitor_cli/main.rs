// ABOUTME: Heart monitor CLI - register, sign in, and check heart-rate zones from a terminal
// ABOUTME: Wires environment configuration, storage, and the session registry to subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Register and sign in
//! heart-monitor-cli user register --email a@a.com --password 123456 \
//!     --weight 70 --height 175 --age 25 --gender male --activity-level moderate
//!
//! # Sign in with an existing profile
//! heart-monitor-cli user login --email a@a.com --password 123456
//!
//! # Show the signed-in profile
//! heart-monitor-cli user whoami
//!
//! # Classify a reading against the signed-in profile
//! heart-monitor-cli zone --bpm 142
//!
//! # Training and nutrition plan
//! heart-monitor-cli recommend --algorithm tanaka
//!
//! # Sign out
//! heart-monitor-cli user logout
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use heart_monitor::{
    config::AppConfig,
    errors::AppResult,
    logging::LoggingConfig,
    models::RegistrationRequest,
    registry::SessionRegistry,
    storage::{factory::Storage, StorageBackend},
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};

type Result<T> = AppResult<T>;

/// Registry over whichever backend the configuration selected
pub type Registry = SessionRegistry<Storage>;

#[derive(Parser)]
#[command(
    name = "heart-monitor-cli",
    about = "Heart Monitor CLI",
    long_about = "Register a profile, sign in, and check heart-rate readings against your zones."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Storage file override (implies the file backend)
    #[arg(long, global = true)]
    storage_path: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Profile and session commands
    User {
        #[command(subcommand)]
        action: UserCommand,
    },

    /// Classify a heart-rate reading
    Zone {
        /// Reading in beats per minute
        #[arg(long)]
        bpm: f64,

        /// Age in years (defaults to the signed-in profile's age)
        #[arg(long)]
        age: Option<u32>,

        /// Max heart rate formula: fox, tanaka, nes, gulati
        #[arg(long)]
        algorithm: Option<String>,
    },

    /// Exercise and nutrition plan for the signed-in profile
    Recommend {
        /// Max heart rate formula: fox, tanaka, nes, gulati
        #[arg(long)]
        algorithm: Option<String>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum UserCommand {
    /// Register a new profile and sign in
    Register {
        /// Email (login identifier)
        #[arg(long)]
        email: String,

        /// Password, at least 6 characters
        #[arg(long)]
        password: String,

        /// Weight in kilograms
        #[arg(long)]
        weight: String,

        /// Height in centimetres
        #[arg(long)]
        height: String,

        /// Age in years
        #[arg(long)]
        age: String,

        /// male, female, or other
        #[arg(long)]
        gender: String,

        /// sedentary, light, moderate, active, or very_active
        #[arg(long)]
        activity_level: String,
    },

    /// Sign in with an existing profile
    Login {
        /// Email
        #[arg(long)]
        email: String,

        /// Password
        #[arg(long)]
        password: String,
    },

    /// Show the signed-in profile
    Whoami,

    /// Sign out
    Logout,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::for_cli(cli.verbose).init() {
        eprintln!("Warning: logging unavailable: {e}");
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(kind = %e.kind(), "Command failed");
            eprintln!("Error: {}", e.message);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = AppConfig::from_env()?;
    if let Some(path) = cli.storage_path {
        config.storage.backend = StorageBackend::File;
        config.storage.path = path;
    }
    debug!("{}", config.summary());

    let store = Storage::new(&config.storage).await?;
    let registry = SessionRegistry::load(store, config.registry.clone()).await?;

    match cli.command {
        Command::User { action } => match action {
            UserCommand::Register {
                email,
                password,
                weight,
                height,
                age,
                gender,
                activity_level,
            } => {
                commands::user::register(
                    &registry,
                    RegistrationRequest {
                        email,
                        password,
                        weight,
                        height,
                        age,
                        gender,
                        activity_level,
                    },
                )
                .await?;
            }
            UserCommand::Login { email, password } => {
                commands::user::login(&registry, &email, &password).await?;
            }
            UserCommand::Whoami => {
                commands::user::whoami(&registry).await;
            }
            UserCommand::Logout => {
                commands::user::logout(&registry).await?;
            }
        },
        Command::Zone {
            bpm,
            age,
            algorithm,
        } => {
            let algorithm = commands::resolve_algorithm(algorithm.as_deref(), &config)?;
            commands::zone::classify(&registry, bpm, age, algorithm).await?;
        }
        Command::Recommend { algorithm } => {
            let algorithm = commands::resolve_algorithm(algorithm.as_deref(), &config)?;
            commands::zone::recommend(&registry, algorithm).await?;
        }
    }

    Ok(())
}
