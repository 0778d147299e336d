//! Formkit CLI
//!
//! Copyright 2025 Release Workshop Ltd
//! Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
//! See the LICENSE file in the project root for details.

mod commands;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use commands::{render, validate};
use tracing_subscriber::EnvFilter;

/// Formkit CLI - Render and validate form definitions
#[derive(Parser)]
#[command(name = "formkit")]
#[command(about = "Formkit CLI - Render and validate form definitions", long_about = None)]
#[command(version)]
struct Cli {
    /// Site configuration file (base URL, CDN URL, locale)
    #[arg(long, global = true, default_value = "formkit.yaml")]
    config: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a form definition to HTML
    Render {
        /// Path to the form definition file (YAML or JSON)
        #[arg(long)]
        definition: String,
        /// Initial data as a JSON object, or @file
        #[arg(long)]
        data: Option<String>,
        /// Submission to handle as a JSON object of field names, or @file
        #[arg(long)]
        submit: Option<String>,
        /// Referring page to carry in the form
        #[arg(long)]
        referer: Option<String>,
        /// Write the markup to this file instead of stdout
        #[arg(long)]
        output: Option<String>,
    },
    /// Validate a form definition file
    Validate {
        /// Path to the form definition file (YAML or JSON)
        #[arg(long)]
        definition: String,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("formkit={level},formkit_cli={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match cli.command {
        Commands::Render {
            definition,
            data,
            submit,
            referer,
            output,
        } => {
            let opts = render::Options {
                definition,
                data,
                submit,
                referer,
                output,
                config: cli.config,
            };
            render::run(&opts)
        }
        Commands::Validate { definition } => {
            let opts = validate::Options { definition };
            validate::run(&opts)
        }
    };

    std::process::exit(exit_code);
}
