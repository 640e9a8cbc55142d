//! The main module contains the code to process the command line for the yangen program and
//! run the source generator.

mod model_listing;
mod source_generation;

use crate::model_listing::list_model_classes;
use crate::source_generation::generate_sources;
use chrono::Local;
use clap::{ArgGroup, Args, Parser, Subcommand};
use std::io::Write;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "C++ source generator for resolved yang models.")]
#[command(propagate_version = true)]
struct YangenCommand {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    Generate(GenerateCLArgs),
    List(ListCLArgs),
}

/// Arguments for generating class sources from a model or configuration file.
#[derive(Args, Debug, Clone)]
#[command(group(
ArgGroup::new("input")
.required(true)
.args(["model", "config_file"]),
))]
pub struct GenerateCLArgs {
    /// Model file to generate sources for
    #[arg(short, long)]
    pub model: Option<String>,

    /// Configuration (.ygen) file with generation settings
    #[arg(short, long)]
    pub config_file: Option<String>,

    /// Directory to store generated sources [default: out]
    #[arg(short, long)]
    pub output_directory: Option<String>,

    /// Write output to stdout instead of the output directory.
    #[arg(long)]
    pub stdout: bool,

    /// Number of spaces per indentation level [default: 4]
    #[arg(long)]
    pub tab_width: Option<usize>,

    /// Only generate the listed packages
    #[arg(long)]
    pub package: Vec<String>,

    /// Extension of generated files [default: cpp]
    #[arg(long)]
    pub extension: Option<String>,

    /// Save the effective generation settings to a configuration (.ygen) file
    #[arg(long)]
    pub save_config_file: Option<String>,
}

/// Arguments for listing the classes of a model.
#[derive(Args, Debug, Clone)]
pub struct ListCLArgs {
    /// Model file to list
    #[arg(short, long, required = true)]
    pub model: String,
}

fn main() {
    let _ = env_logger::builder()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .try_init();

    let yangen_command = YangenCommand::parse();
    match &yangen_command.command {
        Commands::Generate(generate_args) => {
            if let Err(e) = generate_sources(generate_args.clone()) {
                println!("Unable to generate sources: {}", e);
            }
        }
        Commands::List(list_args) => {
            if let Err(e) = list_model_classes(list_args.clone()) {
                println!("Unable to list model classes: {}", e);
            }
        }
    }
}
