pub mod commands;
pub mod error;

use clap::{Parser, Subcommand};
use lipidquery::io::SerializationFormat;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect the adduct of every annotation in a file.
    Annotate(AnnotateArgs),
    /// Write template input and settings files.
    WriteTemplate(WriteTemplateArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct AnnotateArgs {
    /// The path to the json file with the annotations.
    #[arg(short, long)]
    pub annotations_path: PathBuf,

    /// The path to the json file with the annotation settings.
    #[arg(short, long)]
    pub settings_path: Option<PathBuf>,

    /// Overrides the ppm tolerance from the settings file.
    #[arg(short, long, allow_negative_numbers = true)]
    pub ppm_tolerance: Option<i64>,

    /// The path to the output directory.
    #[arg(short, long)]
    pub output_path: PathBuf,

    /// The format to use for the output
    #[arg(short, long, default_value_t, value_enum)]
    pub format: SerializationFormat,
}

#[derive(Parser, Debug)]
pub struct WriteTemplateArgs {
    /// The path to the output files.
    #[arg(short, long)]
    pub output_path: PathBuf,
}
