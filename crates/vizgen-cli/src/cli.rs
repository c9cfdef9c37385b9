//! CLI argument definitions for the visualization code generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "vizgen",
    version,
    about = "Visualization code generator - turn analytics datasets into chart code",
    long_about = "Generate client-side visualization code from column-oriented\n\
                  analytics datasets. Each method pairs a data transformer with\n\
                  a visualizer; a port configuration maps the dataset's columns\n\
                  onto the method's declared input ports."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Raise or lower log verbosity (-v, -vv, -q).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// When to colorize output.
    #[command(flatten)]
    pub color: Color,

    /// Exact log level, taking precedence over -v/-q.
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LevelArg>,

    /// Shape of log output.
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: FormatArg,

    /// Append logs to this file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the built-in visualization methods.
    Methods,

    /// Print a method's input schema as JSON.
    Schema(SchemaArgs),

    /// Check a port configuration against a method's input schema.
    Validate(ValidateArgs),

    /// Run the full pipeline and print the generated visualization code.
    Generate(GenerateArgs),
}

#[derive(Parser)]
pub struct SchemaArgs {
    /// Method name as listed by `vizgen methods`.
    #[arg(long = "method", value_name = "NAME")]
    pub method: String,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Method name as listed by `vizgen methods`.
    #[arg(long = "method", value_name = "NAME")]
    pub method: String,

    /// Port configuration file (JSON object with a "mappings" list).
    #[arg(long = "config", value_name = "FILE")]
    pub config: PathBuf,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Method name as listed by `vizgen methods`.
    #[arg(long = "method", value_name = "NAME")]
    pub method: String,

    /// Dataset file (.json, or .csv with per-column type inference).
    #[arg(long = "dataset", value_name = "FILE")]
    pub dataset: PathBuf,

    /// Port configuration file (JSON object with a "mappings" list).
    #[arg(long = "config", value_name = "FILE")]
    pub config: PathBuf,

    /// Rendering parameters file (JSON object).
    #[arg(long = "params", value_name = "FILE")]
    pub params: Option<PathBuf>,

    /// Print the method's library script tag before the generated code.
    #[arg(long = "include-library")]
    pub include_library: bool,
}

/// Selectable log levels.
#[derive(Clone, Copy, ValueEnum)]
pub enum LevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Selectable log output shapes.
#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Pretty,
    Compact,
    Json,
}
