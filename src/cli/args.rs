// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the main CLI structure and subcommands for templar

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "templar")]
#[command(about = "A data-source style template renderer for infrastructure definitions")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a template file and print the output attribute
    Render {
        #[arg(help = "Path to template file")]
        template: PathBuf,

        #[arg(
            short = 'V',
            long = "var",
            help = "Template variables (key=value), override file and config values"
        )]
        vars: Vec<String>,

        #[arg(long, help = "YAML or JSON file with template variables")]
        vars_file: Option<PathBuf>,

        #[arg(short, long, help = "Write rendered output to a file instead of stdout")]
        output: Option<PathBuf>,
    },

    /// Validate a template file without rendering
    Validate {
        #[arg(help = "Path to template file")]
        template: PathBuf,
    },
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse variables from key=value format
    pub fn parse_variables(
        vars: &[String],
    ) -> anyhow::Result<std::collections::HashMap<String, String>> {
        let mut variables = std::collections::HashMap::new();

        for var in vars {
            if let Some((key, value)) = var.split_once('=') {
                variables.insert(key.to_string(), value.to_string());
            } else {
                return Err(anyhow::anyhow!(
                    "Invalid variable format '{}'. Expected 'key=value'",
                    var
                ));
            }
        }

        Ok(variables)
    }
}
