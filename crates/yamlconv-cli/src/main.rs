//! `yamlconv` CLI — convert between JSON and type-preserving YAML.
//!
//! ## Usage
//!
//! ```sh
//! # JSON to YAML (stdin → stdout)
//! echo '{"id":"007","retries":3}' | yamlconv encode
//!
//! # JSON to YAML, dropping null-valued properties
//! echo '{"name":"Alice","email":null}' | yamlconv encode --omit-null
//!
//! # From file to file
//! yamlconv encode -i config.json -o config.yaml
//!
//! # YAML back to pretty-printed JSON
//! yamlconv decode -i config.yaml
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use yamlconv_core::EncodeOptions;

#[derive(Parser)]
#[command(
    name = "yamlconv",
    version,
    about = "Type-preserving JSON/YAML converter"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode JSON to YAML
    Encode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Skip object properties whose value is null
        #[arg(long)]
        omit_null: bool,
    },
    /// Decode YAML to pretty-printed JSON
    Decode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            input,
            output,
            omit_null,
        } => {
            let json = read_input(input.as_deref())?;
            let value: serde_json::Value =
                serde_json::from_str(&json).context("Failed to parse input as JSON")?;
            let options = EncodeOptions {
                omit_null,
                ..EncodeOptions::default()
            };
            let yaml = yamlconv_core::to_yaml_with(&value, &options)
                .context("Failed to encode JSON as YAML")?;
            write_output(output.as_deref(), &yaml)?;
        }
        Commands::Decode { input, output } => {
            let yaml = read_input(input.as_deref())?;
            let value: serde_json::Value =
                yamlconv_core::from_yaml(&yaml).context("Failed to decode YAML")?;
            let mut pretty = serde_json::to_string_pretty(&value)?;
            pretty.push('\n');
            write_output(output.as_deref(), &pretty)?;
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
