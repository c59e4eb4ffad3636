use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use record_mapper_core::{camel_to_snake, snake_to_camel, CaseCodec};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "record-mapper")]
#[command(about = "Rewrite JSON document keys between snake_case and camelCase")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite snake_case keys to camelCase
    Encode {
        /// Input JSON file (`-` reads stdin)
        input: PathBuf,

        /// Output file (defaults to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },

    /// Rewrite camelCase keys to snake_case
    Decode {
        /// Input JSON file (`-` reads stdin)
        input: PathBuf,

        /// Output file (defaults to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },

    /// Convert bare keys, printing one per line
    Key {
        /// Conversion direction
        #[arg(value_enum)]
        direction: KeyDirection,

        /// Keys to convert
        #[arg(required = true)]
        keys: Vec<String>,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum KeyDirection {
    ToCamel,
    ToSnake,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum OutputFormat {
    Pretty,
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for JSON
    let log_level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let codec = CaseCodec::new();

    match cli.command {
        Commands::Encode {
            input,
            output,
            format,
        } => {
            let text = read_input(&input)?;
            let value: serde_json::Value = serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse JSON from: {}", input.display()))?;
            let rendered = match format {
                OutputFormat::Pretty => codec.encode_pretty(&value),
                OutputFormat::Compact => codec.encode(&value),
            }
            .map_err(|e| anyhow::Error::from(e).context("Encoding failed"))?;
            write_output(&rendered, output.as_deref())?;
        }
        Commands::Decode {
            input,
            output,
            format,
        } => {
            let text = read_input(&input)?;
            let decoded = codec
                .decode(&text)
                .map_err(|e| anyhow::Error::from(e).context("Decoding failed"))?;
            write_output(&render(&decoded, format)?, output.as_deref())?;
        }
        Commands::Key { direction, keys } => {
            let convert = match direction {
                KeyDirection::ToCamel => snake_to_camel,
                KeyDirection::ToSnake => camel_to_snake,
            };
            let mut out = BufWriter::new(io::stdout().lock());
            for key in &keys {
                writeln!(out, "{}", convert(key)).context("Failed to write key")?;
            }
        }
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    let mut text = String::new();
    if path.as_os_str() == "-" {
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
    } else {
        File::open(path)
            .with_context(|| format!("Failed to open input file: {}", path.display()))?
            .read_to_string(&mut text)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    }
    tracing::debug!(bytes = text.len(), source = %path.display(), "read input");
    Ok(text)
}

/// Decoded graphs are rendered here; encoded output is rendered by the codec.
fn render(value: &serde_json::Value, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(value),
        OutputFormat::Compact => serde_json::to_string(value),
    };
    rendered.context("Failed to render JSON")
}

fn write_output(rendered: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            let mut file = BufWriter::new(
                File::create(p)
                    .with_context(|| format!("Failed to create output file: {}", p.display()))?,
            );
            writeln!(file, "{rendered}")
                .and_then(|()| file.flush())
                .with_context(|| format!("Failed to write output file: {}", p.display()))?;
            tracing::debug!(bytes = rendered.len(), target_file = %p.display(), "wrote output");
        }
        None => {
            let mut out = io::stdout().lock();
            writeln!(out, "{rendered}")
                .and_then(|()| out.flush())
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}
