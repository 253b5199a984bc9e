//! tfbox cli interface

use clap::{Parser, Subcommand, ValueEnum};
use std::fmt::Formatter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Change the work directory
    ///
    /// Can be specified multiple times. Note that all
    /// paths on the way to the final path must exist.
    ///
    /// This is equivalent to running { cd <directory>; tfbox ... }
    #[clap(short = 'C', long = "directory", global(true))]
    pub directory: Vec<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Box a value with its unknown and sensitive markings
    ///
    /// Reads the value from stdin unless --object is provided
    #[command(alias = "b")]
    Box(BoxCommand),

    /// Print the leaf paths of a document, one per line
    #[command(alias = "p")]
    Paths(PathsCommand),
}

#[derive(Parser, Debug)]
pub struct BoxCommand {
    #[clap(flatten)]
    pub input: InputArgs,

    /// File marking unknown values (e.g. `after_unknown`)
    #[clap(short = 'u', long = "unknown")]
    pub unknown: Option<PathBuf>,

    /// File marking sensitive values (e.g. `after_sensitive`)
    #[clap(short = 's', long = "sensitive")]
    pub sensitive: Option<PathBuf>,

    #[clap(flatten)]
    pub output: OutputArgs,
}

#[derive(Parser, Debug)]
pub struct PathsCommand {
    #[clap(flatten)]
    pub input: InputArgs,
}

#[derive(Parser, Debug)]
pub struct InputArgs {
    /// File holding the value (e.g. `after`)
    #[clap(short = 'o', long = "object")]
    pub object: Option<PathBuf>,

    /// Format of all input documents
    ///
    /// Guessed from the file extension when omitted. Stdin is read as json.
    #[arg(short = 'I', long = "input-format")]
    pub input_format: Option<InputFormat>,
}

#[derive(Parser, Debug)]
pub struct OutputArgs {
    #[arg(short = 'F', long = "output-format", default_value_t)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum InputFormat {
    Json,
    Yaml,
    Hcl,
}

impl From<InputFormat> for tfbox::load::InputFormat {
    fn from(value: InputFormat) -> Self {
        match value {
            InputFormat::Json => tfbox::load::InputFormat::Json,
            InputFormat::Yaml => tfbox::load::InputFormat::Yaml,
            InputFormat::Hcl => tfbox::load::InputFormat::Hcl,
        }
    }
}

#[derive(ValueEnum, Clone, Default, Debug)]
pub enum OutputFormat {
    Json,
    #[default]
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Yaml => f.write_str("yaml"),
        }
    }
}
