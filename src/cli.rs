use crate::model::Language;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Flavour of the generated stub implementation file
    #[arg(long = "lang", value_enum, default_value_t = Language::C)]
    pub language: Language,

    /// Directory the stub files are written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Also write a JSON summary of the run to this file
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// C/C++ headers to generate stubs for
    #[arg(value_name = "HEADER", required = true)]
    pub headers: Vec<PathBuf>,
}
