//! Command line handling for the `garmentcut` binary

use anyhow::{bail, Result};
use std::path::PathBuf;

/// Options for one processing run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    pub input: PathBuf,
    pub config: Option<PathBuf>,
    pub force_close: bool,
    pub strict: bool,
    pub json: bool,
    pub svg: Option<PathBuf>,
    pub hide_repairs: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Process(CliOptions),
    Help,
    Version,
}

pub const USAGE: &str = "\
Usage: garmentcut <file.dxf> [options]

Options:
  --config <path>     Settings file (.toml or .json)
  --force-close       Bridge any remaining opening of each path
  --strict            Reject entities with malformed coordinates
  --json              Print the full result as JSON
  --svg <out.svg>     Write an SVG preview
  --hide-repairs      Leave repair markers out of the preview
  -h, --help          Show this help
  -V, --version       Show version";

impl CliCommand {
    /// Parse arguments, excluding the program name
    pub fn parse(args: &[String]) -> Result<Self> {
        let mut options = CliOptions::default();
        let mut input = None;
        let mut i = 0;

        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => return Ok(Self::Help),
                "-V" | "--version" => return Ok(Self::Version),
                "--config" => {
                    i += 1;
                    match args.get(i) {
                        Some(path) => options.config = Some(PathBuf::from(path)),
                        None => bail!("--config requires a path"),
                    }
                }
                "--svg" => {
                    i += 1;
                    match args.get(i) {
                        Some(path) => options.svg = Some(PathBuf::from(path)),
                        None => bail!("--svg requires an output path"),
                    }
                }
                "--force-close" => options.force_close = true,
                "--strict" => options.strict = true,
                "--json" => options.json = true,
                "--hide-repairs" => options.hide_repairs = true,
                flag if flag.starts_with('-') => bail!("Unknown option: {}", flag),
                file => {
                    if input.is_some() {
                        bail!("Only one input file may be given");
                    }
                    input = Some(PathBuf::from(file));
                }
            }
            i += 1;
        }

        match input {
            Some(path) => {
                options.input = path;
                Ok(Self::Process(options))
            }
            None => bail!("No input file given"),
        }
    }
}
