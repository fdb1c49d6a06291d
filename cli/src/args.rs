//! Command-line argument handling

use std::path::PathBuf;

use thiserror::Error;

use flowtrace_core::NodeId;

pub const USAGE: &str =
    "Usage: flowtrace <input-file> [--source N] [--sink N] [--config FILE] [--quiet] [--json]";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("missing input file")]
    MissingInput,

    #[error("unexpected argument: {0}")]
    Unexpected(String),

    #[error("option {0} requires a value")]
    MissingValue(String),

    #[error("invalid node id for {option}: {value}")]
    InvalidNode { option: String, value: String },
}

/// Parsed invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub input: PathBuf,
    pub source: Option<NodeId>,
    pub sink: Option<NodeId>,
    pub config: Option<PathBuf>,
    /// Summary-only trace instead of per-iteration steps
    pub quiet: bool,
    /// Emit a JSON report instead of console text
    pub json: bool,
}

impl Args {
    pub fn parse<I>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut input = None;
        let mut source = None;
        let mut sink = None;
        let mut config = None;
        let mut quiet = false;
        let mut json = false;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--source" => source = Some(node_value(&arg, args.next())?),
                "--sink" => sink = Some(node_value(&arg, args.next())?),
                "--config" => {
                    let value = args.next().ok_or_else(|| ArgsError::MissingValue(arg.clone()))?;
                    config = Some(PathBuf::from(value));
                }
                "--quiet" => quiet = true,
                "--json" => json = true,
                other if other.starts_with("--") => return Err(ArgsError::Unexpected(arg)),
                _ if input.is_none() => input = Some(PathBuf::from(arg)),
                _ => return Err(ArgsError::Unexpected(arg)),
            }
        }

        Ok(Self {
            input: input.ok_or(ArgsError::MissingInput)?,
            source,
            sink,
            config,
            quiet,
            json,
        })
    }
}

fn node_value(option: &str, value: Option<String>) -> Result<NodeId, ArgsError> {
    let value = value.ok_or_else(|| ArgsError::MissingValue(option.to_string()))?;
    value.parse().map_err(|_| ArgsError::InvalidNode {
        option: option.to_string(),
        value,
    })
}
