//! Plain-text network description parser
//!
//! Format: the first non-blank line holds the node count, every following
//! non-blank line one edge as three whitespace-separated integers
//! `from to capacity`. Errors carry the 1-based line number they occur on.
//!
//! ```text
//! 4
//! 0 1 3
//! 0 2 2
//! 1 3 2
//! 2 3 3
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::data_structures::{Capacity, FlowNetwork, NetworkError, NodeId};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Empty input: no node count found")]
    Empty,

    #[error("Invalid number of nodes at line {line}: {text}")]
    InvalidNodeCount { line: usize, text: String },

    #[error("Number of nodes must be at least 2 (line {line}: {count})")]
    TooFewNodes { line: usize, count: usize },

    #[error("Invalid edge format at line {line}: expected `from to capacity`, got {text}")]
    WrongTokenCount { line: usize, text: String },

    #[error("Invalid number format at line {line}: {text}")]
    InvalidNumber { line: usize, text: String },

    #[error("Invalid source node at line {line}: {node}")]
    InvalidSourceNode { line: usize, node: i64 },

    #[error("Invalid destination node at line {line}: {node}")]
    InvalidDestinationNode { line: usize, node: i64 },

    #[error("Negative capacity at line {line}: {capacity}")]
    NegativeCapacity { line: usize, capacity: Capacity },

    #[error("Duplicate edge at line {line}: {from} -> {to}")]
    DuplicateEdge { line: usize, from: NodeId, to: NodeId },

    #[error("Invalid network at line {line}: {source}")]
    Network { line: usize, source: NetworkError },

    #[error("Error reading input: {0}")]
    Io(#[from] io::Error),
}

impl ParseError {
    /// Line the error was found on, when it has one
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::InvalidNodeCount { line, .. }
            | ParseError::TooFewNodes { line, .. }
            | ParseError::WrongTokenCount { line, .. }
            | ParseError::InvalidNumber { line, .. }
            | ParseError::InvalidSourceNode { line, .. }
            | ParseError::InvalidDestinationNode { line, .. }
            | ParseError::NegativeCapacity { line, .. }
            | ParseError::DuplicateEdge { line, .. }
            | ParseError::Network { line, .. } => Some(*line),
            ParseError::Empty | ParseError::Io(_) => None,
        }
    }
}

/// Parse a network from an in-memory description
pub fn parse_network(input: &str) -> Result<FlowNetwork, ParseError> {
    parse_reader(input.as_bytes())
}

/// Parse a network from a file on disk
pub fn parse_file(path: impl AsRef<Path>) -> Result<FlowNetwork, ParseError> {
    let path = path.as_ref();
    debug!("Parsing network from {}", path.display());
    let file = File::open(path)?;
    parse_reader(BufReader::new(file))
}

/// Parse a network from any buffered reader
pub fn parse_reader<R: BufRead>(reader: R) -> Result<FlowNetwork, ParseError> {
    let mut network: Option<FlowNetwork> = None;

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        match network.as_mut() {
            None => network = Some(parse_header(line_number, text)?),
            Some(network) => parse_edge(network, line_number, text)?,
        }
    }

    let network = network.ok_or(ParseError::Empty)?;
    debug!(
        "Parsed network with {} nodes and {} edges",
        network.num_nodes(),
        network.edge_count()
    );
    Ok(network)
}

fn parse_header(line: usize, text: &str) -> Result<FlowNetwork, ParseError> {
    let count: usize = text.parse().map_err(|_| ParseError::InvalidNodeCount {
        line,
        text: text.to_string(),
    })?;

    FlowNetwork::new(count).map_err(|err| match err {
        NetworkError::TooFewNodes(count) => ParseError::TooFewNodes { line, count },
        source => ParseError::Network { line, source },
    })
}

fn parse_edge(network: &mut FlowNetwork, line: usize, text: &str) -> Result<(), ParseError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let [from, to, capacity] = tokens[..] else {
        return Err(ParseError::WrongTokenCount {
            line,
            text: text.to_string(),
        });
    };

    let number = |token: &str| {
        token.parse::<i64>().map_err(|_| ParseError::InvalidNumber {
            line,
            text: text.to_string(),
        })
    };
    let (from, to, capacity) = (number(from)?, number(to)?, number(capacity)?);

    let num_nodes = network.num_nodes();
    let from = usize::try_from(from)
        .ok()
        .filter(|&node| node < num_nodes)
        .ok_or(ParseError::InvalidSourceNode { line, node: from })?;
    let to = usize::try_from(to)
        .ok()
        .filter(|&node| node < num_nodes)
        .ok_or(ParseError::InvalidDestinationNode { line, node: to })?;
    if capacity < 0 {
        return Err(ParseError::NegativeCapacity { line, capacity });
    }

    network.add_edge(from, to, capacity).map_err(|err| match err {
        NetworkError::DuplicateEdge { from, to } => ParseError::DuplicateEdge { line, from, to },
        NetworkError::InvalidCapacity { capacity, .. } => {
            ParseError::NegativeCapacity { line, capacity }
        }
        source => ParseError::Network { line, source },
    })?;
    Ok(())
}
