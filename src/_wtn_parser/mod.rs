//! Parser for the plain-text node/edge representation of a `WTNetwork`.
//!
//! The format consists of two parts, typically stored as two files next to each
//! other. The *nodes part* declares one node per line as a `name threshold` pair
//! (node order in the file is the node order of the network). The *edges part*
//! declares one weighted edge per line as a `source target weight` triple. In both
//! parts, blank lines and lines starting with `#` are skipped.
//!
//! ```text
//!  # nodes               # edges
//!  a 0                   a b 1
//!  b 0.5                 b c 2
//!  c 0                   c a -1
//! ```

use crate::WTNetwork;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;

lazy_static! {
    /// **(internal)** Matches one `name threshold` line of the nodes part.
    static ref NODE_LINE_REGEX: Regex =
        Regex::new(r"^([a-zA-Z0-9_]+)\s+([+-]?\d+(?:\.\d+)?)$").unwrap();
    /// **(internal)** Matches one `source target weight` line of the edges part.
    static ref EDGE_LINE_REGEX: Regex =
        Regex::new(r"^([a-zA-Z0-9_]+)\s+([a-zA-Z0-9_]+)\s+([+-]?\d+(?:\.\d+)?)$").unwrap();
}

impl WTNetwork {
    /// Try to load a `WTNetwork` from the node and edge parts of the text format.
    ///
    /// Malformed lines, duplicate node declarations, unknown edge endpoints and
    /// duplicate edges are all reported as errors.
    pub fn try_from_parts(nodes: &str, edges: &str) -> Result<WTNetwork, String> {
        let mut names: Vec<String> = Vec::new();
        let mut thresholds: Vec<f64> = Vec::new();
        for line in nodes.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let captures = NODE_LINE_REGEX
                .captures(line)
                .ok_or(format!("Unexpected node line: `{}`.", line))?;
            let name = captures[1].to_string();
            if names.contains(&name) {
                return Err(format!("Duplicate declaration of node `{}`.", name));
            }
            let threshold = parse_number(&captures[2], line)?;
            names.push(name);
            thresholds.push(threshold);
        }
        if names.is_empty() {
            return Err("The nodes part declares no nodes.".to_string());
        }

        let mut network = WTNetwork::new(names);
        for (i, threshold) in thresholds.into_iter().enumerate() {
            network.nodes[i].threshold = threshold;
        }

        let mut declared: HashSet<(String, String)> = HashSet::new();
        for line in edges.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let captures = EDGE_LINE_REGEX
                .captures(line)
                .ok_or(format!("Unexpected edge line: `{}`.", line))?;
            let source = captures[1].to_string();
            let target = captures[2].to_string();
            let weight = parse_number(&captures[3], line)?;
            if !declared.insert((source.clone(), target.clone())) {
                return Err(format!("Duplicate edge `{}` to `{}`.", source, target));
            }
            network.set_weight(&source, &target, weight)?;
        }

        Ok(network)
    }

    /// Try to load a `WTNetwork` from a pair of node/edge files.
    pub fn try_from_files<P: AsRef<Path>>(
        nodes_path: P,
        edges_path: P,
    ) -> Result<WTNetwork, String> {
        let nodes = std::fs::read_to_string(nodes_path.as_ref())
            .map_err(|e| format!("Nodes file not readable: {}", e))?;
        let edges = std::fs::read_to_string(edges_path.as_ref())
            .map_err(|e| format!("Edges file not readable: {}", e))?;
        WTNetwork::try_from_parts(&nodes, &edges)
    }
}

/// **(internal)** Parse a numeric literal matched by the line regexes.
fn parse_number(value: &str, line: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .map_err(|_| format!("Invalid number `{}` in line `{}`.", value, line))
}
