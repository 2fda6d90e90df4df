//! A library for working with **weight/threshold Boolean networks**: discrete dynamical
//! systems where each node holds a Boolean value and evolves by comparing a weighted sum
//! of its inputs against a scalar threshold.
//!
//! The main structures of the library are:
//!  - `WTNetwork`, the network itself (a dense weight matrix, a threshold per node, and
//!    a `ThresholdRule` resolving the boundary case);
//!  - `State` and `StateSpace` (in `state_space`), explicit Boolean states and the lazy
//!    enumeration of all `2^n` of them;
//!  - the node/edge text format parser (`WTNetwork::try_from_parts` and
//!    `WTNetwork::try_from_files`);
//!  - curated example networks in `models`.
//!
//! All dynamics operations are pure functions of `(network, state)` and the library has
//! no shared mutable resources of any kind.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use std::iter::Map;
use std::ops::Range;

pub mod models;
pub mod state_space;

/// **(internal)** `WTNetwork` to node/edge strings.
mod _impl_display_wt_network;
/// **(internal)** Utility methods for `Node`.
mod _impl_node;
/// **(internal)** Utility methods for `NodeId`.
mod _impl_node_id;
/// **(internal)** Utility methods for `ThresholdRule`.
mod _impl_threshold_rule;
/// **(internal)** Utility methods for `WTNetwork`.
mod _impl_wt_network;
/// **(internal)** Trajectories, attractors and fixed points of `WTNetwork`s.
mod _impl_wt_network_dynamics;
/// **(internal)** Synchronous update semantics of `WTNetwork`.
mod _impl_wt_network_update;
/// **(internal)** Implements the node/edge text format parser for `WTNetwork` objects.
mod _wtn_parser;

lazy_static! {
    /// A regular expression that describes valid node names.
    static ref ID_REGEX: Regex = Regex::new(r"^[a-zA-Z0-9_]+$").unwrap();
}

/// A type-safe index of a `Node` inside a `WTNetwork`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(usize);

/// A node of a `WTNetwork`.
///
/// A node has a `name`, holds a Boolean value, and carries the scalar `threshold`
/// against which its weighted input is compared during an update.
#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct Node {
    name: String,
    threshold: f64,
}

/// Possible resolutions of the boundary case of a threshold function, i.e. the situation
/// where the weighted input of a node is *exactly equal* to its threshold.
///
/// Away from the boundary, all three rules agree: a node becomes `true` when its
/// threshold-shifted input is positive and `false` when it is negative. At the boundary:
///  - `Split` keeps the current value of the node (which makes every node implicitly
///    depend on itself);
///  - `Negative` resolves to `false`;
///  - `Positive` resolves to `true`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ThresholdRule {
    Split,
    Negative,
    Positive,
}

/// A weight/threshold Boolean network.
///
/// The network consists of an ordered sequence of named nodes, a dense matrix of edge
/// weights (row per *target* node, column per *source* node), and one `ThresholdRule`
/// shared by all nodes. A synchronous update moves every node `i` of a state `x` to
/// `rule(W[i]·x - T[i], x[i])`.
///
/// A network can be assembled programmatically (`new` plus `set_weight`/`set_threshold`),
/// built from a dense matrix (`try_from_matrix`), or loaded from the node/edge text
/// format (`try_from_parts`, `try_from_files`). Once built, all dynamics operations
/// treat it as an immutable value.
#[derive(Clone, Debug, PartialEq)]
pub struct WTNetwork {
    nodes: Vec<Node>,
    /// Row-major weight matrix: `weights[target * n + source]`.
    weights: Vec<f64>,
    rule: ThresholdRule,
    node_to_index: HashMap<String, NodeId>,
}

/// An iterator over all `NodeId`s of a `WTNetwork`.
pub type NodeIdIterator = Map<Range<usize>, fn(usize) -> NodeId>;
