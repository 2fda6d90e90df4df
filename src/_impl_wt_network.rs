use crate::state_space::StateSpace;
use crate::{Node, NodeId, NodeIdIterator, ThresholdRule, WTNetwork, ID_REGEX};
use std::collections::{HashMap, HashSet};
use std::ops::Index;

/// Methods for safely constructing new instances of `WTNetwork`s.
impl WTNetwork {
    /// Create a new `WTNetwork` with nodes using the given names, no edges, zero
    /// thresholds and the default `Split` rule.
    ///
    /// The ordering of the nodes is preserved. Panics when the names are empty,
    /// contain duplicates or contain an invalid name (these are programmer errors,
    /// not recoverable conditions).
    pub fn new(names: Vec<String>) -> WTNetwork {
        if names.is_empty() {
            panic!("A network must have at least one node.");
        }
        let name_set = names.iter().collect::<HashSet<_>>();
        if name_set.len() != names.len() {
            panic!("Node names {:?} contain duplicates.", names);
        }
        for name in &names {
            if !Self::is_valid_name(name) {
                panic!("`{}` is not a valid node name.", name);
            }
        }
        let n = names.len();
        let mut node_to_index = HashMap::new();
        for (i, name) in names.iter().enumerate() {
            node_to_index.insert(name.clone(), NodeId(i));
        }
        WTNetwork {
            weights: vec![0.0; n * n],
            rule: ThresholdRule::Split,
            node_to_index,
            nodes: names
                .into_iter()
                .map(|name| Node {
                    name,
                    threshold: 0.0,
                })
                .collect(),
        }
    }

    /// Create a new `WTNetwork` from a dense weight matrix (row per target node,
    /// column per source node) and a vector of node thresholds.
    ///
    /// The nodes get default names `x_0 .. x_{n-1}` and the `Split` rule. Returns
    /// `Err` when the matrix is empty, not square, or when its dimension differs
    /// from the length of the threshold vector.
    pub fn try_from_matrix(
        weights: Vec<Vec<f64>>,
        thresholds: Vec<f64>,
    ) -> Result<WTNetwork, String> {
        if weights.is_empty() {
            return Err("Weight matrix is empty.".to_string());
        }
        let n = weights.len();
        for row in &weights {
            if row.len() != n {
                return Err(format!(
                    "Weight matrix must be square, but it has a row of length {} for {} nodes.",
                    row.len(),
                    n
                ));
            }
        }
        if thresholds.len() != n {
            return Err(format!(
                "Weights and thresholds have different dimensions: {} vs. {}.",
                n,
                thresholds.len()
            ));
        }
        let names = (0..n).map(|i| format!("x_{}", i)).collect::<Vec<_>>();
        let mut network = WTNetwork::new(names);
        network.weights = weights.into_iter().flatten().collect();
        for (i, threshold) in thresholds.into_iter().enumerate() {
            network.nodes[i].threshold = threshold;
        }
        Ok(network)
    }

    /// Set the weight of the edge from `source` to `target` (overwriting any
    /// previous weight, including zero).
    ///
    /// Returns `Err` when `source` or `target` are not valid network nodes.
    pub fn set_weight(&mut self, source: &str, target: &str, weight: f64) -> Result<(), String> {
        let source = self.get_source(source)?;
        let target = self.get_edge_target(target)?;
        let n = self.nodes.len();
        self.weights[target.0 * n + source.0] = weight;
        Ok(())
    }

    /// Set the threshold of the given node.
    ///
    /// Returns `Err` when `node` is not a valid network node.
    pub fn set_threshold(&mut self, node: &str, threshold: f64) -> Result<(), String> {
        let id = self
            .find_node(node)
            .ok_or(format!("Unknown node {}.", node))?;
        self.nodes[id.0].threshold = threshold;
        Ok(())
    }

    /// Replace the threshold rule shared by all nodes of this network.
    pub fn set_rule(&mut self, rule: ThresholdRule) {
        self.rule = rule;
    }

    /// **(internal)** Utility method to safely obtain a source node (using an
    /// appropriate error message).
    fn get_source(&self, name: &str) -> Result<NodeId, String> {
        self.find_node(name)
            .ok_or(format!("Invalid edge: Unknown source {}.", name))
    }

    /// **(internal)** Utility method to safely obtain a target node (using an
    /// appropriate error message).
    fn get_edge_target(&self, name: &str) -> Result<NodeId, String> {
        self.find_node(name)
            .ok_or(format!("Invalid edge: Unknown target {}.", name))
    }

    /// Copy the node names from this network into a separate vector.
    pub fn node_names(&self) -> Vec<String> {
        self.nodes.iter().map(|it| it.name.clone()).collect()
    }
}

/// Some basic utility methods for inspecting the `WTNetwork`.
impl WTNetwork {
    /// The number of nodes in this `WTNetwork`.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Find a `NodeId` for the given name, or `None` if the node does not exist.
    pub fn find_node(&self, name: &str) -> Option<NodeId> {
        self.node_to_index.get(name).cloned()
    }

    /// Return a `Node` corresponding to the given `NodeId`.
    pub fn get_node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Shorthand for `self.get_node(id).get_name()`.
    pub fn get_node_name(&self, id: NodeId) -> &String {
        &self.nodes[id.0].name
    }

    /// The weight of the edge from `source` to `target` (zero when there is none).
    pub fn get_weight(&self, source: NodeId, target: NodeId) -> f64 {
        self.weights[target.0 * self.nodes.len() + source.0]
    }

    /// Shorthand for `self.get_node(id).get_threshold()`.
    pub fn get_threshold(&self, id: NodeId) -> f64 {
        self.nodes[id.0].threshold
    }

    /// The threshold rule shared by all nodes of this network.
    pub fn get_rule(&self) -> ThresholdRule {
        self.rule
    }

    /// Return an iterator over all node ids of this network.
    pub fn nodes(&self) -> NodeIdIterator {
        (0..self.nodes.len()).map(NodeId)
    }

    /// The `StateSpace` of this network.
    pub fn state_space(&self) -> StateSpace {
        StateSpace::new(self.nodes.len())
    }

    /// All edges of this network as `(source, target, weight)` triples with nonzero
    /// weight, ordered by target and then by source.
    pub fn edges(&self) -> Vec<(NodeId, NodeId, f64)> {
        let n = self.nodes.len();
        let mut edges = Vec::new();
        for target in 0..n {
            for source in 0..n {
                let weight = self.weights[target * n + source];
                if weight != 0.0 {
                    edges.push((NodeId(source), NodeId(target), weight));
                }
            }
        }
        edges
    }

    /// Return a sorted list of nodes that the value of the given `target` node
    /// depends on.
    ///
    /// These are the sources of nonzero-weight edges into `target`. Note that under
    /// the `Split` rule the node is also included, since keeping the current value
    /// at the boundary makes every node implicitly depend on itself.
    pub fn regulators(&self, target: NodeId) -> Vec<NodeId> {
        let n = self.nodes.len();
        let mut regulators: Vec<NodeId> = (0..n)
            .filter(|source| self.weights[target.0 * n + source] != 0.0)
            .map(NodeId)
            .collect();
        if self.rule == ThresholdRule::Split && !regulators.contains(&target) {
            regulators.push(target);
            regulators.sort();
        }
        regulators
    }

    /// Return a sorted list of nodes whose value depends on the given `source` node.
    ///
    /// These are the targets of nonzero-weight edges out of `source`, plus the node
    /// itself under the `Split` rule (see `regulators`).
    pub fn targets(&self, source: NodeId) -> Vec<NodeId> {
        let n = self.nodes.len();
        let mut targets: Vec<NodeId> = (0..n)
            .filter(|target| self.weights[target * n + source.0] != 0.0)
            .map(NodeId)
            .collect();
        if self.rule == ThresholdRule::Split && !targets.contains(&source) {
            targets.push(source);
            targets.sort();
        }
        targets
    }

    /// A static check that allows to verify validity of a node name.
    pub fn is_valid_name(name: &str) -> bool {
        ID_REGEX.is_match(name)
    }
}

/// Allow indexing `WTNetwork` using `NodeId` objects.
impl Index<NodeId> for WTNetwork {
    type Output = Node;

    fn index(&self, index: NodeId) -> &Self::Output {
        self.get_node(index)
    }
}
