use crate::WTNetwork;
use std::fmt::{Display, Error, Formatter};

impl WTNetwork {
    /// Export the nodes of this network in the text format, one `name threshold`
    /// pair per line.
    ///
    /// Together with `to_edge_string`, the output round-trips through
    /// `WTNetwork::try_from_parts` (up to the threshold rule, which the format
    /// does not carry).
    pub fn to_node_string(&self) -> String {
        let mut result = String::new();
        for node in &self.nodes {
            result.push_str(&format!("{} {}\n", node.name, node.threshold));
        }
        result
    }

    /// Export the edges of this network in the text format, one
    /// `source target weight` triple per line (zero-weight edges are omitted).
    pub fn to_edge_string(&self) -> String {
        let mut result = String::new();
        for (source, target, weight) in self.edges() {
            result.push_str(&format!(
                "{} {} {}\n",
                self.get_node_name(source),
                self.get_node_name(target),
                weight
            ));
        }
        result
    }
}

impl Display for WTNetwork {
    /// A combined human-readable listing of the network: a summary comment
    /// followed by the node and edge sections of the text format.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        writeln!(
            f,
            "# {} nodes, {} edges, {} rule",
            self.num_nodes(),
            self.edges().len(),
            self.rule
        )?;
        writeln!(f, "# nodes")?;
        write!(f, "{}", self.to_node_string())?;
        writeln!(f, "# edges")?;
        write!(f, "{}", self.to_edge_string())
    }
}

#[cfg(test)]
mod tests {
    use crate::_impl_wt_network::tests::build_test_network;
    use crate::WTNetwork;

    #[test]
    fn test_node_edge_export() {
        let network = build_test_network();
        assert_eq!("a 0\nb 0.5\nc 0\n", network.to_node_string());
        assert_eq!("c a -1\na b 1\nb c 2\n", network.to_edge_string());
    }

    #[test]
    fn test_export_round_trip() {
        let network = build_test_network();
        let parsed =
            WTNetwork::try_from_parts(&network.to_node_string(), &network.to_edge_string())
                .unwrap();
        assert_eq!(network, parsed);
    }

    #[test]
    fn test_display() {
        let network = build_test_network();
        let listing = network.to_string();
        assert!(listing.starts_with("# 3 nodes, 3 edges, split rule"));
        assert!(listing.contains("b 0.5"));
        assert!(listing.contains("c a -1"));
    }
}
