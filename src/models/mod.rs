//! Fixed, curated example networks that ship with the library.
//!
//! Both models are classic cell cycle networks from the systems biology literature
//! and use the default `Split` rule. They are bundled as node/edge files in the
//! `data` directory of the repository and parsed on first use; the construction is
//! infallible from the caller's perspective.

use crate::WTNetwork;

const S_POMBE_NODES: &str = include_str!("../../data/s_pombe-nodes.txt");
const S_POMBE_EDGES: &str = include_str!("../../data/s_pombe-edges.txt");
const S_CEREVISIAE_NODES: &str = include_str!("../../data/s_cerevisiae-nodes.txt");
const S_CEREVISIAE_EDGES: &str = include_str!("../../data/s_cerevisiae-edges.txt");

/// The cell cycle network of the fission yeast *Schizosaccharomyces pombe*,
/// as published by Davidich and Bornholdt (2008).
///
/// Nine nodes; the biological G1 state (`Ste9`, `Rum1` and `Wee1_Mik1` active)
/// is the dominant fixed point of the synchronous dynamics.
pub fn s_pombe() -> WTNetwork {
    build_bundled(S_POMBE_NODES, S_POMBE_EDGES)
}

/// The cell cycle network of the budding yeast *Saccharomyces cerevisiae*,
/// as published by Li et al. (2004).
///
/// Eleven nodes; the biological G1 state (`Cdh1` and `Sic1` active) attracts
/// the vast majority of the state space.
pub fn s_cerevisiae() -> WTNetwork {
    build_bundled(S_CEREVISIAE_NODES, S_CEREVISIAE_EDGES)
}

/// **(internal)** Parse a bundled model. The data is part of the library, so a
/// parse failure is a programmer error, not a recoverable condition.
fn build_bundled(nodes: &str, edges: &str) -> WTNetwork {
    match WTNetwork::try_from_parts(nodes, edges) {
        Ok(network) => network,
        Err(error) => panic!("Corrupted bundled model: {}", error),
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{s_cerevisiae, s_pombe};
    use crate::state_space::State;
    use pretty_assertions::assert_eq;

    #[test]
    fn s_pombe_structure() {
        let network = s_pombe();
        assert_eq!(9, network.num_nodes());
        assert_eq!(
            vec![
                "SK",
                "Cdc2_Cdc13",
                "Ste9",
                "Rum1",
                "Slp1",
                "Cdc2_Cdc13_active",
                "Wee1_Mik1",
                "Cdc25",
                "PP"
            ],
            network.node_names()
        );
        let cdc2 = network.find_node("Cdc2_Cdc13").unwrap();
        let active = network.find_node("Cdc2_Cdc13_active").unwrap();
        assert_eq!(-0.5, network.get_threshold(cdc2));
        assert_eq!(0.5, network.get_threshold(active));
        assert_eq!(25, network.edges().len());
    }

    #[test]
    fn s_pombe_update_sequence() {
        // A `Slp1` pulse sends the network through `PP` activation into the
        // G2/M exit program.
        let network = s_pombe();
        let start = State::try_from_digits(&[0, 0, 0, 0, 1, 0, 0, 0, 0]).unwrap();
        let trajectory = network.trajectory(&start, 2).unwrap();
        assert_eq!(
            State::try_from_digits(&[0, 0, 0, 0, 0, 0, 0, 0, 1]).unwrap(),
            trajectory[1]
        );
        assert_eq!(
            State::try_from_digits(&[0, 1, 1, 1, 0, 0, 1, 0, 0]).unwrap(),
            trajectory[2]
        );
    }

    #[test]
    fn s_pombe_pinning_and_fixing() {
        let network = s_pombe();
        let pp = network.find_node("PP").unwrap();
        let cdc2 = network.find_node("Cdc2_Cdc13").unwrap();
        let sk = network.find_node("SK").unwrap();
        let ste9 = network.find_node("Ste9").unwrap();

        // Pinning `PP` suppresses the only activation of the basic sequence.
        let start = State::try_from_digits(&[0, 0, 0, 0, 1, 0, 0, 0, 0]).unwrap();
        let next = network.update_with(&start, &[pp], &[]).unwrap();
        assert_eq!(State::empty(9), next);

        // Pinning `Cdc2_Cdc13` in the second step of the sequence.
        let second = State::try_from_digits(&[0, 0, 0, 0, 0, 0, 0, 0, 1]).unwrap();
        let next = network.update_with(&second, &[cdc2], &[]).unwrap();
        assert_eq!(
            State::try_from_digits(&[0, 0, 1, 1, 0, 0, 1, 0, 0]).unwrap(),
            next
        );

        // Fixing values overwrites the computed result.
        let next = network
            .update_with(&start, &[], &[(sk, true), (ste9, true)])
            .unwrap();
        assert_eq!(
            State::try_from_digits(&[1, 0, 1, 0, 0, 0, 0, 0, 1]).unwrap(),
            next
        );
    }

    #[test]
    fn s_pombe_g1_is_dominant_fixed_point() {
        let network = s_pombe();
        let g1 = State::try_from_digits(&[0, 0, 1, 1, 0, 0, 1, 0, 0]).unwrap();
        assert_eq!(g1, network.update(&g1).unwrap());

        let fixed = network.fixed_points();
        assert_eq!(12, fixed.len());
        assert!(fixed.contains(&g1));

        // The `Slp1` pulse above recovers back into G1.
        let start = State::try_from_digits(&[0, 0, 0, 0, 1, 0, 0, 0, 0]).unwrap();
        assert_eq!(vec![g1], network.attractor(&start).unwrap());
    }

    #[test]
    fn s_pombe_has_a_limit_cycle() {
        // Besides the 12 fixed points, the model has a single length-3 cycle.
        let network = s_pombe();
        let inside = State::try_from_digits(&[0, 0, 0, 0, 0, 0, 0, 1, 1]).unwrap();
        let cycle = network.attractor(&inside).unwrap();
        assert_eq!(3, cycle.len());
        assert_eq!(inside, cycle[0]);
        // The cycle closes: one more update of the last state returns to the first.
        assert_eq!(inside, network.update(&cycle[2]).unwrap());
    }

    #[test]
    fn s_cerevisiae_structure() {
        let network = s_cerevisiae();
        assert_eq!(11, network.num_nodes());
        assert_eq!(
            vec![
                "Cln3",
                "MBF",
                "SBF",
                "Cln1_2",
                "Cdh1",
                "Swi5",
                "Cdc20_Cdc14",
                "Clb5_6",
                "Sic1",
                "Clb1_2",
                "Mcm1_SFF"
            ],
            network.node_names()
        );
        assert_eq!(34, network.edges().len());
        // All thresholds of this model are zero.
        for node in network.nodes() {
            assert_eq!(0.0, network.get_threshold(node));
        }
    }

    #[test]
    fn s_cerevisiae_cell_cycle_sequence() {
        // The excited G1 state (G1 plus `Cln3`) traverses the 13-state cell cycle
        // sequence of Li et al. (2004) and ends in the stationary G1 state.
        let network = s_cerevisiae();
        let excited = State::try_from_digits(&[1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0]).unwrap();
        let g1 = State::try_from_digits(&[0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0]).unwrap();

        let trajectory = network.trajectory(&excited, 12).unwrap();
        assert_eq!(
            State::try_from_digits(&[0, 1, 1, 0, 1, 0, 0, 0, 1, 0, 0]).unwrap(),
            trajectory[1]
        );
        assert_eq!(
            State::try_from_digits(&[0, 1, 1, 1, 0, 0, 0, 1, 0, 1, 1]).unwrap(),
            trajectory[5]
        );
        assert_eq!(g1, trajectory[12]);
        assert_eq!(vec![g1], network.attractor(&excited).unwrap());
    }

    #[test]
    fn s_cerevisiae_g1_is_dominant_fixed_point() {
        let network = s_cerevisiae();
        let g1 = State::try_from_digits(&[0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0]).unwrap();
        assert_eq!(g1, network.update(&g1).unwrap());

        let fixed = network.fixed_points();
        assert_eq!(7, fixed.len());
        assert!(fixed.contains(&g1));
    }
}
