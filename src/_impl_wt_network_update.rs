use crate::state_space::State;
use crate::{NodeId, WTNetwork};

/// The synchronous update semantics of a `WTNetwork`.
///
/// All update methods are pure: they never modify the given state and always return
/// a freshly allocated successor. The same network and state therefore always produce
/// the same result.
impl WTNetwork {
    /// Check that the given `state` belongs to the state space of this network.
    pub fn check_state(&self, state: &State) -> Result<(), String> {
        if state.len() == self.nodes.len() {
            Ok(())
        } else {
            Err(format!(
                "State has {} values, but the network has {} nodes.",
                state.len(),
                self.nodes.len()
            ))
        }
    }

    /// Compute the successor of `state` under synchronous update: every node `i`
    /// moves to `rule(W[i]·x - T[i], x[i])` simultaneously.
    ///
    /// Returns `Err` when the state does not belong to this network's state space.
    pub fn update(&self, state: &State) -> Result<State, String> {
        self.check_state(state)?;
        Ok(self.step(state))
    }

    /// Update only the given `node`, carrying all other values over unchanged.
    pub fn update_node(&self, state: &State, node: NodeId) -> Result<State, String> {
        self.check_state(state)?;
        self.check_node(node)?;
        let mut next = state.clone();
        let value = self
            .rule
            .apply(self.excitation(node, state), state.get(node.0));
        next.set(node.0, value);
        Ok(next)
    }

    /// The general form of a synchronous step: nodes listed in `pin` keep their
    /// pre-update value, and nodes listed in `fix` are overwritten with the given
    /// value after the step.
    ///
    /// Returns `Err` when a node id is invalid or when a node is both pinned
    /// and fixed (the two requests would contradict each other).
    pub fn update_with(
        &self,
        state: &State,
        pin: &[NodeId],
        fix: &[(NodeId, bool)],
    ) -> Result<State, String> {
        self.check_state(state)?;
        for node in pin {
            self.check_node(*node)?;
        }
        for (node, _) in fix {
            self.check_node(*node)?;
            if pin.contains(node) {
                return Err(format!(
                    "Node {} cannot be both pinned and fixed.",
                    self.get_node_name(*node)
                ));
            }
        }
        let mut next = self.step(state);
        for node in pin {
            next.set(node.0, state.get(node.0));
        }
        for (node, value) in fix {
            next.set(node.0, *value);
        }
        Ok(next)
    }

    /// **(internal)** The raw synchronous step. Assumes `state` has the correct
    /// length.
    pub(crate) fn step(&self, state: &State) -> State {
        let mut next = State::empty(self.nodes.len());
        for target in self.nodes() {
            let value = self
                .rule
                .apply(self.excitation(target, state), state.get(target.0));
            if value {
                next.set(target.0, true);
            }
        }
        next
    }

    /// **(internal)** The threshold-shifted weighted input of `target` in `state`,
    /// i.e. `W[target]·state - T[target]`.
    fn excitation(&self, target: NodeId, state: &State) -> f64 {
        let n = self.nodes.len();
        let row = &self.weights[target.0 * n..(target.0 + 1) * n];
        let mut sum = 0.0;
        for (source, weight) in row.iter().enumerate() {
            if state.get(source) {
                sum += weight;
            }
        }
        sum - self.nodes[target.0].threshold
    }

    /// **(internal)** Check that a node id is valid in this network.
    fn check_node(&self, node: NodeId) -> Result<(), String> {
        if node.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(format!("Unknown node id: {}.", node))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::state_space::State;
    use crate::{NodeId, ThresholdRule, WTNetwork};

    /// **(test)** A two-node mutual activation: `a -> b` and `b -> a`.
    fn build_two_node_loop() -> WTNetwork {
        let mut network = WTNetwork::new(vec!["a".to_string(), "b".to_string()]);
        network.set_weight("a", "b", 1.0).unwrap();
        network.set_weight("b", "a", 1.0).unwrap();
        network
    }

    #[test]
    fn test_update_basic() {
        let network = build_two_node_loop();
        let state = State::try_from_digits(&[1, 0]).unwrap();
        let next = network.update(&state).unwrap();
        assert_eq!(vec![true, true], next.values());
        // The original state is untouched and the result is reproducible.
        assert_eq!(vec![true, false], state.values());
        assert_eq!(next, network.update(&state).unwrap());

        // Both all-zero and all-one states are fixed under the `Split` rule.
        let zero = State::empty(2);
        assert_eq!(zero, network.update(&zero).unwrap());
        let one = State::try_from_digits(&[1, 1]).unwrap();
        assert_eq!(one, network.update(&one).unwrap());
    }

    #[test]
    fn test_update_rules_differ_only_at_boundary() {
        // A single node with no inputs sits exactly at its (zero) threshold.
        let mut network = WTNetwork::new(vec!["a".to_string()]);
        let zero = State::empty(1);
        let one = State::try_from_digits(&[1]).unwrap();

        assert_eq!(zero, network.update(&zero).unwrap());
        assert_eq!(one, network.update(&one).unwrap());
        network.set_rule(ThresholdRule::Negative);
        assert_eq!(zero, network.update(&zero).unwrap());
        assert_eq!(zero, network.update(&one).unwrap());
        network.set_rule(ThresholdRule::Positive);
        assert_eq!(one, network.update(&zero).unwrap());
        assert_eq!(one, network.update(&one).unwrap());

        // Away from the boundary, the rule does not matter.
        let mut biased = WTNetwork::new(vec!["a".to_string()]);
        biased.set_threshold("a", -1.0).unwrap();
        for rule in [
            ThresholdRule::Split,
            ThresholdRule::Negative,
            ThresholdRule::Positive,
        ] {
            biased.set_rule(rule);
            assert_eq!(one, biased.update(&zero).unwrap());
        }
    }

    #[test]
    fn test_update_rejects_invalid_states() {
        let network = build_two_node_loop();
        assert!(network.update(&State::empty(3)).is_err());
        assert!(network.update(&State::empty(1)).is_err());
        assert!(network
            .update_node(&State::empty(3), NodeId::from(0))
            .is_err());
        assert!(network
            .update_node(&State::empty(2), NodeId::from(2))
            .is_err());
    }

    #[test]
    fn test_update_node() {
        let network = build_two_node_loop();
        let state = State::try_from_digits(&[1, 0]).unwrap();
        // Only `b` is recomputed; `a` keeps its value.
        let next = network.update_node(&state, NodeId::from(1)).unwrap();
        assert_eq!(vec![true, true], next.values());
        // Updating `a` alone leaves the state unchanged (its only input is off,
        // and the `Split` rule keeps the current value at the boundary).
        let next = network.update_node(&state, NodeId::from(0)).unwrap();
        assert_eq!(vec![true, false], next.values());
    }

    #[test]
    fn test_update_with_pin_and_fix() {
        let network = build_two_node_loop();
        let a = NodeId::from(0);
        let b = NodeId::from(1);
        let state = State::try_from_digits(&[1, 0]).unwrap();

        // Pinning `b` suppresses its activation.
        let next = network.update_with(&state, &[b], &[]).unwrap();
        assert_eq!(vec![true, false], next.values());
        // Fixing overwrites the computed value after the step.
        let next = network.update_with(&state, &[], &[(a, false)]).unwrap();
        assert_eq!(vec![false, true], next.values());
        // Pin and fix together, on different nodes.
        let next = network
            .update_with(&state, &[b], &[(a, false)])
            .unwrap();
        assert_eq!(vec![false, false], next.values());

        // A node cannot be pinned and fixed at once.
        assert!(network.update_with(&state, &[a], &[(a, true)]).is_err());
        // Invalid ids are rejected.
        assert!(network
            .update_with(&state, &[NodeId::from(7)], &[])
            .is_err());
        assert!(network
            .update_with(&state, &[], &[(NodeId::from(7), true)])
            .is_err());
    }
}
