use crate::state_space::{State, StateSpace, StateSpaceIterator};
use num_bigint::BigInt;
use num_traits::One;

impl StateSpace {
    /// Create the state space of an `n`-node network.
    pub fn new(nodes: usize) -> StateSpace {
        StateSpace { nodes }
    }

    /// The number of nodes whose states this space describes.
    pub fn num_nodes(&self) -> usize {
        self.nodes
    }

    /// The number of states in this space, i.e. `2^n`.
    ///
    /// The count is reported with infinite precision, since it overflows machine
    /// words already for moderately sized networks.
    pub fn state_count(&self) -> BigInt {
        BigInt::one() << self.nodes
    }

    /// True if the given `state` is a member of this space.
    pub fn contains(&self, state: &State) -> bool {
        state.len() == self.nodes
    }

    /// A fresh iterator over all states of this space in canonical order.
    pub fn states(&self) -> StateSpaceIterator {
        StateSpaceIterator {
            next: Some(State::empty(self.nodes)),
        }
    }

    /// The canonical index of the given `state`, i.e. its position in the enumeration
    /// order of this space.
    ///
    /// Returns `Err` when the state is not a member of this space, or when the space
    /// is too large for its indices to fit into a machine word.
    pub fn encode(&self, state: &State) -> Result<usize, String> {
        if !self.contains(state) {
            return Err(format!(
                "State has {} values, but the space describes {} nodes.",
                state.len(),
                self.nodes
            ));
        }
        if self.nodes >= usize::BITS as usize {
            return Err(format!(
                "A space of {} nodes cannot be indexed with machine words.",
                self.nodes
            ));
        }
        let mut index = 0usize;
        for i in state.ones() {
            index |= 1 << i;
        }
        Ok(index)
    }

    /// The state at the given canonical `index` of the enumeration order.
    ///
    /// Returns `Err` when the index falls outside of this space, or when the space is
    /// too large for its indices to fit into a machine word.
    pub fn decode(&self, index: usize) -> Result<State, String> {
        if self.nodes >= usize::BITS as usize {
            return Err(format!(
                "A space of {} nodes cannot be indexed with machine words.",
                self.nodes
            ));
        }
        if index >= (1usize << self.nodes) {
            return Err(format!(
                "Index {} is out of range for a space of {} nodes.",
                index, self.nodes
            ));
        }
        let mut state = State::empty(self.nodes);
        for i in 0..self.nodes {
            if (index >> i) & 1 == 1 {
                state.set(i, true);
            }
        }
        Ok(state)
    }
}

impl IntoIterator for &StateSpace {
    type Item = State;
    type IntoIter = StateSpaceIterator;

    fn into_iter(self) -> Self::IntoIter {
        self.states()
    }
}

impl StateSpaceIterator {
    /// **(internal)** The successor of `state` in binary-counting order, or `None`
    /// when `state` is the all-ones state and the enumeration wraps around.
    fn successor(state: &State) -> Option<State> {
        let mut next = state.clone();
        for i in 0..next.len() {
            if next.get(i) {
                next.set(i, false);
            } else {
                next.set(i, true);
                return Some(next);
            }
        }
        None
    }
}

impl Iterator for StateSpaceIterator {
    type Item = State;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = StateSpaceIterator::successor(&current);
        Some(current)
    }
}
