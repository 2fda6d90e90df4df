//! Explicit Boolean states of a network and the space of all such states.
//!
//! A `State` is a fixed-length sequence of Boolean values, one per network node. Since
//! states are created and discarded in large numbers during dynamics computations, they
//! are backed by a compact bitvector rather than a `Vec<bool>`.
//!
//! ```rust
//! use biodivine_lib_wt_bn::state_space::{State, StateSpace};
//! let mut state = State::empty(4);
//! state.set(1, true);
//! state.flip(2);
//! assert_eq!(vec![1, 2], state.ones());
//! assert_eq!("0110", state.to_string());
//!
//! // The space of a 4-node network has 16 states, enumerated in binary-counting
//! // order where node 0 is the least significant bit.
//! let space = StateSpace::new(4);
//! assert_eq!(16, space.states().count());
//! assert_eq!(0, space.encode(&State::empty(4)).unwrap());
//! ```

use std::fmt::{Debug, Display, Formatter};

mod _impl_state;
mod _impl_state_space;

/// A fixed-length sequence of Boolean node values.
///
/// The length of a state always equals the number of nodes of the network it belongs
/// to, and it never changes once the state is created. States are cheap to clone and
/// are treated as transient values owned by the caller.
#[derive(Clone, PartialEq)]
pub struct State {
    len: usize,
    values: bitvector::BitVector,
}

/// The set of all `2^n` states of an `n`-node network.
///
/// The space itself is only described by the node count; its members are enumerated
/// lazily by `states` and never materialized. The canonical enumeration order is
/// binary counting with node `0` as the least significant bit, i.e. the value of node
/// `i` in the `k`-th enumerated state is bit `i` of `k`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct StateSpace {
    nodes: usize,
}

/// A lazy iterator over all states of a `StateSpace` in canonical order.
///
/// The iterator is restartable simply by requesting a fresh one from the space. It
/// performs binary increments directly on the state, so it is not limited by the
/// machine word size.
#[derive(Clone)]
pub struct StateSpaceIterator {
    next: Option<State>,
}

impl Display for State {
    /// A state is displayed as a string of `0`/`1` digits, node `0` first.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        for i in 0..self.len {
            write!(f, "{}", if self.get(i) { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl Debug for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "State({})[", self.len)?;
        let mut first = true;
        for i in self.ones() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", i)?;
            first = false;
        }
        write!(f, "]")
    }
}
