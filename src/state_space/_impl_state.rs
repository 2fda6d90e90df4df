use crate::state_space::State;
use std::hash::{Hash, Hasher};

/* Not sure why bitvector::BitVector does not implement Eq, but we want to. */
impl Eq for State {}

/* The backing bitvector also does not implement Hash; hashing the set positions is
consistent with the derived PartialEq. */
impl Hash for State {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for i in self.values.iter() {
            i.hash(state);
        }
    }
}

impl State {
    /// Create a new `State` of the given length with all values set to `false`.
    pub fn empty(len: usize) -> State {
        State {
            len,
            values: bitvector::BitVector::new(len),
        }
    }

    /// Parse a `State` from a sequence of `0`/`1` digits (node `0` first).
    ///
    /// Returns `Err` when the sequence contains anything else, since such data does
    /// not describe a Boolean state.
    pub fn try_from_digits(digits: &[u8]) -> Result<State, String> {
        let mut state = State::empty(digits.len());
        for (i, digit) in digits.iter().enumerate() {
            match digit {
                0 => (),
                1 => state.set(i, true),
                _ => {
                    return Err(format!(
                        "Invalid node value `{}` at position {}.",
                        digit, i
                    ))
                }
            }
        }
        Ok(state)
    }

    /// **(internal)** Check if the given index is valid in this `State` - panic
    /// otherwise. Only enabled when `shields_up` is set.
    fn check_access(&self, index: usize) {
        if cfg!(shields_up) && index >= self.len {
            panic!(
                "Accessing node {} in a State of length {}.",
                index, self.len
            );
        }
    }

    /// The number of nodes this `State` describes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the Boolean value at the given `index`.
    pub fn get(&self, index: usize) -> bool {
        self.check_access(index);
        self.values.contains(index)
    }

    /// Set the Boolean `value` at the given `index`.
    pub fn set(&mut self, index: usize, value: bool) {
        self.check_access(index);
        if value {
            self.values.insert(index);
        } else {
            self.values.remove(index);
        }
    }

    /// Invert the value at the given `index`.
    pub fn flip(&mut self, index: usize) {
        self.check_access(index);
        if self.values.contains(index) {
            self.values.remove(index);
        } else {
            self.values.insert(index);
        }
    }

    /// Return a vector of the values in this `State`.
    pub fn values(&self) -> Vec<bool> {
        (0..self.len).map(|i| self.get(i)).collect()
    }

    /// A sorted vector of the indices of this `State` which are `true`.
    pub fn ones(&self) -> Vec<usize> {
        let mut ones: Vec<usize> = self.values.iter().collect();
        ones.sort_unstable();
        ones
    }

    /// A sorted vector of the indices of this `State` which are `false`.
    pub fn zeros(&self) -> Vec<usize> {
        (0..self.len).filter(|i| !self.get(*i)).collect()
    }
}

impl From<Vec<bool>> for State {
    fn from(data: Vec<bool>) -> Self {
        let mut state = State::empty(data.len());
        for (i, value) in data.into_iter().enumerate() {
            if value {
                state.set(i, true);
            }
        }
        state
    }
}
