use crate::state_space::State;
use crate::WTNetwork;
use fxhash::FxHashMap;

/// Exhaustive algorithms on the synchronous dynamics of a `WTNetwork`.
///
/// Since the update is deterministic, every trajectory eventually enters a cycle;
/// fixed points are cycles of length one. The algorithms here enumerate states
/// explicitly and therefore cannot really scale to large networks - use them with
/// caution beyond a few dozen nodes.
impl WTNetwork {
    /// The sequence of `steps + 1` states visited from `start` (the start state
    /// included) under synchronous update.
    pub fn trajectory(&self, start: &State, steps: usize) -> Result<Vec<State>, String> {
        self.check_state(start)?;
        let mut result = Vec::with_capacity(steps + 1);
        let mut current = start.clone();
        for _ in 0..steps {
            let next = self.step(&current);
            result.push(current);
            current = next;
        }
        result.push(current);
        Ok(result)
    }

    /// The limit cycle eventually reached from `start`, as a vector of states in
    /// visit order starting at the first state of the cycle that the trajectory
    /// entered. A fixed point is returned as a single-element vector.
    pub fn attractor(&self, start: &State) -> Result<Vec<State>, String> {
        self.check_state(start)?;
        let mut first_seen: FxHashMap<State, usize> = FxHashMap::default();
        let mut visited: Vec<State> = Vec::new();
        let mut current = start.clone();
        loop {
            if let Some(cycle_start) = first_seen.get(&current) {
                return Ok(visited[*cycle_start..].to_vec());
            }
            first_seen.insert(current.clone(), visited.len());
            let next = self.step(&current);
            visited.push(current);
            current = next;
        }
    }

    /// All fixed points of the synchronous dynamics, in canonical state space order.
    ///
    /// This scans all `2^n` states of the network.
    pub fn fixed_points(&self) -> Vec<State> {
        self.state_space()
            .states()
            .filter(|state| &self.step(state) == state)
            .collect()
    }
}
