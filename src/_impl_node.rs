use crate::Node;
use std::fmt::{Display, Error, Formatter};

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.name)
    }
}

impl Node {
    /// Human-readable name of this node.
    pub fn get_name(&self) -> &String {
        &self.name
    }

    /// The activation threshold of this node.
    pub fn get_threshold(&self) -> f64 {
        self.threshold
    }
}
