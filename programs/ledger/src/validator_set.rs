//! Ordered-insertion set of validator identities

use ledgerview_common::Address;

/// Set of validators, enumerated in insertion order
///
/// Delegators touch a handful of validators, so membership is a linear scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatorSet {
    members: Vec<Address>,
}

impl ValidatorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert, returning true if the validator was not already present
    pub fn insert(&mut self, validator: Address) -> bool {
        if self.contains(&validator) {
            return false;
        }
        self.members.push(validator);
        true
    }

    /// Remove, returning true if it was present (order of the rest is kept)
    pub fn remove(&mut self, validator: &Address) -> bool {
        match self.members.iter().position(|v| v == validator) {
            Some(idx) => {
                self.members.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, validator: &Address) -> bool {
        self.members.iter().any(|v| v == validator)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Address> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
