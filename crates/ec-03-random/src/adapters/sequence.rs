//! # Scripted Random Source

use shared_types::{Address, U256};

use crate::domain::entities::DrawEntropy;
use crate::domain::errors::RandomError;
use crate::ports::outbound::RandomSource;

/// Returns scripted values in order, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    owner: Address,
    values: Vec<U256>,
    cursor: usize,
}

impl SequenceRandom {
    /// Creates a source owned by `owner` that yields `values` in a loop.
    pub fn new(owner: Address, values: impl IntoIterator<Item = u64>) -> Self {
        Self {
            owner,
            values: values.into_iter().map(U256::from).collect(),
            cursor: 0,
        }
    }

    /// Number of draws served so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRandom {
    fn draw(&mut self, caller: Address, _entropy: &DrawEntropy) -> Result<U256, RandomError> {
        if caller != self.owner {
            return Err(RandomError::Unauthorized(caller));
        }
        if self.values.is_empty() {
            return Err(RandomError::Exhausted);
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        Ok(value)
    }

    fn owner(&self) -> Address {
        self.owner
    }

    fn transfer_ownership(&mut self, caller: Address, new_owner: Address) -> Result<(), RandomError> {
        if caller != self.owner {
            return Err(RandomError::Unauthorized(caller));
        }
        self.owner = new_owner;
        Ok(())
    }
}
