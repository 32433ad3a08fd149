//! # Referral Rewarder
//!
//! Owner-only batch payouts of referral rewards from a funded token pool.

use ec_01_token::{SharedToken, TokenApi};
use shared_types::{Address, U256};
use tracing::{info, warn};

use crate::errors::ReferralError;

/// Largest batch accepted by one `reward` call.
pub const MAX_BATCH: usize = 100;

/// Owner-operated referral payout.
pub struct ReferralRewarder {
    address: Address,
    owner: Address,
    token: SharedToken,
}

impl ReferralRewarder {
    /// Creates a rewarder at `address` paying from its balance in `token`.
    pub fn new(owner: Address, address: Address, token: SharedToken) -> Self {
        Self {
            address,
            owner,
            token,
        }
    }

    /// Address holding the reward pool.
    #[must_use]
    pub fn address(&self) -> Address {
        self.address
    }

    /// Current owner.
    #[must_use]
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Token base units left in the pool.
    #[must_use]
    pub fn balance(&self) -> U256 {
        self.token.read().balance_of(&self.address)
    }

    /// Pays `amounts[i]` whole tokens to `receivers[i]` for `i < count`.
    ///
    /// # Errors
    /// * `ReferralError::Unauthorized` - caller is not the owner
    /// * `ReferralError::InvalidInput` - length mismatch, `count` above the
    ///   arrays or [`MAX_BATCH`], or a zero receiver
    /// * `ReferralError::InsufficientBalance` - pool cannot cover the batch
    pub fn reward(
        &mut self,
        caller: Address,
        receivers: &[Address],
        amounts: &[u64],
        count: usize,
    ) -> Result<(), ReferralError> {
        if caller != self.owner {
            warn!("[ec-05] Rejected reward batch from {}", caller);
            return Err(ReferralError::Unauthorized(caller));
        }
        if receivers.len() != amounts.len() || receivers.len() < count {
            return Err(ReferralError::InvalidInput(format!(
                "{} receivers, {} amounts, count {}",
                receivers.len(),
                amounts.len(),
                count
            )));
        }
        if count > MAX_BATCH {
            return Err(ReferralError::InvalidInput(format!(
                "batch of {count} exceeds {MAX_BATCH}"
            )));
        }
        if receivers[..count].iter().any(Address::is_zero) {
            return Err(ReferralError::InvalidInput("zero receiver".to_string()));
        }

        let mut token = self.token.write();
        let unit = token.unit();
        let payouts = amounts[..count]
            .iter()
            .map(|a| U256::from(*a).checked_mul(unit).ok_or(ReferralError::Overflow))
            .collect::<Result<Vec<U256>, _>>()?;
        let required = payouts
            .iter()
            .try_fold(U256::zero(), |acc, p| acc.checked_add(*p))
            .ok_or(ReferralError::Overflow)?;
        let available = token.balance_of(&self.address);
        if available < required {
            return Err(ReferralError::InsufficientBalance { available, required });
        }

        for (receiver, payout) in receivers.iter().zip(payouts) {
            token.transfer(self.address, *receiver, payout)?;
        }
        info!("[ec-05] Paid {} referral rewards, {} base units", count, required);
        Ok(())
    }

    /// Owner-only: hands the rewarder to `new_owner`.
    pub fn transfer_ownership(&mut self, caller: Address, new_owner: Address) -> Result<(), ReferralError> {
        if caller != self.owner {
            return Err(ReferralError::Unauthorized(caller));
        }
        info!("[ec-05] Ownership transferred {} -> {}", self.owner, new_owner);
        self.owner = new_owner;
        Ok(())
    }
}
