//! # Token Service
//!
//! In-memory balance sheet implementing [`TokenApi`].

use parking_lot::RwLock;
use shared_types::{Address, U256};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::entities::TokenConfig;
use crate::domain::errors::TokenError;
use crate::ports::inbound::TokenApi;

/// Shared handle used by components that move tokens.
pub type SharedToken = Arc<RwLock<FungibleToken>>;

/// The ECOM token.
#[derive(Debug, Clone)]
pub struct FungibleToken {
    name: String,
    symbol: String,
    decimals: u8,
    unit: U256,
    total_supply: U256,
    owner: Address,
    balances: HashMap<Address, U256>,
    allowances: HashMap<(Address, Address), U256>,
}

impl FungibleToken {
    /// Deploys a token, crediting the whole supply to `creator`.
    pub fn deploy(creator: Address, config: &TokenConfig) -> Result<Self, TokenError> {
        let unit = config.unit()?;
        let total_supply = config.total_supply()?;
        let mut balances = HashMap::new();
        balances.insert(creator, total_supply);

        info!(
            "[ec-01] Token {} ({}) deployed: supply={} decimals={} owner={}",
            config.name, config.symbol, total_supply, config.decimals, creator
        );

        Ok(Self {
            name: config.name.clone(),
            symbol: config.symbol.clone(),
            decimals: config.decimals,
            unit,
            total_supply,
            owner: creator,
            balances,
            allowances: HashMap::new(),
        })
    }

    /// Wraps the token into a shared handle.
    #[must_use]
    pub fn shared(self) -> SharedToken {
        Arc::new(RwLock::new(self))
    }

    /// Token name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Token ticker.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Decimal places.
    #[must_use]
    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    /// Base units per whole token.
    #[must_use]
    pub fn unit(&self) -> U256 {
        self.unit
    }

    /// Current owner.
    #[must_use]
    pub fn owner(&self) -> Address {
        self.owner
    }

    fn ensure_owner(&self, caller: Address) -> Result<(), TokenError> {
        if caller != self.owner {
            warn!("[ec-01] Rejected owner-only call from {}", caller);
            return Err(TokenError::Unauthorized(caller));
        }
        Ok(())
    }

    /// Moves balance after all checks. Fails without side effects.
    fn move_balance(&mut self, from: Address, to: Address, amount: U256) -> Result<(), TokenError> {
        if to.is_zero() {
            return Err(TokenError::ZeroAddress);
        }
        let available = self.balance_of(&from);
        if available < amount {
            return Err(TokenError::InsufficientBalance {
                account: from,
                available,
                required: amount,
            });
        }
        if from == to {
            return Ok(());
        }
        let credited = self
            .balance_of(&to)
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        self.balances.insert(from, available - amount);
        self.balances.insert(to, credited);
        Ok(())
    }
}

impl TokenApi for FungibleToken {
    fn total_supply(&self) -> U256 {
        self.total_supply
    }

    fn balance_of(&self, account: &Address) -> U256 {
        self.balances.get(account).copied().unwrap_or_default()
    }

    fn allowance(&self, holder: &Address, spender: &Address) -> U256 {
        self.allowances
            .get(&(*holder, *spender))
            .copied()
            .unwrap_or_default()
    }

    fn transfer(&mut self, caller: Address, to: Address, amount: U256) -> Result<(), TokenError> {
        self.move_balance(caller, to, amount)?;
        debug!("[ec-01] transfer {} -> {}: {}", caller, to, amount);
        Ok(())
    }

    fn approve(&mut self, caller: Address, spender: Address, amount: U256) -> Result<(), TokenError> {
        self.allowances.insert((caller, spender), amount);
        debug!("[ec-01] approve {} -> {}: {}", caller, spender, amount);
        Ok(())
    }

    fn transfer_from(
        &mut self,
        caller: Address,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        let available = self.balance_of(&from);
        if available < amount {
            return Err(TokenError::InsufficientBalance {
                account: from,
                available,
                required: amount,
            });
        }
        let allowed = self.allowance(&from, &caller);
        if allowed < amount {
            return Err(TokenError::InsufficientAllowance {
                holder: from,
                spender: caller,
                allowed,
                required: amount,
            });
        }
        self.move_balance(from, to, amount)?;
        self.allowances.insert((from, caller), allowed - amount);
        debug!(
            "[ec-01] transfer_from {} -> {} by {}: {}",
            from, to, caller, amount
        );
        Ok(())
    }

    fn owner_approve(&mut self, caller: Address, holder: Address, amount: U256) -> Result<(), TokenError> {
        self.ensure_owner(caller)?;
        self.allowances.insert((holder, self.owner), amount);
        debug!("[ec-01] owner_approve {} -> owner: {}", holder, amount);
        Ok(())
    }

    fn transfer_ownership(&mut self, caller: Address, new_owner: Address) -> Result<(), TokenError> {
        self.ensure_owner(caller)?;
        if new_owner.is_zero() {
            return Err(TokenError::ZeroAddress);
        }
        info!("[ec-01] Ownership transferred {} -> {}", self.owner, new_owner);
        self.owner = new_owner;
        Ok(())
    }
}
