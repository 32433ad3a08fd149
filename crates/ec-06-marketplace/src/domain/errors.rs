//! # Marketplace Errors
//!
//! One flat taxonomy for every marketplace operation. Component errors from
//! the token, catalog, random source and ledger fold into it through `From`.

use ec_01_token::TokenError;
use ec_03_random::RandomError;
use ec_04_company_registry::RegistryError;
use shared_types::{Address, LedgerError, TypesError, U256};
use thiserror::Error;

use super::entities::NameAvailability;

/// Marketplace errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarketError {
    /// Caller is not the owner of the company or of the marketplace.
    #[error("Unauthorized caller: {0}")]
    Unauthorized(Address),

    /// Unknown company or catalog index.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The top company is already held by the marketplace.
    #[error("Company already owned: {0}")]
    AlreadyOwned(String),

    /// The company is already listed.
    #[error("Company already on sale: {0}")]
    AlreadyOnsale(String),

    /// The company is already held permanently.
    #[error("Company already permanently owned: {0}")]
    AlreadyPermanent(String),

    /// The company is not listed.
    #[error("Company not for sale: {0}")]
    NotForSale(String),

    /// The catalog has not released this auction index yet.
    #[error("Top company not released yet: {0}")]
    NotReadyForSale(String),

    /// A top company can never be listed again.
    #[error("Top company cannot be resold: {0}")]
    TopCompanyNotResellable(String),

    /// Operation not allowed on this kind of company.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Attached value below the asking price.
    #[error("Insufficient payment: required {required}, provided {provided}")]
    InsufficientPayment {
        /// Asking price.
        required: U256,
        /// Attached value.
        provided: U256,
    },

    /// Caller cannot fund the operation.
    #[error("Insufficient balance for {account}: available {available}, required {required}")]
    InsufficientBalance {
        /// Account charged.
        account: Address,
        /// Current balance.
        available: U256,
        /// Amount required.
        required: U256,
    },

    /// Token allowance too low.
    #[error("Insufficient allowance for {holder}")]
    InsufficientAllowance {
        /// Account charged.
        holder: Address,
    },

    /// Marketplace reserve cannot cover a payout.
    #[error("Insufficient contract balance: available {available}, required {required}")]
    InsufficientContractBalance {
        /// Reserve.
        available: U256,
        /// Payout.
        required: U256,
    },

    /// Owner tried to buy their own company.
    #[error("Cannot purchase own company: {0}")]
    SelfPurchase(String),

    /// Name collides with a catalog or marketplace entry.
    #[error("Name taken: {name} ({availability:?})")]
    NameTaken {
        /// Requested name.
        name: String,
        /// Where it collides.
        availability: NameAvailability,
    },

    /// Malformed argument.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Claim with no owned performance.
    #[error("No eligible performance for {0}")]
    NoEligiblePerformance(Address),

    /// Super-privilege claim with no credits left.
    #[error("No super privilege left for {0}")]
    NoSuperPrivilege(Address),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow")]
    Overflow,
}

impl MarketError {
    /// Short label used as the `error_kind` metric dimension.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "unauthorized",
            Self::NotFound(_) => "not_found",
            Self::AlreadyOwned(_) => "already_owned",
            Self::AlreadyOnsale(_) => "already_onsale",
            Self::AlreadyPermanent(_) => "already_permanent",
            Self::NotForSale(_) => "not_for_sale",
            Self::NotReadyForSale(_) => "not_ready_for_sale",
            Self::TopCompanyNotResellable(_) => "top_company_not_resellable",
            Self::Forbidden(_) => "forbidden",
            Self::InsufficientPayment { .. } => "insufficient_payment",
            Self::InsufficientBalance { .. } => "insufficient_balance",
            Self::InsufficientAllowance { .. } => "insufficient_allowance",
            Self::InsufficientContractBalance { .. } => "insufficient_contract_balance",
            Self::SelfPurchase(_) => "self_purchase",
            Self::NameTaken { .. } => "name_taken",
            Self::InvalidInput(_) => "invalid_input",
            Self::NoEligiblePerformance(_) => "no_eligible_performance",
            Self::NoSuperPrivilege(_) => "no_super_privilege",
            Self::Overflow => "overflow",
        }
    }
}

impl From<TokenError> for MarketError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::InsufficientBalance {
                account,
                available,
                required,
            } => Self::InsufficientBalance {
                account,
                available,
                required,
            },
            TokenError::InsufficientAllowance { holder, .. } => Self::InsufficientAllowance { holder },
            TokenError::Unauthorized(caller) => Self::Unauthorized(caller),
            TokenError::ZeroAddress => Self::InvalidInput("zero address".to_string()),
            TokenError::Overflow => Self::Overflow,
        }
    }
}

impl From<LedgerError> for MarketError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InsufficientBalance {
                account,
                available,
                required,
            } => Self::InsufficientBalance {
                account,
                available,
                required,
            },
            LedgerError::Overflow(_) => Self::Overflow,
        }
    }
}

impl From<RegistryError> for MarketError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::Unauthorized(caller) => Self::Unauthorized(caller),
            RegistryError::NotFound => Self::NotFound("top company".to_string()),
            RegistryError::InvalidInput(reason) => Self::InvalidInput(reason),
        }
    }
}

impl From<RandomError> for MarketError {
    fn from(err: RandomError) -> Self {
        match err {
            RandomError::Unauthorized(caller) => Self::Unauthorized(caller),
            RandomError::Exhausted => Self::InvalidInput("random source exhausted".to_string()),
        }
    }
}

impl From<TypesError> for MarketError {
    fn from(err: TypesError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
