//! # Inbound Ports
//!
//! [`MarketplaceApi`] carries the player-facing operations,
//! [`MarketplaceAdminApi`] the owner-gated ones. Every state-changing call is
//! all-or-nothing: on `Err` no balance, record or counter has moved.

use ec_04_company_registry::{TopCompany, TopCompanyCatalog};
use shared_types::{Address, BlockNumber, CallContext, CompanyName, LogoUrl, NameKey, U256};

use crate::domain::entities::{Company, LuckyDrawOutcome, NameAvailability};
use crate::domain::errors::MarketError;

/// Player-facing marketplace operations.
pub trait MarketplaceApi: Send + Sync {
    /// Buys a released top company at the start price.
    ///
    /// # Errors
    /// * `NotFound` - not in the catalog
    /// * `NotReadyForSale` - auction index not released at `ctx.block_number`
    /// * `AlreadyOwned` - already bought
    /// * `InsufficientPayment` - `ctx.value` below the start price
    /// * `NoSuperPrivilege` - claiming without credits
    /// * `InsufficientBalance` - caller cannot fund `ctx.value`
    fn purchase_top_company(
        &self,
        ctx: &CallContext,
        name: &CompanyName,
        claim_super_privilege: bool,
    ) -> Result<(), MarketError>;

    /// Buys a listed company from its owner.
    ///
    /// # Errors
    /// * `NotFound`, `NotForSale`, `SelfPurchase`, `InsufficientPayment`,
    ///   `NoSuperPrivilege`, `InsufficientBalance`
    fn purchase_company(
        &self,
        ctx: &CallContext,
        name: &CompanyName,
        claim_super_privilege: bool,
    ) -> Result<(), MarketError>;

    /// Creates a company for tokens and lists it at `price`.
    ///
    /// # Errors
    /// * `InvalidInput` - zero price
    /// * `NameTaken` - name collides with the catalog or the marketplace
    /// * `InsufficientBalance` - caller cannot pay the creation cost
    fn create_company(
        &self,
        ctx: &CallContext,
        name: &CompanyName,
        logo_url: &LogoUrl,
        price: U256,
    ) -> Result<(), MarketError>;

    /// Lists a permanently held user-created company.
    ///
    /// # Errors
    /// * `NotFound`, `Unauthorized`, `AlreadyOnsale`,
    ///   `TopCompanyNotResellable`, `InvalidInput`
    fn put_company_onsale(&self, ctx: &CallContext, name: &CompanyName, price: U256) -> Result<(), MarketError>;

    /// Spends a super privilege to pull a user-created company off the market.
    ///
    /// # Errors
    /// * `NotFound`, `Unauthorized`, `Forbidden`, `AlreadyPermanent`,
    ///   `NoSuperPrivilege`
    fn permanently_own_my_company(&self, ctx: &CallContext, name: &CompanyName) -> Result<(), MarketError>;

    /// Replaces a company logo for the logo fee.
    ///
    /// # Errors
    /// * `NotFound`, `Unauthorized`, `InsufficientBalance`
    fn update_logo_url(&self, ctx: &CallContext, name: &CompanyName, logo_url: &LogoUrl) -> Result<(), MarketError>;

    /// Buys one lucky-draw ticket.
    ///
    /// # Errors
    /// * `InsufficientBalance` - caller cannot pay the ticket
    fn run_super_privilege_lucky_draw(&self, ctx: &CallContext) -> Result<LuckyDrawOutcome, MarketError>;

    /// Pays out accrued yield; returns the amount in token base units.
    ///
    /// # Errors
    /// * `NoEligiblePerformance` - caller owns no performance
    /// * `InsufficientContractBalance` - reserve too low
    fn claim_my_token(&self, ctx: &CallContext) -> Result<U256, MarketError>;

    /// Where, if anywhere, `name` is already taken.
    fn check_company_name_availability(&self, name: &CompanyName) -> NameAvailability;

    /// Company by name, any case.
    fn company(&self, name: &CompanyName) -> Option<Company>;

    /// Company by lookup key.
    fn company_by_key(&self, key: &NameKey) -> Option<Company>;

    /// Sum of performance over `account`'s companies.
    fn owned_performance(&self, account: &Address) -> u64;

    /// Unspent super-privilege credits of `account`.
    fn super_privilege_count(&self, account: &Address) -> u64;

    /// Block `account` last settled yield at.
    fn last_token_claimed_block(&self, account: &Address) -> BlockNumber;

    /// Yield `account` could claim at `block`.
    fn claimable_tokens(&self, account: &Address, block: BlockNumber) -> Result<U256, MarketError>;

    /// Catalog entry at an auction index.
    fn top_company_at_index(&self, index: u64) -> Result<TopCompany, MarketError>;

    /// Whole tokens the next `create_company` costs.
    fn company_creation_cost(&self) -> u64;
}

/// Owner-gated marketplace administration. Every method fails with
/// `Unauthorized` for any caller but the marketplace owner.
pub trait MarketplaceAdminApi: Send + Sync {
    /// Sets the lowest winning roll and the ticket cost in whole tokens.
    fn update_super_privilege_params(&self, caller: Address, min_roll: u64, cost: u64) -> Result<(), MarketError>;

    /// Sets blocks per day; `InvalidInput` for 0.
    fn update_blocks_per_day(&self, caller: Address, blocks_per_day: u64) -> Result<(), MarketError>;

    /// Sets the performance bound of user-created companies; `InvalidInput`
    /// for 0.
    fn update_user_created_performance(&self, caller: Address, max: u64) -> Result<(), MarketError>;

    /// Sets the logo fee in whole tokens.
    fn update_logo_fee(&self, caller: Address, fee: u64) -> Result<(), MarketError>;

    /// Replaces the top-company catalog.
    fn update_factory_contract(
        &self,
        caller: Address,
        catalog: Box<dyn TopCompanyCatalog>,
    ) -> Result<(), MarketError>;

    /// Appends catalog entries through the marketplace's catalog ownership.
    fn add_top_companies(
        &self,
        caller: Address,
        names: &[CompanyName],
        performances: &[u64],
        logo_urls: &[LogoUrl],
        count: usize,
    ) -> Result<(), MarketError>;

    /// Tombstones a catalog entry.
    fn remove_top_company(&self, caller: Address, name: &CompanyName) -> Result<(), MarketError>;

    /// Pays retained native value out; `InsufficientContractBalance` when
    /// `amount` exceeds it.
    fn withdraw(&self, caller: Address, to: Address, amount: U256) -> Result<(), MarketError>;

    /// Hands the marketplace to `new_owner`.
    fn transfer_ownership(&self, caller: Address, new_owner: Address) -> Result<(), MarketError>;
}
