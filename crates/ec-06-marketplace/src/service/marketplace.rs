//! # Marketplace Core
//!
//! The company table, per-account aggregates and every operation on them.
//!
//! Each operation validates, runs the component calls that can fail, and only
//! then writes its own state. Account updates are computed on a copy and
//! committed together with the company record, so an `Err` leaves the
//! marketplace as it was.
//!
//! Lock order: callers hold the marketplace first; token and ledger locks are
//! taken inside and never held together.

use std::collections::HashMap;
use std::sync::Arc;

use ec_01_token::{SharedToken, TokenApi};
use ec_02_cost_curve::{creation_cost, next_price};
use ec_03_random::{DrawEntropy, RandomSource};
use ec_04_company_registry::{TopCompany, TopCompanyCatalog};
use ethecom_telemetry::{
    log_account_event, log_company_event, metric_inc, COMPANIES_CREATED, COMPANIES_TRANSFERRED,
    EVENTS_PUBLISHED, LUCKY_DRAWS, MARKET_COMPANY_COUNT, TOKENS_CLAIMED, TOKEN_CLAIMS,
};
use shared_bus::{EventPublisher, MarketEvent};
use shared_types::{
    Address, BlockNumber, CallContext, CompanyName, LogoUrl, NameKey, SharedLedger, U256,
};
use tracing::{debug, info, warn};

use crate::domain::config::MarketConfig;
use crate::domain::entities::{AccountState, Company, LuckyDrawOutcome, NameAvailability};
use crate::domain::errors::MarketError;
use crate::domain::settlement::Settlement;

const COMPONENT: &str = "ec-06";

/// Number of lucky-draw outcomes; rolls fall in `0..LUCKY_DRAW_RANGE`.
pub const LUCKY_DRAW_RANGE: u64 = 100;

/// Dependencies and parameters a marketplace is assembled from.
pub struct MarketplaceParts {
    /// Address the marketplace holds balances and ownerships under.
    pub address: Address,
    /// Administrator.
    pub owner: Address,
    /// Parameters.
    pub config: MarketConfig,
    /// Token the marketplace owns.
    pub token: SharedToken,
    /// Native-value ledger.
    pub ledger: SharedLedger,
    /// Top-company catalog the marketplace owns.
    pub catalog: Box<dyn TopCompanyCatalog>,
    /// Random source the marketplace owns.
    pub random: Box<dyn RandomSource>,
    /// Event sink.
    pub events: Arc<dyn EventPublisher>,
}

/// The marketplace state machine.
pub struct Marketplace {
    address: Address,
    owner: Address,
    config: MarketConfig,
    token: SharedToken,
    ledger: SharedLedger,
    catalog: Box<dyn TopCompanyCatalog>,
    random: Box<dyn RandomSource>,
    events: Arc<dyn EventPublisher>,
    companies: HashMap<NameKey, Company>,
    accounts: HashMap<Address, AccountState>,
    company_count: u64,
    draw_nonce: u64,
}

impl Marketplace {
    /// Assembles a marketplace.
    ///
    /// # Errors
    /// * `InvalidInput` - the config fails validation
    pub fn new(parts: MarketplaceParts) -> Result<Self, MarketError> {
        parts.config.validate()?;
        if parts.catalog.owner() != parts.address {
            warn!(
                "[ec-06] Catalog owned by {}, not the marketplace {}",
                parts.catalog.owner(),
                parts.address
            );
        }
        info!("[ec-06] Marketplace {} created, owner {}", parts.address, parts.owner);
        Ok(Self {
            address: parts.address,
            owner: parts.owner,
            config: parts.config,
            token: parts.token,
            ledger: parts.ledger,
            catalog: parts.catalog,
            random: parts.random,
            events: parts.events,
            companies: HashMap::new(),
            accounts: HashMap::new(),
            company_count: 0,
            draw_nonce: 0,
        })
    }

    // =========================================================================
    // PURCHASES
    // =========================================================================

    /// Buys a released top company at the start price.
    pub fn purchase_top_company(
        &mut self,
        ctx: &CallContext,
        name: &CompanyName,
        claim_super_privilege: bool,
    ) -> Result<(), MarketError> {
        let key = name.key();
        let top = self
            .catalog
            .company_by_name(&key)
            .map_err(|_| MarketError::NotFound(name.to_string()))?;
        if !self.catalog.can_buy_company(&key, ctx.block_number) {
            return Err(MarketError::NotReadyForSale(top.name.to_string()));
        }
        if self.companies.contains_key(&key) {
            return Err(MarketError::AlreadyOwned(top.name.to_string()));
        }
        let price = self.config.top_company_start_price;
        if ctx.value < price {
            return Err(MarketError::InsufficientPayment {
                required: price,
                provided: ctx.value,
            });
        }

        let mut buyer = self.account(&ctx.sender);
        if claim_super_privilege {
            consume_privilege(&mut buyer, ctx.sender)?;
        }
        self.gain_performance(&mut buyer, top.performance, ctx.block_number)?;

        self.ledger.write().transfer(ctx.sender, self.address, ctx.value)?;

        self.accounts.insert(ctx.sender, buyer);
        self.companies.insert(
            key,
            Company {
                name: top.name.clone(),
                logo_url: top.logo_url,
                owner: ctx.sender,
                price,
                last_price: price,
                performance: top.performance,
                is_onsale: !claim_super_privilege,
                is_top_company: true,
                is_permanent: claim_super_privilege,
                created_at_block: ctx.block_number,
            },
        );

        log_company_event!(
            info,
            COMPONENT,
            "top company purchased",
            top.name,
            owner = %ctx.sender,
            index = top.index,
            permanent = claim_super_privilege
        );
        metric_inc!(COMPANIES_CREATED, &["top"]);
        self.emit(
            ctx.block_number,
            MarketEvent::CompanyCreated {
                name: top.name.clone(),
                price,
                owner: ctx.sender,
            },
        );
        if claim_super_privilege {
            self.emit(
                ctx.block_number,
                MarketEvent::CompanySaleStatusChanged {
                    name: top.name,
                    sale_status: false,
                },
            );
        }
        Ok(())
    }

    /// Buys a listed company from its owner and steps its price up the curve.
    pub fn purchase_company(
        &mut self,
        ctx: &CallContext,
        name: &CompanyName,
        claim_super_privilege: bool,
    ) -> Result<(), MarketError> {
        let key = name.key();
        let company = self
            .companies
            .get(&key)
            .ok_or_else(|| MarketError::NotFound(name.to_string()))?;
        if !company.is_onsale {
            return Err(MarketError::NotForSale(company.name.to_string()));
        }
        if company.owner == ctx.sender {
            return Err(MarketError::SelfPurchase(company.name.to_string()));
        }
        if ctx.value < company.price {
            return Err(MarketError::InsufficientPayment {
                required: company.price,
                provided: ctx.value,
            });
        }
        let seller_address = company.owner;
        let performance = company.performance;
        let price = company.price;
        let settlement = Settlement::split(ctx.value, price, company.last_price);
        let new_price = next_price(price);

        let mut buyer = self.account(&ctx.sender);
        if claim_super_privilege {
            consume_privilege(&mut buyer, ctx.sender)?;
        }
        let mut seller = self.account(&seller_address);
        self.lose_performance(&mut seller, performance, ctx.block_number)?;
        self.gain_performance(&mut buyer, performance, ctx.block_number)?;

        self.settle(ctx.sender, seller_address, ctx.value, settlement.seller_payout)?;

        self.accounts.insert(seller_address, seller);
        self.accounts.insert(ctx.sender, buyer);
        let company = self
            .companies
            .get_mut(&key)
            .ok_or_else(|| MarketError::NotFound(name.to_string()))?;
        company.owner = ctx.sender;
        company.last_price = price;
        company.price = new_price;
        company.is_onsale = !claim_super_privilege;
        company.is_permanent = claim_super_privilege;
        let company_name = company.name.clone();

        log_company_event!(
            info,
            COMPONENT,
            "company transferred",
            company_name,
            old_owner = %seller_address,
            owner = %ctx.sender,
            paid = %ctx.value,
            seller_payout = %settlement.seller_payout,
            retained = %settlement.retained,
            new_price = %new_price
        );
        metric_inc!(COMPANIES_TRANSFERRED);
        self.emit(
            ctx.block_number,
            MarketEvent::CompanyTransferred {
                name: company_name.clone(),
                old_owner: seller_address,
                owner: ctx.sender,
                new_price,
            },
        );
        if claim_super_privilege {
            self.emit(
                ctx.block_number,
                MarketEvent::CompanySaleStatusChanged {
                    name: company_name,
                    sale_status: false,
                },
            );
        }
        Ok(())
    }

    // =========================================================================
    // USER-CREATED COMPANIES
    // =========================================================================

    /// Creates a company for tokens and lists it at `price`.
    pub fn create_company(
        &mut self,
        ctx: &CallContext,
        name: &CompanyName,
        logo_url: &LogoUrl,
        price: U256,
    ) -> Result<(), MarketError> {
        if price.is_zero() {
            return Err(MarketError::InvalidInput("price cannot be 0".to_string()));
        }
        let availability = self.check_company_name_availability(name);
        if !availability.is_available() {
            return Err(MarketError::NameTaken {
                name: name.to_string(),
                availability,
            });
        }
        let cost = self.whole_tokens(creation_cost(self.company_count))?;
        self.ensure_chargeable(ctx.sender, cost)?;

        let roll = self.draw(ctx.sender, ctx.block_number)?;
        let performance =
            1 + (roll % U256::from(self.config.max_user_created_performance)).low_u64();
        let mut creator = self.account(&ctx.sender);
        self.gain_performance(&mut creator, performance, ctx.block_number)?;

        self.charge_tokens(ctx.sender, cost)?;

        self.accounts.insert(ctx.sender, creator);
        self.companies.insert(
            name.key(),
            Company {
                name: name.clone(),
                logo_url: logo_url.clone(),
                owner: ctx.sender,
                price,
                last_price: U256::zero(),
                performance,
                is_onsale: true,
                is_top_company: false,
                is_permanent: false,
                created_at_block: ctx.block_number,
            },
        );
        self.company_count += 1;
        self.draw_nonce = self.draw_nonce.wrapping_add(1);

        log_company_event!(
            info,
            COMPONENT,
            "company created",
            name,
            owner = %ctx.sender,
            performance,
            cost = %cost
        );
        metric_inc!(COMPANIES_CREATED, &["user"]);
        MARKET_COMPANY_COUNT.set(self.company_count as f64);
        self.emit(
            ctx.block_number,
            MarketEvent::CompanyCreated {
                name: name.clone(),
                price,
                owner: ctx.sender,
            },
        );
        Ok(())
    }

    /// Lists a permanently held user-created company at `price`.
    pub fn put_company_onsale(
        &mut self,
        ctx: &CallContext,
        name: &CompanyName,
        price: U256,
    ) -> Result<(), MarketError> {
        let company = self.owned_company(ctx.sender, name)?;
        if company.is_onsale {
            return Err(MarketError::AlreadyOnsale(company.name.to_string()));
        }
        if company.is_top_company {
            return Err(MarketError::TopCompanyNotResellable(company.name.to_string()));
        }
        if price.is_zero() {
            return Err(MarketError::InvalidInput("price cannot be 0".to_string()));
        }
        company.is_onsale = true;
        company.is_permanent = false;
        company.price = price;
        let company_name = company.name.clone();

        log_company_event!(info, COMPONENT, "company listed", company_name, price = %price);
        self.emit(
            ctx.block_number,
            MarketEvent::CompanySaleStatusChanged {
                name: company_name,
                sale_status: true,
            },
        );
        Ok(())
    }

    /// Spends one super privilege to take a user-created company off sale.
    pub fn permanently_own_my_company(
        &mut self,
        ctx: &CallContext,
        name: &CompanyName,
    ) -> Result<(), MarketError> {
        let mut holder = self.account(&ctx.sender);
        let company = self.owned_company(ctx.sender, name)?;
        if company.is_top_company {
            return Err(MarketError::Forbidden(format!(
                "top company {} cannot be taken off sale",
                company.name
            )));
        }
        if company.is_permanent {
            return Err(MarketError::AlreadyPermanent(company.name.to_string()));
        }
        consume_privilege(&mut holder, ctx.sender)?;
        company.is_onsale = false;
        company.is_permanent = true;
        let company_name = company.name.clone();
        self.accounts.insert(ctx.sender, holder);

        log_company_event!(info, COMPONENT, "company held permanently", company_name);
        self.emit(
            ctx.block_number,
            MarketEvent::CompanySaleStatusChanged {
                name: company_name,
                sale_status: false,
            },
        );
        Ok(())
    }

    /// Replaces a company logo for the logo fee.
    pub fn update_logo_url(
        &mut self,
        ctx: &CallContext,
        name: &CompanyName,
        logo_url: &LogoUrl,
    ) -> Result<(), MarketError> {
        self.owned_company(ctx.sender, name)?;
        let fee = self.whole_tokens(self.config.logo_fee)?;
        self.charge_tokens(ctx.sender, fee)?;

        let company = self.owned_company(ctx.sender, name)?;
        company.logo_url = logo_url.clone();
        let company_name = company.name.clone();

        log_company_event!(info, COMPONENT, "logo updated", company_name, fee = %fee);
        self.emit(
            ctx.block_number,
            MarketEvent::CompanyLogoUpdated {
                name: company_name,
                logo_url: logo_url.clone(),
            },
        );
        Ok(())
    }

    // =========================================================================
    // SUPER PRIVILEGE & YIELD
    // =========================================================================

    /// Buys one lucky-draw ticket. Wins add one super privilege.
    pub fn run_super_privilege_lucky_draw(
        &mut self,
        ctx: &CallContext,
    ) -> Result<LuckyDrawOutcome, MarketError> {
        let cost = self.whole_tokens(self.config.super_privilege_cost)?;
        self.ensure_chargeable(ctx.sender, cost)?;

        let roll = (self.draw(ctx.sender, ctx.block_number)? % U256::from(LUCKY_DRAW_RANGE)).low_u64();
        let won = roll >= self.config.min_random_privilege_value;
        let mut player = self.account(&ctx.sender);
        if won {
            player.super_privilege_count = player
                .super_privilege_count
                .checked_add(1)
                .ok_or(MarketError::Overflow)?;
        }

        self.charge_tokens(ctx.sender, cost)?;

        let privilege_count = player.super_privilege_count;
        self.accounts.insert(ctx.sender, player);
        self.draw_nonce = self.draw_nonce.wrapping_add(1);

        log_account_event!(
            info,
            COMPONENT,
            "lucky draw",
            ctx.sender,
            roll,
            won,
            privilege_count
        );
        metric_inc!(LUCKY_DRAWS, &[if won { "won" } else { "lost" }]);
        self.emit(
            ctx.block_number,
            MarketEvent::SuperPrivilegeLuckyDrawResult {
                account: ctx.sender,
                roll,
                won,
                privilege_count,
            },
        );
        Ok(LuckyDrawOutcome {
            roll,
            won,
            privilege_count,
        })
    }

    /// Pays the caller's accrued yield out of the token reserve.
    ///
    /// Returns the amount paid in token base units.
    pub fn claim_my_token(&mut self, ctx: &CallContext) -> Result<U256, MarketError> {
        let mut claimer = self.account(&ctx.sender);
        if claimer.owned_performance == 0 {
            return Err(MarketError::NoEligiblePerformance(ctx.sender));
        }
        let payout = claimer.claimable(ctx.block_number, self.unit(), self.config.blocks_per_day)?;
        {
            let mut token = self.token.write();
            let available = token.balance_of(&self.address);
            if available < payout {
                return Err(MarketError::InsufficientContractBalance {
                    available,
                    required: payout,
                });
            }
            token.transfer(self.address, ctx.sender, payout)?;
        }
        claimer.accrued_yield = U256::zero();
        claimer.last_token_claimed_block = ctx.block_number;
        self.accounts.insert(ctx.sender, claimer);

        log_account_event!(info, COMPONENT, "yield claimed", ctx.sender, amount = %payout);
        metric_inc!(TOKEN_CLAIMS);
        TOKENS_CLAIMED.inc_by((payout / self.unit()).low_u64() as f64);
        self.emit(
            ctx.block_number,
            MarketEvent::TokensClaimed {
                account: ctx.sender,
                amount: payout,
            },
        );
        Ok(payout)
    }

    // =========================================================================
    // ADMINISTRATION
    // =========================================================================

    /// Sets the lowest winning roll and the ticket cost.
    pub fn update_super_privilege_params(
        &mut self,
        caller: Address,
        min_roll: u64,
        cost: u64,
    ) -> Result<(), MarketError> {
        self.ensure_owner(caller)?;
        self.config.min_random_privilege_value = min_roll;
        self.config.super_privilege_cost = cost;
        info!("[ec-06] Super privilege params: min roll {}, cost {}", min_roll, cost);
        Ok(())
    }

    /// Sets blocks per day.
    pub fn update_blocks_per_day(&mut self, caller: Address, blocks_per_day: u64) -> Result<(), MarketError> {
        self.ensure_owner(caller)?;
        if blocks_per_day == 0 {
            return Err(MarketError::InvalidInput("blocks_per_day cannot be 0".to_string()));
        }
        self.config.blocks_per_day = blocks_per_day;
        info!("[ec-06] Blocks per day: {}", blocks_per_day);
        Ok(())
    }

    /// Sets the performance bound of user-created companies.
    pub fn update_user_created_performance(&mut self, caller: Address, max: u64) -> Result<(), MarketError> {
        self.ensure_owner(caller)?;
        if max == 0 {
            return Err(MarketError::InvalidInput(
                "max_user_created_performance cannot be 0".to_string(),
            ));
        }
        self.config.max_user_created_performance = max;
        info!("[ec-06] Max user-created performance: {}", max);
        Ok(())
    }

    /// Sets the logo fee.
    pub fn update_logo_fee(&mut self, caller: Address, fee: u64) -> Result<(), MarketError> {
        self.ensure_owner(caller)?;
        self.config.logo_fee = fee;
        info!("[ec-06] Logo fee: {}", fee);
        Ok(())
    }

    /// Replaces the top-company catalog.
    pub fn update_factory_contract(
        &mut self,
        caller: Address,
        catalog: Box<dyn TopCompanyCatalog>,
    ) -> Result<(), MarketError> {
        self.ensure_owner(caller)?;
        if catalog.owner() != self.address {
            warn!(
                "[ec-06] Rejected catalog owned by {} instead of the marketplace",
                catalog.owner()
            );
            return Err(MarketError::InvalidInput(format!(
                "replacement catalog is owned by {}",
                catalog.owner()
            )));
        }
        info!(
            "[ec-06] Catalog replaced ({} slots, owner {})",
            catalog.slot_count(),
            catalog.owner()
        );
        self.catalog = catalog;
        Ok(())
    }

    /// Appends catalog entries, rejecting names already in the marketplace.
    pub fn add_top_companies(
        &mut self,
        caller: Address,
        names: &[CompanyName],
        performances: &[u64],
        logo_urls: &[LogoUrl],
        count: usize,
    ) -> Result<(), MarketError> {
        self.ensure_owner(caller)?;
        if let Some(taken) = names
            .iter()
            .take(count)
            .find(|name| self.companies.contains_key(&name.key()))
        {
            return Err(MarketError::NameTaken {
                name: taken.to_string(),
                availability: NameAvailability::TakenInMarketplace,
            });
        }
        self.catalog
            .add_companies(self.address, names, performances, logo_urls, count)?;
        Ok(())
    }

    /// Tombstones a catalog entry. Marketplace records are unaffected.
    pub fn remove_top_company(&mut self, caller: Address, name: &CompanyName) -> Result<(), MarketError> {
        self.ensure_owner(caller)?;
        self.catalog.remove_company(self.address, &name.key())?;
        Ok(())
    }

    /// Pays retained native value out to `to`.
    pub fn withdraw(&mut self, caller: Address, to: Address, amount: U256) -> Result<(), MarketError> {
        self.ensure_owner(caller)?;
        if to.is_zero() {
            return Err(MarketError::InvalidInput("withdraw to zero address".to_string()));
        }
        let mut ledger = self.ledger.write();
        let available = ledger.balance_of(&self.address);
        if available < amount {
            return Err(MarketError::InsufficientContractBalance {
                available,
                required: amount,
            });
        }
        ledger.transfer(self.address, to, amount)?;
        info!("[ec-06] Withdrew {} to {}", amount, to);
        Ok(())
    }

    /// Hands the marketplace to `new_owner`.
    pub fn transfer_ownership(&mut self, caller: Address, new_owner: Address) -> Result<(), MarketError> {
        self.ensure_owner(caller)?;
        if new_owner.is_zero() {
            return Err(MarketError::InvalidInput("zero address".to_string()));
        }
        info!("[ec-06] Ownership transferred {} -> {}", self.owner, new_owner);
        self.owner = new_owner;
        Ok(())
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Where, if anywhere, `name` is taken. The catalog is checked first.
    #[must_use]
    pub fn check_company_name_availability(&self, name: &CompanyName) -> NameAvailability {
        let key = name.key();
        if self.catalog.contains(&key) {
            NameAvailability::TakenInRegistry
        } else if self.companies.contains_key(&key) {
            NameAvailability::TakenInMarketplace
        } else {
            NameAvailability::Available
        }
    }

    /// Company by name, any case.
    #[must_use]
    pub fn company(&self, name: &CompanyName) -> Option<&Company> {
        self.companies.get(&name.key())
    }

    /// Company by lookup key.
    #[must_use]
    pub fn company_by_key(&self, key: &NameKey) -> Option<&Company> {
        self.companies.get(key)
    }

    /// All companies held by `owner`.
    pub fn companies_owned_by<'a>(&'a self, owner: &'a Address) -> impl Iterator<Item = &'a Company> + 'a {
        self.companies.values().filter(move |company| company.owner == *owner)
    }

    /// Aggregates of `account`; defaults when unknown.
    #[must_use]
    pub fn account(&self, account: &Address) -> AccountState {
        self.accounts.get(account).cloned().unwrap_or_default()
    }

    /// Sum of performance over `account`'s companies.
    #[must_use]
    pub fn owned_performance(&self, account: &Address) -> u64 {
        self.accounts.get(account).map_or(0, |a| a.owned_performance)
    }

    /// Unspent super-privilege credits of `account`.
    #[must_use]
    pub fn super_privilege_count(&self, account: &Address) -> u64 {
        self.accounts.get(account).map_or(0, |a| a.super_privilege_count)
    }

    /// Block `account` last settled yield at.
    #[must_use]
    pub fn last_token_claimed_block(&self, account: &Address) -> BlockNumber {
        self.accounts.get(account).map_or(0, |a| a.last_token_claimed_block)
    }

    /// Yield settled at earlier performance levels.
    #[must_use]
    pub fn accrued_yield(&self, account: &Address) -> U256 {
        self.accounts.get(account).map_or_else(U256::zero, |a| a.accrued_yield)
    }

    /// Yield `account` could claim at `block`.
    pub fn claimable_tokens(&self, account: &Address, block: BlockNumber) -> Result<U256, MarketError> {
        self.account(account)
            .claimable(block, self.unit(), self.config.blocks_per_day)
    }

    /// Catalog entry at an auction index.
    pub fn top_company_at_index(&self, index: u64) -> Result<TopCompany, MarketError> {
        self.catalog
            .company_at(index)
            .map_err(|_| MarketError::NotFound(format!("top company index {index}")))
    }

    /// Whole tokens the next `create_company` costs.
    #[must_use]
    pub fn company_creation_cost(&self) -> u64 {
        creation_cost(self.company_count)
    }

    /// Number of user-created companies.
    #[must_use]
    pub fn company_count(&self) -> u64 {
        self.company_count
    }

    /// Current parameters.
    #[must_use]
    pub fn config(&self) -> &MarketConfig {
        &self.config
    }

    /// Blocks per day.
    #[must_use]
    pub fn blocks_per_day(&self) -> u64 {
        self.config.blocks_per_day
    }

    /// Lowest winning lucky-draw roll.
    #[must_use]
    pub fn min_random_privilege_value(&self) -> u64 {
        self.config.min_random_privilege_value
    }

    /// Whole tokens per lucky-draw ticket.
    #[must_use]
    pub fn super_privilege_cost(&self) -> u64 {
        self.config.super_privilege_cost
    }

    /// Performance bound of user-created companies.
    #[must_use]
    pub fn max_user_created_performance(&self) -> u64 {
        self.config.max_user_created_performance
    }

    /// Whole tokens per logo update.
    #[must_use]
    pub fn logo_fee(&self) -> u64 {
        self.config.logo_fee
    }

    /// Value required to buy a top company.
    #[must_use]
    pub fn top_company_start_price(&self) -> U256 {
        self.config.top_company_start_price
    }

    /// Block auction index 0 opens at.
    #[must_use]
    pub fn top_company_start_block(&self) -> BlockNumber {
        self.catalog.schedule().start_block
    }

    /// Blocks between two auction releases.
    #[must_use]
    pub fn top_company_blocks_in_between(&self) -> u64 {
        self.catalog.schedule().blocks_in_between
    }

    /// Current catalog.
    #[must_use]
    pub fn catalog(&self) -> &dyn TopCompanyCatalog {
        self.catalog.as_ref()
    }

    /// Administrator.
    #[must_use]
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Address balances and ownerships are held under.
    #[must_use]
    pub fn address(&self) -> Address {
        self.address
    }

    // =========================================================================
    // INTERNAL
    // =========================================================================

    fn ensure_owner(&self, caller: Address) -> Result<(), MarketError> {
        if caller != self.owner {
            warn!("[ec-06] Rejected privileged call from {}", caller);
            return Err(MarketError::Unauthorized(caller));
        }
        Ok(())
    }

    fn owned_company(&mut self, caller: Address, name: &CompanyName) -> Result<&mut Company, MarketError> {
        let company = self
            .companies
            .get_mut(&name.key())
            .ok_or_else(|| MarketError::NotFound(name.to_string()))?;
        if company.owner != caller {
            warn!("[ec-06] {} is not the owner of {}", caller, company.name);
            return Err(MarketError::Unauthorized(caller));
        }
        Ok(company)
    }

    fn unit(&self) -> U256 {
        self.token.read().unit()
    }

    fn whole_tokens(&self, amount: u64) -> Result<U256, MarketError> {
        U256::from(amount)
            .checked_mul(self.unit())
            .ok_or(MarketError::Overflow)
    }

    fn gain_performance(
        &self,
        account: &mut AccountState,
        performance: u64,
        block: BlockNumber,
    ) -> Result<(), MarketError> {
        account.checkpoint(block, self.unit(), self.config.blocks_per_day)?;
        account.owned_performance = account
            .owned_performance
            .checked_add(performance)
            .ok_or(MarketError::Overflow)?;
        Ok(())
    }

    fn lose_performance(
        &self,
        account: &mut AccountState,
        performance: u64,
        block: BlockNumber,
    ) -> Result<(), MarketError> {
        account.checkpoint(block, self.unit(), self.config.blocks_per_day)?;
        account.owned_performance = account
            .owned_performance
            .checked_sub(performance)
            .ok_or(MarketError::Overflow)?;
        Ok(())
    }

    fn draw(&mut self, account: Address, block: BlockNumber) -> Result<U256, MarketError> {
        let entropy = DrawEntropy {
            account,
            block_number: block,
            nonce: self.draw_nonce,
        };
        Ok(self.random.draw(self.address, &entropy)?)
    }

    /// Checks everything [`Self::charge_tokens`] checks. Draws are not
    /// reversible, so callers that draw run this first.
    fn ensure_chargeable(&self, payer: Address, amount: U256) -> Result<(), MarketError> {
        let token = self.token.read();
        if token.owner() != self.address {
            warn!("[ec-06] Marketplace no longer owns the token; cannot charge {}", payer);
            return Err(MarketError::Unauthorized(self.address));
        }
        let available = token.balance_of(&payer);
        if available < amount {
            return Err(MarketError::InsufficientBalance {
                account: payer,
                available,
                required: amount,
            });
        }
        Ok(())
    }

    /// Pulls `amount` tokens from `payer` via the owner allowance.
    fn charge_tokens(&self, payer: Address, amount: U256) -> Result<(), MarketError> {
        let mut token = self.token.write();
        let available = token.balance_of(&payer);
        if available < amount {
            return Err(MarketError::InsufficientBalance {
                account: payer,
                available,
                required: amount,
            });
        }
        token.owner_approve(self.address, payer, amount)?;
        token.transfer_from(self.address, payer, self.address, amount)?;
        debug!("[ec-06] Charged {} token units from {}", amount, payer);
        Ok(())
    }

    /// Moves `value` from the buyer into the marketplace, then pays the seller.
    fn settle(
        &self,
        buyer: Address,
        seller: Address,
        value: U256,
        seller_payout: U256,
    ) -> Result<(), MarketError> {
        let mut ledger = self.ledger.write();
        ledger.transfer(buyer, self.address, value)?;
        if let Err(err) = ledger.transfer(self.address, seller, seller_payout) {
            ledger.transfer(self.address, buyer, value)?;
            return Err(err.into());
        }
        debug!(
            "[ec-06] Settled {}: {} to seller {}",
            value, seller_payout, seller
        );
        Ok(())
    }

    fn emit(&self, block: BlockNumber, event: MarketEvent) {
        metric_inc!(EVENTS_PUBLISHED, &[event.kind()]);
        self.events.publish(block, event);
    }
}

fn consume_privilege(account: &mut AccountState, holder: Address) -> Result<(), MarketError> {
    account.super_privilege_count = account
        .super_privilege_count
        .checked_sub(1)
        .ok_or(MarketError::NoSuperPrivilege(holder))?;
    Ok(())
}
