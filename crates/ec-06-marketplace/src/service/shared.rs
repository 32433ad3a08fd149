//! # Marketplace Service
//!
//! Serialises every call through one `parking_lot::Mutex`, so concurrent
//! callers observe a single total order of operations. Rejections are counted
//! per operation and error kind.

use std::sync::Arc;

use ec_04_company_registry::{TopCompany, TopCompanyCatalog};
use ethecom_telemetry::REJECTED_OPERATIONS;
use parking_lot::{Mutex, MutexGuard};
use shared_types::{Address, BlockNumber, CallContext, CompanyName, LogoUrl, NameKey, U256};
use tracing::debug;

use super::marketplace::Marketplace;
use crate::domain::entities::{Company, LuckyDrawOutcome, NameAvailability};
use crate::domain::errors::MarketError;
use crate::ports::inbound::{MarketplaceAdminApi, MarketplaceApi};

/// Thread-safe, cloneable handle to a [`Marketplace`].
#[derive(Clone)]
pub struct MarketplaceService {
    inner: Arc<Mutex<Marketplace>>,
}

impl MarketplaceService {
    /// Wraps a marketplace.
    #[must_use]
    pub fn new(marketplace: Marketplace) -> Self {
        Self {
            inner: Arc::new(Mutex::new(marketplace)),
        }
    }

    /// Locks the marketplace for reads spanning several queries.
    pub fn lock(&self) -> MutexGuard<'_, Marketplace> {
        self.inner.lock()
    }

    /// Marketplace address.
    #[must_use]
    pub fn address(&self) -> Address {
        self.inner.lock().address()
    }

    /// Marketplace owner.
    #[must_use]
    pub fn owner(&self) -> Address {
        self.inner.lock().owner()
    }

    fn run<T>(
        &self,
        operation: &'static str,
        f: impl FnOnce(&mut Marketplace) -> Result<T, MarketError>,
    ) -> Result<T, MarketError> {
        let mut market = self.inner.lock();
        f(&mut market).map_err(|err| {
            REJECTED_OPERATIONS
                .with_label_values(&[operation, err.kind()])
                .inc();
            debug!("[ec-06] {} rejected: {}", operation, err);
            err
        })
    }
}

impl MarketplaceApi for MarketplaceService {
    fn purchase_top_company(
        &self,
        ctx: &CallContext,
        name: &CompanyName,
        claim_super_privilege: bool,
    ) -> Result<(), MarketError> {
        self.run("purchase_top_company", |m| {
            m.purchase_top_company(ctx, name, claim_super_privilege)
        })
    }

    fn purchase_company(
        &self,
        ctx: &CallContext,
        name: &CompanyName,
        claim_super_privilege: bool,
    ) -> Result<(), MarketError> {
        self.run("purchase_company", |m| {
            m.purchase_company(ctx, name, claim_super_privilege)
        })
    }

    fn create_company(
        &self,
        ctx: &CallContext,
        name: &CompanyName,
        logo_url: &LogoUrl,
        price: U256,
    ) -> Result<(), MarketError> {
        self.run("create_company", |m| m.create_company(ctx, name, logo_url, price))
    }

    fn put_company_onsale(&self, ctx: &CallContext, name: &CompanyName, price: U256) -> Result<(), MarketError> {
        self.run("put_company_onsale", |m| m.put_company_onsale(ctx, name, price))
    }

    fn permanently_own_my_company(&self, ctx: &CallContext, name: &CompanyName) -> Result<(), MarketError> {
        self.run("permanently_own_my_company", |m| {
            m.permanently_own_my_company(ctx, name)
        })
    }

    fn update_logo_url(&self, ctx: &CallContext, name: &CompanyName, logo_url: &LogoUrl) -> Result<(), MarketError> {
        self.run("update_logo_url", |m| m.update_logo_url(ctx, name, logo_url))
    }

    fn run_super_privilege_lucky_draw(&self, ctx: &CallContext) -> Result<LuckyDrawOutcome, MarketError> {
        self.run("run_super_privilege_lucky_draw", |m| {
            m.run_super_privilege_lucky_draw(ctx)
        })
    }

    fn claim_my_token(&self, ctx: &CallContext) -> Result<U256, MarketError> {
        self.run("claim_my_token", |m| m.claim_my_token(ctx))
    }

    fn check_company_name_availability(&self, name: &CompanyName) -> NameAvailability {
        self.inner.lock().check_company_name_availability(name)
    }

    fn company(&self, name: &CompanyName) -> Option<Company> {
        self.inner.lock().company(name).cloned()
    }

    fn company_by_key(&self, key: &NameKey) -> Option<Company> {
        self.inner.lock().company_by_key(key).cloned()
    }

    fn owned_performance(&self, account: &Address) -> u64 {
        self.inner.lock().owned_performance(account)
    }

    fn super_privilege_count(&self, account: &Address) -> u64 {
        self.inner.lock().super_privilege_count(account)
    }

    fn last_token_claimed_block(&self, account: &Address) -> BlockNumber {
        self.inner.lock().last_token_claimed_block(account)
    }

    fn claimable_tokens(&self, account: &Address, block: BlockNumber) -> Result<U256, MarketError> {
        self.inner.lock().claimable_tokens(account, block)
    }

    fn top_company_at_index(&self, index: u64) -> Result<TopCompany, MarketError> {
        self.inner.lock().top_company_at_index(index)
    }

    fn company_creation_cost(&self) -> u64 {
        self.inner.lock().company_creation_cost()
    }
}

impl MarketplaceAdminApi for MarketplaceService {
    fn update_super_privilege_params(&self, caller: Address, min_roll: u64, cost: u64) -> Result<(), MarketError> {
        self.run("update_super_privilege_params", |m| {
            m.update_super_privilege_params(caller, min_roll, cost)
        })
    }

    fn update_blocks_per_day(&self, caller: Address, blocks_per_day: u64) -> Result<(), MarketError> {
        self.run("update_blocks_per_day", |m| {
            m.update_blocks_per_day(caller, blocks_per_day)
        })
    }

    fn update_user_created_performance(&self, caller: Address, max: u64) -> Result<(), MarketError> {
        self.run("update_user_created_performance", |m| {
            m.update_user_created_performance(caller, max)
        })
    }

    fn update_logo_fee(&self, caller: Address, fee: u64) -> Result<(), MarketError> {
        self.run("update_logo_fee", |m| m.update_logo_fee(caller, fee))
    }

    fn update_factory_contract(
        &self,
        caller: Address,
        catalog: Box<dyn TopCompanyCatalog>,
    ) -> Result<(), MarketError> {
        self.run("update_factory_contract", |m| {
            m.update_factory_contract(caller, catalog)
        })
    }

    fn add_top_companies(
        &self,
        caller: Address,
        names: &[CompanyName],
        performances: &[u64],
        logo_urls: &[LogoUrl],
        count: usize,
    ) -> Result<(), MarketError> {
        self.run("add_top_companies", |m| {
            m.add_top_companies(caller, names, performances, logo_urls, count)
        })
    }

    fn remove_top_company(&self, caller: Address, name: &CompanyName) -> Result<(), MarketError> {
        self.run("remove_top_company", |m| m.remove_top_company(caller, name))
    }

    fn withdraw(&self, caller: Address, to: Address, amount: U256) -> Result<(), MarketError> {
        self.run("withdraw", |m| m.withdraw(caller, to, amount))
    }

    fn transfer_ownership(&self, caller: Address, new_owner: Address) -> Result<(), MarketError> {
        self.run("transfer_ownership", |m| m.transfer_ownership(caller, new_owner))
    }
}
