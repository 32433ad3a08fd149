//! # Deployment
//!
//! The launch sequence:
//!
//! 1. deploy the token, minting the supply to the deployer
//! 2. deploy the catalog and seed it; wrap it in a fixed-index overlay when
//!    names are pinned
//! 3. deploy the random generator
//! 4. move the token reserve into the marketplace
//! 5. hand token, catalog and random generator over to the marketplace
//!
//! Component addresses derive from the deployer, so a deployment is
//! reproducible.

use std::sync::Arc;

use ec_01_token::{FungibleToken, SharedToken, TokenApi};
use ec_03_random::{KeccakRandomGenerator, RandomSource};
use ec_04_company_registry::domain::entities::DEFAULT_LAUNCH_BACKLOG;
use ec_04_company_registry::{
    FixedIndexOverlay, ReleaseSchedule, TopCompanyCatalog, TopCompanyFactory,
};
use ec_05_referral::ReferralRewarder;
use shared_bus::InMemoryEventLog;
use shared_types::{Address, BlockNumber, CompanyName, LogoUrl, NativeLedger, SharedLedger, U256};
use tracing::info;

use crate::domain::config::DeploymentConfig;
use crate::domain::errors::MarketError;
use crate::service::marketplace::{Marketplace, MarketplaceParts};
use crate::service::shared::MarketplaceService;

/// A launched marketplace and the handles around it.
pub struct Deployment {
    /// The marketplace.
    pub market: MarketplaceService,
    /// Token owned by the marketplace.
    pub token: SharedToken,
    /// Native-value ledger.
    pub ledger: SharedLedger,
    /// Event log the marketplace publishes to.
    pub events: Arc<InMemoryEventLog>,
    /// Account that ran the launch and administers the marketplace.
    pub deployer: Address,
    /// Launch block.
    pub deployed_at: BlockNumber,
}

impl Deployment {
    /// Launches with a [`KeccakRandomGenerator`].
    pub fn deploy(
        config: &DeploymentConfig,
        deployer: Address,
        block: BlockNumber,
    ) -> Result<Self, MarketError> {
        Self::deploy_with_random(
            config,
            deployer,
            block,
            Box::new(KeccakRandomGenerator::new(deployer)),
        )
    }

    /// Launches with a caller-supplied random source owned by `deployer`.
    pub fn deploy_with_random(
        config: &DeploymentConfig,
        deployer: Address,
        block: BlockNumber,
        mut random: Box<dyn RandomSource>,
    ) -> Result<Self, MarketError> {
        config.validate()?;
        let market_address = Self::market_address(deployer);

        let token = FungibleToken::deploy(deployer, &config.token)?.shared();
        let catalog = build_catalog(config, deployer, block, market_address)?;
        {
            let mut token = token.write();
            let reserve = U256::from(config.market_token_reserve)
                .checked_mul(token.unit())
                .ok_or(MarketError::Overflow)?;
            token.transfer(deployer, market_address, reserve)?;
            token.transfer_ownership(deployer, market_address)?;
        }
        random.transfer_ownership(deployer, market_address)?;

        let ledger = NativeLedger::new().shared();
        let events = Arc::new(InMemoryEventLog::new());
        let marketplace = Marketplace::new(MarketplaceParts {
            address: market_address,
            owner: deployer,
            config: config.market.clone(),
            token: token.clone(),
            ledger: ledger.clone(),
            catalog,
            random,
            events: events.clone(),
        })?;

        info!(
            "[ec-06] Deployed marketplace {} at block {} (reserve {} tokens, {} top companies)",
            market_address,
            block,
            config.market_token_reserve,
            config.top_companies.len()
        );
        Ok(Self {
            market: MarketplaceService::new(marketplace),
            token,
            ledger,
            events,
            deployer,
            deployed_at: block,
        })
    }

    /// Marketplace address for a deployer.
    #[must_use]
    pub fn market_address(deployer: Address) -> Address {
        Address::from_label(&format!("{deployer:?}/marketplace"))
    }

    /// Credits native value to `account` (genesis funding).
    pub fn fund(&self, account: Address, amount: U256) -> Result<(), MarketError> {
        self.ledger.write().credit(account, amount)?;
        Ok(())
    }

    /// Native balance of `account`.
    #[must_use]
    pub fn native_balance(&self, account: &Address) -> U256 {
        self.ledger.read().balance_of(account)
    }

    /// Token balance of `account` in base units.
    #[must_use]
    pub fn token_balance(&self, account: &Address) -> U256 {
        self.token.read().balance_of(account)
    }

    /// Moves whole tokens out of the deployer's remaining supply.
    pub fn grant_tokens(&self, to: Address, whole: u64) -> Result<(), MarketError> {
        let mut token = self.token.write();
        let amount = U256::from(whole)
            .checked_mul(token.unit())
            .ok_or(MarketError::Overflow)?;
        token.transfer(self.deployer, to, amount)?;
        Ok(())
    }

    /// Deploys a referral rewarder owned by the deployer and funds it with
    /// `reserve` whole tokens from the deployer's remaining supply.
    pub fn deploy_referral_rewarder(&self, reserve: u64) -> Result<ReferralRewarder, MarketError> {
        let address = Address::from_label(&format!("{:?}/referral", self.deployer));
        self.grant_tokens(address, reserve)?;
        info!("[ec-06] Referral rewarder {} funded with {} tokens", address, reserve);
        Ok(ReferralRewarder::new(self.deployer, address, self.token.clone()))
    }
}

fn build_catalog(
    config: &DeploymentConfig,
    deployer: Address,
    block: BlockNumber,
    market_address: Address,
) -> Result<Box<dyn TopCompanyCatalog>, MarketError> {
    let schedule = match config.blocks_in_between {
        Some(interval) => ReleaseSchedule {
            start_block: block.saturating_sub(DEFAULT_LAUNCH_BACKLOG.saturating_mul(interval)),
            blocks_in_between: interval,
        },
        None => ReleaseSchedule::launched_at(block),
    };
    let mut factory = TopCompanyFactory::with_schedule(deployer, schedule);
    if !config.top_companies.is_empty() {
        let names: Vec<CompanyName> = config.top_companies.iter().map(|c| c.name.clone()).collect();
        let performances: Vec<u64> = config.top_companies.iter().map(|c| c.performance).collect();
        let logos: Vec<LogoUrl> = config.top_companies.iter().map(|c| c.logo_url.clone()).collect();
        factory.add_companies(deployer, &names, &performances, &logos, names.len())?;
    }

    if config.pinned_companies.is_empty() {
        factory.transfer_ownership(deployer, market_address)?;
        return Ok(Box::new(factory));
    }

    let overlay_address = Address::from_label(&format!("{deployer:?}/catalog-overlay"));
    factory.transfer_ownership(deployer, overlay_address)?;
    let mut overlay = FixedIndexOverlay::new(deployer, overlay_address, factory);
    let last = config.pinned_companies.len() as u64 - 1;
    overlay.set_companies_index(deployer, &config.pinned_companies, 0, last)?;
    overlay.transfer_ownership(deployer, market_address)?;
    Ok(Box::new(overlay))
}
