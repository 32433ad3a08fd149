//! # Top Company Factory
//!
//! The seeded catalog. Entries live in index order; removal leaves a
//! tombstone so later indices never shift.

use shared_types::{Address, BlockNumber, CompanyName, LogoUrl, NameKey};
use std::collections::{HashMap, HashSet};
use tracing::{info, warn};

use crate::domain::entities::{ReleaseSchedule, TopCompany};
use crate::domain::errors::RegistryError;
use crate::ports::inbound::TopCompanyCatalog;

/// Owner-seeded catalog of top companies.
#[derive(Debug, Clone)]
pub struct TopCompanyFactory {
    owner: Address,
    slots: Vec<Option<TopCompany>>,
    by_name: HashMap<NameKey, u64>,
    schedule: ReleaseSchedule,
}

impl TopCompanyFactory {
    /// Empty catalog with the default schedule for `deploy_block`.
    #[must_use]
    pub fn new(owner: Address, deploy_block: BlockNumber) -> Self {
        Self::with_schedule(owner, ReleaseSchedule::launched_at(deploy_block))
    }

    /// Empty catalog with an explicit schedule.
    #[must_use]
    pub fn with_schedule(owner: Address, schedule: ReleaseSchedule) -> Self {
        Self {
            owner,
            slots: Vec::new(),
            by_name: HashMap::new(),
            schedule,
        }
    }

    /// Number of live entries.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.by_name.len()
    }

    fn ensure_owner(&self, caller: Address) -> Result<(), RegistryError> {
        if caller != self.owner {
            warn!("[ec-04] Rejected catalog mutation from {}", caller);
            return Err(RegistryError::Unauthorized(caller));
        }
        Ok(())
    }
}

/// Checks a batch before any entry is written.
pub(crate) fn validate_batch(
    names: &[CompanyName],
    performances: &[u64],
    logo_urls: &[LogoUrl],
    count: usize,
) -> Result<(), RegistryError> {
    if names.len() != performances.len() || names.len() != logo_urls.len() {
        return Err(RegistryError::InvalidInput(format!(
            "array lengths differ: {} names, {} performances, {} logos",
            names.len(),
            performances.len(),
            logo_urls.len()
        )));
    }
    if names.len() < count {
        return Err(RegistryError::InvalidInput(format!(
            "count {} exceeds {} entries",
            count,
            names.len()
        )));
    }
    Ok(())
}

impl TopCompanyCatalog for TopCompanyFactory {
    fn company_at(&self, index: u64) -> Result<TopCompany, RegistryError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.slots.get(i))
            .and_then(Option::as_ref)
            .cloned()
            .ok_or(RegistryError::NotFound)
    }

    fn company_by_name(&self, key: &NameKey) -> Result<TopCompany, RegistryError> {
        let index = self.by_name.get(key).ok_or(RegistryError::NotFound)?;
        self.company_at(*index)
    }

    fn schedule(&self) -> ReleaseSchedule {
        self.schedule
    }

    fn slot_count(&self) -> u64 {
        self.slots.len() as u64
    }

    fn add_companies(
        &mut self,
        caller: Address,
        names: &[CompanyName],
        performances: &[u64],
        logo_urls: &[LogoUrl],
        count: usize,
    ) -> Result<(), RegistryError> {
        self.ensure_owner(caller)?;
        validate_batch(names, performances, logo_urls, count)?;

        let mut seen = HashSet::with_capacity(count);
        for name in &names[..count] {
            let key = name.key();
            if self.by_name.contains_key(&key) || !seen.insert(key) {
                return Err(RegistryError::InvalidInput(format!(
                    "duplicate company name {name}"
                )));
            }
        }

        for ((name, performance), logo_url) in names.iter().zip(performances).zip(logo_urls).take(count) {
            let index = self.slots.len() as u64;
            self.by_name.insert(name.key(), index);
            self.slots.push(Some(TopCompany {
                name: name.clone(),
                performance: *performance,
                logo_url: logo_url.clone(),
                index,
            }));
        }

        info!(
            "[ec-04] Added {} top companies (slots now {})",
            count,
            self.slots.len()
        );
        Ok(())
    }

    fn remove_company(&mut self, caller: Address, key: &NameKey) -> Result<(), RegistryError> {
        self.ensure_owner(caller)?;
        let index = self.by_name.remove(key).ok_or(RegistryError::NotFound)?;
        if let Some(slot) = usize::try_from(index).ok().and_then(|i| self.slots.get_mut(i)) {
            if let Some(company) = slot.take() {
                info!("[ec-04] Removed top company {} at index {}", company.name, index);
            }
        }
        Ok(())
    }

    fn owner(&self) -> Address {
        self.owner
    }

    fn transfer_ownership(&mut self, caller: Address, new_owner: Address) -> Result<(), RegistryError> {
        self.ensure_owner(caller)?;
        info!("[ec-04] Ownership transferred {} -> {}", self.owner, new_owner);
        self.owner = new_owner;
        Ok(())
    }
}
