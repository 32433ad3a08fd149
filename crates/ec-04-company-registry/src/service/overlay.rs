//! # Fixed Index Overlay
//!
//! Decorator that pins chosen names to chosen auction indices without
//! rewriting the underlying catalog.
//!
//! Every name keeps exactly one index. A base name whose slot was taken by a
//! pin moves into a base slot vacated by a pinned name, lowest first:
//!
//! ```text
//! base     0:Co0  1:Co1 ... 140:Co140
//! pin Co140 -> 0
//! overlay  0:Co140  1:Co1 ... 140:Co0
//! ```

use shared_types::{Address, CompanyName, LogoUrl, NameKey};
use std::collections::HashMap;
use tracing::{info, warn};

use crate::domain::entities::{ReleaseSchedule, TopCompany};
use crate::domain::errors::RegistryError;
use crate::ports::inbound::TopCompanyCatalog;

/// Pins names to indices over a base catalog.
///
/// The overlay acts under its own `address` towards the base catalog, which
/// must be owned by that address for forwarded mutations to succeed.
#[derive(Debug, Clone)]
pub struct FixedIndexOverlay<C> {
    address: Address,
    owner: Address,
    base: C,
    pinned_index: HashMap<u64, NameKey>,
    pinned_name: HashMap<NameKey, u64>,
    relocated_index: HashMap<u64, NameKey>,
    relocated_name: HashMap<NameKey, u64>,
}

impl<C: TopCompanyCatalog> FixedIndexOverlay<C> {
    /// Wraps `base`, acting as `address` and owned by `owner`.
    pub fn new(owner: Address, address: Address, base: C) -> Self {
        if base.owner() != address {
            warn!(
                "[ec-04] Overlay {} does not own its base catalog (owner {})",
                address,
                base.owner()
            );
        }
        Self {
            address,
            owner,
            base,
            pinned_index: HashMap::new(),
            pinned_name: HashMap::new(),
            relocated_index: HashMap::new(),
            relocated_name: HashMap::new(),
        }
    }

    /// Address the overlay acts under.
    #[must_use]
    pub fn address(&self) -> Address {
        self.address
    }

    /// Underlying catalog.
    #[must_use]
    pub fn base(&self) -> &C {
        &self.base
    }

    /// Pinned index of a name, if pinned.
    #[must_use]
    pub fn pinned_index_of(&self, key: &NameKey) -> Option<u64> {
        self.pinned_name.get(key).copied()
    }

    /// Owner-only: pins `names[i]` to index `from + i` for `i` in `0..=to - from`.
    ///
    /// A later pin replaces any earlier pin of the same name or index.
    ///
    /// # Errors
    /// * `RegistryError::InvalidInput` - `to < from`, too few names, or a name
    ///   missing from the base catalog
    pub fn set_companies_index(
        &mut self,
        caller: Address,
        names: &[CompanyName],
        from: u64,
        to: u64,
    ) -> Result<(), RegistryError> {
        self.ensure_owner(caller)?;
        if to < from {
            return Err(RegistryError::InvalidInput(format!("range {from}..={to} is empty")));
        }
        let span = usize::try_from(to - from)
            .ok()
            .and_then(|d| d.checked_add(1))
            .filter(|len| *len <= names.len())
            .ok_or_else(|| {
                RegistryError::InvalidInput(format!(
                    "{} names cannot fill indices {from}..={to}",
                    names.len()
                ))
            })?;

        let keys: Vec<NameKey> = names[..span].iter().map(CompanyName::key).collect();
        if let Some(missing) = names[..span].iter().find(|n| !self.base.contains(&n.key())) {
            return Err(RegistryError::InvalidInput(format!(
                "{missing} is not in the base catalog"
            )));
        }

        for (key, index) in keys.into_iter().zip(from..) {
            self.unpin_name(&key);
            if let Some(previous) = self.pinned_index.insert(index, key) {
                self.pinned_name.remove(&previous);
            }
            self.pinned_name.insert(key, index);
        }
        self.relocate_displaced();
        info!("[ec-04] Pinned {} companies to indices {}..={}", span, from, to);
        Ok(())
    }

    fn unpin_name(&mut self, key: &NameKey) {
        if let Some(index) = self.pinned_name.remove(key) {
            self.pinned_index.remove(&index);
        }
    }

    /// Pairs base names sitting on someone else's pinned slot with the base
    /// slots pinned names left behind.
    fn relocate_displaced(&mut self) {
        let mut vacated: Vec<u64> = self
            .pinned_name
            .keys()
            .filter_map(|key| self.base.company_by_name(key).ok())
            .map(|company| company.index)
            .filter(|index| !self.pinned_index.contains_key(index))
            .collect();
        let mut displaced: Vec<(u64, NameKey)> = self
            .pinned_index
            .keys()
            .filter_map(|slot| self.base.company_at(*slot).ok())
            .map(|company| (company.index, company.name.key()))
            .filter(|(_, key)| !self.pinned_name.contains_key(key))
            .collect();
        vacated.sort_unstable();
        displaced.sort_unstable_by_key(|(slot, _)| *slot);

        self.relocated_index.clear();
        self.relocated_name.clear();
        for (index, (_, key)) in vacated.into_iter().zip(displaced) {
            self.relocated_index.insert(index, key);
            self.relocated_name.insert(key, index);
        }
    }

    fn ensure_owner(&self, caller: Address) -> Result<(), RegistryError> {
        if caller != self.owner {
            warn!("[ec-04] Rejected overlay mutation from {}", caller);
            return Err(RegistryError::Unauthorized(caller));
        }
        Ok(())
    }
}

impl<C: TopCompanyCatalog> TopCompanyCatalog for FixedIndexOverlay<C> {
    fn company_at(&self, index: u64) -> Result<TopCompany, RegistryError> {
        if let Some(key) = self
            .pinned_index
            .get(&index)
            .or_else(|| self.relocated_index.get(&index))
        {
            let mut company = self.base.company_by_name(key)?;
            company.index = index;
            return Ok(company);
        }
        let company = self.base.company_at(index)?;
        // its base slot was vacated by a pin and nobody moved in
        if self.pinned_name.contains_key(&company.name.key()) {
            return Err(RegistryError::NotFound);
        }
        Ok(company)
    }

    fn company_by_name(&self, key: &NameKey) -> Result<TopCompany, RegistryError> {
        let mut company = self.base.company_by_name(key)?;
        if let Some(index) = self
            .pinned_name
            .get(key)
            .or_else(|| self.relocated_name.get(key))
        {
            company.index = *index;
        }
        Ok(company)
    }

    fn schedule(&self) -> ReleaseSchedule {
        self.base.schedule()
    }

    fn slot_count(&self) -> u64 {
        let highest_pin = self.pinned_index.keys().max().map_or(0, |i| i + 1);
        self.base.slot_count().max(highest_pin)
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
        self.base
            .add_companies(self.address, names, performances, logo_urls, count)?;
        self.relocate_displaced();
        Ok(())
    }

    fn remove_company(&mut self, caller: Address, key: &NameKey) -> Result<(), RegistryError> {
        self.ensure_owner(caller)?;
        self.base.remove_company(self.address, key)?;
        self.unpin_name(key);
        self.relocate_displaced();
        Ok(())
    }

    fn owner(&self) -> Address {
        self.owner
    }

    fn transfer_ownership(&mut self, caller: Address, new_owner: Address) -> Result<(), RegistryError> {
        self.ensure_owner(caller)?;
        info!("[ec-04] Overlay ownership transferred {} -> {}", self.owner, new_owner);
        self.owner = new_owner;
        Ok(())
    }
}
