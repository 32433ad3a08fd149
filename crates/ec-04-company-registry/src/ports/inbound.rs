//! # Inbound Ports

use shared_types::{Address, BlockNumber, CompanyName, LogoUrl, NameKey};

use crate::domain::entities::{ReleaseSchedule, TopCompany};
use crate::domain::errors::RegistryError;

/// A catalog of top companies.
///
/// Mutations are owner-gated; reads are open.
pub trait TopCompanyCatalog: Send + Sync {
    /// Entry at an auction index.
    ///
    /// # Errors
    /// * `RegistryError::NotFound` - out of range or removed
    fn company_at(&self, index: u64) -> Result<TopCompany, RegistryError>;

    /// Entry by case-insensitive name.
    ///
    /// # Errors
    /// * `RegistryError::NotFound` - unknown or removed
    fn company_by_name(&self, key: &NameKey) -> Result<TopCompany, RegistryError>;

    /// Whether the named company's auction index is open at `block`.
    fn can_buy_company(&self, key: &NameKey, block: BlockNumber) -> bool {
        self.company_by_name(key)
            .is_ok_and(|company| self.schedule().is_released(company.index, block))
    }

    /// Whether a live entry with this name exists.
    fn contains(&self, key: &NameKey) -> bool {
        self.company_by_name(key).is_ok()
    }

    /// Release schedule.
    fn schedule(&self) -> ReleaseSchedule;

    /// Number of index slots ever allocated, removed ones included.
    fn slot_count(&self) -> u64;

    /// Owner-only: appends the first `count` entries of the three arrays.
    ///
    /// # Errors
    /// * `RegistryError::InvalidInput` - length mismatch or duplicate name
    fn add_companies(
        &mut self,
        caller: Address,
        names: &[CompanyName],
        performances: &[u64],
        logo_urls: &[LogoUrl],
        count: usize,
    ) -> Result<(), RegistryError>;

    /// Owner-only: removes an entry; other indices keep their positions.
    fn remove_company(&mut self, caller: Address, key: &NameKey) -> Result<(), RegistryError>;

    /// Current owner.
    fn owner(&self) -> Address;

    /// Owner-only: hands the catalog to `new_owner`.
    fn transfer_ownership(&mut self, caller: Address, new_owner: Address) -> Result<(), RegistryError>;
}
