//! # Catalog Flows
//!
//! The top-company catalog behind the marketplace: release schedule, pinned
//! indices, name availability, and catalog administration.

#[cfg(test)]
mod tests {
    use crate::harness::{name, standard_config, Harness, COMPANY_LIST, LAUNCH_BLOCK, PINNED};
    use ec_04_company_registry::{
        FixedIndexOverlay, ReleaseSchedule, TopCompanyCatalog, TopCompanyFactory,
    };
    use ec_06_marketplace::{
        Deployment, MarketError, MarketplaceAdminApi, MarketplaceApi, NameAvailability,
    };
    use shared_types::{milli_ether, Address, CallContext, LogoUrl};

    fn logos(count: usize) -> Vec<LogoUrl> {
        vec![LogoUrl::default(); count]
    }

    // =============================================================================
    // SCHEDULE
    // =============================================================================

    #[test]
    fn test_launch_schedule_backdates_releases() {
        let h = Harness::new();
        let market = h.market().lock();

        assert_eq!(market.top_company_start_block(), 0);
        assert_eq!(market.top_company_blocks_in_between(), 240);
        assert_eq!(market.catalog().slot_count(), COMPANY_LIST.len() as u64);
        for (index, (company, _)) in COMPANY_LIST.iter().enumerate() {
            let key = name(company).key();
            assert!(market.catalog().can_buy_company(&key, LAUNCH_BLOCK), "{company}");
            assert_eq!(market.top_company_at_index(index as u64).unwrap().name.as_str(), *company);
        }
    }

    #[test]
    fn test_unreleased_company_rejected_until_its_block() {
        let admin = Address::from_label("deployer");
        let deployment = Deployment::deploy(&standard_config(), admin, 0).unwrap();
        let alice = Address::from_label("alice");
        deployment.fund(alice, milli_ether(10)).unwrap();
        let price = milli_ether(1);

        let early = CallContext::new(alice, 239).with_value(price);
        assert!(matches!(
            deployment
                .market
                .purchase_top_company(&early, &name("Exxon Mobil"), false),
            Err(MarketError::NotReadyForSale(_))
        ));
        deployment
            .market
            .purchase_top_company(&early, &name("Walmart"), false)
            .unwrap();

        let released = CallContext::new(alice, 240).with_value(price);
        deployment
            .market
            .purchase_top_company(&released, &name("Exxon Mobil"), false)
            .unwrap();
        assert!(matches!(
            deployment
                .market
                .purchase_top_company(&released, &name("Apple"), false),
            Err(MarketError::NotReadyForSale(_))
        ));
        assert_eq!(deployment.native_balance(&alice), milli_ether(8));
    }

    // =============================================================================
    // PINNED INDICES
    // =============================================================================

    #[test]
    fn test_pinned_names_resolve_through_overlay() {
        let h = Harness::new();

        for (index, (company, _)) in COMPANY_LIST.iter().enumerate().take(PINNED) {
            let top = h.market().top_company_at_index(index as u64).unwrap();
            // pins are lower-cased; the catalog keeps the seeded spelling
            assert_eq!(top.name.as_str(), *company);
            assert_eq!(top.index, index as u64);
        }
        let unpinned = h.market().top_company_at_index(PINNED as u64).unwrap();
        assert_eq!(unpinned.name.as_str(), COMPANY_LIST[PINNED].0);
        assert!(matches!(
            h.market().top_company_at_index(COMPANY_LIST.len() as u64),
            Err(MarketError::NotFound(_))
        ));
    }

    #[test]
    fn test_replacement_catalog_reorders_auction() {
        let h = Harness::new();
        let market = h.market().address();
        let overlay_address = Address::from_label("second-overlay");

        let mut factory = TopCompanyFactory::with_schedule(
            h.admin,
            ReleaseSchedule {
                start_block: h.block(),
                blocks_in_between: 100,
            },
        );
        let names = vec![name("Alpha"), name("Beta"), name("Gamma")];
        factory
            .add_companies(h.admin, &names, &[10, 20, 30], &logos(3), 3)
            .unwrap();
        factory.transfer_ownership(h.admin, overlay_address).unwrap();
        let mut overlay = FixedIndexOverlay::new(h.admin, overlay_address, factory);
        overlay
            .set_companies_index(h.admin, &[name("gamma"), name("alpha")], 0, 1)
            .unwrap();
        overlay.transfer_ownership(h.admin, market).unwrap();

        h.market()
            .update_factory_contract(h.admin, Box::new(overlay))
            .unwrap();

        assert_eq!(h.market().top_company_at_index(0).unwrap().name.as_str(), "Gamma");
        assert_eq!(h.market().top_company_at_index(1).unwrap().name.as_str(), "Alpha");
        assert_eq!(
            h.market().check_company_name_availability(&name("Walmart")),
            NameAvailability::Available
        );

        let alice = h.player("alice", 10, 0);
        h.buy_top(alice, "Gamma", false).unwrap();
        assert_eq!(h.company("Gamma").performance, 30);
        assert!(matches!(
            h.buy_top(alice, "Alpha", false),
            Err(MarketError::NotReadyForSale(_))
        ));
    }

    // =============================================================================
    // NAME AVAILABILITY
    // =============================================================================

    #[test]
    fn test_name_availability_states() {
        let h = Harness::with_draws(vec![3]);
        let alice = h.player("alice", 1_000, 100);

        assert_eq!(
            h.market().check_company_name_availability(&name("INSTAGRAM")),
            NameAvailability::TakenInRegistry
        );
        assert_eq!(
            h.market().check_company_name_availability(&name("Ethecom")),
            NameAvailability::Available
        );
        h.create(alice, "Ethecom", milli_ether(1)).unwrap();
        assert_eq!(
            h.market().check_company_name_availability(&name("ethecom")),
            NameAvailability::TakenInMarketplace
        );
        // a bought top company is still a catalog entry
        h.buy_top(alice, "Apple", false).unwrap();
        assert_eq!(
            h.market().check_company_name_availability(&name("apple")),
            NameAvailability::TakenInRegistry
        );
    }

    // =============================================================================
    // ADMINISTRATION
    // =============================================================================

    #[test]
    fn test_removed_entry_frees_its_name() {
        let h = Harness::with_draws(vec![3]);
        let alice = h.player("alice", 1_000, 100);
        let last = COMPANY_LIST.len() as u64 - 1;

        h.market().remove_top_company(h.admin, &name("Netflix")).unwrap();

        assert!(h.market().top_company_at_index(last).is_err());
        assert_eq!(h.market().lock().catalog().slot_count(), last + 1);
        assert!(matches!(
            h.buy_top(alice, "Netflix", false),
            Err(MarketError::NotFound(_))
        ));
        h.create(alice, "Netflix", milli_ether(1)).unwrap();
        assert!(!h.company("Netflix").is_top_company);
    }

    #[test]
    fn test_removing_pinned_entry_keeps_other_pins() {
        let h = Harness::new();

        h.market().remove_top_company(h.admin, &name("apple")).unwrap();

        assert!(h.market().top_company_at_index(3).is_err());
        assert_eq!(h.market().top_company_at_index(4).unwrap().name.as_str(), COMPANY_LIST[4].0);
        assert!(matches!(
            h.market().remove_top_company(h.admin, &name("Apple")),
            Err(MarketError::NotFound(_))
        ));
    }

    #[test]
    fn test_removing_sold_entry_keeps_marketplace_record() {
        let h = Harness::new();
        let alice = h.player("alice", 1_000, 0);
        h.buy_top(alice, "Walmart", false).unwrap();

        h.market().remove_top_company(h.admin, &name("Walmart")).unwrap();

        assert_eq!(h.company("Walmart").owner, alice);
        assert_eq!(
            h.market().check_company_name_availability(&name("Walmart")),
            NameAvailability::TakenInMarketplace
        );
        let bob = h.player("bob", 1_000, 0);
        h.buy(bob, "Walmart", false).unwrap();
        assert_eq!(h.market().owned_performance(&bob), 51);
    }

    #[test]
    fn test_added_entries_join_the_auction() {
        let h = Harness::new();
        let alice = h.player("alice", 1_000, 0);
        let names = vec![name("Tesla"), name("Nvidia")];

        h.market()
            .add_top_companies(h.admin, &names, &[45, 44], &logos(2), 2)
            .unwrap();

        let tesla = h.market().top_company_at_index(30).unwrap();
        assert_eq!(tesla.name.as_str(), "Tesla");
        assert_eq!(tesla.performance, 45);
        h.buy_top(alice, "Nvidia", false).unwrap();
        assert_eq!(h.market().owned_performance(&alice), 44);
    }

    #[test]
    fn test_added_entries_cannot_shadow_companies() {
        let h = Harness::with_draws(vec![3]);
        let alice = h.player("alice", 1_000, 100);
        h.create(alice, "Ethecom", milli_ether(1)).unwrap();

        assert!(matches!(
            h.market()
                .add_top_companies(h.admin, &[name("ETHECOM")], &[40], &logos(1), 1),
            Err(MarketError::NameTaken {
                availability: NameAvailability::TakenInMarketplace,
                ..
            })
        ));
        assert!(matches!(
            h.market()
                .add_top_companies(h.admin, &[name("walmart")], &[40], &logos(1), 1),
            Err(MarketError::InvalidInput(_))
        ));
        assert_eq!(h.market().lock().catalog().slot_count(), COMPANY_LIST.len() as u64);
    }
}
