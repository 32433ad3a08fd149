//! # Super Privilege Flows
//!
//! Lucky-draw tickets cost tokens and, on a roll at or above the threshold,
//! grant a credit. Credits take companies off the market: a top company
//! bought with a claim is held for good, a user-created company can be
//! relisted later.

#[cfg(test)]
mod tests {
    use crate::harness::{name, tokens, Harness};
    use ec_06_marketplace::{MarketError, MarketplaceAdminApi, MarketplaceApi};
    use shared_types::{milli_ether, U256};

    // =============================================================================
    // LUCKY DRAW
    // =============================================================================

    #[test]
    fn test_lucky_draw_threshold() {
        // harness threshold is 10
        let h = Harness::with_draws(vec![9, 10, 109, 99]);
        let alice = h.player("alice", 0, 1_000);

        let outcomes: Vec<bool> = (0..4).map(|_| h.lucky_draw(alice).unwrap().won).collect();

        assert_eq!(outcomes, vec![false, true, false, true]);
        assert_eq!(h.market().super_privilege_count(&alice), 2);
        assert_eq!(h.token_balance(&alice), tokens(600));
    }

    #[test]
    fn test_lucky_draw_reports_roll() {
        let h = Harness::with_draws(vec![1_234]);
        let alice = h.player("alice", 0, 100);

        let outcome = h.lucky_draw(alice).unwrap();
        assert_eq!(outcome.roll, 34);
        assert!(outcome.won);
        assert_eq!(outcome.privilege_count, 1);
        assert!(h.token_balance(&alice).is_zero());
    }

    #[test]
    fn test_keccak_draws_eventually_win() {
        let h = Harness::new();
        let alice = h.player("alice", 0, 10_000);

        h.get_super_privilege(alice, 3);
        assert_eq!(h.market().super_privilege_count(&alice), 3);
    }

    #[test]
    fn test_raised_threshold_blocks_wins() {
        let h = Harness::with_draws(vec![95]);
        h.market().update_super_privilege_params(h.admin, 96, 1).unwrap();
        let alice = h.player("alice", 0, 10);

        assert!(!h.lucky_draw(alice).unwrap().won);
        assert_eq!(h.token_balance(&alice), tokens(9));
    }

    // =============================================================================
    // TOP COMPANIES HELD WITH A CLAIM
    // =============================================================================

    #[test]
    fn test_top_company_claimed_on_purchase() {
        let h = Harness::with_draws(vec![50]);
        let alice = h.player("alice", 1_000, 100);
        let bob = h.player("bob", 1_000, 0);
        h.get_super_privilege(alice, 1);

        h.buy_top(alice, "Walmart", true).unwrap();

        let walmart = h.company("Walmart");
        assert!(walmart.is_permanent);
        assert!(!walmart.is_onsale);
        assert_eq!(h.market().super_privilege_count(&alice), 0);
        assert!(matches!(
            h.buy_with(bob, "Walmart", false, milli_ether(100)),
            Err(MarketError::NotForSale(_))
        ));
    }

    #[test]
    fn test_claimed_top_company_stays_off_market() {
        let h = Harness::with_draws(vec![50]);
        let alice = h.player("alice", 1_000, 300);
        h.get_super_privilege(alice, 2);
        h.buy_top(alice, "Apple", true).unwrap();

        let ctx = h.ctx(alice);
        assert!(matches!(
            h.market().put_company_onsale(&ctx, &name("Apple"), milli_ether(5)),
            Err(MarketError::TopCompanyNotResellable(_))
        ));
        assert!(matches!(
            h.market().permanently_own_my_company(&ctx, &name("Apple")),
            Err(MarketError::Forbidden(_))
        ));
        // failed calls keep the spare credit
        assert_eq!(h.market().super_privilege_count(&alice), 1);
    }

    #[test]
    fn test_resale_with_claim() {
        let h = Harness::with_draws(vec![50]);
        let alice = h.player("alice", 1_000, 0);
        let bob = h.player("bob", 1_000, 100);
        h.get_super_privilege(bob, 1);
        h.buy_top(alice, "Google", false).unwrap();

        h.buy(bob, "Google", true).unwrap();

        let google = h.company("Google");
        assert_eq!(google.owner, bob);
        assert!(google.is_permanent);
        assert!(!google.is_onsale);
        assert_eq!(google.price, milli_ether(2));
    }

    #[test]
    fn test_claim_without_credit_changes_nothing() {
        let h = Harness::with_draws(vec![50]);
        let alice = h.player("alice", 1_000, 0);
        let bob = h.player("bob", 1_000, 0);

        assert!(matches!(
            h.buy_top(alice, "Walmart", true),
            Err(MarketError::NoSuperPrivilege(_))
        ));
        assert!(h.market().company(&name("Walmart")).is_none());
        assert_eq!(h.native(&alice), milli_ether(1_000));

        h.buy_top(alice, "Walmart", false).unwrap();
        assert!(matches!(
            h.buy(bob, "Walmart", true),
            Err(MarketError::NoSuperPrivilege(_))
        ));
        assert_eq!(h.company("Walmart").owner, alice);
        assert_eq!(h.native(&bob), milli_ether(1_000));
        assert_eq!(h.market().owned_performance(&alice), 51);
        assert_eq!(h.market().owned_performance(&bob), 0);
    }

    // =============================================================================
    // USER-CREATED COMPANIES
    // =============================================================================

    #[test]
    fn test_permanent_cycle_for_created_company() {
        let h = Harness::with_draws(vec![50]);
        let alice = h.player("alice", 1_000, 300);
        let bob = h.player("bob", 1_000, 0);
        h.create(alice, "Ethecom", milli_ether(10)).unwrap();
        h.get_super_privilege(alice, 1);

        let ctx = h.ctx(alice);
        h.market()
            .permanently_own_my_company(&ctx, &name("Ethecom"))
            .unwrap();
        assert!(h.company("Ethecom").is_permanent);
        assert!(matches!(
            h.buy(bob, "Ethecom", false),
            Err(MarketError::NotForSale(_))
        ));
        assert!(matches!(
            h.market().permanently_own_my_company(&h.ctx(alice), &name("Ethecom")),
            Err(MarketError::AlreadyPermanent(_))
        ));

        h.market()
            .put_company_onsale(&h.ctx(alice), &name("Ethecom"), milli_ether(3))
            .unwrap();
        let ethecom = h.company("Ethecom");
        assert!(ethecom.is_onsale);
        assert!(!ethecom.is_permanent);
        assert_eq!(ethecom.price, milli_ether(3));

        h.buy(bob, "Ethecom", false).unwrap();
        assert_eq!(h.company("Ethecom").owner, bob);
        // last_price was 0, so the whole price counts as profit
        assert_eq!(
            h.native(&alice),
            milli_ether(1_000) + milli_ether(3) * U256::from(8u64) / U256::from(10u64)
        );
    }

    #[test]
    fn test_listing_needs_permanent_company() {
        let h = Harness::with_draws(vec![50]);
        let alice = h.player("alice", 1_000, 100);
        h.create(alice, "Ethecom", milli_ether(10)).unwrap();

        let ctx = h.ctx(alice);
        assert!(matches!(
            h.market().put_company_onsale(&ctx, &name("Ethecom"), milli_ether(3)),
            Err(MarketError::AlreadyOnsale(_))
        ));
    }

    #[test]
    fn test_permanent_without_credit_rejected() {
        let h = Harness::with_draws(vec![0]);
        let alice = h.player("alice", 1_000, 100);
        h.create(alice, "Ethecom", milli_ether(10)).unwrap();

        assert!(matches!(
            h.market().permanently_own_my_company(&h.ctx(alice), &name("Ethecom")),
            Err(MarketError::NoSuperPrivilege(_))
        ));
        assert!(h.company("Ethecom").is_onsale);
    }
}
