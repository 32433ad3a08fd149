//! # Yield Flows
//!
//! Owners earn `performance` tokens per day out of the marketplace reserve.
//! Performance changes settle the yield earned so far, so a claim covers
//! every segment at the rate that applied to it.

#[cfg(test)]
mod tests {
    use crate::harness::{tokens, Harness};
    use ec_06_marketplace::{MarketError, MarketplaceAdminApi, MarketplaceApi};
    use shared_types::U256;

    /// 1000 blocks per day: 51 performance earns 5_100_000 units per block.
    fn harness() -> Harness {
        let h = Harness::with_draws(vec![0]);
        h.market().update_blocks_per_day(h.admin, 1_000).unwrap();
        h
    }

    #[test]
    fn test_claim_one_day_of_yield() {
        let h = harness();
        let alice = h.player("alice", 1_000, 0);
        h.buy_top(alice, "Walmart", false).unwrap();
        let bought_at = h.block();
        assert_eq!(h.market().last_token_claimed_block(&alice), bought_at);

        h.advance(999);
        let ctx = h.ctx(alice);
        assert_eq!(ctx.block_number, bought_at + 1_000);
        let paid = h.market().claim_my_token(&ctx).unwrap();

        assert_eq!(paid, tokens(51));
        assert_eq!(h.token_balance(&alice), tokens(51));
        assert_eq!(h.market().last_token_claimed_block(&alice), bought_at + 1_000);
        assert!(h
            .market()
            .claimable_tokens(&alice, bought_at + 1_000)
            .unwrap()
            .is_zero());
    }

    #[test]
    fn test_claimable_preview_matches_claim() {
        let h = harness();
        let alice = h.player("alice", 1_000, 0);
        h.buy_top(alice, "Apple", false).unwrap();
        h.advance(41);

        let preview = h.market().claimable_tokens(&alice, h.block() + 1).unwrap();
        let paid = h.market().claim_my_token(&h.ctx(alice)).unwrap();

        assert_eq!(preview, paid);
        assert_eq!(paid, U256::from(5_100_000u64 * 42));
    }

    #[test]
    fn test_yield_settles_at_each_performance_change() {
        let h = harness();
        let alice = h.player("alice", 1_000, 0);
        h.buy_top(alice, "Walmart", false).unwrap();
        let start = h.block();

        // 10 blocks at 51
        h.advance(9);
        h.buy_top(alice, "Exxon Mobil", false).unwrap();
        assert_eq!(h.block(), start + 10);
        assert_eq!(h.market().lock().accrued_yield(&alice), U256::from(51_000_000u64));

        // 10 blocks at 102
        h.advance(9);
        let paid = h.market().claim_my_token(&h.ctx(alice)).unwrap();
        assert_eq!(paid, U256::from(51_000_000u64 + 102_000_000u64));
        assert!(h.market().lock().accrued_yield(&alice).is_zero());
    }

    #[test]
    fn test_seller_keeps_earned_yield() {
        let h = harness();
        let alice = h.player("alice", 1_000, 0);
        let bob = h.player("bob", 1_000, 0);
        h.buy_top(alice, "Walmart", false).unwrap();
        h.buy_top(alice, "Apple", false).unwrap();
        let start = h.block();

        h.advance(19);
        h.buy(bob, "Walmart", false).unwrap();
        let sold_at = h.block();
        assert_eq!(sold_at, start + 20);
        assert_eq!(h.market().owned_performance(&alice), 51);
        assert_eq!(h.market().owned_performance(&bob), 51);

        // one block at 51 before Apple, 20 at 102, then 20 at 51
        h.advance(19);
        let paid = h.market().claim_my_token(&h.ctx(alice)).unwrap();
        let before_sale = U256::from(10_200_000u64 * 20) + U256::from(5_100_000u64);
        assert_eq!(paid, before_sale + U256::from(5_100_000u64 * 20));

        let bob_paid = h.market().claim_my_token(&h.ctx(bob)).unwrap();
        assert_eq!(bob_paid, U256::from(5_100_000u64 * 21));
    }

    #[test]
    fn test_unclaimed_yield_after_selling_everything() {
        let h = harness();
        let alice = h.player("alice", 1_000, 0);
        let bob = h.player("bob", 1_000, 0);
        h.buy_top(alice, "Walmart", false).unwrap();
        h.advance(4);
        h.buy(bob, "Walmart", false).unwrap();

        assert_eq!(h.market().owned_performance(&alice), 0);
        assert_eq!(
            h.market().claimable_tokens(&alice, h.block() + 100).unwrap(),
            U256::from(5_100_000u64 * 5)
        );
        let err = h.market().claim_my_token(&h.ctx(alice)).unwrap_err();
        assert!(matches!(err, MarketError::NoEligiblePerformance(_)));
    }

    #[test]
    fn test_blocks_per_day_change_applies_to_open_segment() {
        let h = harness();
        let alice = h.player("alice", 1_000, 0);
        h.buy_top(alice, "Walmart", false).unwrap();
        h.advance(9);

        h.market().update_blocks_per_day(h.admin, 2_000).unwrap();
        let paid = h.market().claim_my_token(&h.ctx(alice)).unwrap();
        assert_eq!(paid, U256::from(2_550_000u64 * 10));
    }

    #[test]
    fn test_claim_beyond_reserve_rejected() {
        let h = harness();
        let alice = h.player("alice", 1_000, 0);
        h.buy_top(alice, "Walmart", false).unwrap();
        let reserve = h.token_balance(&h.market().address());

        // 1.9e9 tokens at 51 per day runs out after ~37 million days
        h.advance(1_000 * 40_000_000);
        let err = h.market().claim_my_token(&h.ctx(alice)).unwrap_err();
        assert!(matches!(
            err,
            MarketError::InsufficientContractBalance { available, .. } if available == reserve
        ));
        assert_eq!(h.token_balance(&alice), U256::zero());
    }
}
