//! # Referral Rewards
//!
//! The rewarder is funded from the deployer's share of the supply and pays
//! whole tokens in owner-submitted batches, independent of the marketplace.

#[cfg(test)]
mod tests {
    use crate::harness::{tokens, Harness};
    use ec_05_referral::{ReferralError, MAX_BATCH};
    use shared_types::{Address, U256};

    #[test]
    fn test_batch_pays_receivers() {
        let h = Harness::new();
        let mut rewarder = h.deployment.deploy_referral_rewarder(1_000).unwrap();
        let alice = Address::from_label("alice");
        let bob = Address::from_label("bob");

        rewarder
            .reward(h.admin, &[alice, bob], &[30, 70], 2)
            .unwrap();

        assert_eq!(h.token_balance(&alice), tokens(30));
        assert_eq!(h.token_balance(&bob), tokens(70));
        assert_eq!(rewarder.balance(), tokens(900));
    }

    #[test]
    fn test_count_limits_batch() {
        let h = Harness::new();
        let mut rewarder = h.deployment.deploy_referral_rewarder(100).unwrap();
        let alice = Address::from_label("alice");
        let bob = Address::from_label("bob");

        rewarder.reward(h.admin, &[alice, bob], &[10, 10], 1).unwrap();

        assert_eq!(h.token_balance(&alice), tokens(10));
        assert_eq!(h.token_balance(&bob), U256::zero());
    }

    #[test]
    fn test_rejected_batches_pay_nothing() {
        let h = Harness::new();
        let mut rewarder = h.deployment.deploy_referral_rewarder(50).unwrap();
        let alice = Address::from_label("alice");
        let mallory = Address::from_label("mallory");

        assert!(matches!(
            rewarder.reward(mallory, &[mallory], &[1], 1),
            Err(ReferralError::Unauthorized(_))
        ));
        assert!(matches!(
            rewarder.reward(h.admin, &[alice, alice], &[30, 30], 2),
            Err(ReferralError::InsufficientBalance { .. })
        ));
        assert!(matches!(
            rewarder.reward(h.admin, &[alice], &[1, 2], 1),
            Err(ReferralError::InvalidInput(_))
        ));
        let crowd = vec![alice; MAX_BATCH + 1];
        let amounts = vec![0; MAX_BATCH + 1];
        assert!(matches!(
            rewarder.reward(h.admin, &crowd, &amounts, MAX_BATCH + 1),
            Err(ReferralError::InvalidInput(_))
        ));
        assert!(h.token_balance(&alice).is_zero());
        assert_eq!(rewarder.balance(), tokens(50));
    }

    #[test]
    fn test_rewarder_does_not_touch_market_reserve() {
        let h = Harness::new();
        let reserve = h.token_balance(&h.market().address());

        let mut rewarder = h.deployment.deploy_referral_rewarder(10).unwrap();
        rewarder
            .reward(h.admin, &[Address::from_label("alice")], &[10], 1)
            .unwrap();

        assert_eq!(h.token_balance(&h.market().address()), reserve);
    }
}
