//! # Event Log
//!
//! State-changing operations publish to the deployment's event log, in
//! order, stamped with the block of the call. Rejected operations publish
//! nothing.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::harness::{name, Harness};
    use ec_06_marketplace::MarketplaceApi;
    use shared_bus::{EventFilter, EventTopic, MarketEvent};
    use shared_types::{milli_ether, LogoUrl};
    use tokio::time::timeout;

    // =============================================================================
    // LOG CONTENTS
    // =============================================================================

    #[test]
    fn test_top_purchase_publishes_creation() {
        let h = Harness::new();
        let alice = h.player("alice", 1_000, 0);

        h.buy_top(alice, "Walmart", false).unwrap();

        let record = h.deployment.events.last().unwrap();
        assert_eq!(record.block_number, h.block());
        assert_eq!(
            record.event,
            MarketEvent::CompanyCreated {
                name: name("Walmart"),
                price: milli_ether(1),
                owner: alice,
            }
        );
    }

    #[test]
    fn test_claimed_purchase_publishes_sale_status() {
        let h = Harness::with_draws(vec![50]);
        let alice = h.player("alice", 1_000, 100);
        h.get_super_privilege(alice, 1);
        let before = h.deployment.events.last().unwrap().sequence;

        h.buy_top(alice, "Apple", true).unwrap();

        let records = h.deployment.events.events_since(before);
        let events: Vec<&MarketEvent> = records.iter().map(|r| &r.event).collect();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], MarketEvent::CompanyCreated { .. }));
        assert_eq!(
            events[1],
            &MarketEvent::CompanySaleStatusChanged {
                name: name("Apple"),
                sale_status: false,
            }
        );
    }

    #[test]
    fn test_session_event_sequence() {
        let h = Harness::with_draws(vec![50]);
        let alice = h.player("alice", 1_000, 200);
        let bob = h.player("bob", 1_000, 0);

        h.buy_top(alice, "Google", false).unwrap();
        h.buy(bob, "Google", false).unwrap();
        h.create(alice, "Ethecom", milli_ether(4)).unwrap();
        let logo = LogoUrl::new("ethecom.io").unwrap();
        h.market()
            .update_logo_url(&h.ctx(alice), &name("Ethecom"), &logo)
            .unwrap();
        h.lucky_draw(alice).unwrap();
        h.advance(100);
        h.market().claim_my_token(&h.ctx(bob)).unwrap();

        let kinds: Vec<&str> = h
            .deployment
            .events
            .events()
            .iter()
            .map(|r| r.event.kind())
            .collect();
        assert_eq!(
            kinds,
            vec![
                "company_created",
                "company_transferred",
                "company_created",
                "company_logo_updated",
                "super_privilege_lucky_draw_result",
                "tokens_claimed",
            ]
        );
        let sequences: Vec<u64> = h.deployment.events.events().iter().map(|r| r.sequence).collect();
        assert_eq!(sequences, (1..=6).collect::<Vec<_>>());
    }

    #[test]
    fn test_transfer_event_carries_new_price() {
        let h = Harness::new();
        let alice = h.player("alice", 1_000, 0);
        let bob = h.player("bob", 1_000, 0);
        h.buy_top(alice, "Exxon Mobil", false).unwrap();

        h.buy(bob, "Exxon Mobil", false).unwrap();

        assert_eq!(
            h.deployment.events.last().unwrap().event,
            MarketEvent::CompanyTransferred {
                name: name("Exxon Mobil"),
                old_owner: alice,
                owner: bob,
                new_price: milli_ether(2),
            }
        );
    }

    #[test]
    fn test_rejections_publish_nothing() {
        let h = Harness::new();
        let alice = h.player("alice", 1_000, 0);
        h.buy_top(alice, "Walmart", false).unwrap();
        let published = h.deployment.events.events().len();

        assert!(h.buy_top(alice, "Walmart", false).is_err());
        assert!(h.buy(alice, "Walmart", false).is_err());
        assert!(h.create(alice, "Ethecom", milli_ether(1)).is_err());
        assert!(h.lucky_draw(alice).is_err());

        assert_eq!(h.deployment.events.events().len(), published);
    }

    // =============================================================================
    // SUBSCRIPTIONS
    // =============================================================================

    #[tokio::test]
    async fn test_subscriber_receives_filtered_events() {
        let h = Harness::with_draws(vec![95]);
        let alice = h.player("alice", 1_000, 100);
        let mut draws = h
            .deployment
            .events
            .subscribe(EventFilter::topics(vec![EventTopic::LuckyDraw]));

        h.buy_top(alice, "Walmart", false).unwrap();
        h.lucky_draw(alice).unwrap();

        let record = timeout(Duration::from_secs(1), draws.recv())
            .await
            .expect("lucky draw event")
            .unwrap();
        assert_eq!(
            record.event,
            MarketEvent::SuperPrivilegeLuckyDrawResult {
                account: alice,
                roll: 95,
                won: true,
                privilege_count: 1,
            }
        );
        assert_eq!(record.sequence, 2);
        assert!(draws.try_recv().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_subscriber_follows_trading_task() {
        let h = std::sync::Arc::new(Harness::new());
        let mut ownership = h
            .deployment
            .events
            .subscribe(EventFilter::topics(vec![EventTopic::Ownership]));

        let trader = h.clone();
        tokio::task::spawn_blocking(move || {
            let alice = trader.player("alice", 1_000, 0);
            let bob = trader.player("bob", 1_000, 0);
            trader.buy_top(alice, "Facebook", false).unwrap();
            trader.buy(bob, "Facebook", false).unwrap();
        })
        .await
        .unwrap();

        let first = ownership.recv().await.unwrap();
        let second = ownership.recv().await.unwrap();
        assert!(matches!(first.event, MarketEvent::CompanyCreated { .. }));
        assert!(matches!(second.event, MarketEvent::CompanyTransferred { .. }));
        assert_eq!(second.event.company(), Some(&name("Facebook")));
    }
}
