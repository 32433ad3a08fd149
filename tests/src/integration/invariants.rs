//! # Randomized Invariants
//!
//! Seeded random sessions of every player-facing operation. After each step:
//!
//! - an account's performance equals the performance of the companies it owns
//! - native value and tokens are conserved
//! - a permanently held company is never on sale
//! - a rejected operation leaves no trace

#[cfg(test)]
mod tests {
    use crate::harness::{name, Harness, COMPANY_LIST};
    use ec_01_token::TokenApi;
    use ec_06_marketplace::{AccountState, Company, MarketplaceApi};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use shared_types::{milli_ether, Address, LogoUrl, U256};

    const PLAYERS: usize = 5;
    const STEPS: usize = 400;

    #[derive(Debug, PartialEq)]
    struct Snapshot {
        native: Vec<U256>,
        tokens: Vec<U256>,
        accounts: Vec<AccountState>,
        companies: Vec<Company>,
    }

    fn snapshot(h: &Harness, players: &[Address]) -> Snapshot {
        let market = h.market().lock();
        let mut companies: Vec<Company> = players
            .iter()
            .flat_map(|p| market.companies_owned_by(p).cloned().collect::<Vec<_>>())
            .collect();
        companies.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Snapshot {
            native: players.iter().map(|p| h.native(p)).collect(),
            tokens: players.iter().map(|p| h.token_balance(p)).collect(),
            accounts: players.iter().map(|p| market.account(p)).collect(),
            companies,
        }
    }

    fn check_invariants(h: &Harness, players: &[Address], funded: U256) {
        let market_address = h.market().address();
        {
            let market = h.market().lock();
            for player in players {
                let owned: u64 = market.companies_owned_by(player).map(|c| c.performance).sum();
                assert_eq!(market.owned_performance(player), owned);
                for company in market.companies_owned_by(player) {
                    assert!(!(company.is_permanent && company.is_onsale), "{}", company.name);
                }
            }
        }

        let native = players
            .iter()
            .fold(h.native(&market_address), |acc, p| acc + h.native(p));
        assert_eq!(native, funded);

        let token = h.deployment.token.read();
        let held = players.iter().fold(
            token.balance_of(&market_address) + token.balance_of(&h.admin),
            |acc, p| acc + token.balance_of(p),
        );
        assert_eq!(held, token.total_supply());
    }

    fn run_session(seed: u64) {
        let h = Harness::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let players: Vec<Address> = (0..PLAYERS)
            .map(|i| h.player(&format!("player-{seed}-{i}"), 50_000, 2_000))
            .collect();
        let funded = milli_ether(50_000) * U256::from(PLAYERS as u64);
        let mut created: Vec<String> = Vec::new();

        for step in 0..STEPS {
            let player = players[rng.gen_range(0..PLAYERS)];
            let before = snapshot(&h, &players);
            let result = match rng.gen_range(0..8) {
                0 | 1 => {
                    let (company, _) = COMPANY_LIST[rng.gen_range(0..COMPANY_LIST.len())];
                    h.buy_top(player, company, rng.gen_bool(0.2))
                }
                2 | 3 => {
                    let pick = rng.gen_range(0..COMPANY_LIST.len() + created.len());
                    let company = match COMPANY_LIST.get(pick) {
                        Some((company, _)) => (*company).to_string(),
                        None => created[pick - COMPANY_LIST.len()].clone(),
                    };
                    match h.market().company(&name(&company)) {
                        Some(listed) => h.buy_with(player, &company, rng.gen_bool(0.2), listed.price),
                        None => h.buy_top(player, &company, false),
                    }
                }
                4 => {
                    let company = format!("Venture {step}");
                    let price = milli_ether(rng.gen_range(1..50));
                    let result = h.create(player, &company, price);
                    if result.is_ok() {
                        created.push(company);
                    }
                    result
                }
                5 => h.lucky_draw(player).map(|_| ()),
                6 => h.market().claim_my_token(&h.ctx(player)).map(|_| ()),
                _ => {
                    let Some(company) = created.get(rng.gen_range(0..created.len().max(1))) else {
                        continue;
                    };
                    let ctx = h.ctx(player);
                    match rng.gen_range(0..3) {
                        0 => h.market().permanently_own_my_company(&ctx, &name(company)),
                        1 => h
                            .market()
                            .put_company_onsale(&ctx, &name(company), milli_ether(2)),
                        _ => {
                            let logo = LogoUrl::new("relisted.example").expect("logo");
                            h.market().update_logo_url(&ctx, &name(company), &logo)
                        }
                    }
                }
            };

            if result.is_err() {
                assert_eq!(snapshot(&h, &players), before, "step {step}");
            }
            check_invariants(&h, &players, funded);
        }
    }

    #[test]
    fn test_random_sessions_hold_invariants() {
        for seed in [1, 7, 42] {
            run_session(seed);
        }
    }
}
