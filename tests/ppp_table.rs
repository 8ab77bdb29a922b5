use std::collections::BTreeSet;

use parity::{
    config::Settings,
    models::ratio_table::RatioTable,
    utils::discount::{DiscountPolicy, get_discount_percent},
};

fn shipped_table() -> RatioTable {
    RatioTable::load(concat!(env!("CARGO_MANIFEST_DIR"), "/data/ppp.json")).unwrap()
}

fn percent(amount: f64) -> u32 {
    (amount * 100.0).round() as u32
}

#[test]
fn shipped_table_covers_every_default_step() {
    let table = shipped_table();
    let policy = DiscountPolicy::default();

    let discounts: BTreeSet<u32> = table
        .country_codes()
        .map(|code| percent(get_discount_percent(&table, code, &policy)))
        .collect();

    assert_eq!(
        discounts.into_iter().collect::<Vec<_>>(),
        vec![0, 25, 30, 35, 40, 45, 50, 55]
    );
}

#[test]
fn every_result_is_a_policy_step() {
    let table = shipped_table();
    let policy = DiscountPolicy::default();
    let steps = policy.steps();

    for code in table.country_codes() {
        let amount = get_discount_percent(&table, code, &policy);
        assert!(steps.contains(&amount), "{code} produced {amount}");
    }
}

#[test]
fn shipped_config_lists_steps_still_needing_price_ids() {
    let settings = Settings::load(&Some(
        concat!(env!("CARGO_MANIFEST_DIR"), "/config.toml").to_string(),
    ))
    .unwrap();

    assert_eq!(
        settings
            .location
            .prices
            .missing_steps(&settings.location.policy),
        vec![0.0, 0.25, 0.3, 0.35, 0.4, 0.5, 0.55]
    );
    assert_eq!(
        settings
            .parity_coupon
            .coupons
            .missing_steps(&settings.parity_coupon.policy),
        vec![0.0]
    );
    assert_eq!(settings.missing_skus().len(), 7);
}

#[test]
fn slovakia_gets_forty_five_percent() {
    let table = shipped_table();
    assert_eq!(
        get_discount_percent(&table, "SK", &DiscountPolicy::default()),
        0.45
    );
}
