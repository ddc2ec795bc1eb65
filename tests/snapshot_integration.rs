use quote_pricing_engine::{
    ChargeLine, CostType, DiscountBase, DiscountKind, QuoteSnapshot, QuoteTotals, RawSnapshot,
    charge_totals,
};
use rust_decimal_macros::dec;

fn load_fixture(name: &str) -> QuoteSnapshot {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    let json = std::fs::read_to_string(path).expect("read fixture");
    let raw = RawSnapshot::from_str(&json);
    QuoteSnapshot::parse(&raw).expect("parse fixture")
}

#[test]
fn parses_quote_fixture() {
    let snapshot = load_fixture("quote_snapshot.json");
    assert_eq!(snapshot.meta.quote_number, "Q-2026-0042");
    assert_eq!(snapshot.meta.customer_name, "ООО «Вектор»");

    let doc = &snapshot.document;
    assert_eq!(doc.currency, "EUR");
    assert_eq!(doc.resources.len(), 3);
    assert_eq!(doc.resources[0].cost_type, CostType::Hourly);
    assert_eq!(doc.resources[1].cost_type, CostType::Quantity);
    assert_eq!(doc.resources[2].cost_type, CostType::Fixed);
    assert_eq!(doc.resources[2].margin, None);

    assert_eq!(doc.activities.len(), 2);
    let launch_discount = doc.activities[1].discount.as_ref().expect("discount");
    assert_eq!(launch_discount.kind, DiscountKind::Fixed);
    assert_eq!(launch_discount.apply_on, DiscountBase::WithVat);
    assert!(doc.general_margin.as_ref().expect("margin").enabled);
}

#[test]
fn computes_fixture_totals() {
    let snapshot = load_fixture("quote_snapshot.json");
    let totals = QuoteTotals::compute(&snapshot.document);

    // Разработка: 500 -> 600 (наценка ресурса) -> 660 (наценка работы),
    // скидка 66 от базы без НДС, итог (660 - 66) * 1.22.
    let build = &totals.activities[0];
    assert_eq!(build.subtotal, dec!(660));
    assert_eq!(build.discount_amount, dec!(66));
    assert_eq!(build.total_with_vat, dec!(724.68));
    assert_eq!(build.net_contribution, dec!(594));
    assert_eq!(build.vat_contribution, dec!(130.68));

    // Запуск: 400 + 200 = 600, скидка 61 от суммы с НДС 732,
    // нетто восстанавливается делением: (732 - 61) / 1.22 = 550.
    let launch = &totals.activities[1];
    assert_eq!(launch.subtotal, dec!(600));
    assert_eq!(launch.discount_amount, dec!(61));
    assert_eq!(launch.total_with_vat, dec!(671));
    assert_eq!(launch.net_contribution, dec!(550));
    assert_eq!(launch.vat_contribution, dec!(121));

    assert_eq!(totals.grand_subtotal, dec!(1144));
    assert_eq!(totals.grand_vat, dec!(251.68));
    assert_eq!(totals.total_before_general_discount, dec!(1395.68));
    assert_eq!(totals.total_activity_discounts, dec!(127));

    assert_eq!(totals.general_margin_amount, dec!(139.568));
    assert_eq!(totals.total_after_general_margin, dec!(1535.248));
    // База общей скидки — нетто-итог до общей наценки.
    assert_eq!(totals.general_discount_amount, dec!(57.2));
    assert_eq!(totals.grand_total, dec!(1478.048));

    // Наценки: 100 (ресурс) + 60 (работа) + 139.568 (общая).
    assert_eq!(totals.total_margin_amount, dec!(299.568));
}

#[test]
fn wire_names_match_stored_snapshots() {
    assert_eq!(
        serde_json::to_value(CostType::Quantity).expect("serialize"),
        serde_json::json!("quantity")
    );
    assert_eq!(
        serde_json::to_value(DiscountBase::WithVat).expect("serialize"),
        serde_json::json!("withVat")
    );
    assert_eq!(
        serde_json::to_value(DiscountKind::Percentage).expect("serialize"),
        serde_json::json!("percentage")
    );
}

#[test]
fn charge_lines_reuse_the_quote_engine() {
    let lines = vec![
        ChargeLine {
            description: "Подписка, 2 места".to_string(),
            quantity: dec!(2),
            unit_price: dec!(100),
            discount_percent: dec!(10),
            tax_percent: dec!(22),
        },
        ChargeLine {
            description: "Разовая настройка".to_string(),
            quantity: dec!(1),
            unit_price: dec!(250),
            discount_percent: dec!(0),
            tax_percent: dec!(0),
        },
    ];

    let totals = charge_totals(&lines);
    assert_eq!(totals.subtotal, dec!(450));
    assert_eq!(totals.discount_total, dec!(20));
    // Налог считается от суммы после скидки: 180 * 0.22.
    assert_eq!(totals.tax_total, dec!(39.6));
    assert_eq!(totals.total, dec!(469.6));
}

#[test]
fn malformed_snapshot_surfaces_a_json_error() {
    let raw = RawSnapshot::from_str("{\"meta\": {}}");
    assert!(QuoteSnapshot::parse(&raw).is_err());
}
