//! Пример CLI: читает JSON-снимок сметы и выводит рассчитанные итоги.

use std::env;
use std::fs::File;

use quote_pricing_engine::{QuoteSnapshot, QuoteTotals, RawSnapshot};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = if let Some(path) = env::args().nth(1) {
        path
    } else {
        println!("Usage: quote-pricing-engine <path-to-snapshot.json>");
        return Ok(());
    };

    let raw = RawSnapshot::from_reader(File::open(&path)?)?;
    let snapshot = QuoteSnapshot::parse(&raw)?;
    let totals = QuoteTotals::compute(&snapshot.document);

    println!(
        "Смета {} от {}, заказчик: {}",
        snapshot.meta.quote_number, snapshot.meta.issued_at, snapshot.meta.customer_name
    );
    println!("Работ: {}, валюта: {}", totals.activities.len(), totals.currency);
    for row in &totals.activities {
        println!(
            "  {}: итог без НДС {}, скидка {}, итог с НДС {}",
            row.name, row.subtotal, row.discount_amount, row.total_with_vat
        );
    }
    println!("Нетто-итог: {}", totals.grand_subtotal);
    println!("НДС: {}", totals.grand_vat);
    println!(
        "Общая наценка: {}, общая скидка: {}",
        totals.general_margin_amount, totals.general_discount_amount
    );
    println!(
        "Наценка всего: {} ({}%)",
        totals.total_margin_amount, totals.total_margin_percentage
    );
    println!("К оплате: {}", totals.grand_total);
    Ok(())
}
