//! Плоские строки счёта для биллинга, рассчитанные тем же движком.
//!
//! Платёжный обработчик работает с моделью «количество × цена × скидка ×
//! налог». Вместо параллельной упрощённой реализации каждая строка
//! отображается на документ из одной работы и считается общим конвейером,
//! поэтому итоги счёта и сметы не могут разойтись.

use crate::totals::QuoteTotals;
use crate::types::{
    Activity, ActivityId, BudgetDocument, CostType, Discount, DiscountBase, DiscountKind, Money,
    Resource, ResourceAssignment, ResourceId,
};
use serde::{Deserialize, Serialize};

/// Строка счёта платёжного обработчика.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeLine {
    /// Описание позиции.
    pub description: String,
    /// Количество единиц.
    pub quantity: Money,
    /// Цена за единицу.
    pub unit_price: Money,
    /// Скидка в процентах от суммы без налога.
    #[serde(default)]
    pub discount_percent: Money,
    /// Ставка налога в процентах.
    #[serde(default)]
    pub tax_percent: Money,
}

/// Итоги счёта по всем строкам.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeTotals {
    /// Сумма строк до скидок и налога.
    pub subtotal: Money,
    /// Сумма скидок.
    pub discount_total: Money,
    /// Сумма налога.
    pub tax_total: Money,
    /// Итог к оплате.
    pub total: Money,
}

/// Считает итоги счёта, отобразив строки на документ сметы.
#[must_use]
pub fn charge_totals(lines: &[ChargeLine]) -> ChargeTotals {
    let document = line_document(lines);
    let totals = QuoteTotals::compute(&document);
    // Нетто-итог документа учитывает скидки, поэтому сумма строк до скидок
    // берётся из промежуточных итогов работ.
    let subtotal = totals.activities.iter().map(|row| row.subtotal).sum();

    ChargeTotals {
        subtotal,
        discount_total: totals.total_activity_discounts,
        tax_total: totals.grand_vat,
        total: totals.grand_total,
    }
}

/// Отображает строки счёта на документ: по одной работе с одним
/// фиксированным назначением на строку.
fn line_document(lines: &[ChargeLine]) -> BudgetDocument {
    let mut resources = Vec::with_capacity(lines.len());
    let mut activities = Vec::with_capacity(lines.len());

    for (index, line) in lines.iter().enumerate() {
        let id = ResourceId(format!("line-{index}"));
        resources.push(Resource {
            id: id.clone(),
            name: line.description.clone(),
            cost_type: CostType::Fixed,
            price_per_hour: Money::ZERO,
            margin: None,
        });

        let discount = if line.discount_percent.is_zero() {
            None
        } else {
            Some(Discount {
                enabled: true,
                kind: DiscountKind::Percentage,
                value: line.discount_percent,
                apply_on: DiscountBase::Taxable,
            })
        };

        activities.push(Activity {
            id: ActivityId(format!("line-{index}")),
            name: line.description.clone(),
            resources: vec![ResourceAssignment {
                resource_id: id,
                hours: Money::ZERO,
                fixed_price: line.quantity * line.unit_price,
            }],
            vat: line.tax_percent,
            margin: None,
            discount,
        });
    }

    BudgetDocument {
        currency: String::new(),
        resources,
        activities,
        general_discount: Discount::disabled(),
        general_margin: None,
    }
}
