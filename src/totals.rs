//! Свод документа: агрегация работ, общий уровень и отчётные показатели.

use crate::activity::{
    activity_discount_amount, activity_subtotal, activity_total_with_vat, enabled_discount,
};
use crate::resource::{resource_cost, resource_cost_without_margin};
use crate::types::{
    Activity, ActivityId, BudgetDocument, DiscountBase, DiscountKind, Money, Resource,
};
use crate::utils::{percent_factor, percent_of};
use rust_decimal::Decimal;
use serde::Serialize;

/// Вклад работы в общий свод: пара `(нетто, НДС)`.
///
/// Для скидки от суммы с НДС нетто восстанавливается обратным делением из
/// уже сниженной суммы. При `vat == -100` множитель НДС равен нулю; такой
/// вклад обнуляется вместо деления на ноль.
#[must_use]
pub fn activity_contribution(resources: &[Resource], activity: &Activity) -> (Money, Money) {
    let subtotal = activity_subtotal(resources, activity);
    match enabled_discount(activity).map(|discount| discount.apply_on) {
        Some(DiscountBase::Taxable) => {
            let net = subtotal - activity_discount_amount(resources, activity);
            (net, percent_of(net, activity.vat))
        }
        Some(DiscountBase::WithVat) => {
            let vat_factor = percent_factor(activity.vat);
            if vat_factor.is_zero() {
                return (Decimal::ZERO, Decimal::ZERO);
            }
            let gross = subtotal * vat_factor;
            let net = (gross - activity_discount_amount(resources, activity)) / vat_factor;
            (net, percent_of(net, activity.vat))
        }
        None => (subtotal, percent_of(subtotal, activity.vat)),
    }
}

/// Нетто-итог документа по всем работам, в порядке документа.
#[must_use]
pub fn grand_subtotal(document: &BudgetDocument) -> Money {
    document
        .activities
        .iter()
        .map(|activity| activity_contribution(&document.resources, activity).0)
        .sum()
}

/// Суммарный НДС документа по всем работам, в порядке документа.
#[must_use]
pub fn grand_vat(document: &BudgetDocument) -> Money {
    document
        .activities
        .iter()
        .map(|activity| activity_contribution(&document.resources, activity).1)
        .sum()
}

/// Итог документа до общей наценки и общей скидки.
#[must_use]
pub fn grand_total_before_general_discount(document: &BudgetDocument) -> Money {
    grand_subtotal(document) + grand_vat(document)
}

/// Сумма всех скидок уровня работ (только для отображения).
#[must_use]
pub fn total_activity_discounts(document: &BudgetDocument) -> Money {
    document
        .activities
        .iter()
        .map(|activity| activity_discount_amount(&document.resources, activity))
        .sum()
}

/// Сумма общей наценки документа; ноль при выключенной или нулевой наценке.
#[must_use]
pub fn general_margin_amount(document: &BudgetDocument) -> Money {
    match &document.general_margin {
        Some(margin) if margin.enabled && !margin.value.is_zero() => {
            percent_of(grand_total_before_general_discount(document), margin.value)
        }
        _ => Decimal::ZERO,
    }
}

/// Итог документа после общей наценки.
#[must_use]
pub fn total_after_general_margin(document: &BudgetDocument) -> Money {
    let total = grand_total_before_general_discount(document);
    match &document.general_margin {
        Some(margin) if margin.enabled => total * percent_factor(margin.value),
        _ => total,
    }
}

/// Сумма общей скидки документа.
///
/// База `Taxable` — нетто-итог до общей наценки, даже если наценка уже
/// применена; база `WithVat` — итог после наценки. Фиксированная сумма не
/// ограничивается базой.
#[must_use]
pub fn general_discount_amount(document: &BudgetDocument) -> Money {
    let discount = &document.general_discount;
    if !discount.enabled || discount.value.is_zero() {
        return Decimal::ZERO;
    }
    let base = match discount.apply_on {
        DiscountBase::Taxable => grand_subtotal(document),
        DiscountBase::WithVat => total_after_general_margin(document),
    };
    match discount.kind {
        DiscountKind::Percentage => percent_of(base, discount.value),
        DiscountKind::Fixed => discount.value,
    }
}

/// Итоговая сумма к оплате по документу.
#[must_use]
pub fn grand_total(document: &BudgetDocument) -> Money {
    total_after_general_margin(document) - general_discount_amount(document)
}

/// Суммарная наценка документа: дельты ресурсов, дельты работ и общая
/// наценка. Только для отображения; в расчёт итогов не входит.
#[must_use]
pub fn total_margin_amount(document: &BudgetDocument) -> Money {
    let mut total = Decimal::ZERO;
    for activity in &document.activities {
        let mut margined_sum = Decimal::ZERO;
        for assignment in &activity.resources {
            let with_margin = resource_cost(&document.resources, assignment);
            let without_margin = resource_cost_without_margin(&document.resources, assignment);
            total += with_margin - without_margin;
            margined_sum += with_margin;
        }
        // Дельта работы считается от суммы, уже учитывающей наценки ресурсов.
        if let Some(margin) = activity.margin {
            if margin > Decimal::ZERO {
                total += percent_of(margined_sum, margin);
            }
        }
    }
    total + general_margin_amount(document)
}

/// Суммарная наценка в процентах от итога до общей скидки; ноль при
/// нулевом знаменателе.
#[must_use]
pub fn total_margin_percentage(document: &BudgetDocument) -> Money {
    let total_before = grand_total_before_general_discount(document);
    if total_before.is_zero() {
        return Decimal::ZERO;
    }
    total_margin_amount(document) / total_before * Decimal::ONE_HUNDRED
}

/// Строка свода по одной работе для табличного отображения.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityBreakdown {
    /// Идентификатор работы.
    pub id: ActivityId,
    /// Название работы.
    pub name: String,
    /// Промежуточный итог до НДС и скидки.
    pub subtotal: Money,
    /// Сумма скидки работы.
    pub discount_amount: Money,
    /// Итог работы с НДС.
    pub total_with_vat: Money,
    /// Вклад работы в нетто-итог документа.
    pub net_contribution: Money,
    /// Вклад работы в суммарный НДС документа.
    pub vat_contribution: Money,
}

/// Полный свод сметы, рассчитанный за один вызов.
///
/// Все значения не округлены; округление и форматирование — задача
/// отображающего слоя.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteTotals {
    /// Код валюты документа.
    pub currency: String,
    /// Свод по работам, в порядке документа.
    pub activities: Vec<ActivityBreakdown>,
    /// Нетто-итог документа.
    pub grand_subtotal: Money,
    /// Суммарный НДС документа.
    pub grand_vat: Money,
    /// Итог до общей наценки и общей скидки.
    pub total_before_general_discount: Money,
    /// Сумма скидок уровня работ.
    pub total_activity_discounts: Money,
    /// Сумма общей наценки.
    pub general_margin_amount: Money,
    /// Итог после общей наценки.
    pub total_after_general_margin: Money,
    /// Сумма общей скидки.
    pub general_discount_amount: Money,
    /// Итоговая сумма к оплате.
    pub grand_total: Money,
    /// Суммарная наценка всех уровней.
    pub total_margin_amount: Money,
    /// Суммарная наценка в процентах от итога до общей скидки.
    pub total_margin_percentage: Money,
}

impl QuoteTotals {
    /// Прогоняет весь конвейер расчёта по снимку документа.
    ///
    /// Повторный вызов на неизменённом документе даёт идентичный результат:
    /// движок не хранит состояния между вызовами.
    #[must_use]
    pub fn compute(document: &BudgetDocument) -> Self {
        let activities = document
            .activities
            .iter()
            .map(|activity| {
                let (net_contribution, vat_contribution) =
                    activity_contribution(&document.resources, activity);
                ActivityBreakdown {
                    id: activity.id.clone(),
                    name: activity.name.clone(),
                    subtotal: activity_subtotal(&document.resources, activity),
                    discount_amount: activity_discount_amount(&document.resources, activity),
                    total_with_vat: activity_total_with_vat(&document.resources, activity),
                    net_contribution,
                    vat_contribution,
                }
            })
            .collect();

        Self {
            currency: document.currency.clone(),
            activities,
            grand_subtotal: grand_subtotal(document),
            grand_vat: grand_vat(document),
            total_before_general_discount: grand_total_before_general_discount(document),
            total_activity_discounts: total_activity_discounts(document),
            general_margin_amount: general_margin_amount(document),
            total_after_general_margin: total_after_general_margin(document),
            general_discount_amount: general_discount_amount(document),
            grand_total: grand_total(document),
            total_margin_amount: total_margin_amount(document),
            total_margin_percentage: total_margin_percentage(document),
        }
    }
}
