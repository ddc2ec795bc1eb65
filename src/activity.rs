//! Расчёты уровня работы: промежуточный итог, скидка и итог с НДС.

use crate::resource::resource_cost;
use crate::types::{Activity, Discount, DiscountBase, DiscountKind, Money, Resource};
use crate::utils::{percent_factor, percent_of};
use rust_decimal::Decimal;

/// Промежуточный итог работы: сумма назначений с наценками ресурсов и
/// наценкой самой работы, до НДС и скидки.
#[must_use]
pub fn activity_subtotal(resources: &[Resource], activity: &Activity) -> Money {
    // Суммирование строго в порядке назначений: порядок входит в контракт.
    let resource_sum: Money = activity
        .resources
        .iter()
        .map(|assignment| resource_cost(resources, assignment))
        .sum();

    match activity.margin {
        Some(margin) if margin > Decimal::ZERO => resource_sum * percent_factor(margin),
        _ => resource_sum,
    }
}

/// Включённая скидка работы, если она задана.
pub(crate) fn enabled_discount(activity: &Activity) -> Option<&Discount> {
    activity.discount.as_ref().filter(|discount| discount.enabled)
}

/// Сумма скидки работы от выбранной базы (без НДС либо с НДС).
#[must_use]
pub fn activity_discount_amount(resources: &[Resource], activity: &Activity) -> Money {
    let Some(discount) = enabled_discount(activity) else {
        return Decimal::ZERO;
    };
    if discount.value.is_zero() {
        return Decimal::ZERO;
    }

    let subtotal = activity_subtotal(resources, activity);
    let base = match discount.apply_on {
        DiscountBase::Taxable => subtotal,
        DiscountBase::WithVat => subtotal * percent_factor(activity.vat),
    };
    match discount.kind {
        DiscountKind::Percentage => percent_of(base, discount.value),
        // Фиксированная сумма не ограничивается базой и может её превышать.
        DiscountKind::Fixed => discount.value,
    }
}

/// Итог работы с НДС; порядок применения скидки зависит от её базы.
#[must_use]
pub fn activity_total_with_vat(resources: &[Resource], activity: &Activity) -> Money {
    let subtotal = activity_subtotal(resources, activity);
    match enabled_discount(activity).map(|discount| discount.apply_on) {
        // НДС пересчитывается от уже сниженной базы.
        Some(DiscountBase::Taxable) => {
            let after_discount = subtotal - activity_discount_amount(resources, activity);
            after_discount * percent_factor(activity.vat)
        }
        // Скидка вычитается из суммы с НДС; НДС не пересчитывается.
        Some(DiscountBase::WithVat) => {
            subtotal * percent_factor(activity.vat) - activity_discount_amount(resources, activity)
        }
        None => subtotal * percent_factor(activity.vat),
    }
}
