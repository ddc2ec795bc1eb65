//! Расчёт стоимости одного назначения ресурса.

use crate::types::{CostType, Money, Resource, ResourceAssignment};
use crate::utils::percent_factor;
use rust_decimal::Decimal;

/// Результат расчёта стоимости назначения.
///
/// Висящая ссылка на ресурс — наблюдаемый исход, а не ошибка: расчётные
/// вызовы сворачивают его в ноль через [`ResolvedCost::or_zero`], а
/// инструменты валидации могут отреагировать на `MissingResource`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedCost {
    /// Ресурс найден, стоимость рассчитана.
    Priced(Money),
    /// Назначение ссылается на отсутствующий в каталоге ресурс.
    MissingResource,
}

impl ResolvedCost {
    /// Сворачивает отсутствующий ресурс в нулевую стоимость.
    #[must_use]
    pub const fn or_zero(self) -> Money {
        match self {
            Self::Priced(cost) => cost,
            Self::MissingResource => Decimal::ZERO,
        }
    }
}

/// Ищет ресурс по ссылке и считает стоимость назначения с наценкой ресурса.
#[must_use]
pub fn resolve_resource_cost(
    resources: &[Resource],
    assignment: &ResourceAssignment,
) -> ResolvedCost {
    let Some(resource) = resources.iter().find(|r| r.id == assignment.resource_id) else {
        return ResolvedCost::MissingResource;
    };

    let base = base_cost(resource, assignment);
    let cost = match resource.margin {
        Some(margin) if margin > Decimal::ZERO => base * percent_factor(margin),
        _ => base,
    };
    ResolvedCost::Priced(cost)
}

/// Стоимость назначения; отсутствующий ресурс даёт ноль.
#[must_use]
pub fn resource_cost(resources: &[Resource], assignment: &ResourceAssignment) -> Money {
    resolve_resource_cost(resources, assignment).or_zero()
}

/// Стоимость назначения без наценки ресурса (для отчёта по наценкам).
pub(crate) fn resource_cost_without_margin(
    resources: &[Resource],
    assignment: &ResourceAssignment,
) -> Money {
    resources
        .iter()
        .find(|r| r.id == assignment.resource_id)
        .map_or(Decimal::ZERO, |resource| base_cost(resource, assignment))
}

/// База назначения: часы на ставку для `Hourly`/`Quantity`,
/// фиксированная сумма для `Fixed`.
fn base_cost(resource: &Resource, assignment: &ResourceAssignment) -> Money {
    match resource.cost_type {
        CostType::Hourly | CostType::Quantity => assignment.hours * resource.price_per_hour,
        CostType::Fixed => assignment.fixed_price,
    }
}
