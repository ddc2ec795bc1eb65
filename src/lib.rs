#![warn(missing_docs)]
//! Библиотека расчёта смет: наценки, скидки и НДС без внутреннего состояния.
//!
//! Движок — чистая функция от снимка документа: порядок суммирования
//! назначений и работ фиксирован контрактом, повторный вызов на тех же
//! данных даёт идентичный результат.

mod activity;
mod charge;
mod error;
mod resource;
mod snapshot;
mod totals;
mod types;
mod utils;

pub use crate::activity::{activity_discount_amount, activity_subtotal, activity_total_with_vat};
pub use crate::charge::{ChargeLine, ChargeTotals, charge_totals};
pub use crate::error::QuoteError;
pub use crate::resource::{ResolvedCost, resolve_resource_cost, resource_cost};
pub use crate::snapshot::{QuoteSnapshot, RawSnapshot, SnapshotMetadata};
pub use crate::totals::{
    ActivityBreakdown, QuoteTotals, activity_contribution, general_discount_amount,
    general_margin_amount, grand_subtotal, grand_total, grand_total_before_general_discount,
    grand_vat, total_activity_discounts, total_after_general_margin, total_margin_amount,
    total_margin_percentage,
};
pub use crate::types::*;
