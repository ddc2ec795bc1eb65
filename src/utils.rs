//! Вспомогательные операции над процентными величинами.

use crate::types::Money;
use rust_decimal::Decimal;

/// Множитель `1 + percent/100` для наценок и НДС.
pub(crate) fn percent_factor(percent: Money) -> Money {
    Decimal::ONE + percent / Decimal::ONE_HUNDRED
}

/// Доля `percent` процентов от базы.
pub(crate) fn percent_of(base: Money, percent: Money) -> Money {
    base * percent / Decimal::ONE_HUNDRED
}
