//! Доменные типы сметы: ресурсы, работы, скидки и наценки.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Денежное значение, используем `Decimal` для точных расчётов.
pub type Money = Decimal;

/// Идентификатор ресурса внутри документа сметы.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceId(pub String);

/// Идентификатор работы (этапа) сметы.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActivityId(pub String);

/// Способ тарификации ресурса.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CostType {
    /// Почасовая ставка.
    Hourly,
    /// Ставка за единицу.
    Quantity,
    /// Фиксированная стоимость назначения.
    Fixed,
}

/// Вид скидки.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiscountKind {
    /// Процент от базы.
    Percentage,
    /// Фиксированная сумма.
    Fixed,
}

/// База, от которой считается скидка.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiscountBase {
    /// Сумма без НДС.
    Taxable,
    /// Сумма с НДС.
    WithVat,
}

/// Тарифицируемый ресурс (специалист, инструмент, материал).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Идентификатор ресурса.
    pub id: ResourceId,
    /// Название ресурса.
    pub name: String,
    /// Способ тарификации.
    pub cost_type: CostType,
    /// Ставка за час или за единицу; для `Fixed` не используется.
    #[serde(default)]
    pub price_per_hour: Money,
    /// Наценка ресурса в процентах; применяется только при значении > 0.
    #[serde(default)]
    pub margin: Option<Money>,
}

/// Назначение ресурса на работу.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceAssignment {
    /// Ссылка на ресурс из каталога документа.
    pub resource_id: ResourceId,
    /// Часы или количество единиц для `Hourly`/`Quantity`.
    #[serde(default)]
    pub hours: Money,
    /// Абсолютная стоимость для `Fixed`.
    #[serde(default)]
    pub fixed_price: Money,
}

/// Скидка уровня работы или всего документа.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    /// Включена ли скидка.
    pub enabled: bool,
    /// Вид скидки.
    #[serde(rename = "type")]
    pub kind: DiscountKind,
    /// Процент или фиксированная сумма в зависимости от вида.
    #[serde(default)]
    pub value: Money,
    /// База расчёта.
    pub apply_on: DiscountBase,
}

impl Discount {
    /// Выключенная скидка-заглушка.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            enabled: false,
            kind: DiscountKind::Percentage,
            value: Decimal::ZERO,
            apply_on: DiscountBase::Taxable,
        }
    }
}

impl Default for Discount {
    fn default() -> Self {
        Self::disabled()
    }
}

/// Общая наценка документа.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralMargin {
    /// Включена ли наценка.
    pub enabled: bool,
    /// Процент наценки.
    #[serde(default)]
    pub value: Money,
}

/// Работа (этап) сметы с назначениями ресурсов.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Идентификатор работы.
    pub id: ActivityId,
    /// Название работы.
    pub name: String,
    /// Назначения ресурсов; порядок входит в контракт суммирования.
    #[serde(default)]
    pub resources: Vec<ResourceAssignment>,
    /// Ставка НДС в процентах.
    #[serde(default)]
    pub vat: Money,
    /// Наценка работы в процентах; применяется только при значении > 0.
    #[serde(default)]
    pub margin: Option<Money>,
    /// Скидка уровня работы.
    #[serde(default)]
    pub discount: Option<Discount>,
}

/// Документ сметы целиком: каталог ресурсов, работы и общий уровень.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetDocument {
    /// Код валюты документа (не участвует в вычислениях).
    pub currency: String,
    /// Каталог ресурсов.
    #[serde(default)]
    pub resources: Vec<Resource>,
    /// Работы; порядок входит в контракт суммирования.
    #[serde(default)]
    pub activities: Vec<Activity>,
    /// Общая скидка документа.
    #[serde(default)]
    pub general_discount: Discount,
    /// Общая наценка документа.
    #[serde(default)]
    pub general_margin: Option<GeneralMargin>,
}
