//! Работа с сохранёнными снимками сметы (JSON) и их шапкой.

use crate::error::QuoteError;
use crate::types::BudgetDocument;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Исходный JSON снимка без разбора.
#[derive(Debug, Clone)]
pub struct RawSnapshot {
    /// Полный текст снимка.
    pub json: String,
}

impl RawSnapshot {
    /// Читает снимок из произвольного `Read`.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, QuoteError> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Ok(Self { json })
    }

    /// Создаёт снимок из готовой JSON-строки.
    #[inline]
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        Self {
            json: s.to_string(),
        }
    }
}

/// Шапка снимка: номер сметы, заказчик и дата выпуска.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotMetadata {
    /// Номер сметы.
    pub quote_number: String,
    /// Имя заказчика.
    pub customer_name: String,
    /// Дата формирования снимка.
    pub issued_at: NaiveDate,
}

/// Разобранный снимок: шапка и документ сметы.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSnapshot {
    /// Шапка снимка.
    pub meta: SnapshotMetadata,
    /// Документ сметы для расчётного конвейера.
    pub document: BudgetDocument,
}

impl QuoteSnapshot {
    /// Разбирает снимок из исходного JSON.
    #[inline]
    pub fn parse(raw: &RawSnapshot) -> Result<Self, QuoteError> {
        Ok(serde_json::from_str(&raw.json)?)
    }
}
