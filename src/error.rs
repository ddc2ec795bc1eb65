//! Ошибки входного слоя: чтение и разбор снимков сметы.

/// Ошибка чтения или разбора снимка сметы.
///
/// Сам расчётный конвейер ошибок не возвращает: некорректные данные
/// сворачиваются в нулевые вклады ещё на входном слое.
#[derive(thiserror::Error, Debug)]
pub enum QuoteError {
    /// Ошибка ввода-вывода при чтении исходного файла.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Ошибка разбора JSON снимка.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
