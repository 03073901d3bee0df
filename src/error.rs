//! Ошибки бенчмарка

use thiserror::Error;

/// Ошибки, прерывающие отдельный запуск бенчмарка
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BenchError {
    /// Размерность не положительна или не разобрана
    #[error("invalid matrix dimension: {0} (expected a positive integer)")]
    InvalidDimension(String),

    /// Не удалось выделить память под матрицу n x n
    #[error("failed to allocate a {n}x{n} matrix")]
    AllocationFailed { n: usize },

    /// Размерности операндов не совпадают
    #[error("dimension mismatch: expected {expected}x{expected}, got {actual}x{actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Нулевой ведущий элемент в LU-разложении без выбора
    #[error("zero pivot at U[{index},{index}]: matrix needs pivoting")]
    ZeroPivot { index: usize },

    /// Неизвестный или некорректный аргумент командной строки
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, BenchError>;
