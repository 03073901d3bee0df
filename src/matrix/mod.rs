//! Модуль для работы с матрицами
//!
//! Предоставляет:
//! - Тип квадратной матрицы повышенной точности
//! - Утилиты: заполнение, норма Фробениуса, сравнение
//! - Ядра умножения и LU-разложения

mod types;
pub mod operations;
pub mod kernels;
mod lu;

pub use types::{Matrix, MatrixType};
pub use operations::{fill_random, frobenius_norm, initialize_matrix, max_abs_diff};
pub use kernels::{lu_decomposition, matrix_multiply};
pub use lu::LuFactors;
