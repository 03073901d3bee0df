//! Операции над матрицами

use super::types::{Matrix, MatrixType};
use crate::error::Result;
use crate::precision::{sqrt, widen, zero, Extended};
use rand::Rng;

/// Создает матрицу n x n заданного типа
pub fn initialize_matrix<R: Rng + ?Sized>(
    matrix_type: MatrixType,
    n: usize,
    rng: &mut R,
) -> Result<Matrix> {
    match matrix_type {
        MatrixType::Zero => Matrix::zeros(n),
        MatrixType::Identity => Matrix::identity(n),
        MatrixType::Random => {
            let mut m = Matrix::zeros(n)?;
            fill_random(&mut m, rng);
            Ok(m)
        }
    }
}

/// Заполняет матрицу случайными значениями из [0, 1).
///
/// Генератор выдает `f64`, младшая часть значения повышенной точности
/// всегда нулевая.
pub fn fill_random<R: Rng + ?Sized>(matrix: &mut Matrix, rng: &mut R) {
    for cell in matrix.as_mut_slice() {
        *cell = widen(rng.gen_range(0.0..1.0));
    }
}

/// Норма Фробениуса: корень из суммы квадратов всех элементов
pub fn frobenius_norm(matrix: &Matrix) -> Extended {
    let mut sum = zero();
    for &value in matrix.as_slice() {
        sum += value * value;
    }
    sqrt(sum)
}

/// Максимальная поэлементная разница |a - b|
pub fn max_abs_diff(a: &Matrix, b: &Matrix) -> Result<Extended> {
    a.check_same_dim(b)?;
    let max = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(&x, &y)| (x - y).abs())
        .fold(zero(), |acc, d| if d > acc { d } else { acc });
    Ok(max)
}
