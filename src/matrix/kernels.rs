//! Вычислительные ядра: умножение матриц и LU-разложение
//!
//! Оба ядра пишут в заранее выделенные выходные матрицы.

use super::types::Matrix;
use crate::error::{BenchError, Result};
use crate::precision::{div, narrow, one, widen, zero, Extended};

/// Порог, ниже которого ведущий элемент считается подозрительно малым
/// относительно своей строки
const PIVOT_WARN_RATIO: f64 = 1e-24;

/// Наивное умножение C = A * B (порядок i-j-k).
///
/// Каждый элемент C[i,j] накапливается от нуля по k = 0..n-1. Порядок
/// суммирования фиксирован, от него зависит округление.
pub fn matrix_multiply(a: &Matrix, b: &Matrix, c: &mut Matrix) -> Result<()> {
    a.check_same_dim(b)?;
    a.check_same_dim(c)?;
    let n = a.dim();
    let (a, b) = (a.as_slice(), b.as_slice());
    let c = c.as_mut_slice();

    for i in 0..n {
        for j in 0..n {
            let mut sum = zero();
            for k in 0..n {
                sum += a[i * n + k] * b[k * n + j];
            }
            c[i * n + j] = sum;
        }
    }
    Ok(())
}

/// LU-разложение Дулитла без выбора ведущего элемента.
///
/// `l` и `u` должны быть обнулены заранее: ядро пишет только свои
/// треугольники. При точном нуле на диагонали U, на который пришлось бы
/// делить, возвращается [`BenchError::ZeroPivot`].
pub fn lu_decomposition(a: &Matrix, l: &mut Matrix, u: &mut Matrix) -> Result<()> {
    a.check_same_dim(l)?;
    a.check_same_dim(u)?;
    let n = a.dim();

    for i in 0..n {
        // Строка i матрицы U
        for j in i..n {
            let mut sum = zero();
            for k in 0..i {
                sum += l[(i, k)] * u[(k, j)];
            }
            u[(i, j)] = a[(i, j)] - sum;
        }

        let pivot = u[(i, i)];
        if i + 1 < n {
            check_pivot(a, pivot, i)?;
        }

        // Столбец i матрицы L
        for j in i..n {
            if i == j {
                l[(i, i)] = one();
            } else {
                let mut sum = zero();
                for k in 0..i {
                    sum += l[(j, k)] * u[(k, i)];
                }
                l[(j, i)] = div(a[(j, i)] - sum, pivot);
            }
        }
    }
    Ok(())
}

fn check_pivot(a: &Matrix, pivot: Extended, i: usize) -> Result<()> {
    if pivot == zero() {
        return Err(BenchError::ZeroPivot { index: i });
    }
    let n = a.dim();
    let row_scale = (0..n)
        .map(|j| a[(i, j)].abs())
        .fold(zero(), |acc, v| if v > acc { v } else { acc });
    if pivot.abs() < row_scale * widen(PIVOT_WARN_RATIO) {
        log::warn!(
            "near-zero pivot U[{i},{i}] = {:e}, unpivoted LU may be inaccurate",
            narrow(pivot)
        );
    }
    Ok(())
}
