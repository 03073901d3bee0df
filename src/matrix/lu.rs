//! Множители LU-разложения и проверка невязки

use super::kernels::{lu_decomposition, matrix_multiply};
use super::operations::max_abs_diff;
use super::types::Matrix;
use crate::error::Result;
use crate::precision::Extended;

/// Результат разложения A = L * U
#[derive(Debug, Clone, PartialEq)]
pub struct LuFactors {
    /// Нижнетреугольная с единичной диагональю
    pub l: Matrix,
    /// Верхнетреугольная
    pub u: Matrix,
}

impl LuFactors {
    /// Выделяет нулевые L и U и раскладывает `a`
    pub fn decompose(a: &Matrix) -> Result<Self> {
        let mut l = Matrix::zeros(a.dim())?;
        let mut u = Matrix::zeros(a.dim())?;
        lu_decomposition(a, &mut l, &mut u)?;
        Ok(Self { l, u })
    }

    /// Восстанавливает L * U
    pub fn reconstruct(&self) -> Result<Matrix> {
        let mut product = Matrix::zeros(self.l.dim())?;
        matrix_multiply(&self.l, &self.u, &mut product)?;
        Ok(product)
    }

    /// Невязка max |A - L*U|
    pub fn residual(&self, a: &Matrix) -> Result<Extended> {
        max_abs_diff(a, &self.reconstruct()?)
    }
}
