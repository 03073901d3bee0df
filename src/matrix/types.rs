//! Типы матриц и связанные структуры

use crate::error::{BenchError, Result};
use crate::precision::{one, widen, zero, Extended};
use std::ops::{Index, IndexMut};

/// Способ начального заполнения матрицы
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatrixType {
    /// Все элементы равны нулю
    Zero,
    /// Единичная матрица
    Identity,
    /// Случайные значения из [0, 1)
    Random,
}

/// Квадратная матрица n x n, хранимая построчно
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    n: usize,
    data: Vec<Extended>,
}

impl Matrix {
    /// Выделяет нулевую матрицу n x n.
    ///
    /// Память резервируется через `try_reserve_exact`, поэтому нехватка
    /// памяти (и переполнение n*n) возвращается как ошибка, а не abort.
    pub fn zeros(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(BenchError::InvalidDimension(n.to_string()));
        }
        let len = n
            .checked_mul(n)
            .ok_or(BenchError::AllocationFailed { n })?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| BenchError::AllocationFailed { n })?;
        data.resize(len, zero());
        Ok(Self { n, data })
    }

    /// Единичная матрица n x n
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::zeros(n)?;
        for i in 0..n {
            m[(i, i)] = one();
        }
        Ok(m)
    }

    /// Строит матрицу из строк `f64`; все строки должны иметь длину n
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let n = rows.len();
        let mut m = Self::zeros(n)?;
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(BenchError::DimensionMismatch {
                    expected: n,
                    actual: row.len(),
                });
            }
            for (j, &value) in row.iter().enumerate() {
                m[(i, j)] = widen(value);
            }
        }
        Ok(m)
    }

    /// Размерность n
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Элементы в построчном порядке
    pub fn as_slice(&self) -> &[Extended] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [Extended] {
        &mut self.data
    }

    /// Проверяет, что у `other` та же размерность
    pub(crate) fn check_same_dim(&self, other: &Matrix) -> Result<()> {
        if self.n != other.n {
            return Err(BenchError::DimensionMismatch {
                expected: self.n,
                actual: other.n,
            });
        }
        Ok(())
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Extended;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &Extended {
        &self.data[i * self.n + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Extended {
        &mut self.data[i * self.n + j]
    }
}
