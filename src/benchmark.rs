//! Запуск бенчмарков и формирование отчета

use crate::error::{BenchError, Result};
use crate::matrix::{
    frobenius_norm, initialize_matrix, lu_decomposition, matrix_multiply, Matrix, MatrixType,
};
use crate::precision::{narrow, Extended};
use crate::utils::{format_scientific, measure_time};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use std::time::Duration;

/// Задача бенчмарка
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    MatrixMultiplication,
    LuDecomposition,
}

impl Task {
    pub const ALL: [Task; 2] = [Task::MatrixMultiplication, Task::LuDecomposition];

    /// Название для отчета
    pub fn name(self) -> &'static str {
        match self {
            Task::MatrixMultiplication => "Matrix Multiplication",
            Task::LuDecomposition => "LU Decomposition",
        }
    }

    /// Задача по номеру пункта меню
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Task::MatrixMultiplication),
            2 => Some(Task::LuDecomposition),
            _ => None,
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Результат одного запуска.
///
/// `error` — норма Фробениуса выходной матрицы ядра (C или U). Это
/// величина выхода, а не проверка корректности; для настоящей невязки
/// см. [`crate::matrix::LuFactors::residual`].
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    pub task: Task,
    pub n: usize,
    pub elapsed: Duration,
    pub error: Extended,
}

impl fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Benchmark Report:")?;
        writeln!(f, "Task: {}", self.task)?;
        writeln!(f, "Elapsed time: {:.6} seconds", self.elapsed.as_secs_f64())?;
        writeln!(f, "Error: {}", format_scientific(narrow(self.error)))
    }
}

/// Проверяет размерность, введенную пользователем
pub fn parse_dimension(input: &str) -> Result<usize> {
    let input = input.trim();
    match input.parse::<i64>() {
        Ok(n) if n > 0 => {
            usize::try_from(n).map_err(|_| BenchError::InvalidDimension(input.to_string()))
        }
        _ => Err(BenchError::InvalidDimension(input.to_string())),
    }
}

/// Владеет генератором случайных чисел и выполняет запуски.
///
/// Генератор продолжает последовательность между запусками, поэтому
/// каждый следующий запуск получает новые данные.
pub struct Harness {
    rng: StdRng,
    seed: Option<u64>,
}

impl Harness {
    /// Генератор из энтропии ОС
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Детерминированный генератор
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// Выполняет задачу для матриц n x n.
    ///
    /// Время замеряется только вокруг вызова ядра. Все матрицы
    /// освобождаются при возврате.
    pub fn run(&mut self, task: Task, n: usize) -> Result<BenchmarkResult> {
        if n == 0 {
            return Err(BenchError::InvalidDimension(n.to_string()));
        }
        log::debug!(
            "running {task} with n = {n} ({} bytes per matrix, seed {:?})",
            n.saturating_mul(n).saturating_mul(std::mem::size_of::<Extended>()),
            self.seed
        );

        let (elapsed, output) = match task {
            Task::MatrixMultiplication => self.run_multiplication(n)?,
            Task::LuDecomposition => self.run_lu(n)?,
        };
        let error = frobenius_norm(&output);

        log::debug!("{task} n = {n} finished in {:?}", elapsed);
        Ok(BenchmarkResult {
            task,
            n,
            elapsed,
            error,
        })
    }

    fn run_multiplication(&mut self, n: usize) -> Result<(Duration, Matrix)> {
        let a = initialize_matrix(MatrixType::Random, n, &mut self.rng)?;
        let b = initialize_matrix(MatrixType::Random, n, &mut self.rng)?;
        let mut c = Matrix::zeros(n)?;

        let (status, elapsed) = measure_time(|| matrix_multiply(&a, &b, &mut c));
        status?;
        Ok((elapsed, c))
    }

    fn run_lu(&mut self, n: usize) -> Result<(Duration, Matrix)> {
        let a = initialize_matrix(MatrixType::Random, n, &mut self.rng)?;
        let mut l = Matrix::zeros(n)?;
        let mut u = Matrix::zeros(n)?;

        let (status, elapsed) = measure_time(|| lu_decomposition(&a, &mut l, &mut u));
        status?;
        Ok((elapsed, u))
    }
}
