//! Extended-precision matrix benchmarks: naive multiplication and
//! unpivoted Doolittle LU, timed and measured in double-double precision.

pub mod benchmark;
pub mod cli;
pub mod config;
pub mod error;
pub mod matrix;
pub mod precision;
pub mod utils;

// Реэкспорт основных типов для удобства
pub use benchmark::{BenchmarkResult, Harness, Task};
pub use error::{BenchError, Result};
pub use matrix::{LuFactors, Matrix, MatrixType};
pub use precision::Extended;
