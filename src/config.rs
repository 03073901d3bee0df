//! Параметры запуска из командной строки

use crate::error::{BenchError, Result};

/// Размеры матриц по умолчанию для прогона `floatmark-sweep`
pub const DEFAULT_SWEEP_SIZES: [usize; 4] = [8, 16, 32, 64];

pub const USAGE: &str = "\
Usage: floatmark [--seed <u64>] [-v|--verbose]
       floatmark-sweep [--seed <u64>] [--sizes 8,16,32] [-v|--verbose]

Options:
  --seed <u64>     seed the random generator for reproducible runs
  --sizes <list>   comma-separated matrix dimensions (sweep only)
  -v, --verbose    debug logging to stderr
  -h, --help       print this help";

/// Настройки запуска
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Зерно генератора; `None` — из энтропии
    pub seed: Option<u64>,
    pub verbose: bool,
    /// Размеры для прогона (используются только sweep)
    pub sizes: Vec<usize>,
    pub help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            verbose: false,
            sizes: DEFAULT_SWEEP_SIZES.to_vec(),
            help: false,
        }
    }
}

impl Config {
    /// Разбирает аргументы (без имени программы)
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "-v" | "--verbose" => config.verbose = true,
                "-h" | "--help" => config.help = true,
                "--seed" => {
                    let value = next_value(&mut args, "--seed")?;
                    config.seed = Some(value.parse().map_err(|_| {
                        BenchError::InvalidArgument(format!("--seed expects an integer, got {value:?}"))
                    })?);
                }
                "--sizes" => {
                    let value = next_value(&mut args, "--sizes")?;
                    config.sizes = parse_sizes(&value)?;
                }
                other => {
                    return Err(BenchError::InvalidArgument(format!("unknown option {other:?}")));
                }
            }
        }
        Ok(config)
    }
}

fn next_value<I, S>(args: &mut I, flag: &str) -> Result<String>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    args.next()
        .map(|v| v.as_ref().to_string())
        .ok_or_else(|| BenchError::InvalidArgument(format!("{flag} requires a value")))
}

fn parse_sizes(value: &str) -> Result<Vec<usize>> {
    let sizes = value
        .split(',')
        .map(|s| {
            s.trim()
                .parse::<usize>()
                .ok()
                .filter(|&n| n > 0)
                .ok_or_else(|| BenchError::InvalidDimension(s.trim().to_string()))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(sizes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_arguments() {
        let config = Config::from_args(Vec::<String>::new()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.sizes, vec![8, 16, 32, 64]);
    }

    #[test]
    fn parses_all_flags() {
        let config = Config::from_args(["--seed", "42", "-v", "--sizes", "2, 3,5"]).unwrap();
        assert_eq!(config.seed, Some(42));
        assert!(config.verbose);
        assert_eq!(config.sizes, vec![2, 3, 5]);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            Config::from_args(["--seed"]),
            Err(BenchError::InvalidArgument(_))
        ));
        assert!(matches!(
            Config::from_args(["--seed", "abc"]),
            Err(BenchError::InvalidArgument(_))
        ));
        assert!(matches!(
            Config::from_args(["--frobnicate"]),
            Err(BenchError::InvalidArgument(_))
        ));
        assert_eq!(
            Config::from_args(["--sizes", "4,0"]),
            Err(BenchError::InvalidDimension("0".into()))
        );
    }
}
