//! Интерактивное меню

use crate::benchmark::{parse_dimension, Harness, Task};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

const MENU: &str = "\
Choose a benchmarking task:
1. Matrix Multiplication
2. LU Decomposition
0. Exit
Choice: ";

const DIMENSION_PROMPT: &str = "Enter matrix dimension (n x n): ";

/// Пункт меню, выбранный пользователем
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run(Task),
    Exit,
    Invalid,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        match input.trim().parse::<i64>() {
            Ok(0) => MenuChoice::Exit,
            Ok(choice) => Task::from_choice(choice).map_or(MenuChoice::Invalid, MenuChoice::Run),
            Err(_) => MenuChoice::Invalid,
        }
    }
}

/// Читает строку; `None` на конце ввода
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read from stdin")?;
    Ok((read > 0).then_some(line))
}

fn prompt<W: Write>(out: &mut W, text: &str) -> Result<()> {
    out.write_all(text.as_bytes())
        .and_then(|_| out.flush())
        .context("Failed to write to stdout")
}

/// Цикл меню: до выбора `0` или конца ввода.
///
/// Ошибки отдельного запуска пишутся в `err`, цикл продолжается.
/// Наружу возвращаются только ошибки ввода-вывода.
pub fn run_session<R, W, E>(input: &mut R, out: &mut W, err: &mut E, harness: &mut Harness) -> Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    loop {
        prompt(out, MENU)?;
        let Some(line) = read_line(input)? else {
            log::debug!("end of input, leaving menu");
            return Ok(());
        };

        let task = match MenuChoice::parse(&line) {
            MenuChoice::Exit => return Ok(()),
            MenuChoice::Run(task) => task,
            MenuChoice::Invalid => {
                writeln!(err, "Invalid choice").context("Failed to write to stderr")?;
                continue;
            }
        };

        prompt(out, DIMENSION_PROMPT)?;
        let Some(line) = read_line(input)? else {
            return Ok(());
        };

        let outcome = parse_dimension(&line).and_then(|n| harness.run(task, n));
        match outcome {
            Ok(result) => write!(out, "{result}").context("Failed to write report")?,
            Err(e) => writeln!(err, "Error: {e}").context("Failed to write to stderr")?,
        }
    }
}
