//! Интерактивный бенчмарк умножения матриц и LU-разложения
use anyhow::Result;
use floatmark::{cli::run_session, config::{Config, USAGE}, utils::init_logging, Harness};
use std::io;

fn main() -> Result<()> {
    let config = Config::from_args(std::env::args().skip(1))?;
    if config.help {
        println!("{USAGE}");
        return Ok(());
    }
    init_logging(config.verbose);

    let mut harness = Harness::new(config.seed);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    let mut err = io::stderr();

    run_session(&mut input, &mut out, &mut err, &mut harness)
}
