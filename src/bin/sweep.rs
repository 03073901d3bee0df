//! Прогон обеих задач по списку размеров со сводной таблицей
use anyhow::{Context, Result};
use floatmark::{
    config::{Config, USAGE},
    precision::narrow,
    utils::{format_scientific, init_logging},
    Harness, Task,
};
use indicatif::{ProgressBar, ProgressStyle};
use prettytable::{row, Table};

fn main() -> Result<()> {
    let config = Config::from_args(std::env::args().skip(1))?;
    if config.help {
        println!("{USAGE}");
        return Ok(());
    }
    init_logging(config.verbose);

    let mut harness = Harness::new(config.seed);
    let total = (config.sizes.len() * Task::ALL.len()) as u64;

    // Прогресс-бар по всем запускам
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
            .context("Invalid progress bar template")?
            .progress_chars("#>-"),
    );

    let mut table = Table::new();
    table.add_row(row!["Task", "n", "Elapsed (s)", "Error"]);

    for &n in &config.sizes {
        for task in Task::ALL {
            pb.set_message(format!("{task} {n}x{n}"));
            match harness.run(task, n) {
                Ok(result) => {
                    table.add_row(row![
                        task,
                        n,
                        format!("{:.6}", result.elapsed.as_secs_f64()),
                        format_scientific(narrow(result.error))
                    ]);
                }
                Err(e) => {
                    log::warn!("{task} with n = {n} failed: {e}");
                    table.add_row(row![task, n, "-", e]);
                }
            }
            pb.inc(1);
        }
    }
    pb.finish_with_message("done");

    println!("\nBenchmark summary:");
    table.printstd();

    Ok(())
}
