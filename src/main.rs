use anyhow::{bail, ensure, Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod util;
mod day01; mod day02; mod day03; mod day04; mod day05;
mod day06; mod day07; mod day08; mod day09; mod day10;
mod day11; mod day12; mod day13; mod day14; mod day15;
mod day16; mod day17; mod day18; mod day19; mod day20;
mod day21; mod day22; mod day23; mod day24; mod day25;

type Solver = fn(u8, &str) -> Result<String>;

/// Advent of Code 2021 solutions, one per day.
#[derive(Parser)]
#[command(name = "aoc2021")]
struct Cli {
    /// Puzzle day, 1 to 25
    day: usize,
    /// Puzzle part, 1 or 2
    part: u8,
    /// Read `day{DAY}test{N}.in` instead of `day{DAY}.in`
    #[arg(long, value_name = "N")]
    test: Option<u32>,
    /// Explicit input file; `-` reads standard input
    #[arg(long, short)]
    input: Option<PathBuf>,
    /// Directory the conventional input file names are resolved in
    #[arg(long, env = "AOC_INPUT_DIR", default_value = ".")]
    input_dir: PathBuf,
}

/// Reads `RUST_LOG`, defaults to `warn`. Logs go to stderr so stdout only carries the answer.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn read_input(cli: &Cli) -> Result<String> {
    let path = match (&cli.input, cli.test) {
        (Some(path), _) => path.clone(),
        (None, Some(test)) => cli.input_dir.join(format!("day{}test{}.in", cli.day, test)),
        (None, None) => cli.input_dir.join(format!("day{}.in", cli.day)),
    };
    if path.as_os_str() == "-" {
        debug!("reading puzzle input from stdin");
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input).context("cannot read stdin")?;
        return Ok(input);
    }
    debug!(path = %path.display(), "reading puzzle input");
    std::fs::read_to_string(&path).with_context(|| format!("cannot read {}", path.display()))
}

fn check_puzzle(day: usize, part: u8) -> Result<()> {
    ensure!((1 ..= 25).contains(&day), "no such day {}", day);
    match (day, part) {
        (25, 1) => Ok(()),
        (25, _) => bail!("day 25 only has part 1"),
        (_, 1 | 2) => Ok(()),
        (_, part) => bail!("part must be 1 or 2, got {}", part),
    }
}

fn main() -> Result<()> {
    init_logging();
    let days: [Solver; 25] = [
        day01::day1, day02::day2, day03::day3, day04::day4, day05::day5,
        day06::day6, day07::day7, day08::day8, day09::day9, day10::day10,
        day11::day11, day12::day12, day13::day13, day14::day14, day15::day15,
        day16::day16, day17::day17, day18::day18, day19::day19, day20::day20,
        day21::day21, day22::day22, day23::day23, day24::day24, day25::day25,
    ];

    let cli = Cli::parse();
    check_puzzle(cli.day, cli.part)?;

    let input = read_input(&cli)?;
    let time = std::time::Instant::now();
    let answer = days[cli.day - 1](cli.part, &input)
        .with_context(|| format!("day {} part {} failed", cli.day, cli.part))?;
    println!("{}", answer);
    info!(day = cli.day, part = cli.part, seconds = time.elapsed().as_secs_f32(), "solved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn puzzle_arguments() {
        assert!(check_puzzle(1, 1).is_ok());
        assert!(check_puzzle(24, 2).is_ok());
        assert!(check_puzzle(25, 1).is_ok());
        assert!(check_puzzle(25, 2).is_err());
        assert!(check_puzzle(0, 1).is_err());
        assert!(check_puzzle(26, 1).is_err());
        assert!(check_puzzle(3, 3).is_err());
    }
}
