use anyhow::{Context, Result};
use itertools::{Itertools, MinMaxResult};
use crate::util::parse_csv;

pub fn day7(part: u8, input: &str) -> Result<String> {
    let mut crabs: Vec<i64> = parse_csv(input)?;
    if part == 1 {
        crabs.sort_unstable();
        let median = crabs[crabs.len() / 2];
        return Ok(crabs.iter().map(|c| (c - median).abs()).sum::<i64>().to_string());
    }
    let (min, max) = match crabs.iter().minmax() {
        MinMaxResult::NoElements => return Ok("0".to_string()),
        MinMaxResult::OneElement(&c) => (c, c),
        MinMaxResult::MinMax(&min, &max) => (min, max)
    };
    let fuel = (min ..= max).map(|target|
        crabs.iter().map(|c| {let n = (c - target).abs(); n * (n + 1) / 2}).sum::<i64>()
    ).min().context("no crabs")?;
    Ok(fuel.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {
        assert_eq!(day7(1, "16,1,2,0,4,2,7,1,2,14").unwrap(), "37");
        assert_eq!(day7(2, "16,1,2,0,4,2,7,1,2,14").unwrap(), "168");
    }
}
