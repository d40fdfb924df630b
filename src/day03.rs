use anyhow::{bail, ensure, Result};
use bitvec::prelude::*;

fn value(bits: &BitSlice) -> u64 {
    bits.iter().fold(0, |acc, bit| acc * 2 + *bit as u64)
}

/// Keeps filtering on column `i` until one row remains. `most_common` picks the
/// majority bit (ties keep 1), otherwise the minority bit (ties keep 0).
fn rating(rows: &[BitVec], most_common: bool) -> Result<u64> {
    let mut remaining = rows.iter().collect::<Vec<_>>();
    for i in 0 .. rows[0].len() {
        if remaining.len() == 1 {break};
        let ones = remaining.iter().filter(|row| row[i]).count();
        let keep = (2 * ones >= remaining.len()) == most_common;
        remaining.retain(|row| row[i] == keep);
    }
    match remaining[..] {
        [row] => Ok(value(row)),
        _ => bail!("{} rows left after filtering every column", remaining.len())
    }
}

pub fn day3(part: u8, input: &str) -> Result<String> {
    let rows = input.trim().lines().map(|line| {
        line.trim().bytes().map(|b| match b {
            b'0' => Ok(false),
            b'1' => Ok(true),
            _ => bail!("unexpected character {:?} in {}", b as char, line)
        }).collect::<Result<BitVec>>()
    }).collect::<Result<Vec<_>>>()?;
    ensure!(!rows.is_empty(), "no diagnostic rows");
    let width = rows[0].len();
    ensure!(rows.iter().all(|row| row.len() == width), "rows differ in width");

    if part == 1 {
        let gamma = (0 .. width).map(|i|
            2 * rows.iter().filter(|row| row[i]).count() > rows.len()
        ).collect::<BitVec>();
        let epsilon = !gamma.clone();
        Ok((value(&gamma) * value(&epsilon)).to_string())
    } else {
        Ok((rating(&rows, true)? * rating(&rows, false)?).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "00100\n11110\n10110\n10111\n10101\n01111\n00111\n11100\n10000\n11001\n00010\n01010\n";

    #[test]
    fn example() {
        assert_eq!(day3(1, EXAMPLE).unwrap(), "198");
        assert_eq!(day3(2, EXAMPLE).unwrap(), "230");
    }
}
