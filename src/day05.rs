use anyhow::{ensure, Context, Result};
use regex::Regex;
use rustc_hash::FxHashMap;

pub fn day5(part: u8, input: &str) -> Result<String> {
    let re = Regex::new(r"^(\d+),(\d+) -> (\d+),(\d+)$")?;
    let mut covered = FxHashMap::<(i32, i32), u32>::default();
    for line in input.trim().lines() {
        let caps = re.captures(line.trim()).with_context(|| format!("cannot parse line {}", line))?;
        let [x1, y1, x2, y2] = [1usize, 2, 3, 4].map(|i| caps[i].parse::<i32>());
        let (x1, y1, x2, y2) = (x1?, y1?, x2?, y2?);
        let (dx, dy) = ((x2 - x1).signum(), (y2 - y1).signum());
        let len = (x2 - x1).abs().max((y2 - y1).abs());
        ensure!(
            dx == 0 || dy == 0 || (x2 - x1).abs() == (y2 - y1).abs(),
            "line {} is neither straight nor diagonal", line
        );
        if part == 1 && dx != 0 && dy != 0 {continue};
        for t in 0 ..= len {
            *covered.entry((x1 + t * dx, y1 + t * dy)).or_default() += 1;
        }
    }
    Ok(covered.values().filter(|&&n| n > 1).count().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
0,9 -> 5,9
8,0 -> 0,8
9,4 -> 3,4
2,2 -> 2,1
7,0 -> 7,4
6,4 -> 2,0
0,9 -> 2,9
3,4 -> 1,4
0,0 -> 8,8
5,5 -> 8,2
";

    #[test]
    fn example() {
        assert_eq!(day5(1, EXAMPLE).unwrap(), "5");
        assert_eq!(day5(2, EXAMPLE).unwrap(), "12");
    }

    #[test]
    fn odd_slope() {
        assert!(day5(2, "0,0 -> 2,1").is_err());
    }
}
