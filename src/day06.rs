use anyhow::{ensure, Result};
use crate::util::parse_csv;

pub fn day6(part: u8, input: &str) -> Result<String> {
    let days = if part == 1 {80} else {256};
    let mut by_timer = [0u64; 9];
    for timer in parse_csv::<usize>(input)? {
        ensure!(timer < 9, "timer {} out of range", timer);
        by_timer[timer] += 1;
    }
    for _ in 0 .. days {
        by_timer.rotate_left(1);
        by_timer[6] += by_timer[8];
    }
    Ok(by_timer.iter().sum::<u64>().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {
        assert_eq!(day6(1, "3,4,3,1,2").unwrap(), "5934");
        assert_eq!(day6(2, "3,4,3,1,2").unwrap(), "26984457539");
    }
}
