use anyhow::{Context, Result};

const K: usize = 3;

pub fn day1(part: u8, input: &str) -> Result<String> {
    let depths = input.trim().lines()
        .map(|line| line.trim().parse::<u32>().with_context(|| format!("bad depth {:?}", line)))
        .collect::<Result<Vec<_>>>()?;
    // sliding sums share K - 1 terms, so comparing sums is comparing the ends
    let gap = if part == 1 {1} else {K};
    Ok(depths.iter().zip(depths.iter().skip(gap)).filter(|(a, b)| b > a).count().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "199\n200\n208\n210\n200\n207\n240\n269\n260\n263\n";

    #[test]
    fn example() {
        assert_eq!(day1(1, EXAMPLE).unwrap(), "7");
        assert_eq!(day1(2, EXAMPLE).unwrap(), "5");
    }

    #[test]
    fn garbage() {
        assert!(day1(1, "12\nabc").is_err());
    }
}
