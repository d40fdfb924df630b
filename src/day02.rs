use anyhow::{bail, Context, Result};

pub fn day2(part: u8, input: &str) -> Result<String> {
    let (mut x, mut depth, mut aim) = (0i64, 0i64, 0i64);
    for line in input.trim().lines() {
        let (cmd, amount) = line.trim().split_once(' ').with_context(|| format!("bad command {}", line))?;
        let amount: i64 = amount.parse().with_context(|| format!("bad amount in {}", line))?;
        match (cmd, part) {
            ("forward", 1) => x += amount,
            ("forward", _) => {x += amount; depth += aim * amount},
            ("down", 1) => depth += amount,
            ("up", 1) => depth -= amount,
            ("down", _) => aim += amount,
            ("up", _) => aim -= amount,
            _ => bail!("unknown command {}", line)
        }
    }
    Ok((x * depth).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "forward 5\ndown 5\nforward 8\nup 3\ndown 8\nforward 2\n";

    #[test]
    fn example() {
        assert_eq!(day2(1, EXAMPLE).unwrap(), "150");
        assert_eq!(day2(2, EXAMPLE).unwrap(), "900");
    }

    #[test]
    fn unknown_command() {
        assert!(day2(1, "backward 3").is_err());
    }
}
