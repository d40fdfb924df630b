use anyhow::{bail, ensure, Context, Result};

fn mask(pattern: &str) -> Result<u8> {
    pattern.bytes().try_fold(0u8, |acc, b| match b {
        b'a' ..= b'g' => Ok(acc | 1 << (b - b'a')),
        _ => bail!("unexpected segment {:?} in {}", b as char, pattern)
    })
}

/// Maps each of the ten scrambled patterns to its digit.
fn decode(patterns: &[u8]) -> Result<[u8; 10]> {
    let by_len = |len: u32| patterns.iter().copied().filter(move |p| p.count_ones() == len);
    let one = by_len(2).next().context("no pattern for 1")?;
    let four = by_len(4).next().context("no pattern for 4")?;
    let mut digits = [0u8; 10];
    for &p in patterns {
        let (common1, common4) = ((p & one).count_ones(), (p & four).count_ones());
        let digit = match (p.count_ones(), common1, common4) {
            (2, _, _) => 1,
            (3, _, _) => 7,
            (4, _, _) => 4,
            (7, _, _) => 8,
            (5, 2, _) => 3,
            (5, _, 3) => 5,
            (5, _, 2) => 2,
            (6, 1, _) => 6,
            (6, _, 4) => 9,
            (6, _, 3) => 0,
            _ => bail!("cannot identify pattern {:07b}", p)
        };
        ensure!(digits[digit] == 0, "patterns {:07b} and {:07b} both decode to {}", digits[digit], p, digit);
        digits[digit] = p;
    }
    ensure!(digits.iter().all(|&d| d != 0), "some digit has no pattern");
    Ok(digits)
}

pub fn day8(part: u8, input: &str) -> Result<String> {
    let mut total = 0;
    for line in input.trim().lines() {
        let (patterns, outputs) = line.split_once('|').with_context(|| format!("no separator in {}", line))?;
        let patterns = patterns.split_whitespace().map(mask).collect::<Result<Vec<_>>>()?;
        let outputs = outputs.split_whitespace().map(mask).collect::<Result<Vec<_>>>()?;
        ensure!(patterns.len() == 10, "expected 10 patterns in {}", line);
        if part == 1 {
            total += outputs.iter().filter(|o| matches!(o.count_ones(), 2 | 3 | 4 | 7)).count() as u64;
        } else {
            let digits = decode(&patterns)?;
            total += outputs.iter().try_fold(0u64, |acc, o| {
                let d = digits.iter().position(|d| d == o)
                    .with_context(|| format!("output {:07b} matches no digit in {}", o, line))?;
                anyhow::Ok(acc * 10 + d as u64)
            })?;
        }
    }
    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str =
        "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb cdfeb cdbaf";

    #[test]
    fn single_line() {
        assert_eq!(day8(1, EXAMPLE).unwrap(), "0");
        assert_eq!(day8(2, EXAMPLE).unwrap(), "5353");
    }

    #[test]
    fn undecodable_wiring() {
        let line = "ab abcd abcdefg abcdefg abcdefg abcdefg abcdefg abcdefg abcdefg abcdefg | ab ab ab ab";
        assert!(day8(2, line).is_err());
        let line = "acedgfb cdfbe gcdfa fbcad dab dab cdfgeb eafb cagedb ab | ab ab ab ab";
        assert!(day8(2, line).is_err());
    }

    #[test]
    fn easy_digits() {
        let line = "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | ab dab eafb acedgfb";
        assert_eq!(day8(1, line).unwrap(), "4");
        assert_eq!(day8(2, line).unwrap(), "1748");
    }
}
