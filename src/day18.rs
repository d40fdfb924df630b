use anyhow::{bail, ensure, Context, Result};
use itertools::Itertools;
use std::fmt;
use std::ops::Add;

#[derive(Clone, Debug, PartialEq)]
enum Snail {
    Regular(u32),
    Pair(Box<Snail>, Box<Snail>),
}

impl Snail {
    fn pair(left: Snail, right: Snail) -> Snail {Snail::Pair(Box::new(left), Box::new(right))}

    fn parse(s: &str) -> Result<Snail> {
        let bytes = s.trim().as_bytes();
        let mut at = 0;
        let snail = Snail::parse_at(bytes, &mut at)?;
        ensure!(at == bytes.len(), "trailing characters in {}", s);
        Ok(snail)
    }

    fn consume(bytes: &[u8], at: &mut usize, b: u8) -> Result<()> {
        ensure!(bytes.get(*at) == Some(&b), "expected {:?} at offset {}", b as char, at);
        *at += 1;
        Ok(())
    }

    fn parse_at(bytes: &[u8], at: &mut usize) -> Result<Snail> {
        match bytes.get(*at) {
            Some(b'[') => {
                Snail::consume(bytes, at, b'[')?;
                let left = Snail::parse_at(bytes, at)?;
                Snail::consume(bytes, at, b',')?;
                let right = Snail::parse_at(bytes, at)?;
                Snail::consume(bytes, at, b']')?;
                Ok(Snail::pair(left, right))
            }
            Some(b'0' ..= b'9') => {
                let mut n = 0;
                while let Some(&b @ b'0' ..= b'9') = bytes.get(*at) {
                    n = n * 10 + (b - b'0') as u32;
                    *at += 1;
                }
                Ok(Snail::Regular(n))
            }
            Some(&b) => bail!("unexpected {:?} at offset {}", b as char, at),
            None => bail!("snailfish number ends early")
        }
    }

    fn add_leftmost(&mut self, n: u32) {
        match self {
            Snail::Regular(x) => *x += n,
            Snail::Pair(left, _) => left.add_leftmost(n)
        }
    }

    fn add_rightmost(&mut self, n: u32) {
        match self {
            Snail::Regular(x) => *x += n,
            Snail::Pair(_, right) => right.add_rightmost(n)
        }
    }

    /// Explodes the leftmost pair nested four deep. Returns the values still to be
    /// added left and right of the position it came from.
    fn explode(&mut self, depth: usize) -> Option<(u32, u32)> {
        let Snail::Pair(left, right) = self else {return None};
        if depth >= 4 {
            if let (Snail::Regular(a), Snail::Regular(b)) = (&**left, &**right) {
                let carry = (*a, *b);
                *self = Snail::Regular(0);
                return Some(carry);
            }
        }
        if let Some((a, b)) = left.explode(depth + 1) {
            right.add_leftmost(b);
            return Some((a, 0));
        }
        if let Some((a, b)) = right.explode(depth + 1) {
            left.add_rightmost(a);
            return Some((0, b));
        }
        None
    }

    fn split(&mut self) -> bool {
        match self {
            Snail::Regular(n) if *n >= 10 => {
                let n = *n;
                *self = Snail::pair(Snail::Regular(n / 2), Snail::Regular((n + 1) / 2));
                true
            }
            Snail::Regular(_) => false,
            Snail::Pair(left, right) => left.split() || right.split()
        }
    }

    fn reduce(&mut self) {
        while self.explode(0).is_some() || self.split() {}
    }

    fn magnitude(&self) -> u64 {
        match self {
            Snail::Regular(n) => *n as u64,
            Snail::Pair(left, right) => 3 * left.magnitude() + 2 * right.magnitude()
        }
    }
}

impl Add for Snail {
    type Output = Snail;

    fn add(self, other: Snail) -> Snail {
        let mut sum = Snail::pair(self, other);
        sum.reduce();
        sum
    }
}

impl fmt::Display for Snail {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Snail::Regular(n) => write!(f, "{}", n),
            Snail::Pair(left, right) => write!(f, "[{},{}]", left, right)
        }
    }
}

pub fn day18(part: u8, input: &str) -> Result<String> {
    let numbers = input.trim().lines().map(Snail::parse).collect::<Result<Vec<_>>>()?;
    if part == 1 {
        let sum = numbers.into_iter().reduce(|a, b| a + b).context("no snailfish numbers")?;
        return Ok(sum.magnitude().to_string());
    }
    let best = numbers.iter().permutations(2)
        .map(|ab| (ab[0].clone() + ab[1].clone()).magnitude())
        .max()
        .context("need at least two snailfish numbers")?;
    Ok(best.to_string())
}
