use anyhow::{bail, Result};

enum Verdict {Corrupted(u8), Incomplete(Vec<u8>)}

fn check(line: &str) -> Result<Verdict> {
    let mut stack = vec![];
    for b in line.bytes() {
        match b {
            b'(' => stack.push(b')'),
            b'[' => stack.push(b']'),
            b'{' => stack.push(b'}'),
            b'<' => stack.push(b'>'),
            b')' | b']' | b'}' | b'>' => if stack.pop() != Some(b) {return Ok(Verdict::Corrupted(b))},
            _ => bail!("unexpected character {:?} in {}", b as char, line)
        }
    }
    stack.reverse();
    Ok(Verdict::Incomplete(stack))
}

pub fn day10(part: u8, input: &str) -> Result<String> {
    let mut corrupted = 0u64;
    let mut completions = vec![];
    for line in input.trim().lines() {
        match check(line.trim())? {
            Verdict::Corrupted(b) => corrupted += match b {
                b')' => 3, b']' => 57, b'}' => 1197, _ => 25137
            },
            Verdict::Incomplete(closers) if !closers.is_empty() => completions.push(
                closers.iter().fold(0u64, |acc, c| acc * 5 + match c {
                    b')' => 1, b']' => 2, b'}' => 3, _ => 4
                })
            ),
            Verdict::Incomplete(_) => ()
        }
    }
    if part == 1 {return Ok(corrupted.to_string())};
    if completions.is_empty() {bail!("no incomplete lines")};
    completions.sort_unstable();
    Ok(completions[completions.len() / 2].to_string())
}
