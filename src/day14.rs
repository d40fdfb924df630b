use anyhow::{ensure, Context, Result};
use itertools::{Itertools, MinMaxResult};
use rustc_hash::FxHashMap;

pub fn day14(part: u8, input: &str) -> Result<String> {
    let (template, rule_lines) = input.trim().split_once("\n\n").context("missing insertion rules")?;
    let template = template.trim().as_bytes();
    ensure!(!template.is_empty(), "empty template");
    let rules = rule_lines.lines().map(|line| {
        let (pair, insert) = line.trim().split_once(" -> ").with_context(|| format!("bad rule {}", line))?;
        let (&[a, b], &[c]) = (pair.as_bytes(), insert.as_bytes()) else {
            anyhow::bail!("bad rule {}", line)
        };
        Ok(([a, b], c))
    }).collect::<Result<FxHashMap<_, _>>>()?;

    let mut pairs = FxHashMap::<[u8; 2], u64>::default();
    for (&a, &b) in template.iter().tuple_windows() {
        *pairs.entry([a, b]).or_default() += 1;
    }
    for _ in 0 .. if part == 1 {10} else {40} {
        let mut next = FxHashMap::default();
        for (pair @ [a, b], n) in pairs {
            match rules.get(&pair) {
                Some(&c) => {
                    *next.entry([a, c]).or_default() += n;
                    *next.entry([c, b]).or_default() += n;
                }
                None => *next.entry(pair).or_default() += n
            }
        }
        pairs = next;
    }

    // every element is the first of some pair, except the last one of the polymer
    let mut counts = FxHashMap::<u8, u64>::default();
    for ([a, _], n) in pairs {*counts.entry(a).or_default() += n}
    *counts.entry(template[template.len() - 1]).or_default() += 1;
    Ok(match counts.values().minmax() {
        MinMaxResult::MinMax(min, max) => max - min,
        _ => 0
    }.to_string())
}
