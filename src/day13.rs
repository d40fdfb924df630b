use anyhow::{ensure, Context, Result};
use itertools::Itertools;
use regex::Regex;
use rustc_hash::FxHashSet;

#[derive(Clone, Copy)]
enum Fold {X(i32), Y(i32)}

fn fold(dots: &FxHashSet<(i32, i32)>, fold: Fold) -> FxHashSet<(i32, i32)> {
    dots.iter().map(|&(x, y)| match fold {
        Fold::X(at) if x > at => (2 * at - x, y),
        Fold::Y(at) if y > at => (x, 2 * at - y),
        _ => (x, y)
    }).collect()
}

fn render(dots: &FxHashSet<(i32, i32)>) -> String {
    let width = dots.iter().map(|d| d.0).max().unwrap_or(-1) + 1;
    let height = dots.iter().map(|d| d.1).max().unwrap_or(-1) + 1;
    (0 .. height).map(|y|
        (0 .. width).map(|x| if dots.contains(&(x, y)) {'#'} else {'.'}).collect::<String>()
    ).join("\n")
}

pub fn day13(part: u8, input: &str) -> Result<String> {
    let (dot_lines, fold_lines) = input.trim().split_once("\n\n").context("missing fold instructions")?;
    let mut dots = dot_lines.lines().map(|line| {
        let (x, y) = line.trim().split_once(',').with_context(|| format!("bad dot {}", line))?;
        Ok((x.parse::<i32>()?, y.parse::<i32>()?))
    }).collect::<Result<FxHashSet<(i32, i32)>>>()?;

    let re = Regex::new(r"^fold along ([xy])=(\d+)$")?;
    let folds = fold_lines.lines().map(|line| {
        let caps = re.captures(line.trim()).with_context(|| format!("bad fold {}", line))?;
        let at = caps[2].parse::<i32>()?;
        Ok(if &caps[1] == "x" {Fold::X(at)} else {Fold::Y(at)})
    }).collect::<Result<Vec<_>>>()?;
    ensure!(!folds.is_empty(), "no folds");

    if part == 1 {
        return Ok(fold(&dots, folds[0]).len().to_string());
    }
    for &f in &folds {dots = fold(&dots, f)}
    Ok(render(&dots))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
6,10
0,14
9,10
0,3
10,4
4,11
6,0
6,12
4,1
0,13
10,12
3,4
3,0
8,4
1,10
2,14
8,10
9,0

fold along y=7
fold along x=5
";

    #[test]
    fn example() {
        assert_eq!(day13(1, EXAMPLE).unwrap(), "17");
        assert_eq!(day13(2, EXAMPLE).unwrap(), "#####\n#...#\n#...#\n#...#\n#####");
    }
}
