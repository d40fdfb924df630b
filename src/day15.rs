use anyhow::{Context, Result};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use crate::util::{neighbors4, parse_digit_grid};

fn lowest_risk(grid: &[Vec<u8>]) -> Option<u32> {
    let (rows, cols) = (grid.len(), grid[0].len());
    let mut best = vec![vec![u32::MAX; cols]; rows];
    let mut queue = BinaryHeap::new();
    best[0][0] = 0;
    queue.push(Reverse((0, 0, 0)));
    while let Some(Reverse((risk, ri, ci))) = queue.pop() {
        if (ri, ci) == (rows - 1, cols - 1) {return Some(risk)};
        if risk > best[ri][ci] {continue};
        for (nr, nc) in neighbors4(ri, ci, rows, cols) {
            let next = risk + grid[nr][nc] as u32;
            if next < best[nr][nc] {
                best[nr][nc] = next;
                queue.push(Reverse((next, nr, nc)));
            }
        }
    }
    None
}

fn tile(grid: &[Vec<u8>], times: usize) -> Vec<Vec<u8>> {
    let (rows, cols) = (grid.len(), grid[0].len());
    (0 .. rows * times).map(|ri|
        (0 .. cols * times).map(|ci| {
            let bump = (ri / rows + ci / cols) as u8;
            (grid[ri % rows][ci % cols] + bump + 8) % 9 + 1
        }).collect()
    ).collect()
}

pub fn day15(part: u8, input: &str) -> Result<String> {
    let grid = parse_digit_grid(input)?;
    let grid = if part == 1 {grid} else {tile(&grid, 5)};
    Ok(lowest_risk(&grid).context("exit unreachable")?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
1163751742
1381373672
2136511328
3694931569
7463417111
1319128137
1359912421
3125421639
1293138521
2311944581
";

    #[test]
    fn example() {
        assert_eq!(day15(1, EXAMPLE).unwrap(), "40");
        assert_eq!(day15(2, EXAMPLE).unwrap(), "315");
    }

    #[test]
    fn tiling_wraps() {
        let tiled = tile(&[vec![8]], 3);
        assert_eq!(tiled, vec![vec![8, 9, 1], vec![9, 1, 2], vec![1, 2, 3]]);
    }
}
