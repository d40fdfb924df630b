use anyhow::{bail, Result};
use crate::util::{neighbors8, parse_digit_grid};

/// Advances one step and returns how many octopuses flashed.
fn step(grid: &mut [Vec<u8>]) -> usize {
    let (rows, cols) = (grid.len(), grid[0].len());
    let mut pending = vec![];
    for ri in 0 .. rows {
        for ci in 0 .. cols {
            grid[ri][ci] += 1;
            if grid[ri][ci] == 10 {pending.push((ri, ci))}
        }
    }
    let mut flashes = 0;
    while let Some((ri, ci)) = pending.pop() {
        flashes += 1;
        for (nr, nc) in neighbors8(ri, ci, rows, cols) {
            grid[nr][nc] += 1;
            if grid[nr][nc] == 10 {pending.push((nr, nc))}
        }
    }
    for cell in grid.iter_mut().flatten() {
        if *cell > 9 {*cell = 0}
    }
    flashes
}

pub fn day11(part: u8, input: &str) -> Result<String> {
    let mut grid = parse_digit_grid(input)?;
    let size = grid.len() * grid[0].len();
    if part == 1 {
        return Ok((0 .. 100).map(|_| step(&mut grid)).sum::<usize>().to_string());
    }
    for t in 1 ..= 1_000_000 {
        if step(&mut grid) == size {return Ok(t.to_string())}
    }
    bail!("octopuses never synchronise")
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
5483143223
2745854711
5264556173
6141336146
6357385478
4167524645
2176841721
6882881134
4846848554
5283751526
";

    #[test]
    fn example() {
        assert_eq!(day11(1, EXAMPLE).unwrap(), "1656");
        assert_eq!(day11(2, EXAMPLE).unwrap(), "195");
    }

    #[test]
    fn small_step() {
        let mut grid = parse_digit_grid("11111\n19991\n19191\n19991\n11111").unwrap();
        assert_eq!(step(&mut grid), 9);
        assert_eq!(grid[0], vec![3, 4, 5, 4, 3]);
        assert_eq!(grid[2], vec![5, 0, 0, 0, 5]);
    }
}
