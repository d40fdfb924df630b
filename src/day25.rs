use anyhow::{bail, ensure, Result};

/// Moves every cucumber of `kind` that faces an empty cell, all at once.
fn herd(grid: &mut [Vec<u8>], kind: u8) -> bool {
    let (rows, cols) = (grid.len(), grid[0].len());
    let (dr, dc) = if kind == b'>' {(0, 1)} else {(1, 0)};
    let movers = (0 .. rows).flat_map(|ri| (0 .. cols).map(move |ci| (ri, ci)))
        .filter(|&(ri, ci)| grid[ri][ci] == kind && grid[(ri + dr) % rows][(ci + dc) % cols] == b'.')
        .collect::<Vec<_>>();
    for &(ri, ci) in &movers {
        grid[ri][ci] = b'.';
        grid[(ri + dr) % rows][(ci + dc) % cols] = kind;
    }
    !movers.is_empty()
}

pub fn day25(_part: u8, input: &str) -> Result<String> {
    let mut grid = input.trim().lines().map(|line| line.trim().as_bytes().to_vec()).collect::<Vec<_>>();
    ensure!(!grid.is_empty() && grid.iter().all(|row| !row.is_empty() && row.len() == grid[0].len()),
            "sea floor is not a rectangle");
    ensure!(grid.iter().flatten().all(|b| matches!(b, b'>' | b'v' | b'.')), "unexpected character on the sea floor");
    let limit = 10 * grid.len() * grid[0].len() + 10;
    for step in 1 ..= limit {
        let east = herd(&mut grid, b'>');
        let south = herd(&mut grid, b'v');
        if !east && !south {return Ok(step.to_string())};
    }
    bail!("sea cucumbers still moving after {} steps", limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
v...>>.vv>
.vv>>.vv..
>>.>v>...v
>>v>>.>.v.
v>v.vv.v..
>.>>..v...
.vv..>.>v.
v.v..>>v.v
....v..v.>
";

    #[test]
    fn example() {
        assert_eq!(day25(1, EXAMPLE).unwrap(), "58");
    }

    #[test]
    fn one_row_step() {
        let mut grid = vec![b"...>>>>>...".to_vec()];
        assert!(herd(&mut grid, b'>'));
        assert_eq!(grid[0], b"...>>>>.>..");
        assert!(herd(&mut grid, b'>'));
        assert_eq!(grid[0], b"...>>>.>.>.");
    }

    #[test]
    fn endless_loop() {
        assert!(day25(1, ">.").is_err());
    }
}
