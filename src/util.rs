use anyhow::{ensure, Context, Result};
use std::str::FromStr;

/// Parses a comma-separated list of numbers, ignoring surrounding whitespace.
pub fn parse_csv<T: FromStr>(s: &str) -> Result<Vec<T>>
where T::Err: std::error::Error + Send + Sync + 'static {
    s.trim().split(',').map(|x|
        x.trim().parse::<T>().with_context(|| format!("cannot parse {:?} as a number", x))
    ).collect()
}

/// Parses a rectangular grid of decimal digits.
pub fn parse_digit_grid(s: &str) -> Result<Vec<Vec<u8>>> {
    let grid = s.trim().lines().map(|line|
        line.trim().bytes().map(|b| {
            ensure!(b.is_ascii_digit(), "unexpected character {:?} in {}", b as char, line);
            Ok(b - b'0')
        }).collect::<Result<Vec<_>>>()
    ).collect::<Result<Vec<_>>>()?;
    ensure!(!grid.is_empty(), "empty grid");
    ensure!(grid.iter().all(|row| row.len() == grid[0].len()), "grid is not rectangular");
    Ok(grid)
}

/// Orthogonal neighbours of (ri, ci) inside a rows x cols grid.
pub fn neighbors4(ri: usize, ci: usize, rows: usize, cols: usize)
-> impl Iterator<Item = (usize, usize)> {
    [(0, 1), (2, 1), (1, 0), (1, 2)].into_iter().filter_map(move |(dr, dc)| {
        let (nr, nc) = ((ri + dr).checked_sub(1)?, (ci + dc).checked_sub(1)?);
        (nr < rows && nc < cols).then_some((nr, nc))
    })
}

/// All eight neighbours of (ri, ci) inside a rows x cols grid.
pub fn neighbors8(ri: usize, ci: usize, rows: usize, cols: usize)
-> impl Iterator<Item = (usize, usize)> {
    (0 ..= 2).flat_map(|dr| (0 ..= 2).map(move |dc| (dr, dc)))
        .filter(|&d| d != (1, 1))
        .filter_map(move |(dr, dc)| {
            let (nr, nc) = ((ri + dr).checked_sub(1)?, (ci + dc).checked_sub(1)?);
            (nr < rows && nc < cols).then_some((nr, nc))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_neighbors() {
        assert_eq!(neighbors4(0, 0, 3, 3).count(), 2);
        assert_eq!(neighbors8(0, 0, 3, 3).count(), 3);
        assert_eq!(neighbors8(1, 1, 3, 3).count(), 8);
        assert_eq!(neighbors4(2, 2, 3, 3).collect::<Vec<_>>(), vec![(1, 2), (2, 1)]);
    }

    #[test]
    fn rejects_ragged_grid() {
        assert!(parse_digit_grid("123\n45").is_err());
        assert!(parse_digit_grid("12x").is_err());
        assert_eq!(parse_csv::<u32>(" 3,4, 5\n").unwrap(), vec![3, 4, 5]);
    }
}
