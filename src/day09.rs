use anyhow::Result;
use crate::util::{neighbors4, parse_digit_grid};

pub fn day9(part: u8, input: &str) -> Result<String> {
    let grid = parse_digit_grid(input)?;
    let (rows, cols) = (grid.len(), grid[0].len());
    let low_points = (0 .. rows).flat_map(|ri| (0 .. cols).map(move |ci| (ri, ci)))
        .filter(|&(ri, ci)| neighbors4(ri, ci, rows, cols).all(|(nr, nc)| grid[nr][nc] > grid[ri][ci]))
        .collect::<Vec<_>>();

    if part == 1 {
        return Ok(low_points.iter().map(|&(ri, ci)| grid[ri][ci] as u32 + 1).sum::<u32>().to_string());
    }

    let mut seen = vec![vec![false; cols]; rows];
    let mut sizes = vec![];
    for ri in 0 .. rows {
        for ci in 0 .. cols {
            if seen[ri][ci] || grid[ri][ci] == 9 {continue};
            seen[ri][ci] = true;
            let mut stack = vec![(ri, ci)];
            let mut size = 0usize;
            while let Some((r, c)) = stack.pop() {
                size += 1;
                for (nr, nc) in neighbors4(r, c, rows, cols) {
                    if !seen[nr][nc] && grid[nr][nc] != 9 {
                        seen[nr][nc] = true;
                        stack.push((nr, nc));
                    }
                }
            }
            sizes.push(size);
        }
    }
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    Ok(sizes.iter().take(3).product::<usize>().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "2199943210\n3987894921\n9856789892\n8767896789\n9899965678\n";

    #[test]
    fn example() {
        assert_eq!(day9(1, EXAMPLE).unwrap(), "15");
        assert_eq!(day9(2, EXAMPLE).unwrap(), "1134");
    }
}
