use anyhow::{ensure, Context, Result};
use crate::util::parse_csv;

struct Board {
    cells: [u32; 25],
    marked: u32,
    won: bool,
}

impl Board {
    /// Marks `n` and reports whether this completed a row or column.
    fn mark(&mut self, n: u32) -> bool {
        for i in (0 .. 25).filter(|&i| self.cells[i] == n) {self.marked |= 1 << i}
        let row = 0b11111;
        let col = 0b00001_00001_00001_00001_00001;
        (0 .. 5).any(|k| self.marked & (row << (5 * k)) == row << (5 * k) ||
                         self.marked & (col << k) == col << k)
    }

    fn unmarked_sum(&self) -> u32 {
        (0 .. 25).filter(|i| self.marked & (1 << i) == 0).map(|i| self.cells[i]).sum()
    }
}

pub fn day4(part: u8, input: &str) -> Result<String> {
    let mut blocks = input.trim().split("\n\n");
    let draws: Vec<u32> = parse_csv(blocks.next().context("missing draw order")?)?;
    let mut boards = blocks.map(|block| {
        let nums = block.split_whitespace()
            .map(|s| s.parse::<u32>().with_context(|| format!("bad board number {:?}", s)))
            .collect::<Result<Vec<_>>>()?;
        ensure!(nums.len() == 25, "board has {} numbers, expected 25", nums.len());
        let mut cells = [0; 25];
        cells.copy_from_slice(&nums);
        Ok(Board {cells, marked: 0, won: false})
    }).collect::<Result<Vec<_>>>()?;

    let mut scores = vec![];
    for &n in &draws {
        for board in boards.iter_mut().filter(|board| !board.won) {
            if board.mark(n) {
                board.won = true;
                scores.push(board.unmarked_sum() * n);
            }
        }
    }
    let score = if part == 1 {scores.first()} else {scores.last()};
    Ok(score.context("no board ever wins")?.to_string())
}
