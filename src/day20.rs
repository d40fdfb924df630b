use anyhow::{bail, ensure, Context, Result};
use bitvec::prelude::*;

fn pixels(line: &str) -> Result<BitVec> {
    line.trim().bytes().map(|b| match b {
        b'#' => Ok(true),
        b'.' => Ok(false),
        _ => bail!("unexpected pixel {:?}", b as char)
    }).collect()
}

struct Image {rows: Vec<BitVec>, background: bool}

impl Image {
    fn lit(&self, ri: isize, ci: isize) -> bool {
        usize::try_from(ri).ok().and_then(|ri| self.rows.get(ri))
            .and_then(|row| usize::try_from(ci).ok().and_then(|ci| row.get(ci).map(|bit| *bit)))
            .unwrap_or(self.background)
    }

    /// One pass; the result is one pixel larger on every side.
    fn enhance(&self, algorithm: &BitSlice) -> Image {
        let height = self.rows.len() as isize;
        let width = self.rows.first().map_or(0, |row| row.len()) as isize;
        let rows = (-1 .. height + 1).map(|ri|
            (-1 .. width + 1).map(|ci| {
                let index = (-1 ..= 1).flat_map(|dr| (-1 ..= 1).map(move |dc| (dr, dc)))
                    .fold(0, |acc, (dr, dc)| acc << 1 | self.lit(ri + dr, ci + dc) as usize);
                algorithm[index]
            }).collect::<BitVec>()
        ).collect();
        Image {rows, background: algorithm[if self.background {511} else {0}]}
    }
}

pub fn day20(part: u8, input: &str) -> Result<String> {
    let (algorithm, image) = input.trim().split_once("\n\n").context("missing image")?;
    let algorithm = pixels(&algorithm.lines().collect::<String>())?;
    ensure!(algorithm.len() == 512, "algorithm has {} entries, expected 512", algorithm.len());
    let rows = image.lines().map(pixels).collect::<Result<Vec<_>>>()?;
    ensure!(!rows.is_empty() && rows.iter().all(|row| row.len() == rows[0].len()), "image is not a rectangle");
    let mut image = Image {rows, background: false};
    for _ in 0 .. if part == 1 {2} else {50} {
        image = image.enhance(&algorithm);
    }
    ensure!(!image.background, "infinitely many pixels are lit");
    Ok(image.rows.iter().map(|row| row.count_ones()).sum::<usize>().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGE: &str = "#..#.\n#....\n##..#\n..#..\n..###";

    fn algorithm(rule: impl Fn(usize) -> bool) -> String {
        (0 .. 512).map(|i| if rule(i) {'#'} else {'.'}).collect()
    }

    #[test]
    fn identity_keeps_pixels() {
        let input = format!("{}\n\n{}\n", algorithm(|i| i & 16 != 0), IMAGE);
        assert_eq!(day20(1, &input).unwrap(), "10");
        assert_eq!(day20(2, &input).unwrap(), "10");
    }

    #[test]
    fn flickering_background() {
        let input = format!("{}\n\n{}\n", algorithm(|i| i & 16 == 0), IMAGE);
        assert_eq!(day20(1, &input).unwrap(), "10");
    }

    #[test]
    fn dilation() {
        let input = format!("{}\n\n#\n", algorithm(|i| i != 0));
        assert_eq!(day20(1, &input).unwrap(), "25");
        assert_eq!(day20(2, &input).unwrap(), (101 * 101).to_string());
    }

    #[test]
    fn ragged_image() {
        let input = format!("{}\n\n#..\n#\n", algorithm(|i| i & 16 != 0));
        assert!(day20(1, &input).is_err());
    }

    #[test]
    fn lit_forever() {
        let input = format!("{}\n\n#\n", algorithm(|_| true));
        assert!(day20(1, &input).is_err());
    }
}
