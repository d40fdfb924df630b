use anyhow::{ensure, Context, Result};
use regex::Regex;

struct Target {x1: i64, x2: i64, y1: i64, y2: i64}

impl Target {
    fn hit_by(&self, mut vx: i64, mut vy: i64) -> bool {
        let (mut x, mut y) = (0, 0);
        while x <= self.x2 && y >= self.y1 {
            if x >= self.x1 && y <= self.y2 {return true};
            x += vx;
            y += vy;
            vx -= vx.signum();
            vy -= 1;
        }
        false
    }
}

pub fn day17(part: u8, input: &str) -> Result<String> {
    let re = Regex::new(r"target area: x=(-?\d+)\.\.(-?\d+), y=(-?\d+)\.\.(-?\d+)")?;
    let caps = re.captures(input.trim()).context("cannot parse target area")?;
    let [x1, x2, y1, y2] = [1usize, 2, 3, 4].map(|i| caps[i].parse::<i64>());
    let t = Target {x1: x1?, x2: x2?, y1: y1?, y2: y2?};
    ensure!(t.x1 <= t.x2 && t.y1 <= t.y2, "target area bounds are reversed");
    ensure!(t.x1 > 0 && t.y2 < 0, "target must lie below and to the right of the launcher");

    if part == 1 {
        // the probe comes back through y = 0 at -(vy + 1), which must not overshoot y1
        return Ok((t.y1 * (t.y1 + 1) / 2).to_string());
    }
    let hits = (1 ..= t.x2).flat_map(|vx| (t.y1 ..= -t.y1).map(move |vy| (vx, vy)))
        .filter(|&(vx, vy)| t.hit_by(vx, vy))
        .count();
    Ok(hits.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "target area: x=20..30, y=-10..-5";

    #[test]
    fn example() {
        assert_eq!(day17(1, EXAMPLE).unwrap(), "45");
        assert_eq!(day17(2, EXAMPLE).unwrap(), "112");
    }

    #[test]
    fn trajectories() {
        let t = Target {x1: 20, x2: 30, y1: -10, y2: -5};
        assert!(t.hit_by(7, 2));
        assert!(t.hit_by(6, 3));
        assert!(t.hit_by(9, 0));
        assert!(!t.hit_by(17, -4));
    }

    #[test]
    fn target_behind_launcher() {
        assert!(day17(1, "target area: x=-30..-20, y=-10..-5").is_err());
        assert!(day17(2, "target area: x=20..30, y=5..10").is_err());
    }
}
