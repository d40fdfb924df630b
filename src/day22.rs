use anyhow::{ensure, Context, Result};
use regex::Regex;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Cuboid {min: [i64; 3], max: [i64; 3]}

impl Cuboid {
    fn intersect(&self, other: &Cuboid) -> Option<Cuboid> {
        let min = [0, 1, 2].map(|a| self.min[a].max(other.min[a]));
        let max = [0, 1, 2].map(|a| self.max[a].min(other.max[a]));
        (0 .. 3).all(|a| min[a] <= max[a]).then_some(Cuboid {min, max})
    }

    fn volume(&self) -> i64 {
        (0 .. 3).map(|a| self.max[a] - self.min[a] + 1).product()
    }
}

/// Cuboids with a sign; the lit volume is the signed sum of their volumes.
#[derive(Default)]
struct Reactor {parts: Vec<(Cuboid, i64)>}

impl Reactor {
    fn set(&mut self, cuboid: Cuboid, on: bool) {
        let overlaps = self.parts.iter()
            .filter_map(|(c, sign)| c.intersect(&cuboid).map(|i| (i, -sign)))
            .collect::<Vec<_>>();
        self.parts.extend(overlaps);
        if on {self.parts.push((cuboid, 1))}
    }

    fn lit(&self) -> i64 {
        self.parts.iter().map(|(c, sign)| c.volume() * sign).sum()
    }
}

pub fn day22(part: u8, input: &str) -> Result<String> {
    let re = Regex::new(r"^(on|off) x=(-?\d+)\.\.(-?\d+),y=(-?\d+)\.\.(-?\d+),z=(-?\d+)\.\.(-?\d+)$")?;
    let region = Cuboid {min: [-50; 3], max: [50; 3]};
    let mut reactor = Reactor::default();
    for line in input.trim().lines() {
        let caps = re.captures(line.trim()).with_context(|| format!("bad reboot step {}", line))?;
        let n = (2usize ..= 7).map(|i| caps[i].parse::<i64>()).collect::<Result<Vec<_>, _>>()?;
        let cuboid = Cuboid {min: [n[0], n[2], n[4]], max: [n[1], n[3], n[5]]};
        ensure!((0 .. 3).all(|a| cuboid.min[a] <= cuboid.max[a]), "reversed range in {}", line);
        let cuboid = if part == 1 {
            match cuboid.intersect(&region) {Some(c) => c, None => continue}
        } else {cuboid};
        reactor.set(cuboid, &caps[1] == "on");
    }
    debug!(cuboids = reactor.parts.len(), "reboot finished");
    Ok(reactor.lit().to_string())
}
