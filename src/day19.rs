use anyhow::{bail, ensure, Context, Result};
use itertools::Itertools;
use rustc_hash::FxHashMap;
use tracing::debug;

type Point = [i32; 3];
type Rotation = [[i32; 3]; 3];

const OVERLAP: usize = 12;

fn det(m: &Rotation) -> i32 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// The 24 orientations: signed axis permutations with determinant 1.
fn rotations() -> Vec<Rotation> {
    [0usize, 1, 2].into_iter().permutations(3).flat_map(|perm| {
        (0 .. 8u8).filter_map(move |signs| {
            let mut m = [[0; 3]; 3];
            for r in 0 .. 3 {m[r][perm[r]] = if signs >> r & 1 == 1 {-1} else {1}}
            (det(&m) == 1).then_some(m)
        })
    }).collect()
}

fn rotate(m: &Rotation, p: Point) -> Point {
    [0, 1, 2].map(|r| (0 .. 3).map(|c| m[r][c] * p[c]).sum())
}

fn sub(a: Point, b: Point) -> Point {[a[0] - b[0], a[1] - b[1], a[2] - b[2]]}
fn add(a: Point, b: Point) -> Point {[a[0] + b[0], a[1] + b[1], a[2] + b[2]]}
fn manhattan(a: Point, b: Point) -> i32 {sub(a, b).iter().map(|d| d.abs()).sum()}

/// Multiset of squared distances between every two beacons of a scanner. Rotation and
/// translation leave it unchanged, so two scanners sharing 12 beacons share 66 entries.
fn fingerprint(beacons: &[Point]) -> FxHashMap<i64, usize> {
    let mut counts = FxHashMap::default();
    for (a, b) in beacons.iter().tuple_combinations() {
        let d = sub(*a, *b);
        *counts.entry(d.iter().map(|&x| x as i64 * x as i64).sum()).or_default() += 1;
    }
    counts
}

fn shared(a: &FxHashMap<i64, usize>, b: &FxHashMap<i64, usize>) -> usize {
    a.iter().map(|(d, n)| b.get(d).map_or(0, |m| *n.min(m))).sum()
}

/// Finds the orientation and offset that lay at least 12 of `beacons` onto `placed`.
/// Returns the beacons in the frame of `placed` and the scanner's position there.
fn align(placed: &[Point], beacons: &[Point], rots: &[Rotation]) -> Option<(Vec<Point>, Point)> {
    for rot in rots {
        let turned = beacons.iter().map(|&b| rotate(rot, b)).collect::<Vec<_>>();
        let mut offsets = FxHashMap::<Point, usize>::default();
        for &p in placed {
            for &t in &turned {
                let n = offsets.entry(sub(p, t)).or_default();
                *n += 1;
                if *n >= OVERLAP {
                    let offset = sub(p, t);
                    return Some((turned.iter().map(|&t| add(t, offset)).collect(), offset));
                }
            }
        }
    }
    None
}

/// Places every scanner in the frame of scanner 0. Returns the beacons of each scanner
/// in that frame, and the scanner positions.
fn register(scanners: &[Vec<Point>]) -> Result<(Vec<Vec<Point>>, Vec<Point>)> {
    let rots = rotations();
    let prints = scanners.iter().map(|s| fingerprint(s)).collect::<Vec<_>>();
    let mut world: Vec<Option<Vec<Point>>> = vec![None; scanners.len()];
    let mut positions = vec![[0; 3]; scanners.len()];
    world[0] = Some(scanners[0].clone());
    let mut queue = vec![0];
    while let Some(i) = queue.pop() {
        for j in 0 .. scanners.len() {
            if world[j].is_some() || shared(&prints[i], &prints[j]) < OVERLAP * (OVERLAP - 1) / 2 {continue};
            let Some(placed) = &world[i] else {continue};
            if let Some((beacons, position)) = align(placed, &scanners[j], &rots) {
                debug!(scanner = j, via = i, ?position, "aligned scanner");
                world[j] = Some(beacons);
                positions[j] = position;
                queue.push(j);
            }
        }
    }
    let world = world.into_iter().enumerate().map(|(i, beacons)|
        beacons.with_context(|| format!("scanner {} overlaps no other scanner", i))
    ).collect::<Result<Vec<_>>>()?;
    Ok((world, positions))
}

fn parse(input: &str) -> Result<Vec<Vec<Point>>> {
    input.trim().split("\n\n").map(|block| {
        let mut lines = block.lines();
        let header = lines.next().unwrap_or_default();
        ensure!(header.starts_with("--- scanner"), "expected scanner header, got {:?}", header);
        lines.map(|line| {
            let coords = line.trim().split(',').map(|c| c.parse::<i32>()).collect::<Result<Vec<_>, _>>()
                .with_context(|| format!("bad beacon {}", line))?;
            match coords[..] {
                [x, y, z] => Ok([x, y, z]),
                _ => bail!("beacon {} is not three coordinates", line)
            }
        }).collect::<Result<Vec<Point>>>()
    }).collect()
}

pub fn day19(part: u8, input: &str) -> Result<String> {
    let scanners = parse(input)?;
    ensure!(!scanners.is_empty(), "no scanners");
    let (world, positions) = register(&scanners)?;
    if part == 1 {
        Ok(world.iter().flatten().unique().count().to_string())
    } else {
        let widest = positions.iter().tuple_combinations().map(|(&a, &b)| manhattan(a, b)).max();
        Ok(widest.unwrap_or(0).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_four_orientations() {
        let rots = rotations();
        assert_eq!(rots.len(), 24);
        assert_eq!(rots.iter().unique().count(), 24);
        let p = [1, 2, 3];
        assert_eq!(rots.iter().map(|r| rotate(r, p)).unique().count(), 24);
    }

    fn format_scanner(id: usize, beacons: &[Point]) -> String {
        let lines = beacons.iter().map(|p| format!("{},{},{}", p[0], p[1], p[2])).join("\n");
        format!("--- scanner {} ---\n{}", id, lines)
    }

    #[test]
    fn two_scanners() {
        let common = (0 .. 12).map(|i| [i * 37 % 101 - 50, i * 53 % 97 - 40, i * i % 89 - 30]).collect::<Vec<_>>();
        let mut first = common.clone();
        first.extend([[500, 400, 300], [-600, 20, 10]]);
        // second scanner sits at (68, -1246, -43), turned (x, y, z) -> (y, -x, z)
        let at = [68, -1246, -43];
        let mut second = common.iter().map(|&p| sub(p, at)).collect::<Vec<_>>();
        second.extend([[700, 0, 0], [0, 700, 0], [0, 0, 700]]);
        let second = second.iter().map(|p| [p[1], -p[0], p[2]]).collect::<Vec<_>>();
        let input = format!("{}\n\n{}\n", format_scanner(0, &first), format_scanner(1, &second));

        assert_eq!(day19(1, &input).unwrap(), "17");
        assert_eq!(day19(2, &input).unwrap(), (68 + 1246 + 43).to_string());
    }

    #[test]
    fn lonely_scanner() {
        let input = "--- scanner 0 ---\n1,2,3\n\n--- scanner 1 ---\n4,5,6\n";
        assert!(day19(1, input).is_err());
    }
}
