use anyhow::{ensure, Context, Result};
use rustc_hash::FxHashMap;

struct Caves<'a> {
    names: Vec<&'a str>,
    small: Vec<bool>,
    links: Vec<Vec<usize>>,
}

impl<'a> Caves<'a> {
    fn id(&mut self, name: &'a str, ids: &mut FxHashMap<&'a str, usize>) -> usize {
        *ids.entry(name).or_insert_with(|| {
            self.names.push(name);
            self.small.push(name.bytes().all(|b| b.is_ascii_lowercase()));
            self.links.push(vec![]);
            self.names.len() - 1
        })
    }

    /// Paths from `at` to `end`; `visited` is a bitmask of small caves on the current path.
    fn paths(&self, at: usize, end: usize, start: usize, visited: u64, spare_visit: bool) -> u64 {
        if at == end {return 1};
        self.links[at].iter().map(|&next| {
            let seen = visited & (1 << next) != 0;
            if !self.small[next] {
                self.paths(next, end, start, visited, spare_visit)
            } else if !seen {
                self.paths(next, end, start, visited | 1 << next, spare_visit)
            } else if spare_visit && next != start {
                self.paths(next, end, start, visited, false)
            } else {0}
        }).sum()
    }
}

pub fn day12(part: u8, input: &str) -> Result<String> {
    let mut caves = Caves {names: vec![], small: vec![], links: vec![]};
    let mut ids = FxHashMap::default();
    for line in input.trim().lines() {
        let (a, b) = line.trim().split_once('-').with_context(|| format!("bad passage {}", line))?;
        let (a, b) = (caves.id(a, &mut ids), caves.id(b, &mut ids));
        caves.links[a].push(b);
        caves.links[b].push(a);
    }
    ensure!(caves.names.len() <= 64, "too many caves");
    let start = *ids.get("start").context("no start cave")?;
    let end = *ids.get("end").context("no end cave")?;
    ensure!(
        (0 .. caves.names.len()).all(|c| caves.small[c] || caves.links[c].iter().all(|&n| caves.small[n])),
        "two big caves are linked, paths are unbounded"
    );
    Ok(caves.paths(start, end, start, 1 << start, part == 2).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "start-A\nstart-b\nA-c\nA-b\nb-d\nA-end\nb-end\n";
    const LARGER: &str = "\
dc-end
HN-start
start-kj
dc-start
dc-HN
LN-dc
HN-end
kj-sa
kj-HN
kj-dc
";

    #[test]
    fn examples() {
        assert_eq!(day12(1, SMALL).unwrap(), "10");
        assert_eq!(day12(2, SMALL).unwrap(), "36");
        assert_eq!(day12(1, LARGER).unwrap(), "19");
        assert_eq!(day12(2, LARGER).unwrap(), "103");
    }

    #[test]
    fn linked_big_caves() {
        assert!(day12(1, "start-A\nA-B\nB-end").is_err());
    }
}
