use anyhow::{bail, ensure, Context, Result};
use arrayvec::ArrayVec;
use rustc_hash::FxHashMap;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tracing::debug;

const HALL: usize = 11;
const ENERGY: [u32; 4] = [1, 10, 100, 1000];
const UNFOLDED: [&str; 2] = ["  #D#C#B#A#", "  #D#B#A#C#"];

fn entrance(room: usize) -> usize {2 + 2 * room}

/// Amphipods are 1 ..= 4 (A ..= D), 0 is an empty hallway cell. Rooms are stacks with
/// the deepest amphipod first.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct Burrow {
    hall: [u8; HALL],
    rooms: [ArrayVec<u8, 4>; 4],
}

impl Burrow {
    fn settled(&self, room: usize) -> bool {
        self.rooms[room].iter().all(|&a| a as usize == room + 1)
    }

    fn hall_clear(&self, from: usize, to: usize) -> bool {
        let range = if from < to {from + 1 ..= to} else {to ..= from - 1};
        self.hall[range].iter().all(|&c| c == 0)
    }

    fn is_done(&self, depth: usize) -> bool {
        (0 .. 4).all(|r| self.rooms[r].len() == depth && self.settled(r))
    }

    /// Every legal single move and its energy.
    fn moves(&self, depth: usize) -> Vec<(Burrow, u32)> {
        let mut out = vec![];
        // hallway into the amphipod's own room
        for col in 0 .. HALL {
            let a = self.hall[col];
            if a == 0 {continue};
            let room = a as usize - 1;
            if !self.settled(room) || self.rooms[room].len() >= depth {continue};
            if !self.hall_clear(col, entrance(room)) {continue};
            let steps = col.abs_diff(entrance(room)) + depth - self.rooms[room].len();
            let mut next = self.clone();
            next.hall[col] = 0;
            next.rooms[room].push(a);
            out.push((next, steps as u32 * ENERGY[room]));
        }
        // top of an unsettled room out to a hallway stop
        for room in 0 .. 4 {
            if self.settled(room) {continue};
            let Some(&a) = self.rooms[room].last() else {continue};
            let up = depth - self.rooms[room].len() + 1;
            for col in (0 .. HALL).filter(|&c| !matches!(c, 2 | 4 | 6 | 8)) {
                if !self.hall_clear(entrance(room), col) {continue};
                let mut next = self.clone();
                next.rooms[room].pop();
                next.hall[col] = a;
                let steps = up + col.abs_diff(entrance(room));
                out.push((next, steps as u32 * ENERGY[a as usize - 1]));
            }
        }
        out
    }
}

fn parse(input: &str, unfold: bool) -> Result<(Burrow, usize)> {
    let lines = input.lines().filter(|l| !l.trim().is_empty()).collect::<Vec<_>>();
    ensure!(lines.len() >= 4, "burrow diagram too short");
    let hall_line = lines[1].as_bytes();
    let mut hall = [0u8; HALL];
    for (col, cell) in hall.iter_mut().enumerate() {
        *cell = match hall_line.get(col + 1) {
            Some(b'.') => 0,
            Some(&b @ b'A' ..= b'D') => b - b'A' + 1,
            other => bail!("bad hallway cell {:?}", other.map(|&b| b as char))
        };
    }
    let mut room_lines = lines[2 .. lines.len() - 1].to_vec();
    if unfold {
        ensure!(!room_lines.is_empty(), "no room rows to unfold");
        for (k, row) in UNFOLDED.into_iter().enumerate() {room_lines.insert(1 + k, row)}
    }
    let depth = room_lines.len();
    ensure!((1 ..= 4).contains(&depth), "rooms are {} deep, at most 4 supported", depth);
    let mut rooms: [ArrayVec<u8, 4>; 4] = Default::default();
    for (k, line) in room_lines.iter().rev().enumerate() {
        for (room, stack) in rooms.iter_mut().enumerate() {
            match line.as_bytes().get(3 + 2 * room) {
                Some(&b @ b'A' ..= b'D') => {
                    ensure!(stack.len() == k, "gap below an amphipod in room {}", room);
                    stack.push(b - b'A' + 1);
                }
                Some(b'.') => (),
                other => bail!("bad room cell {:?} in {}", other.map(|&b| b as char), line)
            }
        }
    }
    Ok((Burrow {hall, rooms}, depth))
}

fn least_energy(start: Burrow, depth: usize) -> Option<u32> {
    let mut best = FxHashMap::default();
    let mut queue = BinaryHeap::new();
    best.insert(start.clone(), 0);
    queue.push(Reverse((0, start)));
    while let Some(Reverse((energy, burrow))) = queue.pop() {
        if burrow.is_done(depth) {
            debug!(states = best.len(), "burrow organised");
            return Some(energy);
        }
        if best.get(&burrow).is_some_and(|&e| e < energy) {continue};
        for (next, cost) in burrow.moves(depth) {
            let energy = energy + cost;
            if best.get(&next).map_or(true, |&e| energy < e) {
                best.insert(next.clone(), energy);
                queue.push(Reverse((energy, next)));
            }
        }
    }
    None
}

pub fn day23(part: u8, input: &str) -> Result<String> {
    let (burrow, depth) = parse(input, part == 2)?;
    let energy = least_energy(burrow, depth).context("amphipods can never be organised")?;
    Ok(energy.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
#############
#...........#
###B#C#B#D###
  #A#D#C#A#
  #########
";

    #[test]
    fn example() {
        assert_eq!(day23(1, EXAMPLE).unwrap(), "12521");
        assert_eq!(day23(2, EXAMPLE).unwrap(), "44169");
    }

    #[test]
    fn one_swap() {
        let input = "#############\n#...........#\n###B#A#C#D###\n  #A#B#C#D#\n  #########\n";
        // A steps aside to col 5, B goes home by way of col 3, then A walks back to its room
        assert_eq!(day23(1, input).unwrap(), (2 + 20 + 20 + 4).to_string());
    }

    #[test]
    fn already_done() {
        let input = "#############\n#...........#\n###A#B#C#D###\n  #A#B#C#D#\n  #########\n";
        assert_eq!(day23(1, input).unwrap(), "0");
    }

    #[test]
    fn unsolvable() {
        let input = "#############\n#...........#\n###B#B#C#D###\n  #B#A#C#D#\n  #########\n";
        assert!(day23(1, input).is_err());
    }
}
