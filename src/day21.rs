use anyhow::{ensure, Result};
use regex::Regex;

const TRACK: u64 = 10;

/// Ways to roll each total with three Dirac dice.
const ROLLS: [(u64, u64); 7] = [(3, 1), (4, 3), (5, 6), (6, 7), (7, 6), (8, 3), (9, 1)];

fn advance(pos: u64, by: u64) -> u64 {(pos + by - 1) % TRACK + 1}

fn deterministic(mut pos: [u64; 2]) -> u64 {
    let mut scores = [0u64; 2];
    let mut rolls = 0u64;
    let mut p = 0;
    loop {
        let moved = (0 .. 3).map(|_| {rolls += 1; (rolls - 1) % 100 + 1}).sum::<u64>();
        pos[p] = advance(pos[p], moved);
        scores[p] += pos[p];
        if scores[p] >= 1000 {return scores[1 - p] * rolls};
        p = 1 - p;
    }
}

/// Universes in which the player to move, and the other player, end up winning.
/// Memo is indexed by both positions and both scores.
fn dirac(pos: [u64; 2], scores: [u64; 2], memo: &mut Vec<Option<[u64; 2]>>) -> [u64; 2] {
    let key = (((pos[0] - 1) * TRACK + pos[1] - 1) * 21 + scores[0]) as usize * 21 + scores[1] as usize;
    if let Some(wins) = memo[key] {return wins};
    let mut wins = [0u64; 2];
    for (total, ways) in ROLLS {
        let moved = advance(pos[0], total);
        let score = scores[0] + moved;
        if score >= 21 {
            wins[0] += ways;
        } else {
            let [other, mover] = dirac([pos[1], moved], [scores[1], score], memo);
            wins[0] += ways * mover;
            wins[1] += ways * other;
        }
    }
    memo[key] = Some(wins);
    wins
}

pub fn day21(part: u8, input: &str) -> Result<String> {
    let re = Regex::new(r"Player (\d) starting position: (\d+)")?;
    let mut pos = [0u64; 2];
    for caps in re.captures_iter(input) {
        let player = caps[1].parse::<usize>()?;
        let start = caps[2].parse::<u64>()?;
        ensure!((1 ..= 2).contains(&player) && (1 ..= TRACK).contains(&start),
                "bad starting line {}", &caps[0]);
        pos[player - 1] = start;
    }
    ensure!(pos.iter().all(|&p| p != 0), "both players need a starting position");

    if part == 1 {
        Ok(deterministic(pos).to_string())
    } else {
        let mut memo = vec![None; (TRACK * TRACK * 21 * 21) as usize];
        let wins = dirac(pos, [0, 0], &mut memo);
        Ok(wins.iter().max().copied().unwrap_or(0).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "Player 1 starting position: 4\nPlayer 2 starting position: 8\n";

    #[test]
    fn example() {
        assert_eq!(day21(1, EXAMPLE).unwrap(), "739785");
        assert_eq!(day21(2, EXAMPLE).unwrap(), "444356092776315");
    }

    #[test]
    fn missing_player() {
        assert!(day21(1, "Player 1 starting position: 4").is_err());
    }
}
