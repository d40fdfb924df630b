use anyhow::{bail, ensure, Context, Result};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Operand {Reg(usize), Imm(i64)}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Instr {
    Inp(usize),
    Add(usize, Operand),
    Mul(usize, Operand),
    Div(usize, Operand),
    Mod(usize, Operand),
    Eql(usize, Operand),
}

fn register(s: &str) -> Result<usize> {
    match s {
        "w" => Ok(0), "x" => Ok(1), "y" => Ok(2), "z" => Ok(3),
        _ => bail!("{:?} is not a register", s)
    }
}

fn parse(input: &str) -> Result<Vec<Instr>> {
    input.trim().lines().map(|line| {
        let words = line.split_whitespace().collect::<Vec<_>>();
        let operand = |s: &str| register(s).map(Operand::Reg).or_else(|_|
            s.parse().map(Operand::Imm).with_context(|| format!("bad operand in {}", line))
        );
        Ok(match words[..] {
            ["inp", a] => Instr::Inp(register(a)?),
            ["add", a, b] => Instr::Add(register(a)?, operand(b)?),
            ["mul", a, b] => Instr::Mul(register(a)?, operand(b)?),
            ["div", a, b] => Instr::Div(register(a)?, operand(b)?),
            ["mod", a, b] => Instr::Mod(register(a)?, operand(b)?),
            ["eql", a, b] => Instr::Eql(register(a)?, operand(b)?),
            _ => bail!("cannot parse instruction {}", line)
        })
    }).collect()
}

/// Registers w, x, y and z, in that order.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Alu {regs: [i64; 4]}

impl Alu {
    fn value(&self, operand: Operand) -> i64 {
        match operand {Operand::Reg(r) => self.regs[r], Operand::Imm(v) => v}
    }

    fn run(&mut self, program: &[Instr], input: &mut VecDeque<i64>) -> Result<()> {
        for &instr in program {
            match instr {
                Instr::Inp(a) => self.regs[a] = input.pop_front().context("input exhausted")?,
                Instr::Add(a, b) => {
                    let b = self.value(b);
                    self.regs[a] = self.regs[a].checked_add(b)
                        .with_context(|| format!("overflow in add {} {}", self.regs[a], b))?;
                }
                Instr::Mul(a, b) => {
                    let b = self.value(b);
                    self.regs[a] = self.regs[a].checked_mul(b)
                        .with_context(|| format!("overflow in mul {} {}", self.regs[a], b))?;
                }
                Instr::Div(a, b) => {
                    let b = self.value(b);
                    ensure!(b != 0, "division by zero");
                    self.regs[a] = self.regs[a].checked_div(b)
                        .with_context(|| format!("overflow in div {} {}", self.regs[a], b))?;
                }
                Instr::Mod(a, b) => {
                    let b = self.value(b);
                    ensure!(self.regs[a] >= 0 && b > 0, "mod {} by {}", self.regs[a], b);
                    self.regs[a] %= b;
                }
                Instr::Eql(a, b) => self.regs[a] = (self.regs[a] == self.value(b)) as i64,
            }
        }
        Ok(())
    }
}

/// The program cut at every `inp`. Each segment's registers except z are dead on entry,
/// so a segment maps (z, digit) to the next z.
struct Segments {
    segments: Vec<Vec<Instr>>,
    /// z at or above `bounds[i]` before segment i can never come back to 0.
    bounds: Vec<i64>,
}

impl Segments {
    fn new(program: &[Instr]) -> Result<Segments> {
        ensure!(matches!(program.first(), Some(Instr::Inp(_))), "program must start with inp");
        let mut segments: Vec<Vec<Instr>> = vec![];
        for &instr in program {
            match instr {
                Instr::Inp(_) => segments.push(vec![instr]),
                _ => segments.last_mut().context("instruction before the first inp")?.push(instr)
            }
        }
        // the accepted digits are packed into a u64
        ensure!(segments.len() <= 19, "{} inputs are too many digits for a model number", segments.len());
        let mut bounds = vec![0; segments.len()];
        let mut bound = 1i64;
        for (i, segment) in segments.iter().enumerate().rev() {
            for instr in segment {
                if let Instr::Div(3, Operand::Imm(n)) = instr {
                    if *n > 1 {bound = bound.saturating_mul(*n)}
                }
            }
            bounds[i] = bound;
        }
        Ok(Segments {segments, bounds})
    }

    fn step(&self, i: usize, z: i64, digit: i64) -> Result<i64> {
        let mut alu = Alu {regs: [0, 0, 0, z]};
        alu.run(&self.segments[i], &mut VecDeque::from([digit]))?;
        Ok(alu.regs[3])
    }

    /// Depth-first over digits in `order`; `dead` memoizes (segment, z) states with no
    /// accepted continuation. Returns the accepted digits read from segment i onward.
    fn search(&self, i: usize, z: i64, order: &[i64], dead: &mut FxHashSet<(usize, i64)>) -> Result<Option<u64>> {
        if i == self.segments.len() {return Ok((z == 0).then_some(0))};
        if z >= self.bounds[i] || dead.contains(&(i, z)) {return Ok(None)};
        for &digit in order {
            let next = self.step(i, z, digit)?;
            if let Some(rest) = self.search(i + 1, next, order, dead)? {
                let place = 10u64.pow((self.segments.len() - i - 1) as u32);
                return Ok(Some(digit as u64 * place + rest));
            }
        }
        dead.insert((i, z));
        Ok(None)
    }
}

pub fn day24(part: u8, input: &str) -> Result<String> {
    let program = parse(input)?;
    let segments = Segments::new(&program)?;
    let order: Vec<i64> = if part == 1 {(1 ..= 9).rev().collect()} else {(1 ..= 9).collect()};
    let mut dead = FxHashSet::default();
    let found = segments.search(0, 0, &order, &mut dead)?;
    debug!(dead_states = dead.len(), "model number search finished");
    Ok(found.context("no model number is accepted")?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(program: &str, input: &[i64]) -> Alu {
        let mut alu = Alu::default();
        alu.run(&parse(program).unwrap(), &mut input.iter().copied().collect()).unwrap();
        alu
    }

    #[test]
    fn negate() {
        assert_eq!(run("inp x\nmul x -1", &[7]).regs[1], -7);
    }

    #[test]
    fn three_times() {
        let program = "inp z\ninp x\nmul z 3\neql z x";
        assert_eq!(run(program, &[3, 9]).regs[3], 1);
        assert_eq!(run(program, &[3, 8]).regs[3], 0);
    }

    #[test]
    fn binary_digits() {
        let program = "\
inp w
add z w
mod z 2
div w 2
add y w
mod y 2
div w 2
add x w
mod x 2
div w 2
mod w 2";
        assert_eq!(run(program, &[13]).regs, [1, 1, 0, 1]);
    }

    #[test]
    fn bad_mod() {
        let mut alu = Alu::default();
        assert!(alu.run(&parse("inp x\nmod x 0").unwrap(), &mut VecDeque::from([3])).is_err());
        let mut alu = Alu::default();
        assert!(alu.run(&parse("inp x\nmod x 5").unwrap(), &mut VecDeque::from([-3])).is_err());
    }

    #[test]
    fn bad_div() {
        let mut alu = Alu::default();
        assert!(alu.run(&parse("inp x\ndiv x 0").unwrap(), &mut VecDeque::from([3])).is_err());
        let mut alu = Alu {regs: [0, i64::MIN, 0, 0]};
        assert!(alu.run(&parse("div x -1").unwrap(), &mut VecDeque::new()).is_err());
    }

    #[test]
    fn overflow_is_an_error() {
        assert!(day24(1, "inp w\nadd z w\nmul z 9223372036854775807").is_err());
        let mut alu = Alu {regs: [0, 0, 0, i64::MAX]};
        assert!(alu.run(&parse("add z 1").unwrap(), &mut VecDeque::new()).is_err());
    }

    #[test]
    fn too_many_digits() {
        let program = "inp w\n".repeat(20);
        assert!(day24(1, &program).is_err());
    }

    /// One digit of the usual model-number checker: push `w + c` or pop and compare.
    fn block(div: i64, add_x: i64, add_y: i64) -> String {
        format!("inp w\nmul x 0\nadd x z\nmod x 26\ndiv z {div}\nadd x {add_x}\neql x w\neql x 0\n\
                 mul y 0\nadd y 25\nmul y x\nadd y 1\nmul z y\nmul y 0\nadd y w\nadd y {add_y}\n\
                 mul y x\nadd z y\n")
    }

    #[test]
    fn model_numbers() {
        // pairs of (push, pop) blocks; a pop accepts w_pop = w_push + 5 + b
        let program = [-7, -5, -1, -13, -4, -2, -6].iter()
            .map(|&b| block(1, 12, 5) + &block(26, b, 5))
            .collect::<String>();
        assert_eq!(day24(1, &program).unwrap(), "97995991896998");
        assert_eq!(day24(2, &program).unwrap(), "31111591121421");
    }

    #[test]
    fn nothing_accepted() {
        let program = block(1, 12, 5);
        assert!(day24(1, &program).is_err());
    }
}
