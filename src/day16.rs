use anyhow::{bail, ensure, Context, Result};
use bitvec::prelude::*;

#[derive(Debug, PartialEq)]
enum Packet {
    Literal {version: u8, value: u64},
    Operator {version: u8, type_id: u8, subs: Vec<Packet>},
}

struct Reader<'a> {bits: &'a BitSlice<u8, Msb0>, pos: usize}

impl Reader<'_> {
    fn take(&mut self, n: usize) -> Result<u64> {
        let chunk = self.bits.get(self.pos .. self.pos + n).context("transmission truncated")?;
        self.pos += n;
        Ok(chunk.iter().fold(0, |acc, bit| acc << 1 | *bit as u64))
    }

    fn packet(&mut self) -> Result<Packet> {
        let version = self.take(3)? as u8;
        let type_id = self.take(3)? as u8;
        if type_id == 4 {
            let mut value = 0u64;
            loop {
                let group = self.take(5)?;
                ensure!(value >> 60 == 0, "literal overflows 64 bits");
                value = value << 4 | group & 0xf;
                if group & 0x10 == 0 {break};
            }
            return Ok(Packet::Literal {version, value});
        }
        let mut subs = vec![];
        if self.take(1)? == 0 {
            let len = self.take(15)? as usize;
            let end = self.pos + len;
            while self.pos < end {subs.push(self.packet()?)}
            ensure!(self.pos == end, "sub-packets overrun their declared length");
        } else {
            for _ in 0 .. self.take(11)? {subs.push(self.packet()?)}
        }
        Ok(Packet::Operator {version, type_id, subs})
    }
}

impl Packet {
    fn version_sum(&self) -> u64 {
        match self {
            Packet::Literal {version, ..} => *version as u64,
            Packet::Operator {version, subs, ..} =>
                *version as u64 + subs.iter().map(Packet::version_sum).sum::<u64>()
        }
    }

    fn eval(&self) -> Result<u64> {
        let (type_id, subs) = match self {
            Packet::Literal {value, ..} => return Ok(*value),
            Packet::Operator {type_id, subs, ..} => (*type_id, subs)
        };
        let values = subs.iter().map(Packet::eval).collect::<Result<Vec<_>>>()?;
        Ok(match (type_id, &values[..]) {
            (0, _) => values.iter().sum(),
            (1, _) => values.iter().product(),
            (2, _) => *values.iter().min().context("min of no packets")?,
            (3, _) => *values.iter().max().context("max of no packets")?,
            (5, &[a, b]) => (a > b) as u64,
            (6, &[a, b]) => (a < b) as u64,
            (7, &[a, b]) => (a == b) as u64,
            _ => bail!("operator {} cannot take {} sub-packets", type_id, values.len())
        })
    }
}

fn decode(hex: &str) -> Result<Packet> {
    let mut bits = BitVec::<u8, Msb0>::with_capacity(4 * hex.len());
    for c in hex.chars() {
        let nibble = c.to_digit(16).with_context(|| format!("{:?} is not a hex digit", c))?;
        for shift in (0 .. 4).rev() {bits.push(nibble >> shift & 1 == 1)}
    }
    let mut reader = Reader {bits: &bits, pos: 0};
    let packet = reader.packet()?;
    ensure!(bits[reader.pos ..].not_any(), "unexpected data after the outermost packet");
    Ok(packet)
}

pub fn day16(part: u8, input: &str) -> Result<String> {
    let packet = decode(input.trim())?;
    Ok(if part == 1 {packet.version_sum()} else {packet.eval()?}.to_string())
}
