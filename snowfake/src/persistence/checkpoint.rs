//! Text checkpoint format (§6): row-major `d b c attached ring` records
//! followed by `r_old r_new t`. Reals are written with exactly ten
//! fractional digits; the reader tolerates arbitrary whitespace between
//! fields.

use std::fs;
use std::path::Path;

use crate::cell::Cell;
use crate::engine::EngineHeader;
use crate::error::{Result, SnowfakeError};
use crate::lattice::Lattice;

pub fn write(path: impl AsRef<Path>, lattice: &Lattice, header: &EngineHeader) -> Result<()> {
    let l = lattice.side();
    let mut out = String::with_capacity(l * l * 48 + 32);

    for i in 0..l {
        for j in 0..l {
            let cell = lattice.at(i, j);
            out.push_str(&format!(
                "{:.10} {:.10} {:.10} {} {} ",
                cell.d, cell.b, cell.c, cell.attached as u8, cell.ring
            ));
        }
    }
    out.push_str(&format!("{} {} {} ", header.r_old, header.r_new, header.t));

    fs::write(path, out)?;
    Ok(())
}

/// A whitespace-tolerant tokenizer that records the byte offset of each
/// token's start, so malformed checkpoints can be reported precisely (§7).
struct Tokenizer<'a> {
    rest: &'a str,
    offset: usize,
}

impl<'a> Tokenizer<'a> {
    fn new(input: &'a str) -> Self {
        Self { rest: input, offset: 0 }
    }

    fn next_token(&mut self) -> Option<(&'a str, usize)> {
        let trimmed_start = self.rest.len() - self.rest.trim_start().len();
        self.offset += trimmed_start;
        self.rest = self.rest.trim_start();
        if self.rest.is_empty() {
            return None;
        }
        let end = self.rest.find(char::is_whitespace).unwrap_or(self.rest.len());
        let token = &self.rest[..end];
        let start_offset = self.offset;
        self.rest = &self.rest[end..];
        self.offset += end;
        Some((token, start_offset))
    }
}

fn parse_f64(token: &str, offset: usize) -> Result<f64> {
    token.parse().map_err(|_| SnowfakeError::CheckpointMalformed {
        offset,
        reason: format!("expected a real number, found `{token}`"),
    })
}

fn parse_u32(token: &str, offset: usize) -> Result<u32> {
    token.parse().map_err(|_| SnowfakeError::CheckpointMalformed {
        offset,
        reason: format!("expected an integer, found `{token}`"),
    })
}

fn parse_u64(token: &str, offset: usize) -> Result<u64> {
    token.parse().map_err(|_| SnowfakeError::CheckpointMalformed {
        offset,
        reason: format!("expected an integer, found `{token}`"),
    })
}

pub fn read(path: impl AsRef<Path>, l: usize) -> Result<(Lattice, EngineHeader)> {
    let contents = fs::read_to_string(path)?;
    let mut tokens = Tokenizer::new(&contents);

    let mut lattice = Lattice::new(l);

    let mut next = |context: &str| -> Result<(&str, usize)> {
        tokens.next_token().ok_or_else(|| SnowfakeError::CheckpointMalformed {
            offset: contents.len(),
            reason: format!("unexpected end of file while reading {context}"),
        })
    };

    for i in 0..l {
        for j in 0..l {
            let (d_tok, d_off) = next("d")?;
            let d = parse_f64(d_tok, d_off)?;
            let (b_tok, b_off) = next("b")?;
            let b = parse_f64(b_tok, b_off)?;
            let (c_tok, c_off) = next("c")?;
            let c = parse_f64(c_tok, c_off)?;
            let (a_tok, a_off) = next("attached")?;
            let attached = parse_u32(a_tok, a_off)? != 0;
            let (ring_tok, ring_off) = next("ring")?;
            let ring = parse_u32(ring_tok, ring_off)?;

            *lattice.at_mut(i, j) = Cell { d, b, c, attached, ring };
        }
    }

    let (r_old_tok, r_old_off) = next("r_old")?;
    let r_old = parse_u32(r_old_tok, r_old_off)?;
    let (r_new_tok, r_new_off) = next("r_new")?;
    let r_new = parse_u32(r_new_tok, r_new_off)?;
    let (t_tok, t_off) = next("t")?;
    let t = parse_u64(t_tok, t_off)?;

    // The checkpoint format (like the original program's) has no field for
    // `ring_counter` — only `r_old`/`r_new`/`t` survive a save/load round
    // trip. Reconstruct the smallest value that can't collide with a ring
    // index already recorded on an attached cell.
    let ring_counter = lattice
        .cells()
        .iter()
        .filter(|c| c.attached)
        .map(|c| c.ring)
        .max()
        .map_or(1, |max_ring| max_ring + 1);

    let (cx, cy) = lattice.center();
    let header = EngineHeader {
        cx,
        cy,
        r_old,
        r_new,
        t,
        stop: false,
        ring_counter,
    };

    Ok((lattice, header))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::initializer::seed_lattice;
    use crate::parameters::Parameters;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn round_trips_a_nontrivial_state() {
        let params = Parameters { l: 9, h: 0, p: 1.0, rho: 0.7, ..Parameters::default() };
        let mut rng = Pcg64::seed_from_u64(11);
        let (mut lattice, mut header) = seed_lattice(&params, &mut rng);
        header.t = 100;
        header.r_new = 3;
        header.r_old = 2;
        lattice.at_mut(4, 5).b = 0.123456789012;
        lattice.at_mut(4, 5).c = 0.987654321098;
        lattice.at_mut(4, 5).ring = 7;

        let dir = std::env::temp_dir().join(format!("snowfake-checkpoint-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("state.chk");

        write(&path, &lattice, &header).unwrap();
        let (loaded_lattice, loaded_header) = read(&path, params.l).unwrap();

        assert_eq!(loaded_header.t, header.t);
        assert_eq!(loaded_header.r_new, header.r_new);
        assert_eq!(loaded_header.r_old, header.r_old);

        for i in 0..params.l {
            for j in 0..params.l {
                let original = lattice.at(i, j);
                let loaded = loaded_lattice.at(i, j);
                assert!((original.d - loaded.d).abs() < 1e-9);
                assert!((original.b - loaded.b).abs() < 1e-9);
                assert!((original.c - loaded.c).abs() < 1e-9);
                assert_eq!(original.attached, loaded.attached);
                assert_eq!(original.ring, loaded.ring);
            }
        }

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn ring_counter_reconstructs_past_largest_attached_ring() {
        let params = Parameters { l: 9, h: 0, p: 1.0, rho: 0.7, ..Parameters::default() };
        let mut rng = Pcg64::seed_from_u64(11);
        let (mut lattice, header) = seed_lattice(&params, &mut rng);
        lattice.at_mut(1, 1).attached = true;
        lattice.at_mut(1, 1).ring = 5;
        lattice.at_mut(2, 2).attached = true;
        lattice.at_mut(2, 2).ring = 9;

        let dir = std::env::temp_dir().join(format!("snowfake-checkpoint-ring-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("state.chk");

        write(&path, &lattice, &header).unwrap();
        let (_, loaded_header) = read(&path, params.l).unwrap();
        assert_eq!(loaded_header.ring_counter, 10);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn tolerates_irregular_whitespace() {
        let content = "0.0000000000   0.0000000000\t0.0000000000\n1  0 \n0 0 0\n";
        let dir = std::env::temp_dir().join(format!("snowfake-checkpoint-ws-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("whitespace.chk");
        std::fs::write(&path, content).unwrap();

        let (lattice, header) = read(&path, 1).unwrap();
        assert!(lattice.at(0, 0).attached);
        assert_eq!(header.t, 0);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn rejects_truncated_file() {
        let dir = std::env::temp_dir().join(format!("snowfake-checkpoint-trunc-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("truncated.chk");
        std::fs::write(&path, "0.0 1 0.0").unwrap();

        let result = read(&path, 3);
        assert!(matches!(result, Err(SnowfakeError::CheckpointMalformed { .. })));

        std::fs::remove_dir_all(&dir).ok();
    }
}
