//! Produces the starting configuration for a run: either the standard
//! hexagonal seed or the twelve-sided star seed, per §4.3.

use rand::Rng;
use rand_pcg::Pcg64;

use crate::cell::Cell;
use crate::engine::EngineHeader;
use crate::lattice::Lattice;
use crate::parameters::Parameters;

/// Seeds a [`rand_pcg::Pcg64`] the way the original program does: from the
/// system clock modulo 1000, discarding that many draws before use, for
/// compatibility with the historical draw sequence (§4.3). Prefer
/// [`crate::initializer::seed_lattice`] with an explicit RNG in tests, where
/// reproducibility matters more than matching the legacy sequence.
pub fn rng_from_system_time() -> Pcg64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let seed = (millis % 1000) as u64;
    let mut rng = Pcg64::new(seed as u128, 0xa02bdbf7bb3c0a7ac28fa16a64abf96u128);
    for _ in 0..seed {
        let _: f64 = rng.gen();
    }
    rng
}

/// Builds the initial [`Lattice`] and [`EngineHeader`] from `params`, using
/// `rng` for the per-cell attachment draws of the standard seed (§4.3's
/// `x <= p` test). The twelve-sided seed is deterministic and does not
/// consume the RNG.
pub fn seed_lattice(params: &Parameters, rng: &mut Pcg64) -> (Lattice, EngineHeader) {
    let l = params.l;
    let mut lattice = Lattice::new(l);
    let (cx, cy) = lattice.center();
    let h = params.seed_radius() as i64;
    let mut r_new: u32 = 0;

    if !params.twelve_sided() {
        for i in 0..l {
            for j in 0..l {
                let x: f64 = rng.gen();
                let di = i as i64 - cx as i64;
                let dj = j as i64 - cy as i64;
                let in_hexagon =
                    di.abs().max(dj.abs()) <= h && (di + dj).abs() <= h;
                let cell = if in_hexagon && x <= params.p {
                    let k = lattice.linf_distance_from_center(i as i64, j as i64);
                    r_new = r_new.max(k);
                    Cell::standard_seed()
                } else {
                    Cell::vapor(params.rho)
                };
                *lattice.at_mut(i, j) = cell;
            }
        }
    } else {
        for i in 0..l {
            for j in 0..l {
                let di = i as i64 - cx as i64;
                let dj = j as i64 - cy as i64;
                let on_segment = (di == -dj && di <= 0 && di >= -h)
                    || (di >= 0 && di <= h && dj == 0)
                    || (dj <= 0 && dj >= -h && di == 0);
                let cell = if on_segment {
                    let k = lattice.linf_distance_from_center(i as i64, j as i64);
                    r_new = r_new.max(k);
                    Cell::twelve_sided_seed()
                } else {
                    Cell::vapor(params.rho)
                };
                *lattice.at_mut(i, j) = cell;
            }
        }
    }

    let header = EngineHeader {
        cx,
        cy,
        r_old: r_new,
        r_new,
        t: 0,
        stop: false,
        ring_counter: 1,
    };

    (lattice, header)
}
