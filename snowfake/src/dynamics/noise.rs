use ndarray::Array2;
use ndarray_rand::{rand_distr::Standard, RandomExt as _};
use rand_pcg::Pcg64;

use crate::lattice::Lattice;

/// Multiplicative per-tick perturbation of vapor mass, applied at the end of
/// a tick only when `sigma > 0` (§4.8). Every cell, attached or not, draws a
/// fresh coin flip: `d *= 1+sigma` with probability 1/2, `d *= 1-sigma`
/// otherwise. Not windowed — matches `dynamics_add_noise`'s full-lattice
/// loop in the original source. The coin flips are drawn as a single random
/// boolean array, the same `Array2::<bool>::random(shape, Standard)` idiom
/// used for the noise mask in the teacher's own `update()`.
pub fn apply_tick_noise(lattice: &mut Lattice, sigma: f64, rng: &mut Pcg64) {
    debug_assert!(sigma > 0.0);
    let l = lattice.side();
    let raise: Array2<bool> = Array2::random_using((l, l), Standard, rng);

    for i in 0..l {
        for j in 0..l {
            let cell = lattice.at_mut(i, j);
            if raise[[i, j]] {
                cell.d *= 1.0 + sigma;
            } else {
                cell.d *= 1.0 - sigma;
            }
        }
    }
}

/// One-shot rarefaction applied once after loading a checkpoint, when
/// `sigma < 0` (§4.8). Only non-attached cells are adjusted; this is not
/// mass-preserving, matching `dynamics_add_noise1` in the original source.
pub fn apply_post_load_noise(lattice: &mut Lattice, sigma: f64) {
    if sigma >= 0.0 {
        return;
    }
    let l = lattice.side();
    for i in 0..l {
        for j in 0..l {
            let cell = lattice.at_mut(i, j);
            if !cell.attached {
                cell.d += sigma * cell.d;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn post_load_noise_is_noop_for_nonnegative_sigma() {
        let mut lattice = Lattice::new(5);
        lattice.at_mut(0, 0).d = 1.0;
        apply_post_load_noise(&mut lattice, 0.0);
        assert_eq!(lattice.at(0, 0).d, 1.0);
    }

    #[test]
    fn post_load_noise_scales_only_unattached_vapor() {
        let mut lattice = Lattice::new(5);
        lattice.at_mut(0, 0).d = 1.0;
        lattice.at_mut(1, 1).d = 1.0;
        lattice.at_mut(1, 1).attached = true;
        apply_post_load_noise(&mut lattice, -0.5);
        assert!((lattice.at(0, 0).d - 0.5).abs() < 1e-12);
        assert_eq!(lattice.at(1, 1).d, 1.0);
    }

    #[test]
    fn tick_noise_perturbs_every_cell() {
        let mut lattice = Lattice::new(5);
        for i in 0..5 {
            for j in 0..5 {
                lattice.at_mut(i, j).d = 1.0;
            }
        }
        let mut rng = Pcg64::seed_from_u64(1);
        apply_tick_noise(&mut lattice, 0.1, &mut rng);
        for i in 0..5 {
            for j in 0..5 {
                let d = lattice.at(i, j).d;
                assert!((d - 1.1).abs() < 1e-12 || (d - 0.9).abs() < 1e-12);
            }
        }
    }
}
