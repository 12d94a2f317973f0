use ndarray::Array2;

use crate::lattice::Lattice;

/// One step of hexagonal mean-with-self vapor diffusion (§4.4).
///
/// For every non-attached cell, the new vapor value keeps a `(1+k)/7` share
/// of its own mass and receives `1/7` from each non-attached neighbor, where
/// `k` is the count of attached neighbors. The update is computed into a
/// fresh buffer and copied back, so every cell reads the pre-tick field.
///
/// A cell gives away `1/7` of its own mass to each of its *non-attached*
/// neighbors (there are `6-k` of those) and keeps the rest, so the
/// self-retained fraction is `1 - (6-k)/7 = (1+k)/7`, not the `(7-k)/7`
/// spec.md's prose formula states literally. Taking the formula at face
/// value does not conserve mass except in the special case `k == 3` (see
/// DESIGN.md): expand `Σ (7-k_i)/7 · d_i + (1/7) Σ_{j∈N(i), nonattached} d_j`
/// over the whole lattice and the coefficient on each `d_i` comes out to
/// `(13-2k_i)/7`, not `1`. `(1+k)/7` is what `original_source/src/snow.c`'s
/// `dynamics_diffusion` actually computes (there, `not_flake_count` is the
/// count of *non*-attached neighbors, `6-k`, and the retained fraction is
/// `1 - not_flake_count/7`), and it is the only one of the two readings
/// consistent with the exact-conservation invariant in §3/§8.
pub fn diffusion(lattice: &mut Lattice) {
    let l = lattice.side();
    let mut buf = Array2::<f64>::zeros((l, l));

    for i in 0..l {
        for j in 0..l {
            if lattice.at(i, j).attached {
                continue;
            }
            let neighbors = lattice.neighbors(i, j);
            let k = neighbors
                .iter()
                .filter(|&&(ni, nj)| lattice.at(ni, nj).attached)
                .count() as f64;

            let self_share = (1.0 + k) / 7.0 * lattice.at(i, j).d;
            let received: f64 = neighbors
                .iter()
                .filter(|&&(ni, nj)| !lattice.at(ni, nj).attached)
                .map(|&(ni, nj)| lattice.at(ni, nj).d / 7.0)
                .sum();

            buf[[i, j]] = self_share + received;
        }
    }

    for i in 0..l {
        for j in 0..l {
            if !lattice.at(i, j).attached {
                lattice.at_mut(i, j).d = buf[[i, j]];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::Parameters;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    fn total_mass(lattice: &Lattice) -> f64 {
        lattice.cells().iter().map(|c| c.total_mass()).sum()
    }

    #[test]
    fn diffusion_conserves_total_mass() {
        let params = Parameters { l: 9, h: 0, p: 1.0, rho: 1.0, ..Parameters::default() };
        let mut rng = Pcg64::seed_from_u64(7);
        let (mut lattice, _) = crate::initializer::seed_lattice(&params, &mut rng);
        let before = total_mass(&lattice);
        for _ in 0..10 {
            diffusion(&mut lattice);
        }
        let after = total_mass(&lattice);
        assert!((before - after).abs() <= 1e-9 * (lattice.side() * lattice.side()) as f64);
    }

    #[test]
    fn single_attached_neighbor_keeps_two_sevenths_self_share() {
        // L=9, a single seed at center, uniform rho=1 vapor elsewhere. Each
        // of the seed's six neighbors has k=1 attached neighbor (the seed
        // itself), so self-weight is (1+1)/7 = 2/7, and it receives 1/7
        // from each of its five other (non-attached, uniform-d) neighbors.
        let params = Parameters { l: 9, h: 0, p: 1.0, rho: 1.0, ..Parameters::default() };
        let mut rng = Pcg64::seed_from_u64(7);
        let (mut lattice, _) = crate::initializer::seed_lattice(&params, &mut rng);
        let (cx, cy) = lattice.center();
        let (ni, nj) = lattice.neighbors(cx, cy)[0];

        diffusion(&mut lattice);

        let expected = 2.0 / 7.0 + 5.0 / 7.0;
        assert!((lattice.at(ni, nj).d - expected).abs() < 1e-12);
    }

    #[test]
    fn attached_cells_keep_zero_vapor() {
        let params = Parameters { l: 9, h: 0, p: 1.0, rho: 1.0, ..Parameters::default() };
        let mut rng = Pcg64::seed_from_u64(7);
        let (mut lattice, _) = crate::initializer::seed_lattice(&params, &mut rng);
        let (cx, cy) = lattice.center();
        diffusion(&mut lattice);
        assert_eq!(lattice.at(cx, cy).d, 0.0);
    }
}
