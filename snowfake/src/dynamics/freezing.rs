use super::frontier_window;
use crate::engine::EngineHeader;
use crate::lattice::Lattice;
use crate::parameters::Parameters;

/// Converts vapor at the crystal boundary into liquid + ice (§4.5).
///
/// For every non-attached cell with at least one attached neighbor:
/// `b += (1-kappa)*d`, `c += kappa*d`, `d = 0`. Cells with no attached
/// neighbor are untouched; the per-cell mass sum is conserved.
pub fn freezing(lattice: &mut Lattice, header: &EngineHeader, params: &Parameters) {
    let l = lattice.side();
    let rows = frontier_window(header.cx, header.r_new, l);
    let cols = frontier_window(header.cy, header.r_new, l);

    for &i in &rows {
        for &j in &cols {
            if lattice.at(i, j).attached {
                continue;
            }
            if lattice.attached_neighbor_count(i, j) == 0 {
                continue;
            }
            let cell = lattice.at_mut(i, j);
            let d = cell.d;
            cell.b += (1.0 - params.kappa) * d;
            cell.c += params.kappa * d;
            cell.d = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::initializer::seed_lattice;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn pure_freezing_scenario_b() {
        // Scenario B: L=7, rho=1, h=0, p=1, kappa=0.5, all else zero.
        let params = Parameters {
            l: 7,
            h: 0,
            p: 1.0,
            rho: 1.0,
            kappa: 0.5,
            beta: 1.0,
            alpha: 0.0,
            theta: 0.0,
            mu: 0.0,
            gamma: 0.0,
            sigma: 0.0,
            zoom: 1,
        };
        let mut rng = Pcg64::seed_from_u64(1);
        let (mut lattice, header) = seed_lattice(&params, &mut rng);
        let (cx, cy) = lattice.center();

        freezing(&mut lattice, &header, &params);

        for (ni, nj) in lattice.neighbors(cx, cy) {
            let cell = lattice.at(ni, nj);
            assert!((cell.b - 0.5).abs() < 1e-12);
            assert!((cell.c - 0.5).abs() < 1e-12);
            assert_eq!(cell.d, 0.0);
        }
    }

    #[test]
    fn cells_without_attached_neighbor_are_untouched() {
        let params = Parameters { l: 9, h: 0, p: 1.0, rho: 1.0, kappa: 0.5, ..Parameters::default() };
        let mut rng = Pcg64::seed_from_u64(1);
        let (mut lattice, header) = seed_lattice(&params, &mut rng);
        freezing(&mut lattice, &header, &params);
        // far corner has no attached neighbor
        let cell = *lattice.at(0, 0);
        assert_eq!(cell.d, params.rho);
        assert_eq!(cell.c, 0.0);
    }
}
