use ndarray::Array2;

use super::frontier_window;
use crate::engine::EngineHeader;
use crate::lattice::Lattice;
use crate::parameters::Parameters;

/// State-machine update of the `attached` flag (§4.6).
///
/// Decisions are computed into a shadow buffer, then committed atomically,
/// so every cell's decision is made against the same pre-attachment
/// snapshot. Returns whether the ring counter advanced this tick.
pub fn attachment(lattice: &mut Lattice, header: &mut EngineHeader, params: &Parameters) -> bool {
    let l = lattice.side();
    let rows = frontier_window(header.cx, header.r_new, l);
    let cols = frontier_window(header.cy, header.r_new, l);

    let mut decisions: Array2<Option<bool>> = Array2::from_elem((l, l), None);

    for &i in &rows {
        for &j in &cols {
            if lattice.at(i, j).attached {
                continue;
            }
            let k = lattice.attached_neighbor_count(i, j);
            if k == 0 {
                continue;
            }

            let becomes_attached = match k {
                1 | 2 => lattice.at(i, j).b >= params.beta,
                3 => {
                    let diffmass: f64 = lattice.at(i, j).d
                        + lattice
                            .neighbors(i, j)
                            .iter()
                            .filter(|&&(ni, nj)| !lattice.at(ni, nj).attached)
                            .map(|&(ni, nj)| lattice.at(ni, nj).d)
                            .sum::<f64>();
                    lattice.at(i, j).b >= 1.0
                        || (diffmass <= params.theta && lattice.at(i, j).b >= params.alpha)
                }
                _ => true,
            };

            decisions[[i, j]] = Some(becomes_attached);
        }
    }

    let mut advanced_ring = false;

    for &i in &rows {
        for &j in &cols {
            let Some(becomes_attached) = decisions[[i, j]] else {
                continue;
            };
            if !becomes_attached {
                continue;
            }

            let cell = lattice.at_mut(i, j);
            cell.attached = true;
            cell.c += cell.b;
            cell.b = 0.0;
            cell.ring = header.ring_counter;

            let k = lattice.linf_distance_from_center(i as i64, j as i64);
            header.r_new = header.r_new.max(k);
            if frontier_exceeds_stop_threshold(header.r_new, l) {
                header.stop = true;
            }
        }
    }

    if header.r_new - header.r_old == 1 {
        header.ring_counter += 1;
        header.r_old = header.r_new;
        advanced_ring = true;
    }

    advanced_ring
}

/// Whether `r_new` has grown past `2L/3` (§4.6's stop criterion). Note that
/// since the L∞ distance from center is bounded by `floor(L/2)` for any
/// in-bounds index (see `Lattice::linf_distance_from_center`), and
/// `floor(L/2) < floor(2L/3)` for every `L`, this condition is never
/// actually reached by organic crystal growth — it is an inert backstop
/// inherited unchanged from `dynamics_attachment`'s identical
/// `g_r_new > 2 * nr / 3` check in the original source. Preserved literally;
/// see DESIGN.md.
#[inline]
fn frontier_exceeds_stop_threshold(r_new: u32, l: usize) -> bool {
    r_new > (2 * l as u32) / 3
}
