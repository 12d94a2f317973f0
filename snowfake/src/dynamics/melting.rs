use super::frontier_window;
use crate::engine::EngineHeader;
use crate::lattice::Lattice;
use crate::parameters::Parameters;

/// Decays liquid -> vapor and ice -> vapor at the frontier (§4.7).
///
/// Attached cells are untouched. The pre-decrement `b`/`c` values are
/// snapshotted before any store, so the transfer into `d` is exact and the
/// per-cell mass sum is conserved (see SPEC_FULL.md's note on this phase).
pub fn melting(lattice: &mut Lattice, header: &EngineHeader, params: &Parameters) {
    let l = lattice.side();
    let rows = frontier_window(header.cx, header.r_new, l);
    let cols = frontier_window(header.cy, header.r_new, l);

    for &i in &rows {
        for &j in &cols {
            let cell = lattice.at_mut(i, j);
            if cell.attached {
                continue;
            }

            let b_old = cell.b;
            let liquid_loss = params.mu * b_old;
            cell.b -= liquid_loss;
            cell.d += liquid_loss;

            if cell.c > 0.0 {
                let c_old = cell.c;
                let ice_loss = params.gamma * c_old;
                cell.c -= ice_loss;
                cell.d += ice_loss;
            }
        }
    }
}
