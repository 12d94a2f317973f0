//! The four-phase per-tick update: diffusion, freezing, attachment, melting,
//! plus the conditional noise injector. Phases execute in this fixed order
//! (§5); each is synchronous within itself via a phase-local transient
//! buffer, never hoisted to tick scope.

pub mod attachment;
pub mod diffusion;
pub mod freezing;
pub mod melting;
pub mod noise;

pub use attachment::attachment;
pub use diffusion::diffusion;
pub use freezing::freezing;
pub use melting::melting;
pub use noise::{apply_post_load_noise, apply_tick_noise};

/// Inclusive frontier window `[cx-r-1, cx+r+1]` used by Freezing, Attachment,
/// and Melting, wrapped modulo `l` and deduplicated. Iterating this window
/// instead of the whole lattice is a performance optimization: every cell
/// outside it has no attached neighbor (the crystal hasn't reached there
/// yet), so Freezing, Attachment, and Melting are no-ops there anyway.
/// Deduplication matters once the window (width `2r+3`) grows past `l`,
/// which can happen as `r_new` approaches the `2L/3` stop threshold.
pub(crate) fn frontier_window(center: usize, r: u32, l: usize) -> Vec<usize> {
    let lo = center as i64 - r as i64 - 1;
    let hi = center as i64 + r as i64 + 1;
    let mut indices: Vec<usize> = (lo..=hi).map(|x| x.rem_euclid(l as i64) as usize).collect();
    indices.sort_unstable();
    indices.dedup();
    indices
}
