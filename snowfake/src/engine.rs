use std::path::Path;

use rand_pcg::Pcg64;

use crate::dynamics::{apply_post_load_noise, apply_tick_noise, attachment, diffusion, freezing, melting};
use crate::error::Result;
use crate::initializer::{rng_from_system_time, seed_lattice};
use crate::lattice::Lattice;
use crate::parameters::Parameters;
use crate::persistence::{checkpoint, ppm};

/// The small mutable header accompanying the Lattice: center, frontier
/// radii, tick counter, stop flag, and ring counter (§3 "Engine state").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineHeader {
    pub cx: usize,
    pub cy: usize,
    pub r_old: u32,
    pub r_new: u32,
    pub t: u64,
    pub stop: bool,
    pub ring_counter: u32,
}

/// Sequences one tick at a time; owns the Lattice, the header, and a
/// per-engine RNG (§4.9, §5). The Engine is driven by an external host
/// (CLI, GUI) through `step`/`run_until`/`save`/`load`/`render`.
pub struct Engine {
    lattice: Lattice,
    params: Parameters,
    header: EngineHeader,
    rng: Pcg64,
}

impl Engine {
    /// Validates `params` and runs the Initializer with a system-time seed.
    pub fn init(params: Parameters) -> Result<Self> {
        params.validate()?;
        let mut rng = rng_from_system_time();
        let (lattice, header) = seed_lattice(&params, &mut rng);
        Ok(Self { lattice, params, header, rng })
    }

    /// Validates `params` and runs the Initializer with a caller-supplied
    /// RNG, for deterministic construction in tests.
    pub fn init_with_rng(params: Parameters, mut rng: Pcg64) -> Result<Self> {
        params.validate()?;
        let (lattice, header) = seed_lattice(&params, &mut rng);
        Ok(Self { lattice, params, header, rng })
    }

    /// One tick: Diffusion -> Freezing -> Attachment -> Melting -> (Noise).
    /// Returns `(t, stopped)`.
    pub fn step(&mut self) -> (u64, bool) {
        diffusion(&mut self.lattice);
        freezing(&mut self.lattice, &self.header, &self.params);
        attachment(&mut self.lattice, &mut self.header, &self.params);
        melting(&mut self.lattice, &self.header, &self.params);

        if self.params.sigma > 0.0 {
            apply_tick_noise(&mut self.lattice, self.params.sigma, &mut self.rng);
        }

        self.header.t += 1;

        #[cfg(debug_assertions)]
        self.check_invariants();

        tracing::debug!(t = self.header.t, r_new = self.header.r_new, stop = self.header.stop, "tick complete");

        (self.header.t, self.header.stop)
    }

    /// Repeats `step()` while `!stopped && !pred(t)`, polling `pred` only
    /// between ticks (§5). Returns the final stop state.
    pub fn run_until(&mut self, mut pred: impl FnMut(u64) -> bool) -> bool {
        while !self.header.stop && !pred(self.header.t) {
            self.step();
        }
        self.header.stop
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        tracing::info!(t = self.header.t, path = %path.as_ref().display(), "saving checkpoint");
        checkpoint::write(path, &self.lattice, &self.header)
    }

    /// Loads a checkpoint into a fresh Engine built from `params`. The
    /// lattice side length in `params.l` must match the checkpoint's
    /// recorded dimensions, validated during the read. Applies the
    /// post-load noise adjustment (§4.8) when `params.sigma < 0`.
    pub fn load(path: impl AsRef<Path>, params: Parameters) -> Result<Self> {
        params.validate()?;
        tracing::info!(path = %path.as_ref().display(), "loading checkpoint");
        let (mut lattice, header) = checkpoint::read(path, params.l)?;
        if params.sigma < 0.0 {
            apply_post_load_noise(&mut lattice, params.sigma);
        }
        Ok(Self {
            lattice,
            params,
            header,
            rng: rng_from_system_time(),
        })
    }

    pub fn render(&self, path: impl AsRef<Path>) -> Result<()> {
        ppm::render(path, &self.lattice, &self.header, &self.params)
    }

    pub fn snapshot(&self) -> &Lattice {
        &self.lattice
    }

    pub fn header(&self) -> &EngineHeader {
        &self.header
    }

    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        for cell in self.lattice.cells().iter() {
            debug_assert!(cell.d >= 0.0, "negative vapor mass");
            debug_assert!(cell.b >= 0.0, "negative boundary mass");
            debug_assert!(cell.c >= 0.0, "negative crystal mass");
            if cell.attached {
                debug_assert_eq!(cell.d, 0.0, "vapor present on attached cell");
            }
        }
    }
}
