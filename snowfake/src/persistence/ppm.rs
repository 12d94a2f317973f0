//! PPM image rendering (§6): a P3 (ASCII) PPM with header comments carrying
//! the parameters, and a pixel per cell selected by the palettes in
//! [`super::palette`]. The color mode is keyed on the parity of `t`.

use std::fs;
use std::path::Path;

use crate::cell::Cell;
use crate::engine::EngineHeader;
use crate::error::Result;
use crate::lattice::Lattice;
use crate::parameters::Parameters;
use crate::persistence::palette;

fn off_pixel(cell: &Cell, rho: f64) -> palette::Rgb {
    let idx = ((63.0 * cell.d / rho).floor() as i64).clamp(0, 63) as usize;
    palette::off(idx)
}

fn on_pixel_odd(cell: &Cell, params: &Parameters) -> palette::Rgb {
    let raw = (33.0 * (cell.c + cell.d) - params.alpha) / (params.beta - params.alpha);
    let idx = (raw.floor() as i64).clamp(0, 32) as usize;
    palette::blue(idx)
}

fn high_ice_overlay_index(c: f64, beta: f64) -> usize {
    let mut k = 12;
    if c >= 1.0 + 0.5 * (beta - 1.0) {
        k = 13;
    }
    if c >= 1.0 + 0.7 * (beta - 1.0) {
        k = 14;
    }
    if c >= beta {
        k = 15;
    }
    k
}

fn on_pixel_even(cell: &Cell, params: &Parameters) -> palette::Rgb {
    let high_ice_threshold = 1.0 + 0.5 * (params.beta - 1.0);
    if cell.c > high_ice_threshold {
        let idx = high_ice_overlay_index(cell.c, params.beta);
        palette::OTHP[idx]
    } else {
        palette::braque(cell.ring)
    }
}

fn pixel_for(cell: &Cell, params: &Parameters, t: u64) -> palette::Rgb {
    if !cell.attached {
        return off_pixel(cell, params.rho);
    }
    if t % 2 == 1 {
        on_pixel_odd(cell, params)
    } else {
        on_pixel_even(cell, params)
    }
}

pub fn render(
    path: impl AsRef<Path>,
    lattice: &Lattice,
    header: &EngineHeader,
    params: &Parameters,
) -> Result<()> {
    let l = lattice.side();
    let mut out = String::with_capacity(l * l * 12 + 512);

    out.push_str("P3\n");
    out.push_str(&format!("#rho:{}\n", params.rho));
    out.push_str(&format!("#h:{}\n", params.h));
    out.push_str(&format!("#p:{}\n", params.p));
    out.push_str(&format!("#beta:{}\n", params.beta));
    out.push_str(&format!("#alpha:{}\n", params.alpha));
    out.push_str(&format!("#theta:{}\n", params.theta));
    out.push_str(&format!("#kappa:{}\n", params.kappa));
    out.push_str(&format!("#mu:{}\n", params.mu));
    out.push_str(&format!("#gamma:{}\n", params.gamma));
    out.push_str(&format!("#sigma:{}\n", params.sigma));
    out.push_str(&format!("#L:{}\n", params.l));
    out.push_str(&format!("#Z:{}\n", params.zoom));
    out.push_str("#: no : no : no\n");
    out.push_str(&format!("#: t={}\n", header.t));
    out.push_str(&format!("#: r_new={}\n", header.r_new));
    out.push_str(&format!("{} {}\n", l, l));
    out.push_str("255\n");

    for i in 0..l {
        for j in 0..l {
            let cell = lattice.at(i, j);
            let (r, g, b) = pixel_for(cell, params, header.t);
            out.push_str(&format!("{r} {g} {b}\n"));
        }
    }

    fs::write(path, out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::initializer::seed_lattice;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn renders_a_valid_header_and_body() {
        let params = Parameters { l: 5, h: 0, p: 1.0, rho: 0.4, ..Parameters::default() };
        let mut rng = Pcg64::seed_from_u64(3);
        let (lattice, header) = seed_lattice(&params, &mut rng);

        let dir = std::env::temp_dir().join(format!("snowfake-ppm-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("out.ppm");

        render(&path, &lattice, &header, &params).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("P3\n"));
        assert!(contents.contains("5 5\n"));
        let pixel_lines = contents.lines().filter(|l| !l.starts_with('#') && !l.starts_with("P3")).count();
        // 2 dimension/maxval lines + L*L pixel lines
        assert_eq!(pixel_lines, 2 + params.l * params.l);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn off_pixel_clamps_at_saturation() {
        let cell = Cell { d: 10.0, ..Cell::default() };
        let (r, g, b) = off_pixel(&cell, 0.5);
        assert_eq!((r, g, b), palette::off(63));
    }

    #[test]
    fn high_ice_overlay_selects_top_tier_at_beta() {
        let params = Parameters { beta: 2.0, ..Parameters::default() };
        let cell = Cell { c: 2.0, attached: true, ..Cell::default() };
        let color = on_pixel_even(&cell, &params);
        assert_eq!(color, palette::OTHP[15]);
    }
}
