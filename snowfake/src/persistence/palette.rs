//! Fixed RGB tables for PPM rendering (§6), transcribed from the original
//! `gui_braque_colors64`, `gui_blue_colors33`, and `gui_off_colors64` tables
//! and from the X11 names used to build `g_othp`.

pub type Rgb = (u8, u8, u8);

/// 64-entry "braque" on-ramp palette, indexed by `ring mod 64` for the
/// even-`t` rendering mode.
pub const BRAQUE_64: [Rgb; 64] = [
    (40, 40, 40), (44, 40, 48), (48, 40, 56), (52, 40, 64),
    (56, 44, 72), (60, 48, 80), (64, 52, 88), (68, 56, 96),
    (72, 60, 104), (76, 64, 112), (80, 68, 120), (84, 72, 128),
    (88, 76, 136), (92, 80, 144), (96, 84, 152), (100, 88, 160),
    (104, 92, 168), (108, 96, 176), (112, 100, 184), (116, 104, 192),
    (120, 108, 200), (116, 116, 204), (108, 124, 208), (100, 132, 208),
    (92, 140, 208), (84, 148, 208), (76, 156, 204), (68, 164, 200),
    (64, 172, 192), (60, 180, 184), (56, 188, 176), (52, 196, 168),
    (48, 200, 156), (52, 204, 144), (60, 208, 132), (68, 208, 120),
    (80, 208, 108), (92, 204, 96), (104, 200, 88), (116, 196, 80),
    (128, 192, 72), (140, 188, 68), (152, 184, 64), (164, 180, 60),
    (176, 176, 56), (188, 172, 52), (200, 168, 48), (208, 160, 44),
    (212, 152, 40), (216, 144, 40), (220, 136, 40), (224, 128, 40),
    (228, 120, 44), (232, 112, 48), (236, 104, 56), (240, 96, 64),
    (240, 88, 76), (240, 80, 88), (240, 72, 100), (240, 64, 112),
    (244, 72, 132), (248, 96, 160), (252, 140, 196), (255, 200, 230),
];

/// 33-entry "blue" on-ramp palette, used for the odd-`t` on-pixel ramp
/// (`floor(33*(c+d)-alpha)/(beta-alpha)` indexes into this table).
pub const BLUE_33: [Rgb; 33] = [
    (8, 8, 48), (8, 12, 56), (8, 16, 64), (8, 20, 72),
    (8, 24, 80), (8, 28, 88), (8, 32, 96), (8, 36, 104),
    (8, 40, 112), (8, 44, 120), (8, 48, 128), (8, 56, 136),
    (8, 64, 144), (8, 72, 152), (8, 80, 160), (8, 88, 168),
    (8, 96, 176), (12, 104, 184), (16, 112, 192), (20, 120, 200),
    (24, 128, 208), (32, 140, 216), (40, 152, 224), (56, 164, 228),
    (72, 176, 232), (96, 188, 236), (120, 200, 240), (148, 212, 244),
    (176, 224, 248), (200, 232, 250), (220, 240, 252), (236, 248, 254),
    (255, 255, 255),
];

/// 64-entry vapor-density ("off") palette, indexed by
/// `floor(63*d/rho)` clamped to `[0, 63]`.
pub const OFF_64: [Rgb; 64] = [
    (0, 0, 0), (0, 0, 4), (0, 0, 8), (0, 0, 12),
    (0, 0, 16), (0, 0, 20), (0, 0, 24), (0, 0, 28),
    (0, 0, 32), (0, 0, 36), (0, 0, 40), (0, 0, 44),
    (0, 0, 48), (0, 0, 52), (0, 0, 56), (0, 0, 60),
    (0, 0, 64), (0, 0, 68), (0, 0, 72), (0, 0, 76),
    (0, 0, 80), (0, 0, 84), (0, 0, 88), (0, 0, 92),
    (0, 0, 96), (0, 0, 100), (0, 0, 104), (0, 0, 108),
    (0, 0, 112), (0, 0, 116), (0, 0, 120), (0, 0, 124),
    (0, 0, 128), (0, 4, 132), (0, 8, 136), (0, 12, 140),
    (0, 16, 144), (0, 20, 148), (0, 24, 152), (0, 28, 156),
    (0, 32, 160), (0, 36, 164), (0, 40, 168), (0, 44, 172),
    (0, 48, 176), (0, 56, 180), (0, 64, 184), (0, 72, 188),
    (0, 80, 192), (0, 88, 196), (0, 96, 200), (0, 104, 204),
    (0, 112, 208), (0, 120, 212), (0, 128, 216), (0, 136, 220),
    (0, 144, 224), (0, 152, 228), (0, 160, 232), (0, 168, 236),
    (0, 176, 240), (0, 184, 244), (0, 192, 248), (0, 200, 255),
];

/// The X11 named colors backing `g_othp`. Only indices 12..=15 are
/// reachable via `gui_get_othp_color_idx` in the original source, but the
/// full table is retained for fidelity; see DESIGN.md.
pub const OTHP: [Rgb; 16] = [
    (255, 165, 0),   // orange
    (229, 229, 229), // gray90
    (204, 204, 204), // gray80
    (179, 179, 179), // gray70
    (153, 153, 153), // gray60
    (127, 127, 127), // gray50
    (102, 102, 102), // gray40
    (76, 76, 76),    // gray30
    (64, 64, 64),    // gray25
    (51, 51, 51),    // gray20
    (0, 0, 0),       // black
    (240, 255, 255), // azure
    (178, 223, 238), // lightblue2
    (154, 192, 205), // lightblue3
    (104, 131, 139), // lightblue4
    (100, 149, 237), // cornflowerblue
];

pub fn braque(ring: u32) -> Rgb {
    BRAQUE_64[(ring as usize) % BRAQUE_64.len()]
}

pub fn blue(index: usize) -> Rgb {
    BLUE_33[index.min(BLUE_33.len() - 1)]
}

pub fn off(index: usize) -> Rgb {
    OFF_64[index.min(OFF_64.len() - 1)]
}
