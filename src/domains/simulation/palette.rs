use serde::{Deserialize, Serialize};

pub const SENTINEL_ID: i64 = -1;
pub const PALETTE_SIZE: usize = 7;
/// Simulation units to pixels.
pub const WORLD_TO_PIXEL_SCALE: f64 = 5.0;
pub const AGENT_RADIUS: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// `#2b2828`
pub const BACKGROUND: Rgba = Rgba::rgb(0x2b, 0x28, 0x28);

/// Maps the sentinel identifier onto the first palette slot. Pure: the
/// caller's agent record is left untouched.
pub fn remap_sentinel(id: i64) -> i64 {
    if id == SENTINEL_ID {
        0
    } else {
        id
    }
}

/// Palette slot for an identifier. Uses euclidean remainder so that every
/// identifier, including negative ones, lands on a defined color.
pub fn palette_index(id: i64) -> usize {
    remap_sentinel(id).rem_euclid(PALETTE_SIZE as i64) as usize
}

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: [(&'static str, Rgba); PALETTE_SIZE],
}

impl Palette {
    pub fn color_for(&self, id: i64) -> Rgba {
        self.colors[palette_index(id)].1
    }

    pub fn name_for(&self, id: i64) -> &'static str {
        self.colors[palette_index(id)].0
    }

    pub fn get(&self, index: usize) -> Option<Rgba> {
        self.colors.get(index).map(|(_, c)| *c)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: [
                ("yellow", Rgba::rgb(255, 255, 0)),
                ("red", Rgba::rgb(255, 0, 0)),
                ("blue", Rgba::rgb(0, 0, 255)),
                ("green", Rgba::rgb(0, 128, 0)),
                ("violet", Rgba::rgb(238, 130, 238)),
                ("orange", Rgba::rgb(255, 165, 0)),
                ("cyan", Rgba::rgb(0, 255, 255)),
            ],
        }
    }
}
