#![forbid(unsafe_code)]

//! Segment colors.
//!
//! Colors are derived from entry order against a fixed finite palette, never
//! stored independently. Assignment walks the entries in order and advances
//! past any color that would repeat its immediate predecessor.

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS-style hex form, e.g. `#5B8FED`.
    #[must_use]
    pub fn hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// The stock wheel palette: blue, red, amber, green.
pub const DEFAULT_COLORS: [Color; 4] = [
    Color::rgb(0x5B, 0x8F, 0xED),
    Color::rgb(0xE7, 0x4C, 0x3C),
    Color::rgb(0xFD, 0xB8, 0x2C),
    Color::rgb(0x43, 0xA0, 0x47),
];

/// A fixed cycle of segment colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.to_vec(),
        }
    }
}

impl Palette {
    /// A palette with custom colors. Returns `None` for an empty color set.
    #[must_use]
    pub fn new(colors: Vec<Color>) -> Option<Self> {
        if colors.is_empty() {
            None
        } else {
            Some(Self { colors })
        }
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Assign one color per entry for a list of `count` entries.
    ///
    /// Entry `i` starts at `colors[i % len]`; if that equals entry `i - 1`'s
    /// color, the index advances (wrapping) until distinct. This only keeps
    /// *sequential* neighbors apart: on a circular layout the first and last
    /// entries may still share a color. That limitation is deliberate and
    /// should not be fixed without a product decision.
    #[must_use]
    pub fn assign(&self, count: usize) -> Vec<Color> {
        let len = self.colors.len();
        if len == 1 {
            // A single-color palette cannot avoid repeats.
            return vec![self.colors[0]; count];
        }
        let mut assigned = Vec::with_capacity(count);
        for i in 0..count {
            let mut index = i % len;
            if let Some(&prev) = assigned.last() {
                // Bounded walk: a palette of all-identical colors would
                // otherwise never terminate.
                let mut steps = 0;
                while self.colors[index] == prev && steps < len {
                    index = (index + 1) % len;
                    steps += 1;
                }
            }
            assigned.push(self.colors[index]);
        }
        assigned
    }
}
