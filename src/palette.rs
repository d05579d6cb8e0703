//! Named color palettes.
//!
//! Each palette runs from its darkest (core) color to its brightest (rim) color and
//! is used both for the sky gradient and for planet banding.

use crate::types::Rgb;
use rand::Rng;
use std::fmt;

const RED: [Rgb; 7] = [
    Rgb::new(32, 5, 8),
    Rgb::new(60, 10, 14),
    Rgb::new(90, 18, 22),
    Rgb::new(120, 24, 27),
    Rgb::new(150, 34, 35),
    Rgb::new(180, 44, 46),
    Rgb::new(210, 58, 63),
];

const PURPLE: [Rgb; 7] = [
    Rgb::new(18, 5, 30),
    Rgb::new(32, 10, 50),
    Rgb::new(50, 18, 75),
    Rgb::new(64, 24, 95),
    Rgb::new(85, 35, 120),
    Rgb::new(110, 50, 150),
    Rgb::new(140, 65, 190),
];

const BLUE: [Rgb; 7] = [
    Rgb::new(7, 13, 23),
    Rgb::new(14, 23, 38),
    Rgb::new(22, 32, 54),
    Rgb::new(33, 47, 80),
    Rgb::new(46, 69, 104),
    Rgb::new(60, 90, 138),
    Rgb::new(80, 120, 178),
];

const DARK_BROWN: [Rgb; 7] = [
    Rgb::new(14, 9, 6),
    Rgb::new(19, 13, 9),
    Rgb::new(29, 20, 13),
    Rgb::new(38, 26, 16),
    Rgb::new(48, 33, 22),
    Rgb::new(59, 40, 28),
    Rgb::new(80, 55, 40),
];

/// The fixed palettes a scene can be painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteName {
    /// Deep reds
    Red,
    /// Violet nebula tones
    Purple,
    /// Night-sky blues
    Blue,
    /// Muddy browns
    DarkBrown,
}

impl PaletteName {
    /// Every palette, in table order.
    pub const ALL: [PaletteName; 4] = [
        PaletteName::Red,
        PaletteName::Purple,
        PaletteName::Blue,
        PaletteName::DarkBrown,
    ];

    /// The palette's colors, core first and rim last.
    pub fn colors(self) -> &'static [Rgb] {
        match self {
            PaletteName::Red => &RED,
            PaletteName::Purple => &PURPLE,
            PaletteName::Blue => &BLUE,
            PaletteName::DarkBrown => &DARK_BROWN,
        }
    }

    /// Lower-case identifier used in logs and the status bar.
    pub fn as_str(self) -> &'static str {
        match self {
            PaletteName::Red => "red",
            PaletteName::Purple => "purple",
            PaletteName::Blue => "blue",
            PaletteName::DarkBrown => "dark_brown",
        }
    }
}

impl fmt::Display for PaletteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a scene picks its palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteChoice {
    /// Always use the named palette
    Fixed(PaletteName),
    /// Draw one palette uniformly at random for every scene
    Random,
}

impl PaletteChoice {
    /// Resolves the choice to a concrete palette for one scene.
    pub fn resolve<R: Rng + ?Sized>(self, rng: &mut R) -> PaletteName {
        match self {
            PaletteChoice::Fixed(name) => name,
            PaletteChoice::Random => PaletteName::ALL[rng.random_range(0..PaletteName::ALL.len())],
        }
    }
}

impl Default for PaletteChoice {
    fn default() -> Self {
        PaletteChoice::Fixed(PaletteName::Blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn every_palette_has_seven_bands_getting_brighter() {
        for name in PaletteName::ALL {
            let colors = name.colors();
            assert_eq!(colors.len(), 7, "{name}");
            for pair in colors.windows(2) {
                assert!(pair[0].brightness() < pair[1].brightness(), "{name} not ascending");
            }
        }
    }

    #[test]
    fn display_uses_lower_case_identifier() {
        assert_eq!(PaletteName::DarkBrown.to_string(), "dark_brown");
        assert_eq!(format!("{}", PaletteName::Blue), "blue");
    }

    #[test]
    fn fixed_choice_ignores_rng() {
        let mut rng = StdRng::seed_from_u64(1);
        let choice = PaletteChoice::Fixed(PaletteName::Red);
        for _ in 0..10 {
            assert_eq!(choice.resolve(&mut rng), PaletteName::Red);
        }
    }

    #[test]
    fn random_choice_reaches_several_palettes() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(PaletteChoice::Random.resolve(&mut rng));
        }
        assert_eq!(seen.len(), PaletteName::ALL.len());
    }
}
