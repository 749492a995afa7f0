//! Defines the precious metals the application can quote.

use serde::Deserialize;
use serde::Serialize;
use strum::IntoEnumIterator;

/// A precious metal known to the catalog, identified by its ISO-4217 style
/// code. Declaration order is the order the home screen renders cards in.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum Metal {
    XAU, // Gold
    XAG, // Silver
    XPT, // Platinum
    XPD, // Palladium
}

impl Metal {
    /// Returns the metal's code (e.g. "XAU").
    /// This is handled automatically by the `strum::IntoStaticStr` derive macro.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Returns the human-facing name of the metal.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::XAU => "Gold",
            Self::XAG => "Silver",
            Self::XPT => "Platinum",
            Self::XPD => "Palladium",
        }
    }

    /// Accent color for the metal's card header and detail headings.
    pub fn color(&self) -> &'static str {
        match self {
            Self::XAU => "#FFD700",
            Self::XAG => "#C0C0C0",
            Self::XPT => "#4B4B4B",
            Self::XPD => "#888888",
        }
    }

    /// Background gradient for the metal's detail panel and card swatch.
    pub fn gradient(&self) -> &'static str {
        match self {
            Self::XAU => "linear-gradient(145deg, #fff8dc, #ffe066)",
            Self::XAG => "linear-gradient(145deg, #f0f8ff, #dcdcdc)",
            Self::XPT => "linear-gradient(145deg, #c0c0c0, #a0a0a0)",
            Self::XPD => "linear-gradient(145deg, #e0e0e0, #cfcfcf)",
        }
    }

    /// Resolves a typed-in metal name to its catalog entry.
    ///
    /// The match is exact but case-insensitive: "gold", "Gold" and "GOLD"
    /// all resolve to [`Metal::XAU`].
    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::iter().find(|metal| metal.display_name().eq_ignore_ascii_case(name))
    }
}

/// Display metadata resolved for an arbitrary route code.
///
/// The detail route accepts any string as a code, so codes outside the
/// catalog still get a usable theme: the raw code stands in for the name and
/// the colors fall back to neutral grays.
#[derive(Debug, Clone, PartialEq)]
pub struct MetalTheme {
    pub name: String,
    pub color: String,
    pub gradient: String,
}

impl MetalTheme {
    pub fn for_code(code: &str) -> Self {
        match code.parse::<Metal>() {
            Ok(metal) => Self {
                name: metal.display_name().to_owned(),
                color: metal.color().to_owned(),
                gradient: metal.gradient().to_owned(),
            },
            Err(_) => Self {
                name: code.to_owned(),
                color: "#555".to_owned(),
                gradient: "#f0f0f0".to_owned(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_metal_has_display_metadata() {
        for metal in Metal::iter() {
            assert!(!metal.display_name().is_empty());
            assert!(metal.color().starts_with('#'));
            assert!(!metal.gradient().is_empty());
        }
    }

    #[test]
    fn catalog_order_is_fixed() {
        let codes: Vec<&str> = Metal::iter().map(|metal| metal.code()).collect();
        assert_eq!(codes, ["XAU", "XAG", "XPT", "XPD"]);
    }

    #[test]
    fn name_lookup_is_case_insensitive() {
        assert_eq!(Metal::from_display_name("GOLD"), Some(Metal::XAU));
        assert_eq!(Metal::from_display_name("gold"), Some(Metal::XAU));
        assert_eq!(Metal::from_display_name("Palladium"), Some(Metal::XPD));
        assert_eq!(Metal::from_display_name("Unobtainium"), None);
    }

    #[test]
    fn code_parse_accepts_any_case() {
        assert_eq!("xag".parse::<Metal>(), Ok(Metal::XAG));
        assert!("AAPL".parse::<Metal>().is_err());
    }

    #[test]
    fn theme_falls_back_for_unknown_codes() {
        let known = MetalTheme::for_code("XAU");
        assert_eq!(known.name, "Gold");
        assert_eq!(known.color, "#FFD700");

        let unknown = MetalTheme::for_code("XRH");
        assert_eq!(unknown.name, "XRH");
        assert_eq!(unknown.color, "#555");
        assert_eq!(unknown.gradient, "#f0f0f0");
    }
}
