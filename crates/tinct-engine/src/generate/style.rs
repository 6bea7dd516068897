use std::fmt;
use std::str::FromStr;

use crate::color::Rgb;
use crate::error::{GradientError, Result};

/// Named generation style.
///
/// The first four derive colors by rotating one seed hue; the rest sample
/// their theme palette directly.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Style {
    Analogous,
    Complementary,
    Triadic,
    Tetradic,
    #[default]
    Warm,
    Cool,
    Neutral,
    Vibrant,
    Muted,
    Pastel,
    Sunset,
    Ocean,
    Forest,
    Cosmic,
}

impl Style {
    pub const ALL: [Style; 14] = [
        Style::Analogous,
        Style::Complementary,
        Style::Triadic,
        Style::Tetradic,
        Style::Warm,
        Style::Cool,
        Style::Neutral,
        Style::Vibrant,
        Style::Muted,
        Style::Pastel,
        Style::Sunset,
        Style::Ocean,
        Style::Forest,
        Style::Cosmic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Style::Analogous => "Analogous",
            Style::Complementary => "Complementary",
            Style::Triadic => "Triadic",
            Style::Tetradic => "Tetradic",
            Style::Warm => "Warm",
            Style::Cool => "Cool",
            Style::Neutral => "Neutral",
            Style::Vibrant => "Vibrant",
            Style::Muted => "Muted",
            Style::Pastel => "Pastel",
            Style::Sunset => "Sunset",
            Style::Ocean => "Ocean",
            Style::Forest => "Forest",
            Style::Cosmic => "Cosmic",
        }
    }

    /// Harmony styles rotate a seed hue instead of sampling the palette.
    pub fn is_harmony(self) -> bool {
        matches!(
            self,
            Style::Analogous | Style::Complementary | Style::Triadic | Style::Tetradic
        )
    }

    /// Seed colors (harmony styles) or the theme itself.
    pub fn palette(self) -> &'static [Rgb] {
        match self {
            Style::Analogous => &ANALOGOUS,
            Style::Complementary => &COMPLEMENTARY,
            Style::Triadic => &TRIADIC,
            Style::Tetradic => &TETRADIC,
            Style::Warm => &WARM,
            Style::Cool => &COOL,
            Style::Neutral => &NEUTRAL,
            Style::Vibrant => &VIBRANT,
            Style::Muted => &MUTED,
            Style::Pastel => &PASTEL,
            Style::Sunset => &SUNSET,
            Style::Ocean => &OCEAN,
            Style::Forest => &FOREST,
            Style::Cosmic => &COSMIC,
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = GradientError;

    fn from_str(s: &str) -> Result<Self> {
        Style::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GradientError::UnknownStyle(s.to_string()))
    }
}

const fn c(hex: &str) -> Rgb {
    Rgb::from_hex_literal(hex)
}

const ANALOGOUS: [Rgb; 18] = [
    c("#FF6B6B"), c("#FF8E53"), c("#FF6F91"), c("#C44569"), c("#F8B500"), c("#FFE66D"),
    c("#06FFA5"), c("#4ECDC4"), c("#45B7D1"), c("#96CEB4"), c("#FECA57"), c("#FF9FF3"),
    c("#54A0FF"), c("#5F27CD"), c("#00D2D3"), c("#FF9F43"), c("#10AC84"), c("#EE5A6F"),
];

const COMPLEMENTARY: [Rgb; 18] = [
    c("#FF6B6B"), c("#4ECDC4"), c("#FF8E53"), c("#45B7D1"), c("#FFE66D"), c("#5F27CD"),
    c("#06FFA5"), c("#C44569"), c("#FECA57"), c("#54A0FF"), c("#FF9FF3"), c("#10AC84"),
    c("#F8B500"), c("#00D2D3"), c("#EE5A6F"), c("#96CEB4"), c("#FF9F43"), c("#6C5CE7"),
];

const TRIADIC: [Rgb; 18] = [
    c("#FF6B6B"), c("#FECA57"), c("#45B7D1"), c("#C44569"), c("#06FFA5"), c("#5F27CD"),
    c("#FF8E53"), c("#FFE66D"), c("#4ECDC4"), c("#EE5A6F"), c("#10AC84"), c("#54A0FF"),
    c("#F8B500"), c("#96CEB4"), c("#6C5CE7"), c("#FF9FF3"), c("#00D2D3"), c("#A55EEA"),
];

const TETRADIC: [Rgb; 18] = [
    c("#FF6B6B"), c("#FECA57"), c("#45B7D1"), c("#06FFA5"), c("#C44569"), c("#FFE66D"),
    c("#4ECDC4"), c("#5F27CD"), c("#FF8E53"), c("#10AC84"), c("#54A0FF"), c("#EE5A6F"),
    c("#F8B500"), c("#96CEB4"), c("#6C5CE7"), c("#FF9FF3"), c("#00D2D3"), c("#A55EEA"),
];

const WARM: [Rgb; 18] = [
    c("#FF6B6B"), c("#FF8E53"), c("#FFD93D"), c("#FECA57"), c("#F8B500"), c("#FFE66D"),
    c("#FF9F43"), c("#EE5A6F"), c("#C44569"), c("#FF6F91"), c("#F38BA8"), c("#F06292"),
    c("#FFA726"), c("#FF7043"), c("#FFAB91"), c("#FFCC80"), c("#FFB74D"), c("#FF8A65"),
];

const COOL: [Rgb; 18] = [
    c("#45B7D1"), c("#4ECDC4"), c("#06FFA5"), c("#10AC84"), c("#96CEB4"), c("#54A0FF"),
    c("#5F27CD"), c("#6C5CE7"), c("#A55EEA"), c("#00D2D3"), c("#26C6DA"), c("#4DB6AC"),
    c("#81C784"), c("#64B5F6"), c("#7986CB"), c("#9575CD"), c("#BA68C8"), c("#42A5F5"),
];

const NEUTRAL: [Rgb; 18] = [
    c("#95A5A6"), c("#BDC3C7"), c("#ECF0F1"), c("#D5DBDB"), c("#AEB6BF"), c("#85929E"),
    c("#566573"), c("#34495E"), c("#2C3E50"), c("#ABB2B9"), c("#CCD1D1"), c("#F8F9FA"),
    c("#E5E8E8"), c("#D6DBDF"), c("#AAB7B8"), c("#85929E"), c("#5D6D7E"), c("#78909C"),
];

const VIBRANT: [Rgb; 18] = [
    c("#FF6B6B"), c("#4ECDC4"), c("#45B7D1"), c("#96CEB4"), c("#FECA57"), c("#FF9F43"),
    c("#EE5A6F"), c("#5F27CD"), c("#FF8E53"), c("#06FFA5"), c("#FFE66D"), c("#54A0FF"),
    c("#C44569"), c("#10AC84"), c("#6C5CE7"), c("#FF9FF3"), c("#F8B500"), c("#A55EEA"),
];

const MUTED: [Rgb; 18] = [
    c("#A8B3B8"), c("#C7CDD1"), c("#E1E6EA"), c("#B5C0C7"), c("#9AA5AC"), c("#D4D9DE"),
    c("#8995A1"), c("#7A8187"), c("#6B7278"), c("#BCC5CC"), c("#D8DEE3"), c("#F2F4F6"),
    c("#E7EAED"), c("#C3CDD6"), c("#A1ABB5"), c("#7F8A96"), c("#5D6872"), c("#9BAEC0"),
];

const PASTEL: [Rgb; 18] = [
    c("#FFD1DC"), c("#FFB3BA"), c("#FFDFBA"), c("#FFFFBA"), c("#BAFFC9"), c("#BAE1FF"),
    c("#C7CEEA"), c("#E2CBFF"), c("#FFC9DE"), c("#B5EAD7"), c("#FFE4E1"), c("#F0E68C"),
    c("#DDA0DD"), c("#98FB98"), c("#87CEEB"), c("#F5DEB3"), c("#FFA07A"), c("#20B2AA"),
];

const SUNSET: [Rgb; 18] = [
    c("#FF6B6B"), c("#FF8E53"), c("#FFD93D"), c("#FF9F43"), c("#EE5A6F"), c("#F06292"),
    c("#BA68C8"), c("#9575CD"), c("#7986CB"), c("#5C6BC0"), c("#42A5F5"), c("#29B6F6"),
    c("#26C6DA"), c("#26A69A"), c("#66BB6A"), c("#9CCC65"), c("#D4E157"), c("#FFEE58"),
];

const OCEAN: [Rgb; 18] = [
    c("#006994"), c("#0085C3"), c("#00A8CC"), c("#00B4D8"), c("#0096C7"), c("#0077B6"),
    c("#023E8A"), c("#03045E"), c("#90E0EF"), c("#CAF0F8"), c("#ADE8F4"), c("#48CAE4"),
    c("#00B4D8"), c("#0096C7"), c("#0077B6"), c("#023E8A"), c("#03045E"), c("#001D3D"),
];

const FOREST: [Rgb; 18] = [
    c("#386641"), c("#6A994E"), c("#A7C957"), c("#F2E8CF"), c("#BC4749"), c("#2D5016"),
    c("#52796F"), c("#84A98C"), c("#CAD2C5"), c("#354F52"), c("#2F3E46"), c("#588157"),
    c("#3A5A40"), c("#A3B18A"), c("#DAD7CD"), c("#A3B18A"), c("#588157"), c("#3A5A40"),
];

const COSMIC: [Rgb; 18] = [
    c("#240046"), c("#3C096C"), c("#5A189A"), c("#7B2CBF"), c("#9D4EDD"), c("#C77DFF"),
    c("#E0AAFF"), c("#10002B"), c("#240046"), c("#3C096C"), c("#5A189A"), c("#7B2CBF"),
    c("#9D4EDD"), c("#C77DFF"), c("#E0AAFF"), c("#F72585"), c("#B5179E"), c("#7209B7"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_palette_has_eighteen_colors() {
        for style in Style::ALL {
            assert_eq!(style.palette().len(), 18, "{style}");
        }
    }

    #[test]
    fn names_round_trip() {
        for style in Style::ALL {
            assert_eq!(style.name().parse::<Style>().unwrap(), style);
            assert_eq!(style.name().to_lowercase().parse::<Style>().unwrap(), style);
        }
        assert!(matches!("Synthwave".parse::<Style>(), Err(GradientError::UnknownStyle(_))));
    }

    #[test]
    fn harmony_split() {
        let harmonies: Vec<_> = Style::ALL.into_iter().filter(|s| s.is_harmony()).collect();
        assert_eq!(
            harmonies,
            [Style::Analogous, Style::Complementary, Style::Triadic, Style::Tetradic]
        );
    }
}
