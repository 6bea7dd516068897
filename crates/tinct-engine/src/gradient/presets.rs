use crate::color::Rgb;
use crate::error::{GradientError, Result};

/// A named, fixed color list loaded with even spacing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub colors: &'static [Rgb],
}

const fn c(hex: &str) -> Rgb {
    Rgb::from_hex_literal(hex)
}

/// Popular design gradients, in menu order.
pub const PRESETS: &[Preset] = &[
    Preset { name: "Sunset", colors: &[c("#FF512F"), c("#DD2476")] },
    Preset { name: "Ocean", colors: &[c("#2196F3"), c("#21CBF3")] },
    Preset { name: "Forest", colors: &[c("#11998E"), c("#38EF7D")] },
    Preset { name: "Aurora", colors: &[c("#00D2FF"), c("#3A7BD5")] },
    Preset { name: "Fire", colors: &[c("#F12711"), c("#F5AF19")] },
    Preset { name: "Purple Dream", colors: &[c("#667EEA"), c("#764BA2")] },
    Preset { name: "Pink Sunset", colors: &[c("#FA709A"), c("#FEE140")] },
    Preset { name: "Blue Steel", colors: &[c("#2980B9"), c("#6BB6FF")] },
    Preset { name: "Mint", colors: &[c("#00B09B"), c("#96C93D")] },
    Preset { name: "Cotton Candy", colors: &[c("#FFECD2"), c("#FCB69F")] },
    Preset { name: "Space", colors: &[c("#8360C3"), c("#2EBF91")] },
    Preset { name: "Lemon", colors: &[c("#FFEAA7"), c("#FAB1A0")] },
    Preset { name: "Instagram", colors: &[c("#833AB4"), c("#FD1D1D"), c("#FCB045")] },
    Preset { name: "Spotify", colors: &[c("#1DB954"), c("#1ED760")] },
    Preset { name: "YouTube", colors: &[c("#C4302B"), c("#FF5722")] },
    Preset { name: "Twitter", colors: &[c("#1DA1F2"), c("#1877F2")] },
    Preset { name: "Netflix", colors: &[c("#E50914"), c("#F40612")] },
    Preset { name: "Slack", colors: &[c("#4A154B"), c("#36C5F0")] },
];

/// Looks a preset up by name, ignoring ASCII case.
pub fn find_preset(name: &str) -> Result<&'static Preset> {
    PRESETS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| GradientError::UnknownPreset(name.to_string()))
}
