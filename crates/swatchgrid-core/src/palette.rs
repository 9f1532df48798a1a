//! The fixed Material Design palette shown by the picker.
//!
//! 18 hue families with 10 shades each. The order of [`PALETTE`] is the order
//! swatches are laid out in, so it must not change.

use crate::color::Color;

/// Number of shades in each hue family.
pub const SHADES_PER_HUE: usize = 10;

/// Number of entries in [`PALETTE`].
pub const PALETTE_LEN: usize = MATERIAL_HUES.len() * SHADES_PER_HUE;

/// Shade labels for display, lightest first.
pub const SHADE_LABELS: [&str; SHADES_PER_HUE] = [
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900",
];

/// A Material hue family with its shades (50-900).
#[derive(Debug, Clone, Copy)]
pub struct MaterialHue {
    /// Family name (e.g., "Red", "Light Blue")
    pub name: &'static str,
    /// Shades from 50 to 900
    pub shades: [Color; SHADES_PER_HUE],
}

impl MaterialHue {
    pub const fn new(name: &'static str, shades: [u32; SHADES_PER_HUE]) -> Self {
        Self {
            name,
            shades: [
                Color(shades[0]),
                Color(shades[1]),
                Color(shades[2]),
                Color(shades[3]),
                Color(shades[4]),
                Color(shades[5]),
                Color(shades[6]),
                Color(shades[7]),
                Color(shades[8]),
                Color(shades[9]),
            ],
        }
    }

    /// Get the 500-level color (primary shade, index 5)
    pub const fn primary(&self) -> Color {
        self.shades[5]
    }

    /// Get shade by label ("50", "100", ..., "900").
    pub fn shade(&self, label: &str) -> Option<Color> {
        SHADE_LABELS
            .iter()
            .position(|l| *l == label)
            .map(|i| self.shades[i])
    }
}

/// Lookups over the hue families.
pub struct MaterialPalette;

impl MaterialPalette {
    /// All hue families, in layout order.
    pub fn hues() -> &'static [MaterialHue] {
        MATERIAL_HUES
    }

    /// Find a hue family by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static MaterialHue> {
        MATERIAL_HUES
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
    }

    /// Name the palette entry for a color, e.g. `"Indigo 500"`.
    pub fn describe(color: Color) -> Option<String> {
        let index = PALETTE.iter().position(|c| *c == color)?;
        let hue = &MATERIAL_HUES[index / SHADES_PER_HUE];
        Some(format!("{} {}", hue.name, SHADE_LABELS[index % SHADES_PER_HUE]))
    }
}

// Material Design 2014 palette - https://m2.material.io/design/color/the-color-system.html
pub const MATERIAL_HUES: &[MaterialHue] = &[
    MaterialHue::new("Red", [
        0xFFFFEBEE, 0xFFFFCDD2, 0xFFEF9A9A, 0xFFE57373, 0xFFEF5350,
        0xFFF44336, 0xFFE53935, 0xFFD32F2F, 0xFFC62828, 0xFFB71C1C,
    ]),
    MaterialHue::new("Pink", [
        0xFFFCE4EC, 0xFFF8BBD0, 0xFFF48FB1, 0xFFF06292, 0xFFEC407A,
        0xFFE91E63, 0xFFD81B60, 0xFFC2185B, 0xFFAD1457, 0xFF880E4F,
    ]),
    MaterialHue::new("Purple", [
        0xFFF3E5F5, 0xFFE1BEE7, 0xFFCE93D8, 0xFFBA68C8, 0xFFAB47BC,
        0xFF9C27B0, 0xFF8E24AA, 0xFF7B1FA2, 0xFF6A1B9A, 0xFF4A148C,
    ]),
    MaterialHue::new("Deep Purple", [
        0xFFEDE7F6, 0xFFD1C4E9, 0xFFB39DDB, 0xFF9575CD, 0xFF7E57C2,
        0xFF673AB7, 0xFF5E35B1, 0xFF512DA8, 0xFF4527A0, 0xFF311B92,
    ]),
    MaterialHue::new("Indigo", [
        0xFFE8EAF6, 0xFFC5CAE9, 0xFF9FA8DA, 0xFF7986CB, 0xFF5C6BC0,
        0xFF3F51B5, 0xFF3949AB, 0xFF303F9F, 0xFF283593, 0xFF1A237E,
    ]),
    MaterialHue::new("Blue", [
        0xFFE3F2FD, 0xFFBBDEFB, 0xFF90CAF9, 0xFF64B5F6, 0xFF42A5F5,
        0xFF2196F3, 0xFF1E88E5, 0xFF1976D2, 0xFF1565C0, 0xFF0D47A1,
    ]),
    MaterialHue::new("Light Blue", [
        0xFFE1F5FE, 0xFFB3E5FC, 0xFF81D4FA, 0xFF4FC3F7, 0xFF29B6F6,
        0xFF03A9F4, 0xFF039BE5, 0xFF0288D1, 0xFF0277BD, 0xFF01579B,
    ]),
    MaterialHue::new("Cyan", [
        0xFFE0F7FA, 0xFFB2EBF2, 0xFF80DEEA, 0xFF4DD0E1, 0xFF26C6DA,
        0xFF00BCD4, 0xFF00ACC1, 0xFF0097A7, 0xFF00838F, 0xFF006064,
    ]),
    MaterialHue::new("Teal", [
        0xFFE0F2F1, 0xFFB2DFDB, 0xFF80CBC4, 0xFF4DB6AC, 0xFF26A69A,
        0xFF009688, 0xFF00897B, 0xFF00796B, 0xFF00695C, 0xFF004D40,
    ]),
    MaterialHue::new("Green", [
        0xFFE8F5E9, 0xFFC8E6C9, 0xFFA5D6A7, 0xFF81C784, 0xFF66BB6A,
        0xFF4CAF50, 0xFF43A047, 0xFF388E3C, 0xFF2E7D32, 0xFF1B5E20,
    ]),
    MaterialHue::new("Light Green", [
        0xFFF1F8E9, 0xFFDCEDC8, 0xFFC5E1A5, 0xFFAED581, 0xFF9CCC65,
        0xFF8BC34A, 0xFF7CB342, 0xFF689F38, 0xFF558B2F, 0xFF33691E,
    ]),
    MaterialHue::new("Lime", [
        0xFFF9FBE7, 0xFFF0F4C3, 0xFFE6EE9C, 0xFFDCE775, 0xFFD4E157,
        0xFFCDDC39, 0xFFC0CA33, 0xFFAFB42B, 0xFF9E9D24, 0xFF827717,
    ]),
    MaterialHue::new("Yellow", [
        0xFFFFFDE7, 0xFFFFF9C4, 0xFFFFF59D, 0xFFFFF176, 0xFFFFEE58,
        0xFFFFEB3B, 0xFFFDD835, 0xFFFBC02D, 0xFFF9A825, 0xFFF57F17,
    ]),
    MaterialHue::new("Amber", [
        0xFFFFF8E1, 0xFFFFECB3, 0xFFFFE082, 0xFFFFD54F, 0xFFFFCA28,
        0xFFFFC107, 0xFFFFB300, 0xFFFFA000, 0xFFFF8F00, 0xFFFF6F00,
    ]),
    MaterialHue::new("Orange", [
        0xFFFFF3E0, 0xFFFFE0B2, 0xFFFFCC80, 0xFFFFB74D, 0xFFFFA726,
        0xFFFF9800, 0xFFFB8C00, 0xFFF57C00, 0xFFEF6C00, 0xFFE65100,
    ]),
    MaterialHue::new("Deep Orange", [
        0xFFFBE9E7, 0xFFFFCCBC, 0xFFFFAB91, 0xFFFF8A65, 0xFFFF7043,
        0xFFFF5722, 0xFFF4511E, 0xFFE64A19, 0xFFD84315, 0xFFBF360C,
    ]),
    MaterialHue::new("Brown", [
        0xFFEFEBE9, 0xFFD7CCC8, 0xFFBCAAA4, 0xFFA1887F, 0xFF8D6E63,
        0xFF795548, 0xFF6D4C41, 0xFF5D4037, 0xFF4E342E, 0xFF3E2723,
    ]),
    MaterialHue::new("Grey", [
        0xFFFAFAFA, 0xFFF5F5F5, 0xFFEEEEEE, 0xFFE0E0E0, 0xFFBDBDBD,
        0xFF9E9E9E, 0xFF757575, 0xFF616161, 0xFF424242, 0xFF212121,
    ]),
];

/// Every palette color, hue by hue, lightest shade first.
pub static PALETTE: [Color; PALETTE_LEN] = flatten(MATERIAL_HUES);

const fn flatten(hues: &[MaterialHue]) -> [Color; PALETTE_LEN] {
    let mut out = [Color::TRANSPARENT; PALETTE_LEN];
    let mut i = 0;
    while i < PALETTE_LEN {
        out[i] = hues[i / SHADES_PER_HUE].shades[i % SHADES_PER_HUE];
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_palette_size() {
        assert_eq!(PALETTE_LEN, 180);
        assert_eq!(PALETTE.len(), 180);
    }

    #[test]
    fn test_palette_order_follows_hues() {
        assert_eq!(PALETTE[0], Color(0xFFFF_EBEE)); // Red 50
        assert_eq!(PALETTE[45], Color(0xFF3F_51B5)); // Indigo 500
        assert_eq!(PALETTE[179], Color(0xFF21_2121)); // Grey 900
    }

    #[test]
    fn test_palette_colors_unique_and_opaque() {
        let unique: HashSet<_> = PALETTE.iter().collect();
        assert_eq!(unique.len(), PALETTE_LEN);
        assert!(PALETTE.iter().all(|c| c.a() == 0xFF));
    }

    #[test]
    fn test_hue_lookup() {
        let teal = MaterialPalette::by_name("teal").unwrap();
        assert_eq!(teal.primary(), Color(0xFF00_9688));
        assert_eq!(teal.shade("900"), Some(Color(0xFF00_4D40)));
        assert_eq!(teal.shade("950"), None);
        assert!(MaterialPalette::by_name("Magenta").is_none());
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            MaterialPalette::describe(PALETTE[45]).as_deref(),
            Some("Indigo 500")
        );
        assert_eq!(
            MaterialPalette::describe(Color(0xFF01_579B)).as_deref(),
            Some("Light Blue 900")
        );
        assert_eq!(MaterialPalette::describe(Color(0x1234_5678)), None);
    }
}
