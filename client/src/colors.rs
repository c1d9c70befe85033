//! Map overlay palette, matching the report screens' accent colors.

pub const POLYGON_STROKE: (u8, u8, u8) = (0x02, 0x78, 0xAE);
pub const POLYGON_FILL_SELECTED: (u8, u8, u8) = (0xEF, 0x47, 0x6F);
pub const POLYGON_FILL_DEFAULT: (u8, u8, u8) = (0xCC, 0xE6, 0xFF);

pub const POLYGON_STROKE_OPACITY: f64 = 0.8;
pub const POLYGON_FILL_OPACITY: f64 = 0.5;
pub const POLYGON_STROKE_WEIGHT: f64 = 2.0;

/// Format RGBA as a CSS color string.
pub fn rgba_css(r: u8, g: u8, b: u8, a: f64) -> String {
    format!("rgba({r},{g},{b},{a})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_css_formats_components() {
        assert_eq!(rgba_css(2, 120, 174, 0.8), "rgba(2,120,174,0.8)");
    }
}
