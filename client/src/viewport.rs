use dongmap_shared::{DEFAULT_MAP_CENTER, DEFAULT_MAP_LEVEL, LatLng};

/// Pixels per degree of latitude at zoom level 1. Each level halves the scale,
/// so the default citywide level 8 shows roughly all of Seoul on one screen.
const BASE_PX_PER_DEG: f64 = 280_000.0;
const MIN_LEVEL: u8 = 1;
const MAX_LEVEL: u8 = 14;

/// Geographic viewport: maps lat/lng to canvas pixels around a center
/// coordinate with a Kakao-style integer zoom level. Longitude is compressed
/// by the cosine of the citywide reference latitude so shapes keep their
/// aspect; the fixed reference keeps the transform affine, so pan and
/// focus-preserving zoom are exact.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub center: LatLng,
    pub level: u8,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: DEFAULT_MAP_CENTER,
            level: DEFAULT_MAP_LEVEL,
        }
    }
}

impl Viewport {
    fn px_per_deg(&self) -> f64 {
        BASE_PX_PER_DEG / f64::powi(2.0, self.level as i32 - 1)
    }

    fn lng_px_per_deg(&self) -> f64 {
        self.px_per_deg() * DEFAULT_MAP_CENTER.lat.to_radians().cos()
    }

    /// Project a coordinate to canvas pixels. North is up, so latitude grows
    /// toward smaller y.
    pub fn to_screen(&self, point: LatLng, canvas_w: f64, canvas_h: f64) -> (f64, f64) {
        (
            canvas_w / 2.0 + (point.lng - self.center.lng) * self.lng_px_per_deg(),
            canvas_h / 2.0 - (point.lat - self.center.lat) * self.px_per_deg(),
        )
    }

    /// Inverse of [`Viewport::to_screen`].
    pub fn to_latlng(&self, x: f64, y: f64, canvas_w: f64, canvas_h: f64) -> LatLng {
        LatLng::new(
            self.center.lat - (y - canvas_h / 2.0) / self.px_per_deg(),
            self.center.lng + (x - canvas_w / 2.0) / self.lng_px_per_deg(),
        )
    }

    /// Drag-pan by a screen-space delta: the map follows the pointer, so the
    /// center moves the opposite way.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.center.lng -= dx / self.lng_px_per_deg();
        self.center.lat += dy / self.px_per_deg();
    }

    /// Step the zoom level toward the wheel direction, keeping the coordinate
    /// under the cursor fixed on screen.
    pub fn zoom_at(&mut self, delta: f64, x: f64, y: f64, canvas_w: f64, canvas_h: f64) {
        let next = if delta < 0.0 {
            self.level.saturating_sub(1).max(MIN_LEVEL)
        } else {
            (self.level + 1).min(MAX_LEVEL)
        };
        if next == self.level {
            return;
        }
        let focus = self.to_latlng(x, y, canvas_w, canvas_h);
        self.level = next;
        let (fx, fy) = self.to_screen(focus, canvas_w, canvas_h);
        self.pan(x - fx, y - fy);
    }

    /// Programmatic re-centering (district/dong selection). Zoom is untouched.
    pub fn center_on(&mut self, center: LatLng) {
        self.center = center;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f64 = 1200.0;
    const H: f64 = 800.0;

    #[test]
    fn center_projects_to_canvas_midpoint() {
        let vp = Viewport::default();
        let (x, y) = vp.to_screen(vp.center, W, H);
        assert!((x - W / 2.0).abs() < 1e-9);
        assert!((y - H / 2.0).abs() < 1e-9);
    }

    #[test]
    fn projection_round_trips() {
        let vp = Viewport::default();
        let point = LatLng::new(37.500730, 127.036420);
        let (x, y) = vp.to_screen(point, W, H);
        let back = vp.to_latlng(x, y, W, H);
        assert!((back.lat - point.lat).abs() < 1e-9);
        assert!((back.lng - point.lng).abs() < 1e-9);
    }

    #[test]
    fn north_is_up() {
        let vp = Viewport::default();
        let north = LatLng::new(vp.center.lat + 0.01, vp.center.lng);
        let (_, y) = vp.to_screen(north, W, H);
        assert!(y < H / 2.0);
    }

    #[test]
    fn pan_moves_center_against_the_drag() {
        let mut vp = Viewport::default();
        let before = vp.center;
        vp.pan(100.0, 0.0);
        assert!(vp.center.lng < before.lng);
        vp.pan(0.0, 50.0);
        assert!(vp.center.lat > before.lat);
    }

    #[test]
    fn zoom_keeps_the_focus_point_fixed() {
        let mut vp = Viewport::default();
        let focus_px = (200.0, 600.0);
        let focus_geo = vp.to_latlng(focus_px.0, focus_px.1, W, H);
        vp.zoom_at(-120.0, focus_px.0, focus_px.1, W, H);
        assert_eq!(vp.level, DEFAULT_MAP_LEVEL - 1);
        let (x, y) = vp.to_screen(focus_geo, W, H);
        assert!((x - focus_px.0).abs() < 1e-6);
        assert!((y - focus_px.1).abs() < 1e-6);
    }

    #[test]
    fn zoom_clamps_at_level_bounds() {
        let mut vp = Viewport { level: MIN_LEVEL, ..Viewport::default() };
        let before = vp.clone();
        vp.zoom_at(-120.0, W / 2.0, H / 2.0, W, H);
        assert_eq!(vp, before);

        let mut vp = Viewport { level: MAX_LEVEL, ..Viewport::default() };
        let before = vp.clone();
        vp.zoom_at(120.0, W / 2.0, H / 2.0, W, H);
        assert_eq!(vp, before);
    }

    #[test]
    fn center_on_only_moves_the_center() {
        let mut vp = Viewport::default();
        let target = LatLng::new(37.563456, 127.036821);
        vp.center_on(target);
        assert_eq!(vp.center, target);
        assert_eq!(vp.level, DEFAULT_MAP_LEVEL);
    }
}
