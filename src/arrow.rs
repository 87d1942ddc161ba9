use plotters::style::RGBColor;
use std::f64::consts::FRAC_1_SQRT_2;

use crate::Extent;

/// Arrow color, green
pub const GREEN: RGBColor = RGBColor(0, 128, 0);
/// Arrow head width in data units
pub const HEAD_WIDTH: f64 = 0.05;
/// Arrow head length relative to the head width
pub const HEAD_LENGTH_RATIO: f64 = 1.5;

/// Arrow annotation
///
/// The shaft goes from `origin` to `origin + delta`, the head is drawn beyond
/// that point: its base is centered on `origin + delta` and its apex lies
/// `1.5 x head_width` further along the arrow direction.
#[derive(Debug, Clone, Copy)]
pub struct Arrow {
    pub origin: (f64, f64),
    pub delta: (f64, f64),
    pub color: RGBColor,
    pub head_width: f64,
}
impl Arrow {
    /// Green arrow from `(x,y)` along `(dx,dy)`
    pub fn new(x: f64, y: f64, dx: f64, dy: f64) -> Self {
        Self {
            origin: (x, y),
            delta: (dx, dy),
            color: GREEN,
            head_width: HEAD_WIDTH,
        }
    }
    pub fn head_width(self, head_width: f64) -> Self {
        Self { head_width, ..self }
    }
    /// The four cardinal arrows followed by the diagonal one
    pub fn annotations() -> [Arrow; 5] {
        let xy = FRAC_1_SQRT_2;
        [
            Arrow::new(1., 0., 0., 1.),
            Arrow::new(0., 1., -1., 0.),
            Arrow::new(-1., 0., 0., -1.),
            Arrow::new(0., -1., 1., 0.),
            Arrow::new(xy, xy, -xy, xy),
        ]
    }
    /// End of the shaft, `origin + delta`
    pub fn tip(&self) -> (f64, f64) {
        (self.origin.0 + self.delta.0, self.origin.1 + self.delta.1)
    }
    pub fn length(&self) -> f64 {
        self.delta.0.hypot(self.delta.1)
    }
    /// Unit vector along the arrow, `(0,0)` for a zero length arrow
    pub fn direction(&self) -> (f64, f64) {
        let l = self.length();
        if l > 0. {
            (self.delta.0 / l, self.delta.1 / l)
        } else {
            (0., 0.)
        }
    }
    pub fn head_length(&self) -> f64 {
        HEAD_LENGTH_RATIO * self.head_width
    }
    /// Head triangle vertices: left base corner, apex, right base corner
    pub fn head(&self) -> [(f64, f64); 3] {
        let (x, y) = self.tip();
        let (ux, uy) = self.direction();
        let h = 0.5 * self.head_width;
        let l = self.head_length();
        [
            (x - uy * h, y + ux * h),
            (x + ux * l, y + uy * l),
            (x + uy * h, y - ux * h),
        ]
    }
    /// Bounding box of the shaft and the head
    pub fn extent(&self) -> Extent {
        self.head()
            .into_iter()
            .fold(Extent::point(self.origin).extend(self.tip()), |e, p| {
                e.extend(p)
            })
    }
}
