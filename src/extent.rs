/// Axis aligned bounding box in data coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}
impl Extent {
    /// The `[-1,1]x[-1,1]` box
    pub const UNIT: Extent = Extent {
        x_min: -1.,
        x_max: 1.,
        y_min: -1.,
        y_max: 1.,
    };
    pub fn point((x, y): (f64, f64)) -> Self {
        Self {
            x_min: x,
            x_max: x,
            y_min: y,
            y_max: y,
        }
    }
    /// Smallest box containing all the points, `None` if there are none
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut points = points.into_iter();
        let first = Self::point(points.next()?);
        Some(points.fold(first, |extent, p| extent.extend(p)))
    }
    pub fn extend(self, (x, y): (f64, f64)) -> Self {
        Self {
            x_min: self.x_min.min(x),
            x_max: self.x_max.max(x),
            y_min: self.y_min.min(y),
            y_max: self.y_max.max(y),
        }
    }
    pub fn union(self, other: Extent) -> Self {
        self.extend((other.x_min, other.y_min))
            .extend((other.x_max, other.y_max))
    }
    /// Grows the box on each side by `ratio` times its width (height)
    pub fn padded(self, ratio: f64) -> Self {
        let dx = self.width() * ratio;
        let dy = self.height() * ratio;
        Self {
            x_min: self.x_min - dx,
            x_max: self.x_max + dx,
            y_min: self.y_min - dy,
            y_max: self.y_max + dy,
        }
    }
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
    pub fn contains(&self, (x, y): (f64, f64)) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}
