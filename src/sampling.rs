use std::f64::consts::PI;

/// Number of angle samples along the circle
pub const N_SAMPLE: usize = 200;

/// Returns `n` evenly spaced values over `[start, end]`
///
/// Both end points are included and the last value is exactly `end`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            if let Some(last) = values.last_mut() {
                *last = end;
            }
            values
        }
    }
}

/// Unit circle sampled from its parametric equations
///
/// `x = cos(θ)`, `y = sin(θ)` with `θ` evenly spaced over `[0, 2π]`
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    angle: Vec<f64>,
    x: Vec<f64>,
    y: Vec<f64>,
}
impl Default for Circle {
    fn default() -> Self {
        Self::parametric(N_SAMPLE)
    }
}
impl Circle {
    /// Samples the circle at `n_sample` angles
    pub fn parametric(n_sample: usize) -> Self {
        let angle = linspace(0f64, 2. * PI, n_sample);
        let (x, y): (Vec<f64>, Vec<f64>) = angle.iter().map(|a| (a.cos(), a.sin())).unzip();
        Self { angle, x, y }
    }
    pub fn len(&self) -> usize {
        self.angle.len()
    }
    pub fn is_empty(&self) -> bool {
        self.angle.is_empty()
    }
    /// Angle samples [rd]
    pub fn angles(&self) -> &[f64] {
        &self.angle
    }
    pub fn x(&self) -> &[f64] {
        &self.x
    }
    pub fn y(&self) -> &[f64] {
        &self.y
    }
    /// Iterator over the (x,y) coordinates
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().cloned().zip(self.y.iter().cloned())
    }
}
