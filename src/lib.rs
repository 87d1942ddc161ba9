//! Unit circle drawn from its parametric equations
//!
//! The circle `x = cos(θ)`, `y = sin(θ)` is sampled at [N_SAMPLE] angles over `[0, 2π]`
//! and annotated with four arrows at the cardinal points and one at 45°.
//!
//! ```no_run
//! use parametric_circle::Figure;
//! Figure::default().save("parametric-circle.svg")?;
//! # Ok::<(), parametric_circle::Error>(())
//! ```

pub mod arrow;
pub mod config;
pub mod error;
pub mod extent;
pub mod figure;
pub mod sampling;

pub use arrow::Arrow;
pub use config::Config;
pub use error::{Error, Result};
pub use extent::Extent;
pub use figure::{Figure, Layout, MAX_PLOT_WIDTH, PLOT_WIDTH, TITLE};
pub use sampling::{linspace, Circle, N_SAMPLE};
