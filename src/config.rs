use std::path::PathBuf;
use structopt::StructOpt;

use crate::{sampling::N_SAMPLE, Circle, Error, Figure, Result, MAX_PLOT_WIDTH, PLOT_WIDTH};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "parametric-circle",
    about = "Unit circle from its parametric equations"
)]
pub struct Config {
    /// Figure file, the `svg` extension selects the SVG backend, any other the bitmap one
    #[structopt(short, long, default_value = "parametric-circle.svg", parse(from_os_str))]
    pub filename: PathBuf,
    /// Width of the plotting area [px]
    #[structopt(short, long, default_value = "640")]
    pub size: u32,
    /// Number of angle samples along the circle
    #[structopt(short = "n", long, default_value = "200")]
    pub samples: usize,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            filename: PathBuf::from("parametric-circle.svg"),
            size: PLOT_WIDTH,
            samples: N_SAMPLE,
        }
    }
}
impl Config {
    /// Builds the figure, a curve needs at least 2 samples
    pub fn figure(&self) -> Result<Figure> {
        if self.samples < 2 {
            return Err(Error::Samples(self.samples));
        }
        if self.size == 0 || self.size > MAX_PLOT_WIDTH {
            return Err(Error::Size(self.size));
        }
        Ok(Figure::new(Circle::parametric(self.samples)).width(self.size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments() {
        let config = Config::from_iter(vec!["parametric-circle"]);
        let default = Config::default();
        assert_eq!(config.filename, default.filename);
        assert_eq!(config.size, default.size);
        assert_eq!(config.samples, default.samples);
        let figure = config.figure().unwrap();
        assert_eq!(figure.circle(), &Circle::default());
        assert_eq!(figure.arrows().len(), 5);
    }

    #[test]
    fn arguments() {
        let config =
            Config::from_iter(vec!["parametric-circle", "-f", "circle.png", "-s", "320", "-n", "50"]);
        assert_eq!(config.filename, PathBuf::from("circle.png"));
        assert_eq!(config.figure().unwrap().layout().plot_size.0, 320);
        assert_eq!(config.figure().unwrap().circle().len(), 50);
    }

    #[test]
    fn too_few_samples() {
        let config = Config {
            samples: 1,
            ..Default::default()
        };
        assert!(matches!(config.figure(), Err(Error::Samples(1))));
    }

    #[test]
    fn width_out_of_range() {
        let config = Config::from_iter(vec!["parametric-circle", "-s", "4294967295"]);
        assert!(matches!(config.figure(), Err(Error::Size(u32::MAX))));
        let config = Config {
            size: 0,
            ..Default::default()
        };
        assert!(matches!(config.figure(), Err(Error::Size(0))));
    }
}
