use plotters::drawing::DrawingAreaErrorKind;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to draw the figure: {0}")]
    Drawing(String),
    #[error("The circle needs at least 2 samples, got {0}")]
    Samples(usize),
    #[error(
        "The plot width must be within 1 and {max} pixels, got {0}",
        max = crate::MAX_PLOT_WIDTH
    )]
    Size(u32),
}

impl<E> From<DrawingAreaErrorKind<E>> for Error
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        Error::Drawing(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
