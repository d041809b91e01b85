use color::ColorError;

#[derive(Debug, thiserror::Error)]
pub(crate) enum SwatchError {
    #[error("Color error: {0}")]
    Color(#[from] ColorError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
