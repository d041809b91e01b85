#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ColorError {
    #[error("contrast value must be between 0 and 1, got {0}")]
    ContrastOutOfRange(f64),
    #[error("{channel} channel out of range: {value} (expected 0..=255)")]
    ChannelOutOfRange { channel: &'static str, value: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    #[error("empty color string")]
    Empty,
    #[error("invalid hex length")]
    InvalidLength,
    #[error("invalid hex digits")]
    InvalidHex,
    #[error("invalid channel, expected `r,g,b` with values 0..=255")]
    InvalidChannel,
}
