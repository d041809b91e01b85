#![no_std]

pub mod color;
pub mod contrast;
pub mod error;
pub mod parse;

pub use color::Color;
pub use contrast::Contrast;
pub use error::{ColorError, ParseColorError};
