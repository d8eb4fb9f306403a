pub mod generate;
pub mod preview;

pub use generate::{GenerateConfig, generate_models};
