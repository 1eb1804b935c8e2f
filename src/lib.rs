pub mod config;
pub mod constants;
pub mod error;
pub mod geo;
pub mod input;
pub mod layout;
pub mod light;
pub mod output;
pub mod processing;

pub use config::LayoutConfig;
pub use error::{LightsError, Result};
pub use processing::LightsProcessor;
