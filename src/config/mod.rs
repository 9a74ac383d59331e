//! Configuration for portfolio-view
//!
//! - **portfolio**: PortfolioConfig file (window, appearance, profile)
//! - **profile**: the immutable ProfileRecord displayed by the GUI

pub mod portfolio;
pub mod profile;

// Re-export commonly used types
pub use portfolio::{ConfigFormat, PortfolioConfig};
pub use profile::{ProfileRecord, Slide};
