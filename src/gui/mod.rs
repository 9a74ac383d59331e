//! Native portfolio window

mod app;
mod components;
mod constants;
pub mod session;
mod slides;

pub use app::run_gui;
