//! Charts module - figure specifications and the builders that produce them

mod builder;
mod figure;

pub use builder::{ChartBuilder, ChartError};
pub use figure::{Figure, Layout, Trace};
