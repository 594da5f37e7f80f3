//! riskviz builds declarative chart specs for a credit risk dashboard.
//!
//! The crate turns scored risk metrics and a credit decision into the
//! radar and donut configurations the dashboard's rendering engine
//! consumes. The binary in `main.rs` is a thin CLI wrapper; everything
//! it does goes through this library so the behavior stays testable.

pub mod chart;
pub mod engine;
pub mod mode;
pub mod output;
pub mod panel;
