//! # Unit Components
//!
//! Tests for the building blocks of the core model, grouped the way the
//! library lays them out.




/// Monitor, simulator and loader, including end-to-end programs.
pub mod sim;
