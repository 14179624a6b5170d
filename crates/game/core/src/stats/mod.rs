//! Stats aggregation.
//!
//! ```text
//! [ GameState + Catalog + GameConfig ]
//!      ↓  fold owned upgrade levels
//! [ capacities, unit value, auto rate ]
//!      ↓  shipping clamp
//! [ income per second ]
//! ```
//!
//! Everything here is a pure function of its inputs.

pub mod derived;

pub use derived::DerivedStats;
