//! News headline providers.
//!
//! The headline ticker is flavour text: a provider turns a one-line ranch
//! summary into a satirical headline. Providers may be slow or fail; the
//! worker that drives them substitutes a canned headline and never lets a
//! provider stall the simulation.

mod gemini;
mod provider;

pub use gemini::GeminiHeadlineProvider;
pub use provider::{
    FAILURE_HEADLINE, HeadlineError, HeadlineProvider, INITIAL_HEADLINE, OFFLINE_HEADLINE,
    StaticHeadlineProvider,
};
