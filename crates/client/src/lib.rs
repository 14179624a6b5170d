//! Terminal client for the Steak Inc. ranch simulation.
//!
//! The client is the composition root: it reads configuration from the
//! environment, loads content, starts the [`runtime::Runtime`], and drives a
//! line-oriented frontend that talks to it only through
//! [`runtime::RuntimeHandle`].

pub mod app;
pub mod bootstrap;
pub mod config;
pub mod format;
pub mod input;
pub mod logging;
pub mod presentation;

pub use app::{CliApp, CliAppBuilder};
pub use config::ClientConfig;
pub use format::{format_money, format_number};
