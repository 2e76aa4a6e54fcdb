//! Preference engine for demo launchers.
//!
//! Parses a product's line-oriented preference file into a typed option
//! tree ([`prefs::PrefSet`]), lets a front end edit it through entry
//! handles, writes it back, and derives the launch command line from the
//! current values. [`session::Session`] ties these steps to the files of
//! one product; [`config`] decides where those files live.

pub mod config;
pub mod constants;
pub mod prefs;
pub mod session;

pub use config::{Config, ProductPaths};
pub use session::Session;
