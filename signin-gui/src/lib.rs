//! Sign-in form: element tree, iced and HTML renderings, queries over the
//! rendered form, and the desktop application hosting it.

pub mod app;
pub mod args;
pub mod backend;
pub mod config;
pub mod html;
pub mod logger;
pub mod props;
pub mod query;
pub mod testing;
pub mod tree;
pub mod views;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
