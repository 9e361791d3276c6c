//! Core library for the parade-state command line application.
//!
//! The crate assembles a daily roster report ("parade state") from a tabular
//! attendance sheet and a duty-rotation announcement, and renders it as a
//! deterministic text message. The modules keep responsibilities narrow and
//! composable: IO adapters live under [`io`], data representations inside
//! [`model`], the cell and message parsers in [`parse`], roster assembly in
//! [`aggregate`], rendering in [`render`], and the end-to-end orchestration
//! under [`pipeline`].

pub mod aggregate;
pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod parse;
pub mod pipeline;
pub mod render;

pub use error::{ParadeError, Result};
