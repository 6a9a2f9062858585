//! Foundation module - utilities shared across the engine
//!
//! Currently hosts the logging facade; anything not tied to the rendering
//! path belongs here.

pub mod logging;
