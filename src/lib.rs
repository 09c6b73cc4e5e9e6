// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod init;
pub mod learning;
pub mod persistence;
pub mod session;

pub use crate::config::EngineConfig;
pub use crate::core::engine::PredictiveEngine;
pub use crate::error::{KeypadError, Result};
pub use crate::session::Session;
