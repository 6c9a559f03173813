// src/lib.rs
pub mod domain;
pub mod infra;
pub mod money;
pub mod services;

pub use domain::*;
pub use money::*;
