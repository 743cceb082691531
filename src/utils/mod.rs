// src/utils/mod.rs

pub mod progress;
pub mod tables;
