// src/graph/mod.rs
pub mod rank;
