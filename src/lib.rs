// src/lib.rs

pub mod domain;
pub mod error;
pub mod extractor;
pub mod lifecycle;
pub mod service;
