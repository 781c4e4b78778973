pub mod core;
pub mod persistence;

pub use crate::core::dictionary::{Dictionary, EmptyDictionary};
pub use crate::core::engine::SegmentEngine;
