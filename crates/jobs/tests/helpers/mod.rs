#![allow(dead_code)]

mod mock_sources;

pub use mock_sources::*;
