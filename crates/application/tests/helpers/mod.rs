#![allow(dead_code)]

mod mock_registries;

pub use mock_registries::*;
