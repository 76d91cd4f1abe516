//! Heap types used across the crate, sourced from `alloc` so the same paths
//! work with and without the `std` feature.

pub use alloc::borrow::Cow;
pub use alloc::boxed::Box;
pub use alloc::string::{String, ToString};
pub use alloc::vec::Vec;
