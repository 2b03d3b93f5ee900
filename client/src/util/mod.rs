//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `browser` isolates DOM and file APIs behind the `hydrate` feature, while
//! `preview` and `verdict` hold pure presentation rules that test natively.

pub mod browser;
pub mod preview;
pub mod verdict;
