#![allow(clippy::doc_markdown)]

pub mod estimator;
pub mod fmt;
pub mod prelude;
pub mod quantity;
