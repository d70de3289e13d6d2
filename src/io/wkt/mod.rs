//! Read and write Well-Known Text.

pub mod reader;
mod writer;
