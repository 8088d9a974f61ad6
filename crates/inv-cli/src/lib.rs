//! Library components of the `inventaris` console.

#![allow(missing_docs)]

pub mod logging;
pub mod source;
