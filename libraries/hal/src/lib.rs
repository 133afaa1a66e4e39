#![no_std]
extern crate alloc;

mod error;
mod transport;

pub use error::*;
pub use transport::*;
