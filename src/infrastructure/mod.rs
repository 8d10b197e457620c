//! Concrete implementations of the domain ports.

pub mod fs;
pub mod html;
pub mod in_memory;
pub mod qr;
