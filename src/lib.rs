//! Czech invoices with QR payment codes.
//!
//! The core is [`domain::account::convert`], which turns a domestic account
//! number and bank code into an IBAN, and [`domain::payment::build`], which
//! assembles the `SPD*1.0*` payment string. Everything else wires those into
//! a rendered, single-page invoice.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
pub mod logging;
