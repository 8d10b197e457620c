//! Application layer orchestrating invoice generation.
//!
//! `InvoiceGenerator` derives the IBAN and payment code from validated input
//! and then drives the renderer, layout and sink ports in order.

pub mod generator;
