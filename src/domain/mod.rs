//! Domain layer: account identifiers, payment codes and the invoice record,
//! plus the ports the application layer drives.

pub mod account;
pub mod invoice;
pub mod payment;
pub mod ports;
