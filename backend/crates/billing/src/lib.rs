//! Billing Backend Module
//!
//! Invoice listing for signed-in users. Invoices are static sample data;
//! there is no payment provider behind this crate.
//!
//! - `domain` - Invoice model and the sample invoice set
//! - `presentation` - HTTP handler and bearer-protected router

pub mod domain;
pub mod presentation;


pub use domain::{Invoice, InvoiceStatus, sample_invoices};
pub use presentation::billing_router;
