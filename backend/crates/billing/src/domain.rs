//! Invoice model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Paid,
    Due,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    /// ISO 8601 calendar date
    pub date: String,
    pub amount: f64,
    pub status: InvoiceStatus,
    pub pdf_url: String,
}

impl Invoice {
    fn monthly(number: u32, date: &str, status: InvoiceStatus) -> Self {
        let id = format!("inv_{number}");
        Self {
            pdf_url: format!("https://example.com/invoices/{id}.pdf"),
            id,
            date: date.to_string(),
            amount: 29.0,
            status,
        }
    }
}

/// Fixed invoice history returned to every user
pub fn sample_invoices() -> Vec<Invoice> {
    vec![
        Invoice::monthly(1001, "2024-01-15", InvoiceStatus::Paid),
        Invoice::monthly(1002, "2024-02-15", InvoiceStatus::Paid),
        Invoice::monthly(1003, "2024-03-15", InvoiceStatus::Due),
    ]
}
