//! Entry points for working with raw receipts outside of an envelope.

pub use crate::data::datasources::receipt_payload_datasource::parse_receipt;
