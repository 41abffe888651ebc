use super::envelope::{TransportError, decode_records};
use super::query::{QueryField, encode_query};
use crate::domain::{BillingItem, OpenChargesQuery};

pub const OPEN_CHARGES_FIELDS: &[QueryField] = &[
    ("last_update", "LASTUPDATE"),
    ("property_id", "RMPROPID"),
    ("resident_id", "ResidentID"),
];

pub fn encode_open_charges_query(request: &OpenChargesQuery) -> Vec<(String, String)> {
    encode_query(request, OPEN_CHARGES_FIELDS)
}

pub fn decode_open_charges_json_response(json: &str) -> Result<Vec<BillingItem>, TransportError> {
    decode_records(json, BillingItem::from_wire)
}
