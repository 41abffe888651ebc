use super::envelope::{NextLinkKey, TransportError, decode_page};
use super::query::{QueryField, encode_query, push_page};
use crate::domain::{Lease, LeaseDetailsQuery, Paginated};

pub const LEASE_DETAILS_FIELDS: &[QueryField] = &[
    ("property_id", "RMPROPID"),
    ("last_update_date", "LastUpdateDate"),
    ("start_date", "StartDate"),
    ("end_date", "EndDate"),
];

pub const LEASE_DETAILS_NEXT_LINK: NextLinkKey = NextLinkKey::Camel;

pub fn encode_lease_details_query(request: &LeaseDetailsQuery) -> Vec<(String, String)> {
    let mut params = encode_query(request, LEASE_DETAILS_FIELDS);
    push_page(&mut params, request.page);
    params
}

pub fn decode_lease_details_json_response(json: &str) -> Result<Paginated<Lease>, TransportError> {
    decode_page(json, LEASE_DETAILS_NEXT_LINK, Lease::from_wire)
}
