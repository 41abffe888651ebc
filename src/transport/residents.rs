use super::envelope::{TransportError, decode_records};
use super::query::{QueryField, encode_query};
use crate::domain::{Resident, ResidentsByPropertyQuery, ResidentsQuery};

pub const RESIDENTS_BY_PROPERTY_FIELDS: &[QueryField] = &[("property_id", "RMPROPID")];

pub const RESIDENTS_FIELDS: &[QueryField] = &[
    ("last_update", "LastUpdate"),
    ("name_id", "NameID"),
    ("start_date", "StartDate"),
    ("end_date", "EndDate"),
    ("property_id", "PropertyID"),
    ("resident_type", "Type"),
    ("status", "Status"),
];

pub const INCLUDE_PII_KEY: &str = "IncludePII";

pub fn encode_residents_by_property_query(
    request: &ResidentsByPropertyQuery,
) -> Vec<(String, String)> {
    encode_query(request, RESIDENTS_BY_PROPERTY_FIELDS)
}

pub fn encode_residents_query(request: &ResidentsQuery) -> Vec<(String, String)> {
    let mut params = encode_query(request, RESIDENTS_FIELDS);
    let include_pii = if request.include_pii() { "Y" } else { "N" };
    params.push((INCLUDE_PII_KEY.to_owned(), include_pii.to_owned()));
    params
}

/// Both resident endpoints answer with the same record shape.
pub fn decode_residents_json_response(json: &str) -> Result<Vec<Resident>, TransportError> {
    decode_records(json, Resident::from_wire)
}
