use super::envelope::{NextLinkKey, TransportError, decode_page};
use super::query::{QueryField, encode_query, push_page};
use crate::domain::{LedgerQuery, LedgerTransaction, Paginated};

pub const LEDGER_FIELDS: &[QueryField] = &[
    ("start_date", "STARTDATE"),
    ("end_date", "ENDDATE"),
    ("resident_name_id", "NAMEID"),
    ("property_id", "PROPERTYID"),
];

/// The ledger reports its continuation link in snake case, unlike the other endpoints.
pub const LEDGER_NEXT_LINK: NextLinkKey = NextLinkKey::Snake;

pub fn encode_ledger_query(request: &LedgerQuery) -> Vec<(String, String)> {
    let mut params = encode_query(request, LEDGER_FIELDS);
    push_page(&mut params, request.page);
    params
}

pub fn decode_ledger_json_response(
    json: &str,
) -> Result<Paginated<LedgerTransaction>, TransportError> {
    decode_page(json, LEDGER_NEXT_LINK, LedgerTransaction::from_wire)
}
