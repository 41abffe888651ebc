use super::envelope::{NextLinkKey, TransportError, decode_page};
use super::query::{QueryField, encode_query, push_page};
use crate::domain::{Paginated, PendingMoveIn, PendingMoveInsQuery};

pub const PENDING_MOVE_INS_FIELDS: &[QueryField] = &[("property_id", "PropertyID")];

pub const PENDING_MOVE_INS_NEXT_LINK: NextLinkKey = NextLinkKey::Camel;

pub fn encode_pending_move_ins_query(request: &PendingMoveInsQuery) -> Vec<(String, String)> {
    let mut params = encode_query(request, PENDING_MOVE_INS_FIELDS);
    push_page(&mut params, request.page);
    params
}

pub fn decode_pending_move_ins_json_response(
    json: &str,
) -> Result<Paginated<PendingMoveIn>, TransportError> {
    decode_page(json, PENDING_MOVE_INS_NEXT_LINK, PendingMoveIn::from_wire)
}
