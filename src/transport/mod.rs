//! Transport layer: query keys, JSON envelopes, and provider field naming.

mod envelope;
mod error_body;
mod field_name;
mod lease_details;
mod ledger;
mod open_charges;
mod payment;
mod pending_move_ins;
mod query;
mod residents;

pub use envelope::TransportError;
pub use error_body::{GENERIC_ERROR_MESSAGE, decode_error_message};
pub use field_name::camel_to_snake;
pub use lease_details::{decode_lease_details_json_response, encode_lease_details_query};
pub use ledger::{decode_ledger_json_response, encode_ledger_query};
pub use open_charges::{decode_open_charges_json_response, encode_open_charges_query};
pub use payment::{decode_payment_json_response, encode_payment_body, metadata_url};
pub use pending_move_ins::{decode_pending_move_ins_json_response, encode_pending_move_ins_query};
pub use residents::{
    decode_residents_json_response, encode_residents_by_property_query, encode_residents_query,
};
