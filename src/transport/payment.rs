use serde::Serialize;
use serde_json::{Map, Value};

use super::envelope::{TransportError, VALUE_KEY, parse_body, value_objects};
use super::error_body::GENERIC_ERROR_MESSAGE;
use super::field_name::camel_to_snake;
use crate::domain::record::scalar_text;
use crate::domain::{BaseUrl, Payment, PaymentSubmission};

const STATUS_KEY: &str = "status";
const RECORD_ERROR_KEY: &str = "Error";
const ACCEPTED_STATUS: u16 = 200;
const REJECTED_STATUS: u16 = 400;

#[derive(Debug, Clone, Serialize)]
struct PaymentEnvelope {
    #[serde(rename = "odata.metadata")]
    metadata: String,
    value: Vec<PaymentRecord>,
}

/// One payment record as the provider reads it. Absent optional values are sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
struct PaymentRecord {
    #[serde(rename = "ResidentNameID")]
    resident_name_id: Option<String>,
    #[serde(rename = "PropertyID")]
    property_id: Option<String>,
    payment_initiation_datetime: Option<String>,
    payment_amount: Option<String>,
    payment_type: &'static str,
    check_number: String,
    partner_name: &'static str,
    external_transaction_number: String,
    #[serde(rename = "ChargeID")]
    charge_id: Option<String>,
    #[serde(rename = "ExternalBatchID")]
    external_batch_id: String,
    description: String,
    batch_description: String,
    #[serde(rename = "CheckURL")]
    check_url: Option<String>,
    deposit_date: Option<String>,
    cash_type: &'static str,
}

impl PaymentRecord {
    fn from_payment(payment: &Payment) -> Self {
        Self {
            resident_name_id: payment.resident_name_id.clone(),
            property_id: payment.property_id.clone(),
            payment_initiation_datetime: payment.paid_at.map(|date| date.to_string()),
            payment_amount: payment.formatted_amount(),
            payment_type: Payment::PAYMENT_TYPE,
            check_number: truncated(
                payment.check_number.as_deref(),
                Payment::CHECK_NUMBER_MAX_LEN,
            ),
            partner_name: Payment::PARTNER_NAME,
            external_transaction_number: truncated(
                payment.external_transaction_number.as_deref(),
                Payment::EXTERNAL_TRANSACTION_NUMBER_MAX_LEN,
            ),
            charge_id: payment.charge_id.clone(),
            external_batch_id: truncated(
                payment.external_batch_id.as_deref(),
                Payment::EXTERNAL_BATCH_ID_MAX_LEN,
            ),
            description: truncated(payment.description.as_deref(), Payment::DESCRIPTION_MAX_LEN),
            batch_description: truncated(
                payment.batch_description.as_deref(),
                Payment::BATCH_DESCRIPTION_MAX_LEN,
            ),
            check_url: payment.check_url.clone(),
            deposit_date: payment.deposit_date.map(|date| date.to_string()),
            cash_type: Payment::CASH_TYPE,
        }
    }
}

/// Leading `max_chars` characters; absent values become an empty string.
fn truncated(value: Option<&str>, max_chars: usize) -> String {
    value
        .map(|text| text.chars().take(max_chars).collect())
        .unwrap_or_default()
}

/// OData metadata reference for a write endpoint.
pub fn metadata_url(base_url: &BaseUrl, endpoint: &str) -> String {
    let container = endpoint.to_lowercase();
    format!(
        "{}?$api={endpoint}&$metadata#MRI.{container}-container/{container}",
        base_url.as_str()
    )
}

/// JSON body for a payment submission: the metadata reference plus a single record.
pub fn encode_payment_body(
    base_url: &BaseUrl,
    endpoint: &str,
    payment: &Payment,
) -> Result<Value, TransportError> {
    let envelope = PaymentEnvelope {
        metadata: metadata_url(base_url, endpoint),
        value: vec![PaymentRecord::from_payment(payment)],
    };
    Ok(serde_json::to_value(envelope)?)
}

/// Interpret a 2xx payment response and fold the echoed record into `payment`.
///
/// - a body-level `status` other than 200 is a rejection,
/// - no record in `value` yields [`PaymentSubmission::NoRecord`],
/// - a record carrying an `Error` object is a rejection with status 400,
/// - otherwise each record field is translated to snake_case and assigned when
///   the payment has a matching attribute.
pub fn decode_payment_json_response(
    json: &str,
    mut payment: Payment,
) -> Result<PaymentSubmission, TransportError> {
    let body = parse_body(json)?;

    if let Some(status) = body_status(&body) {
        if status != ACCEPTED_STATUS.to_string() {
            return Ok(PaymentSubmission::Rejected {
                status: status.parse().unwrap_or(REJECTED_STATUS),
                error: body_message(&body),
            });
        }
    }

    if !body.contains_key(VALUE_KEY) {
        return Ok(PaymentSubmission::NoRecord);
    }
    let Some(record) = value_objects(&body).into_iter().next() else {
        return Ok(PaymentSubmission::NoRecord);
    };

    if let Some(error) = record.get(RECORD_ERROR_KEY).filter(|error| !error.is_null()) {
        return Ok(PaymentSubmission::Rejected {
            status: REJECTED_STATUS,
            error: record_error_message(error),
        });
    }

    for (key, value) in record {
        let name = camel_to_snake(key);
        if !payment.set_field(&name, scalar_text(value)) {
            tracing::trace!(field = %key, "ignoring unknown payment response field");
        }
    }

    Ok(PaymentSubmission::Accepted {
        status: ACCEPTED_STATUS,
        payment,
    })
}

fn body_status(body: &Map<String, Value>) -> Option<String> {
    body.get(STATUS_KEY).and_then(scalar_text)
}

fn body_message(body: &Map<String, Value>) -> String {
    ["error", "message"]
        .iter()
        .filter_map(|key| body.get(*key))
        .find_map(scalar_text)
        .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_owned())
}

fn record_error_message(error: &Value) -> String {
    match error {
        Value::Object(detail) => ["Message", "message"]
            .iter()
            .filter_map(|key| detail.get(*key))
            .find_map(scalar_text)
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_owned()),
        other => scalar_text(other).unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_owned()),
    }
}
