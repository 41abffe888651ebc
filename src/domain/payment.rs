use chrono::NaiveDate;

use crate::domain::request::PaymentRequest;

type Setter = fn(&mut Payment, Option<String>);

/// A payment posted to a resident's account.
///
/// Built from a [`PaymentRequest`] before submission, then updated in place with the
/// record the provider echoes back (transaction id, batch id, charge code, ...).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payment {
    pub resident_name_id: Option<String>,
    pub property_id: Option<String>,
    pub paid_at: Option<NaiveDate>,
    pub amount: Option<f64>,
    pub check_number: Option<String>,
    pub external_transaction_number: Option<String>,
    pub charge_id: Option<String>,
    pub external_batch_id: Option<String>,
    pub description: Option<String>,
    pub batch_description: Option<String>,
    pub check_url: Option<String>,
    pub deposit_date: Option<NaiveDate>,

    pub transaction_id: Option<String>,
    pub site_id: Option<String>,
    pub charge_code: Option<String>,
    pub partner_name: Option<String>,
    pub payment_type: Option<String>,
    pub update_control_total: Option<String>,
    pub batch_id: Option<String>,
    pub apply_to_charges_through_date: Option<String>,
    pub tracking_value: Option<String>,
    pub apply_to_direct_debit_only: Option<String>,
    pub cash_type: Option<String>,
}

impl Payment {
    pub const PARTNER_NAME: &'static str = "MICA";
    pub const CASH_TYPE: &'static str = "V2";
    pub const PAYMENT_TYPE: &'static str = "C";

    pub const CHECK_NUMBER_MAX_LEN: usize = 15;
    pub const EXTERNAL_TRANSACTION_NUMBER_MAX_LEN: usize = 10;
    pub const EXTERNAL_BATCH_ID_MAX_LEN: usize = 30;
    pub const DESCRIPTION_MAX_LEN: usize = 30;
    pub const BATCH_DESCRIPTION_MAX_LEN: usize = 30;

    /// Writable attributes keyed by their snake_case name.
    ///
    /// Response fields whose translated name is not listed here are ignored.
    const SETTERS: &'static [(&'static str, Setter)] = &[
        ("resident_name_id", |p, v| p.resident_name_id = v),
        ("property_id", |p, v| p.property_id = v),
        ("check_number", |p, v| p.check_number = v),
        ("external_transaction_number", |p, v| {
            p.external_transaction_number = v
        }),
        ("charge_id", |p, v| p.charge_id = v),
        ("external_batch_id", |p, v| p.external_batch_id = v),
        ("description", |p, v| p.description = v),
        ("batch_description", |p, v| p.batch_description = v),
        ("check_url", |p, v| p.check_url = v),
        ("deposit_date", |p, v| match v {
            None => p.deposit_date = None,
            Some(text) => match parse_date_prefix(&text) {
                Some(date) => p.deposit_date = Some(date),
                None => {
                    tracing::trace!(value = %text, "ignoring unparseable deposit date");
                }
            },
        }),
        ("transaction_id", |p, v| p.transaction_id = v),
        ("site_id", |p, v| p.site_id = v),
        ("charge_code", |p, v| p.charge_code = v),
        ("partner_name", |p, v| p.partner_name = v),
        ("payment_type", |p, v| p.payment_type = v),
        ("update_control_total", |p, v| p.update_control_total = v),
        ("batch_id", |p, v| p.batch_id = v),
        ("apply_to_charges_through_date", |p, v| {
            p.apply_to_charges_through_date = v
        }),
        ("tracking_value", |p, v| p.tracking_value = v),
        ("apply_to_direct_debit_only", |p, v| {
            p.apply_to_direct_debit_only = v
        }),
        ("cash_type", |p, v| p.cash_type = v),
    ];

    pub fn from_request(request: PaymentRequest) -> Self {
        Self {
            deposit_date: request.deposit_date.or(request.paid_at),
            resident_name_id: request.resident_name_id,
            property_id: request.property_id,
            paid_at: request.paid_at,
            amount: request.amount,
            check_number: request.check_number,
            external_transaction_number: request.external_transaction_number,
            charge_id: request.charge_id,
            external_batch_id: request.external_batch_id,
            description: request.description,
            batch_description: request.batch_description,
            check_url: request.check_url,
            ..Default::default()
        }
    }

    /// Assign one attribute by its snake_case name. Returns `false` for unknown names.
    pub fn set_field(&mut self, name: &str, value: Option<String>) -> bool {
        match Self::SETTERS.iter().find(|(field, _)| *field == name) {
            Some((_, setter)) => {
                setter(self, value);
                true
            }
            None => false,
        }
    }

    pub fn is_writable(name: &str) -> bool {
        Self::SETTERS.iter().any(|(field, _)| *field == name)
    }

    /// Amount formatted with two decimals, as the provider expects it.
    pub fn formatted_amount(&self) -> Option<String> {
        self.amount.map(|amount| format!("{amount:.2}"))
    }
}

impl From<PaymentRequest> for Payment {
    fn from(request: PaymentRequest) -> Self {
        Self::from_request(request)
    }
}

fn parse_date_prefix(text: &str) -> Option<NaiveDate> {
    let prefix = text.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}
