use chrono::NaiveDate;

use crate::domain::validation::{
    Alternative, ValidationError, first_satisfied, require_all, require_each, require_iso_date,
};

/// Read access to request parameters by their internal (snake_case) name.
///
/// Validation and query construction both go through this view, so one static
/// table of names drives both.
pub trait Parameters {
    /// Value of the parameter as sent on the wire, or `None` when absent.
    fn get(&self, name: &str) -> Option<String>;

    fn is_present(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

/// Optional `top`/`skip` paging window, forwarded verbatim to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageRequest {
    pub top: Option<u32>,
    pub skip: Option<u32>,
}

impl PageRequest {
    pub fn new(top: u32, skip: u32) -> Self {
        Self {
            top: Some(top),
            skip: Some(skip),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResidentsByPropertyQuery {
    pub property_id: Option<String>,
}

impl ResidentsByPropertyQuery {
    pub const ALTERNATIVES: &'static [Alternative] = &[Alternative::new(&["property_id"])];

    pub fn new(property_id: impl Into<String>) -> Self {
        Self {
            property_id: Some(property_id.into()),
        }
    }

    pub fn validate(&self) -> Result<usize, ValidationError> {
        first_satisfied(self, Self::ALTERNATIVES)
    }
}

impl Parameters for ResidentsByPropertyQuery {
    fn get(&self, name: &str) -> Option<String> {
        match name {
            "property_id" => self.property_id.clone(),
            _ => None,
        }
    }
}

/// Filters for the full residents endpoint.
///
/// At least one of these combinations is required, checked in this order:
/// `last_update`; `name_id`; `start_date` + `end_date`; `property_id` + `resident_type` + `status`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResidentsQuery {
    pub last_update: Option<String>,
    pub name_id: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub property_id: Option<String>,
    pub resident_type: Option<String>,
    pub status: Option<String>,
    /// Whether PII columns are returned. The provider default used here is `true`.
    pub include_pii: Option<bool>,
}

impl ResidentsQuery {
    pub const ALTERNATIVES: &'static [Alternative] = &[
        Alternative::new(&["last_update"]),
        Alternative::new(&["name_id"]),
        Alternative::new(&["start_date", "end_date"]),
        Alternative::new(&["property_id", "resident_type", "status"]),
    ];

    pub fn validate(&self) -> Result<usize, ValidationError> {
        first_satisfied(self, Self::ALTERNATIVES)
    }

    pub fn include_pii(&self) -> bool {
        self.include_pii.unwrap_or(true)
    }
}

impl Parameters for ResidentsQuery {
    fn get(&self, name: &str) -> Option<String> {
        match name {
            "last_update" => self.last_update.clone(),
            "name_id" => self.name_id.clone(),
            "start_date" => self.start_date.clone(),
            "end_date" => self.end_date.clone(),
            "property_id" => self.property_id.clone(),
            "resident_type" => self.resident_type.clone(),
            "status" => self.status.clone(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaseDetailsQuery {
    pub property_id: Option<String>,
    pub last_update_date: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub page: PageRequest,
}

impl LeaseDetailsQuery {
    pub const ALTERNATIVES: &'static [Alternative] = &[
        Alternative::new(&["property_id"]),
        Alternative::new(&["last_update_date"]),
        Alternative::new(&["start_date"]).requiring(&["end_date"]),
    ];

    pub fn validate(&self) -> Result<usize, ValidationError> {
        first_satisfied(self, Self::ALTERNATIVES)
    }
}

impl Parameters for LeaseDetailsQuery {
    fn get(&self, name: &str) -> Option<String> {
        match name {
            "property_id" => self.property_id.clone(),
            "last_update_date" => self.last_update_date.clone(),
            "start_date" => self.start_date.clone(),
            "end_date" => self.end_date.clone(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenChargesQuery {
    pub last_update: Option<String>,
    pub property_id: Option<String>,
    pub resident_id: Option<String>,
}

impl OpenChargesQuery {
    pub const ALTERNATIVES: &'static [Alternative] = &[
        Alternative::new(&["last_update"]),
        Alternative::new(&["property_id"]),
    ];

    pub fn validate(&self) -> Result<usize, ValidationError> {
        first_satisfied(self, Self::ALTERNATIVES)
    }
}

impl Parameters for OpenChargesQuery {
    fn get(&self, name: &str) -> Option<String> {
        match name {
            "last_update" => self.last_update.clone(),
            "property_id" => self.property_id.clone(),
            "resident_id" => self.resident_id.clone(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingMoveInsQuery {
    pub property_id: Option<String>,
    pub page: PageRequest,
}

impl PendingMoveInsQuery {
    pub const ALTERNATIVES: &'static [Alternative] = &[Alternative::new(&["property_id"])];

    pub fn new(property_id: impl Into<String>) -> Self {
        Self {
            property_id: Some(property_id.into()),
            page: PageRequest::default(),
        }
    }

    pub fn validate(&self) -> Result<usize, ValidationError> {
        first_satisfied(self, Self::ALTERNATIVES)
    }
}

impl Parameters for PendingMoveInsQuery {
    fn get(&self, name: &str) -> Option<String> {
        match name {
            "property_id" => self.property_id.clone(),
            _ => None,
        }
    }
}

/// Resident ledger window. Every field is required; dates are `yyyy-mm-dd`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub resident_name_id: Option<String>,
    pub property_id: Option<String>,
    pub page: PageRequest,
}

impl LedgerQuery {
    pub const REQUIRED: &'static [&'static str] =
        &["start_date", "end_date", "resident_name_id", "property_id"];

    pub fn new(
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        resident_name_id: impl Into<String>,
        property_id: impl Into<String>,
    ) -> Self {
        Self {
            start_date: Some(start_date.into()),
            end_date: Some(end_date.into()),
            resident_name_id: Some(resident_name_id.into()),
            property_id: Some(property_id.into()),
            page: PageRequest::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_each(self, Self::REQUIRED)?;
        for (field, value) in [("start_date", &self.start_date), ("end_date", &self.end_date)] {
            if let Some(value) = value {
                require_iso_date(value, field)?;
            }
        }
        Ok(())
    }
}

impl Parameters for LedgerQuery {
    fn get(&self, name: &str) -> Option<String> {
        match name {
            "start_date" => self.start_date.clone(),
            "end_date" => self.end_date.clone(),
            "resident_name_id" => self.resident_name_id.clone(),
            "property_id" => self.property_id.clone(),
            _ => None,
        }
    }
}

/// Caller-supplied payment details.
///
/// Over-long text fields are accepted here and shortened when the payload is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentRequest {
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
    /// Defaults to `paid_at` when absent.
    pub deposit_date: Option<NaiveDate>,
}

impl PaymentRequest {
    pub const REQUIRED: &'static [&'static str] = &[
        "resident_name_id",
        "property_id",
        "paid_at",
        "amount",
        "check_number",
        "external_transaction_number",
        "charge_id",
        "external_batch_id",
        "description",
        "batch_description",
    ];

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_all(self, Self::REQUIRED)
    }
}

impl Parameters for PaymentRequest {
    fn get(&self, name: &str) -> Option<String> {
        match name {
            "resident_name_id" => self.resident_name_id.clone(),
            "property_id" => self.property_id.clone(),
            "paid_at" => self.paid_at.map(|date| date.to_string()),
            "amount" => self.amount.map(|amount| format!("{amount:.2}")),
            "check_number" => self.check_number.clone(),
            "external_transaction_number" => self.external_transaction_number.clone(),
            "charge_id" => self.charge_id.clone(),
            "external_batch_id" => self.external_batch_id.clone(),
            "description" => self.description.clone(),
            "batch_description" => self.batch_description.clone(),
            "check_url" => self.check_url.clone(),
            "deposit_date" => self.deposit_date.map(|date| date.to_string()),
            _ => None,
        }
    }
}
