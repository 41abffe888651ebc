use super::{MriClient, MriError};
use crate::domain::{
    BillingItem, Lease, LeaseDetailsQuery, LedgerQuery, LedgerTransaction, OpenChargesQuery,
    Paginated, Payment, PaymentRequest, PaymentSubmission, PendingMoveIn, PendingMoveInsQuery,
    Resident, ResidentsByPropertyQuery, ResidentsQuery,
};
use crate::transport;

/// One MRI endpoint: validate parameters, call the provider once, normalize the answer.
///
/// Validation runs before any network traffic, so an invalid parameter set never
/// reaches the provider.
pub trait RequestHandler {
    type Params;
    type Output;

    /// Value of the `$api` query parameter.
    fn endpoint(&self) -> &'static str;

    fn execute(&self, params: Self::Params) -> Result<Self::Output, MriError>;
}

fn parse_error(err: transport::TransportError) -> MriError {
    MriError::Parse(Box::new(err))
}

#[derive(Clone)]
/// Residents of one property.
pub struct ResidentsByPropertyHandler {
    client: MriClient,
}

impl ResidentsByPropertyHandler {
    pub const ENDPOINT: &'static str = "MRI_S-PMRM_ResidentsByPropertyID";

    pub fn new(client: MriClient) -> Self {
        Self { client }
    }
}

impl RequestHandler for ResidentsByPropertyHandler {
    type Params = ResidentsByPropertyQuery;
    type Output = Vec<Resident>;

    fn endpoint(&self) -> &'static str {
        Self::ENDPOINT
    }

    fn execute(&self, params: ResidentsByPropertyQuery) -> Result<Vec<Resident>, MriError> {
        params.validate()?;
        let query = transport::encode_residents_by_property_query(&params);
        let body = self.client.get(Self::ENDPOINT, &query)?;
        transport::decode_residents_json_response(&body).map_err(parse_error)
    }
}

#[derive(Clone)]
/// Residents filtered by update time, name id, date window, or property + type + status.
pub struct ResidentsHandler {
    client: MriClient,
}

impl ResidentsHandler {
    pub const ENDPOINT: &'static str = "MRI_S-PMRM_Residents";

    pub fn new(client: MriClient) -> Self {
        Self { client }
    }
}

impl RequestHandler for ResidentsHandler {
    type Params = ResidentsQuery;
    type Output = Vec<Resident>;

    fn endpoint(&self) -> &'static str {
        Self::ENDPOINT
    }

    fn execute(&self, params: ResidentsQuery) -> Result<Vec<Resident>, MriError> {
        let alternative = params.validate()?;
        tracing::debug!(endpoint = Self::ENDPOINT, alternative, "parameters accepted");

        let query = transport::encode_residents_query(&params);
        let body = self.client.get(Self::ENDPOINT, &query)?;
        transport::decode_residents_json_response(&body).map_err(parse_error)
    }
}

#[derive(Clone)]
/// Lease details, one page at a time.
pub struct LeaseDetailsHandler {
    client: MriClient,
}

impl LeaseDetailsHandler {
    pub const ENDPOINT: &'static str = "MRI_S-PMRM_ResidentLeaseDetailsByPropertyID";

    pub fn new(client: MriClient) -> Self {
        Self { client }
    }
}

impl RequestHandler for LeaseDetailsHandler {
    type Params = LeaseDetailsQuery;
    type Output = Paginated<Lease>;

    fn endpoint(&self) -> &'static str {
        Self::ENDPOINT
    }

    fn execute(&self, params: LeaseDetailsQuery) -> Result<Paginated<Lease>, MriError> {
        let alternative = params.validate()?;
        tracing::debug!(endpoint = Self::ENDPOINT, alternative, "parameters accepted");

        let query = transport::encode_lease_details_query(&params);
        let body = self.client.get(Self::ENDPOINT, &query)?;
        transport::decode_lease_details_json_response(&body).map_err(parse_error)
    }
}

#[derive(Clone)]
pub struct OpenChargesHandler {
    client: MriClient,
}

impl OpenChargesHandler {
    pub const ENDPOINT: &'static str = "MRI_S-PMRM_OpenCharges";

    pub fn new(client: MriClient) -> Self {
        Self { client }
    }
}

impl RequestHandler for OpenChargesHandler {
    type Params = OpenChargesQuery;
    type Output = Vec<BillingItem>;

    fn endpoint(&self) -> &'static str {
        Self::ENDPOINT
    }

    fn execute(&self, params: OpenChargesQuery) -> Result<Vec<BillingItem>, MriError> {
        let alternative = params.validate()?;
        tracing::debug!(endpoint = Self::ENDPOINT, alternative, "parameters accepted");

        let query = transport::encode_open_charges_query(&params);
        let body = self.client.get(Self::ENDPOINT, &query)?;
        transport::decode_open_charges_json_response(&body).map_err(parse_error)
    }
}

#[derive(Clone)]
pub struct PendingMoveInsHandler {
    client: MriClient,
}

impl PendingMoveInsHandler {
    pub const ENDPOINT: &'static str = "MRI_S-PMRM_PendingMoveIns";

    pub fn new(client: MriClient) -> Self {
        Self { client }
    }
}

impl RequestHandler for PendingMoveInsHandler {
    type Params = PendingMoveInsQuery;
    type Output = Paginated<PendingMoveIn>;

    fn endpoint(&self) -> &'static str {
        Self::ENDPOINT
    }

    fn execute(&self, params: PendingMoveInsQuery) -> Result<Paginated<PendingMoveIn>, MriError> {
        params.validate()?;
        let query = transport::encode_pending_move_ins_query(&params);
        let body = self.client.get(Self::ENDPOINT, &query)?;
        transport::decode_pending_move_ins_json_response(&body).map_err(parse_error)
    }
}

#[derive(Clone)]
/// Ledger transactions of one resident within a date window.
pub struct LedgerHandler {
    client: MriClient,
}

impl LedgerHandler {
    pub const ENDPOINT: &'static str = "MRI_S-PMRM_ResidentLedger";

    pub fn new(client: MriClient) -> Self {
        Self { client }
    }
}

impl RequestHandler for LedgerHandler {
    type Params = LedgerQuery;
    type Output = Paginated<LedgerTransaction>;

    fn endpoint(&self) -> &'static str {
        Self::ENDPOINT
    }

    fn execute(&self, params: LedgerQuery) -> Result<Paginated<LedgerTransaction>, MriError> {
        params.validate()?;
        let query = transport::encode_ledger_query(&params);
        let body = self.client.get(Self::ENDPOINT, &query)?;
        transport::decode_ledger_json_response(&body).map_err(parse_error)
    }
}

#[derive(Clone)]
/// Payment submission.
///
/// The submitted [`Payment`] is returned updated with the fields the provider
/// echoes back (transaction id, batch id, ...).
pub struct PaymentHandler {
    client: MriClient,
}

impl PaymentHandler {
    pub const ENDPOINT: &'static str = "MRI_S-PMRM_PaymentDetailsByPropertyID";

    pub fn new(client: MriClient) -> Self {
        Self { client }
    }
}

impl RequestHandler for PaymentHandler {
    type Params = PaymentRequest;
    type Output = PaymentSubmission;

    fn endpoint(&self) -> &'static str {
        Self::ENDPOINT
    }

    fn execute(&self, params: PaymentRequest) -> Result<PaymentSubmission, MriError> {
        params.validate()?;
        let payment = Payment::from_request(params);

        let body =
            transport::encode_payment_body(self.client.base_url(), Self::ENDPOINT, &payment)
                .map_err(|err| MriError::Encode(Box::new(err)))?;
        let response = self.client.post(Self::ENDPOINT, &body)?;

        let submission =
            transport::decode_payment_json_response(&response, payment).map_err(parse_error)?;
        if let PaymentSubmission::Rejected { status, error } = &submission {
            tracing::warn!(endpoint = Self::ENDPOINT, status, %error, "payment rejected");
        }
        Ok(submission)
    }
}
