//! Typed Rust client for the MRI property-management REST API.
//!
//! The crate is split into a domain layer (request parameters, validation, and the
//! provider's records), a transport layer for wire-format quirks, and a small
//! blocking client with one request handler per endpoint.
//!
//! ```rust,no_run
//! use mri_hook::{MriClient, RequestHandler, ResidentsByPropertyQuery};
//!
//! fn main() -> Result<(), mri_hook::MriError> {
//!     let client = MriClient::from_env()?;
//!     let residents = client
//!         .residents_by_property()
//!         .execute(ResidentsByPropertyQuery::new("GCNS01"))?;
//!     for resident in &residents {
//!         println!("{}", resident.full_name());
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    LeaseDetailsHandler, LedgerHandler, MriClient, MriClientBuilder, MriError,
    OpenChargesHandler, PaymentHandler, PendingMoveInsHandler, RequestHandler,
    ResidentsByPropertyHandler, ResidentsHandler,
};
pub use domain::{
    BaseUrl, BillingItem, Credentials, Lease, LeaseDetailsQuery, LedgerQuery, LedgerTransaction,
    OpenChargesQuery, PageRequest, Paginated, Payment, PaymentRequest, PaymentSubmission,
    PendingMoveIn, PendingMoveInsQuery, PreviousAddress, Resident, ResidentsByPropertyQuery,
    ResidentsQuery, ValidationError,
};
pub use transport::{GENERIC_ERROR_MESSAGE, camel_to_snake, metadata_url};
