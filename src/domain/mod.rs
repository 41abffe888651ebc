//! Domain layer: request parameters, validation, and the provider's records (no I/O).

mod billing_item;
mod lease;
mod ledger_transaction;
mod payment;
mod pending_move_in;
pub(crate) mod record;
mod request;
mod resident;
mod response;
mod validation;
mod value;

pub use billing_item::BillingItem;
pub use lease::Lease;
pub use ledger_transaction::LedgerTransaction;
pub use payment::Payment;
pub use pending_move_in::{PendingMoveIn, PreviousAddress};
pub use request::{
    LeaseDetailsQuery, LedgerQuery, OpenChargesQuery, PageRequest, Parameters, PaymentRequest,
    PendingMoveInsQuery, ResidentsByPropertyQuery, ResidentsQuery,
};
pub use resident::Resident;
pub use response::{Paginated, PaymentSubmission};
pub use validation::{
    Alternative, ValidationError, first_satisfied, require_all, require_each, require_iso_date,
};
pub use value::{BaseUrl, Credentials, Password, Username};

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger() -> LedgerQuery {
        LedgerQuery::new("2024-01-01", "2025-06-30", "0000009006", "GCCH01")
    }

    #[test]
    fn ledger_query_requires_each_field_by_name() {
        for (field, query) in [
            ("start_date", LedgerQuery { start_date: None, ..ledger() }),
            ("end_date", LedgerQuery { end_date: None, ..ledger() }),
            (
                "resident_name_id",
                LedgerQuery {
                    resident_name_id: None,
                    ..ledger()
                },
            ),
            ("property_id", LedgerQuery { property_id: None, ..ledger() }),
        ] {
            let err = query.validate().unwrap_err();
            assert_eq!(err, ValidationError::Missing { field });
            assert_eq!(err.to_string(), format!("{field} is required"));
        }
    }

    #[test]
    fn ledger_query_rejects_malformed_dates() {
        let query = LedgerQuery {
            start_date: Some("01/01/2024".to_owned()),
            ..ledger()
        };
        assert_eq!(
            query.validate().unwrap_err().to_string(),
            "start_date must be in yyyy-mm-dd format"
        );

        let query = LedgerQuery {
            end_date: Some("06/30/2025".to_owned()),
            ..ledger()
        };
        assert_eq!(
            query.validate(),
            Err(ValidationError::InvalidDateFormat { field: "end_date" })
        );

        assert_eq!(ledger().validate(), Ok(()));
    }

    #[test]
    fn residents_query_alternatives() {
        let query = ResidentsQuery {
            name_id: Some("0000000298".to_owned()),
            ..Default::default()
        };
        assert_eq!(query.validate(), Ok(1));

        let query = ResidentsQuery {
            start_date: Some("01-01-2024".to_owned()),
            ..Default::default()
        };
        assert!(matches!(
            query.validate(),
            Err(ValidationError::NoAlternativeSatisfied { .. })
        ));

        let query = ResidentsQuery {
            property_id: Some("GCNS01".to_owned()),
            resident_type: Some("R".to_owned()),
            status: Some("O".to_owned()),
            ..Default::default()
        };
        assert_eq!(query.validate(), Ok(3));
        assert!(query.include_pii());
    }

    #[test]
    fn residents_alternative_names_the_resident_type_field() {
        let query = ResidentsQuery {
            property_id: Some("GCNS01".to_owned()),
            status: Some("O".to_owned()),
            ..Default::default()
        };
        let Err(ValidationError::NoAlternativeSatisfied { alternatives }) = query.validate() else {
            panic!("expected no alternative to be satisfied");
        };
        assert_eq!(alternatives[3], vec!["property_id", "resident_type", "status"]);

        let query = ResidentsQuery {
            resident_type: Some("R".to_owned()),
            ..query
        };
        assert_eq!(query.get("resident_type").as_deref(), Some("R"));
        assert_eq!(query.get("type"), None);
    }

    #[test]
    fn lease_details_start_date_requires_end_date() {
        let query = LeaseDetailsQuery {
            start_date: Some("2024-01-01".to_owned()),
            ..Default::default()
        };
        assert_eq!(
            query.validate().unwrap_err().to_string(),
            "end_date is required when start_date is provided"
        );

        let query = LeaseDetailsQuery {
            start_date: Some("2024-01-01".to_owned()),
            end_date: Some("2024-01-31".to_owned()),
            ..Default::default()
        };
        assert_eq!(query.validate(), Ok(2));
    }

    #[test]
    fn open_charges_needs_last_update_or_property() {
        let query = OpenChargesQuery {
            resident_id: Some("0000000467".to_owned()),
            ..Default::default()
        };
        assert_eq!(
            query.validate().unwrap_err().to_string(),
            "Required parameters missing. You must provide one of the following: \
             1) last_update, 2) property_id"
        );
    }

    #[test]
    fn single_property_queries_name_the_missing_field() {
        assert_eq!(
            ResidentsByPropertyQuery::default()
                .validate()
                .unwrap_err()
                .to_string(),
            "property_id is required"
        );
        assert_eq!(
            PendingMoveInsQuery::default().validate(),
            Err(ValidationError::Missing {
                field: "property_id"
            })
        );
        assert_eq!(PendingMoveInsQuery::new("GCCH02").validate(), Ok(0));
    }

    #[test]
    fn payment_request_lists_all_missing_fields() {
        let err = PaymentRequest {
            resident_name_id: Some("0000000467".to_owned()),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        let ValidationError::MissingParameters { fields } = &err else {
            panic!("unexpected error: {err:?}");
        };
        assert_eq!(fields.len(), PaymentRequest::REQUIRED.len() - 1);
        assert!(!fields.contains(&"resident_name_id"));
        assert!(err.to_string().starts_with("Required parameters missing: property_id"));
    }
}
