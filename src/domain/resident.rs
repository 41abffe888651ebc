use crate::domain::record::{self, wire_record};

wire_record! {
    /// A resident as returned by either the by-property or the full residents endpoint.
    ///
    /// The two endpoints name several columns differently. Where both names exist the
    /// by-property name is listed first and wins when both are present.
    pub struct Resident {
        resident_name_id: ["ResidentNameID", "NameId"],
        property_id: ["RMPROPID", "PropertyId"],
        building_id: ["RMBLDGID", "BuildingId"],
        unit_id: ["UNITID", "UnitId"],
        lease_id: ["RMLEASEID", "LeaseId"],
        resident_type: ["ResidentType"],
        /// `R` for a current resident, `O` for an owner.
        status: ["Status", "NameStatus"],
        first_name: ["FirstName"],
        last_name: ["LastName"],
        phone_number: ["PhoneNumber"],
        email: ["Email"],
        occupy_date: ["OccupantOccupyDate"],
        last_update_date: ["LastUpdateDate", "LastUpdate"],
        name_group: ["Namegroup"],
        work_phone1: ["WorkPhone1"],
        work_phone2: ["WorkPhone2"],
        cell: ["Cell"],
        vacate_date: ["VacateDate", "OccupantVacateDate"],
        prospect_applicant_resident: ["ProspectApplicantResident"],
        name_status: ["NameStatus"],
        birthday: ["Birthday"],
        middle_initial: ["MiddleInitial"],
        comment: ["Comment"],
        sex: ["Sex"],
        who: ["Who"],
        qualified: ["Qualified"],
        previous_residence: ["PreviousResidence"],
        occupation: ["Occupation"],
        income: ["Income"],
        guarantor: ["Guarantor"],
        location: ["Location"],
        marketing_id: ["MarketingId"],
        leasing_agent_id: ["LeasingAgentId"],
        company_name: ["CompanyName"],
        job_title: ["JobTitle"],
        job_years: ["JobYears"],
        number_of_nsf_payments: ["NumberOfNSFPayments"],
        number_of_late_payments: ["NumberOfLatePayments"],
        payments_allowed: ["PaymentsAllowed"],
        user_id: ["UserId"],
        primary_name_id: ["PrimaryNameId"],
        residents_property_id: ["ResidentsPropertyId"],
        identified_as_affordable_housing: ["IdentifiedAsAffordableHousing"],
        date_placed_on_ah_waiting_list: ["DatePlacedOnAHWaitingList"],
        ah_waiting_list_sequence_number: ["AHWaitingListSequenceNumber"],
        marital_status: ["MaritalStatus"],
        previous_name_id: ["PreviousNameId"],
        size_of_unit: ["SizeOfUnit"],
        query_flag: ["QueryFlag"],
        email_address: ["EMailAddress"],
        status_based_on_credit_report_results: ["StatusBasedOnCreditReportResults"],
        public_assistance_id: ["PublicAssistanceID"],
        fax: ["Fax"],
        tab_id: ["TabId"],
        move_in_reason: ["MoveInReason"],
        number_of_residents: ["NumberOfResidents"],
        ssno_not_available: ["SSNONotAvailable"],
        background_check_status: ["BackgroundCheckStatus"],
        other_resident_background_check_required: ["OtherResidentBackgroundCheckRequired"],
        follow_up_on_background_check: ["FollowUpOnBackgroundCheck"],
        no_checks_in_web_cash_receipts: ["NoChecksInWebCashReceipts"],
        occupant_inactive: ["OccupantInactive"],
        tax_credit_resident: ["TaxCreditResident"],
        tax_credit_certified: ["TaxCreditCertified"],
        auto_spread_concessions: ["AutoSpreadConcessions"],
        opt_out_of_check_scanning: ["OptOutOfCheckScanning"],
        exclude_resident_from_utility_billing: ["ExcludeResidentFromUtilityBilling"],
        utility_billing_override_date: ["UtilityBillingOverrideDate"],
        record_created_by_call_center_agent: ["RecordCreatedByCallCenterAgent"],
        renewal_lease_type: ["RenewalLeaseType"],
        rent_increase_summary_type: ["RentIncreaseSummaryType"],
        identified_as_student_housing: ["IdentifiedAsStudentHousing"],
        exclude_utility_billing: ["ExcludeUtilityBilling"],
        social_security_number: ["SocialSecurityNumber"],
        license_number: ["LicenseNumber"],
        bank_account: ["BankAccount"],
        personal_phone: ["PersonalPhone"],
        employment_monthly_income: ["EmploymentMonthlyIncome"],
        provider_screening_status: ["ProviderScreeningStatus"],
    }
}

impl Resident {
    pub fn full_name(&self) -> String {
        record::full_name(self.first_name.as_deref(), self.last_name.as_deref())
    }

    pub fn is_active(&self) -> bool {
        self.status.as_deref() == Some("R")
    }

    pub fn is_owner(&self) -> bool {
        self.status.as_deref() == Some("O")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Map, Value, json};

    use super::*;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other:?}"),
        }
    }

    fn by_property() -> Map<String, Value> {
        object(json!({
            "ResidentNameID": "0000000001",
            "RMPROPID": "GCNS01",
            "RMBLDGID": "01",
            "UNITID": "101",
            "RMLEASEID": "1",
            "ResidentType": "R",
            "Status": "O",
            "FirstName": "S.A. DE C.V.",
            "LastName": "CJ LOGISTICS MEXICO",
            "PhoneNumber": null,
            "OccupantOccupyDate": "2018-01-12T00:00:00",
            "LastUpdateDate": "2020-02-25T00:00:00",
            "Namegroup": "0000000001",
            "VacateDate": "2020-01-01T00:00:00"
        }))
    }

    fn full_resident() -> Map<String, Value> {
        object(json!({
            "NameId": "0000000298",
            "ProspectApplicantResident": "R",
            "NameStatus": "*",
            "PropertyId": "GCNS01",
            "LastName": "ROMERO USCANGA",
            "FirstName": "CARLOS",
            "MiddleInitial": "1",
            "Who": "SS",
            "NumberOfNSFPayments": "0",
            "LastUpdate": "2024-01-02T17:37:25",
            "UserId": "GRCLQ11",
            "PrimaryNameId": "0000000297",
            "BuildingId": "01",
            "UnitId": "412",
            "LeaseId": "1",
            "OccupantOccupyDate": "2017-01-01T00:00:00",
            "OccupantVacateDate": "2023-12-31T00:00:00",
            "SSNONotAvailable": "N",
            "EmploymentMonthlyIncome": "0.0000"
        }))
    }

    #[test]
    fn by_property_names_populate_attributes() {
        let resident = Resident::from_wire(&by_property());
        assert_eq!(resident.resident_name_id.as_deref(), Some("0000000001"));
        assert_eq!(resident.property_id.as_deref(), Some("GCNS01"));
        assert_eq!(resident.building_id.as_deref(), Some("01"));
        assert_eq!(resident.unit_id.as_deref(), Some("101"));
        assert_eq!(resident.lease_id.as_deref(), Some("1"));
        assert_eq!(resident.status.as_deref(), Some("O"));
        assert_eq!(resident.occupy_date.as_deref(), Some("2018-01-12T00:00:00"));
        assert_eq!(
            resident.last_update_date.as_deref(),
            Some("2020-02-25T00:00:00")
        );
        assert_eq!(resident.vacate_date.as_deref(), Some("2020-01-01T00:00:00"));
        assert_eq!(resident.name_group.as_deref(), Some("0000000001"));
        assert_eq!(resident.phone_number, None);
    }

    #[test]
    fn full_resident_names_are_used_as_fallback() {
        let resident = Resident::from_wire(&full_resident());
        assert_eq!(resident.resident_name_id.as_deref(), Some("0000000298"));
        assert_eq!(resident.property_id.as_deref(), Some("GCNS01"));
        assert_eq!(resident.building_id.as_deref(), Some("01"));
        assert_eq!(resident.unit_id.as_deref(), Some("412"));
        assert_eq!(resident.lease_id.as_deref(), Some("1"));
        assert_eq!(resident.status.as_deref(), Some("*"));
        assert_eq!(resident.name_status.as_deref(), Some("*"));
        assert_eq!(
            resident.last_update_date.as_deref(),
            Some("2024-01-02T17:37:25")
        );
        assert_eq!(resident.vacate_date.as_deref(), Some("2023-12-31T00:00:00"));
        assert_eq!(resident.middle_initial.as_deref(), Some("1"));
        assert_eq!(resident.primary_name_id.as_deref(), Some("0000000297"));
        assert_eq!(resident.ssno_not_available.as_deref(), Some("N"));
        assert_eq!(resident.employment_monthly_income.as_deref(), Some("0.0000"));
    }

    #[test]
    fn by_property_names_win_when_both_are_present() {
        let mut both = full_resident();
        both.extend(by_property());
        let resident = Resident::from_wire(&both);
        assert_eq!(resident.resident_name_id.as_deref(), Some("0000000001"));
        assert_eq!(resident.property_id.as_deref(), Some("GCNS01"));
        assert_eq!(resident.unit_id.as_deref(), Some("101"));
        assert_eq!(resident.status.as_deref(), Some("O"));
        assert_eq!(
            resident.last_update_date.as_deref(),
            Some("2020-02-25T00:00:00")
        );
        assert_eq!(resident.vacate_date.as_deref(), Some("2020-01-01T00:00:00"));
        // Columns only the full endpoint has are still filled in.
        assert_eq!(resident.user_id.as_deref(), Some("GRCLQ11"));
    }

    #[test]
    fn null_primary_key_falls_back() {
        let resident = Resident::from_wire(&object(json!({
            "ResidentNameID": null,
            "NameId": "0000000298"
        })));
        assert_eq!(resident.resident_name_id.as_deref(), Some("0000000298"));
    }

    #[test]
    fn derived_accessors() {
        let owner = Resident::from_wire(&by_property());
        assert_eq!(owner.full_name(), "S.A. DE C.V. CJ LOGISTICS MEXICO");
        assert!(owner.is_owner());
        assert!(!owner.is_active());

        let active = Resident {
            status: Some("R".to_owned()),
            last_name: Some("EUN YOUNG".to_owned()),
            ..Default::default()
        };
        assert!(active.is_active());
        assert_eq!(active.full_name(), "EUN YOUNG");
    }

    #[test]
    fn wire_table_lists_fallbacks_in_priority_order() {
        let (_, keys) = Resident::WIRE_FIELDS
            .iter()
            .find(|(name, _)| *name == "resident_name_id")
            .unwrap();
        assert_eq!(*keys, ["ResidentNameID", "NameId"]);
    }
}
