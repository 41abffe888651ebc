use crate::domain::record::{self, wire_record};

wire_record! {
    /// One resident's lease as returned by the lease details endpoint.
    pub struct Lease {
        resident_name_id: ["ResidentNameID"],
        property_id: ["PropertyID"],
        building_id: ["BuildingID"],
        unit_id: ["UnitID"],
        lease_id: ["LeaseID"],
        address: ["Address"],
        building_address: ["BuildingAddress"],
        city: ["City"],
        state: ["State"],
        zipcode: ["Zipcode"],
        first_name: ["FirstName"],
        last_name: ["LastName"],
        resident_status: ["ResidentStatus"],
        email: ["Email"],
        birthday: ["Birthday"],
        lease_start: ["LeaseStart"],
        occupy_date: ["OccupyDate"],
        lease_end: ["LeaseEnd"],
        lease_monthly_rent_amount: ["LeaseMonthlyRentAmount"],
        lease_move_out: ["LeaseMoveOut"],
        lease_month_to_month: ["LeaseMonthToMonth"],
        pay_allowed: ["PayAllowed"],
        last_update_date: ["LastUpdateDate"],
        curr_code: ["CurrCode"],
        lease_balance: ["LeaseBalance"],
        is_current: ["IsCurrent"],
        block_e_payments: ["BlockEPayments"],
        guarantor: ["Guarantor"],
        lease_term: ["LeaseTerm"],
        number_of_garages: ["NumberOfGarages"],
        date_notified: ["DateNotified"],
        vacate_reason: ["VacateReason"],
        number_of_units: ["NumberOfUnits"],
        description: ["Description"],
        has_pet: ["HasPet"],
        resident_vacate_date: ["ResidentVacateDate"],
        number_of_occupants: ["NumberOfOccupants"],
        name_group: ["Namegroup"],
        phone_number: ["PhoneNumber"],
        no_checks_in_web_cash_receipts: ["NoChecksInWebCashReceipts"],
        cell_phone_number: ["CellPhoneNumber"],
        scrie_lease: ["SCRIELease"],
        minor: ["Minor"],
    }
}

impl Lease {
    pub fn full_name(&self) -> String {
        record::full_name(self.first_name.as_deref(), self.last_name.as_deref())
    }

    pub fn is_current(&self) -> bool {
        record::flag(self.is_current.as_deref())
    }

    pub fn is_month_to_month(&self) -> bool {
        record::flag(self.lease_month_to_month.as_deref())
    }

    pub fn has_pet(&self) -> bool {
        record::flag(self.has_pet.as_deref())
    }

    pub fn monthly_rent(&self) -> f64 {
        record::decimal(self.lease_monthly_rent_amount.as_deref())
    }

    pub fn balance(&self) -> f64 {
        record::decimal(self.lease_balance.as_deref())
    }
}
