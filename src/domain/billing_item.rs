use crate::domain::record::{self, wire_record};

wire_record! {
    /// An open (unpaid or partially paid) charge on a resident's account.
    pub struct BillingItem {
        charge_id: ["ChargeID"],
        property_id: ["PropertyID", "RMPROPID"],
        resident_name_id: ["ResidentNameID", "ResidentID"],
        building_id: ["BuildingID"],
        unit_id: ["UnitID"],
        lease_id: ["LeaseID"],
        charge_code: ["ChargeCode"],
        description: ["Description"],
        transaction_date: ["TransactionDate"],
        due_date: ["DueDate"],
        amount: ["Amount", "ChargeAmount"],
        open_amount: ["OpenAmount"],
        last_update: ["LastUpdate", "LastUpdateDate"],
    }
}

impl BillingItem {
    pub fn amount_value(&self) -> f64 {
        record::decimal(self.amount.as_deref())
    }

    pub fn open_amount_value(&self) -> f64 {
        record::decimal(self.open_amount.as_deref())
    }

    /// Whether some part of the charge is still unpaid.
    pub fn is_open(&self) -> bool {
        self.open_amount_value() != 0.0
    }
}
