use crate::domain::record::{self, wire_record};

wire_record! {
    /// A single posting on a resident's ledger. Payments carry negative amounts.
    pub struct LedgerTransaction {
        transaction_id: ["TransactionID"],
        property_id: ["PropertyID"],
        resident_name_id: ["NameID"],
        transaction_date: ["TransactionDate"],
        charge_code: ["ChargeCode"],
        source_code: ["SourceCode"],
        cash_type: ["CashType"],
        description: ["Description"],
        transaction_amount: ["TransactionAmount"],
        open_amount: ["OpenAmount"],
        receipt_descriptor: ["ReceiptDescriptor"],
        reference_number: ["ReferenceNumber"],
        posted: ["Posted"],
        name_group: ["NameGroup"],
    }
}

impl LedgerTransaction {
    pub fn is_posted(&self) -> bool {
        record::flag(self.posted.as_deref())
    }

    pub fn transaction_amount_value(&self) -> f64 {
        record::decimal(self.transaction_amount.as_deref())
    }

    pub fn open_amount_value(&self) -> f64 {
        record::decimal(self.open_amount.as_deref())
    }

    pub fn is_payment(&self) -> bool {
        self.transaction_amount_value() < 0.0
    }

    pub fn is_charge(&self) -> bool {
        self.transaction_amount_value() > 0.0
    }
}
