use serde_json::{Map, Value};

use crate::domain::record::{self, first_present, wire_record};

wire_record! {
    /// An address a future resident lived at before moving in.
    pub struct PreviousAddress {
        resident_name_id: ["ResidentID"],
        address1: ["Address1"],
        address2: ["Address2"],
        address3: ["Address3"],
        city: ["City"],
        state: ["State"],
        zip: ["Zip"],
        country: ["Country"],
        phone: ["Phone"],
    }
}

impl PreviousAddress {
    /// Non-empty address parts joined with `", "`.
    pub fn full_address(&self) -> String {
        [
            &self.address1,
            &self.address2,
            &self.address3,
            &self.city,
            &self.state,
            &self.zip,
            &self.country,
        ]
        .into_iter()
        .filter_map(|part| part.as_deref())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

/// A resident scheduled to move in, with any previous addresses on file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingMoveIn {
    pub resident_name_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub property_id: Option<String>,
    pub building_id: Option<String>,
    pub unit_id: Option<String>,
    pub lease_id: Option<String>,
    pub resident_status: Option<String>,
    pub scheduled_move_in_date: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Always a list, empty when the provider sent no address.
    pub previous_addresses: Vec<PreviousAddress>,
}

impl PendingMoveIn {
    pub const PREVIOUS_ADDRESS_KEY: &'static str = "PreviousAddress";

    /// Build a record from one JSON object. Never fails.
    pub fn from_wire(object: &Map<String, Value>) -> Self {
        Self {
            resident_name_id: first_present(object, &["ResidentID"]),
            first_name: first_present(object, &["FirstName"]),
            last_name: first_present(object, &["LastName"]),
            property_id: first_present(object, &["PropertyID"]),
            building_id: first_present(object, &["BuildingID"]),
            unit_id: first_present(object, &["UnitID"]),
            lease_id: first_present(object, &["LeaseID"]),
            resident_status: first_present(object, &["ResidentStatus"]),
            scheduled_move_in_date: first_present(object, &["ScheduledMoveInDate"]),
            email: first_present(object, &["Email"]),
            phone: first_present(object, &["Phone"]),
            previous_addresses: record::nested_objects(object.get(Self::PREVIOUS_ADDRESS_KEY))
                .into_iter()
                .map(PreviousAddress::from_wire)
                .collect(),
        }
    }

    pub fn full_name(&self) -> String {
        record::full_name(self.first_name.as_deref(), self.last_name.as_deref())
    }

    pub fn primary_previous_address(&self) -> Option<&PreviousAddress> {
        self.previous_addresses.first()
    }
}
