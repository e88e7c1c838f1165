use serde::{Deserialize, Serialize};

use super::{Payment, Resident};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OccupancyStatus {
    #[default]
    Vacant,
    Occupied,
}

impl OccupancyStatus {
    pub const ALL: [OccupancyStatus; 2] = [Self::Vacant, Self::Occupied];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vacant => "vacant",
            Self::Occupied => "occupied",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Vacant => "Tidak Berpenghuni",
            Self::Occupied => "Berpenghuni",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    #[serde(other)]
    Unpaid,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct House {
    pub id: u64,
    pub house_number: String,
    #[serde(default)]
    pub occupancy_status: OccupancyStatus,
    #[serde(default)]
    pub payment_status: Option<PaymentStatus>,
}

impl House {
    pub fn is_occupied(&self) -> bool {
        self.occupancy_status == OccupancyStatus::Occupied
    }

    pub fn is_paid(&self) -> bool {
        self.payment_status == Some(PaymentStatus::Paid)
    }
}

/// A resident currently living in a house, as embedded in the house detail.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CurrentResident {
    pub id: u64,
    pub resident: Resident,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HouseDetail {
    pub house: House,
    #[serde(default)]
    pub current_residents: Vec<CurrentResident>,
}

/// One residency of a resident in a house. `is_current` marks the open one.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HouseResident {
    pub id: u64,
    #[serde(default)]
    pub house_id: Option<u64>,
    pub resident_id: u64,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "super::flag")]
    pub is_current: bool,
    #[serde(default)]
    pub resident: Option<Resident>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PaymentHistoryEntry {
    #[serde(default)]
    pub resident: Option<Resident>,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HousePayload {
    pub house_number: String,
    pub occupancy_status: OccupancyStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AddResidentPayload {
    pub resident_id: u64,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RemoveResidentPayload {
    pub resident_id: u64,
    pub end_date: String,
}

/// Finds the open residency of `resident_id` in a house history.
pub fn current_residency(history: &[HouseResident], resident_id: u64) -> Option<&HouseResident> {
    history
        .iter()
        .find(|entry| entry.resident_id == resident_id && entry.is_current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn house_detail_decodes_current_residents() {
        let json = r#"{
            "house": {"id": 3, "house_number": "A-12", "occupancy_status": "occupied", "payment_status": "unpaid"},
            "current_residents": [
                {"id": 11, "resident": {"id": 7, "name": "Siti", "resident_status": "permanent", "phone_number": "0812", "is_married": false}}
            ]
        }"#;

        let detail: HouseDetail = serde_json::from_str(json).unwrap();

        assert!(detail.house.is_occupied());
        assert!(!detail.house.is_paid());
        assert_eq!(detail.current_residents[0].resident.name, "Siti");
    }

    #[test]
    fn current_residency_ignores_closed_entries() {
        let history: Vec<HouseResident> = serde_json::from_str(
            r#"[
                {"id": 1, "resident_id": 7, "start_date": "2022-01-01", "end_date": "2022-12-31", "is_current": 0},
                {"id": 2, "resident_id": 7, "start_date": "2023-02-01", "end_date": null, "is_current": 1}
            ]"#,
        )
        .unwrap();

        assert_eq!(current_residency(&history, 7).map(|h| h.id), Some(2));
        assert!(current_residency(&history, 8).is_none());
    }

    #[test]
    fn add_resident_payload_omits_empty_end_date() {
        let payload = AddResidentPayload {
            resident_id: 7,
            start_date: "2024-01-10".to_string(),
            end_date: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({"resident_id": 7, "start_date": "2024-01-10"}));
    }
}
