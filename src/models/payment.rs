use serde::{Deserialize, Serialize};

use super::{House, Resident};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    #[default]
    Security,
    Cleaning,
}

impl PaymentType {
    pub const ALL: [PaymentType; 2] = [Self::Security, Self::Cleaning];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Security => "security",
            Self::Cleaning => "cleaning",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Security => "Keamanan",
            Self::Cleaning => "Kebersihan",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

/// Billing cadence of a payment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentPeriod {
    #[default]
    Monthly,
    Yearly,
}

impl PaymentPeriod {
    pub const ALL: [PaymentPeriod; 2] = [Self::Monthly, Self::Yearly];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Monthly => "Bulanan",
            Self::Yearly => "Tahunan",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

/// House and resident a payment belongs to, when the backend embeds them.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PaymentAssociation {
    #[serde(default)]
    pub resident: Option<Resident>,
    #[serde(default)]
    pub house: Option<House>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Payment {
    pub id: u64,
    #[serde(default)]
    pub house_resident_id: Option<u64>,
    pub payment_type: PaymentType,
    #[serde(deserialize_with = "super::amount")]
    pub amount: f64,
    #[serde(default)]
    pub payment_date: String,
    #[serde(default)]
    pub payment_period: PaymentPeriod,
    #[serde(default)]
    pub period_start: String,
    #[serde(default)]
    pub period_end: String,
    #[serde(default, deserialize_with = "super::flag")]
    pub is_paid: bool,
    #[serde(default, alias = "houseResident")]
    pub house_resident: Option<PaymentAssociation>,
}

impl Payment {
    pub fn resident_name(&self) -> &str {
        self.house_resident
            .as_ref()
            .and_then(|hr| hr.resident.as_ref())
            .map(|r| r.name.as_str())
            .unwrap_or("N/A")
    }

    pub fn house_number(&self) -> &str {
        self.house_resident
            .as_ref()
            .and_then(|hr| hr.house.as_ref())
            .map(|h| h.house_number.as_str())
            .unwrap_or("N/A")
    }

    pub fn house_id(&self) -> Option<u64> {
        self.house_resident
            .as_ref()
            .and_then(|hr| hr.house.as_ref())
            .map(|h| h.id)
    }

    pub fn paid_label(&self) -> &'static str {
        if self.is_paid {
            "Lunas"
        } else {
            "Belum Lunas"
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PaymentPayload {
    pub house_resident_id: Option<u64>,
    pub payment_type: PaymentType,
    pub amount: f64,
    pub payment_date: String,
    pub payment_period: PaymentPeriod,
    pub period_start: String,
    pub period_end: String,
    pub is_paid: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_accepts_camel_case_association() {
        let json = r#"{
            "id": 5,
            "house_resident_id": 11,
            "payment_type": "cleaning",
            "amount": "15000.00",
            "payment_date": "2024-03-02",
            "payment_period": "monthly",
            "period_start": "2024-03-01",
            "period_end": "2024-03-31",
            "is_paid": 1,
            "houseResident": {
                "resident": {"id": 7, "name": "Siti", "resident_status": "permanent", "phone_number": "0812", "is_married": 0},
                "house": {"id": 3, "house_number": "A-12", "occupancy_status": "occupied"}
            }
        }"#;

        let payment: Payment = serde_json::from_str(json).unwrap();

        assert_eq!(payment.amount, 15000.0);
        assert!(payment.is_paid);
        assert_eq!(payment.resident_name(), "Siti");
        assert_eq!(payment.house_number(), "A-12");
        assert_eq!(payment.house_id(), Some(3));
    }

    #[test]
    fn missing_association_renders_placeholder() {
        let json = r#"{"id": 5, "payment_type": "security", "amount": 100000, "is_paid": false}"#;
        let payment: Payment = serde_json::from_str(json).unwrap();
        assert_eq!(payment.resident_name(), "N/A");
        assert_eq!(payment.house_number(), "N/A");
        assert_eq!(payment.paid_label(), "Belum Lunas");
    }
}
