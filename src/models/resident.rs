use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResidentStatus {
    #[default]
    Permanent,
    Contract,
}

impl ResidentStatus {
    pub const ALL: [ResidentStatus; 2] = [Self::Permanent, Self::Contract];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Permanent => "permanent",
            Self::Contract => "contract",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Permanent => "Permanen",
            Self::Contract => "Kontrak",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Resident {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub id_card_photo: Option<String>,
    #[serde(default)]
    pub resident_status: ResidentStatus,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default, deserialize_with = "super::flag")]
    pub is_married: bool,
}

impl Resident {
    pub fn marital_label(&self) -> &'static str {
        if self.is_married {
            "Menikah"
        } else {
            "Belum Menikah"
        }
    }

    /// Selector label, e.g. `Budi (Kontrak)`.
    pub fn option_label(&self) -> String {
        format!("{} ({})", self.name, self.resident_status.label())
    }
}

/// Text fields of a resident create/update. The ID card photo travels separately
/// as a file part of the same multipart body.
#[derive(Clone, Debug, PartialEq)]
pub struct ResidentPayload {
    pub name: String,
    pub resident_status: ResidentStatus,
    pub phone_number: String,
    pub is_married: bool,
}

impl ResidentPayload {
    /// Multipart text parts, with `_method` appended when a verb must be overridden.
    pub fn form_fields(&self, method_override: Option<&'static str>) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("name", self.name.clone()),
            ("resident_status", self.resident_status.as_str().to_string()),
            ("phone_number", self.phone_number.clone()),
            ("is_married", if self.is_married { "1" } else { "0" }.to_string()),
        ];
        if let Some(method) = method_override {
            fields.push(("_method", method.to_string()));
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_fields_carry_method_override() {
        let payload = ResidentPayload {
            name: "Budi".to_string(),
            resident_status: ResidentStatus::Contract,
            phone_number: "081234567890".to_string(),
            is_married: false,
        };

        let create = payload.form_fields(None);
        let update = payload.form_fields(Some("PUT"));

        assert!(!create.iter().any(|(k, _)| *k == "_method"));
        assert_eq!(update.last(), Some(&("_method", "PUT".to_string())));
        assert!(update.contains(&("is_married", "0".to_string())));
        assert!(update.contains(&("resident_status", "contract".to_string())));
    }

    #[test]
    fn resident_decodes_integer_flags() {
        let json = r#"{
            "id": 7,
            "name": "Siti",
            "id_card_photo": "ktp/siti.jpg",
            "resident_status": "contract",
            "phone_number": "081234567890",
            "is_married": 1
        }"#;

        let resident: Resident = serde_json::from_str(json).unwrap();

        assert_eq!(resident.resident_status, ResidentStatus::Contract);
        assert!(resident.is_married);
        assert_eq!(resident.marital_label(), "Menikah");
        assert_eq!(resident.option_label(), "Siti (Kontrak)");
    }

    #[test]
    fn status_round_trips_through_form_values() {
        assert_eq!(ResidentStatus::parse("permanent"), Some(ResidentStatus::Permanent));
        assert_eq!(ResidentStatus::parse("owner"), None);
    }
}
