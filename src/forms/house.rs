use super::FormMessages;
use crate::models::{House, HousePayload, OccupancyStatus};
use crate::validation::{is_blank, FieldErrors};

pub const MESSAGES: FormMessages = FormMessages {
    created: "Rumah berhasil ditambahkan",
    updated: "Rumah berhasil diperbarui",
    invalid: "Mohon perbaiki kesalahan di formulir",
    create_failed: "Gagal menambah rumah",
    update_failed: "Gagal memperbarui rumah",
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HouseForm {
    pub house_number: String,
    pub occupancy_status: OccupancyStatus,
}

impl HouseForm {
    pub fn from_house(house: &House) -> Self {
        Self {
            house_number: house.house_number.clone(),
            occupancy_status: house.occupancy_status,
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if is_blank(&self.house_number) {
            errors.insert("house_number", "Nomor rumah wajib diisi");
        }
        errors
    }

    pub fn payload(&self) -> HousePayload {
        HousePayload {
            house_number: self.house_number.trim().to_string(),
            occupancy_status: self.occupancy_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn house_number_is_required() {
        let form = HouseForm::default();
        assert_eq!(
            form.validate().get("house_number"),
            Some("Nomor rumah wajib diisi")
        );

        let form = HouseForm {
            house_number: " B-7 ".to_string(),
            occupancy_status: OccupancyStatus::Occupied,
        };
        assert!(form.validate().is_empty());
        assert_eq!(form.payload().house_number, "B-7");
    }
}
