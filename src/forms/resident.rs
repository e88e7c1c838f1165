use super::{FormMessages, FormMode};
use crate::models::{Resident, ResidentPayload, ResidentStatus};
use crate::validation::{is_blank, is_valid_phone, FieldErrors};

pub const MESSAGES: FormMessages = FormMessages {
    created: "Penghuni berhasil ditambahkan",
    updated: "Penghuni berhasil diperbarui",
    invalid: "Mohon perbaiki kesalahan di formulir",
    create_failed: "Gagal menambah penghuni",
    update_failed: "Gagal memperbarui penghuni",
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResidentForm {
    pub name: String,
    pub resident_status: ResidentStatus,
    pub phone_number: String,
    pub is_married: bool,
    /// Whether a new ID card photo has been picked. The file itself stays in the view.
    pub has_photo: bool,
}

impl ResidentForm {
    pub fn from_resident(resident: &Resident) -> Self {
        Self {
            name: resident.name.clone(),
            resident_status: resident.resident_status,
            phone_number: resident.phone_number.clone(),
            is_married: resident.is_married,
            has_photo: false,
        }
    }

    /// The photo is only required when creating; editing keeps the stored one.
    pub fn validate(&self, mode: FormMode) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if is_blank(&self.name) {
            errors.insert("name", "Nama lengkap wajib diisi");
        }
        if !mode.is_editing() && !self.has_photo {
            errors.insert("id_card_photo", "Foto KTP wajib diisi");
        }
        if is_blank(&self.phone_number) {
            errors.insert("phone_number", "Nomor Telepon wajib diisi");
        } else if !is_valid_phone(&self.phone_number) {
            errors.insert("phone_number", "Nomor Telepon harus 10-13 digit");
        }
        errors
    }

    pub fn payload(&self) -> ResidentPayload {
        ResidentPayload {
            name: self.name.trim().to_string(),
            resident_status: self.resident_status,
            phone_number: self.phone_number.trim().to_string(),
            is_married: self.is_married,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ResidentForm {
        ResidentForm {
            name: "Budi Santoso".to_string(),
            phone_number: "0812-3456-7890".to_string(),
            has_photo: true,
            ..ResidentForm::default()
        }
    }

    #[test]
    fn photo_is_required_on_create_only() {
        let form = ResidentForm {
            has_photo: false,
            ..filled()
        };

        assert!(form.validate(FormMode::Create).has("id_card_photo"));
        assert!(form.validate(FormMode::Edit(4)).is_empty());
    }

    #[test]
    fn phone_reports_missing_before_malformed() {
        let mut form = filled();
        form.phone_number = "  ".to_string();
        assert_eq!(
            form.validate(FormMode::Create).get("phone_number"),
            Some("Nomor Telepon wajib diisi")
        );

        form.phone_number = "0812".to_string();
        assert_eq!(
            form.validate(FormMode::Create).get("phone_number"),
            Some("Nomor Telepon harus 10-13 digit")
        );
    }

    #[test]
    fn editing_starts_from_the_stored_resident() {
        let resident: Resident = serde_json::from_str(
            r#"{"id": 4, "name": "Siti", "id_card_photo": "ktp/siti.jpg", "resident_status": "contract", "phone_number": "081234567890", "is_married": true}"#,
        )
        .unwrap();

        let form = ResidentForm::from_resident(&resident);
        assert_eq!(form.resident_status, ResidentStatus::Contract);
        assert!(form.is_married);
        assert!(!form.has_photo);
        assert_eq!(form.payload().name, "Siti");
    }
}
