//! Add/remove forms of the house detail screen. Both share one error map with
//! the house detail view, so their keys carry an `add_` or `remove_` prefix.

use chrono::NaiveDate;

use crate::models::{AddResidentPayload, CurrentResident, RemoveResidentPayload, Resident};
use crate::validation::{date_input, is_blank, parse_date, FieldErrors};

#[derive(Clone, Debug, PartialEq)]
pub struct AddResidentForm {
    pub resident_id: Option<u64>,
    pub start_date: String,
    /// Optional; empty means open-ended.
    pub end_date: String,
}

impl AddResidentForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            resident_id: None,
            start_date: date_input(today),
            end_date: String::new(),
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.resident_id.is_none() {
            errors.insert("add_resident_id", "Mohon pilih penghuni yang akan ditambahkan");
        }
        if is_blank(&self.start_date) {
            errors.insert("add_start_date", "Tanggal mulai harus diisi");
        }
        if let (Some(start), Some(end)) = (parse_date(&self.start_date), parse_date(&self.end_date)) {
            if end <= start {
                errors.insert("add_end_date", "Tanggal akhir harus lebih dari tanggal mulai");
            }
        }
        errors
    }

    /// `None` until a resident is chosen.
    pub fn payload(&self) -> Option<AddResidentPayload> {
        let end_date = Some(self.end_date.trim())
            .filter(|d| !d.is_empty())
            .map(str::to_string);
        Some(AddResidentPayload {
            resident_id: self.resident_id?,
            start_date: self.start_date.clone(),
            end_date,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RemoveResidentForm {
    pub resident_id: Option<u64>,
    pub end_date: String,
}

impl RemoveResidentForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            resident_id: None,
            end_date: date_input(today),
        }
    }

    /// `current_start` is the start date of the selected resident's open
    /// association; the end date may not precede it.
    pub fn validate(&self, current_start: Option<&str>) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.resident_id.is_none() {
            errors.insert("remove_resident_id", "Mohon pilih penghuni yang akan dihapus");
        }
        if is_blank(&self.end_date) {
            errors.insert("remove_end_date", "Tanggal akhir harus diisi");
        } else if let (Some(start), Some(end)) =
            (current_start.and_then(parse_date), parse_date(&self.end_date))
        {
            if end < start {
                errors.insert(
                    "remove_end_date",
                    "Tanggal akhir tidak boleh sebelum tanggal mulai tinggal",
                );
            }
        }
        errors
    }

    pub fn payload(&self) -> Option<RemoveResidentPayload> {
        Some(RemoveResidentPayload {
            resident_id: self.resident_id?,
            end_date: self.end_date.clone(),
        })
    }
}

/// Residents that can be added: everyone not already living in the house.
pub fn available_residents<'a>(all: &'a [Resident], current: &[CurrentResident]) -> Vec<&'a Resident> {
    all.iter()
        .filter(|resident| !current.iter().any(|c| c.resident.id == resident.id))
        .collect()
}

/// `errors` with every key of one form removed, then `found` added.
pub fn replace_errors(errors: &FieldErrors, prefix: &str, found: FieldErrors) -> FieldErrors {
    let mut next = FieldErrors::new();
    for (field, message) in errors.iter().filter(|(field, _)| !field.starts_with(prefix)) {
        next.insert(field, message);
    }
    next.merge(found);
    next
}

/// Backend 422 errors use bare field names; give them the form's prefix.
pub fn scope_server_errors(prefix: &str, server: &FieldErrors) -> FieldErrors {
    let mut scoped = FieldErrors::new();
    for (field, message) in server.iter() {
        scoped.insert(&format!("{prefix}{field}"), message);
    }
    scoped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    #[test]
    fn add_rejects_end_before_start() {
        let form = AddResidentForm {
            resident_id: Some(7),
            start_date: "2024-01-10".to_string(),
            end_date: "2024-01-05".to_string(),
        };

        let errors = form.validate();
        assert_eq!(
            errors.get("add_end_date"),
            Some("Tanggal akhir harus lebih dari tanggal mulai")
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn add_without_resident_or_start_is_rejected() {
        let mut form = AddResidentForm::new(today());
        form.start_date.clear();

        let errors = form.validate();
        assert!(errors.has("add_resident_id"));
        assert!(errors.has("add_start_date"));
        assert_eq!(form.payload(), None);
    }

    #[test]
    fn add_payload_omits_an_empty_end_date() {
        let mut form = AddResidentForm::new(today());
        form.resident_id = Some(7);

        assert!(form.validate().is_empty());
        assert_eq!(
            form.payload(),
            Some(AddResidentPayload {
                resident_id: 7,
                start_date: "2024-01-10".to_string(),
                end_date: None,
            })
        );
    }

    #[test]
    fn remove_end_may_not_precede_the_current_start() {
        let mut form = RemoveResidentForm::new(today());
        form.resident_id = Some(7);

        assert!(form.validate(Some("2024-01-10")).is_empty());
        assert!(form.validate(Some("2024-02-01")).has("remove_end_date"));
        assert!(form.validate(None).is_empty());
    }

    #[test]
    fn current_residents_are_not_offered_again() {
        let all: Vec<Resident> = serde_json::from_str(
            r#"[
                {"id": 7, "name": "Siti", "resident_status": "permanent", "phone_number": "0812", "is_married": 0},
                {"id": 8, "name": "Budi", "resident_status": "contract", "phone_number": "0813", "is_married": 1}
            ]"#,
        )
        .unwrap();
        let current: Vec<CurrentResident> = serde_json::from_str(
            r#"[{"id": 21, "resident": {"id": 7, "name": "Siti", "resident_status": "permanent", "phone_number": "0812", "is_married": 0}}]"#,
        )
        .unwrap();

        let available = available_residents(&all, &current);
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].id, 8);
    }

    #[test]
    fn remove_requires_resident_and_end_date() {
        let form = RemoveResidentForm {
            resident_id: None,
            end_date: String::new(),
        };

        let errors = form.validate(None);
        assert!(errors.has("remove_resident_id"));
        assert_eq!(errors.get("remove_end_date"), Some("Tanggal akhir harus diisi"));
    }

    #[test]
    fn replacing_errors_keeps_the_other_form() {
        let mut errors = FieldErrors::new();
        errors.insert("add_resident_id", "old");
        errors.insert("remove_end_date", "keep");
        let mut found = FieldErrors::new();
        found.insert("add_start_date", "new");

        let next = replace_errors(&errors, "add_", found);

        assert!(!next.has("add_resident_id"));
        assert_eq!(next.get("add_start_date"), Some("new"));
        assert_eq!(next.get("remove_end_date"), Some("keep"));
    }

    #[test]
    fn rejected_addition_shows_under_the_add_fields() {
        let body = r#"{"errors":{"start_date":["Tanggal mulai bentrok"],"resident_id":["Sudah terdaftar"]}}"#;
        let ApiError::Validation(server) = ApiError::from_status(422, body) else {
            panic!("422 should classify as a validation error");
        };
        let mut errors = FieldErrors::new();
        errors.insert("remove_end_date", "Tanggal akhir harus diisi");

        let next = replace_errors(&errors, "add_", scope_server_errors("add_", &server));

        assert_eq!(next.get("add_start_date"), Some("Tanggal mulai bentrok"));
        assert_eq!(next.get("add_resident_id"), Some("Sudah terdaftar"));
        assert!(!next.has("start_date"));
        assert_eq!(next.get("remove_end_date"), Some("Tanggal akhir harus diisi"));
    }

    #[test]
    fn rejected_removal_keeps_pending_add_errors() {
        let mut server = FieldErrors::new();
        server.insert("end_date", "Tanggal tidak valid");
        let mut errors = FieldErrors::new();
        errors.insert("add_resident_id", "Penghuni harus dipilih");

        let next = replace_errors(&errors, "remove_", scope_server_errors("remove_", &server));

        assert_eq!(next.get("remove_end_date"), Some("Tanggal tidak valid"));
        assert_eq!(next.get("add_resident_id"), Some("Penghuni harus dipilih"));
    }
}
