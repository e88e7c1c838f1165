use chrono::NaiveDate;

use super::{FormMessages, FormMode};
use crate::dues::{default_amount, period_end_text};
use crate::format::date_only;
use crate::models::{
    current_residency, CurrentResident, HouseResident, Payment, PaymentPayload, PaymentPeriod,
    PaymentType,
};
use crate::validation::{date_input, is_blank, is_positive_amount, parse_amount, parse_date, FieldErrors};

pub const MESSAGES: FormMessages = FormMessages {
    created: "Pembayaran berhasil dicatat",
    updated: "Pembayaran berhasil diperbarui",
    invalid: "Mohon periksa kembali data yang diinputkan",
    create_failed: "Gagal mencatat pembayaran",
    update_failed: "Gagal memperbarui pembayaran",
};

/// A current resident of the selected house, with the association a payment links to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResidentOption {
    pub house_resident_id: u64,
    pub resident_id: u64,
    pub label: String,
}

/// Pairs each current resident with its open history entry. Residents without one
/// cannot be billed and are left out.
pub fn link_current_residents(
    current: &[CurrentResident],
    history: &[HouseResident],
) -> Vec<ResidentOption> {
    current
        .iter()
        .filter_map(|item| {
            current_residency(history, item.resident.id).map(|entry| ResidentOption {
                house_resident_id: entry.id,
                resident_id: item.resident.id,
                label: item.resident.option_label(),
            })
        })
        .collect()
}

/// Payment input. `amount` and `period_end` are derived on every change of the
/// fields they depend on, and `period_end` has no setter of its own.
#[derive(Clone, Debug, PartialEq)]
pub struct PaymentForm {
    pub house_resident_id: Option<u64>,
    payment_type: PaymentType,
    pub amount: String,
    pub payment_date: String,
    payment_period: PaymentPeriod,
    period_start: String,
    period_end: String,
    pub is_paid: bool,
}

impl PaymentForm {
    pub fn new(today: NaiveDate) -> Self {
        let payment_type = PaymentType::default();
        let payment_period = PaymentPeriod::default();
        let mut form = Self {
            house_resident_id: None,
            payment_type,
            amount: default_amount(payment_type, payment_period).to_string(),
            payment_date: date_input(today),
            payment_period,
            period_start: date_input(today),
            period_end: String::new(),
            is_paid: true,
        };
        form.recompute_period_end();
        form
    }

    /// Stored values, except `period_end` which is derived again from the start.
    pub fn from_payment(payment: &Payment) -> Self {
        let mut form = Self {
            house_resident_id: payment.house_resident_id,
            payment_type: payment.payment_type,
            amount: payment.amount.to_string(),
            payment_date: date_only(&payment.payment_date).to_string(),
            payment_period: payment.payment_period,
            period_start: date_only(&payment.period_start).to_string(),
            period_end: String::new(),
            is_paid: payment.is_paid,
        };
        form.recompute_period_end();
        form
    }

    pub fn payment_type(&self) -> PaymentType {
        self.payment_type
    }

    pub fn payment_period(&self) -> PaymentPeriod {
        self.payment_period
    }

    pub fn period_start(&self) -> &str {
        &self.period_start
    }

    pub fn period_end(&self) -> &str {
        &self.period_end
    }

    pub fn set_payment_type(&mut self, payment_type: PaymentType) {
        self.payment_type = payment_type;
        self.reset_amount();
    }

    pub fn set_payment_period(&mut self, period: PaymentPeriod) {
        self.payment_period = period;
        self.reset_amount();
        self.recompute_period_end();
    }

    pub fn set_period_start(&mut self, start: impl Into<String>) {
        self.period_start = start.into();
        self.recompute_period_end();
    }

    /// Clears the chosen association and picks the only option when there is one.
    pub fn select_from(&mut self, options: &[ResidentOption]) {
        self.house_resident_id = match options {
            [only] => Some(only.house_resident_id),
            _ => None,
        };
    }

    fn reset_amount(&mut self) {
        self.amount = default_amount(self.payment_type, self.payment_period).to_string();
    }

    fn recompute_period_end(&mut self) {
        self.period_end = period_end_text(&self.period_start, self.payment_period);
    }

    /// The association is fixed once a payment exists, so editing skips that check.
    pub fn validate(&self, mode: FormMode) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.house_resident_id.is_none() && !mode.is_editing() {
            errors.insert(
                "house_resident_id",
                "Mohon pilih rumah dan penghuni rumah terlebih dahulu",
            );
        }
        if is_blank(&self.payment_date) {
            errors.insert("payment_date", "Tanggal pembayaran wajib diisi");
        }
        if is_blank(&self.period_start) {
            errors.insert("period_start", "Periode mulai wajib diisi");
        }
        match (parse_date(&self.period_start), parse_date(&self.period_end)) {
            (_, None) => errors.insert("period_end", "Periode akhir wajib diisi"),
            (Some(start), Some(end)) if end <= start => errors.insert(
                "period_end",
                "Periode akhir harus lebih besar dari periode mulai",
            ),
            _ => {}
        }
        if !is_positive_amount(&self.amount) {
            errors.insert(
                "amount",
                "Jumlah pembayaran wajib diisi dan harus lebih besar dari 0",
            );
        }
        errors
    }

    pub fn payload(&self) -> PaymentPayload {
        PaymentPayload {
            house_resident_id: self.house_resident_id,
            payment_type: self.payment_type,
            amount: parse_amount(&self.amount).unwrap_or_default(),
            payment_date: self.payment_date.clone(),
            payment_period: self.payment_period,
            period_start: self.period_start.clone(),
            period_end: self.period_end.clone(),
            is_paid: self.is_paid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn new_payment_uses_security_tariff_for_the_current_month() {
        let form = PaymentForm::new(today());
        assert_eq!(form.amount, "100000");
        assert_eq!(form.period_start(), "2024-03-01");
        assert_eq!(form.period_end(), "2024-03-31");
        assert!(form.is_paid);
    }

    #[test]
    fn type_and_cadence_reset_the_amount() {
        let mut form = PaymentForm::new(today());
        form.amount = "5".to_string();

        form.set_payment_type(PaymentType::Cleaning);
        assert_eq!(form.amount, "15000");

        form.set_payment_period(PaymentPeriod::Yearly);
        assert_eq!(form.amount, "180000");
        assert_eq!(form.period_end(), "2025-02-28");
    }

    #[test]
    fn moving_the_start_moves_the_end() {
        let mut form = PaymentForm::new(today());
        form.set_period_start("2024-01-31");
        assert_eq!(form.period_end(), "2024-02-28");

        form.set_period_start("");
        assert_eq!(form.period_end(), "");
        let errors = form.validate(FormMode::Create);
        assert!(errors.has("period_start"));
        assert!(errors.has("period_end"));
    }

    #[test]
    fn association_is_required_on_create_only() {
        let form = PaymentForm::new(today());
        assert!(form.validate(FormMode::Create).has("house_resident_id"));
        assert!(form.validate(FormMode::Edit(5)).is_empty());
    }

    #[test]
    fn amount_must_be_positive() {
        let mut form = PaymentForm::new(today());
        form.house_resident_id = Some(11);
        form.amount = "0".to_string();
        assert!(form.validate(FormMode::Create).has("amount"));
    }

    #[test]
    fn editing_derives_period_end_from_the_stored_start() {
        let payment: Payment = serde_json::from_str(
            r#"{"id": 5, "house_resident_id": 11, "payment_type": "cleaning", "amount": "180000.00",
                "payment_date": "2024-01-05", "payment_period": "yearly",
                "period_start": "2024-01-01T00:00:00.000000Z", "period_end": "2024-06-30", "is_paid": 0}"#,
        )
        .unwrap();

        let form = PaymentForm::from_payment(&payment);
        assert_eq!(form.period_start(), "2024-01-01");
        assert_eq!(form.period_end(), "2024-12-31");
        assert_eq!(form.amount, "180000");
        assert!(!form.is_paid);
        assert_eq!(form.payload().house_resident_id, Some(11));
    }

    #[test]
    fn current_residents_link_to_their_open_association() {
        let current: Vec<CurrentResident> = serde_json::from_str(
            r#"[
                {"id": 1, "resident": {"id": 7, "name": "Siti", "resident_status": "permanent", "phone_number": "0812", "is_married": 0}},
                {"id": 2, "resident": {"id": 8, "name": "Budi", "resident_status": "contract", "phone_number": "0813", "is_married": 1}}
            ]"#,
        )
        .unwrap();
        let history: Vec<HouseResident> = serde_json::from_str(
            r#"[
                {"id": 20, "resident_id": 7, "start_date": "2021-01-01", "end_date": "2021-12-31", "is_current": false},
                {"id": 21, "resident_id": 7, "start_date": "2022-01-01", "is_current": true}
            ]"#,
        )
        .unwrap();

        let options = link_current_residents(&current, &history);
        assert_eq!(
            options,
            vec![ResidentOption {
                house_resident_id: 21,
                resident_id: 7,
                label: "Siti (Permanen)".to_string(),
            }]
        );

        let mut form = PaymentForm::new(today());
        form.select_from(&options);
        assert_eq!(form.house_resident_id, Some(21));

        form.select_from(&[]);
        assert_eq!(form.house_resident_id, None);
    }
}
