//! Display and edit projections of the records served by the backend.
//!
//! The backend owns the canonical shapes; these types only decode the fields the
//! console reads and tolerate the loose encodings a PHP API produces (decimal
//! strings for amounts, `0`/`1` for booleans).

mod expense;
mod house;
mod payment;
mod report;
mod resident;

pub use expense::*;
pub use house::*;
pub use payment::*;
pub use report::*;
pub use resident::*;

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Bool(bool),
    Number(f64),
    Text(String),
}

/// Amounts may arrive as numbers, decimal strings or null.
pub(crate) fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Number(n)) => n,
        Some(Loose::Text(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        Some(Loose::Bool(_)) | None => 0.0,
    })
}

/// Booleans may arrive as `true`/`false`, `0`/`1` or `"0"`/`"1"`.
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Bool(b)) => b,
        Some(Loose::Number(n)) => n != 0.0,
        Some(Loose::Text(s)) => matches!(s.trim(), "1" | "true"),
        None => false,
    })
}

/// Labels such as a month name or number, rendered as text.
pub(crate) fn label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Text(s)) => s,
        Some(Loose::Number(n)) => format!("{}", n),
        Some(Loose::Bool(b)) => b.to_string(),
        None => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "amount", default)]
        amount: f64,
        #[serde(deserialize_with = "flag", default)]
        flag: bool,
        #[serde(deserialize_with = "label", default)]
        label: String,
    }

    #[test]
    fn loose_values_decode() {
        let p: Probe =
            serde_json::from_str(r#"{"amount":"50000.00","flag":1,"label":"Jan"}"#).unwrap();
        assert_eq!(p.amount, 50000.0);
        assert!(p.flag);
        assert_eq!(p.label, "Jan");

        let p: Probe = serde_json::from_str(r#"{"amount":null,"flag":"0","label":3}"#).unwrap();
        assert_eq!(p.amount, 0.0);
        assert!(!p.flag);
        assert_eq!(p.label, "3");

        let p: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(p.amount, 0.0);
        assert!(!p.flag);
    }
}
