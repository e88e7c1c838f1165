const MONTH_NAMES: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Groups digits in threes with `.` as the Indonesian thousands separator.
pub fn format_thousands(value: i64) -> String {
    let is_negative = value < 0;
    let s = value.unsigned_abs().to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in s.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('.');
        }
        out.push(*ch);
    }
    let formatted: String = out.into_iter().rev().collect();
    if is_negative {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

pub fn format_rupiah(amount: f64) -> String {
    format!("Rp {}", format_thousands(amount.round() as i64))
}

pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("-")
}

/// Date part of a backend date or timestamp, for table cells.
pub fn date_only(value: &str) -> &str {
    value.split('T').next().unwrap_or(value)
}

pub fn date_or_na(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .map(|v| date_only(v).to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_use_dots() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(75000), "75.000");
        assert_eq!(format_thousands(1200000), "1.200.000");
        assert_eq!(format_thousands(-15000), "-15.000");
    }

    #[test]
    fn rupiah_rounds_to_whole_units() {
        assert_eq!(format_rupiah(75000.0), "Rp 75.000");
        assert_eq!(format_rupiah(1499.6), "Rp 1.500");
        assert_eq!(format_rupiah(-250000.0), "Rp -250.000");
    }

    #[test]
    fn month_names_are_one_based() {
        assert_eq!(month_name(1), "Januari");
        assert_eq!(month_name(12), "Desember");
        assert_eq!(month_name(0), "-");
        assert_eq!(month_name(13), "-");
    }

    #[test]
    fn timestamps_show_their_date() {
        assert_eq!(date_only("2024-03-01T00:00:00.000000Z"), "2024-03-01");
        assert_eq!(date_only("2024-03-01"), "2024-03-01");
        assert_eq!(date_or_na(None), "N/A");
        assert_eq!(date_or_na(Some("")), "N/A");
    }
}
