/// Format an amount the way prices are shown across the app: rounded to
/// whole dong, thousands grouped with '.'
///
/// `format_vnd(1_000_000.0)` gives `"1.000.000"`.
pub fn format_vnd(amount: f64) -> String {
    if !amount.is_finite() {
        return "0".to_string();
    }

    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Price with the currency suffix, e.g. `"1.200.000 VND"`
pub fn format_price(amount: f64) -> String {
    format!("{} VND", format_vnd(amount))
}
