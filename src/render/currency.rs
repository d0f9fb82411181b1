/// Abbreviates a currency amount: `$1.25B`, `$62.75M`, `$2.7K`, `$640`.
pub fn format_currency(amount: f64) -> String {
    if amount >= 1e9 {
        format!("${:.2}B", amount / 1e9)
    } else if amount >= 1e6 {
        format!("${:.2}M", amount / 1e6)
    } else if amount >= 1e3 {
        format!("${:.1}K", amount / 1e3)
    } else {
        let rounded = amount.round();
        let sign = if rounded < 0.0 { "-" } else { "" };
        // `as` saturates for amounts beyond u64
        format!("${}{}", sign, group_thousands(rounded.abs() as u64))
    }
}

/// `1234567` becomes `1,234,567`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
