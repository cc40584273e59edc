//! German-locale number and currency formatting
//!
//! The calculators keep raw `f64` euros throughout; these helpers exist
//! purely for presentation ("1.234,56 €"). Dot groups thousands, comma
//! separates decimals.

/// Format an amount of euros, e.g. `1234.5` -> `"1.234,50 €"`
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let sign = if negative { "-" } else { "" };
    format!("{}{},{:02} €", sign, group_thousands(whole), fraction)
}

/// Format an integer with German thousands grouping, e.g. `1234567` -> `"1.234.567"`
pub fn format_number(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    format!("{}{}", sign, group_thousands(value.unsigned_abs()))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}
