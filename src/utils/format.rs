/// Format a cent amount as a US-dollar string, e.g. `123456` -> `"$1,234.56"`.
///
/// Prices are stored as whole cents; this is the single place they become
/// human-readable for order summaries and emails.
#[must_use]
pub fn format_usd_cents(cents: u64) -> String {
    let dollars = cents / 100;
    let remainder = cents % 100;

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("${grouped}.{remainder:02}")
}
