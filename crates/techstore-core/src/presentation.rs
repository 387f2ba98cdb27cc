//! Display helpers shared by every storefront surface.

/// Named colours offered in the 3D showcase, as `(name, hex)`.
pub const PALETTE: [(&str, &str); 7] = [
    ("Orange", "#FF4500"),
    ("Silver", "#C0C0C0"),
    ("Gold", "#FFD700"),
    ("Black", "#222222"),
    ("Blue", "#0066CC"),
    ("Red", "#CC0000"),
    ("White", "#FFFFFF"),
];

/// Looks up the palette name for a hex colour, ignoring case.
#[must_use]
pub fn color_name(hex: &str) -> Option<&'static str> {
    PALETTE
        .iter()
        .find(|(_, value)| value.eq_ignore_ascii_case(hex.trim()))
        .map(|(name, _)| *name)
}

/// Formats whole VND the way the storefront prints prices: `29.999.000₫`.
#[must_use]
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out.push('₫');
    out
}
