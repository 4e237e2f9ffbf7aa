//! Display formatting for catalog names and card images.

/// Format a PokeAPI slug for display when no localized name is available.
///
/// Splits on `-`, capitalizes the first character of every part, and joins with spaces:
/// `"mr-mime"` becomes `"Mr Mime"`.
pub fn format_name(name: &str) -> String {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Card image URL for a national dex id, zero-padded to three digits.
pub fn image_url(image_base_url: &str, id: u32) -> String {
    format!("{}/{:03}.png", image_base_url.trim_end_matches('/'), id)
}
