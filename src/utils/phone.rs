/// Normalizes a stored mobile number to international format for the SMS
/// gateway. A bare 10-digit local number gets the configured country prefix;
/// longer numbers are assumed to already carry a country code.
pub fn normalize(mobile: &str, country_prefix: &str) -> String {
    let digits: String = mobile.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() == 10 {
        return format!("{}{}", country_prefix, digits);
    }

    if digits.len() > 10 {
        return format!("+{}", digits);
    }

    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_number_gets_country_prefix() {
        assert_eq!(normalize("9876543210", "+91"), "+919876543210");
    }

    #[test]
    fn separators_are_stripped_before_prefixing() {
        assert_eq!(normalize("987-654-3210", "+91"), "+919876543210");
        assert_eq!(normalize("(987) 654 3210", "+91"), "+919876543210");
    }

    #[test]
    fn longer_numbers_keep_their_own_country_code() {
        assert_eq!(normalize("919876543210", "+91"), "+919876543210");
        assert_eq!(normalize("+1 415 555 26789", "+91"), "+141555526789");
    }

    #[test]
    fn short_numbers_pass_through_as_digits() {
        assert_eq!(normalize("12345", "+91"), "12345");
    }
}
