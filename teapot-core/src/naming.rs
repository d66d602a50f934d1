//! Identifier naming for generated enum members.

/// Derive a Rust enum variant name from a human-readable status text.
///
/// Words are split on whitespace, punctuation inside a word is dropped,
/// and the first character of each word is uppercased. The rest of each
/// word is kept as-is so acronyms survive (`"IIS Login Timeout"` becomes
/// `IISLoginTimeout`). A leading digit gets a `Code` prefix so the result
/// is a valid identifier.
///
/// # Example
///
/// ```
/// use teapot_core::to_variant_name;
///
/// assert_eq!(to_variant_name("I'm A Teapot"), "ImATeapot");
/// assert_eq!(to_variant_name("nginx No Response"), "NginxNoResponse");
/// ```
pub fn to_variant_name(name: &str) -> String {
    let result: String = name
        .split_whitespace()
        .map(|word| {
            let cleaned: String = word.chars().filter(|c| c.is_alphanumeric()).collect();
            let mut chars = cleaned.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect();

    if result.starts_with(|c: char| c.is_ascii_digit()) {
        format!("Code{result}")
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_apostrophes_without_splitting_words() {
        assert_eq!(to_variant_name("I'm A Teapot"), "ImATeapot");
    }

    #[test]
    fn test_capitalizes_each_word() {
        assert_eq!(to_variant_name("nginx No Response"), "NginxNoResponse");
        assert_eq!(to_variant_name("Site is frozen"), "SiteIsFrozen");
    }

    #[test]
    fn test_preserves_acronyms() {
        assert_eq!(to_variant_name("IIS Login Timeout"), "IISLoginTimeout");
        assert_eq!(to_variant_name("nginx HTTP To HTTPS"), "NginxHTTPToHTTPS");
    }

    #[test]
    fn test_drops_punctuation_inside_words() {
        assert_eq!(
            to_variant_name("Non-Authoritative Information"),
            "NonAuthoritativeInformation"
        );
        assert_eq!(to_variant_name("(Unused)"), "Unused");
    }

    #[test]
    fn test_leading_digit_gets_prefix() {
        assert_eq!(to_variant_name("404 Revisited"), "Code404Revisited");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(to_variant_name(""), "");
    }
}
