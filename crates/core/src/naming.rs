//! URL slug generation for listings, cities, and CMS pages.

/// Derive a URL slug from a display name.
///
/// Lowercases, maps runs of non-alphanumeric characters to a single
/// hyphen, and trims leading/trailing hyphens.
///
/// # Examples
///
/// ```
/// use estatia_core::naming::slugify;
///
/// assert_eq!(slugify("Sunset Villa"), "sunset-villa");
/// assert_eq!(slugify("2BR  Apartment - District 7"), "2br-apartment-district-7");
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_title() {
        assert_eq!(slugify("Sunset Villa"), "sunset-villa");
    }

    #[test]
    fn collapses_separator_runs() {
        assert_eq!(slugify("2BR  Apartment - District 7"), "2br-apartment-district-7");
    }

    #[test]
    fn trims_leading_and_trailing_separators() {
        assert_eq!(slugify("  Penthouse!  "), "penthouse");
    }

    #[test]
    fn empty_input_yields_empty_slug() {
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn non_ascii_characters_are_dropped() {
        // Accented characters count as separators, not letters.
        assert_eq!(slugify("Café Corner"), "caf-corner");
    }
}
