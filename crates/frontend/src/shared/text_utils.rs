//! Utilities for turning machine identifiers into display labels

/// Convert an underscore-delimited category key to a display label
/// by capitalizing the first character of each word.
/// Example: "market_analysis" -> "Market Analysis"
pub fn format_category_name(category: &str) -> String {
    category
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_category_name() {
        assert_eq!(format_category_name("market_analysis"), "Market Analysis");
        assert_eq!(format_category_name("cultural_context"), "Cultural Context");
        assert_eq!(format_category_name("a_b_c"), "A B C");
    }

    #[test]
    fn test_single_word() {
        assert_eq!(format_category_name("esg"), "Esg");
        assert_eq!(format_category_name("x"), "X");
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(format_category_name(""), "");
        // empty fragments stay empty, separators are preserved
        assert_eq!(format_category_name("a__b"), "A  B");
        assert_eq!(format_category_name("_tail"), " Tail");
    }
}
