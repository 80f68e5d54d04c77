use super::CharFilter;

/// A char filter that lowercases the whole input.
#[derive(Clone, Debug, Default)]
pub struct LowercaseCharFilter;

impl LowercaseCharFilter {
    pub fn new() -> Self {
        LowercaseCharFilter
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, input: &str) -> String {
        if input.is_ascii() {
            input.to_ascii_lowercase()
        } else {
            input.to_lowercase()
        }
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase() {
        let filter = LowercaseCharFilter::new();
        assert_eq!(filter.filter("John PAUL"), "john paul");
        assert_eq!(filter.filter("ВАСИЛИЙ"), "василий");
        assert_eq!(filter.filter("QUITÉRIA"), "quitéria");
    }
}
