//! Options controlling how `.strings` content is read into an [`crate::EnumBuilder`].

/// Parse behavior options for [`crate::EnumBuilder`] parsing APIs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Fails on malformed lines and on `%%` / positional specifiers instead of
    /// skipping or misreading them.
    pub strict: bool,
}

impl ParseOptions {
    /// Creates default (lenient) parse options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables/disables strict mode.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lenient() {
        assert!(!ParseOptions::new().strict);
        assert_eq!(ParseOptions::new(), ParseOptions::default());
    }

    #[test]
    fn test_with_strict() {
        assert!(ParseOptions::new().with_strict(true).strict);
        assert!(!ParseOptions::new().with_strict(true).with_strict(false).strict);
    }
}
