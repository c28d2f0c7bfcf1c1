/// Prefix of the directive line declaring the field order,
/// e.g. `#Fields: date time s-ip cs-method cs-uri-stem sc-status`.
pub const FIELDS_DIRECTIVE: &str = "#Fields:";

/// The ordered field names currently in effect for data lines.
///
/// IIS logs are self-describing: the active order comes from the most
/// recent `#Fields:` directive. A new directive fully replaces the prior
/// list; records decoded before the switch are unaffected.
#[derive(Debug, Clone, Default)]
pub struct FieldSchema {
    names: Vec<String>,
}

impl FieldSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// If `line` is a `#Fields:` directive, replace the active field list
    /// with its space-delimited names and return true. Any other line
    /// leaves the schema untouched and returns false.
    pub fn apply_if_directive(&mut self, line: &str) -> bool {
        match line.strip_prefix(FIELDS_DIRECTIVE) {
            Some(rest) => {
                let rest = rest.strip_prefix(' ').unwrap_or(rest);
                self.names = rest.split(' ').map(str::to_string).collect();
                true
            }
            None => false,
        }
    }

    /// Whether any directive has been seen yet. Data lines before the
    /// first directive cannot be decoded.
    pub fn is_declared(&self) -> bool {
        !self.names.is_empty()
    }

    pub fn field_names(&self) -> &[String] {
        &self.names
    }
}
