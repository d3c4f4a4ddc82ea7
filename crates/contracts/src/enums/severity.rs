use serde::{Deserialize, Serialize};

/// Severity of a compliance control. Decoding is lenient: codes are
/// case-insensitive and unknown, blank or null values read as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    None,
}

impl Severity {
    /// Wire code as the backend spells it
    pub fn code(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
            Severity::None => "none",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
            Severity::None => "None",
        }
    }

    /// All severities, most severe first
    pub fn all() -> Vec<Severity> {
        vec![
            Severity::Critical,
            Severity::High,
            Severity::Medium,
            Severity::Low,
            Severity::None,
        ]
    }

    /// Case-insensitive parse from the wire code
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "critical" => Some(Severity::Critical),
            "high" => Some(Severity::High),
            "medium" => Some(Severity::Medium),
            "low" => Some(Severity::Low),
            "none" => Some(Severity::None),
            _ => None,
        }
    }
}

impl From<Option<String>> for Severity {
    fn from(code: Option<String>) -> Self {
        code.as_deref()
            .and_then(Severity::from_code)
            .unwrap_or(Severity::None)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_is_case_insensitive() {
        assert_eq!(Severity::from_code("HIGH"), Some(Severity::High));
        assert_eq!(Severity::from_code(" critical "), Some(Severity::Critical));
        assert_eq!(Severity::from_code("urgent"), None);
    }

    #[test]
    fn test_all_is_ordered_by_severity() {
        let all = Severity::all();
        let mut sorted = all.clone();
        sorted.sort();
        assert_eq!(all, sorted);
        assert_eq!(all.len(), 5);
    }

    #[test]
    fn test_serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&Severity::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
        let parsed: Severity = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(parsed, Severity::Low);
    }

    #[test]
    fn test_decoding_tolerates_odd_codes() {
        let parsed: Vec<Severity> =
            serde_json::from_str(r#"["High", " CRITICAL", "", "urgent", null]"#).unwrap();
        assert_eq!(
            parsed,
            vec![
                Severity::High,
                Severity::Critical,
                Severity::None,
                Severity::None,
                Severity::None
            ]
        );
    }
}
