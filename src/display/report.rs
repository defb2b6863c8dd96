//! JSON report formatting for inspected values.

use crate::data::{InspectedValue, Inspection, ValueKind};
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Report for a whole batch of inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub results: Vec<ReportEntry>,
}

impl Report {
    pub fn all_valid(&self) -> bool {
        self.invalid == 0
    }
}

/// One input with every projection that applies to its kind
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportEntry {
    pub input: String,
    pub kind: Option<ValueKind>,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expanded: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse_dns: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loopback: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Formats inspections as a JSON-ready report
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(&self, inspections: &[Inspection]) -> Result<Report> {
        let results = inspections
            .iter()
            .map(|inspection| self.format_entry(inspection))
            .collect::<Result<Vec<_>>>()?;

        let valid = inspections.iter().filter(|i| i.is_valid()).count();

        Ok(Report {
            total: results.len(),
            valid,
            invalid: results.len() - valid,
            results,
        })
    }

    /// Build the entry for a single inspection
    fn format_entry(&self, inspection: &Inspection) -> Result<ReportEntry> {
        let base = ReportEntry {
            input: inspection.input.clone(),
            kind: Some(inspection.kind),
            ..ReportEntry::default()
        };

        let value = match &inspection.outcome {
            Ok(value) => value,
            Err(e) => {
                return Ok(ReportEntry {
                    error: Some(e.to_string()),
                    ..base
                });
            }
        };

        let entry = match value {
            InspectedValue::Ipv6(ip) => ReportEntry {
                value: Some(serde_json::to_value(ip)?),
                expanded: Some(ip.expanded()),
                minified: Some(ip.minified()),
                reverse_dns: Some(ip.reverse_dns()),
                loopback: Some(ip.is_loopback()),
                ..base
            },
            InspectedValue::Ipv4(ip) => ReportEntry {
                value: Some(serde_json::to_value(ip)?),
                reverse_dns: Some(ip.reverse_dns()),
                loopback: Some(ip.is_loopback()),
                private: Some(ip.is_private()),
                documentation: Some(ip.is_documentation()),
                ..base
            },
            InspectedValue::Byte(byte) => ReportEntry {
                value: Some(serde_json::to_value(byte)?),
                ..base
            },
            InspectedValue::State(state) => ReportEntry {
                value: Some(serde_json::to_value(state)?),
                code: Some(state.code().to_string()),
                name: Some(state.name().to_string()),
                ..base
            },
        };

        Ok(ReportEntry { valid: true, ..entry })
    }

    /// Report used when the inputs themselves could not be read
    pub fn create_error_report(error: anyhow::Error) -> Report {
        Report {
            total: 1,
            valid: 0,
            invalid: 1,
            results: vec![ReportEntry {
                input: String::new(),
                error: Some(format!("Unable to read input: {:#}", error)),
                ..ReportEntry::default()
            }],
        }
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Inspector;

    fn report(inputs: &[&str]) -> Report {
        let inspections = Inspector::default().inspect_all(inputs.iter().copied());
        ReportFormatter::new().format(&inspections).unwrap()
    }

    #[test]
    fn test_format_empty() {
        let report = report(&[]);
        assert_eq!(report.total, 0);
        assert!(report.all_valid());
        assert!(report.results.is_empty());
    }

    #[test]
    fn test_counts_valid_and_invalid() {
        let report = report(&["::1", "10.0.0.259", "tx", "2001:db8::1::1"]);
        assert_eq!(report.total, 4);
        assert_eq!(report.valid, 2);
        assert_eq!(report.invalid, 2);
        assert!(!report.all_valid());
    }

    #[test]
    fn test_ipv6_entry() {
        let report = report(&["2001:db8::1"]);
        let entry = &report.results[0];

        assert!(entry.valid);
        assert_eq!(entry.kind, Some(ValueKind::Ipv6));
        assert_eq!(entry.value, Some(serde_json::json!("2001:db8::1")));
        assert_eq!(
            entry.expanded.as_deref(),
            Some("2001:0db8:0000:0000:0000:0000:0000:0001")
        );
        assert_eq!(entry.loopback, Some(false));
        assert_eq!(entry.private, None);
    }

    #[test]
    fn test_json_omits_fields_that_do_not_apply() {
        let report = report(&["42", "tx"]);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(
            json["results"][0],
            serde_json::json!({"input": "42", "kind": "byte", "valid": true, "value": 42})
        );
        assert_eq!(
            json["results"][1]["value"],
            serde_json::json!({"code": "TX", "name": "Texas"})
        );
        assert!(json["results"][1].get("expanded").is_none());
    }

    #[test]
    fn test_error_entry_carries_message() {
        let report = report(&["-1"]);
        let entry = &report.results[0];

        assert!(!entry.valid);
        assert_eq!(
            entry.error.as_deref(),
            Some("byte value cannot be lower than 0 (0x00)")
        );
        assert!(entry.value.is_none());
    }

    #[test]
    fn test_error_report() {
        let report = ReportFormatter::create_error_report(anyhow::anyhow!("stdin closed"));
        assert_eq!(report.invalid, 1);
        assert!(report.results[0].error.as_ref().unwrap().contains("stdin closed"));
    }
}
