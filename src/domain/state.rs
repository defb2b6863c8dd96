//! States of the United States of America, looked up by code or name.

use super::error::{Result, ValueError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Two-letter postal code and name of every state
const STATES: [(&str, &str); 50] = [
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MD", "Maryland"),
    ("MA", "Massachusetts"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NY", "New York"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VA", "Virginia"),
    ("WA", "Washington"),
    ("WV", "West Virginia"),
    ("WI", "Wisconsin"),
    ("WY", "Wyoming"),
];

/// A US state, serialized as `{"code": "TX", "name": "Texas"}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "StateRecord")]
pub struct UsState {
    code: &'static str,
    name: &'static str,
}

/// Wire shape accepted when deserializing; the code is revalidated.
#[derive(Deserialize)]
struct StateRecord {
    code: String,
}

impl UsState {
    /// Looks up a state by code (`tx`) or by name (`new york`), ignoring
    /// ASCII case and surrounding whitespace. Codes are tried first.
    pub fn new(input: &str) -> Result<Self> {
        let input = input.trim();

        STATES
            .iter()
            .find(|(code, _)| code.eq_ignore_ascii_case(input))
            .or_else(|| STATES.iter().find(|(_, name)| name.eq_ignore_ascii_case(input)))
            .map(|&(code, name)| Self { code, name })
            .ok_or_else(|| ValueError::UnknownState(input.to_string()))
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn all() -> impl Iterator<Item = UsState> {
        STATES.iter().map(|&(code, name)| Self { code, name })
    }
}

impl TryFrom<StateRecord> for UsState {
    type Error = ValueError;

    fn try_from(record: StateRecord) -> Result<Self> {
        Self::new(&record.code)
    }
}

impl FromStr for UsState {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for UsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_from_code() {
        let tx = UsState::new("tx").unwrap();
        assert_eq!(tx.code(), "TX");
        assert_eq!(tx.name(), "Texas");
        assert_eq!(format!("{}", tx), "Texas (TX)");
        assert_eq!(
            serde_json::to_string(&tx).unwrap(),
            r#"{"code":"TX","name":"Texas"}"#
        );
    }

    #[rstest]
    #[case("ARKANSAS", "AR")]
    #[case("aLAbaMa", "AL")]
    #[case(" \tGA\n", "GA")]
    #[case("new york", "NY")]
    #[case("WEST virginia", "WV")]
    fn test_from_name(#[case] input: &str, #[case] code: &str) {
        assert_eq!(UsState::new(input).unwrap().code(), code);
    }

    #[test]
    fn test_rejects_invalid_states() {
        let err = UsState::new(" XX ").unwrap_err();
        assert_eq!(err, ValueError::UnknownState("XX".to_string()));
    }

    #[test]
    fn test_table_is_complete() {
        assert_eq!(UsState::all().count(), 50);
        for state in UsState::all() {
            assert_eq!(UsState::new(state.code()).unwrap(), state);
            assert_eq!(UsState::new(state.name()).unwrap(), state);
        }
    }

    #[test]
    fn test_deserialize_revalidates_code() {
        let state: UsState =
            serde_json::from_str(r#"{"code":"wy","name":"Wyoming"}"#).unwrap();
        assert_eq!(state.code(), "WY");

        assert!(serde_json::from_str::<UsState>(r#"{"code":"ZZ","name":"Nowhere"}"#).is_err());
    }
}
