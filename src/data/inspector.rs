//! Classification and construction of raw textual values.

use clap::ValueEnum;
use netvalues::{ByteValue, Ipv4Address, Ipv6Address, UsState, ValueError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which value type a piece of text is built as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Ipv6,
    Ipv4,
    Byte,
    State,
}

impl ValueKind {
    /// Guess the kind from the shape of the text
    /// Any colon means IPv6, any dot IPv4, a (signed) integer a byte,
    /// everything else is looked up as a state.
    pub fn detect(text: &str) -> Self {
        if text.contains(':') {
            Self::Ipv6
        } else if text.contains('.') {
            Self::Ipv4
        } else if is_integer(text) {
            Self::Byte
        } else {
            Self::State
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ipv6 => "ipv6",
            Self::Ipv4 => "ipv4",
            Self::Byte => "byte",
            Self::State => "state",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// A successfully constructed value
#[derive(Debug, Clone, PartialEq)]
pub enum InspectedValue {
    Ipv6(Ipv6Address),
    Ipv4(Ipv4Address),
    Byte(ByteValue),
    State(UsState),
}

/// Outcome of building one input
#[derive(Debug, Clone, PartialEq)]
pub struct Inspection {
    pub input: String,
    pub kind: ValueKind,
    pub outcome: Result<InspectedValue, ValueError>,
}

impl Inspection {
    pub fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Builds value types from text, optionally forcing a single kind
pub struct Inspector {
    forced: Option<ValueKind>,
}

impl Inspector {
    pub fn new(forced: Option<ValueKind>) -> Self {
        Self { forced }
    }

    pub fn inspect(&self, raw: &str) -> Inspection {
        let input = raw.trim();
        let kind = self.forced.unwrap_or_else(|| ValueKind::detect(input));

        let outcome = match kind {
            ValueKind::Ipv6 => Ipv6Address::new(input).map(InspectedValue::Ipv6),
            ValueKind::Ipv4 => Ipv4Address::new(input).map(InspectedValue::Ipv4),
            ValueKind::Byte => input.parse::<ByteValue>().map(InspectedValue::Byte),
            ValueKind::State => UsState::new(input).map(InspectedValue::State),
        };

        match &outcome {
            Ok(_) => tracing::debug!(input, %kind, "value accepted"),
            Err(e) => tracing::warn!(input, %kind, error = %e, "value rejected"),
        }

        Inspection {
            input: input.to_string(),
            kind,
            outcome,
        }
    }

    /// Inspects every non-blank input, preserving order
    pub fn inspect_all<I, S>(&self, inputs: I) -> Vec<Inspection>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        inputs
            .into_iter()
            .filter(|raw| !raw.as_ref().trim().is_empty())
            .map(|raw| self.inspect(raw.as_ref()))
            .collect()
    }
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new(None)
    }
}
