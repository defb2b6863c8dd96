//! IPv6 address value object with expanded, minified and ip6.arpa forms.

use super::byte::ByteValue;
use super::error::{FormatError, Result, ValueError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv6Addr;
use std::ops::Range;
use std::str::FromStr;

const GROUPS: usize = 8;
const MAX_GROUP_DIGITS: usize = 4;

/// Validated IPv6 address stored as 16 octets in network order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ipv6Address([ByteValue; 16]);

impl Ipv6Address {
    /// Parses any textual IPv6 address, including one `::` zero-compression.
    /// Accepts forms such as `2001:db8::af:1bca:ff1c`, `::1` and `::`.
    pub fn new(text: &str) -> Result<Self> {
        if !text.contains(':') {
            return Err(FormatError::NotIpv6.into());
        }
        if text.matches("::").count() > 1 {
            return Err(FormatError::MultipleCollapsedGroups.into());
        }

        let groups = expand_groups(text)?;

        let mut octets = [ByteValue::from(0); 16];
        for (i, group) in groups.iter().enumerate() {
            let [high, low] = parse_group(group)?.to_be_bytes();
            octets[2 * i] = ByteValue::from(high);
            octets[2 * i + 1] = ByteValue::from(low);
        }

        Ok(Self(octets))
    }

    /// Canonical textual form; alias of [`Ipv6Address::minified`].
    pub fn value(&self) -> String {
        self.minified()
    }

    pub fn octets(&self) -> [u8; 16] {
        self.0.map(u8::from)
    }

    /// The eight 16-bit groups, most significant first
    pub fn groups(&self) -> [u16; 8] {
        std::array::from_fn(|i| {
            u16::from_be_bytes([self.0[2 * i].value(), self.0[2 * i + 1].value()])
        })
    }

    /// Every group zero-padded to 4 hex digits, no compression.
    /// Always 39 characters, e.g. `2001:0db8:0000:0000:00af:1bca:ff1c:0000`.
    pub fn expanded(&self) -> String {
        self.0
            .chunks_exact(2)
            .map(|pair| format!("{}{}", pair[0].to_hex(), pair[1].to_hex()))
            .collect::<Vec<_>>()
            .join(":")
    }

    /// Shortest form: leading zeros trimmed from every group and the longest
    /// run of two or more zero groups replaced with `::` (leftmost on ties).
    pub fn minified(&self) -> String {
        let groups = self.groups();

        match longest_zero_run(&groups) {
            Some(run) => format!(
                "{}::{}",
                join_trimmed(&groups[..run.start]),
                join_trimmed(&groups[run.end..])
            ),
            None => join_trimmed(&groups),
        }
    }

    /// Nibble-reversed PTR name, ending in `.ip6.arpa.`
    pub fn reverse_dns(&self) -> String {
        let mut out = String::with_capacity(72);
        for byte in self.0.iter().rev() {
            let hex = byte.to_hex();
            for nibble in hex.chars().rev() {
                out.push(nibble);
                out.push('.');
            }
        }
        out.push_str("ip6.arpa.");
        out
    }

    /// True only for `::1` (RFC 4291, section 2.5.3).
    pub fn is_loopback(&self) -> bool {
        self.0[..15].iter().all(|b| b.value() == 0) && self.0[15].value() == 1
    }
}

/// Splits `text` into exactly eight group strings, filling the `::` gap
/// with zero groups.
fn expand_groups(text: &str) -> Result<Vec<&str>> {
    let groups: Vec<&str> = match text.split_once("::") {
        Some((left, right)) => {
            let left = split_explicit(left);
            let right = split_explicit(right);
            let explicit = left.len() + right.len();
            if explicit >= GROUPS {
                return Err(FormatError::GroupCount.into());
            }

            left.into_iter()
                .chain(std::iter::repeat_n("0", GROUPS - explicit))
                .chain(right)
                .collect()
        }
        None => text.split(':').collect(),
    };

    if groups.len() != GROUPS {
        return Err(FormatError::GroupCount.into());
    }
    Ok(groups)
}

fn split_explicit(side: &str) -> Vec<&str> {
    if side.is_empty() {
        Vec::new()
    } else {
        side.split(':').collect()
    }
}

/// Parses up to 4 hex digits; shorter groups carry implicit leading zeros.
fn parse_group(group: &str) -> Result<u16> {
    if group.is_empty() {
        return Err(FormatError::EmptyGroup.into());
    }
    if !group.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(FormatError::InvalidHexDigit.into());
    }
    if group.len() > MAX_GROUP_DIGITS {
        return Err(FormatError::GroupTooLong.into());
    }

    u16::from_str_radix(group, 16).map_err(|_| FormatError::InvalidHexDigit.into())
}

/// Position of the first longest run of at least two zero groups
fn longest_zero_run(groups: &[u16]) -> Option<Range<usize>> {
    let mut best: Option<Range<usize>> = None;
    let mut start = 0;

    while start < groups.len() {
        if groups[start] != 0 {
            start += 1;
            continue;
        }

        let end = groups[start..]
            .iter()
            .position(|&g| g != 0)
            .map_or(groups.len(), |len| start + len);

        let len = end - start;
        if len >= 2 && best.as_ref().is_none_or(|b| len > b.len()) {
            best = Some(start..end);
        }
        start = end;
    }

    best
}

fn join_trimmed(groups: &[u16]) -> String {
    groups
        .iter()
        .map(|g| format!("{:x}", g))
        .collect::<Vec<_>>()
        .join(":")
}

impl FromStr for Ipv6Address {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Ipv6Address {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<Ipv6Address> for String {
    fn from(ip: Ipv6Address) -> Self {
        ip.minified()
    }
}

impl From<Ipv6Addr> for Ipv6Address {
    fn from(ip: Ipv6Addr) -> Self {
        Self(ip.octets().map(ByteValue::from))
    }
}

impl From<Ipv6Address> for Ipv6Addr {
    fn from(ip: Ipv6Address) -> Self {
        Ipv6Addr::from(ip.octets())
    }
}

impl fmt::Display for Ipv6Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.minified())
    }
}
