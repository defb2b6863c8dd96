//! IPv4 (legacy) address value object.

use super::byte::ByteValue;
use super::error::{FormatError, Result, ValueError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Validated IPv4 address `a.b.c.d`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ipv4Address {
    a: ByteValue,
    b: ByteValue,
    c: ByteValue,
    d: ByteValue,
}

impl Ipv4Address {
    /// Parses dotted-decimal text such as `192.0.2.41`.
    /// Out-of-range octets fail with the byte range errors.
    pub fn new(text: &str) -> Result<Self> {
        if text.matches('.').count() != 3 {
            return Err(FormatError::NotIpv4.into());
        }

        let mut parts = text.split('.');
        let mut next = || {
            let part = parts.next().ok_or(FormatError::NotIpv4)?;
            ByteValue::parse_decimal(part, FormatError::InvalidOctet)
        };

        Ok(Self {
            a: next()?,
            b: next()?,
            c: next()?,
            d: next()?,
        })
    }

    /// Dotted-decimal form
    pub fn value(&self) -> String {
        self.to_string()
    }

    pub fn octets(&self) -> [u8; 4] {
        [self.a, self.b, self.c, self.d].map(u8::from)
    }

    /// In 127.0.0.0/8 (RFC 5735)
    pub fn is_loopback(&self) -> bool {
        self.a.value() == 127
    }

    /// In a private network range (RFC 1918, section 3):
    /// 10.0.0.0/8, 172.16.0.0/12 or 192.168.0.0/16.
    pub fn is_private(&self) -> bool {
        let [a, b, _, _] = self.octets();
        a == 10 || (a == 192 && b == 168) || (a == 172 && (16..=31).contains(&b))
    }

    /// In a documentation prefix (RFC 5737, section 3):
    /// 192.0.2.0/24, 198.51.100.0/24 or 203.0.113.0/24.
    pub fn is_documentation(&self) -> bool {
        matches!(
            self.octets(),
            [192, 0, 2, _] | [198, 51, 100, _] | [203, 0, 113, _]
        )
    }

    /// PTR name with the octets reversed, e.g. `d.c.b.a.in-addr.arpa.`
    pub fn reverse_dns(&self) -> String {
        format!("{}.{}.{}.{}.in-addr.arpa.", self.d, self.c, self.b, self.a)
    }
}

impl FromStr for Ipv4Address {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Ipv4Address {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<Ipv4Address> for String {
    fn from(ip: Ipv4Address) -> Self {
        ip.to_string()
    }
}

impl From<Ipv4Addr> for Ipv4Address {
    fn from(ip: Ipv4Addr) -> Self {
        let [a, b, c, d] = ip.octets().map(ByteValue::from);
        Self { a, b, c, d }
    }
}

impl From<Ipv4Address> for Ipv4Addr {
    fn from(ip: Ipv4Address) -> Self {
        Ipv4Addr::from(ip.octets())
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}.{}", self.a, self.b, self.c, self.d)
    }
}
