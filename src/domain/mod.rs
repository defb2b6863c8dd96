//! Domain value objects with validation at construction time.

pub mod byte;
pub mod error;
pub mod ipv4;
pub mod ipv6;
pub mod state;

pub use byte::ByteValue;
pub use error::{FormatError, RangeError, Result, ValueError};
pub use ipv4::Ipv4Address;
pub use ipv6::Ipv6Address;
pub use state::UsState;
