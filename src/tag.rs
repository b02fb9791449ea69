//! Text renderings for packed protocol values.
//!
//! Every formatter here is locale-independent and total: any input value
//! produces some string, never an error.

use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

/// Packed four-character client identifier (e.g. `W3XP`, `D2DV`).
///
/// Stored most-significant byte first, the way the wire protocol sends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientTag(pub u32);

impl ClientTag {
    pub const NONE: ClientTag = ClientTag(0);

    /// Build a tag from its four-character text form. Shorter strings are
    /// zero-padded on the right; extra characters are ignored.
    pub fn from_str_lossy(s: &str) -> Self {
        let mut bytes = [0u8; 4];
        for (slot, b) in bytes.iter_mut().zip(s.bytes()) {
            *slot = b;
        }
        ClientTag(u32::from_be_bytes(bytes))
    }

    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    pub fn as_text(self) -> String {
        tag_to_text(self.0)
    }
}

/// Packed clan tag. Tags shorter than four characters sit in the low bytes
/// with leading zero bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClanTag(pub u32);

impl ClanTag {
    pub fn from_str_lossy(s: &str) -> Self {
        let v = s.bytes().take(4).fold(0u32, |acc, b| (acc << 8) | b as u32);
        ClanTag(v)
    }

    pub fn as_text(self) -> String {
        let bytes = self.0.to_be_bytes();
        let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
        bytes_to_text(&bytes[start..])
    }
}

/// Render a packed tag: bytes most-significant first, stopping at the first
/// zero byte.
pub fn tag_to_text(tag: u32) -> String {
    bytes_to_text(&tag.to_be_bytes())
}

fn bytes_to_text(bytes: &[u8]) -> String {
    bytes
        .iter()
        .take_while(|&&b| b != 0)
        .map(|&b| b as char)
        .collect()
}

/// Render a packed client version number as `a.b.c.d`.
pub fn vernum_to_text(vernum: u32) -> String {
    let [a, b, c, d] = vernum.to_be_bytes();
    format!("{a}.{b}.{c}.{d}")
}

/// Render a host-order IPv4 address as a dotted quad.
pub fn addr_to_text(addr: Ipv4Addr) -> String {
    addr.to_string()
}

/// `"true"` / `"false"`, used for account authorization flags.
pub fn bool_text(v: bool) -> &'static str {
    if v { "true" } else { "false" }
}

/// `"1"` / `"0"`, used for integer-valued flags.
pub fn flag_text(v: bool) -> &'static str {
    if v { "1" } else { "0" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_tag_text() {
        assert_eq!(ClientTag(0x5733_5850).as_text(), "W3XP");
        assert_eq!(ClientTag::from_str_lossy("D2DV").as_text(), "D2DV");
    }

    #[test]
    fn zero_client_tag_is_empty() {
        assert!(ClientTag::NONE.is_none());
        assert_eq!(ClientTag::NONE.as_text(), "");
    }

    #[test]
    fn short_client_tag_stops_at_zero() {
        assert_eq!(ClientTag::from_str_lossy("SC").as_text(), "SC");
    }

    #[test]
    fn clan_tag_skips_leading_zero_bytes() {
        assert_eq!(ClanTag(0x0000_4142).as_text(), "AB");
        assert_eq!(ClanTag::from_str_lossy("AB").as_text(), "AB");
        assert_eq!(ClanTag::from_str_lossy("PvPG").as_text(), "PvPG");
        assert_eq!(ClanTag(0).as_text(), "");
    }

    #[test]
    fn version_number_text() {
        assert_eq!(vernum_to_text(0x0101_1A01), "1.1.26.1");
        assert_eq!(vernum_to_text(0), "0.0.0.0");
    }

    #[test]
    fn address_text() {
        assert_eq!(addr_to_text(Ipv4Addr::from(0xC0A8_0001)), "192.168.0.1");
    }

    #[test]
    fn boolean_renderings() {
        assert_eq!(bool_text(true), "true");
        assert_eq!(bool_text(false), "false");
        assert_eq!(flag_text(true), "1");
        assert_eq!(flag_text(false), "0");
    }
}
