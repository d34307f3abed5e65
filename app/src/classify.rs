// src/classify.rs

use std::net::Ipv4Addr;
use std::sync::OnceLock;

use regex::Regex;

// leading zeros are accepted ("192.168.001.001")
const IPV4_PATTERN: &str = r"^(?:[0-9]{1,3}\.){3}[0-9]{1,3}$";

static IPV4_REGEX: OnceLock<Regex> = OnceLock::new();

fn ipv4_regex() -> &'static Regex {
    IPV4_REGEX.get_or_init(|| Regex::new(IPV4_PATTERN).expect("IPv4 pattern compiles"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashKind {
    Md5,
    Sha1,
    Sha256,
}

impl HashKind {
    pub const ALL: [HashKind; 3] = [HashKind::Md5, HashKind::Sha1, HashKind::Sha256];

    pub fn hex_len(self) -> usize {
        match self {
            HashKind::Md5 => 32,
            HashKind::Sha1 => 40,
            HashKind::Sha256 => 64,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HashKind::Md5 => "MD5",
            HashKind::Sha1 => "SHA-1",
            HashKind::Sha256 => "SHA-256",
        }
    }

    fn from_hex_len(len: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.hex_len() == len)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Ip([u8; 4]),
    Hash(HashKind),
    Invalid,
}

impl Classification {
    pub fn is_valid(self) -> bool {
        !matches!(self, Classification::Invalid)
    }

    pub fn label(self) -> String {
        match self {
            Classification::Ip(octets) => format!("IPv4 address ({})", Ipv4Addr::from(octets)),
            Classification::Hash(kind) => format!("{} hash", kind.name()),
            Classification::Invalid => "Unrecognized input".to_string(),
        }
    }
}

/// `None` means there is nothing to judge yet.
pub fn classify(input: &str) -> Option<Classification> {
    let value = input.trim();
    if value.is_empty() {
        return None;
    }

    if let Some(octets) = parse_ipv4(value) {
        return Some(Classification::Ip(octets));
    }
    if let Some(kind) = hash_kind(value) {
        return Some(Classification::Hash(kind));
    }
    Some(Classification::Invalid)
}

pub fn parse_ipv4(value: &str) -> Option<[u8; 4]> {
    if !ipv4_regex().is_match(value) {
        return None;
    }

    let mut octets = [0u8; 4];
    for (slot, group) in octets.iter_mut().zip(value.split('.')) {
        // at most three digits, so u16 cannot overflow
        let n: u16 = group.parse().ok()?;
        *slot = u8::try_from(n).ok()?;
    }
    Some(octets)
}

pub fn hash_kind(value: &str) -> Option<HashKind> {
    let normalized = value.trim().to_ascii_lowercase();
    if normalized.is_empty() || !normalized.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
        return None;
    }
    HashKind::from_hex_len(normalized.len())
}
