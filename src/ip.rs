//! IPv4 address with port validation.
//!
//! Checks strings such as `192.168.0.1:8786`, the form a scheduler address is
//! usually passed around in. The checks are shape based and keep two
//! long-standing quirks that existing callers may depend on:
//!
//! - a `.0` count heuristic: when `.0` occurs, every occurrence must be a whole
//!   `.0.` or `.0:` (counted without overlap), so `1.0.0.0:80` and `10.0.0.1:80`
//!   are rejected;
//! - the colon position is compared against the distance of the last `.` from
//!   the *end* of the string, not against its index, so a port longer than the
//!   address in front of it is rejected.
//!
//! The port is any non-empty run of ASCII digits; no range is enforced.
//!
//! ```rust
//! use param_ident::is_valid_ip_and_port_v4;
//!
//! assert!(is_valid_ip_and_port_v4("192.168.0.1:8786"));
//! assert!(is_valid_ip_and_port_v4("  192.168.0.1:8786  "));
//! assert!(!is_valid_ip_and_port_v4("192.168.0.1"));
//! assert!(!is_valid_ip_and_port_v4("256.1.1.1:80"));
//! ```

use num_bigint::BigUint;
use std::net::Ipv4Addr;
use tracing::trace;

/// An accepted `a.b.c.d:port` string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ipv4Port {
    pub octets: [u8; 4],
    pub port: BigUint,
}

impl Ipv4Port {
    #[must_use]
    pub fn ip(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.octets)
    }

    /// The port, if it fits a TCP/UDP port number.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use param_ident::parse_ip_and_port_v4;
    ///
    /// let addr = parse_ip_and_port_v4("172.16.0.1:8786").unwrap();
    /// assert_eq!(addr.port_u16(), Some(8786));
    ///
    /// let addr = parse_ip_and_port_v4("172.16.0.1:99999").unwrap();
    /// assert_eq!(addr.port_u16(), None);
    /// ```
    #[must_use]
    pub fn port_u16(&self) -> Option<u16> {
        u16::try_from(&self.port).ok()
    }
}

/// Returns `true` if `s` is an IPv4 address followed by `:` and a port.
///
/// Leading and trailing whitespace (including U+001C..U+001F) is ignored.
/// Never panics.
#[must_use]
pub fn is_valid_ip_and_port_v4(s: &str) -> bool {
    parse_ip_and_port_v4(s).is_some()
}

/// Parses `s` with the same rules as [`is_valid_ip_and_port_v4`].
///
/// # Examples
///
/// ```rust
/// use param_ident::parse_ip_and_port_v4;
/// use std::net::Ipv4Addr;
///
/// let addr = parse_ip_and_port_v4("192.168.0.1:8786").unwrap();
/// assert_eq!(addr.ip(), Ipv4Addr::new(192, 168, 0, 1));
/// assert!(parse_ip_and_port_v4("abc.def.ghi.jkl:80").is_none());
/// ```
#[must_use]
pub fn parse_ip_and_port_v4(s: &str) -> Option<Ipv4Port> {
    let s = s.trim_matches(is_space);

    if s.matches('.').count() != 3 || s.matches(':').count() != 1 {
        return reject(s, "expected three '.' and one ':'");
    }

    let zeros = s.matches(".0").count();
    if zeros > 0 && zeros != s.matches(".0.").count() + s.matches(".0:").count() {
        return reject(s, "'.0' does not end an octet");
    }

    let last_dot_from_end = s.chars().rev().position(|c| c == '.');
    let first_colon = s.chars().position(|c| c == ':');
    match (last_dot_from_end, first_colon) {
        (Some(dot), Some(colon)) if dot < colon => {}
        _ => return reject(s, "port separator precedes the address"),
    }

    let fields: Vec<&str> = s.split('.').collect();
    let (last_octet, port) = match fields[3].split_once(':') {
        Some(parts) => parts,
        None => return reject(s, "':' is not inside the last octet"),
    };

    let octet_fields = [fields[0], fields[1], fields[2], last_octet];
    if !octet_fields.iter().all(|f| is_digits(f)) || !is_digits(port) {
        return reject(s, "non-digit octet or port");
    }

    let mut octets = [0u8; 4];
    for (slot, field) in octets.iter_mut().zip(octet_fields) {
        *slot = match field.parse::<u8>() {
            Ok(octet) => octet,
            Err(_) => return reject(s, "octet out of range"),
        };
    }

    let port = BigUint::parse_bytes(port.as_bytes(), 10)?;
    Some(Ipv4Port { octets, port })
}

// Unicode whitespace plus the ASCII separators U+001C..U+001F
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn is_digits(field: &str) -> bool {
    !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit())
}

fn reject(input: &str, reason: &'static str) -> Option<Ipv4Port> {
    trace!(input = %input, reason, "rejected ip:port");
    None
}
