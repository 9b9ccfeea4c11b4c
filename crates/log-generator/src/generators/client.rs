//! Client metadata generators: source address, user agent, referer,
//! user id and session id.

use super::path::generate_slug;
use super::uuid::generate_uuid_v4;
use crate::sampler::WeightedChoice;
use fake::faker::internet::en::{DomainSuffix, IPv4, IPv6, SafeEmail, UserAgent, Username};
use fake::faker::lorem::en::Word;
use fake::Fake;
use rand::Rng;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpKind {
    PublicV4,
    PublicV6,
    PrivateV4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefererKind {
    Url,
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserIdKind {
    Uuid,
    Username,
    Email,
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionIdKind {
    Uuid,
    Hex,
    Empty,
}

pub const IP_KIND_WEIGHTS: [(IpKind, u32); 3] = [
    (IpKind::PublicV4, 70),
    (IpKind::PublicV6, 20),
    (IpKind::PrivateV4, 10),
];

pub const REFERER_KIND_WEIGHTS: [(RefererKind, u32); 2] =
    [(RefererKind::Url, 60), (RefererKind::Empty, 40)];

pub const USER_ID_KIND_WEIGHTS: [(UserIdKind, u32); 4] = [
    (UserIdKind::Uuid, 50),
    (UserIdKind::Username, 30),
    (UserIdKind::Email, 15),
    (UserIdKind::Empty, 5),
];

pub const SESSION_ID_KIND_WEIGHTS: [(SessionIdKind, u32); 3] = [
    (SessionIdKind::Uuid, 70),
    (SessionIdKind::Hex, 20),
    (SessionIdKind::Empty, 10),
];

static IP_KINDS: LazyLock<WeightedChoice<IpKind>> =
    LazyLock::new(|| WeightedChoice::from_static(&IP_KIND_WEIGHTS));

static REFERER_KINDS: LazyLock<WeightedChoice<RefererKind>> =
    LazyLock::new(|| WeightedChoice::from_static(&REFERER_KIND_WEIGHTS));

static USER_ID_KINDS: LazyLock<WeightedChoice<UserIdKind>> =
    LazyLock::new(|| WeightedChoice::from_static(&USER_ID_KIND_WEIGHTS));

static SESSION_ID_KINDS: LazyLock<WeightedChoice<SessionIdKind>> =
    LazyLock::new(|| WeightedChoice::from_static(&SESSION_ID_KIND_WEIGHTS));

/// Generate a client address: IPv4, IPv6, or an RFC-1918 private IPv4.
pub fn generate_source_ip<R: Rng + ?Sized>(rng: &mut R) -> String {
    match *IP_KINDS.sample(rng) {
        IpKind::PublicV4 => IPv4().fake_with_rng(rng),
        IpKind::PublicV6 => IPv6().fake_with_rng(rng),
        IpKind::PrivateV4 => generate_private_ipv4(rng),
    }
}

/// Pick one of the three private blocks uniformly, then fill in the host octets.
fn generate_private_ipv4<R: Rng + ?Sized>(rng: &mut R) -> String {
    match rng.random_range(0..3) {
        0 => format!(
            "10.{}.{}.{}",
            rng.random_range(0..=255u8),
            rng.random_range(0..=255u8),
            rng.random_range(1..=254u8)
        ),
        1 => format!(
            "172.{}.{}.{}",
            rng.random_range(16..=31u8),
            rng.random_range(0..=255u8),
            rng.random_range(1..=254u8)
        ),
        _ => format!(
            "192.168.{}.{}",
            rng.random_range(0..=255u8),
            rng.random_range(1..=254u8)
        ),
    }
}

pub fn generate_user_agent<R: Rng + ?Sized>(rng: &mut R) -> String {
    UserAgent().fake_with_rng(rng)
}

/// Generate a referer: an `http(s)://` URL, or empty.
pub fn generate_referer<R: Rng + ?Sized>(rng: &mut R) -> String {
    match *REFERER_KINDS.sample(rng) {
        RefererKind::Url => generate_url(rng),
        RefererKind::Empty => String::new(),
    }
}

fn generate_url<R: Rng + ?Sized>(rng: &mut R) -> String {
    let scheme = if rng.random_bool(0.5) { "https" } else { "http" };
    let www = if rng.random_bool(0.5) { "www." } else { "" };
    let host: String = Word().fake_with_rng(rng);
    let suffix: String = DomainSuffix().fake_with_rng(rng);
    let path = if rng.random_bool(0.5) {
        generate_slug(rng)
    } else {
        String::new()
    };

    format!("{scheme}://{www}{}.{suffix}/{path}", host.to_lowercase())
}

/// Generate a user id: UUID, username, email, or empty.
pub fn generate_user_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    match *USER_ID_KINDS.sample(rng) {
        UserIdKind::Uuid => generate_uuid_v4(rng).to_string(),
        UserIdKind::Username => Username().fake_with_rng(rng),
        UserIdKind::Email => SafeEmail().fake_with_rng(rng),
        UserIdKind::Empty => String::new(),
    }
}

/// Generate a session id: UUID, six lowercase hex digits, or empty.
pub fn generate_session_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    match *SESSION_ID_KINDS.sample(rng) {
        SessionIdKind::Uuid => generate_uuid_v4(rng).to_string(),
        SessionIdKind::Hex => format!("{:06x}", rng.random_range(0..=0xFF_FFFFu32)),
        SessionIdKind::Empty => String::new(),
    }
}
