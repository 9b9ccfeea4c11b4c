//! Log level, HTTP method and HTTP protocol generators.

use crate::sampler::WeightedChoice;
use log_core::{HttpMethod, HttpProtocol, LogLevel};
use rand::Rng;
use std::sync::LazyLock;

pub const LOG_LEVEL_WEIGHTS: [(LogLevel, u32); 4] = [
    (LogLevel::Info, 70),
    (LogLevel::Warn, 15),
    (LogLevel::Error, 10),
    (LogLevel::Debug, 5),
];

pub const HTTP_METHOD_WEIGHTS: [(HttpMethod, u32); 4] = [
    (HttpMethod::Get, 25),
    (HttpMethod::Post, 60),
    (HttpMethod::Put, 10),
    (HttpMethod::Delete, 5),
];

pub const HTTP_PROTOCOL_WEIGHTS: [(HttpProtocol, u32); 3] = [
    (HttpProtocol::Http11, 60),
    (HttpProtocol::Http2, 35),
    (HttpProtocol::Http3, 5),
];

static LOG_LEVELS: LazyLock<WeightedChoice<LogLevel>> =
    LazyLock::new(|| WeightedChoice::from_static(&LOG_LEVEL_WEIGHTS));

static HTTP_METHODS: LazyLock<WeightedChoice<HttpMethod>> =
    LazyLock::new(|| WeightedChoice::from_static(&HTTP_METHOD_WEIGHTS));

static HTTP_PROTOCOLS: LazyLock<WeightedChoice<HttpProtocol>> =
    LazyLock::new(|| WeightedChoice::from_static(&HTTP_PROTOCOL_WEIGHTS));

pub fn generate_log_level<R: Rng + ?Sized>(rng: &mut R) -> LogLevel {
    *LOG_LEVELS.sample(rng)
}

pub fn generate_method<R: Rng + ?Sized>(rng: &mut R) -> HttpMethod {
    *HTTP_METHODS.sample(rng)
}

pub fn generate_protocol<R: Rng + ?Sized>(rng: &mut R) -> HttpProtocol {
    *HTTP_PROTOCOLS.sample(rng)
}
