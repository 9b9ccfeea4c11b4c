//! API path generator.

use super::uuid::generate_uuid_v4;
use crate::sampler::WeightedChoice;
use fake::faker::lorem::en::Words;
use fake::Fake;
use rand::Rng;
use std::sync::LazyLock;

/// Token replaced by a resource identifier.
pub const ID_PLACEHOLDER: &str = "{id}";

/// Path templates, skewed toward user endpoints.
pub const API_PATH_WEIGHTS: [(&str, u32); 19] = [
    ("/api/v1/users", 25),
    ("/api/v1/users/{id}", 20),
    ("/api/v1/posts", 15),
    ("/api/v1/posts/{id}", 10),
    ("/api/v1/comments", 10),
    ("/api/v1/comments/{id}", 5),
    ("/api/v1/auth/login", 5),
    ("/api/v1/auth/logout", 3),
    ("/api/v1/auth/register", 2),
    ("/api/v1/profile", 1),
    ("/api/v1/settings", 1),
    ("/api/v1/notifications", 1),
    ("/api/v1/search", 1),
    ("/api/v1/upload", 1),
    ("/api/v1/download", 1),
    ("/api/v1/health", 1),
    ("/api/v1/metrics", 1),
    ("/api/v1/admin/users", 1),
    ("/api/v1/admin/settings", 1),
];

static API_PATHS: LazyLock<WeightedChoice<&'static str>> =
    LazyLock::new(|| WeightedChoice::from_static(&API_PATH_WEIGHTS));

/// Shape of the identifier substituted into a path template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IdKind {
    Number,
    Uuid,
    Slug,
}

impl IdKind {
    const ALL: [IdKind; 3] = [IdKind::Number, IdKind::Uuid, IdKind::Slug];
}

/// Generate an API path from the weighted template catalogue.
///
/// Templates carrying `{id}` get a numeric id (1..=999999), a UUID, or a
/// slug, each kind equally likely.
pub fn generate_path<R: Rng + ?Sized>(rng: &mut R) -> String {
    let template = *API_PATHS.sample(rng);

    if template.contains(ID_PLACEHOLDER) {
        let id = generate_resource_id(rng);
        template.replace(ID_PLACEHOLDER, &id)
    } else {
        template.to_string()
    }
}

fn generate_resource_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    match IdKind::ALL[rng.random_range(0..IdKind::ALL.len())] {
        IdKind::Number => rng.random_range(1..=999_999u32).to_string(),
        IdKind::Uuid => generate_uuid_v4(rng).to_string(),
        IdKind::Slug => generate_slug(rng),
    }
}

/// Generate a lowercase, hyphen-joined slug of 2 to 4 words.
pub fn generate_slug<R: Rng + ?Sized>(rng: &mut R) -> String {
    let words: Vec<String> = Words(2..5).fake_with_rng(rng);
    words
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}
