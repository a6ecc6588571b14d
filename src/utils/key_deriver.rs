//! Short key derivation.
//!
//! A key is first derived deterministically from the combined URL: the first
//! six hex characters of its MD5 digest. Only when that candidate is already
//! taken does the service fall back to random alphanumeric keys drawn from an
//! injectable [`RandomSource`].

use md5::{Digest, Md5};
use rand::distr::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Length of every issued short key.
pub const KEY_LENGTH: usize = 6;

/// Joins a long URL with an optional custom suffix.
///
/// With a non-empty suffix, trailing slashes are trimmed from `long_url`,
/// leading slashes from the suffix, and the two are joined with a single `/`.
/// `None` and `Some("")` both yield `long_url` unchanged.
///
/// ```
/// use link_shortener::utils::key_deriver::normalize;
///
/// assert_eq!(normalize("http://a.com/", Some("x")), "http://a.com/x");
/// assert_eq!(normalize("http://a.com", Some("/x")), "http://a.com/x");
/// assert_eq!(normalize("http://a.com/", None), "http://a.com/");
/// ```
pub fn normalize(long_url: &str, custom_suffix: Option<&str>) -> String {
    match custom_suffix {
        Some(suffix) if !suffix.is_empty() => format!(
            "{}/{}",
            long_url.trim_end_matches('/'),
            suffix.trim_start_matches('/')
        ),
        _ => long_url.to_string(),
    }
}

/// Derives the deterministic candidate key for a combined URL.
///
/// Same input, same key: the first [`KEY_LENGTH`] characters of the lowercase
/// hex MD5 digest.
pub fn derive_key(combined_url: &str) -> String {
    let digest = Md5::digest(combined_url.as_bytes());
    let mut key = hex::encode(digest);
    key.truncate(KEY_LENGTH);
    key
}

/// Draws `length` characters uniformly from `[A-Za-z0-9]`.
pub fn random_key<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}

/// Source of fallback keys used after a collision.
///
/// Injected into [`crate::application::services::LinkService`] so tests can
/// drive the collision path with a known sequence.
pub trait RandomSource: Send + Sync {
    fn random_key(&self, length: usize) -> String;
}

/// Thread-local CSPRNG from `rand`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn random_key(&self, length: usize) -> String {
        random_key(&mut rand::rng(), length)
    }
}

/// Reproducible source seeded from a `u64`.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn random_key(&self, length: usize) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        random_key(&mut *rng, length)
    }
}
