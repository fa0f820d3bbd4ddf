//! Сервис генерации HMAC подписей

use thiserror::Error;
use tracing::{debug, warn};

use crate::utils::crypto::{self, HashAlgorithm, DEFAULT_ALGORITHM, GUARANTEED_ALGORITHMS};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HashingError {
    /// Имени нет в множестве доступных алгоритмов
    #[error("Algorithm '{0}' is not supported.")]
    UnsupportedAlgorithm(String),
    /// Имя доступно, но реализации для HMAC нет
    #[error("Algorithm '{0}' was not found in the hashing library.")]
    AlgorithmNotFound(String),
    #[error("HMAC key rejected for algorithm '{0}'")]
    InvalidKey(String),
}

/// Stateless: один экземпляр обслуживает все запросы
#[derive(Debug, Default)]
pub struct HashingService;

impl HashingService {
    pub fn new() -> Self {
        Self
    }

    /// Гарантированные алгоритмы в алфавитном порядке
    pub fn algorithms(&self) -> Vec<String> {
        let mut algorithms: Vec<String> =
            GUARANTEED_ALGORITHMS.iter().map(|s| s.to_string()).collect();
        algorithms.sort();
        algorithms.dedup();
        algorithms
    }

    /// Приводит имя к нижнему регистру и находит реализацию.
    /// `None` означает алгоритм по умолчанию (sha256).
    pub fn resolve(&self, algorithm: Option<&str>) -> Result<HashAlgorithm, HashingError> {
        let name = algorithm.unwrap_or(DEFAULT_ALGORITHM).to_lowercase();

        if !crypto::is_available(&name) {
            warn!("Unsupported algorithm requested: {}", name);
            return Err(HashingError::UnsupportedAlgorithm(name));
        }

        HashAlgorithm::from_name(&name).ok_or_else(|| {
            warn!("Algorithm is available but has no HMAC implementation: {}", name);
            HashingError::AlgorithmNotFound(name)
        })
    }

    /// Вычисляет HMAC(key, message) и возвращает hex-строку.
    /// Сообщение и ключ кодируются как UTF-8.
    pub fn sign(
        &self,
        message: &str,
        key: &str,
        algorithm: Option<&str>,
    ) -> Result<String, HashingError> {
        let algorithm = self.resolve(algorithm)?;

        debug!(
            "Signing {} bytes with HMAC-{} ({}-byte digest)",
            message.len(),
            algorithm.name(),
            algorithm.digest_size()
        );

        algorithm
            .sign_hex(key.as_bytes(), message.as_bytes())
            .map_err(|_| HashingError::InvalidKey(algorithm.name().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{HashingError, HashingService};
    use tokio_test::{assert_err, assert_ok};

    const EXPECTED_SHA256: &str =
        "fcfaffa7fef86515c7beb6b62d779fa4ccf092f2e61c164376054271252821ff";

    #[test]
    fn test_algorithms_sorted_with_required_names() {
        let service = HashingService::new();
        let algorithms = service.algorithms();

        let mut sorted = algorithms.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(algorithms, sorted);

        for name in ["md5", "sha1", "sha224", "sha256", "sha384", "sha512"] {
            assert!(algorithms.iter().any(|a| a == name), "missing {name}");
        }
    }

    #[test]
    fn test_sign_known_vector() {
        let service = HashingService::new();
        let signature = assert_ok!(service.sign("Hello, World!", "secret", Some("sha256")));
        assert_eq!(signature, EXPECTED_SHA256);
    }

    #[test]
    fn test_default_algorithm_is_sha256() {
        let service = HashingService::new();
        let signature = assert_ok!(service.sign("Hello, World!", "secret", None));
        assert_eq!(signature, EXPECTED_SHA256);
    }

    #[test]
    fn test_algorithm_name_is_case_insensitive() {
        let service = HashingService::new();
        let upper = assert_ok!(service.sign("Hello, World!", "secret", Some("SHA256")));
        let mixed = assert_ok!(service.sign("Hello, World!", "secret", Some("Sha256")));
        assert_eq!(upper, EXPECTED_SHA256);
        assert_eq!(mixed, EXPECTED_SHA256);
    }

    #[test]
    fn test_sign_is_deterministic() {
        let service = HashingService::new();
        let first = service.sign("payload", "key", Some("sha512"));
        let second = service.sign("payload", "key", Some("sha512"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_signature_length_matches_digest_size() {
        let service = HashingService::new();
        for name in service.algorithms() {
            match service.resolve(Some(&name)) {
                Ok(algorithm) => {
                    let signature = assert_ok!(service.sign("message", "key", Some(&name)));
                    assert_eq!(signature.len(), 2 * algorithm.digest_size(), "{name}");
                    assert!(signature
                        .chars()
                        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
                }
                Err(e) => assert_eq!(e, HashingError::AlgorithmNotFound(name.clone())),
            }
        }
    }

    #[test]
    fn test_unsupported_algorithm() {
        let service = HashingService::new();
        let err = assert_err!(service.sign("message", "key", Some("SHA999")));
        assert_eq!(err, HashingError::UnsupportedAlgorithm("sha999".to_string()));
        assert_eq!(err.to_string(), "Algorithm 'sha999' is not supported.");
    }

    #[test]
    fn test_available_but_unresolvable_algorithm() {
        let service = HashingService::new();

        let err = assert_err!(service.sign("message", "key", Some("sha512_256")));
        assert_eq!(err, HashingError::AlgorithmNotFound("sha512_256".to_string()));

        let err = assert_err!(service.sign("message", "key", Some("shake_128")));
        assert_eq!(
            err.to_string(),
            "Algorithm 'shake_128' was not found in the hashing library."
        );
    }
}
