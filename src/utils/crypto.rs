//! Криптографические утилиты
//!
//! Статическая таблица алгоритмов хеширования и вычисление HMAC.
//! Имена алгоритмов совпадают с общепринятыми (md5, sha256, sha3_256, blake2b и т.д.).

use blake2::{Blake2b512, Blake2s256};
use hmac::digest::{InvalidLength, KeyInit};
use hmac::{Hmac, Mac, SimpleHmac};
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};

/// Алгоритм по умолчанию, если клиент его не указал
pub const DEFAULT_ALGORITHM: &str = "sha256";

/// Гарантированно доступные алгоритмы (отсортированы, без повторов)
pub const GUARANTEED_ALGORITHMS: &[&str] = &[
    "blake2b",
    "blake2s",
    "md5",
    "sha1",
    "sha224",
    "sha256",
    "sha384",
    "sha3_224",
    "sha3_256",
    "sha3_384",
    "sha3_512",
    "sha512",
    "shake_128",
    "shake_256",
];

/// Платформенные алгоритмы: считаются "доступными", но реализации для HMAC у нас нет
pub const PLATFORM_ALGORITHMS: &[&str] = &["md5-sha1", "ripemd160", "sha512_224", "sha512_256", "sm3"];

/// Проверяет, входит ли имя в множество доступных алгоритмов
pub fn is_available(name: &str) -> bool {
    GUARANTEED_ALGORITHMS.contains(&name) || PLATFORM_ALGORITHMS.contains(&name)
}

/// Хеш-функция, которую можно использовать внутри HMAC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    Blake2b,
    Blake2s,
}

impl HashAlgorithm {
    /// Находит реализацию по имени в нижнем регистре.
    ///
    /// shake_128/shake_256 не имеют фиксированного размера дайджеста,
    /// поэтому для HMAC не подходят и здесь не находятся.
    pub fn from_name(name: &str) -> Option<Self> {
        let algorithm = match name {
            "md5" => Self::Md5,
            "sha1" => Self::Sha1,
            "sha224" => Self::Sha224,
            "sha256" => Self::Sha256,
            "sha384" => Self::Sha384,
            "sha512" => Self::Sha512,
            "sha3_224" => Self::Sha3_224,
            "sha3_256" => Self::Sha3_256,
            "sha3_384" => Self::Sha3_384,
            "sha3_512" => Self::Sha3_512,
            "blake2b" => Self::Blake2b,
            "blake2s" => Self::Blake2s,
            _ => return None,
        };
        Some(algorithm)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha224 => "sha224",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
            Self::Sha3_224 => "sha3_224",
            Self::Sha3_256 => "sha3_256",
            Self::Sha3_384 => "sha3_384",
            Self::Sha3_512 => "sha3_512",
            Self::Blake2b => "blake2b",
            Self::Blake2s => "blake2s",
        }
    }

    /// Размер дайджеста в байтах
    pub fn digest_size(&self) -> usize {
        match self {
            Self::Md5 => <Md5 as Digest>::output_size(),
            Self::Sha1 => <Sha1 as Digest>::output_size(),
            Self::Sha224 => <Sha224 as Digest>::output_size(),
            Self::Sha256 => <Sha256 as Digest>::output_size(),
            Self::Sha384 => <Sha384 as Digest>::output_size(),
            Self::Sha512 => <Sha512 as Digest>::output_size(),
            Self::Sha3_224 => <Sha3_224 as Digest>::output_size(),
            Self::Sha3_256 => <Sha3_256 as Digest>::output_size(),
            Self::Sha3_384 => <Sha3_384 as Digest>::output_size(),
            Self::Sha3_512 => <Sha3_512 as Digest>::output_size(),
            Self::Blake2b => <Blake2b512 as Digest>::output_size(),
            Self::Blake2s => <Blake2s256 as Digest>::output_size(),
        }
    }

    /// Вычисляет HMAC и возвращает его в виде hex-строки в нижнем регистре
    pub fn sign_hex(&self, key: &[u8], message: &[u8]) -> Result<String, InvalidLength> {
        match self {
            Self::Md5 => mac_hex::<Hmac<Md5>>(key, message),
            Self::Sha1 => mac_hex::<Hmac<Sha1>>(key, message),
            Self::Sha224 => mac_hex::<Hmac<Sha224>>(key, message),
            Self::Sha256 => mac_hex::<Hmac<Sha256>>(key, message),
            Self::Sha384 => mac_hex::<Hmac<Sha384>>(key, message),
            Self::Sha512 => mac_hex::<Hmac<Sha512>>(key, message),
            Self::Sha3_224 => mac_hex::<Hmac<Sha3_224>>(key, message),
            Self::Sha3_256 => mac_hex::<Hmac<Sha3_256>>(key, message),
            Self::Sha3_384 => mac_hex::<Hmac<Sha3_384>>(key, message),
            Self::Sha3_512 => mac_hex::<Hmac<Sha3_512>>(key, message),
            // BLAKE2 не отдает блочный API, поэтому через SimpleHmac
            Self::Blake2b => mac_hex::<SimpleHmac<Blake2b512>>(key, message),
            Self::Blake2s => mac_hex::<SimpleHmac<Blake2s256>>(key, message),
        }
    }
}

fn mac_hex<M: Mac + KeyInit>(key: &[u8], message: &[u8]) -> Result<String, InvalidLength> {
    let mut mac = <M as Mac>::new_from_slice(key)?;
    mac.update(message);
    Ok(hex::encode(mac.finalize().into_bytes()))
}
