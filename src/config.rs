//! Конфигурация сервера
//!
//! Настройки загружаются из переменных окружения или .env файла
//! поверх значений по умолчанию.

use serde::{Deserialize, Serialize};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Главная структура конфигурации приложения
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Настройки HTTP сервера
    pub server: ServerConfig,
}

/// Определяет на каком адресе и порту будет работать сервер.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// "0.0.0.0" означает слушать на всех сетевых интерфейсах
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Загружает конфигурацию
    ///
    /// 1. Пытается загрузить .env файл (если есть)
    /// 2. Берет значения по умолчанию
    /// 3. Перезаписывает их значениями из переменных окружения
    pub fn load() -> anyhow::Result<Self> {
        match dotenv::dotenv() {
            Ok(path) => {
                tracing::info!("Loaded .env file from: {:?}", path);
            }
            // Файл не найден - не критично, работаем с переменными окружения
            Err(dotenv::Error::Io(_)) => {
                tracing::debug!(".env file not found, using environment variables");
            }
            Err(e) => {
                tracing::warn!("Failed to load .env file: {} (will use environment variables)", e);
            }
        }

        let mut cfg = Self::default();
        cfg.apply_overrides(|name| std::env::var(name).ok());
        Ok(cfg)
    }

    /// Применяет переопределения из источника переменных (окружение или тестовая таблица)
    fn apply_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = var("SERVER_HOST") {
            if !host.trim().is_empty() {
                self.server.host = host.trim().to_string();
            }
        }
        if let Some(port) = var("SERVER_PORT") {
            self.server.port = port.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid SERVER_PORT '{}', falling back to {}", port, DEFAULT_PORT);
                DEFAULT_PORT
            });
        }
    }

    /// Адрес для прослушивания в формате "IP:PORT"
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn overrides(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let mut cfg = Config::default();
        cfg.apply_overrides(|name| vars.get(name).cloned());
        cfg
    }

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_env_overrides() {
        let cfg = overrides(&[("SERVER_HOST", "127.0.0.1"), ("SERVER_PORT", "9000")]);
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 9000);
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let cfg = overrides(&[("SERVER_PORT", "not-a-port")]);
        assert_eq!(cfg.server.port, 8080);
    }
}
