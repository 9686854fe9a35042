//! # API サーバー設定
//!
//! 環境変数から API サーバーの設定を読み込む。
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `FITNESS_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `FITNESS_PORT` | No | ポート番号（デフォルト: `3010`） |
//! | `FITNESS_STATIC_DIR` | No | 静的ファイルのディレクトリ（デフォルト: `static`） |

use std::{env, path::PathBuf};

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3010;
const DEFAULT_STATIC_DIR: &str = "static";

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("FITNESS_PORT は有効なポート番号である必要があります: {0:?}")]
    InvalidPort(String),
}

/// API サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// バインドアドレス
    pub host:       String,
    /// ポート番号
    pub port:       u16,
    /// 静的ファイルのディレクトリ
    pub static_dir: PathBuf,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host:       DEFAULT_HOST.to_string(),
            port:       DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl ApiConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意のキー検索関数から設定を読み込む
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("FITNESS_PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: lookup("FITNESS_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            static_dir: lookup("FITNESS_STATIC_DIR")
                .map_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR), PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_未設定ならデフォルト値を使う() {
        let config = ApiConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.port, 3010);
    }

    #[test]
    fn test_環境変数の値で上書きできる() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            ("FITNESS_HOST", "127.0.0.1"),
            ("FITNESS_PORT", "8080"),
            ("FITNESS_STATIC_DIR", "/srv/public"),
        ]))
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.static_dir, PathBuf::from("/srv/public"));
    }

    #[test]
    fn test_不正なポート番号はエラーになる() {
        let result = ApiConfig::from_lookup(lookup_from(&[("FITNESS_PORT", "http")]));

        assert_eq!(result, Err(ConfigError::InvalidPort("http".to_string())));
    }
}
