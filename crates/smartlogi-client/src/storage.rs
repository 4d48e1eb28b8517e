//! 토큰 영속 저장소.
//!
//! 토큰은 설정된 상수 키로 내구성 있는 키-값 저장소에 문자열 하나로
//! 저장됩니다. 플랫폼별 저장소(브라우저 localStorage 등)를 가진 임베더는
//! [`TokenStorage`]를 직접 구현합니다.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use thiserror::Error;
use tracing::debug;

use smartlogi_core::AuthConfig;

/// 토큰 저장 에러.
#[derive(Debug, Error)]
pub enum StorageError {
    /// 파일 IO 실패
    #[error("저장소 IO 에러: {0}")]
    Io(#[from] std::io::Error),

    /// 저장 파일 직렬화 실패
    #[error("저장소 직렬화 에러: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// 내구성 있는 클라이언트 측 키-값 토큰 저장소.
pub trait TokenStorage: Send + Sync {
    /// 원시 토큰 문자열 저장. 쓰기 시점에 검증하지 않습니다.
    fn persist(&self, token: &str) -> Result<(), StorageError>;

    /// 저장된 원시 토큰 문자열 반환, 없으면 `None`.
    fn retrieve(&self) -> Option<String>;

    /// 저장된 토큰 삭제. 토큰이 없어도 성공합니다.
    fn remove(&self) -> Result<(), StorageError>;
}

/// 메모리 기반 저장소.
///
/// 테스트 및 자체 영속화를 수행하는 임베더용.
pub struct MemoryTokenStore {
    key: String,
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl TokenStorage for MemoryTokenStore {
    fn persist(&self, token: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(self.key.clone(), token.to_string());
        Ok(())
    }

    fn retrieve(&self) -> Option<String> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(&self.key).cloned()
    }

    fn remove(&self) -> Result<(), StorageError> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.remove(&self.key);
        Ok(())
    }
}

/// JSON 파일 기반 저장소.
///
/// 프로세스 재시작 간 토큰을 유지하는 내구 저장소입니다. 파일은 설정된
/// 키로 인덱싱되는 단일 JSON 맵입니다.
pub struct FileTokenStore {
    key: String,
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            path: path.into(),
        }
    }

    /// 인증 설정에서 저장소 생성.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(&config.token_file, &config.token_key)
    }

    /// 저장 파일 읽기. 파일이 없거나 손상되었으면 빈 맵 (부재로 간주).
    fn read_entries(&self) -> HashMap<String, String> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(_) => return HashMap::new(),
        };

        match serde_json::from_slice(&bytes) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(path = %self.path.display(), "손상된 토큰 저장 파일 무시: {}", e);
                HashMap::new()
            }
        }
    }

    fn write_entries(&self, entries: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let bytes = serde_json::to_vec_pretty(entries)?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }
}

impl TokenStorage for FileTokenStore {
    fn persist(&self, token: &str) -> Result<(), StorageError> {
        let mut entries = self.read_entries();
        entries.insert(self.key.clone(), token.to_string());
        self.write_entries(&entries)
    }

    fn retrieve(&self) -> Option<String> {
        self.read_entries().get(&self.key).cloned()
    }

    fn remove(&self) -> Result<(), StorageError> {
        let mut entries = self.read_entries();
        if entries.remove(&self.key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}
