//! 내비게이션 경계.
//!
//! 가드와 세션 매니저는 어디로 이동해야 하는지만 결정합니다. 실제 이동은
//! [`Navigator`]를 구현한 외부 라우터가 수행합니다.

use std::sync::Mutex;

/// 내비게이션 대상 (경로 + 쿼리 파라미터).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTarget {
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl NavigationTarget {
    /// 쿼리 없는 대상 생성.
    pub fn to(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// 쿼리 파라미터 추가.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

impl std::fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path)?;
        for (i, (key, value)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{}{}={}", sep, key, value)?;
        }
        Ok(())
    }
}

/// 외부 라우터 경계.
pub trait Navigator: Send + Sync {
    /// 주어진 대상으로 이동을 요청합니다.
    fn navigate(&self, target: NavigationTarget);
}

/// 내비게이션 요청을 기록만 하는 구현.
///
/// 테스트 및 헤드리스 환경용.
#[derive(Default)]
pub struct RecordingNavigator {
    history: Mutex<Vec<NavigationTarget>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 기록된 내비게이션 목록 반환.
    pub fn history(&self) -> Vec<NavigationTarget> {
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// 마지막 내비게이션 반환.
    pub fn last(&self) -> Option<NavigationTarget> {
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, target: NavigationTarget) {
        let mut history = self.history.lock().unwrap_or_else(|e| e.into_inner());
        history.push(target);
    }
}
