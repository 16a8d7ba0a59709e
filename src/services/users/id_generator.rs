//! 사용자 레코드 ID 생성기
//!
//! 레코드 ID는 저장 전에 부여됩니다. 생성 전략은 트레이트로 분리되어 있어
//! 테스트에서는 결정적인 가짜 생성기로 교체할 수 있습니다.

use uuid::Uuid;

/// 레코드 ID 생성 전략
pub trait IdGenerator: Send + Sync {
    /// 비어 있지 않은 새 ID를 반환합니다.
    fn next_id(&self) -> String;
}

/// UUID v4 기반 ID 생성기 (하이픈 포함 36자)
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
