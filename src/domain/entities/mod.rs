//! # Domain Entities Module
//!
//! 저장소에 영속되는 핵심 엔티티를 정의합니다.
//! 리플렉션이나 메타데이터 없이 평범한 구조체와 `serde` 매핑만 사용합니다.

pub mod users;
