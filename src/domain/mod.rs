//! # Domain Layer Module
//!
//! 도메인 계층은 회원가입 요청의 검증 규칙과 사용자 레코드의 형태를 담당합니다.
//! I/O가 전혀 없으며, 서비스 계층과 저장소 계층이 이 타입들을 공유합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── validation   - 필드 단위 검증 규칙 엔진
//! ├── dto          - 요청/응답 데이터 전송 객체
//! └── entities     - 영속 엔티티 (User)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```

pub mod validation;
pub mod entities;
pub mod dto;

pub use entities::*;
pub use dto::*;
