//! eStore 사용자 서비스 백엔드
//!
//! 회원가입 요청을 검증하고 사용자 레코드를 생성하는 REST 서비스입니다.
//! 요청의 모든 필드 규칙을 한 번에 평가하여, 실패한 필드를 빠짐없이
//! `{ field, message }` 목록으로 돌려줍니다.
//!
//! # Features
//!
//! - **필드 검증**: 선언적 규칙 테이블 기반, 실패 필드 전체 보고
//! - **사용자 생성**: 검증 통과 요청에 새 ID를 부여하고 저장
//! - **저장소 선택**: MongoDB 또는 메모리 저장소 (`USER_STORE`)
//! - **Rate Limiting / CORS**: actix-governor, actix-cors
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증, ID 부여
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 레코드 저장
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB / 메모리 │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use estore_user_service::services::users::UserService;
//!
//! let user_service = UserService::instance()?;
//! let response = user_service.create_user(request).await?;
//! println!("created {}", response.user.id);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
