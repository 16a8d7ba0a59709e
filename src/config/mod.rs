//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 한곳에서 관리합니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export HTTP_WORKERS="4"
//!
//! # 저장소 (mongo | memory)
//! export USER_STORE="mongo"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="estore_dev"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//!
//! # CORS
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000,http://127.0.0.1:3000"
//! ```
//!
//! `PROFILE=dev|prod`에 따라 `.env.dev` / `.env.prod` 파일이 먼저 로드됩니다.

pub mod data_config;

pub use data_config::*;
