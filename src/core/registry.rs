//! # Service Registry
//!
//! 애플리케이션 시작 시 생성한 공유 인스턴스를 타입별로 보관하는 전역 컨테이너입니다.
//! 자동 스캔 없이 `main`에서 명시적으로 등록한 인스턴스만 제공합니다.
//!
//! ## 동작 방식
//!
//! ```text
//! main()
//!   ├─ 저장소 선택 (Mongo / In-memory)
//!   ├─ UserService::new(repo, id_generator)
//!   └─ ServiceLocator::set(Arc<UserService>)
//!
//! handler
//!   └─ UserService::instance()  ──▶ ServiceLocator::get::<UserService>()
//! ```
//!
//! 등록되지 않은 타입을 요청하면 패닉 대신 `AppError::InternalError`를 반환합니다.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use once_cell::sync::Lazy;
use crate::core::errors::{AppError, AppResult};

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

/// 타입 기반 싱글톤 컨테이너
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
        }
    }

    /// 인스턴스를 등록합니다. 같은 타입이 이미 있으면 교체합니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_name = Self::clean_type_name(std::any::type_name::<T>());
        log::info!("📦 Registering: {}", type_name);

        let mut instances = LOCATOR
            .instances
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        instances.insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    /// 등록된 인스턴스를 반환합니다.
    pub fn get<T: 'static + Send + Sync>() -> AppResult<Arc<T>> {
        Self::try_get::<T>().ok_or_else(|| {
            AppError::InternalError(format!(
                "등록되지 않은 서비스입니다: {}",
                Self::clean_type_name(std::any::type_name::<T>())
            ))
        })
    }

    /// 등록 여부를 확인하며 인스턴스를 반환합니다.
    pub fn try_get<T: 'static + Send + Sync>() -> Option<Arc<T>> {
        let instances = LOCATOR
            .instances
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        instances
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|instance| instance.downcast::<T>().ok())
    }

    fn clean_type_name(type_name: &str) -> &str {
        type_name.rsplit("::").next().unwrap_or(type_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RegisteredThing(u32);
    struct NeverRegistered;

    #[test]
    fn test_set_then_get_returns_same_instance() {
        let thing = Arc::new(RegisteredThing(7));
        ServiceLocator::set(thing.clone());

        let found = ServiceLocator::get::<RegisteredThing>().unwrap();
        assert_eq!(found.0, 7);
        assert!(Arc::ptr_eq(&thing, &found));
    }

    #[test]
    fn test_missing_type_is_an_error() {
        assert!(ServiceLocator::try_get::<NeverRegistered>().is_none());

        match ServiceLocator::get::<NeverRegistered>() {
            Err(AppError::InternalError(msg)) => assert!(msg.contains("NeverRegistered")),
            _ => panic!("Expected InternalError"),
        }
    }
}
