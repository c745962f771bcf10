//! bcrypt 비밀번호 해싱
//!
//! 호출마다 새 솔트를 사용하고, cost는 [`PasswordConfig`]에서 정해집니다.

use crate::config::PasswordConfig;
use crate::errors::{AppResult, ErrorContext};

#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn from_config(config: &PasswordConfig) -> Self {
        Self::new(config.bcrypt_cost)
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// 평문 비밀번호를 해싱합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - bcrypt 내부 실패 (잘못된 cost 등)
    pub fn hash(&self, plaintext: &str) -> AppResult<String> {
        let hash_start = std::time::Instant::now();
        let digest = bcrypt::hash(plaintext, self.cost).with_context(|| "비밀번호 해싱 실패".to_string())?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());
        Ok(digest)
    }

    /// 해시와 평문이 일치하는지 확인합니다.
    ///
    /// 잘못된 형식의 해시는 불일치로 처리하며 에러를 내지 않습니다.
    pub fn verify(&self, digest: &str, plaintext: &str) -> bool {
        bcrypt::verify(plaintext, digest).unwrap_or(false)
    }
}
