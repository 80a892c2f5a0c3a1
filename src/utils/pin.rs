use crate::config::AppConfig;
use crate::errors::TaskmasterError;
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};

/// 哈希登录 PIN
pub fn hash_pin(pin: &str) -> Result<String, TaskmasterError> {
    let config = AppConfig::get();
    let params = Params::new(
        config.argon2.memory_cost,
        config.argon2.time_cost,
        config.argon2.parallelism,
        None,
    )
    .map_err(|e| TaskmasterError::validation(format!("Argon2 参数错误: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2
        .hash_password(pin.as_bytes(), &salt)
        .map_err(|e| TaskmasterError::validation(format!("PIN 哈希失败: {e}")))?;
    Ok(hash.to_string())
}

/// 验证登录 PIN
pub fn verify_pin(pin: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed_hash) => Argon2::default()
            .verify_password(pin.as_bytes(), &parsed_hash)
            .is_ok(),
        Err(_) => false,
    }
}
