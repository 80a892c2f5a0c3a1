use crate::cache::{ObjectCache, create_cache};
use crate::models::users::requests::CreateUserRequest;
use crate::storage::Storage;
use crate::utils::pin::hash_pin;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
}

/// 生成随机登录 PIN
fn generate_random_pin(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"0123456789";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// 初始化默认操作员账号
/// 如果数据库中没有任何操作员，则创建一个默认的 operator 账号
async fn seed_operator(storage: &Arc<dyn Storage>) {
    // 检查是否已有操作员
    match storage.count_users().await {
        Ok(count) if count > 0 => {
            debug!(
                "Database already has {} operator(s), skipping operator seed",
                count
            );
            return;
        }
        Ok(_) => {
            info!("No operators found in database, creating default operator account...");
        }
        Err(e) => {
            warn!("Failed to count operators: {}, skipping operator seed", e);
            return;
        }
    }

    // 获取 PIN：优先从环境变量，否则生成随机 PIN
    let pin = std::env::var("TASKMASTER_OPERATOR_PIN").unwrap_or_else(|_| {
        let pin = generate_random_pin(6);
        warn!("==========================================================");
        warn!("  OPERATOR PIN NOT SET - USING GENERATED PIN");
        warn!("  Generated operator PIN: {}", pin);
        warn!("  Please save this PIN or set TASKMASTER_OPERATOR_PIN");
        warn!("==========================================================");
        pin
    });

    // 哈希 PIN
    let pin_hash = match hash_pin(&pin) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Failed to hash operator PIN: {}, skipping operator seed", e);
            return;
        }
    };

    // 创建操作员账号（存储层的 pin 字段接收的是哈希值）
    let operator_request = CreateUserRequest {
        username: "operator".to_string(),
        pin: pin_hash,
        name: "Operator".to_string(),
        email: "operator@localhost".to_string(),
    };

    match storage.create_user(operator_request).await {
        Ok(user) => {
            info!(
                "Default operator account created successfully (ID: {}, username: {})",
                user.id, user.username
            );
        }
        Err(e) => {
            warn!("Failed to create operator account: {}", e);
        }
    }
}

/// 准备服务器启动的上下文
/// 包括存储、缓存和默认账号播种
pub async fn prepare_server_startup() -> StartupContext {
    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    // 初始化默认操作员账号（如果需要）
    seed_operator(&storage).await;

    // 创建缓存实例
    let cache = create_cache().await.expect("Failed to create cache");
    warn!("Cache backend initialized");

    StartupContext { storage, cache }
}
