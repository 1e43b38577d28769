//! Password hashing
//!
//! Both operations run on tokio's blocking pool.

use crate::backend::error::ApiResult;

pub async fn hash_password(password: &str, cost: u32) -> ApiResult<String> {
    let password = password.to_owned();
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
    Ok(hash)
}

/// `Ok(false)` on mismatch; `Err` only for a corrupt stored hash
pub async fn verify_password(password: &str, hash: &str) -> ApiResult<bool> {
    let password = password.to_owned();
    let hash = hash.to_owned();
    let valid = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;
    Ok(valid)
}
