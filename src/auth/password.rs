use anyhow::Context;

pub const BCRYPT_COST: u32 = 12;

/// Hash on the blocking pool; a cost-12 round takes hundreds of milliseconds and
/// must not occupy an async worker thread.
pub async fn hash_password(plain: &str) -> anyhow::Result<String> {
    let plain = plain.to_owned();
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(plain, BCRYPT_COST))
        .await
        .context("hash task aborted")??;
    Ok(hash)
}

pub async fn verify_password(plain: &str, hash: &str) -> anyhow::Result<bool> {
    let plain = plain.to_owned();
    let hash = hash.to_owned();
    let ok = tokio::task::spawn_blocking(move || bcrypt::verify(plain, &hash))
        .await
        .context("verify task aborted")??;
    Ok(ok)
}
