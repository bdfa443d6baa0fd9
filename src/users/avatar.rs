use md5::{Digest, Md5};

/// Fixed gravatar parameters: 200px image, pg rating, "mystery man"
/// fallback icon.
const AVATAR_QUERY: &str = "s=200&r=pg&d=mm";

/// Derive the gravatar URL for an email. Pure and deterministic: the email
/// is trimmed and lowercased before hashing, so equivalent addresses map to
/// the same avatar.
pub fn gravatar_url(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    let digest = Md5::digest(normalized.as_bytes());
    format!(
        "https://www.gravatar.com/avatar/{}?{}",
        hex::encode(digest),
        AVATAR_QUERY
    )
}
