//! Shared naming for stored objects and their public URLs.

/// Object name for an upload: `<prefix>-<owner_id>-<epoch_millis>`.
///
/// Two uploads by the same owner in the same category only differ by the
/// timestamp, so names are unique as long as the calls are at least one
/// millisecond apart.
pub fn object_name(prefix: &str, owner_id: &str, epoch_millis: i64) -> String {
    format!("{}-{}-{}", prefix, owner_id, epoch_millis)
}

/// Public gateway URL for a content id: `<gateway_base>/ipfs/<content_id>`.
pub fn public_url(gateway_base: &str, content_id: &str) -> String {
    format!("{}/ipfs/{}", gateway_base.trim_end_matches('/'), content_id)
}
