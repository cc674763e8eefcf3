use std::path::Path;

use anyhow::Context;
use jobhive_services::FileUpload;

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Media type for a file extension, in the spelling the upload policies use.
pub fn guess_content_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "pdf" => Some("application/pdf"),
        _ => None,
    }
}

/// Read a file from disk. An explicit `content_type` wins over the extension.
pub async fn read_upload(path: &Path, content_type: Option<String>) -> anyhow::Result<FileUpload> {
    let content_type = match content_type {
        Some(ct) => ct,
        None => guess_content_type(path)
            .map(str::to_string)
            .with_context(|| {
                format!(
                    "Cannot guess content type of {}; pass --content-type",
                    path.display()
                )
            })?,
    };

    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    Ok(FileUpload::new(bytes, content_type))
}
