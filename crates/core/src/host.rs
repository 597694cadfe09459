//! Compose hosts that stand in for a live mail client.

use crate::context::{ComposeDetails, ComposeHost, ComposeUpdate};
use crate::{Error, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;
use tracing::debug;

/// In-process compose state.
///
/// Counts host calls and can be told to reject reads or writes, which makes it
/// the host of choice for exercising the generator without a mail client.
#[derive(Debug, Default)]
pub struct MemoryComposeHost {
    details: Mutex<ComposeDetails>,
    reads: AtomicUsize,
    writes: AtomicUsize,
    fail_reads: bool,
    writes_allowed: Option<usize>,
}

impl MemoryComposeHost {
    pub fn new(details: ComposeDetails) -> Self {
        Self {
            details: Mutex::new(details),
            ..Self::default()
        }
    }

    /// Reject every `get_compose_details` call.
    pub fn fail_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Reject every `set_compose_details` call.
    pub fn fail_writes(self) -> Self {
        self.fail_writes_after(0)
    }

    /// Accept the first `allowed` writes, then reject the rest.
    pub fn fail_writes_after(mut self, allowed: usize) -> Self {
        self.writes_allowed = Some(allowed);
        self
    }

    /// Current compose state.
    pub async fn snapshot(&self) -> ComposeDetails {
        self.details.lock().await.clone()
    }

    /// Number of read calls received, including rejected ones.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Number of write calls received, including rejected ones.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ComposeHost for MemoryComposeHost {
    async fn get_compose_details(&self) -> Result<ComposeDetails> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads {
            return Err(Error::HostCall("compose window is not available".to_string()));
        }
        Ok(self.details.lock().await.clone())
    }

    async fn set_compose_details(&self, update: ComposeUpdate) -> Result<()> {
        let previous = self.writes.fetch_add(1, Ordering::SeqCst);
        if self.writes_allowed.is_some_and(|allowed| previous >= allowed) {
            return Err(Error::HostCall("compose window rejected the update".to_string()));
        }
        self.details.lock().await.apply(update);
        Ok(())
    }
}

/// On-disk format of a draft file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DraftFormat {
    Json,
    Yaml,
}

impl DraftFormat {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// A draft file playing the role of the host compose window.
///
/// JSON by default; `.yaml`/`.yml` files are read and written as YAML. Every
/// call goes to disk, so two hosts on the same file see each other's writes
/// and the last writer wins.
#[derive(Debug, Clone)]
pub struct DraftFileHost {
    path: PathBuf,
    format: DraftFormat,
}

impl DraftFileHost {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = DraftFormat::from_path(&path);
        Self { path, format }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<ComposeDetails> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::HostCall(format!(
                    "no active compose draft at {}",
                    self.path.display()
                )));
            }
            Err(e) => return Err(e.into()),
        };

        let details = match self.format {
            DraftFormat::Json => serde_json::from_str(&content)?,
            DraftFormat::Yaml => serde_yaml::from_str(&content)?,
        };
        Ok(details)
    }

    async fn store(&self, details: &ComposeDetails) -> Result<()> {
        let content = match self.format {
            DraftFormat::Json => serde_json::to_string_pretty(details)?,
            DraftFormat::Yaml => serde_yaml::to_string(details)?,
        };
        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl ComposeHost for DraftFileHost {
    async fn get_compose_details(&self) -> Result<ComposeDetails> {
        debug!("Loading draft {:?}", self.path);
        self.load().await
    }

    async fn set_compose_details(&self, update: ComposeUpdate) -> Result<()> {
        let mut details = self.load().await?;
        details.apply(update);
        debug!("Saving draft {:?}", self.path);
        self.store(&details).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn memory_host_counts_calls() {
        let host = MemoryComposeHost::new(ComposeDetails::with_subject("a"));
        host.get_compose_details().await.unwrap();
        host.set_compose_details(ComposeUpdate::subject("b")).await.unwrap();

        assert_eq!(host.reads(), 1);
        assert_eq!(host.writes(), 1);
        assert_eq!(host.snapshot().await.subject, "b");
    }

    #[tokio::test]
    async fn json_draft_preserves_unknown_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("draft.json");
        std::fs::write(
            &path,
            r#"{"subject":"Hi","body":"text","to":["x@example.com"],"priority":"high"}"#,
        )
        .unwrap();

        let host = DraftFileHost::new(&path);
        host.set_compose_details(ComposeUpdate::subject("[1] Hi"))
            .await
            .unwrap();

        let details = host.get_compose_details().await.unwrap();
        assert_eq!(details.subject, "[1] Hi");
        assert_eq!(details.body, "text");
        assert_eq!(details.to, vec!["x@example.com".to_string()]);
        assert_eq!(details.extra["priority"], "high");
    }

    #[tokio::test]
    async fn yaml_draft_is_written_as_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("draft.yaml");
        std::fs::write(&path, "subject: Status\nbody: ''\n").unwrap();

        let host = DraftFileHost::new(&path);
        host.set_compose_details(ComposeUpdate::body("Reference number: 1\n"))
            .await
            .unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(!raw.trim_start().starts_with('{'));
        let details: ComposeDetails = serde_yaml::from_str(&raw).unwrap();
        assert_eq!(details.subject, "Status");
        assert_eq!(details.body, "Reference number: 1\n");
    }

    #[tokio::test]
    async fn missing_draft_is_a_host_failure() {
        let dir = TempDir::new().unwrap();
        let host = DraftFileHost::new(dir.path().join("absent.json"));

        let err = host.get_compose_details().await.unwrap_err();
        assert!(matches!(err, Error::HostCall(_)));

        let err = host
            .set_compose_details(ComposeUpdate::subject("x"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::HostCall(_)));
        assert!(!host.path().exists());
    }

    #[tokio::test]
    async fn interleaved_writers_last_one_wins() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("draft.json");
        std::fs::write(&path, r#"{"subject":"Report"}"#).unwrap();

        let first = DraftFileHost::new(&path);
        let second = DraftFileHost::new(&path);

        let seen_by_first = first.get_compose_details().await.unwrap();
        let seen_by_second = second.get_compose_details().await.unwrap();

        first
            .set_compose_details(ComposeUpdate::subject(format!(
                "[A-1] {}",
                seen_by_first.subject
            )))
            .await
            .unwrap();
        second
            .set_compose_details(ComposeUpdate::subject(format!(
                "[B-2] {}",
                seen_by_second.subject
            )))
            .await
            .unwrap();

        let on_disk = DraftFileHost::new(&path).get_compose_details().await.unwrap();
        assert_eq!(on_disk.subject, "[B-2] Report");
        assert!(!on_disk.subject.contains("[A-1]"));
    }

    #[tokio::test]
    async fn memory_host_write_budget() {
        let host = MemoryComposeHost::new(ComposeDetails::default()).fail_writes_after(1);

        host.set_compose_details(ComposeUpdate::subject("kept")).await.unwrap();
        let err = host
            .set_compose_details(ComposeUpdate::body("lost"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::HostCall(_)));
        assert_eq!(host.writes(), 2);
        let details = host.snapshot().await;
        assert_eq!(details.subject, "kept");
        assert_eq!(details.body, "");
    }
}
