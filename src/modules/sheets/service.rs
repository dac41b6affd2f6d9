use crate::config::SheetsConfig;
use crate::di::{Container, Injectable};
use crate::error::Result;
use crate::modules::sheets::IdSheet;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Writes id sheets into the configured directory
pub struct SheetService {
    config: Arc<SheetsConfig>,
}

impl Injectable for SheetService {
    fn inject(container: &Container) -> Result<Self> {
        Ok(Self {
            config: container.resolve::<SheetsConfig>()?,
        })
    }
}

impl SheetService {
    pub fn new(config: SheetsConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Write `sheet` and return how long the write took
    ///
    /// Concurrent writes of the same file name are not coordinated; the last
    /// one to finish wins.
    pub async fn write(&self, sheet: &IdSheet) -> Result<Duration> {
        let path = self.config.dir.join(&sheet.filename);
        let start = Instant::now();

        self.simulate_delay().await;
        tokio::fs::write(&path, sheet.render()).await?;

        let elapsed = start.elapsed();
        tracing::info!(path = %path.display(), ids = sheet.ids.len(), ?elapsed, "sheet written");
        Ok(elapsed)
    }

    async fn simulate_delay(&self) {
        if self.config.await_delay {
            tokio::time::sleep(self.config.write_delay).await;
        } else {
            // Fire-and-forget: the write proceeds immediately.
            tracing::debug!(delay = ?self.config.write_delay, "write delay not awaited");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DemoError;

    fn config(dir: &std::path::Path) -> SheetsConfig {
        SheetsConfig {
            dir: dir.to_path_buf(),
            ..SheetsConfig::default()
        }
    }

    fn sheet(ids: Vec<i64>) -> IdSheet {
        IdSheet {
            filename: "out.csv".to_string(),
            ids,
        }
    }

    #[tokio::test]
    async fn write_creates_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let service = SheetService::new(config(dir.path()));

        service.write(&sheet(vec![1, 2, 3])).await.unwrap();

        let contents = std::fs::read_to_string(dir.path().join("out.csv")).unwrap();
        assert_eq!(contents, "id\n1\n2\n3");
    }

    #[tokio::test]
    async fn unawaited_delay_does_not_block_the_write() {
        let dir = tempfile::tempdir().unwrap();
        let service = SheetService::new(SheetsConfig {
            write_delay: Duration::from_secs(60),
            ..config(dir.path())
        });

        let elapsed = service.write(&sheet(vec![7])).await.unwrap();
        assert!(elapsed < Duration::from_secs(60));
    }

    #[tokio::test]
    async fn awaited_delay_is_included_in_elapsed_time() {
        let dir = tempfile::tempdir().unwrap();
        let service = SheetService::new(SheetsConfig {
            write_delay: Duration::from_millis(50),
            await_delay: true,
            ..config(dir.path())
        });

        let elapsed = service.write(&sheet(vec![7])).await.unwrap();
        assert!(elapsed >= Duration::from_millis(50));
        assert_eq!(
            std::fs::read_to_string(dir.path().join("out.csv")).unwrap(),
            "id\n7"
        );
    }

    #[tokio::test]
    async fn later_writes_replace_earlier_ones() {
        let dir = tempfile::tempdir().unwrap();
        let service = SheetService::new(config(dir.path()));

        service.write(&sheet(vec![1, 2, 3])).await.unwrap();
        service.write(&sheet(vec![9])).await.unwrap();

        let contents = std::fs::read_to_string(dir.path().join("out.csv")).unwrap();
        assert_eq!(contents, "id\n9");
    }

    #[tokio::test]
    async fn missing_directory_surfaces_as_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let service = SheetService::new(config(&dir.path().join("missing")));

        let err = service.write(&sheet(vec![1])).await.unwrap_err();
        assert!(matches!(err, DemoError::Io(_)));
    }

    #[test]
    fn inject_requires_sheets_config() {
        let container = Container::new();
        assert!(SheetService::inject(&container).is_err());
    }
}
