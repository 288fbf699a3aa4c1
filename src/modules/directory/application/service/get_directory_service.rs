use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::directory::application::domain::entities::DirectoryEntry;
use crate::modules::directory::application::ports::incoming::use_cases::{
    GetDirectoryError, GetDirectoryUseCase,
};
use crate::modules::directory::application::ports::outgoing::VcDirectorySource;
use crate::modules::email_gate::application::domain::entities::DIRECTORY_SOURCE;
use crate::modules::email_gate::application::ports::outgoing::EmailSubmissionRepository;
use crate::shared::email::normalize_email;

pub struct GetDirectoryService<S>
where
    S: VcDirectorySource,
{
    source: S,
    submissions: Arc<dyn EmailSubmissionRepository + Send + Sync>,
}

impl<S> GetDirectoryService<S>
where
    S: VcDirectorySource,
{
    pub fn new(source: S, submissions: Arc<dyn EmailSubmissionRepository + Send + Sync>) -> Self {
        Self {
            source,
            submissions,
        }
    }
}

#[async_trait]
impl<S> GetDirectoryUseCase for GetDirectoryService<S>
where
    S: VcDirectorySource + Send + Sync,
{
    async fn execute(&self, email: &str) -> Result<Vec<DirectoryEntry>, GetDirectoryError> {
        let email = normalize_email(email).map_err(GetDirectoryError::InvalidEmail)?;

        let has_access = self
            .submissions
            .exists(&email, DIRECTORY_SOURCE)
            .await
            .map_err(|e| GetDirectoryError::RepositoryError(e.to_string()))?;
        if !has_access {
            tracing::warn!("Directory requested without a submitted email");
            return Err(GetDirectoryError::EmailNotSubmitted);
        }

        self.source
            .fetch_all()
            .await
            .map_err(|e| GetDirectoryError::Unavailable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::mock_ports::{MockDirectorySource, MockEmailSubmissionRepository};
    use std::io;
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_denied_request_keeps_address_out_of_logs() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let source = MockDirectorySource::with_names(&["Vera Capital"]);
        let service =
            GetDirectoryService::new(source, Arc::new(MockEmailSubmissionRepository::default()));
        let err = service.execute("ada@startup.io").await.unwrap_err();
        assert!(matches!(err, GetDirectoryError::EmailNotSubmitted));

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Directory requested without a submitted email"));
        assert!(!output.contains("ada@startup.io"));
    }

    #[tokio::test]
    async fn test_submitted_email_gets_directory() {
        let submissions = MockEmailSubmissionRepository::default();
        submissions.seed("ada@startup.io", DIRECTORY_SOURCE);
        let source = MockDirectorySource::with_names(&["Vera Capital", "Orbit Partners"]);
        let service = GetDirectoryService::new(source, Arc::new(submissions));

        let entries = service.execute(" Ada@Startup.io ").await.unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Vera Capital");
    }

    #[tokio::test]
    async fn test_other_source_does_not_count() {
        let submissions = MockEmailSubmissionRepository::default();
        submissions.seed("ada@startup.io", "newsletter");
        let source = MockDirectorySource::with_names(&["Vera Capital"]);
        let service = GetDirectoryService::new(source.clone(), Arc::new(submissions));

        let err = service.execute("ada@startup.io").await.unwrap_err();

        assert!(matches!(err, GetDirectoryError::EmailNotSubmitted));
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn test_invalid_email() {
        let service = GetDirectoryService::new(
            MockDirectorySource::with_names(&[]),
            Arc::new(MockEmailSubmissionRepository::default()),
        );

        let err = service.execute("nope").await.unwrap_err();
        assert!(matches!(err, GetDirectoryError::InvalidEmail(_)));
    }

    #[tokio::test]
    async fn test_upstream_failure() {
        let submissions = MockEmailSubmissionRepository::default();
        submissions.seed("ada@startup.io", DIRECTORY_SOURCE);
        let service = GetDirectoryService::new(MockDirectorySource::failing(), Arc::new(submissions));

        let err = service.execute("ada@startup.io").await.unwrap_err();
        assert!(matches!(err, GetDirectoryError::Unavailable(_)));
    }
}
