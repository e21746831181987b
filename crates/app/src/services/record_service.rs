//! Record service — use-cases for a single record collection.

use twinsvc_domain::error::TwinSvcError;
use twinsvc_domain::record::Record;

use crate::ports::RecordRepository;
use crate::seed::{SeedMode, SeedOutcome};

type Draft<R> = <<R as RecordRepository>::Record as Record>::Draft;

/// Application service for listing, creating and seeding records.
pub struct RecordService<R> {
    repo: R,
}

impl<R: RecordRepository> RecordService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List every record in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_records(&self) -> Result<Vec<R::Record>, TwinSvcError> {
        self.repo.get_all().await
    }

    /// Store a new record. Its identifier is assigned by the repository.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip_all, fields(collection = <R::Record as Record>::COLLECTION))]
    pub async fn create_record(&self, draft: Draft<R>) -> Result<R::Record, TwinSvcError> {
        let record = self.repo.create(draft).await?;
        tracing::debug!(id = %record.id(), "record created");
        Ok(record)
    }

    /// Apply the startup seed records according to `mode`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository. Records
    /// inserted before the failure stay in the store.
    #[tracing::instrument(skip_all, fields(collection = <R::Record as Record>::COLLECTION, %mode))]
    pub async fn seed(
        &self,
        mode: SeedMode,
        drafts: Vec<Draft<R>>,
    ) -> Result<SeedOutcome, TwinSvcError> {
        if mode == SeedMode::SeedIfEmpty {
            let existing = self.repo.count().await?;
            if existing > 0 {
                tracing::info!(existing, "store already populated, skipping seed");
                return Ok(SeedOutcome::Skipped { existing });
            }
        }

        let inserted = drafts.len();
        for draft in drafts {
            self.repo.create(draft).await?;
        }
        tracing::info!(inserted, "seed records inserted");
        Ok(SeedOutcome::Inserted(inserted))
    }
}
