//! Simulated source: real reads, writes that only pretend to go anywhere.

use std::time::Duration;

use async_trait::async_trait;

use super::delay::sleep;
use super::http::HttpSource;
use super::traits::{IdAssignment, RecordSource};
use crate::domain::{NewRecord, Record, RecordId};
use crate::error::{SyncError, SyncResult};

#[derive(Debug, Clone)]
pub struct SimulatedSource {
    reader: HttpSource,
    latency: Duration,
    id_offset: i64,
}

impl SimulatedSource {
    pub fn new(reader: HttpSource, latency: Duration, id_offset: i64) -> Self {
        Self {
            reader,
            latency,
            id_offset,
        }
    }
}

#[async_trait(?Send)]
impl RecordSource for SimulatedSource {
    fn id_assignment(&self) -> IdAssignment {
        IdAssignment::Local {
            offset: self.id_offset,
        }
    }

    async fn fetch_all(&self) -> SyncResult<Vec<Record>> {
        self.reader.fetch_all().await
    }

    async fn create(&self, record: &NewRecord) -> SyncResult<Record> {
        sleep(self.latency).await;
        record.clone().into_record().ok_or(SyncError::MissingId)
    }

    async fn update(&self, id: &RecordId, _title: &str, _body: &str) -> SyncResult<()> {
        log::debug!("simulated update of {}", id);
        sleep(self.latency).await;
        Ok(())
    }

    async fn delete(&self, id: &RecordId) -> SyncResult<()> {
        log::debug!("simulated delete of {}", id);
        sleep(self.latency).await;
        Ok(())
    }
}
