//! Source Layer
//!
//! Where records are read from and written to.

mod delay;
mod http;
mod simulated;
mod traits;


use async_trait::async_trait;

pub use http::HttpSource;
pub use simulated::SimulatedSource;
pub use traits::{IdAssignment, RecordSource};

use crate::config::{SourceMode, SyncConfig};
use crate::domain::{NewRecord, Record, RecordId};
use crate::error::SyncResult;

/// The source selected by configuration
#[derive(Debug, Clone)]
pub enum AnySource {
    Remote(HttpSource),
    Simulated(SimulatedSource),
}

impl AnySource {
    pub fn from_config(config: &SyncConfig) -> Self {
        let reader = HttpSource::new(config.api_url.clone())
            .with_list_key(config.list_key.clone());
        match config.mode {
            SourceMode::Remote => AnySource::Remote(reader.with_user_id(config.user_id)),
            SourceMode::Simulated => AnySource::Simulated(SimulatedSource::new(
                reader,
                config.latency(),
                config.id_offset,
            )),
        }
    }

    fn inner(&self) -> &dyn RecordSource {
        match self {
            AnySource::Remote(source) => source,
            AnySource::Simulated(source) => source,
        }
    }
}

#[async_trait(?Send)]
impl RecordSource for AnySource {
    fn id_assignment(&self) -> IdAssignment {
        self.inner().id_assignment()
    }

    async fn fetch_all(&self) -> SyncResult<Vec<Record>> {
        self.inner().fetch_all().await
    }

    async fn create(&self, record: &NewRecord) -> SyncResult<Record> {
        self.inner().create(record).await
    }

    async fn update(&self, id: &RecordId, title: &str, body: &str) -> SyncResult<()> {
        self.inner().update(id, title, body).await
    }

    async fn delete(&self, id: &RecordId) -> SyncResult<()> {
        self.inner().delete(id).await
    }
}
