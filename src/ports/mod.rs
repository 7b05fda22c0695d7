//! Port traits defining external boundaries.
//!
//! Each trait is one collaborator the report core talks to: the clock,
//! the release tracking dashboard, the Launchpad upload archive, and the
//! distro-info release catalog. Implementations live in `src/adapters/`.

pub mod archive;
pub mod clock;
pub mod releases;
pub mod tracker;

use std::error::Error;
use std::future::Future;
use std::pin::Pin;

pub use archive::{PendingUpload, PublicationQuery, SourcePublication, UploadArchive};
pub use clock::Clock;
pub use releases::{ReleaseCatalog, SeriesInfo};
pub use tracker::TrackingReportSource;

/// Boxed error returned by every port.
pub type PortError = Box<dyn Error + Send + Sync>;

/// Boxed future returned by async ports so the traits stay dyn-compatible.
pub type PortFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, PortError>> + Send + 'a>>;
