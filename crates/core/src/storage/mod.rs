mod error;
mod http_mapping;
mod traits;

pub use error::{RecordId, RepositoryError, Result};
pub use http_mapping::{manager_error_to_status_code, repository_error_to_status_code};
pub use traits::{Record, StorageManager};
