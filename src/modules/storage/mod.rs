pub mod local_client;

pub use local_client::{LocalStorageClient, StorageArea, StoredFile};
