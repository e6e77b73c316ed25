//! Shared fixtures for the owner service tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use bytes::Bytes;
use carrent_core::error::{CarRentError, CarRentResult};
use carrent_core::image::{ImageFile, ImageStore, ImageTransformation, UploadedImage};
use carrent_core::models::car::CarDraft;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem};

pub async fn memory_db() -> Surreal<Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    carrent_db::run_migrations(&db).await.unwrap();
    db
}

#[derive(Default)]
struct Recorded {
    uploads: Vec<(String, String)>,
    deletes: Vec<String>,
    fail_uploads: bool,
    fail_deletes: bool,
}

/// In-process image store that records every call.
#[derive(Clone, Default)]
pub struct RecordingImageStore {
    inner: Arc<Mutex<Recorded>>,
}

impl RecordingImageStore {
    pub fn failing_uploads() -> Self {
        let store = Self::default();
        store.inner.lock().unwrap().fail_uploads = true;
        store
    }

    pub fn failing_deletes(self) -> Self {
        self.inner.lock().unwrap().fail_deletes = true;
        self
    }

    /// `(folder, file_name)` of every accepted upload.
    pub fn uploads(&self) -> Vec<(String, String)> {
        self.inner.lock().unwrap().uploads.clone()
    }

    pub fn deletes(&self) -> Vec<String> {
        self.inner.lock().unwrap().deletes.clone()
    }
}

impl ImageStore for RecordingImageStore {
    async fn upload(
        &self,
        _blob: Bytes,
        file_name: &str,
        folder: &str,
    ) -> CarRentResult<UploadedImage> {
        let mut inner = self.inner.lock().unwrap();
        if inner.fail_uploads {
            return Err(CarRentError::Upload("store unavailable".into()));
        }
        inner.uploads.push((folder.to_string(), file_name.to_string()));
        Ok(UploadedImage {
            file_id: format!("file_{}", inner.uploads.len()),
            file_path: format!("{folder}/{file_name}"),
        })
    }

    async fn delete(&self, file_id: &str) -> CarRentResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.deletes.push(file_id.to_string());
        if inner.fail_deletes {
            return Err(CarRentError::Upload("delete rejected".into()));
        }
        Ok(())
    }

    fn derive_url(&self, file_path: &str, transformation: &ImageTransformation) -> String {
        let width = transformation.width.unwrap_or_default();
        format!("https://ik.test/tr:w-{width},q-auto,f-webp{file_path}")
    }
}

pub fn image(name: &str) -> ImageFile {
    ImageFile::new(name, Bytes::from_static(b"\x89PNG fake"))
}

pub fn complete_draft(brand: &str) -> CarDraft {
    serde_json::from_value(serde_json::json!({
        "brand": brand,
        "model": "Corolla",
        "year": 2021,
        "pricePerDay": 45.0,
        "category": "Sedan",
        "transmission": "Automatic",
        "fuel_type": "Petrol",
        "seating_capacity": 5,
        "location": "Chicago",
        "description": "Clean and reliable",
    }))
    .unwrap()
}
