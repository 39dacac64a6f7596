//! Fetch → decode → normalize → encode → persist, one item at a time.
//!
//! Every per-item failure is caught at [`Processor::process`] and reported as
//! an `Err` value; [`Processor::run`] never stops early because of one.

use crate::catalog::ImageSpec;
use crate::encode::{EncodeError, ImageEncoder, WEBP_SETTINGS};
use crate::fetch::{FetchError, Fetcher};
use crate::normalize;
use crate::storage;
use crate::summary::{ItemOutcome, RunSummary};
use crate::url_model;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

/// Why one item failed.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("bad URL: {0}")]
    Url(#[from] url::ParseError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("decode: {0}")]
    Decode(#[from] image::ImageError),
    #[error("encode: {0}")]
    Encode(#[from] EncodeError),
    #[error("write: {0:#}")]
    Storage(anyhow::Error),
}

/// Progress notifications emitted by [`Processor::run`]. `index` is 1-based.
#[derive(Debug)]
pub enum ItemEvent<'a> {
    /// About to look at the item.
    Started {
        index: usize,
        total: usize,
        spec: &'a ImageSpec,
    },
    /// No artifact present; network work begins.
    Fetching { spec: &'a ImageSpec },
    Finished {
        spec: &'a ImageSpec,
        result: &'a Result<ItemOutcome, ProcessError>,
    },
}

pub struct Processor<F, E> {
    fetcher: F,
    encoder: E,
    base_url: Url,
    source_quality: u8,
    output_dir: PathBuf,
}

impl<F: Fetcher, E: ImageEncoder> Processor<F, E> {
    pub fn new(
        fetcher: F,
        encoder: E,
        base_url: Url,
        source_quality: u8,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fetcher,
            encoder,
            base_url,
            source_quality,
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn artifact_path(&self, spec: &ImageSpec) -> PathBuf {
        url_model::artifact_path(&self.output_dir, spec)
    }

    /// Size of the artifact for `spec` if it is already on disk.
    pub fn existing(&self, spec: &ImageSpec) -> Option<u64> {
        storage::existing_size(&self.artifact_path(spec))
    }

    /// Fetch, convert and write one item, ignoring any existing artifact.
    pub fn produce(&self, spec: &ImageSpec) -> Result<ItemOutcome, ProcessError> {
        let url = url_model::image_url(&self.base_url, spec, self.source_quality)?;
        tracing::debug!(id = spec.id, url = %url, "fetching");
        let body = self.fetcher.fetch(&url)?;

        let decoded = image::load_from_memory(&body)?;
        let rgb = normalize::to_opaque_rgb(decoded);
        let encoded = self.encoder.encode(&rgb, &WEBP_SETTINGS)?;

        let path = self.artifact_path(spec);
        let written = storage::write_atomic(&path, &encoded).map_err(ProcessError::Storage)?;
        tracing::info!(
            id = spec.id,
            downloaded = body.len(),
            written,
            path = %path.display(),
            "artifact written"
        );
        Ok(ItemOutcome::Written {
            downloaded: body.len() as u64,
            written,
        })
    }

    /// Skip if the artifact exists, otherwise [`produce`](Self::produce) it.
    pub fn process(&self, spec: &ImageSpec) -> Result<ItemOutcome, ProcessError> {
        self.process_with(spec, || {})
    }

    /// `on_fetch` runs only when the artifact is missing, right before network work.
    fn process_with<O: FnOnce()>(
        &self,
        spec: &ImageSpec,
        on_fetch: O,
    ) -> Result<ItemOutcome, ProcessError> {
        match self.existing(spec) {
            Some(bytes) => {
                tracing::debug!(id = spec.id, bytes, "artifact exists, skipping");
                Ok(ItemOutcome::Skipped { bytes })
            }
            None => {
                on_fetch();
                self.produce(spec)
            }
        }
    }

    /// Process every spec in order. Only setup (creating the output directory)
    /// can fail the run as a whole.
    pub fn run<C>(&self, specs: &[ImageSpec], mut on_event: C) -> anyhow::Result<RunSummary>
    where
        C: FnMut(ItemEvent<'_>),
    {
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!("create output directory {}", self.output_dir.display())
        })?;

        let total = specs.len();
        let mut summary = RunSummary::new(total);
        for (i, spec) in specs.iter().enumerate() {
            on_event(ItemEvent::Started {
                index: i + 1,
                total,
                spec,
            });
            let result = self.process_with(spec, || on_event(ItemEvent::Fetching { spec }));
            if let Err(e) = &result {
                tracing::warn!(id = spec.id, "item failed: {}", e);
            }
            summary.record(spec, &result);
            on_event(ItemEvent::Finished {
                spec,
                result: &result,
            });
        }

        tracing::info!(
            succeeded = summary.succeeded,
            total = summary.total,
            bytes = summary.total_bytes,
            "run finished"
        );
        Ok(summary)
    }
}
