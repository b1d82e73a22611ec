//! Bridge between the async media decoder and the synchronous event loop
//!
//! `ServiceHandle` owns a small tokio runtime. Decoding is spawned onto it
//! and the outcome is sent back over a crossbeam channel that the event
//! loop polls between frames, so the UI never blocks on file I/O.

use std::path::PathBuf;
#[cfg(test)]
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender};
use libpix::error::MediaError;
use libpix::media::{DecodedMedia, MediaDecoder};
use libpix::UploadId;

use crate::error::{Result, TuiError};

/// A file to decode for one opening of the upload dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeRequest {
    pub upload: UploadId,
    /// Dialog title at the time of the request
    pub title: String,
    pub path: PathBuf,
}

/// Outcome of one decode, paired with the request it answers
#[derive(Debug)]
pub struct DecodeResult {
    pub request: DecodeRequest,
    pub outcome: std::result::Result<DecodedMedia, MediaError>,
}

pub struct ServiceHandle {
    runtime: tokio::runtime::Runtime,
    decoder: MediaDecoder,
    tx: Sender<DecodeResult>,
    rx: Receiver<DecodeResult>,
}

impl ServiceHandle {
    pub fn new(decoder: MediaDecoder) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("pix-decode")
            .enable_all()
            .build()
            .map_err(|e| TuiError::Application(format!("Failed to start runtime: {}", e)))?;

        let (tx, rx) = unbounded();

        Ok(Self {
            runtime,
            decoder,
            tx,
            rx,
        })
    }

    /// Start decoding the requested file; the result arrives via `try_recv`
    pub fn decode(&self, request: DecodeRequest) {
        let decoder = self.decoder.clone();
        let tx = self.tx.clone();

        self.runtime.spawn(async move {
            let outcome = decoder.decode(&request.path).await;
            if let Err(ref e) = outcome {
                tracing::warn!(path = %request.path.display(), error = %e, "Decode failed");
            }
            // Receiver lives as long as the handle
            let _ = tx.send(DecodeResult { request, outcome });
        });
    }

    /// Non-blocking poll for a finished decode
    pub fn try_recv(&self) -> Option<DecodeResult> {
        self.rx.try_recv().ok()
    }

    #[cfg(test)]
    fn recv_timeout(&self, timeout: Duration) -> Option<DecodeResult> {
        self.rx.recv_timeout(timeout).ok()
    }
}
