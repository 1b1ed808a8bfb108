use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::thread;

use tokio::sync::mpsc;

use super::MetadataFields;

/// Request to analyze one file.
#[derive(Debug, Clone)]
pub struct MetadataRequest {
    pub file_path: PathBuf,
}

/// Completed analysis, ready for display.
#[derive(Debug, Clone)]
pub struct MetadataResult {
    pub file_path: PathBuf,
    pub fields: MetadataFields,
}

/// Background metadata worker: requests go to a dedicated thread so the
/// ffprobe call never blocks the frame loop, results are drained
/// non-blockingly each frame.
pub struct MetadataLoader {
    request_sender: mpsc::UnboundedSender<MetadataRequest>,
    result_receiver: Arc<Mutex<mpsc::UnboundedReceiver<MetadataResult>>>,
}

impl MetadataLoader {
    pub fn new() -> Self {
        let (request_tx, mut request_rx) = mpsc::unbounded_channel::<MetadataRequest>();
        let (result_tx, result_rx) = mpsc::unbounded_channel::<MetadataResult>();

        thread::spawn(move || {
            while let Some(request) = request_rx.blocking_recv() {
                log::debug!("Analyzing metadata for: {:?}", request.file_path);
                let fields = super::analyze(&request.file_path);
                let result = MetadataResult {
                    file_path: request.file_path,
                    fields,
                };
                if result_tx.send(result).is_err() {
                    // Receiver gone: the app is shutting down.
                    break;
                }
            }
        });

        Self {
            request_sender: request_tx,
            result_receiver: Arc::new(Mutex::new(result_rx)),
        }
    }

    /// Queue a file for analysis (non-blocking).
    pub fn request(&self, file_path: PathBuf) {
        let request = MetadataRequest { file_path };
        if let Err(e) = self.request_sender.send(request) {
            log::error!("Failed to send metadata request: {}", e);
        }
    }

    /// Get completed results (non-blocking).
    pub fn completed(&self) -> Vec<MetadataResult> {
        let mut results = Vec::new();

        if let Ok(mut receiver) = self.result_receiver.lock() {
            while let Ok(result) = receiver.try_recv() {
                results.push(result);
            }
        }

        results
    }
}

impl Default for MetadataLoader {
    fn default() -> Self {
        Self::new()
    }
}
