//! Upload submission state machine.
//!
//! `Idle -> Armed -> Submitting -> Idle`. Only an armed flow submits; a
//! finished submission always clears the armed file, whatever the outcome.

use crate::error::{GalleryError, OperationResult};
use crate::store::ImageStore;
use crate::types::{ImageRecord, PendingFile};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadState {
    #[default]
    Idle,
    Armed(PendingFile),
    Submitting,
}

/// Signal shown to the user once a submission finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadNotice {
    Uploaded(ImageRecord),
    Failed(String),
}

impl UploadNotice {
    pub fn is_success(&self) -> bool {
        matches!(self, UploadNotice::Uploaded(_))
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            UploadNotice::Failed(reason) => Some(reason),
            UploadNotice::Uploaded(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadFlow {
    state: UploadState,
}

impl UploadFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, UploadState::Submitting)
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        matches!(self.state, UploadState::Armed(_))
    }

    pub fn armed_file(&self) -> Option<&PendingFile> {
        match &self.state {
            UploadState::Armed(file) => Some(file),
            _ => None,
        }
    }

    /// Arm the flow with a fresh selection.
    ///
    /// A cancelled or empty selection, or any selection while a submission is
    /// in flight, is rejected and leaves the state untouched.
    pub fn select_file(&mut self, file: Option<PendingFile>) -> Result<(), GalleryError> {
        if self.is_submitting() {
            return Err(GalleryError::Validation(
                "an upload is already in progress".into(),
            ));
        }
        match file {
            Some(file) if !file.is_empty() => {
                tracing::debug!("armed {file:?}");
                self.state = UploadState::Armed(file);
                Ok(())
            }
            _ => Err(GalleryError::Validation("no file selected".into())),
        }
    }

    /// `Armed -> Submitting`, handing out the file to send. `None` from any
    /// other state, with no transition.
    pub fn begin_submit(&mut self) -> Option<PendingFile> {
        match std::mem::take(&mut self.state) {
            UploadState::Armed(file) => {
                self.state = UploadState::Submitting;
                Some(file)
            }
            other => {
                self.state = other;
                None
            }
        }
    }

    /// `Submitting -> Idle`. On success `append` receives the new record
    /// before the notice is returned; on failure it is never called.
    pub fn complete(
        &mut self,
        result: OperationResult<ImageRecord>,
        append: impl FnOnce(ImageRecord),
    ) -> UploadNotice {
        self.state = UploadState::Idle;
        match result {
            Ok(record) => {
                tracing::info!("uploaded {}", record.object_key);
                append(record.clone());
                UploadNotice::Uploaded(record)
            }
            Err(err) => {
                tracing::warn!("upload failed: {err}");
                UploadNotice::Failed(err.reason())
            }
        }
    }

    /// Submit the armed file through `store`. `None` when the flow was not
    /// armed, in which case no request is made.
    pub async fn submit<S>(
        &mut self,
        store: &S,
        append: impl FnOnce(ImageRecord),
    ) -> Option<UploadNotice>
    where
        S: ImageStore + ?Sized,
    {
        let file = self.begin_submit()?;
        let result = store.upload(file).await;
        Some(self.complete(result, append))
    }
}
