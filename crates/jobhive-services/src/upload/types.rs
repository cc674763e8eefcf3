//! Types used by the asset upload service

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Stage of a single upload call.
///
/// `Validating → Uploading → ConfirmingPin → ProbingAccess → Done`. A call can
/// end in `Failed` from the first three stages only; probing always reaches
/// `Done`, with or without confirmed accessibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStage {
    Validating,
    Uploading,
    ConfirmingPin,
    ProbingAccess,
    Done,
    Failed,
}

impl UploadStage {
    /// The stage that follows on success, `None` for terminal stages.
    pub fn next(&self) -> Option<UploadStage> {
        match self {
            UploadStage::Validating => Some(UploadStage::Uploading),
            UploadStage::Uploading => Some(UploadStage::ConfirmingPin),
            UploadStage::ConfirmingPin => Some(UploadStage::ProbingAccess),
            UploadStage::ProbingAccess => Some(UploadStage::Done),
            UploadStage::Done | UploadStage::Failed => None,
        }
    }

    pub fn can_fail(&self) -> bool {
        matches!(
            self,
            UploadStage::Validating | UploadStage::Uploading | UploadStage::ConfirmingPin
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, UploadStage::Done | UploadStage::Failed)
    }

    /// Move to `next`, which must be the successor of `self` or `Failed`.
    pub(crate) fn advance(&mut self, next: UploadStage) {
        debug_assert!(
            self.next() == Some(next) || (next == UploadStage::Failed && self.can_fail()),
            "invalid upload stage transition {} -> {}",
            self,
            next
        );
        tracing::debug!(from = %self, to = %next, "Upload stage transition");
        *self = next;
    }
}

impl Display for UploadStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            UploadStage::Validating => write!(f, "validating"),
            UploadStage::Uploading => write!(f, "uploading"),
            UploadStage::ConfirmingPin => write!(f, "confirming_pin"),
            UploadStage::ProbingAccess => write!(f, "probing_access"),
            UploadStage::Done => write!(f, "done"),
            UploadStage::Failed => write!(f, "failed"),
        }
    }
}
