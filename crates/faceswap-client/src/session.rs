//! Swap session — the front end's view of one attempt at a time.
//!
//! Holds the selected inputs and an explicit [`SwapState`]. Every mutation
//! goes through a guarded transition; a completed state always carries its
//! output and only one attempt can be in flight.

use faceswap_core::{Error, Result};
use tracing::warn;

use crate::orchestrator::{Orchestrator, COMPLETED_PERCENT};
use crate::source::SourceImage;
use crate::types::{Progress, Stage, SwapOutput, SwapRequest, SwapResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SwapState {
    #[default]
    Idle,
    Uploading { percent: u8, message: String },
    Processing { percent: u8, message: String },
    Completed { output: SwapOutput },
    Failed { message: String },
}

impl SwapState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Uploading { .. } => "uploading",
            Self::Processing { .. } => "processing",
            Self::Completed { .. } => "completed",
            Self::Failed { .. } => "failed",
        }
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::Uploading { .. } | Self::Processing { .. })
    }

    pub fn percent(&self) -> u8 {
        match self {
            Self::Idle | Self::Failed { .. } => 0,
            Self::Uploading { percent, .. } | Self::Processing { percent, .. } => *percent,
            Self::Completed { .. } => COMPLETED_PERCENT,
        }
    }
}

#[derive(Debug, Default)]
pub struct SwapSession {
    photo: Option<SourceImage>,
    gif: Option<String>,
    state: SwapState,
}

impl SwapSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SwapState {
        &self.state
    }

    pub fn photo(&self) -> Option<&SourceImage> {
        self.photo.as_ref()
    }

    pub fn gif(&self) -> Option<&str> {
        self.gif.as_deref()
    }

    fn refuse(&self, action: &'static str) -> Error {
        Error::InvalidTransition {
            action,
            state: self.state.name(),
        }
    }

    pub fn select_photo(&mut self, photo: SourceImage) -> Result<()> {
        if self.state.is_in_flight() {
            return Err(self.refuse("select a photo"));
        }
        self.photo = Some(photo);
        Ok(())
    }

    pub fn select_gif(&mut self, gif: impl Into<String>) -> Result<()> {
        if self.state.is_in_flight() {
            return Err(self.refuse("select a GIF"));
        }
        self.gif = Some(gif.into());
        Ok(())
    }

    /// Whether the swap trigger is enabled.
    pub fn can_start(&self) -> bool {
        self.photo.is_some() && self.gif.is_some() && !self.state.is_in_flight()
    }

    /// Enter `Uploading` and hand out the request to dispatch.
    pub fn begin(&mut self) -> Result<SwapRequest> {
        if self.state.is_in_flight() {
            return Err(self.refuse("start a swap"));
        }
        let request = SwapRequest::new(self.photo.clone(), self.gif.clone())?;
        self.state = SwapState::Uploading {
            percent: 0,
            message: String::new(),
        };
        Ok(request)
    }

    /// Record a milestone. Progress only moves forward.
    pub fn advance(&mut self, progress: &Progress) -> Result<()> {
        let current = match &self.state {
            SwapState::Uploading { percent, .. } => *percent,
            SwapState::Processing { percent, .. } if progress.stage != Stage::Uploading => *percent,
            _ => return Err(self.refuse("report progress")),
        };
        if progress.percent < current {
            return Err(self.refuse("move progress backwards"));
        }

        let percent = progress.percent;
        let message = progress.message.clone();
        self.state = match progress.stage {
            Stage::Uploading => SwapState::Uploading { percent, message },
            // Completed needs an output; until complete() it is processing at 100%.
            Stage::Processing | Stage::Completed => SwapState::Processing { percent, message },
        };
        Ok(())
    }

    pub fn complete(&mut self, output: SwapOutput) -> Result<()> {
        if !matches!(self.state, SwapState::Processing { .. }) {
            return Err(self.refuse("complete"));
        }
        self.state = SwapState::Completed { output };
        Ok(())
    }

    pub fn fail(&mut self, message: impl Into<String>) -> Result<()> {
        if !self.state.is_in_flight() {
            return Err(self.refuse("fail"));
        }
        self.state = SwapState::Failed {
            message: message.into(),
        };
        Ok(())
    }

    /// Discard inputs and result.
    pub fn reset(&mut self) {
        self.photo = None;
        self.gif = None;
        self.state = SwapState::Idle;
    }

    pub fn result(&self) -> Option<SwapResult> {
        match &self.state {
            SwapState::Completed { output } => Some(SwapResult::Success(output.clone())),
            SwapState::Failed { message } => Some(SwapResult::Failure {
                message: message.clone(),
            }),
            _ => None,
        }
    }

    /// Drive one attempt through `orchestrator`, forwarding milestones to
    /// `observer`. Errors only if the attempt cannot start; a failed swap is
    /// returned as [`SwapResult::Failure`].
    pub async fn run<F>(&mut self, orchestrator: &Orchestrator, mut observer: F) -> Result<SwapResult>
    where
        F: FnMut(&Progress),
    {
        let request = self.begin()?;

        let outcome = orchestrator
            .execute_swap(&request, |progress| {
                if let Err(e) = self.advance(progress) {
                    warn!("Ignoring progress update: {}", e);
                }
                observer(progress);
            })
            .await;

        match outcome {
            Ok(output) => self.complete(output.clone()).map(|_| SwapResult::Success(output)),
            Err(e) => {
                let message = e.to_string();
                self.fail(message.clone())?;
                Ok(SwapResult::Failure { message })
            }
        }
    }
}
