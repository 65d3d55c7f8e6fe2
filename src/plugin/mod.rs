//! Plugin session: the request loop around the engine.
//!
//! A [`Session`] is started by showing the UI through a [`UiHost`]; it then
//! owns the document handle, the font loader and the settings store. It
//! answers UI requests one at a time; a run always completes before the next
//! request is looked at, and `cancel` only prevents future runs.

mod message;
mod settings;
mod ui;

pub use message::{UiRequest, UiResponse};
pub use settings::{CORNER_RADIUS_KEY, MemorySettings, SettingsStore};
pub use ui::{MemoryUi, UiHost};

use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::config::CornerRadius;
use crate::error::{SkeletonError, SkeletonResult};
use crate::host::{Document, FontLoader};
use crate::transform::{Notice, Skeletonizer};

/// A running plugin instance
pub struct Session<D, F, S> {
    doc: D,
    fonts: F,
    settings: S,
    engine: Skeletonizer,
    corner_radius: CornerRadius,
    closed: bool,
}

impl<D: Document, F: FontLoader, S: SettingsStore> Session<D, F, S> {
    /// Show the UI and start a session, restoring the remembered corner radius.
    ///
    /// Returns the session and the `init` message for the UI. Fails with
    /// [`SkeletonError::Startup`] if the UI cannot be shown.
    pub async fn start<U: UiHost>(
        doc: D,
        fonts: F,
        settings: S,
        ui: &U,
    ) -> SkeletonResult<(Self, UiResponse)> {
        if let Err(err) = ui.show().await {
            error!(error = %err, "could not show plugin UI");
            return Err(SkeletonError::Startup(err.to_string()));
        }

        let corner_radius = match settings.get(CORNER_RADIUS_KEY).await {
            Ok(Some(value)) => CornerRadius::coerce(&value).unwrap_or_else(|err| {
                debug!(error = %err, "stored corner radius invalid, using default");
                CornerRadius::default()
            }),
            Ok(None) => CornerRadius::default(),
            Err(err) => {
                warn!(error = %err, "could not read settings, using default corner radius");
                CornerRadius::default()
            }
        };
        let init = UiResponse::Init {
            corner_radius: corner_radius.get(),
        };
        let session = Self {
            doc,
            fonts,
            settings,
            engine: Skeletonizer::new(),
            corner_radius,
            closed: false,
        };
        Ok((session, init))
    }

    /// Use a custom engine
    pub fn with_engine(mut self, engine: Skeletonizer) -> Self {
        self.engine = engine;
        self
    }

    /// Handle one UI request
    pub async fn handle(&mut self, request: UiRequest) -> UiResponse {
        if self.closed {
            debug!(?request, "session closed, ignoring request");
            return UiResponse::Closed;
        }
        match request {
            UiRequest::Run { corner_radius } => self.run(&corner_radius).await,
            UiRequest::SaveRadius { corner_radius } => self.save_radius(&corner_radius).await,
            UiRequest::Cancel => {
                info!("session closed by user");
                self.closed = true;
                UiResponse::Closed
            }
        }
    }

    async fn run(&mut self, raw: &Value) -> UiResponse {
        let (corner_radius, config_notice) = match CornerRadius::coerce(raw) {
            Ok(r) => (r, None),
            Err(err) => {
                warn!(error = %err, "invalid corner radius, using default");
                let fallback = CornerRadius::default();
                let notice = Notice::warning(format!("Invalid corner radius; using {fallback}"));
                (fallback, Some(notice))
            }
        };
        self.corner_radius = corner_radius;

        let report = self.engine.run(&mut self.doc, &self.fonts, corner_radius).await;
        let mut notices: Vec<Notice> = config_notice.into_iter().collect();
        notices.extend(report.notices);
        UiResponse::Report {
            produced: report.produced,
            notices,
        }
    }

    async fn save_radius(&mut self, raw: &Value) -> UiResponse {
        let corner_radius = match CornerRadius::coerce(raw) {
            Ok(r) => r,
            Err(err) => {
                warn!(error = %err, "not saving invalid corner radius");
                return UiResponse::Notify {
                    notice: Notice::warning("Corner radius must be a non-negative number"),
                };
            }
        };
        match self.settings.set(CORNER_RADIUS_KEY, Value::from(corner_radius.get())).await {
            Ok(()) => {
                self.corner_radius = corner_radius;
                UiResponse::Saved {
                    corner_radius: corner_radius.get(),
                }
            }
            Err(err) => {
                warn!(error = %err, "could not save corner radius");
                UiResponse::Notify {
                    notice: Notice::error("Could not save the corner radius"),
                }
            }
        }
    }

    /// Whether `cancel` has been received
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Last radius used or saved
    pub fn corner_radius(&self) -> CornerRadius {
        self.corner_radius
    }

    pub fn document(&self) -> &D {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.doc
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }
}
