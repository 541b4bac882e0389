//! Background work
//!
//! Each request runs on its own thread with a single-threaded tokio runtime;
//! outcomes come back over one mpsc channel that the UI drains every frame.

use eframe::egui;
use std::future::Future;
use std::sync::mpsc::{channel, Receiver, Sender};

use crate::api::{self, GeminiConfig};
use crate::app_state::{AnalysisTicket, VerifyTicket};
use crate::config::AppConfig;
use crate::models::User;
use crate::utils::errors::{AppError, AppResult};

pub enum TaskOutcome {
    Verified {
        seq: u64,
        result: AppResult<User>,
    },
    Analyzed {
        seq: u64,
        profile_seq: u64,
        result: AppResult<String>,
    },
    Avatar {
        profile_seq: u64,
        result: AppResult<egui::ColorImage>,
    },
}

pub struct TaskRunner {
    tx: Sender<TaskOutcome>,
    rx: Receiver<TaskOutcome>,
    market_base_url: String,
    gemini: GeminiConfig,
    repaint: Option<egui::Context>,
}

impl TaskRunner {
    pub fn new(config: &AppConfig) -> Self {
        let (tx, rx) = channel();
        Self {
            tx,
            rx,
            market_base_url: config.market_base_url.clone(),
            gemini: GeminiConfig {
                base_url: config.gemini_base_url.clone(),
                model: config.gemini_model.clone(),
                api_key: config.gemini_api_key.clone(),
            },
            repaint: None,
        }
    }

    /// Wake the UI when an outcome arrives instead of waiting for the next input event
    pub fn with_repaint(mut self, ctx: egui::Context) -> Self {
        self.repaint = Some(ctx);
        self
    }

    pub fn verify(&self, ticket: VerifyTicket) {
        let base_url = self.market_base_url.clone();
        let VerifyTicket { seq, token } = ticket;
        self.spawn(
            "verify",
            move || TaskOutcome::Verified {
                seq,
                result: block_on(async move { api::fetch_me(&base_url, &token).await }),
            },
            move |err| TaskOutcome::Verified { seq, result: Err(err) },
        );
    }

    pub fn analyze(&self, ticket: AnalysisTicket) {
        let gemini = self.gemini.clone();
        let AnalysisTicket { seq, profile_seq, user } = ticket;
        self.spawn(
            "analyze",
            move || TaskOutcome::Analyzed {
                seq,
                profile_seq,
                result: crate::analysis::build_prompt(&user).and_then(|prompt| {
                    block_on(async move { api::generate_text(&gemini, &prompt).await })
                }),
            },
            move |err| TaskOutcome::Analyzed { seq, profile_seq, result: Err(err) },
        );
    }

    pub fn load_avatar(&self, profile_seq: u64, url: String) {
        self.spawn(
            "avatar",
            move || TaskOutcome::Avatar {
                profile_seq,
                result: block_on(async move { crate::utils::image_loader::fetch_image(&url).await }),
            },
            move |err| TaskOutcome::Avatar { profile_seq, result: Err(err) },
        );
    }

    /// Everything that finished since the last call
    pub fn drain(&self) -> Vec<TaskOutcome> {
        self.rx.try_iter().collect()
    }

    fn spawn<J, F>(&self, name: &str, job: J, on_spawn_error: F)
    where
        J: FnOnce() -> TaskOutcome + Send + 'static,
        F: FnOnce(AppError) -> TaskOutcome,
    {
        let tx = self.tx.clone();
        let repaint = self.repaint.clone();

        let spawned = std::thread::Builder::new()
            .name(format!("lzt-{}", name))
            .spawn(move || deliver(&tx, repaint.as_ref(), job()));

        if let Err(e) = spawned {
            log::error!("[Tasks] Failed to spawn {} worker: {}", name, e);
            let outcome = on_spawn_error(AppError::Network(format!(
                "could not start background task: {}",
                e
            )));
            deliver(&self.tx, self.repaint.as_ref(), outcome);
        }
    }
}

/// Hand an outcome to the UI and wake it up
fn deliver(tx: &Sender<TaskOutcome>, repaint: Option<&egui::Context>, outcome: TaskOutcome) {
    if tx.send(outcome).is_err() {
        log::debug!("[Tasks] UI gone, dropping outcome");
    }
    if let Some(ctx) = repaint {
        ctx.request_repaint();
    }
}

/// Drive one future to completion on a fresh current-thread runtime
fn block_on<T, Fut>(fut: Fut) -> AppResult<T>
where
    Fut: Future<Output = AppResult<T>>,
{
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| AppError::Network(format!("failed to start async runtime: {}", e)))?;
    rt.block_on(fut)
}
