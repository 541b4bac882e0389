//! Form state: the token being edited plus the two independent status values.
//!
//! Every network call is issued against a ticket carrying a sequence number.
//! Completions whose ticket is no longer the latest are dropped, so a slow,
//! superseded request can never overwrite a newer result.

use crate::models::User;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::mask_token;

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileStatus {
    Idle,
    Loading,
    Success(User),
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisStatus {
    Idle,
    Loading,
    Success(String),
    Error(String),
}

impl ProfileStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, ProfileStatus::Loading)
    }
}

impl AnalysisStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, AnalysisStatus::Loading)
    }
}

/// A verification the caller must now perform
#[derive(Debug, Clone, PartialEq)]
pub struct VerifyTicket {
    pub seq: u64,
    pub token: String,
}

/// An analysis the caller must now perform
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisTicket {
    pub seq: u64,
    /// Verification the analysed profile came from
    pub profile_seq: u64,
    pub user: User,
}

#[derive(Debug)]
pub struct Session {
    token: String,
    profile: ProfileStatus,
    analysis: AnalysisStatus,
    verify_seq: u64,
    analysis_seq: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            token: String::new(),
            profile: ProfileStatus::Idle,
            analysis: AnalysisStatus::Idle,
            verify_seq: 0,
            analysis_seq: 0,
        }
    }

    /// Mutable access for the text field; call `token_edited` when it changes.
    pub fn token_mut(&mut self) -> &mut String {
        &mut self.token
    }

    pub fn profile(&self) -> &ProfileStatus {
        &self.profile
    }

    pub fn analysis(&self) -> &AnalysisStatus {
        &self.analysis
    }

    pub fn user(&self) -> Option<&User> {
        match &self.profile {
            ProfileStatus::Success(user) => Some(user),
            _ => None,
        }
    }

    /// Sequence number of the profile currently shown (or being fetched)
    pub fn profile_seq(&self) -> u64 {
        self.verify_seq
    }

    pub fn can_verify(&self) -> bool {
        !self.token.trim().is_empty() && !self.profile.is_loading()
    }

    pub fn can_analyze(&self) -> bool {
        self.user().is_some() && !self.analysis.is_loading()
    }

    /// Any edit of the token invalidates a previous analysis.
    pub fn token_edited(&mut self) {
        if self.analysis != AnalysisStatus::Idle {
            log::debug!("[Session] Token edited, analysis reset");
        }
        self.reset_analysis();
    }

    /// Start a verification. An empty token is rejected here and no ticket is issued.
    pub fn begin_verify(&mut self) -> Option<VerifyTicket> {
        // Any submission supersedes whatever is still in flight
        self.verify_seq += 1;
        self.reset_analysis();

        let token = self.token.trim();
        if token.is_empty() {
            log::debug!("[Session] Rejected empty token");
            self.profile = ProfileStatus::Error(AppError::EmptyToken.to_string());
            return None;
        }

        log::info!(
            "[Session] Verifying token {} (request #{})",
            mask_token(token),
            self.verify_seq
        );
        self.profile = ProfileStatus::Loading;
        Some(VerifyTicket {
            seq: self.verify_seq,
            token: token.to_string(),
        })
    }

    /// Apply a verification outcome. Returns false when it was stale and dropped.
    pub fn complete_verify(&mut self, seq: u64, result: AppResult<User>) -> bool {
        if seq != self.verify_seq || !self.profile.is_loading() {
            log::debug!(
                "[Session] Dropping stale verification #{} (current #{})",
                seq,
                self.verify_seq
            );
            return false;
        }

        self.reset_analysis();
        self.profile = match result {
            Ok(user) => ProfileStatus::Success(user),
            Err(e) => ProfileStatus::Error(e.to_string()),
        };
        true
    }

    /// Start an analysis of the current profile, if there is one.
    pub fn begin_analysis(&mut self) -> Option<AnalysisTicket> {
        if !self.can_analyze() {
            log::debug!("[Session] Analysis not available in current state");
            return None;
        }
        let user = self.user()?.clone();

        self.analysis_seq += 1;
        self.analysis = AnalysisStatus::Loading;
        log::info!("[Session] Analysing profile of {} (request #{})", user.username, self.analysis_seq);

        Some(AnalysisTicket {
            seq: self.analysis_seq,
            profile_seq: self.verify_seq,
            user,
        })
    }

    /// Apply an analysis outcome. Returns false when it was stale and dropped.
    pub fn complete_analysis(&mut self, seq: u64, profile_seq: u64, result: AppResult<String>) -> bool {
        let current = seq == self.analysis_seq
            && profile_seq == self.verify_seq
            && self.analysis.is_loading();
        if !current {
            log::debug!("[Session] Dropping stale analysis #{}", seq);
            return false;
        }

        self.analysis = match result {
            Ok(text) => AnalysisStatus::Success(text),
            Err(e) => AnalysisStatus::Error(e.to_string()),
        };
        true
    }

    fn reset_analysis(&mut self) {
        // Bumping the counter orphans any analysis still in flight
        if self.analysis.is_loading() {
            self.analysis_seq += 1;
        }
        self.analysis = AnalysisStatus::Idle;
    }
}
