//! Cut registration
//!
//! Tracks which pieces of one processed file have been cut. Every status or
//! notes change is pushed to the registered [`StatusListener`]s, which the
//! hosting application uses to persist it.

use crate::error::VectorResult;
use crate::processor::ProcessedFile;
use garmentcut_core::{
    PieceStatus, PieceStatusRecord, RegistrationError, StatusListener, StatusListenerHandle,
    VectorPath,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Number of pieces in each status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusCounts {
    pub uncut: usize,
    pub cut: usize,
    pub defect: usize,
}

/// Per-file cut registration state
pub struct CutRegistration {
    paths: Vec<VectorPath>,
    notes: HashMap<String, String>,
    listeners: Vec<(StatusListenerHandle, Box<dyn StatusListener>)>,
    next_listener: u64,
}

impl CutRegistration {
    pub fn new(paths: Vec<VectorPath>) -> Self {
        Self {
            paths,
            notes: HashMap::new(),
            listeners: Vec::new(),
            next_listener: 1,
        }
    }

    pub fn from_processed(file: ProcessedFile) -> Self {
        Self::new(file.paths)
    }

    /// Replace the working set with the result of a new run. Notes are
    /// cleared, listeners stay registered.
    pub fn load(&mut self, paths: Vec<VectorPath>) {
        debug!("Loading {} pieces for registration", paths.len());
        self.paths = paths;
        self.notes.clear();
    }

    pub fn paths(&self) -> &[VectorPath] {
        &self.paths
    }

    pub fn path(&self, id: &str) -> Option<&VectorPath> {
        self.paths.iter().find(|p| p.id == id)
    }

    /// Register a listener for status changes
    pub fn subscribe<L>(&mut self, listener: L) -> StatusListenerHandle
    where
        L: StatusListener + 'static,
    {
        let handle = StatusListenerHandle(format!("listener-{}", self.next_listener));
        self.next_listener += 1;
        self.listeners.push((handle.clone(), Box::new(listener)));
        debug!("Status listener {} added", handle.0);
        handle
    }

    /// Remove a listener; returns false when the handle is unknown
    pub fn unsubscribe(&mut self, handle: &StatusListenerHandle) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(h, _)| h != handle);
        before != self.listeners.len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn path_mut(&mut self, id: &str) -> VectorResult<&mut VectorPath> {
        self.paths
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| RegistrationError::UnknownPiece { id: id.to_string() }.into())
    }

    /// Advance a piece to its next status and notify listeners
    pub fn toggle(&mut self, id: &str) -> VectorResult<PieceStatus> {
        let path = self.path_mut(id)?;
        path.status = path.status.next();
        let status = path.status;

        debug!("Piece {} is now {}", id, status);
        self.notify(id, status);
        Ok(status)
    }

    /// Set a piece's status directly and notify listeners
    pub fn set_status(&mut self, id: &str, status: PieceStatus) -> VectorResult<()> {
        self.path_mut(id)?.status = status;
        self.notify(id, status);
        Ok(())
    }

    /// Update a piece's notes without notifying
    pub fn set_notes(&mut self, id: &str, notes: impl Into<String>) -> VectorResult<()> {
        self.path_mut(id)?;
        self.notes.insert(id.to_string(), notes.into());
        Ok(())
    }

    pub fn notes(&self, id: &str) -> &str {
        self.notes.get(id).map(String::as_str).unwrap_or("")
    }

    /// Re-send the current status together with the piece's notes
    pub fn save_notes(&mut self, id: &str) -> VectorResult<()> {
        let status = self.path_mut(id)?.status;
        self.notify(id, status);
        Ok(())
    }

    /// Persistence payload for a piece
    pub fn record(&self, id: &str) -> VectorResult<PieceStatusRecord> {
        let path = self
            .path(id)
            .ok_or_else(|| RegistrationError::UnknownPiece { id: id.to_string() })?;
        Ok(PieceStatusRecord::new(id, path.status, self.notes(id)))
    }

    pub fn count(&self, status: PieceStatus) -> usize {
        self.paths.iter().filter(|p| p.status == status).count()
    }

    pub fn counts(&self) -> StatusCounts {
        StatusCounts {
            uncut: self.count(PieceStatus::Uncut),
            cut: self.count(PieceStatus::Cut),
            defect: self.count(PieceStatus::Defect),
        }
    }

    fn notify(&self, id: &str, status: PieceStatus) {
        let notes = self.notes(id);
        for (_, listener) in &self.listeners {
            listener.on_status_change(id, status, notes);
        }
    }
}

impl std::fmt::Debug for CutRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CutRegistration")
            .field("paths", &self.paths.len())
            .field("notes", &self.notes)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
