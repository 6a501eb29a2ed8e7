//! Status listener interface
//!
//! Defines the listener trait notified when an operator changes the cutting
//! status of a piece. The hosting application implements it to persist the
//! change.

use crate::data::{PieceStatus, PieceStatusRecord};

/// Handle for a registered status listener.
///
/// Uniquely identifies a listener subscription. Can be used to unsubscribe
/// from status notifications.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatusListenerHandle(pub String);

/// Listener trait for piece status changes
pub trait StatusListener {
    /// Called after a piece's status or notes changed
    fn on_status_change(&self, piece_id: &str, status: PieceStatus, notes: &str);

    /// Called with the full record; forwards to [`Self::on_status_change`] by default
    fn on_record(&self, record: &PieceStatusRecord) {
        self.on_status_change(&record.id, record.status, &record.notes);
    }
}

impl<F> StatusListener for F
where
    F: Fn(&str, PieceStatus, &str),
{
    fn on_status_change(&self, piece_id: &str, status: PieceStatus, notes: &str) {
        self(piece_id, status, notes)
    }
}
