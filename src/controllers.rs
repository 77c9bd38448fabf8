//! Observable state shared between the device handle and the UI.
//!
//! Controllers hold the latest value behind a mutex and hand out `mpsc`
//! receivers so that panels (or external code) are told when it changes.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex};

use crate::device::ConnectionStatus;

/// Publishes the connectivity of the spectrometer.
#[derive(Clone)]
pub struct ConnectionController {
    pub(crate) inner: Arc<Mutex<ConnectionCtrlInner>>,
}

pub(crate) struct ConnectionCtrlInner {
    pub(crate) status: ConnectionStatus,
    pub(crate) listeners: Vec<Sender<ConnectionStatus>>,
}

impl ConnectionController {
    pub fn new(status: ConnectionStatus) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ConnectionCtrlInner {
                status,
                listeners: Vec::new(),
            })),
        }
    }

    /// Last published status.
    pub fn status(&self) -> ConnectionStatus {
        self.inner.lock().unwrap().status.clone()
    }

    /// Record a new status. Subscribers are notified only when it differs from
    /// the previous one; returns whether it did.
    pub fn publish(&self, status: ConnectionStatus) -> bool {
        let mut inner = self.inner.lock().unwrap();
        if inner.status == status {
            return false;
        }
        log::info!("connection: {}", status);
        inner.status = status.clone();
        inner.listeners.retain(|s| s.send(status.clone()).is_ok());
        true
    }

    /// Receive every subsequent status change.
    pub fn subscribe(&self) -> Receiver<ConnectionStatus> {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut inner = self.inner.lock().unwrap();
        inner.listeners.push(tx);
        rx
    }
}
