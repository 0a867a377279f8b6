//! Ad network capability and ad placements.
//!
//! Ad units never reach a global queue directly. They are handed an
//! [`AdNetwork`] at construction: [`AdQueue`] in live mode, [`InertAds`] in
//! placeholder mode so debug builds and tests never contact the network.

use std::sync::{Arc, Mutex};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdError {
    #[error("ad queue is poisoned")]
    QueuePoisoned,
}

/// A placement, parameterized by publisher client and slot identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdSlot {
    pub client: String,
    pub slot: String,
}

impl AdSlot {
    pub fn new(client: impl Into<String>, slot: impl Into<String>) -> Self {
        Self {
            client: client.into(),
            slot: slot.into(),
        }
    }
}

/// Request for the network to fill one mounted slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRequest {
    pub client: String,
    pub slot: String,
}

/// Capability to ask the ad network to render
pub trait AdNetwork: Send + Sync {
    /// Whether this network renders real ads (false means draw a placeholder)
    fn is_live(&self) -> bool;

    /// Push a display request for a freshly mounted slot
    fn push(&self, request: DisplayRequest) -> Result<(), AdError>;
}

pub type SharedAdNetwork = Arc<dyn AdNetwork>;

/// Network stand-in for development and tests
#[derive(Debug, Default, Clone, Copy)]
pub struct InertAds;

impl AdNetwork for InertAds {
    fn is_live(&self) -> bool {
        false
    }

    fn push(&self, _request: DisplayRequest) -> Result<(), AdError> {
        Ok(())
    }
}

/// Process-wide display queue consumed by the ad network integration
#[derive(Debug, Default, Clone)]
pub struct AdQueue {
    queue: Arc<Mutex<Vec<DisplayRequest>>>,
}

impl AdQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every request pushed so far
    pub fn drain(&self) -> Result<Vec<DisplayRequest>, AdError> {
        let mut queue = self.queue.lock().map_err(|_| AdError::QueuePoisoned)?;
        Ok(std::mem::take(&mut *queue))
    }
}

impl AdNetwork for AdQueue {
    fn is_live(&self) -> bool {
        true
    }

    fn push(&self, request: DisplayRequest) -> Result<(), AdError> {
        let mut queue = self.queue.lock().map_err(|_| AdError::QueuePoisoned)?;
        queue.push(request);
        Ok(())
    }
}

/// One ad placement and whether it is currently mounted.
///
/// Each transition from unmounted to mounted pushes one display request.
pub struct AdUnit {
    slot: AdSlot,
    network: SharedAdNetwork,
    mounted: bool,
}

impl AdUnit {
    pub fn new(slot: AdSlot, network: SharedAdNetwork) -> Self {
        Self {
            slot,
            network,
            mounted: false,
        }
    }

    pub fn slot(&self) -> &AdSlot {
        &self.slot
    }

    pub fn is_live(&self) -> bool {
        self.network.is_live()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Called every frame the unit is shown
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        if !self.network.is_live() {
            return;
        }

        let request = DisplayRequest {
            client: self.slot.client.clone(),
            slot: self.slot.slot.clone(),
        };
        match self.network.push(request) {
            Ok(()) => tracing::debug!("Requested ad for slot {}", self.slot.slot),
            Err(e) => tracing::error!("Ad render error for slot {}: {}", self.slot.slot, e),
        }
    }

    /// Called when the unit leaves the screen; the next mount renders again
    pub fn unmount(&mut self) {
        self.mounted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingNetwork;

    impl AdNetwork for FailingNetwork {
        fn is_live(&self) -> bool {
            true
        }

        fn push(&self, _request: DisplayRequest) -> Result<(), AdError> {
            Err(AdError::QueuePoisoned)
        }
    }

    fn slot() -> AdSlot {
        AdSlot::new("ca-pub-9988710026850454", "9350244892")
    }

    #[test]
    fn test_mount_pushes_once_per_mount() {
        let queue = AdQueue::new();
        let mut unit = AdUnit::new(slot(), Arc::new(queue.clone()));

        unit.mount();
        unit.mount();
        assert_eq!(
            queue.drain().unwrap(),
            vec![DisplayRequest {
                client: "ca-pub-9988710026850454".to_string(),
                slot: "9350244892".to_string(),
            }]
        );

        unit.unmount();
        unit.mount();
        assert_eq!(queue.drain().unwrap().len(), 1);
    }

    #[test]
    fn test_placeholder_mode_never_pushes() {
        let mut unit = AdUnit::new(slot(), Arc::new(InertAds));
        unit.mount();
        assert!(unit.is_mounted());
        assert!(!unit.is_live());
    }

    #[test]
    fn test_push_failure_is_swallowed() {
        let mut unit = AdUnit::new(slot(), Arc::new(FailingNetwork));
        unit.mount();
        assert!(unit.is_mounted());
    }
}
