// Token Registry - Event Sink Collaborator
// Fire-and-forget structured events for external observers (indexers,
// marketplaces). Events are a side effect only: losing one never violates
// registry invariants.

use log::{info, warn};
use serde::Serialize;

use super::types::{AccountId, TokenId};

// ========================================
// Event Payloads
// ========================================

/// Payload of a mint event
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NftMintLog {
    pub owner_id: AccountId,
    pub token_ids: Vec<TokenId>,
}

/// Payload of a transfer event
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NftTransferLog {
    pub old_owner_id: AccountId,
    pub new_owner_id: AccountId,
    pub token_ids: Vec<TokenId>,
}

/// Structured registry event
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum NftEvent {
    NftMint(Vec<NftMintLog>),
    NftTransfer(Vec<NftTransferLog>),
}

impl NftEvent {
    /// Event name as emitted on the wire
    pub fn name(&self) -> &'static str {
        match self {
            NftEvent::NftMint(_) => "nft_mint",
            NftEvent::NftTransfer(_) => "nft_transfer",
        }
    }
}

// ========================================
// Event Sink
// ========================================

/// Abstract event sink interface
pub trait EventSink {
    /// Emit a single event, fire-and-forget
    fn emit(&mut self, event: NftEvent);
}

/// Sink that writes serialized events through the `log` facade
#[derive(Clone, Copy, Debug, Default)]
pub struct LogEventSink;

impl EventSink for LogEventSink {
    fn emit(&mut self, event: NftEvent) {
        match serde_json::to_string(&event) {
            Ok(payload) => info!(target: "nft_events", "{}", payload),
            Err(err) => warn!("failed to serialize {} event: {}", event.name(), err),
        }
    }
}

/// Sink that buffers events, used by tests and embedders that drain
/// events themselves
#[derive(Clone, Debug, Default)]
pub struct MemoryEventSink {
    events: Vec<NftEvent>,
}

impl MemoryEventSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Events emitted so far, in order
    pub fn events(&self) -> &[NftEvent] {
        &self.events
    }

    /// Drain all buffered events
    pub fn drain(&mut self) -> Vec<NftEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EventSink for MemoryEventSink {
    fn emit(&mut self, event: NftEvent) {
        self.events.push(event);
    }
}
