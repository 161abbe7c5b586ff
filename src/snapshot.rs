//! Binary snapshots of `GameState`.
//!
//! A host that needs to survive a lifecycle boundary (backgrounding,
//! restart within a session) stores the bytes and decodes them later.
//! Decoding validates the snapshot so a corrupted blob never reaches the
//! engine.

use crate::core::{EngineError, GameState, Result};

/// Encode a snapshot with bincode.
pub fn encode(state: &GameState) -> Result<Vec<u8>> {
    bincode::serialize(state).map_err(|e| EngineError::Snapshot(e.to_string()))
}

/// Decode and validate a snapshot.
pub fn decode(bytes: &[u8]) -> Result<GameState> {
    let state: GameState =
        bincode::deserialize(bytes).map_err(|e| EngineError::Snapshot(e.to_string()))?;
    state.validate()?;
    Ok(state)
}
