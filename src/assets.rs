//! Visual asset readiness gate
//!
//! The first tick waits until every named asset has settled. An asset that
//! fails to load does not block the game; its layer falls back to the
//! flat-colour placeholder.

use serde::{Deserialize, Serialize};

/// Named visual assets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetId {
    Background,
    Ground,
    Bird,
    Pipe,
}

impl AssetId {
    pub const ALL: [AssetId; 4] = [AssetId::Background, AssetId::Ground, AssetId::Bird, AssetId::Pipe];

    pub fn name(&self) -> &'static str {
        match self {
            AssetId::Background => "background",
            AssetId::Ground => "ground",
            AssetId::Bird => "bird",
            AssetId::Pipe => "pipe",
        }
    }

    /// Source path relative to the game root
    pub fn path(&self) -> &'static str {
        match self {
            AssetId::Background => "assets/background-day.png",
            AssetId::Ground => "assets/ground.png",
            AssetId::Bird => "assets/bird.png",
            AssetId::Pipe => "assets/pipe-green.png",
        }
    }

    fn index(&self) -> usize {
        match self {
            AssetId::Background => 0,
            AssetId::Ground => 1,
            AssetId::Bird => 2,
            AssetId::Pipe => 3,
        }
    }
}

/// Load state of one asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AssetStatus {
    #[default]
    Pending,
    /// Loaded, with its pixel dimensions
    Ready { width: u32, height: u32 },
    /// Gave up; render the placeholder
    Failed,
}

impl AssetStatus {
    pub fn is_settled(&self) -> bool {
        !matches!(self, AssetStatus::Pending)
    }
}

/// Tracks every named asset and opens once all have settled
#[derive(Debug, Clone, Default)]
pub struct AssetGate {
    status: [AssetStatus; 4],
}

impl AssetGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_ready(&mut self, id: AssetId, width: u32, height: u32) {
        self.status[id.index()] = AssetStatus::Ready { width, height };
        log::info!("Asset loaded: {} ({}x{})", id.name(), width, height);
        self.log_if_open();
    }

    pub fn mark_failed(&mut self, id: AssetId, reason: &str) {
        self.status[id.index()] = AssetStatus::Failed;
        log::warn!(
            "Asset {} ({}) failed to load: {}; using placeholder",
            id.name(),
            id.path(),
            reason
        );
        self.log_if_open();
    }

    pub fn status(&self, id: AssetId) -> AssetStatus {
        self.status[id.index()]
    }

    /// Dimensions if the asset is usable
    pub fn ready(&self, id: AssetId) -> Option<(u32, u32)> {
        match self.status(id) {
            AssetStatus::Ready { width, height } => Some((width, height)),
            _ => None,
        }
    }

    pub fn settled_count(&self) -> usize {
        self.status.iter().filter(|s| s.is_settled()).count()
    }

    /// True once no asset is still pending
    pub fn is_open(&self) -> bool {
        self.settled_count() == AssetId::ALL.len()
    }

    fn log_if_open(&self) {
        if self.is_open() {
            let ready = self
                .status
                .iter()
                .filter(|s| matches!(s, AssetStatus::Ready { .. }))
                .count();
            log::info!("Assets settled: {}/{} ready", ready, AssetId::ALL.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_opens_when_all_settled() {
        let mut gate = AssetGate::new();
        assert!(!gate.is_open());

        gate.mark_ready(AssetId::Background, 288, 512);
        gate.mark_ready(AssetId::Ground, 336, 112);
        gate.mark_ready(AssetId::Bird, 34, 24);
        assert!(!gate.is_open());
        assert_eq!(gate.settled_count(), 3);

        gate.mark_failed(AssetId::Pipe, "404");
        assert!(gate.is_open());
        assert_eq!(gate.ready(AssetId::Pipe), None);
        assert_eq!(gate.ready(AssetId::Ground), Some((336, 112)));
    }

    #[test]
    fn test_asset_names_are_unique() {
        for (i, a) in AssetId::ALL.iter().enumerate() {
            assert_eq!(a.index(), i);
            for b in &AssetId::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }
}
