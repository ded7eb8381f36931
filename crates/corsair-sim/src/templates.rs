//! Entity templates supplied by the asset loader.
//!
//! The core only cares about the scale it assigns at spawn; the visual
//! model itself stays in the presentation layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use corsair_core::enums::TemplateKind;

use crate::error::SimError;

/// Spawn-time parameters for one kind of entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityTemplate {
    pub scale: f64,
}

/// Templates registered so far.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: BTreeMap<TemplateKind, EntityTemplate>,
}

impl TemplateRegistry {
    /// Registry preloaded with the stock model scales.
    pub fn with_defaults() -> Self {
        let mut registry = Self::default();
        registry.register(TemplateKind::Ship, EntityTemplate { scale: 4.0 });
        registry.register(TemplateKind::Boat, EntityTemplate { scale: 0.05 });
        registry.register(TemplateKind::Chest, EntityTemplate { scale: 20.0 });
        registry.register(TemplateKind::Reward, EntityTemplate { scale: 0.75 });
        registry.register(TemplateKind::Cannonball, EntityTemplate { scale: 1.0 });
        registry
    }

    pub fn register(&mut self, kind: TemplateKind, template: EntityTemplate) {
        self.templates.insert(kind, template);
    }

    pub fn get(&self, kind: TemplateKind) -> Option<EntityTemplate> {
        self.templates.get(&kind).copied()
    }

    pub fn require(&self, kind: TemplateKind) -> Result<EntityTemplate, SimError> {
        self.get(kind).ok_or(SimError::MissingTemplate { kind })
    }

    /// Every kind a world needs is present.
    pub fn validate(&self) -> Result<(), SimError> {
        for kind in TemplateKind::ALL {
            self.require(kind)?;
        }
        Ok(())
    }

    /// Scale for `kind`, or 1.0 when it was never registered.
    pub fn scale_of(&self, kind: TemplateKind) -> f64 {
        self.get(kind).map(|t| t.scale).unwrap_or(1.0)
    }
}
