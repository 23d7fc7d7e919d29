use std::collections::HashMap;

use pantheon_battle::HeroTemplate;
use pantheon_protocol::HeroId;

use crate::{HeroLookup, is_wire_safe_line};
use crate::error::RosterError;

/// In-memory hero catalog
#[derive(Debug, Clone, Default)]
pub struct HeroCatalog {
    heroes: HashMap<HeroId, HeroTemplate>,
}

impl HeroCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog, rejecting repeated ids
    pub fn from_templates(
        templates: impl IntoIterator<Item = HeroTemplate>,
    ) -> Result<Self, RosterError> {
        let mut catalog = Self::new();
        for template in templates {
            catalog.insert(template)?;
        }
        Ok(catalog)
    }

    pub fn insert(&mut self, template: HeroTemplate) -> Result<(), RosterError> {
        if !is_wire_safe_line(&template.name) {
            return Err(RosterError::InvalidHeroName {
                hero: template.id,
                name: template.name,
            });
        }
        if self.heroes.contains_key(&template.id) {
            return Err(RosterError::DuplicateHero(template.id));
        }
        self.heroes.insert(template.id, template);
        Ok(())
    }

    pub fn contains(&self, id: HeroId) -> bool {
        self.heroes.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeroTemplate> {
        self.heroes.values()
    }
}

impl HeroLookup for HeroCatalog {
    fn hero(&self, id: HeroId) -> Option<&HeroTemplate> {
        self.heroes.get(&id)
    }
}
