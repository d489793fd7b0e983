//! Skill catalog loader.
//!
//! Loads skill definitions from embedded RON data files and builds the
//! validated, owner-keyed [`SkillCatalog`].

use battle_core::{Skill, SkillCatalog};

use crate::loaders::LoadResult;

/// Loader for the skill catalog from RON data.
pub struct SkillLoader;

impl SkillLoader {
    /// Loads the full catalog from embedded RON data files.
    ///
    /// Any parse or validation failure aborts battle setup; a catalog that
    /// loads successfully never produces a configuration error mid-combat.
    pub fn load() -> LoadResult<SkillCatalog> {
        let mut skills =
            Self::parse_table("heroes.ron", include_str!("../../data/skills/heroes.ron"))?;
        skills.extend(Self::parse_table(
            "monsters.ron",
            include_str!("../../data/skills/monsters.ron"),
        )?);

        SkillCatalog::new(skills)
            .map_err(|e| anyhow::anyhow!("Invalid skill catalog data: {}", e))
    }

    fn parse_table(name: &str, ron_str: &str) -> LoadResult<Vec<Skill>> {
        ron::from_str(ron_str).map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", name, e))
    }
}
