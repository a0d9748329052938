//! Ruleset registry: the built-in catalogue plus user rulesets saved to disk.

use moser_core::{Grid, NeighborCounts, Ruleset};
use std::path::{Path, PathBuf};

use crate::error::{IoError, Result};
use crate::serialization::{read_json_file, write_json_file};

const ALL: [u8; 9] = [0, 1, 2, 3, 4, 5, 6, 7, 8];

/// The built-in rulesets, in display order.
#[must_use]
pub fn predefined_rulesets() -> Vec<Ruleset> {
    vec![
        Ruleset::conway(),
        Ruleset::new("HighLife", [3, 6], [2, 3], "Supports replicators"),
        Ruleset::new("Day & Night", [3, 6, 7, 8], [3, 4, 6, 7, 8], "Symmetrical rule"),
        Ruleset::new(
            "Replicator",
            [1, 3, 5, 7],
            [1, 3, 5, 7],
            "Creates replicating patterns",
        ),
        Ruleset::new("Seeds", [2], NeighborCounts::empty(), "Fast growth, chaotic"),
        Ruleset::new("Life without death", [3], ALL, "Everything lives forever"),
        Ruleset::new("2x2", [3, 6], [2, 4, 5], "Blocks, emulates rule 90"),
        Ruleset::new("Assimilation", [3, 4, 5], [5], "Assimilates patterns"),
        Ruleset::new(
            "Isolated Birth",
            [1],
            ALL,
            "Give birth when isolated (filling pattern)",
        ),
        Ruleset::new("Maze", [3, 4], [3, 4], "Tends to form stable mazes"),
        Ruleset::new("Coagulations", [3, 8], [2, 3], "Forms growing blobs"),
        Ruleset::new(
            "Diamoeba",
            [3],
            [0, 1, 2, 3, 4, 5, 6],
            "Chaotic amoeba-like growth",
        ),
        Ruleset::new("Anneal", [2], [3, 4, 5, 6, 7, 8], "Melts patterns together"),
        Ruleset::new("Long Life", [3], [1, 2, 3, 4, 5], "Long-living structures"),
        Ruleset::new("Gnarl", [2, 5], [4], "Tree-like growth"),
        Ruleset::new("Stains", [3, 5, 7], [1, 3, 5, 8], "Forms stain-like patterns"),
        Ruleset::new("Fill", ALL, ALL, "Everything fills instantly"),
    ]
}

/// The caller's answer when [`RulesetRegistry::add`] reports `DuplicateRules`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateResolution {
    /// Keep the ruleset that already has these rules.
    UseExisting,
    /// Store the new name alongside it.
    CreateDuplicate,
    Cancel,
}

/// Predefined and custom rulesets, with custom ones persisted as JSON.
///
/// Predefined rulesets always come first and keep their order; custom ones
/// follow in insertion order.
#[derive(Debug, Clone)]
pub struct RulesetRegistry {
    predefined_count: usize,
    rulesets: Vec<Ruleset>,
    path: Option<PathBuf>,
}

impl Default for RulesetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RulesetRegistry {
    /// In-memory registry holding only the built-in rulesets.
    #[must_use]
    pub fn new() -> Self {
        let rulesets = predefined_rulesets();
        Self {
            predefined_count: rulesets.len(),
            rulesets,
            path: None,
        }
    }

    /// Loads saved custom rulesets from `path` and persists future changes there.
    ///
    /// A missing file yields the built-in rulesets only. Saved entries whose
    /// names are already taken are skipped.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut registry = Self::new();
        registry.path = Some(path.to_path_buf());

        if !path.exists() {
            tracing::debug!(path = %path.display(), "No saved rulesets");
            return Ok(registry);
        }

        let saved: Vec<Ruleset> = read_json_file(path)
            .map_err(|e| e.with_context(format!("loading rulesets from {}", path.display())))?;
        for ruleset in saved {
            if registry.get(ruleset.name()).is_some() {
                tracing::warn!(name = ruleset.name(), "Skipping saved ruleset with a taken name");
                continue;
            }
            registry.rulesets.push(ruleset);
        }
        tracing::info!(
            path = %path.display(),
            custom = registry.custom().len(),
            "Loaded rulesets"
        );
        Ok(registry)
    }

    /// Where custom rulesets are persisted, if anywhere.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Writes the custom rulesets. A registry with no path does nothing.
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        write_json_file(&self.custom(), path)
            .map_err(|e| e.with_context(format!("saving rulesets to {}", path.display())))?;
        tracing::debug!(path = %path.display(), count = self.custom().len(), "Saved rulesets");
        Ok(())
    }

    #[must_use]
    pub fn rulesets(&self) -> &[Ruleset] {
        &self.rulesets
    }

    #[must_use]
    pub fn predefined(&self) -> &[Ruleset] {
        &self.rulesets[..self.predefined_count]
    }

    #[must_use]
    pub fn custom(&self) -> &[Ruleset] {
        &self.rulesets[self.predefined_count..]
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Ruleset> {
        self.rulesets.iter().find(|r| r.name() == name)
    }

    #[must_use]
    pub fn is_predefined(&self, name: &str) -> bool {
        self.predefined().iter().any(|r| r.name() == name)
    }

    /// First `"{prefix} {n}"` name, counting from 1, that no ruleset uses.
    #[must_use]
    pub fn unused_name(&self, prefix: &str) -> String {
        (1usize..)
            .map(|n| format!("{prefix} {n}"))
            .find(|name| self.get(name).is_none())
            .unwrap_or_else(|| prefix.to_string())
    }

    /// First ruleset under another name with the same birth and survival rules.
    #[must_use]
    pub fn find_same_rules(&self, ruleset: &Ruleset) -> Option<&Ruleset> {
        self.rulesets
            .iter()
            .find(|r| r.name() != ruleset.name() && r.has_same_rules(ruleset))
    }

    /// Adds a custom ruleset, replacing one with the same name, then saves.
    ///
    /// # Errors
    /// `PredefinedRuleset` for a built-in name, `DuplicateRules` when another
    /// ruleset already has these rules.
    pub fn add(&mut self, ruleset: Ruleset) -> Result<()> {
        if self.is_predefined(ruleset.name()) {
            return Err(IoError::predefined(ruleset.name()));
        }
        if let Some(existing) = self.find_same_rules(&ruleset) {
            return Err(IoError::duplicate_rules(existing.name(), existing.notation()));
        }
        self.insert(ruleset)
    }

    /// Settles a `DuplicateRules` rejection.
    ///
    /// Returns the ruleset the caller should use, or `None` when cancelled.
    pub fn resolve_duplicate(
        &mut self,
        ruleset: Ruleset,
        resolution: DuplicateResolution,
    ) -> Result<Option<Ruleset>> {
        match resolution {
            DuplicateResolution::UseExisting => Ok(self.find_same_rules(&ruleset).cloned()),
            DuplicateResolution::CreateDuplicate => {
                if self.is_predefined(ruleset.name()) {
                    return Err(IoError::predefined(ruleset.name()));
                }
                self.insert(ruleset.clone())?;
                Ok(Some(ruleset))
            }
            DuplicateResolution::Cancel => Ok(None),
        }
    }

    /// Removes a custom ruleset. Unknown names are ignored.
    pub fn delete(&mut self, name: &str) -> Result<()> {
        if self.is_predefined(name) {
            return Err(IoError::predefined(name));
        }
        let Some(index) = self.rulesets.iter().position(|r| r.name() == name) else {
            return Ok(());
        };
        self.rulesets.remove(index);
        tracing::info!(name, "Deleted ruleset");
        self.save()
    }

    fn insert(&mut self, ruleset: Ruleset) -> Result<()> {
        tracing::info!(name = ruleset.name(), notation = %ruleset.notation(), "Stored ruleset");
        match self.rulesets.iter().position(|r| r.name() == ruleset.name()) {
            Some(index) => self.rulesets[index] = ruleset,
            None => self.rulesets.push(ruleset),
        }
        self.save()
    }
}

/// Copies `ruleset`'s rules into `grid`.
pub fn apply_ruleset(ruleset: &Ruleset, grid: &mut Grid) {
    grid.apply_ruleset(ruleset);
}

/// The rules `grid` is running, named `"Current"`.
#[must_use]
pub fn current_ruleset(grid: &Grid) -> Ruleset {
    grid.current_ruleset()
}
