use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::domain::model::Tag;
use crate::utils::error::{DishError, Result};

/// One entry of the conflict table: `tag` cannot coexist with any tag in
/// `conflicts`; the numerically smaller `priority` survives the clash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagRule {
    pub tag: Tag,
    #[serde(default)]
    pub conflicts: Vec<Tag>,
    pub priority: u32,
}

/// Immutable conflict table, built once at startup and passed to the
/// resolver explicitly. Iteration order is the order rules were declared in.
#[derive(Debug, Clone)]
pub struct TagRuleTable {
    rules: Vec<TagRule>,
    priorities: HashMap<Tag, u32>,
}

impl TagRuleTable {
    pub fn new(rules: Vec<TagRule>) -> Result<Self> {
        let mut priorities = HashMap::with_capacity(rules.len());
        for rule in &rules {
            if priorities.insert(rule.tag.clone(), rule.priority).is_some() {
                return Err(DishError::ConfigError {
                    message: format!("Duplicate rule for tag '{}'", rule.tag),
                });
            }
        }
        Ok(Self { rules, priorities })
    }

    /// The application's fixed dietary table.
    pub fn builtin() -> Self {
        let rules = vec![
            TagRule {
                tag: Tag::from("meat"),
                conflicts: vec![Tag::from("vegan"), Tag::from("vegetarian")],
                priority: 1,
            },
            TagRule {
                tag: Tag::from("dairy"),
                conflicts: vec![Tag::from("vegan")],
                priority: 2,
            },
            TagRule {
                tag: Tag::from("vegetarian"),
                conflicts: vec![Tag::from("meat")],
                priority: 2,
            },
            TagRule {
                tag: Tag::from("vegan"),
                conflicts: vec![Tag::from("meat"), Tag::from("dairy")],
                priority: 3,
            },
        ];
        let priorities = rules
            .iter()
            .map(|rule| (rule.tag.clone(), rule.priority))
            .collect();
        Self { rules, priorities }
    }

    pub fn rules(&self) -> &[TagRule] {
        &self.rules
    }

    pub fn priority(&self, tag: &Tag) -> Option<u32> {
        self.priorities.get(tag).copied()
    }

    /// The full tag vocabulary in table order, as served by the tag-listing
    /// endpoint.
    pub fn vocabulary(&self) -> Vec<Tag> {
        self.rules.iter().map(|rule| rule.tag.clone()).collect()
    }

    /// Collapses a candidate tag set into a conflict-free set.
    ///
    /// One pass over the rules in table order. For each rule whose tag is
    /// still present, every listed conflict also present is compared by
    /// priority and the loser removed; on an exact tie the rule's own tag
    /// wins. A tag removed mid-pass is never reconsidered as a source of new
    /// conflicts, so a future table with cyclic, non-transitive priorities
    /// would resolve order-dependently rather than to a global fixed point.
    ///
    /// Tags with no rule pass through untouched; a conflict target with no
    /// rule of its own always loses to the rule's tag. The result is sorted
    /// lexically (the order carries no meaning, but stays deterministic).
    pub fn resolve<I>(&self, candidates: I) -> Vec<Tag>
    where
        I: IntoIterator<Item = Tag>,
    {
        let mut working: BTreeSet<Tag> = candidates.into_iter().collect();

        for rule in &self.rules {
            if !working.contains(&rule.tag) {
                continue;
            }
            let own = rule.priority;
            for conflict in &rule.conflicts {
                if !working.contains(conflict) {
                    continue;
                }
                let other = self.priority(conflict).unwrap_or(u32::MAX);
                if own <= other {
                    working.remove(conflict);
                } else {
                    working.remove(&rule.tag);
                    break;
                }
            }
        }

        working.into_iter().collect()
    }
}

impl Default for TagRuleTable {
    fn default() -> Self {
        Self::builtin()
    }
}
