//! Rule CRUD operations.

use super::{require, StoreResult, TrackerStore};
use crate::kv::KvBackend;
use crate::model::rule::{random_icon, Rule};
use crate::model::{allocate_id, EntityId, EntityKind};
use crate::store::StoreError;
use log::info;

/// Raw rule fields as supplied by the presentation layer.
#[derive(Debug, Clone, Default)]
pub struct RuleDraft {
    pub title: String,
    pub content: String,
    /// Symbolic icon name; a random pick from the fixed set when `None`.
    pub icon: Option<String>,
}

impl<B: KvBackend> TrackerStore<B> {
    /// Creates a rule; both title and content are required.
    pub fn create_rule(&mut self, draft: RuleDraft) -> StoreResult<Rule> {
        let title = require(&draft.title, "rule title is required")?;
        let content = require(&draft.content, "rule description is required")?;

        let rule = Rule {
            id: allocate_id(self.rules.iter().map(|rule| rule.id)),
            title,
            content,
            icon: draft.icon.unwrap_or_else(|| random_icon().to_string()),
        };

        self.rules.push(rule);
        if let Err(err) = self.persist_rules() {
            self.rules.pop();
            return Err(err);
        }

        let created = self.rules[self.rules.len() - 1].clone();
        info!("event=rule_create module=store status=ok id={}", created.id);
        self.notify("Rule added successfully!");
        Ok(created)
    }

    /// Removes a rule and returns it.
    pub fn delete_rule(&mut self, id: EntityId) -> StoreResult<Rule> {
        let index = self
            .rules
            .iter()
            .position(|rule| rule.id == id)
            .ok_or(StoreError::NotFound {
                kind: EntityKind::Rule,
                id,
            })?;

        let removed = self.rules.remove(index);
        if let Err(err) = self.persist_rules() {
            self.rules.insert(index, removed);
            return Err(err);
        }

        info!("event=rule_delete module=store status=ok id={id}");
        self.notify("Rule has been deleted.");
        Ok(removed)
    }

    fn persist_rules(&mut self) -> StoreResult<()> {
        super::persist_collection(&mut self.backend, EntityKind::Rule, &self.rules)
    }
}
