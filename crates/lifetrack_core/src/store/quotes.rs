//! Quote CRUD operations.

use super::{require, StoreResult, TrackerStore};
use crate::kv::KvBackend;
use crate::model::quote::Quote;
use crate::model::{allocate_id, EntityId, EntityKind};
use crate::store::StoreError;
use log::info;

/// Raw quote fields as supplied by the presentation layer.
#[derive(Debug, Clone, Default)]
pub struct QuoteDraft {
    pub content: String,
    pub author: String,
}

impl<B: KvBackend> TrackerStore<B> {
    /// Creates a quote; both content and author are required.
    pub fn create_quote(&mut self, draft: QuoteDraft) -> StoreResult<Quote> {
        let content = require(&draft.content, "quote content is required")?;
        let author = require(&draft.author, "quote author is required")?;

        let quote = Quote {
            id: allocate_id(self.quotes.iter().map(|quote| quote.id)),
            content,
            author,
        };

        self.quotes.push(quote);
        if let Err(err) = self.persist_quotes() {
            self.quotes.pop();
            return Err(err);
        }

        let created = self.quotes[self.quotes.len() - 1].clone();
        info!("event=quote_create module=store status=ok id={}", created.id);
        self.notify("Quote added successfully!");
        Ok(created)
    }

    /// Removes a quote and returns it.
    pub fn delete_quote(&mut self, id: EntityId) -> StoreResult<Quote> {
        let index = self
            .quotes
            .iter()
            .position(|quote| quote.id == id)
            .ok_or(StoreError::NotFound {
                kind: EntityKind::Quote,
                id,
            })?;

        let removed = self.quotes.remove(index);
        if let Err(err) = self.persist_quotes() {
            self.quotes.insert(index, removed);
            return Err(err);
        }

        info!("event=quote_delete module=store status=ok id={id}");
        self.notify("Quote has been deleted.");
        Ok(removed)
    }

    fn persist_quotes(&mut self) -> StoreResult<()> {
        super::persist_collection(&mut self.backend, EntityKind::Quote, &self.quotes)
    }
}
