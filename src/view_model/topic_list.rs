//! Home screen state: the topic collection, its category filter and the
//! statistics panel.

use std::collections::HashSet;

use tracing::debug;

use super::sync::{self, Mutation};
use super::{
    ApplyOutcome, InFlight, MountEpoch, PendingAction, SubmitError, Ticket, Toast,
};
use crate::api::ForumClient;
use crate::error::{validation, ForumResult};
use crate::models::{Category, NewTopic, Topic};

/// Figures shown in the "Статистика портала" panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForumStats {
    /// Distinct authors
    pub players: usize,
    /// Topics in the unfiltered collection
    pub active_topics: usize,
    /// Distinct categories
    pub worlds: usize,
    /// Sum of reply counters
    pub messages: i64,
}

#[derive(Debug, Default)]
pub struct TopicListViewModel {
    topics: Vec<Topic>,
    filter: Option<String>,
    selected: usize,
    loading: bool,
    load_failed: bool,
    loaded_once: bool,
    epoch: MountEpoch,
    in_flight: InFlight,
    outbox: Vec<Toast>,
}

impl TopicListViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    // -- lifecycle --------------------------------------------------------

    /// Start a fresh mount and begin loading.
    pub fn mount(&mut self) -> Ticket {
        self.epoch.bump();
        self.in_flight.clear();
        self.begin_load()
    }

    /// Leave the screen: late results are dropped and guards released.
    pub fn unmount(&mut self) {
        self.epoch.bump();
        self.in_flight.clear();
        self.loading = false;
    }

    // -- load -------------------------------------------------------------

    pub fn begin_load(&mut self) -> Ticket {
        self.loading = true;
        self.epoch.ticket()
    }

    pub fn apply_topics(&mut self, ticket: Ticket, result: ForumResult<Vec<Topic>>) -> ApplyOutcome {
        if !self.epoch.is_current(ticket) {
            debug!("dropping stale topic list");
            return ApplyOutcome::Stale;
        }
        self.loading = false;
        self.replace_topics(result)
    }

    fn replace_topics(&mut self, result: ForumResult<Vec<Topic>>) -> ApplyOutcome {
        match result {
            Ok(topics) => {
                self.topics = topics;
                self.load_failed = false;
                self.loaded_once = true;
                self.clamp_selection();
                ApplyOutcome::Succeeded
            }
            Err(err) => {
                self.load_failed = true;
                self.outbox.push(
                    Toast::error("Не удалось загрузить темы").with_detail(err.user_message()),
                );
                ApplyOutcome::Failed(err)
            }
        }
    }

    // -- create -----------------------------------------------------------

    /// Validate the form and claim the create guard.
    pub fn begin_create(&mut self, form: &NewTopic) -> Result<(Ticket, NewTopic), SubmitError> {
        let form = form.trimmed();
        validation::require("title", &form.title)?;
        validation::require("author", &form.author)?;
        validation::require("category", &form.category)?;
        self.in_flight.begin(PendingAction::CreateTopic)?;
        Ok((self.epoch.ticket(), form))
    }

    pub fn apply_create(
        &mut self,
        ticket: Ticket,
        result: Mutation<ForumResult<Vec<Topic>>>,
    ) -> ApplyOutcome {
        if !self.epoch.is_current(ticket) {
            debug!("dropping stale create result");
            return ApplyOutcome::Stale;
        }
        self.in_flight.finish(PendingAction::CreateTopic);
        match result {
            Mutation::Failed(err) => {
                self.outbox
                    .push(Toast::error("Не удалось создать тему").with_detail(err.user_message()));
                ApplyOutcome::Failed(err)
            }
            Mutation::Applied { resync } => {
                self.outbox.push(Toast::success("Тема создана!"));
                // The create went through even if the refresh did not.
                let _ = self.replace_topics(resync);
                ApplyOutcome::Succeeded
            }
        }
    }

    // -- delete -----------------------------------------------------------

    pub fn begin_delete(&mut self, id: i64) -> Result<Ticket, SubmitError> {
        self.in_flight.begin(PendingAction::DeleteTopic(id))?;
        Ok(self.epoch.ticket())
    }

    pub fn apply_delete(
        &mut self,
        ticket: Ticket,
        id: i64,
        result: Mutation<ForumResult<Vec<Topic>>>,
    ) -> ApplyOutcome {
        if !self.epoch.is_current(ticket) {
            debug!(id, "dropping stale delete result");
            return ApplyOutcome::Stale;
        }
        self.in_flight.finish(PendingAction::DeleteTopic(id));
        match result {
            Mutation::Failed(err) => {
                self.outbox
                    .push(Toast::error("Не удалось удалить тему").with_detail(err.user_message()));
                ApplyOutcome::Failed(err)
            }
            Mutation::Applied { resync } => {
                self.outbox.push(Toast::success("Тема удалена"));
                let _ = self.replace_topics(resync);
                ApplyOutcome::Succeeded
            }
        }
    }

    // -- whole operations -------------------------------------------------

    /// Fetch the collection and apply it.
    pub async fn load_topics(&mut self, client: &ForumClient) -> ApplyOutcome {
        let ticket = self.begin_load();
        let result = sync::load_topics(client).await;
        self.apply_topics(ticket, result)
    }

    /// Create a topic and resync before returning.
    pub async fn create_topic(
        &mut self,
        client: &ForumClient,
        form: &NewTopic,
    ) -> Result<ApplyOutcome, SubmitError> {
        let (ticket, form) = self.begin_create(form)?;
        let result = sync::create_topic(client, &form).await;
        Ok(self.apply_create(ticket, result))
    }

    /// Delete a topic and resync before returning.
    pub async fn delete_topic(
        &mut self,
        client: &ForumClient,
        id: i64,
    ) -> Result<ApplyOutcome, SubmitError> {
        let ticket = self.begin_delete(id)?;
        let result = sync::delete_topic(client, id).await;
        Ok(self.apply_delete(ticket, id, result))
    }

    // -- filter -----------------------------------------------------------

    /// Restrict the view to topics whose category equals `category` exactly.
    pub fn filter_by_category(&mut self, category: Option<&str>) {
        self.filter = category.map(str::to_string);
        self.clamp_selection();
    }

    /// Step the filter through the offered categories and back to none.
    pub fn cycle_filter(&mut self) {
        let current = self.filter.as_deref().and_then(Category::from_label);
        let next = Category::cycle_filter(current);
        self.filter_by_category(next.map(|c| c.label()));
    }

    pub fn clear_filter(&mut self) {
        self.filter_by_category(None);
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// The last-loaded topics matching the filter, in server order.
    pub fn filtered(&self) -> Vec<&Topic> {
        match &self.filter {
            Some(category) => self
                .topics
                .iter()
                .filter(|t| &t.category == category)
                .collect(),
            None => self.topics.iter().collect(),
        }
    }

    // -- selection --------------------------------------------------------

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_topic(&self) -> Option<&Topic> {
        self.filtered().get(self.selected).copied()
    }

    pub fn select_next(&mut self) {
        let len = self.filtered().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.filtered().len();
        self.selected = if len == 0 { 0 } else { self.selected.min(len - 1) };
    }

    // -- accessors --------------------------------------------------------

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Statistics over the unfiltered collection.
    pub fn stats(&self) -> ForumStats {
        let authors: HashSet<&str> = self.topics.iter().map(|t| t.author.as_str()).collect();
        let categories: HashSet<&str> = self.topics.iter().map(|t| t.category.as_str()).collect();
        ForumStats {
            players: authors.len(),
            active_topics: self.topics.len(),
            worlds: categories.len(),
            messages: self.topics.iter().map(|t| t.replies).sum(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    /// Whether a successful load has happened during this process.
    pub fn has_loaded(&self) -> bool {
        self.loaded_once
    }

    pub fn is_pending(&self, action: PendingAction) -> bool {
        self.in_flight.contains(action)
    }

    pub fn pending(&self) -> impl Iterator<Item = PendingAction> + '_ {
        self.in_flight.iter()
    }

    /// Hand queued toasts to the caller.
    pub fn drain_toasts(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.outbox)
    }
}
