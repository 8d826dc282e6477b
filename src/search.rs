use crate::backend::TrackerBackend;
use crate::constants::*;
use crate::errors::{ClientError, ClientResult};
use crate::models::{Page, SearchCriteria, WorksPage};
use crate::tracker::Tracker;

/// Checks a date/time range before it is sent anywhere.
pub fn validate(criteria: &SearchCriteria) -> ClientResult<()> {
    let (from_date, to_date) = match (criteria.from_date, criteria.to_date) {
        (None, None) => return Ok(()),
        (Some(from_date), Some(to_date)) => (from_date, to_date),
        _ => return Err(ClientError::validation(ERR_MISSING_DATE)),
    };

    if from_date > to_date {
        return Err(ClientError::validation(ERR_FROM_DATE_AFTER_TO_DATE));
    }

    if from_date == to_date {
        if let (Some(from_time), Some(to_time)) = (criteria.from_time, criteria.to_time) {
            if from_time > to_time {
                return Err(ClientError::validation(ERR_FROM_TIME_AFTER_TO_TIME));
            }
        }
    }

    Ok(())
}

/// An issued search request. Its result is applied only while it is the latest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    pub criteria: SearchCriteria,
    pub page_number: u32,
}

impl SearchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Applied,
    /// A newer search was issued while this one was in flight.
    Discarded,
}

#[derive(Debug, Clone, Default)]
pub struct SearchController {
    criteria: SearchCriteria,
    page: Page,
    latest_generation: u64,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn latest_generation(&self) -> u64 {
        self.latest_generation
    }

    pub fn issue(
        &mut self,
        criteria: SearchCriteria,
        page_number: Option<u32>,
    ) -> ClientResult<SearchTicket> {
        validate(&criteria)?;

        self.latest_generation += 1;

        Ok(SearchTicket {
            generation: self.latest_generation,
            criteria,
            page_number: page_number.unwrap_or(FIRST_PAGE),
        })
    }

    pub fn is_latest(&self, ticket: &SearchTicket) -> bool {
        ticket.generation == self.latest_generation
    }

    /// Records the criteria and page of an applied result. Criteria that never produced a
    /// page are not kept, so navigation stays on the last successful search.
    pub fn accept(&mut self, criteria: SearchCriteria, current_page: u32, total_pages: u32) {
        let clamped = if total_pages > 0 {
            current_page.clamp(FIRST_PAGE, total_pages)
        } else {
            current_page.max(FIRST_PAGE)
        };
        if clamped != current_page {
            tracing::warn!(current_page, total_pages, "backend returned page out of range");
        }

        self.criteria = criteria;
        self.page = Page {
            current_page: clamped,
            total_pages,
        };
    }

    /// `Some(page)` when `page` lies within `[1, total_pages]`.
    pub fn target(&self, page: u32) -> Option<u32> {
        self.page.contains(page).then_some(page)
    }

    pub fn next_page(&self) -> Option<u32> {
        self.page
            .current_page
            .checked_add(1)
            .and_then(|page| self.target(page))
    }

    pub fn previous_page(&self) -> Option<u32> {
        self.page
            .current_page
            .checked_sub(1)
            .and_then(|page| self.target(page))
    }
}

impl<B: TrackerBackend> Tracker<B> {
    /// Validates and issues a search. A validation failure is shown in the error banner.
    pub fn begin_search(
        &mut self,
        criteria: SearchCriteria,
        page_number: Option<u32>,
    ) -> ClientResult<SearchTicket> {
        let state = self.state_mut();
        state.notices.clear_error();

        match state.search.issue(criteria, page_number) {
            Ok(ticket) => {
                tracing::debug!(
                    generation = ticket.generation,
                    page = ticket.page_number,
                    "search issued"
                );
                Ok(ticket)
            }
            Err(error) => {
                state.notices.show_error(error.message());
                Err(error)
            }
        }
    }

    /// Applies a fetch result, unless a newer search has been issued since.
    pub fn complete_search(
        &mut self,
        ticket: SearchTicket,
        result: ClientResult<WorksPage>,
    ) -> ClientResult<SearchOutcome> {
        let state = self.state_mut();

        if !state.search.is_latest(&ticket) {
            tracing::debug!(
                generation = ticket.generation,
                latest = state.search.latest_generation(),
                "discarding stale search result"
            );
            return Ok(SearchOutcome::Discarded);
        }

        state.app_ready = true;

        match result {
            Ok(works_page) => {
                state.search.accept(
                    ticket.criteria,
                    works_page.current_page,
                    works_page.total_pages,
                );
                let empty = works_page.works.is_empty();
                state.working_set.load(works_page.works);
                state.notices.clear_error();
                if empty {
                    state.notices.show_info(INFO_NO_RESULTS);
                }
                Ok(SearchOutcome::Applied)
            }
            Err(error) => {
                tracing::warn!(%error, "search failed");
                state.notices.show_error(error.message());
                Err(error)
            }
        }
    }

    pub async fn search(
        &mut self,
        criteria: SearchCriteria,
        page_number: Option<u32>,
    ) -> ClientResult<SearchOutcome> {
        let ticket = self.begin_search(criteria, page_number)?;
        let result = self
            .backend()
            .fetch_works(&ticket.criteria, ticket.page_number)
            .await;
        self.complete_search(ticket, result)
    }

    /// Re-issues the current search on the current page.
    pub async fn reload(&mut self) -> ClientResult<SearchOutcome> {
        let search = &self.state().search;
        let criteria = *search.criteria();
        let page = search.page().current_page;
        self.search(criteria, Some(page)).await
    }

    /// Ignored (`Ok(None)`) when `page_number` is outside `[1, total_pages]`.
    pub async fn go_to_page(&mut self, page_number: u32) -> ClientResult<Option<SearchOutcome>> {
        let target = self.state().search.target(page_number);
        self.search_page(target).await
    }

    pub async fn next(&mut self) -> ClientResult<Option<SearchOutcome>> {
        let target = self.state().search.next_page();
        self.search_page(target).await
    }

    pub async fn previous(&mut self) -> ClientResult<Option<SearchOutcome>> {
        let target = self.state().search.previous_page();
        self.search_page(target).await
    }

    async fn search_page(&mut self, target: Option<u32>) -> ClientResult<Option<SearchOutcome>> {
        let Some(page_number) = target else {
            return Ok(None);
        };
        let criteria = *self.state().search.criteria();
        self.search(criteria, Some(page_number)).await.map(Some)
    }
}
