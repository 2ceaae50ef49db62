use std::collections::BTreeMap;

use color_eyre::Result;
use rand::seq::SliceRandom;

use crate::db::Db;
use crate::models::{Category, NewQuestion, Question};
use crate::names;

// ---------------------------------------------------------------------------
// QuestionStore trait (DIP: service defines the abstraction it needs)
// ---------------------------------------------------------------------------

#[cfg_attr(test, mockall::automock)]
pub trait QuestionStore: Send + Sync {
    fn categories(&self) -> impl std::future::Future<Output = Result<Vec<Category>>> + Send;

    fn questions(&self) -> impl std::future::Future<Output = Result<Vec<Question>>> + Send;

    fn questions_in_category(
        &self,
        category: i64,
    ) -> impl std::future::Future<Output = Result<Vec<Question>>> + Send;

    fn search_questions(
        &self,
        term: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Question>>> + Send;

    fn insert_question(
        &self,
        new: &NewQuestion,
    ) -> impl std::future::Future<Output = Result<Question>> + Send;

    fn delete_question(&self, id: i64) -> impl std::future::Future<Output = Result<bool>> + Send;
}

impl QuestionStore for Db {
    async fn categories(&self) -> Result<Vec<Category>> {
        Db::categories(self).await
    }

    async fn questions(&self) -> Result<Vec<Question>> {
        Db::questions(self).await
    }

    async fn questions_in_category(&self, category: i64) -> Result<Vec<Question>> {
        Db::questions_in_category(self, category).await
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        Db::search_questions(self, term).await
    }

    async fn insert_question(&self, new: &NewQuestion) -> Result<Question> {
        Db::insert_question(self, new).await
    }

    async fn delete_question(&self, id: i64) -> Result<bool> {
        Db::delete_question(self, id).await
    }
}

// ---------------------------------------------------------------------------
// Outcome types
// ---------------------------------------------------------------------------

pub struct QuestionPage {
    pub questions: Vec<Question>,
    /// Size of the filtered set before pagination, not of this page.
    pub total_questions: usize,
    /// Echo of the category filter; 0 means "all categories".
    pub current_category: Option<i64>,
    /// Full {id -> type} map, present only in unfiltered listings.
    pub categories: Option<BTreeMap<i64, String>>,
}

pub enum PageOutcome {
    /// The requested slice plus listing metadata.
    Page(QuestionPage),
    /// A search term and a category filter were both supplied.
    FilterConflict,
    /// The requested page lies beyond the filtered set (or the set is empty).
    OutOfRange,
}

pub enum DrawOutcome {
    /// A question whose id is not in the supplied history.
    Drawn(Question),
    /// "Any category" draw with the whole pool already seen.
    PoolExhausted,
    /// Specific-category draw with that category's pool already seen.
    CategoryExhausted,
    /// No unseen candidate even though the history is smaller than the
    /// pool; the history lists ids the pool never contained.
    InvalidHistory,
}

// ---------------------------------------------------------------------------
// Pager
// ---------------------------------------------------------------------------

/// Slice `items` down to the requested 1-indexed page of
/// [`names::QUESTIONS_PER_PAGE`] entries. Pages past the end are empty.
pub fn paginate<T>(items: &[T], page: u32) -> &[T] {
    let start = (page.max(1) as usize - 1).saturating_mul(names::QUESTIONS_PER_PAGE);
    if start >= items.len() {
        return &[];
    }
    let end = (start + names::QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}

// ---------------------------------------------------------------------------
// TriviaService
// ---------------------------------------------------------------------------

pub struct TriviaService<S: QuestionStore = Db> {
    store: S,
}

impl<S: QuestionStore + Clone> Clone for TriviaService<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S: QuestionStore> TriviaService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn category_map(&self) -> Result<BTreeMap<i64, String>> {
        Ok(to_map(self.store.categories().await?))
    }

    /// Resolve a question listing. Modes are mutually exclusive and checked
    /// in precedence order: conflicting filters, search, category,
    /// unfiltered. The conflict check uses raw parameter presence; a
    /// malformed category only falls back to unfiltered when no search term
    /// is in play.
    pub async fn question_page(
        &self,
        search: Option<&str>,
        category: Option<&str>,
        page: u32,
    ) -> Result<PageOutcome> {
        if search.is_some() && category.is_some() {
            return Ok(PageOutcome::FilterConflict);
        }

        if let Some(term) = search {
            let matches = self.store.search_questions(term).await?;
            return Ok(page_of(matches, page, None, None));
        }

        if let Some(id) = category.and_then(parse_category) {
            let matches = self.store.questions_in_category(id).await?;
            return Ok(page_of(matches, page, Some(id), None));
        }

        let all = self.store.questions().await?;
        let categories = to_map(self.store.categories().await?);
        Ok(page_of(
            all,
            page,
            Some(names::ALL_CATEGORIES),
            Some(categories),
        ))
    }

    pub async fn add_question(&self, new: &NewQuestion) -> Result<Question> {
        self.store.insert_question(new).await
    }

    pub async fn remove_question(&self, id: i64) -> Result<bool> {
        self.store.delete_question(id).await
    }

    /// Draw one unseen question uniformly at random from the selected pool.
    /// The caller owns the history; nothing is recorded between draws.
    pub async fn draw_question(&self, category: i64, seen: &[i64]) -> Result<DrawOutcome> {
        let pool = if category == names::ALL_CATEGORIES {
            self.store.questions().await?
        } else {
            self.store.questions_in_category(category).await?
        };

        if seen.len() >= pool.len() {
            return Ok(if category == names::ALL_CATEGORIES {
                DrawOutcome::PoolExhausted
            } else {
                DrawOutcome::CategoryExhausted
            });
        }

        let unseen: Vec<Question> = pool
            .into_iter()
            .filter(|q| !seen.contains(&q.id))
            .collect();

        // rng stays inside a sync scope so the future remains Send
        let choice = {
            let mut rng = rand::thread_rng();
            unseen.choose(&mut rng).cloned()
        };

        match choice {
            Some(question) => Ok(DrawOutcome::Drawn(question)),
            None => Ok(DrawOutcome::InvalidHistory),
        }
    }
}

fn page_of(
    matches: Vec<Question>,
    page: u32,
    current_category: Option<i64>,
    categories: Option<BTreeMap<i64, String>>,
) -> PageOutcome {
    let slice = paginate(&matches, page);
    if slice.is_empty() {
        return PageOutcome::OutOfRange;
    }
    PageOutcome::Page(QuestionPage {
        questions: slice.to_vec(),
        total_questions: matches.len(),
        current_category,
        categories,
    })
}

/// A category filter is honored only when it is a plain non-negative
/// integer; anything else reads as "no filter".
fn parse_category(raw: &str) -> Option<i64> {
    if raw.bytes().all(|b| b.is_ascii_digit()) {
        raw.parse().ok()
    } else {
        None
    }
}

fn to_map(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
