use crate::db::{DbConnection, DbPool};
use crate::domain::category::Category;
use crate::domain::pagination::Pagination;
use crate::domain::types::{CategoryId, CategorySortField, PerPage, SortDirection};

pub mod category;
pub mod errors;
#[cfg(test)]
pub mod test;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between threads.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Filtered, sorted page request for categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySearchQuery {
    /// Zero-based page index.
    pub page: usize,
    /// Page size, always greater than zero.
    pub per_page: PerPage,
    /// Free-text terms matched against name or description, ignoring case.
    pub terms: String,
    /// Field to order by.
    pub sort: CategorySortField,
    /// Ordering direction.
    pub direction: SortDirection,
}

impl CategorySearchQuery {
    pub fn paginate(mut self, page: usize, per_page: PerPage) -> Self {
        self.page = page;
        self.per_page = per_page;
        self
    }

    pub fn search(mut self, terms: impl Into<String>) -> Self {
        self.terms = terms.into();
        self
    }

    pub fn sort_by(mut self, sort: CategorySortField, direction: SortDirection) -> Self {
        self.sort = sort;
        self.direction = direction;
        self
    }

    /// Trimmed search terms, or `None` when blank.
    pub fn normalized_terms(&self) -> Option<&str> {
        let terms = self.terms.trim();
        (!terms.is_empty()).then_some(terms)
    }

    /// Number of items to skip before the requested page, or `None` when
    /// the page lies beyond any addressable row.
    pub fn offset(&self) -> Option<usize> {
        self.page.checked_mul(self.per_page.get())
    }
}

impl Default for CategorySearchQuery {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: PerPage::DEFAULT,
            terms: String::new(),
            sort: CategorySortField::default(),
            direction: SortDirection::default(),
        }
    }
}

/// Read-only operations for category aggregates.
pub trait CategoryReader {
    /// Retrieve a category by its identifier; absence is not an error.
    fn find_by_id(&self, id: &CategoryId) -> RepositoryResult<Option<Category>>;
    /// Search, sort and paginate categories.
    fn find_all(&self, query: &CategorySearchQuery) -> RepositoryResult<Pagination<Category>>;
}

/// Write operations for category aggregates.
pub trait CategoryWriter {
    /// Persist a brand-new category, returning its stored form.
    fn create(&self, category: &Category) -> RepositoryResult<Category>;
    /// Persist a mutated category keyed by its identifier.
    fn update(&self, category: &Category) -> RepositoryResult<Category>;
    /// Delete a category. Unknown identifiers are ignored.
    fn delete_by_id(&self, id: &CategoryId) -> RepositoryResult<()>;
}
