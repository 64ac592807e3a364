use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::AggregateRoot;
use crate::domain::category::Category;
use crate::domain::pagination::Pagination;
use crate::domain::types::{CategoryId, CategorySortField, SortDirection};
use crate::models::category::search_key;
use crate::repository::{
    CategoryReader, CategorySearchQuery, CategoryWriter, RepositoryError, RepositoryResult,
};

/// Store operations that can be counted or forced to fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    Update,
    Delete,
    FindById,
    FindAll,
}

/// Simple in-memory repository used for unit tests.
#[derive(Default)]
pub struct TestRepository {
    categories: Mutex<Vec<Category>>,
    failures: HashMap<Operation, String>,
    calls: Mutex<HashMap<Operation, usize>>,
}

impl TestRepository {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories: Mutex::new(categories),
            ..Self::default()
        }
    }

    /// Makes `operation` fail with `RepositoryError::Unexpected(message)`.
    pub fn failing(mut self, operation: Operation, message: &str) -> Self {
        self.failures.insert(operation, message.to_string());
        self
    }

    /// How many times `operation` was invoked.
    pub fn calls(&self, operation: Operation) -> usize {
        self.calls
            .lock()
            .unwrap()
            .get(&operation)
            .copied()
            .unwrap_or(0)
    }

    /// Snapshot of the stored categories.
    pub fn stored(&self) -> Vec<Category> {
        self.categories.lock().unwrap().clone()
    }

    fn record(&self, operation: Operation) -> RepositoryResult<()> {
        *self.calls.lock().unwrap().entry(operation).or_insert(0) += 1;
        match self.failures.get(&operation) {
            Some(message) => Err(RepositoryError::Unexpected(message.clone())),
            None => Ok(()),
        }
    }

    fn matches(category: &Category, terms: &str) -> bool {
        let terms = search_key(terms);
        let contains = |value: Option<&str>| {
            value
                .map(|v| search_key(v).contains(&terms))
                .unwrap_or(false)
        };
        contains(category.name()) || contains(category.description())
    }

    fn compare(left: &Category, right: &Category, sort: CategorySortField) -> Ordering {
        match sort {
            CategorySortField::Name => left.name().cmp(&right.name()),
            CategorySortField::CreatedAt => left.created_at().cmp(&right.created_at()),
            CategorySortField::UpdatedAt => left.updated_at().cmp(&right.updated_at()),
        }
    }
}

impl CategoryReader for TestRepository {
    fn find_by_id(&self, id: &CategoryId) -> RepositoryResult<Option<Category>> {
        self.record(Operation::FindById)?;
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id() == id)
            .cloned())
    }

    fn find_all(&self, query: &CategorySearchQuery) -> RepositoryResult<Pagination<Category>> {
        self.record(Operation::FindAll)?;
        let mut items = self.stored();
        if let Some(terms) = query.normalized_terms() {
            items.retain(|c| Self::matches(c, terms));
        }
        items.sort_by(|a, b| {
            let ordering = Self::compare(a, b, query.sort);
            let ordering = match query.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            };
            ordering.then_with(|| a.id().cmp(b.id()))
        });
        let total = items.len();
        let items = items
            .into_iter()
            .skip(query.offset().unwrap_or(usize::MAX))
            .take(query.per_page.get())
            .collect();
        Ok(Pagination::new(
            query.page,
            query.per_page.get(),
            total,
            items,
        ))
    }
}

impl CategoryWriter for TestRepository {
    fn create(&self, category: &Category) -> RepositoryResult<Category> {
        self.record(Operation::Create)?;
        self.categories.lock().unwrap().push(category.clone());
        Ok(category.clone())
    }

    fn update(&self, category: &Category) -> RepositoryResult<Category> {
        self.record(Operation::Update)?;
        let mut categories = self.categories.lock().unwrap();
        match categories.iter_mut().find(|c| c.id() == category.id()) {
            Some(existing) => *existing = category.clone(),
            None => categories.push(category.clone()),
        }
        Ok(category.clone())
    }

    fn delete_by_id(&self, id: &CategoryId) -> RepositoryResult<()> {
        self.record(Operation::Delete)?;
        self.categories.lock().unwrap().retain(|c| c.id() != id);
        Ok(())
    }
}
