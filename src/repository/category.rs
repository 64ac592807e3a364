use diesel::prelude::*;

use crate::domain::AggregateRoot;
use crate::domain::category::Category;
use crate::domain::pagination::Pagination;
use crate::domain::types::{CategoryId, CategorySortField, SortDirection};
use crate::models::category::{
    Category as DbCategory, CategoryChanges, NewCategory, search_key,
};
use crate::repository::{
    CategoryReader, CategorySearchQuery, CategoryWriter, DieselRepository, RepositoryResult,
};

/// Escapes `LIKE` wildcards so search terms match literally.
fn like_pattern(terms: &str) -> String {
    let escaped = terms
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

impl CategoryReader for DieselRepository {
    fn find_by_id(&self, id: &CategoryId) -> RepositoryResult<Option<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .find(id.as_str())
            .first::<DbCategory>(&mut conn)
            .optional()?;

        Ok(category.map(Into::into))
    }

    fn find_all(&self, query: &CategorySearchQuery) -> RepositoryResult<Pagination<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let pattern = query
            .normalized_terms()
            .map(|terms| like_pattern(&search_key(terms)));

        // Search columns hold case-folded copies of name and description.
        let query_builder = || {
            let mut builder = categories::table.into_boxed::<diesel::sqlite::Sqlite>();
            if let Some(pattern) = &pattern {
                builder = builder.filter(
                    categories::name_search
                        .like(pattern.clone())
                        .escape('\\')
                        .or(categories::description_search
                            .like(pattern.clone())
                            .escape('\\')),
                );
            }
            builder
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let Some(offset) = query.offset().and_then(|offset| i64::try_from(offset).ok()) else {
            return Ok(Pagination::new(
                query.page,
                query.per_page.get(),
                total,
                Vec::new(),
            ));
        };
        let limit = i64::try_from(query.per_page.get()).unwrap_or(i64::MAX);

        let items = match (query.sort, query.direction) {
            (CategorySortField::Name, SortDirection::Asc) => {
                query_builder().order(categories::name.asc())
            }
            (CategorySortField::Name, SortDirection::Desc) => {
                query_builder().order(categories::name.desc())
            }
            (CategorySortField::CreatedAt, SortDirection::Asc) => {
                query_builder().order(categories::created_at.asc())
            }
            (CategorySortField::CreatedAt, SortDirection::Desc) => {
                query_builder().order(categories::created_at.desc())
            }
            (CategorySortField::UpdatedAt, SortDirection::Asc) => {
                query_builder().order(categories::updated_at.asc())
            }
            (CategorySortField::UpdatedAt, SortDirection::Desc) => {
                query_builder().order(categories::updated_at.desc())
            }
        };

        let items = items
            .then_order_by(categories::id.asc())
            .offset(offset)
            .limit(limit)
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Category>>();

        Ok(Pagination::new(
            query.page,
            query.per_page.get(),
            total,
            items,
        ))
    }
}

impl CategoryWriter for DieselRepository {
    fn create(&self, category: &Category) -> RepositoryResult<Category> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let db_category = NewCategory::try_from(category)?;

        let stored = diesel::insert_into(categories::table)
            .values(&db_category)
            .returning(DbCategory::as_returning())
            .get_result::<DbCategory>(&mut conn)?;

        Ok(stored.into())
    }

    fn update(&self, category: &Category) -> RepositoryResult<Category> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let changes = CategoryChanges::try_from(category)?;

        let stored = diesel::update(categories::table.find(category.id().as_str()))
            .set(&changes)
            .returning(DbCategory::as_returning())
            .get_result::<DbCategory>(&mut conn)?;

        Ok(stored.into())
    }

    fn delete_by_id(&self, id: &CategoryId) -> RepositoryResult<()> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        diesel::delete(categories::table.find(id.as_str())).execute(&mut conn)?;

        Ok(())
    }
}
