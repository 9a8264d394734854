use crate::domain::category::Category;
use crate::forms::categories::CategoryForm;
use crate::repository::errors::RepositoryError;
use crate::repository::{CategoryReader, CategoryWriter};
use crate::services::{ServiceError, ServiceResult};

pub fn list_categories<R>(repo: &R) -> ServiceResult<Vec<Category>>
where
    R: CategoryReader + ?Sized,
{
    repo.list_categories().map_err(ServiceError::from)
}

/// Returns the category with the submitted name, creating it when missing.
///
/// The flag is `true` when a new record was inserted.
pub fn ensure_category<R>(repo: &R, form: CategoryForm) -> ServiceResult<(Category, bool)>
where
    R: CategoryReader + CategoryWriter + ?Sized,
{
    let new_category = form
        .into_new_category()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if let Some(existing) = repo
        .get_category_by_name(&new_category.name)
        .map_err(ServiceError::from)?
    {
        return Ok((existing, false));
    }

    match repo.create_category(&new_category) {
        Ok(created) => {
            log::info!("Created category {} `{}`", created.id, created.name);
            Ok((created, true))
        }
        // Lost a race with a concurrent insert of the same name.
        Err(RepositoryError::Conflict) => repo
            .get_category_by_name(&new_category.name)
            .map_err(ServiceError::from)?
            .map(|category| (category, false))
            .ok_or(ServiceError::Conflict),
        Err(err) => Err(ServiceError::from(err)),
    }
}

pub fn update_category<R>(repo: &R, category_id: i32, form: CategoryForm) -> ServiceResult<Category>
where
    R: CategoryWriter + ?Sized,
{
    let updates = form
        .into_update_category()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_category(category_id, &updates)
        .map_err(ServiceError::from)
}

/// Deletes the category; products referencing it lose the reference.
pub fn delete_category<R>(repo: &R, category_id: i32) -> ServiceResult<()>
where
    R: CategoryWriter + ?Sized,
{
    repo.delete_category(category_id)
        .map_err(ServiceError::from)?;
    log::info!("Deleted category {category_id}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::domain::category::{NewCategory, UpdateCategory};
    use crate::repository::errors::RepositoryResult;
    use crate::repository::mock::{MockCategoryReader, MockCategoryWriter};

    fn datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or_default()
    }

    fn category(id: i32, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            description: None,
            created_at: datetime(),
            updated_at: datetime(),
        }
    }

    fn form(name: &str) -> CategoryForm {
        CategoryForm {
            name: name.to_string(),
            description: None,
        }
    }

    struct FakeRepo {
        category_reader: MockCategoryReader,
        category_writer: MockCategoryWriter,
    }

    impl FakeRepo {
        fn new() -> Self {
            Self {
                category_reader: MockCategoryReader::new(),
                category_writer: MockCategoryWriter::new(),
            }
        }
    }

    impl CategoryReader for FakeRepo {
        fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
            self.category_reader.list_categories()
        }

        fn get_category_by_id(&self, category_id: i32) -> RepositoryResult<Option<Category>> {
            self.category_reader.get_category_by_id(category_id)
        }

        fn get_category_by_name(&self, name: &str) -> RepositoryResult<Option<Category>> {
            self.category_reader.get_category_by_name(name)
        }
    }

    impl CategoryWriter for FakeRepo {
        fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category> {
            self.category_writer.create_category(new_category)
        }

        fn update_category(
            &self,
            category_id: i32,
            updates: &UpdateCategory,
        ) -> RepositoryResult<Category> {
            self.category_writer.update_category(category_id, updates)
        }

        fn delete_category(&self, category_id: i32) -> RepositoryResult<()> {
            self.category_writer.delete_category(category_id)
        }
    }

    #[test]
    fn ensure_category_returns_existing_record() {
        let mut repo = FakeRepo::new();
        repo.category_reader
            .expect_get_category_by_name()
            .times(1)
            .withf(|name| name == "Tartes")
            .returning(|_| Ok(Some(category(2, "Tartes"))));

        let (found, created) = ensure_category(&repo, form(" Tartes ")).expect("expected success");

        assert_eq!(found.id, 2);
        assert!(!created);
    }

    #[test]
    fn ensure_category_creates_when_missing() {
        let mut repo = FakeRepo::new();
        repo.category_reader
            .expect_get_category_by_name()
            .returning(|_| Ok(None));
        repo.category_writer
            .expect_create_category()
            .times(1)
            .withf(|new_category| new_category.name == "Macarons")
            .returning(|_| Ok(category(7, "Macarons")));

        let (found, created) = ensure_category(&repo, form("Macarons")).expect("expected success");

        assert_eq!(found.id, 7);
        assert!(created);
    }

    #[test]
    fn ensure_category_recovers_from_concurrent_insert() {
        let mut repo = FakeRepo::new();
        let mut calls = 0;
        repo.category_reader
            .expect_get_category_by_name()
            .times(2)
            .returning(move |_| {
                calls += 1;
                Ok((calls > 1).then(|| category(8, "Cookies")))
            });
        repo.category_writer
            .expect_create_category()
            .returning(|_| Err(RepositoryError::Conflict));

        let (found, created) = ensure_category(&repo, form("Cookies")).expect("expected success");

        assert_eq!(found.id, 8);
        assert!(!created);
    }

    #[test]
    fn delete_category_maps_missing_to_not_found() {
        let mut repo = FakeRepo::new();
        repo.category_writer
            .expect_delete_category()
            .returning(|_| Err(RepositoryError::NotFound));

        assert!(matches!(
            delete_category(&repo, 1),
            Err(ServiceError::NotFound)
        ));
    }

    #[test]
    fn update_category_rejects_blank_name() {
        let repo = FakeRepo::new();

        assert!(matches!(
            update_category(&repo, 1, form("  ")),
            Err(ServiceError::Form(_))
        ));
    }
}
