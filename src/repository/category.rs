use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::category::{
    Category as DomainCategory, NewCategory as DomainNewCategory,
    UpdateCategory as DomainUpdateCategory,
};
use crate::models::category::{
    Category as DbCategory, NewCategory as DbNewCategory, UpdateCategory as DbUpdateCategory,
};
use crate::models::{from_json, to_json};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CategoryReader, CategoryWriter, DieselRepository};

impl CategoryReader for DieselRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<DomainCategory>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let categories = categories::table
            .order(categories::name.asc())
            .load::<DbCategory>(&mut conn)?;

        Ok(categories.into_iter().map(DomainCategory::from).collect())
    }

    fn get_category_by_id(&self, category_id: i32) -> RepositoryResult<Option<DomainCategory>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .filter(categories::id.eq(category_id))
            .first::<DbCategory>(&mut conn)
            .optional()?;

        Ok(category.map(DomainCategory::from))
    }

    fn get_category_by_name(&self, name: &str) -> RepositoryResult<Option<DomainCategory>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .filter(categories::name.eq(name))
            .first::<DbCategory>(&mut conn)
            .optional()?;

        Ok(category.map(DomainCategory::from))
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(
        &self,
        new_category: &DomainNewCategory,
    ) -> RepositoryResult<DomainCategory> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let insertable = DbNewCategory::from(new_category);

        let created = diesel::insert_into(categories::table)
            .values(&insertable)
            .get_result::<DbCategory>(&mut conn)?;

        Ok(created.into())
    }

    fn update_category(
        &self,
        category_id: i32,
        updates: &DomainUpdateCategory,
    ) -> RepositoryResult<DomainCategory> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let db_updates = DbUpdateCategory::from(updates);

        let updated = diesel::update(categories::table.filter(categories::id.eq(category_id)))
            .set(&db_updates)
            .get_result::<DbCategory>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_category(&self, category_id: i32) -> RepositoryResult<()> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        conn.transaction::<(), RepositoryError, _>(|conn| {
            let deleted =
                diesel::delete(categories::table.filter(categories::id.eq(category_id)))
                    .execute(conn)?;

            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }

            let detached = detach_category_from_products(conn, category_id)?;
            if detached > 0 {
                log::info!("Detached category {category_id} from {detached} product(s)");
            }

            Ok(())
        })
    }
}

fn detach_category_from_products(
    conn: &mut SqliteConnection,
    category_id: i32,
) -> RepositoryResult<usize> {
    use crate::schema::products;

    let rows = products::table
        .select((products::id, products::category_ids))
        .load::<(i32, String)>(conn)?;

    let now = chrono::Local::now().naive_utc();
    let mut detached = 0;

    for (product_id, raw_ids) in rows {
        let mut ids: Vec<i32> = from_json("category_ids", &raw_ids)?;
        let before = ids.len();
        ids.retain(|id| *id != category_id);
        if ids.len() == before {
            continue;
        }

        diesel::update(products::table.filter(products::id.eq(product_id)))
            .set((
                products::category_ids.eq(to_json(&ids)?),
                products::updated_at.eq(now),
            ))
            .execute(conn)?;
        detached += 1;
    }

    Ok(detached)
}
