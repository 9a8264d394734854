use diesel::prelude::*;

use crate::domain::order::{
    NewOrder as DomainNewOrder, Order as DomainOrder, OrderListQuery,
    UpdateOrder as DomainUpdateOrder,
};
use crate::models::order::{
    NewOrder as DbNewOrder, Order as DbOrder, UpdateOrder as DbUpdateOrder,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, OrderReader, OrderWriter};

impl OrderReader for DieselRepository {
    fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<DomainOrder>> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let order = orders::table
            .filter(orders::id.eq(id))
            .first::<DbOrder>(&mut conn)
            .optional()?;

        order.map(DomainOrder::try_from).transpose()
    }

    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<Vec<DomainOrder>> {
        use crate::schema::orders;

        let mut conn = self.conn()?;

        let mut items = orders::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(status) = query.status {
            items = items.filter(orders::status.eq(status.as_str()));
        }

        let rows = items
            .order((orders::created_at.desc(), orders::id.desc()))
            .load::<DbOrder>(&mut conn)?;

        rows.into_iter().map(DomainOrder::try_from).collect()
    }
}

impl OrderWriter for DieselRepository {
    fn create_order(&self, new_order: &DomainNewOrder) -> RepositoryResult<DomainOrder> {
        use crate::schema::orders;

        let mut conn = self.conn()?;

        let db_new = DbNewOrder::try_from(new_order)?;

        let created = diesel::insert_into(orders::table)
            .values(&db_new)
            .get_result::<DbOrder>(&mut conn)?;

        created.try_into()
    }

    fn update_order(
        &self,
        order_id: i32,
        updates: &DomainUpdateOrder,
    ) -> RepositoryResult<DomainOrder> {
        use crate::schema::orders;

        let mut conn = self.conn()?;

        let db_updates = DbUpdateOrder::try_from(updates)?;

        let updated = diesel::update(orders::table.filter(orders::id.eq(order_id)))
            .set(&db_updates)
            .get_result::<DbOrder>(&mut conn)?;

        updated.try_into()
    }

    fn delete_order(&self, order_id: i32) -> RepositoryResult<()> {
        use crate::schema::orders;

        let mut conn = self.conn()?;

        let deleted =
            diesel::delete(orders::table.filter(orders::id.eq(order_id))).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
