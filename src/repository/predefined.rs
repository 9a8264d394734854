use diesel::prelude::*;

use crate::domain::predefined::{
    NewPredefinedFlavor as DomainNewPredefinedFlavor,
    NewPredefinedSize as DomainNewPredefinedSize, PredefinedFlavor as DomainPredefinedFlavor,
    PredefinedSize as DomainPredefinedSize,
};
use crate::models::predefined::{
    NewPredefinedFlavor as DbNewPredefinedFlavor, NewPredefinedSize as DbNewPredefinedSize,
    PredefinedFlavor as DbPredefinedFlavor, PredefinedSize as DbPredefinedSize,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, PredefinedReader, PredefinedWriter};

impl PredefinedReader for DieselRepository {
    fn list_predefined_sizes(&self) -> RepositoryResult<Vec<DomainPredefinedSize>> {
        use crate::schema::predefined_sizes;

        let mut conn = self.conn()?;

        let sizes = predefined_sizes::table
            .order(predefined_sizes::id.asc())
            .load::<DbPredefinedSize>(&mut conn)?;

        Ok(sizes.into_iter().map(DomainPredefinedSize::from).collect())
    }

    fn list_predefined_flavors(&self) -> RepositoryResult<Vec<DomainPredefinedFlavor>> {
        use crate::schema::predefined_flavors;

        let mut conn = self.conn()?;

        let flavors = predefined_flavors::table
            .order(predefined_flavors::name.asc())
            .load::<DbPredefinedFlavor>(&mut conn)?;

        Ok(flavors
            .into_iter()
            .map(DomainPredefinedFlavor::from)
            .collect())
    }
}

impl PredefinedWriter for DieselRepository {
    fn create_predefined_size(
        &self,
        size: &DomainNewPredefinedSize,
    ) -> RepositoryResult<DomainPredefinedSize> {
        use crate::schema::predefined_sizes;

        let mut conn = self.conn()?;

        let created = diesel::insert_into(predefined_sizes::table)
            .values(&DbNewPredefinedSize::from(size))
            .get_result::<DbPredefinedSize>(&mut conn)?;

        Ok(created.into())
    }

    fn delete_predefined_size(&self, size_id: i32) -> RepositoryResult<()> {
        use crate::schema::predefined_sizes;

        let mut conn = self.conn()?;

        let deleted =
            diesel::delete(predefined_sizes::table.filter(predefined_sizes::id.eq(size_id)))
                .execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    fn create_predefined_flavor(
        &self,
        flavor: &DomainNewPredefinedFlavor,
    ) -> RepositoryResult<DomainPredefinedFlavor> {
        use crate::schema::predefined_flavors;

        let mut conn = self.conn()?;

        let created = diesel::insert_into(predefined_flavors::table)
            .values(&DbNewPredefinedFlavor::from(flavor))
            .get_result::<DbPredefinedFlavor>(&mut conn)?;

        Ok(created.into())
    }

    fn delete_predefined_flavor(&self, flavor_id: i32) -> RepositoryResult<()> {
        use crate::schema::predefined_flavors;

        let mut conn = self.conn()?;

        let deleted =
            diesel::delete(predefined_flavors::table.filter(predefined_flavors::id.eq(flavor_id)))
                .execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
