use diesel::prelude::*;

use crate::domain::content::{
    ContentConfig as DomainContentConfig, UpdateContentConfig as DomainUpdateContentConfig,
};
use crate::models::content::{
    CONTENT_CONFIG_ID, ContentConfig as DbContentConfig,
    UpdateContentConfig as DbUpdateContentConfig,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ContentReader, ContentWriter, DieselRepository};

impl ContentReader for DieselRepository {
    fn get_content_config(&self) -> RepositoryResult<DomainContentConfig> {
        use crate::schema::content_config;

        let mut conn = self.conn()?;

        let config = content_config::table
            .filter(content_config::id.eq(CONTENT_CONFIG_ID))
            .first::<DbContentConfig>(&mut conn)
            .optional()?;

        Ok(config.map(DomainContentConfig::from).unwrap_or_default())
    }
}

impl ContentWriter for DieselRepository {
    fn update_content_config(
        &self,
        updates: &DomainUpdateContentConfig,
    ) -> RepositoryResult<DomainContentConfig> {
        use crate::schema::content_config;

        let mut conn = self.conn()?;

        conn.transaction::<DomainContentConfig, RepositoryError, _>(|conn| {
            diesel::insert_or_ignore_into(content_config::table)
                .values(content_config::id.eq(CONTENT_CONFIG_ID))
                .execute(conn)?;

            let updated = diesel::update(
                content_config::table.filter(content_config::id.eq(CONTENT_CONFIG_ID)),
            )
            .set(&DbUpdateContentConfig::from(updates))
            .get_result::<DbContentConfig>(conn)?;

            Ok(updated.into())
        })
    }
}
