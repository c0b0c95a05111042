//! Activity operations for the Catalog.

use tokio::task;

use super::Catalog;
use crate::{
    db::Database,
    error::{CampusError, Result},
    models::{Activity, ActivityFilter},
    params::Id,
};

impl Catalog {
    /// Lists activities matching `filter`, ordered by start date.
    pub async fn list_activities(&self, filter: ActivityFilter) -> Result<Vec<Activity>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_activities(&filter)
        })
        .await
        .map_err(CampusError::join)?
    }

    /// Retrieves an activity by its ID.
    pub async fn get_activity(&self, params: &Id) -> Result<Option<Activity>> {
        let db_path = self.db_path.clone();
        let activity_id = params.id.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_activity(&activity_id)
        })
        .await
        .map_err(CampusError::join)?
    }

    /// Stores a new activity and returns it with its assigned ID.
    pub async fn create_activity(&self, activity: Activity) -> Result<Activity> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.insert_activity(&activity)
        })
        .await
        .map_err(CampusError::join)?
    }

    /// Replaces a stored activity. Returns `None` when its ID is unknown.
    pub async fn update_activity(&self, activity: Activity) -> Result<Option<Activity>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_activity(&activity)
        })
        .await
        .map_err(CampusError::join)?
    }

    /// Permanently deletes an activity by its ID.
    /// This operation cannot be undone.
    pub async fn delete_activity_by_id(&self, params: &Id) -> Result<Activity> {
        let db_path = self.db_path.clone();
        let activity_id = params.id.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_activity(&activity_id)
        })
        .await
        .map_err(CampusError::join)?
    }
}
