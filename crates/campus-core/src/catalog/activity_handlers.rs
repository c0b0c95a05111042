//! Activity handler operations that accept interface parameters and return
//! display-ready types.

use log::debug;
use validator::Validate;

use super::Catalog;
use crate::{
    display::Activities,
    error::{CampusError, Result},
    form::ActivityForm,
    models::{Activity, ActivityFilter},
    params::{DeleteActivity, Id, ListActivities},
};

impl Catalog {
    /// Handle listing activities with optional type, status and text filters.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use campus_core::{models::ActivityType, params::ListActivities, CatalogBuilder};
    /// # async {
    /// let catalog = CatalogBuilder::new().build().await?;
    /// let params = ListActivities {
    ///     kind: Some(ActivityType::Workshop),
    ///     ..Default::default()
    /// };
    /// let workshops = catalog.find_activities(&params).await?;
    /// # Result::<(), campus_core::CampusError>::Ok(())
    /// # };
    /// ```
    pub async fn find_activities(&self, params: &ListActivities) -> Result<Activities> {
        let activities = self.list_activities(ActivityFilter::from(params)).await?;
        Ok(Activities(activities))
    }

    /// Handle saving the record produced by a submitted activity form.
    ///
    /// An empty `id` creates a new activity; anything else replaces the stored
    /// activity with that ID.
    ///
    /// # Errors
    ///
    /// * `CampusError::InvalidInput` - When the record breaks a storage
    ///   invariant (short title, end before start, no tags, ...)
    /// * `CampusError::ActivityNotFound` - When updating an unknown ID
    pub async fn save_activity(&self, activity: Activity) -> Result<Activity> {
        activity.validate()?;

        if activity.is_new() {
            debug!("Creating activity '{}'", activity.title);
            return self.create_activity(activity).await;
        }

        let id = activity.id.clone();
        debug!("Updating activity {id}");
        self.update_activity(activity)
            .await?
            .ok_or(CampusError::ActivityNotFound { id })
    }

    /// Handle opening a stored activity in an edit form.
    ///
    /// Returns `None` when the activity does not exist.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use campus_core::{params::Id, CatalogBuilder};
    /// # async {
    /// let catalog = CatalogBuilder::new().build().await?;
    /// match catalog.edit_form(&Id::new("1")).await? {
    ///     Some(form) => println!("{}", form.title()),
    ///     None => println!("Activity not found"),
    /// }
    /// # Result::<(), campus_core::CampusError>::Ok(())
    /// # };
    /// ```
    pub async fn edit_form(&self, params: &Id) -> Result<Option<ActivityForm>> {
        let activity = self.get_activity(params).await?;
        Ok(activity.as_ref().map(ActivityForm::edit))
    }

    /// Handle permanently deleting an activity with confirmation.
    ///
    /// Returns the deleted activity for confirmation.
    ///
    /// # Errors
    ///
    /// * `CampusError::InvalidInput` - When `confirmed` is false
    /// * `CampusError::ActivityNotFound` - When no activity has this ID
    pub async fn delete_activity(&self, params: &DeleteActivity) -> Result<Activity> {
        params.validate()?;
        self.delete_activity_by_id(&Id::new(params.id.as_str()))
            .await
    }
}
