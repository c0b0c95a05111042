//! Activity commands and their handler.
//!
//! Argument structs carry clap derives and convert into the core parameter
//! types with `From`, keeping clap out of `campus-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params / Form events → Catalog
//! ```
//!
//! Create and edit do not build an `Activity` themselves. Every flag becomes a
//! field change on an [`ActivityForm`], exactly as an interactive form would
//! receive it, and the form decides whether the record may be saved.

use anyhow::{bail, Context, Result};
use campus_core::{
    form::{ActivityForm, Field, FormMode, Submission},
    models::{Activity, ActivityStatus, ActivityType},
    params::{DeleteActivity, Id, ListActivities},
    Catalog, FormReport, OperationStatus,
};
use clap::{Args, Subcommand};
use log::debug;

use crate::renderer::TerminalRenderer;

/// List activities
///
/// Activities are ordered by start date. Filters combine: `--type workshop
/// --status pending` shows pending workshops only.
#[derive(Args)]
pub struct ListActivitiesArgs {
    #[arg(long = "type", help = "Only show activities of this type")]
    pub kind: Option<ActivityType>,
    #[arg(long, help = "Only show activities in this status")]
    pub status: Option<ActivityStatus>,
    #[arg(
        long,
        help = "Case-insensitive text to look for in titles, descriptions and tags"
    )]
    pub search: Option<String>,
    #[arg(long, help = "Print JSON instead of Markdown")]
    pub json: bool,
}

impl From<&ListActivitiesArgs> for ListActivities {
    fn from(val: &ListActivitiesArgs) -> Self {
        ListActivities {
            kind: val.kind,
            status: val.status,
            search: val.search.clone(),
        }
    }
}

/// Show details of a specific activity
#[derive(Args)]
pub struct ShowActivityArgs {
    #[arg(help = "Identifier of the activity to show")]
    pub id: String,
    #[arg(long, help = "Print JSON instead of Markdown")]
    pub json: bool,
}

impl From<&ShowActivityArgs> for Id {
    fn from(val: &ShowActivityArgs) -> Self {
        Id::new(val.id.as_str())
    }
}

/// Values typed into the activity form.
///
/// Type, status, dates and participants are passed through as text so the
/// form can report what is wrong with them. Type and status names that the
/// list filters would accept (`workshop`, `in-progress`) are spelled out in
/// their canonical form first.
#[derive(Args)]
pub struct ActivityFieldsArgs {
    #[arg(long, help = "Title, at least 3 characters")]
    pub title: Option<String>,
    #[arg(long, help = "Description, at least 10 characters")]
    pub description: Option<String>,
    #[arg(
        long = "type",
        help = "COURSE, WORKSHOP, SEMINAR, RESEARCH, EXTENSION or OTHER"
    )]
    pub kind: Option<String>,
    #[arg(long, help = "PENDING, IN_PROGRESS, COMPLETED or CANCELLED")]
    pub status: Option<String>,
    #[arg(long, help = "First day, as YYYY-MM-DD")]
    pub start: Option<String>,
    #[arg(long, help = "Last day, as YYYY-MM-DD (not before --start)")]
    pub end: Option<String>,
    #[arg(long, help = "Where the activity takes place")]
    pub location: Option<String>,
    #[arg(long, help = "Person responsible for the activity")]
    pub coordinator: Option<String>,
    #[arg(long, help = "Expected number of participants (at least 1)")]
    pub participants: Option<String>,
    #[arg(long = "tag", help = "Tag to add; repeat for several tags")]
    pub tags: Vec<String>,
    #[arg(long, help = "Cover image URL; pass an empty string to remove it")]
    pub image_url: Option<String>,
}

impl ActivityFieldsArgs {
    /// Scalar fields that were given on the command line.
    fn changes(&self) -> Vec<(Field, &str)> {
        [
            (Field::Title, &self.title),
            (Field::Description, &self.description),
            (Field::Type, &self.kind),
            (Field::Status, &self.status),
            (Field::StartDate, &self.start),
            (Field::EndDate, &self.end),
            (Field::Location, &self.location),
            (Field::Coordinator, &self.coordinator),
            (Field::Participants, &self.participants),
            (Field::ImageUrl, &self.image_url),
        ]
        .into_iter()
        .filter_map(|(field, value)| {
            value
                .as_deref()
                .map(|value| (field, canonical(field, value)))
        })
        .collect()
    }

    /// Feed every given value into `form` and touch the changed fields.
    fn apply(&self, form: &mut ActivityForm) -> Result<()> {
        for (field, value) in self.changes() {
            form.set_field(field, value)
                .with_context(|| format!("Failed to set {field}"))?;
            form.touch_field(field);
        }

        for tag in &self.tags {
            if !form.add_tag(tag) {
                debug!("Ignoring empty or duplicate tag '{tag}'");
            }
        }
        if !self.tags.is_empty() {
            form.touch_field(Field::Tags);
        }

        Ok(())
    }
}

/// Canonical spelling of a type or status name, or `value` unchanged.
fn canonical(field: Field, value: &str) -> &str {
    match field {
        Field::Type => value
            .parse::<ActivityType>()
            .map_or(value, |kind| kind.as_str()),
        Field::Status => value
            .parse::<ActivityStatus>()
            .map_or(value, |status| status.as_str()),
        _ => value,
    }
}

/// Create a new activity
///
/// New activities default to type COURSE and status PENDING. Every other
/// field is required; missing or invalid values are listed and nothing is
/// saved.
#[derive(Args)]
pub struct CreateActivityArgs {
    #[command(flatten)]
    pub fields: ActivityFieldsArgs,
}

/// Edit an existing activity
///
/// Only the given fields change. Tags given with `--tag` are appended;
/// `--remove-tag` removes existing ones first.
#[derive(Args)]
pub struct EditActivityArgs {
    #[arg(help = "Identifier of the activity to edit")]
    pub id: String,
    #[command(flatten)]
    pub fields: ActivityFieldsArgs,
    #[arg(long = "remove-tag", help = "Tag to remove; repeat for several tags")]
    pub remove_tags: Vec<String>,
}

impl From<&EditActivityArgs> for Id {
    fn from(val: &EditActivityArgs) -> Self {
        Id::new(val.id.as_str())
    }
}

/// Delete an activity permanently
#[derive(Args)]
pub struct DeleteActivityArgs {
    #[arg(help = "Identifier of the activity to delete")]
    pub id: String,
    #[arg(long, help = "Confirm the permanent deletion")]
    pub confirm: bool,
}

impl From<DeleteActivityArgs> for DeleteActivity {
    fn from(val: DeleteActivityArgs) -> Self {
        DeleteActivity {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum ActivityCommands {
    /// List activities
    #[command(aliases = ["l", "ls"])]
    List(ListActivitiesArgs),
    /// Show details of a specific activity
    #[command(alias = "s")]
    Show(ShowActivityArgs),
    /// Create a new activity
    #[command(alias = "c")]
    Create(CreateActivityArgs),
    /// Edit an existing activity
    #[command(alias = "e")]
    Edit(EditActivityArgs),
    /// Delete an activity permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteActivityArgs),
}

/// Runs activity commands against a catalog and renders the results.
pub struct Cli {
    catalog: Catalog,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(catalog: Catalog, renderer: TerminalRenderer) -> Self {
        Self { catalog, renderer }
    }

    pub async fn handle_activity_command(&self, command: ActivityCommands) -> Result<()> {
        match command {
            ActivityCommands::List(args) => {
                self.list_activities(&ListActivities::from(&args), args.json)
                    .await
            }
            ActivityCommands::Show(args) => self.show_activity(&Id::from(&args), args.json).await,
            ActivityCommands::Create(args) => self.create_activity(&args).await,
            ActivityCommands::Edit(args) => self.edit_activity(&args).await,
            ActivityCommands::Delete(args) => {
                self.delete_activity(&DeleteActivity::from(args)).await
            }
        }
    }

    pub async fn list_activities(&self, params: &ListActivities, json: bool) -> Result<()> {
        let activities = self
            .catalog
            .find_activities(params)
            .await
            .context("Failed to list activities")?;

        if json {
            println!("{}", serde_json::to_string_pretty(&activities.0)?);
            return Ok(());
        }

        self.renderer.render("# Activities\n\n")?;
        self.renderer.render(&activities.to_string())
    }

    async fn show_activity(&self, params: &Id, json: bool) -> Result<()> {
        let Some(activity) = self
            .catalog
            .get_activity(params)
            .await
            .context("Failed to load activity")?
        else {
            bail!("Activity with ID {} not found", params.id);
        };

        if json {
            println!("{}", serde_json::to_string_pretty(&activity)?);
            return Ok(());
        }

        self.renderer.render(&activity.to_string())
    }

    async fn create_activity(&self, args: &CreateActivityArgs) -> Result<()> {
        let mut form = ActivityForm::new();
        args.fields.apply(&mut form)?;
        self.submit(form).await
    }

    async fn edit_activity(&self, args: &EditActivityArgs) -> Result<()> {
        let id = Id::from(args);
        let Some(mut form) = self
            .catalog
            .edit_form(&id)
            .await
            .context("Failed to load activity")?
        else {
            bail!("Activity with ID {} not found", id.id);
        };

        for tag in &args.remove_tags {
            if form.remove_tag(tag) {
                form.touch_field(Field::Tags);
            } else {
                debug!("Activity {} has no tag '{tag}'", id.id);
            }
        }
        args.fields.apply(&mut form)?;

        self.submit(form).await
    }

    /// Submit `form` and save the accepted record.
    async fn submit(&self, mut form: ActivityForm) -> Result<()> {
        let mut accepted: Option<Activity> = None;
        let outcome = form.submit(&mut |activity: Activity| accepted = Some(activity));

        if let Submission::Rejected(errors) = outcome {
            self.renderer.render(&FormReport(&form).to_string())?;
            bail!(
                "{} was not saved: {} field(s) need attention",
                match form.mode() {
                    FormMode::Create => "The new activity".to_string(),
                    FormMode::Edit { id } => format!("Activity {id}"),
                },
                errors.len()
            );
        }

        let activity = accepted.context("Submitted form produced no activity")?;
        let saved = self
            .catalog
            .save_activity(activity)
            .await
            .context("Failed to save activity")?;

        let status = match form.mode() {
            FormMode::Create => OperationStatus::created(&saved),
            FormMode::Edit { .. } => OperationStatus::updated(&saved),
        };
        self.renderer.render_status(&status)?;
        self.renderer.render(&saved.to_string())
    }

    async fn delete_activity(&self, params: &DeleteActivity) -> Result<()> {
        let deleted = self
            .catalog
            .delete_activity(params)
            .await
            .context("Failed to delete activity")?;

        self.renderer.render_status(&OperationStatus::deleted(&deleted))
    }
}
