use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{DatabaseConnection, DbErr, QueryOrder};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::class_meeting::{self, NewMeeting};

/// Represents a tutoring class in the `classes` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "classes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning tutor (foreign key to `users`).
    pub tutor_id: i64,
    pub title: String,
    pub description: String,
    /// Moderation state; only approved classes are visible to students.
    pub status: ClassStatus,
    /// Number of meetings the class is sold with.
    pub meeting_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, PartialEq, EnumIter, DeriveActiveEnum, Display, EnumString, Deserialize, Serialize,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "class_status")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ClassStatus {
    #[sea_orm(string_value = "pending")]
    Pending,

    #[sea_orm(string_value = "approved")]
    Approved,

    #[sea_orm(string_value = "rejected")]
    Rejected,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::TutorId",
        to = "super::user::Column::Id"
    )]
    Tutor,
    #[sea_orm(has_many = "super::class_meeting::Entity")]
    Meetings,
    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollments,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tutor.def()
    }
}

impl Related<super::class_meeting::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Meetings.def()
    }
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Inserts a new class in `Pending` state together with its meeting plan.
    ///
    /// Meetings are numbered 1..n in the order given and start with a locked
    /// attendance window.
    pub async fn create_with_meetings(
        db: &DatabaseConnection,
        tutor_id: i64,
        title: &str,
        description: &str,
        meetings: &[NewMeeting],
    ) -> Result<(Model, Vec<class_meeting::Model>), DbErr> {
        let now = Utc::now();
        let class = ActiveModel {
            tutor_id: Set(tutor_id),
            title: Set(title.to_owned()),
            description: Set(description.to_owned()),
            status: Set(ClassStatus::Pending),
            meeting_count: Set(meetings.len() as i32),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?;

        let rows = class_meeting::Model::insert_plan(db, class.id, meetings).await?;
        Ok((class, rows))
    }

    /// Replaces the class details and its whole meeting plan.
    ///
    /// Returns `Ok(None)` when the class does not exist.
    pub async fn edit_with_meetings(
        db: &DatabaseConnection,
        class_id: i64,
        title: &str,
        description: &str,
        meetings: &[NewMeeting],
    ) -> Result<Option<(Model, Vec<class_meeting::Model>)>, DbErr> {
        let Some(class) = Entity::find_by_id(class_id).one(db).await? else {
            return Ok(None);
        };

        let mut active: ActiveModel = class.into();
        active.title = Set(title.to_owned());
        active.description = Set(description.to_owned());
        active.meeting_count = Set(meetings.len() as i32);
        active.updated_at = Set(Utc::now());
        let class = active.update(db).await?;

        class_meeting::Model::delete_plan(db, class.id).await?;
        let rows = class_meeting::Model::insert_plan(db, class.id, meetings).await?;
        Ok(Some((class, rows)))
    }

    /// Moves the class to a new moderation state.
    pub async fn set_status(
        db: &DatabaseConnection,
        class_id: i64,
        status: ClassStatus,
    ) -> Result<Option<Model>, DbErr> {
        let Some(class) = Entity::find_by_id(class_id).one(db).await? else {
            return Ok(None);
        };

        let mut active: ActiveModel = class.into();
        active.status = Set(status);
        active.updated_at = Set(Utc::now());
        active.update(db).await.map(Some)
    }

    /// Loads a class plus its meetings ordered by meeting number.
    pub async fn get_with_meetings(
        db: &DatabaseConnection,
        class_id: i64,
    ) -> Result<Option<(Model, Vec<class_meeting::Model>)>, DbErr> {
        let Some(class) = Entity::find_by_id(class_id).one(db).await? else {
            return Ok(None);
        };

        let meetings = class
            .find_related(super::class_meeting::Entity)
            .order_by_asc(super::class_meeting::Column::MeetingNumber)
            .all(db)
            .await?;
        Ok(Some((class, meetings)))
    }
}
