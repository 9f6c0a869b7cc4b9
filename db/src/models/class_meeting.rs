use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// One scheduled meeting ("materi") of a class.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "class_meetings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub class_id: i64,
    /// 1-based position inside the class; unique per class.
    pub meeting_number: i32,
    pub title: String,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub meet_url: Option<String>,
    pub pdf_url: Option<String>,
    /// Check-in gate for this meeting.
    pub window_status: WindowStatus,
    /// Optional deadline; a window past it refuses new check-ins even while
    /// still marked `Active`.
    pub window_expires_at: Option<DateTime<Utc>>,
}

/// Lifecycle of a meeting's attendance window.
///
/// There is no server-side clock transition: `Active` windows stay `Active`
/// until the tutor moves them, the expiry only gates new check-ins.
#[derive(
    Debug, Clone, PartialEq, EnumIter, DeriveActiveEnum, Display, EnumString, Deserialize, Serialize,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "attendance_window_status")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum WindowStatus {
    #[sea_orm(string_value = "locked")]
    Locked,

    #[sea_orm(string_value = "active")]
    Active,

    #[sea_orm(string_value = "finished")]
    Finished,
}

/// Meeting details supplied when a class plan is created or replaced.
#[derive(Debug, Clone)]
pub struct NewMeeting {
    pub title: String,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub meet_url: Option<String>,
    pub pdf_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::class::Entity",
        from = "Column::ClassId",
        to = "super::class::Column::Id"
    )]
    Class,
}

impl Related<super::class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Inserts a full meeting plan for a class, numbering rows 1..n.
    ///
    /// Every meeting starts with a locked window and no expiry.
    pub async fn insert_plan(
        db: &DatabaseConnection,
        class_id: i64,
        meetings: &[NewMeeting],
    ) -> Result<Vec<Model>, DbErr> {
        let mut rows = Vec::with_capacity(meetings.len());
        for (i, meeting) in meetings.iter().enumerate() {
            let row = ActiveModel {
                class_id: Set(class_id),
                meeting_number: Set((i + 1) as i32),
                title: Set(meeting.title.clone()),
                description: Set(meeting.description.clone()),
                video_url: Set(meeting.video_url.clone()),
                meet_url: Set(meeting.meet_url.clone()),
                pdf_url: Set(meeting.pdf_url.clone()),
                window_status: Set(WindowStatus::Locked),
                window_expires_at: Set(None),
                ..Default::default()
            }
            .insert(db)
            .await?;
            rows.push(row);
        }
        Ok(rows)
    }

    /// Removes every meeting of a class. Used when a plan is replaced.
    pub async fn delete_plan(db: &DatabaseConnection, class_id: i64) -> Result<u64, DbErr> {
        let res = Entity::delete_many()
            .filter(Column::ClassId.eq(class_id))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }

    pub async fn find_by_class_and_number(
        db: &DatabaseConnection,
        class_id: i64,
        meeting_number: i32,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::MeetingNumber.eq(meeting_number))
            .one(db)
            .await
    }

    /// Updates the attendance window of one meeting.
    ///
    /// Returns `Ok(None)` when the meeting does not exist.
    pub async fn set_window(
        db: &DatabaseConnection,
        class_id: i64,
        meeting_number: i32,
        status: WindowStatus,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<Option<Model>, DbErr> {
        let Some(meeting) = Self::find_by_class_and_number(db, class_id, meeting_number).await?
        else {
            return Ok(None);
        };

        let mut active: ActiveModel = meeting.into();
        active.window_status = Set(status);
        active.window_expires_at = Set(expires_at);
        active.update(db).await.map(Some)
    }

    /// Whether a check-in may start at `now`.
    pub fn is_open_at(&self, now: DateTime<Utc>) -> bool {
        self.window_status == WindowStatus::Active
            && self.window_expires_at.is_none_or(|deadline| now < deadline)
    }
}
