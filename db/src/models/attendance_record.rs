use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use thiserror::Error;

use super::class_meeting;
use super::session_assignment;

/// One student's check-in for one meeting of a class.
///
/// Keyed by (class_id, student_id, meeting_number): a student gets at most one
/// record per meeting, whatever state it is in.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "attendance_records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub class_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub student_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub meeting_number: i32,
    /// Owner of the class at the time the check-in started. Confirmation is
    /// matched against this value.
    pub tutor_id: i64,
    pub status: AttendanceStatus,
    pub started_at: DateTime<Utc>,
    pub confirmed_at: Option<DateTime<Utc>>,
}

/// A record only ever moves `InProgress` -> `Present`.
#[derive(
    Debug, Clone, PartialEq, EnumIter, DeriveActiveEnum, Display, EnumString, Deserialize, Serialize,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "attendance_status")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AttendanceStatus {
    #[sea_orm(string_value = "in_progress")]
    InProgress,

    #[sea_orm(string_value = "present")]
    Present,
}

#[derive(Debug, Error)]
pub enum AttendanceError {
    #[error("database error: {0}")]
    Database(#[from] DbErr),

    #[error("class not found")]
    ClassNotFound,

    #[error("meeting not found")]
    MeetingNotFound,

    #[error("student is not enrolled in this class")]
    NotEnrolled,

    #[error("attendance window is not open")]
    WindowClosed,

    #[error("attendance window has expired")]
    WindowExpired,

    #[error("attendance already started for this meeting")]
    AlreadyStarted,

    #[error("attendance session not found or already finished")]
    SessionNotFound,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::class::Entity",
        from = "Column::ClassId",
        to = "super::class::Column::Id"
    )]
    Class,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::StudentId",
        to = "super::user::Column::Id"
    )]
    Student,
}

impl Related<super::class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Starts a check-in for a student.
    ///
    /// The student must be enrolled and the meeting's window must be `Active`
    /// and not past its expiry at `now`. The new record is `InProgress`; a
    /// second start for the same meeting fails whatever state the first
    /// record reached.
    pub async fn start(
        db: &DatabaseConnection,
        class_id: i64,
        student_id: i64,
        meeting_number: i32,
        now: DateTime<Utc>,
    ) -> Result<Model, AttendanceError> {
        let Some(class) = super::class::Entity::find_by_id(class_id).one(db).await? else {
            return Err(AttendanceError::ClassNotFound);
        };

        if !super::enrollment::Model::is_enrolled(db, class_id, student_id).await? {
            return Err(AttendanceError::NotEnrolled);
        }

        let Some(meeting) =
            class_meeting::Model::find_by_class_and_number(db, class_id, meeting_number).await?
        else {
            return Err(AttendanceError::MeetingNotFound);
        };

        if meeting.window_status != class_meeting::WindowStatus::Active {
            return Err(AttendanceError::WindowClosed);
        }
        if !meeting.is_open_at(now) {
            return Err(AttendanceError::WindowExpired);
        }

        if Entity::find_by_id((class_id, student_id, meeting_number))
            .one(db)
            .await?
            .is_some()
        {
            return Err(AttendanceError::AlreadyStarted);
        }

        let insert = ActiveModel {
            class_id: Set(class_id),
            student_id: Set(student_id),
            meeting_number: Set(meeting_number),
            tutor_id: Set(class.tutor_id),
            status: Set(AttendanceStatus::InProgress),
            started_at: Set(now),
            confirmed_at: Set(None),
        }
        .insert(db)
        .await;

        match insert {
            Ok(record) => Ok(record),
            // two concurrent starts can both pass the pre-check
            Err(err) if err.to_string().contains("UNIQUE constraint failed") => {
                Err(AttendanceError::AlreadyStarted)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Confirms an in-progress check-in on behalf of a tutor.
    ///
    /// Only the tutor recorded at start time can confirm; anyone else sees
    /// the session as missing. Window expiry does not matter here, a started
    /// session stays confirmable.
    ///
    /// After the record is marked `Present` any session assignments the
    /// student held for this meeting are removed. That cleanup is best
    /// effort: a failure is logged and the confirmation still succeeds.
    pub async fn confirm(
        db: &DatabaseConnection,
        class_id: i64,
        student_id: i64,
        meeting_number: i32,
        tutor_id: i64,
        now: DateTime<Utc>,
    ) -> Result<Model, AttendanceError> {
        let Some(record) = Entity::find_by_id((class_id, student_id, meeting_number))
            .filter(Column::TutorId.eq(tutor_id))
            .filter(Column::Status.eq(AttendanceStatus::InProgress))
            .one(db)
            .await?
        else {
            return Err(AttendanceError::SessionNotFound);
        };

        let mut active: ActiveModel = record.into();
        active.status = Set(AttendanceStatus::Present);
        active.confirmed_at = Set(Some(now));
        let confirmed = active.update(db).await?;

        if let Err(err) = session_assignment::Model::remove_for_student_meeting(
            db,
            class_id,
            meeting_number,
            student_id,
        )
        .await
        {
            tracing::warn!(
                class_id,
                student_id,
                meeting_number,
                "failed to clean up session assignments after confirmation: {}",
                err
            );
        }

        Ok(confirmed)
    }

    /// Loads the roster for one meeting: every enrolled student in enrollment
    /// order, paired with their attendance record when one exists.
    pub async fn roster_for_meeting(
        db: &DatabaseConnection,
        class_id: i64,
        meeting_number: i32,
    ) -> Result<Vec<(super::user::Model, Option<Model>)>, DbErr> {
        let enrolled = super::enrollment::Entity::find()
            .filter(super::enrollment::Column::ClassId.eq(class_id))
            .find_also_related(super::user::Entity)
            .order_by_asc(super::enrollment::Column::Id)
            .all(db)
            .await?;

        let mut records: HashMap<i64, Model> = Entity::find()
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::MeetingNumber.eq(meeting_number))
            .all(db)
            .await?
            .into_iter()
            .map(|record| (record.student_id, record))
            .collect();

        Ok(enrolled
            .into_iter()
            .filter_map(|(enrollment, student)| {
                student.map(|student| (student, records.remove(&enrollment.student_id)))
            })
            .collect())
    }
}
