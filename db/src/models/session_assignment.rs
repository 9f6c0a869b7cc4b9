use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A bookable tutoring slot for one meeting of a class.
///
/// Slots are created unassigned and inactive; a tutor attaches a student and
/// flips the status separately. Confirming that student's attendance for the
/// meeting removes the slot again.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "session_assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub class_id: i64,
    pub meeting_number: i32,
    pub student_id: Option<i64>,
    pub session_date: DateTime<Utc>,
    pub status: SessionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, PartialEq, EnumIter, DeriveActiveEnum, Display, EnumString, Deserialize, Serialize,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "session_status")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SessionStatus {
    #[sea_orm(string_value = "active")]
    Active,

    #[sea_orm(string_value = "inactive")]
    Inactive,
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
    /// Creates a slot, optionally pre-bound to a student. New slots start
    /// `Inactive`.
    pub async fn create(
        db: &DatabaseConnection,
        class_id: i64,
        meeting_number: i32,
        student_id: Option<i64>,
        session_date: DateTime<Utc>,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        ActiveModel {
            class_id: Set(class_id),
            meeting_number: Set(meeting_number),
            student_id: Set(student_id),
            session_date: Set(session_date),
            status: Set(SessionStatus::Inactive),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Attaches a student to a slot. Returns `Ok(None)` when the slot does
    /// not exist.
    pub async fn assign_student(
        db: &DatabaseConnection,
        session_id: i64,
        student_id: i64,
    ) -> Result<Option<Model>, DbErr> {
        let Some(session) = Entity::find_by_id(session_id).one(db).await? else {
            return Ok(None);
        };

        let mut active: ActiveModel = session.into();
        active.student_id = Set(Some(student_id));
        active.updated_at = Set(Utc::now());
        active.update(db).await.map(Some)
    }

    pub async fn set_status(
        db: &DatabaseConnection,
        session_id: i64,
        status: SessionStatus,
    ) -> Result<Option<Model>, DbErr> {
        let Some(session) = Entity::find_by_id(session_id).one(db).await? else {
            return Ok(None);
        };

        let mut active: ActiveModel = session.into();
        active.status = Set(status);
        active.updated_at = Set(Utc::now());
        active.update(db).await.map(Some)
    }

    /// Deletes a slot. Returns whether a row existed.
    pub async fn delete_by_id(db: &DatabaseConnection, session_id: i64) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id(session_id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }

    /// Drops every slot a student holds for one meeting. Called after that
    /// student's attendance is confirmed.
    pub async fn remove_for_student_meeting(
        db: &DatabaseConnection,
        class_id: i64,
        meeting_number: i32,
        student_id: i64,
    ) -> Result<u64, DbErr> {
        let res = Entity::delete_many()
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::MeetingNumber.eq(meeting_number))
            .filter(Column::StudentId.eq(student_id))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }
}
