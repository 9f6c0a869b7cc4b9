use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202603150001_create_users::Migration),
            Box::new(migrations::m202603150002_create_classes::Migration),
            Box::new(migrations::m202603150003_create_class_meetings::Migration),
            Box::new(migrations::m202603150004_create_enrollments::Migration),
            Box::new(migrations::m202603200001_create_attendance_records::Migration),
            Box::new(migrations::m202604020001_create_session_assignments::Migration),
        ]
    }
}
