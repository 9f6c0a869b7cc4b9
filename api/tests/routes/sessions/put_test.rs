#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use axum::http::StatusCode;
    use chrono::Utc;
    use serde_json::json;
    use tower::ServiceExt;

    use db::models::class::Model as ClassModel;
    use db::models::class_meeting::NewMeeting;
    use db::models::session_assignment::{Entity as SessionEntity, Model as SessionModel, SessionStatus};
    use db::models::user::{Model as UserModel, Role};
    use sea_orm::{DatabaseConnection, EntityTrait};

    use crate::helpers::app::{bearer, make_test_app, put_json, read_json};

    struct TestCtx {
        owner: UserModel,
        other_tutor: UserModel,
        student: UserModel,
        session_id: i64,
    }

    async fn setup(db: &DatabaseConnection) -> TestCtx {
        let owner = UserModel::create(db, "act_owner", "act_owner@test.com", "Act Owner", "password123", Role::Tutor)
            .await
            .unwrap();
        let owner = UserModel::set_approved(db, owner.id, true).await.unwrap().unwrap();

        let other_tutor = UserModel::create(db, "act_other", "act_other@test.com", "Act Other", "password123", Role::Tutor)
            .await
            .unwrap();
        let other_tutor = UserModel::set_approved(db, other_tutor.id, true)
            .await
            .unwrap()
            .unwrap();

        let student = UserModel::create(db, "act_student", "act_student@test.com", "Act Student", "password123", Role::Student)
            .await
            .unwrap();

        let plan = [NewMeeting {
            title: "Slot Meeting".to_owned(),
            description: None,
            video_url: None,
            meet_url: None,
            pdf_url: None,
        }];
        let (class, _) = ClassModel::create_with_meetings(db, owner.id, "Slot Class", "", &plan)
            .await
            .unwrap();
        let session = SessionModel::create(db, class.id, 1, None, Utc::now())
            .await
            .unwrap();

        TestCtx {
            owner,
            other_tutor,
            student,
            session_id: session.id,
        }
    }

    // ---------------------------
    // assign_session
    // ---------------------------

    #[tokio::test]
    async fn assign_binds_a_student() {
        let (app, db) = make_test_app().await;
        let ctx = setup(&db).await;

        let uri = format!("/api/tutor/sessions/{}/assign", ctx.session_id);
        let body = json!({ "student_id": ctx.student.id });
        let resp = app
            .oneshot(put_json(&uri, Some(&bearer(&ctx.owner)), &body))
            .await
            .unwrap();
        let (status, json) = read_json(resp).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Student assigned to session");
        assert_eq!(json["data"]["student_id"], ctx.student.id);

        let stored = SessionEntity::find_by_id(ctx.session_id)
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.student_id, Some(ctx.student.id));
    }

    #[tokio::test]
    async fn assign_unknown_student_is_not_found() {
        let (app, db) = make_test_app().await;
        let ctx = setup(&db).await;

        let uri = format!("/api/tutor/sessions/{}/assign", ctx.session_id);
        let body = json!({ "student_id": 654321 });
        let resp = app
            .oneshot(put_json(&uri, Some(&bearer(&ctx.owner)), &body))
            .await
            .unwrap();
        let (status, json) = read_json(resp).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "User not found");
    }

    #[tokio::test]
    async fn assign_on_unowned_session_is_forbidden() {
        let (app, db) = make_test_app().await;
        let ctx = setup(&db).await;

        let uri = format!("/api/tutor/sessions/{}/assign", ctx.session_id);
        let body = json!({ "student_id": ctx.student.id });
        let resp = app
            .oneshot(put_json(&uri, Some(&bearer(&ctx.other_tutor)), &body))
            .await
            .unwrap();
        let (status, json) = read_json(resp).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["message"], "You do not own this class");
    }

    #[tokio::test]
    async fn assign_on_missing_session_is_not_found() {
        let (app, db) = make_test_app().await;
        let ctx = setup(&db).await;

        let body = json!({ "student_id": ctx.student.id });
        let resp = app
            .oneshot(put_json("/api/tutor/sessions/717171/assign", Some(&bearer(&ctx.owner)), &body))
            .await
            .unwrap();
        let (status, json) = read_json(resp).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Session not found");
    }

    // ---------------------------
    // session_action
    // ---------------------------

    #[tokio::test]
    async fn activate_then_deactivate() {
        let (app, db) = make_test_app().await;
        let ctx = setup(&db).await;

        let uri = format!("/api/tutor/sessions/{}/activate", ctx.session_id);
        let resp = app
            .clone()
            .oneshot(put_json(&uri, Some(&bearer(&ctx.owner)), &json!({})))
            .await
            .unwrap();
        let (status, json) = read_json(resp).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Session activated");
        assert_eq!(json["data"]["status"], "Active");

        let uri = format!("/api/tutor/sessions/{}/deactivate", ctx.session_id);
        let resp = app
            .oneshot(put_json(&uri, Some(&bearer(&ctx.owner)), &json!({})))
            .await
            .unwrap();
        let (status, json) = read_json(resp).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Session deactivated");
        assert_eq!(json["data"]["status"], "Inactive");

        let stored = SessionEntity::find_by_id(ctx.session_id)
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.status, SessionStatus::Inactive);
    }

    #[tokio::test]
    async fn unknown_action_is_rejected_before_lookup() {
        let (app, db) = make_test_app().await;
        let ctx = setup(&db).await;

        // even a nonexistent session id answers 400 for a bad action
        let resp = app
            .oneshot(put_json("/api/tutor/sessions/999999/freeze", Some(&bearer(&ctx.owner)), &json!({})))
            .await
            .unwrap();
        let (status, json) = read_json(resp).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Unknown session action");
    }

    #[tokio::test]
    async fn action_on_unowned_session_is_forbidden() {
        let (app, db) = make_test_app().await;
        let ctx = setup(&db).await;

        let uri = format!("/api/tutor/sessions/{}/activate", ctx.session_id);
        let resp = app
            .oneshot(put_json(&uri, Some(&bearer(&ctx.other_tutor)), &json!({})))
            .await
            .unwrap();
        let (status, json) = read_json(resp).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["message"], "You do not own this class");
    }
}
