#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use axum::http::StatusCode;
    use serde_json::json;
    use tower::ServiceExt;

    use db::models::class::{ClassStatus, Entity as ClassEntity, Model as ClassModel};
    use db::models::class_meeting::NewMeeting;
    use db::models::user::{Entity as UserEntity, Model as UserModel, Role};
    use sea_orm::{DatabaseConnection, EntityTrait};

    use crate::helpers::app::{bearer, make_test_app, put_json, read_json};

    struct TestCtx {
        admin: UserModel,
        tutor: UserModel,
        student: UserModel,
        class_id: i64,
    }

    async fn setup(db: &DatabaseConnection) -> TestCtx {
        let admin = UserModel::create(db, "adm_root", "adm_root@test.com", "Adm Root", "password123", Role::Admin)
            .await
            .unwrap();
        let tutor = UserModel::create(db, "adm_tutor", "adm_tutor@test.com", "Adm Tutor", "password123", Role::Tutor)
            .await
            .unwrap();
        let student = UserModel::create(db, "adm_student", "adm_student@test.com", "Adm Student", "password123", Role::Student)
            .await
            .unwrap();

        let plan = [NewMeeting {
            title: "Reviewed Meeting".to_owned(),
            description: None,
            video_url: None,
            meet_url: None,
            pdf_url: None,
        }];
        let (class, _) = ClassModel::create_with_meetings(db, tutor.id, "Reviewed Class", "", &plan)
            .await
            .unwrap();

        TestCtx {
            admin,
            tutor,
            student,
            class_id: class.id,
        }
    }

    // ---------------------------
    // tutor_action
    // ---------------------------

    #[tokio::test]
    async fn approve_tutor() {
        let (app, db) = make_test_app().await;
        let ctx = setup(&db).await;

        let uri = format!("/api/admin/tutors/{}/approve", ctx.tutor.id);
        let resp = app
            .oneshot(put_json(&uri, Some(&bearer(&ctx.admin)), &json!({})))
            .await
            .unwrap();
        let (status, json) = read_json(resp).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Tutor approved");
        assert_eq!(json["data"]["approved"], true);
        assert_eq!(json["data"]["role"], "tutor");

        let stored = UserEntity::find_by_id(ctx.tutor.id).one(&db).await.unwrap().unwrap();
        assert!(stored.approved);
    }

    #[tokio::test]
    async fn reject_tutor() {
        let (app, db) = make_test_app().await;
        let ctx = setup(&db).await;

        UserModel::set_approved(&db, ctx.tutor.id, true).await.unwrap();

        let uri = format!("/api/admin/tutors/{}/reject", ctx.tutor.id);
        let resp = app
            .oneshot(put_json(&uri, Some(&bearer(&ctx.admin)), &json!({})))
            .await
            .unwrap();
        let (status, json) = read_json(resp).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Tutor rejected");
        assert_eq!(json["data"]["approved"], false);
    }

    #[tokio::test]
    async fn tutor_action_on_non_tutor_is_not_found() {
        let (app, db) = make_test_app().await;
        let ctx = setup(&db).await;

        let uri = format!("/api/admin/tutors/{}/approve", ctx.student.id);
        let resp = app
            .oneshot(put_json(&uri, Some(&bearer(&ctx.admin)), &json!({})))
            .await
            .unwrap();
        let (status, json) = read_json(resp).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "User not found");
    }

    #[tokio::test]
    async fn tutor_action_with_unknown_verb_is_bad_request() {
        let (app, db) = make_test_app().await;
        let ctx = setup(&db).await;

        // verb is checked before the user lookup
        let resp = app
            .oneshot(put_json("/api/admin/tutors/48151623/promote", Some(&bearer(&ctx.admin)), &json!({})))
            .await
            .unwrap();
        let (status, json) = read_json(resp).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Unknown action");
    }

    // ---------------------------
    // class_action
    // ---------------------------

    #[tokio::test]
    async fn approve_class() {
        let (app, db) = make_test_app().await;
        let ctx = setup(&db).await;

        let uri = format!("/api/admin/classes/{}/approve", ctx.class_id);
        let resp = app
            .oneshot(put_json(&uri, Some(&bearer(&ctx.admin)), &json!({})))
            .await
            .unwrap();
        let (status, json) = read_json(resp).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Class approved");
        assert_eq!(json["data"]["status"], "Approved");

        let stored = ClassEntity::find_by_id(ctx.class_id).one(&db).await.unwrap().unwrap();
        assert_eq!(stored.status, ClassStatus::Approved);
    }

    #[tokio::test]
    async fn reject_class() {
        let (app, db) = make_test_app().await;
        let ctx = setup(&db).await;

        let uri = format!("/api/admin/classes/{}/reject", ctx.class_id);
        let resp = app
            .oneshot(put_json(&uri, Some(&bearer(&ctx.admin)), &json!({})))
            .await
            .unwrap();
        let (status, json) = read_json(resp).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Class rejected");
        assert_eq!(json["data"]["status"], "Rejected");
    }

    #[tokio::test]
    async fn class_action_on_missing_class_is_not_found() {
        let (app, db) = make_test_app().await;
        let ctx = setup(&db).await;

        let resp = app
            .oneshot(put_json("/api/admin/classes/5555/approve", Some(&bearer(&ctx.admin)), &json!({})))
            .await
            .unwrap();
        let (status, json) = read_json(resp).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Class not found");
    }

    // ---------------------------
    // access control
    // ---------------------------

    #[tokio::test]
    async fn admin_group_is_closed_to_other_roles() {
        let (app, db) = make_test_app().await;
        let ctx = setup(&db).await;

        let uri = format!("/api/admin/tutors/{}/approve", ctx.tutor.id);
        let resp = app
            .clone()
            .oneshot(put_json(&uri, Some(&bearer(&ctx.tutor)), &json!({})))
            .await
            .unwrap();
        let (status, json) = read_json(resp).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["message"], "Admin access required");

        let resp = app
            .oneshot(put_json(&uri, None, &json!({})))
            .await
            .unwrap();
        let (status, _) = read_json(resp).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
