#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use axum::http::StatusCode;
    use serde_json::json;
    use tower::ServiceExt;

    use db::models::class::{ClassStatus, Model as ClassModel};
    use db::models::class_meeting::NewMeeting;
    use db::models::user::{Model as UserModel, Role};
    use sea_orm::DatabaseConnection;

    use crate::helpers::app::{bearer, make_test_app, post_json, read_json};

    // ---------------------------
    // Shared setup
    // ---------------------------

    struct TestCtx {
        tutor: UserModel,
        student: UserModel,
    }

    async fn setup(db: &DatabaseConnection) -> TestCtx {
        let tutor = UserModel::create(db, "cls_tutor", "cls_tutor@test.com", "Cls Tutor", "password123", Role::Tutor)
            .await
            .unwrap();
        let tutor = UserModel::set_approved(db, tutor.id, true).await.unwrap().unwrap();

        let student = UserModel::create(db, "cls_student", "cls_student@test.com", "Cls Student", "password123", Role::Student)
            .await
            .unwrap();

        TestCtx { tutor, student }
    }

    fn meeting(title: &str) -> NewMeeting {
        NewMeeting {
            title: title.to_owned(),
            description: None,
            video_url: None,
            meet_url: None,
            pdf_url: None,
        }
    }

    // ---------------------------
    // create_class
    // ---------------------------

    #[tokio::test]
    async fn create_class_as_approved_tutor() {
        let (app, db) = make_test_app().await;
        let ctx = setup(&db).await;

        let body = json!({
            "title": "Linear Algebra Crash Course",
            "description": "Three evenings of matrices",
            "meetings": [
                { "title": "Vectors", "video_url": "https://vid/1" },
                { "title": "Matrices" },
                { "title": "Eigenvalues", "pdf_url": "https://pdf/3" },
            ],
        });
        let resp = app
            .oneshot(post_json("/api/classes", Some(&bearer(&ctx.tutor)), &body))
            .await
            .unwrap();
        let (status, json) = read_json(resp).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Class submitted for approval");
        assert_eq!(json["data"]["tutor_id"], ctx.tutor.id);
        assert_eq!(json["data"]["status"], "Pending");
        assert_eq!(json["data"]["meeting_count"], 3);

        let meetings = json["data"]["meetings"].as_array().unwrap();
        assert_eq!(meetings.len(), 3);
        assert_eq!(meetings[0]["meeting_number"], 1);
        assert_eq!(meetings[0]["title"], "Vectors");
        assert_eq!(meetings[0]["window_status"], "Locked");
        assert_eq!(meetings[2]["meeting_number"], 3);
    }

    #[tokio::test]
    async fn create_class_unapproved_tutor_is_forbidden() {
        let (app, db) = make_test_app().await;

        let pending = UserModel::create(&db, "pending_t", "pending_t@test.com", "Pending T", "password123", Role::Tutor)
            .await
            .unwrap();

        let body = json!({
            "title": "Should Not Exist",
            "description": "",
            "meetings": [{ "title": "One" }],
        });
        let resp = app
            .oneshot(post_json("/api/classes", Some(&bearer(&pending)), &body))
            .await
            .unwrap();
        let (status, json) = read_json(resp).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["message"], "Tutor account is not approved yet");
    }

    #[tokio::test]
    async fn create_class_as_student_is_forbidden() {
        let (app, db) = make_test_app().await;
        let ctx = setup(&db).await;

        let body = json!({
            "title": "Student Class",
            "description": "",
            "meetings": [{ "title": "One" }],
        });
        let resp = app
            .oneshot(post_json("/api/classes", Some(&bearer(&ctx.student)), &body))
            .await
            .unwrap();
        let (status, json) = read_json(resp).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["message"], "Tutor access required");
    }

    #[tokio::test]
    async fn create_class_without_token_is_unauthorized() {
        let (app, _db) = make_test_app().await;

        let body = json!({
            "title": "Anonymous Class",
            "description": "",
            "meetings": [],
        });
        let resp = app
            .oneshot(post_json("/api/classes", None, &body))
            .await
            .unwrap();
        let (status, json) = read_json(resp).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["message"], "Authentication required");
    }

    #[tokio::test]
    async fn create_class_rejects_empty_title() {
        let (app, db) = make_test_app().await;
        let ctx = setup(&db).await;

        let body = json!({
            "title": "",
            "description": "desc",
            "meetings": [{ "title": "One" }],
        });
        let resp = app
            .oneshot(post_json("/api/classes", Some(&bearer(&ctx.tutor)), &body))
            .await
            .unwrap();
        let (status, json) = read_json(resp).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
    }

    // ---------------------------
    // enroll
    // ---------------------------

    #[tokio::test]
    async fn enroll_in_approved_class() {
        let (app, db) = make_test_app().await;
        let ctx = setup(&db).await;

        let (class, _) = ClassModel::create_with_meetings(&db, ctx.tutor.id, "Open Class", "", &[meeting("One")])
            .await
            .unwrap();
        ClassModel::set_status(&db, class.id, ClassStatus::Approved)
            .await
            .unwrap();

        let uri = format!("/api/classes/{}/enroll", class.id);
        let resp = app
            .oneshot(post_json(&uri, Some(&bearer(&ctx.student)), &json!({})))
            .await
            .unwrap();
        let (status, json) = read_json(resp).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Enrolled in class");
        assert_eq!(json["data"]["class_id"], class.id);
        assert_eq!(json["data"]["student_id"], ctx.student.id);
    }

    #[tokio::test]
    async fn enroll_twice_conflicts() {
        let (app, db) = make_test_app().await;
        let ctx = setup(&db).await;

        let (class, _) = ClassModel::create_with_meetings(&db, ctx.tutor.id, "Open Class", "", &[meeting("One")])
            .await
            .unwrap();
        ClassModel::set_status(&db, class.id, ClassStatus::Approved)
            .await
            .unwrap();

        let uri = format!("/api/classes/{}/enroll", class.id);
        let first = app
            .clone()
            .oneshot(post_json(&uri, Some(&bearer(&ctx.student)), &json!({})))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = app
            .oneshot(post_json(&uri, Some(&bearer(&ctx.student)), &json!({})))
            .await
            .unwrap();
        let (status, json) = read_json(second).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["message"], "Already enrolled in this class");
    }

    #[tokio::test]
    async fn enroll_in_pending_class_is_rejected() {
        let (app, db) = make_test_app().await;
        let ctx = setup(&db).await;

        let (class, _) = ClassModel::create_with_meetings(&db, ctx.tutor.id, "Pending Class", "", &[meeting("One")])
            .await
            .unwrap();

        let uri = format!("/api/classes/{}/enroll", class.id);
        let resp = app
            .oneshot(post_json(&uri, Some(&bearer(&ctx.student)), &json!({})))
            .await
            .unwrap();
        let (status, json) = read_json(resp).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Class is not open for enrollment");
    }

    #[tokio::test]
    async fn enroll_in_missing_class_is_not_found() {
        let (app, db) = make_test_app().await;
        let ctx = setup(&db).await;

        let resp = app
            .oneshot(post_json("/api/classes/9999/enroll", Some(&bearer(&ctx.student)), &json!({})))
            .await
            .unwrap();
        let (status, json) = read_json(resp).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Class not found");
    }

    #[tokio::test]
    async fn enroll_as_tutor_is_forbidden() {
        let (app, db) = make_test_app().await;
        let ctx = setup(&db).await;

        let (class, _) = ClassModel::create_with_meetings(&db, ctx.tutor.id, "Own Class", "", &[meeting("One")])
            .await
            .unwrap();
        ClassModel::set_status(&db, class.id, ClassStatus::Approved)
            .await
            .unwrap();

        let uri = format!("/api/classes/{}/enroll", class.id);
        let resp = app
            .oneshot(post_json(&uri, Some(&bearer(&ctx.tutor)), &json!({})))
            .await
            .unwrap();
        let (status, json) = read_json(resp).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["message"], "Student access required");
    }
}
