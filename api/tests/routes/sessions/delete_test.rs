#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use axum::http::StatusCode;
    use chrono::Utc;
    use tower::ServiceExt;

    use db::models::class::Model as ClassModel;
    use db::models::class_meeting::NewMeeting;
    use db::models::session_assignment::{Entity as SessionEntity, Model as SessionModel};
    use db::models::user::{Model as UserModel, Role};
    use sea_orm::{DatabaseConnection, EntityTrait};

    use crate::helpers::app::{bearer, delete, make_test_app, read_json};

    struct TestCtx {
        owner: UserModel,
        other_tutor: UserModel,
        session_id: i64,
    }

    async fn setup(db: &DatabaseConnection) -> TestCtx {
        let owner = UserModel::create(db, "del_owner", "del_owner@test.com", "Del Owner", "password123", Role::Tutor)
            .await
            .unwrap();
        let owner = UserModel::set_approved(db, owner.id, true).await.unwrap().unwrap();

        let other_tutor = UserModel::create(db, "del_other", "del_other@test.com", "Del Other", "password123", Role::Tutor)
            .await
            .unwrap();
        let other_tutor = UserModel::set_approved(db, other_tutor.id, true)
            .await
            .unwrap()
            .unwrap();

        let plan = [NewMeeting {
            title: "Doomed Meeting".to_owned(),
            description: None,
            video_url: None,
            meet_url: None,
            pdf_url: None,
        }];
        let (class, _) = ClassModel::create_with_meetings(db, owner.id, "Doomed Class", "", &plan)
            .await
            .unwrap();
        let session = SessionModel::create(db, class.id, 1, None, Utc::now())
            .await
            .unwrap();

        TestCtx {
            owner,
            other_tutor,
            session_id: session.id,
        }
    }

    #[tokio::test]
    async fn delete_removes_the_slot() {
        let (app, db) = make_test_app().await;
        let ctx = setup(&db).await;

        let uri = format!("/api/tutor/sessions/{}", ctx.session_id);
        let resp = app
            .clone()
            .oneshot(delete(&uri, Some(&bearer(&ctx.owner))))
            .await
            .unwrap();
        let (status, json) = read_json(resp).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Session deleted");

        let stored = SessionEntity::find_by_id(ctx.session_id).one(&db).await.unwrap();
        assert!(stored.is_none());

        // the slot is gone, so a second delete cannot find it
        let resp = app
            .oneshot(delete(&uri, Some(&bearer(&ctx.owner))))
            .await
            .unwrap();
        let (status, json) = read_json(resp).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Session not found");
    }

    #[tokio::test]
    async fn delete_by_non_owner_is_forbidden() {
        let (app, db) = make_test_app().await;
        let ctx = setup(&db).await;

        let uri = format!("/api/tutor/sessions/{}", ctx.session_id);
        let resp = app
            .oneshot(delete(&uri, Some(&bearer(&ctx.other_tutor))))
            .await
            .unwrap();
        let (status, json) = read_json(resp).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["message"], "You do not own this class");

        let stored = SessionEntity::find_by_id(ctx.session_id).one(&db).await.unwrap();
        assert!(stored.is_some(), "slot must survive a forbidden delete");
    }
}
