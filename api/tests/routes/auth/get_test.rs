#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use axum::http::StatusCode;
    use tower::ServiceExt;

    use db::models::user::{Model as UserModel, Role};

    use crate::helpers::app::{bearer, get, make_test_app, read_json};

    #[tokio::test]
    async fn me_echoes_token_claims() {
        let (app, db) = make_test_app().await;

        let tutor = UserModel::create(&db, "me_tutor", "me_tutor@test.com", "Me Tutor", "password123", Role::Tutor)
            .await
            .unwrap();

        let resp = app
            .oneshot(get("/api/auth/me", Some(&bearer(&tutor))))
            .await
            .unwrap();
        let (status, json) = read_json(resp).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "User retrieved");
        assert_eq!(json["data"]["id"], tutor.id);
        assert_eq!(json["data"]["username"], "me_tutor");
        assert_eq!(json["data"]["role"], "tutor");
    }

    #[tokio::test]
    async fn me_without_token_is_unauthorized() {
        let (app, _db) = make_test_app().await;

        let resp = app.oneshot(get("/api/auth/me", None)).await.unwrap();
        let (status, json) = read_json(resp).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Authentication required");
    }

    #[tokio::test]
    async fn me_with_garbage_token_is_unauthorized() {
        let (app, _db) = make_test_app().await;

        let resp = app
            .oneshot(get("/api/auth/me", Some("Bearer not.a.jwt")))
            .await
            .unwrap();
        let (status, json) = read_json(resp).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["success"], false);
    }
}
