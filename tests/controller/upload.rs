use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use mockito::Matcher;
use serde_json::json;
use veerpreps_admin::{
    model::resource::VideoLinkDto,
    server::{
        client::backend::{CREATE_BRANCH_PATH, CREATE_NOTE_PATH, CREATE_PYQ_PATH, CREATE_VIDEO_PATH},
        controller::upload::{create_branch, upload_note, upload_pyq, upload_video},
    },
};
use veerpreps_test_utils::prelude::*;

use crate::util::{json_body, multipart::FormBuilder, sign_in, TestContextExt};

fn note_form() -> FormBuilder {
    FormBuilder::new()
        .pdf("notespdf")
        .text("notesname", "Unit 1")
        .text("subjectid", "1")
}

fn pyq_form(pyqtype: &str) -> FormBuilder {
    FormBuilder::new()
        .pdf("pyqpdf")
        .text("pyqname", "DS Mid 2023")
        .text("pyqyear", "2023")
        .text("pyqtype", pyqtype)
        .text("subjectid", "4")
}

fn branch_form() -> FormBuilder {
    FormBuilder::new()
        .file("image", "cse.png", "image/png", b"\x89PNG")
        .text("branchname", "Computer Science")
        .text("branchcode", "CSE")
}

mod upload_note {
    use super::*;

    #[tokio::test]
    /// Expect the PDF stored under the notes prefix and the note created with its public URL
    async fn stores_pdf_and_creates_note() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_storage_put_endpoint("notes", 200, 1)
            .with_mock_endpoint(|server| {
                server
                    .mock("POST", CREATE_NOTE_PATH)
                    .match_header("authorization", "Bearer tok123")
                    .match_body(Matcher::AllOf(vec![
                        Matcher::Regex(
                            r#""link":"https://test-bucket\.s3\.ap-south-1\.amazonaws\.com/uploads/notes/unit-1-\d+\.pdf""#
                                .to_string(),
                        ),
                        Matcher::Regex(r#""notesname":"Unit 1""#.to_string()),
                        Matcher::Regex(r#""subjectId":1"#.to_string()),
                    ]))
                    .with_status(201)
                    .with_header("content-type", "application/json")
                    .with_body(r#"{"id":11,"notesname":"Unit 1"}"#)
                    .expect(1)
                    .create()
            })
            .build()
            .await?;
        sign_in(&test.session).await;

        let result = upload_note(
            State(test.to_app_state()),
            test.session.clone(),
            note_form().into_multipart().await,
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            json_body(resp).await,
            json!({ "success": true, "file": { "id": 11, "notesname": "Unit 1" } })
        );
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 and no outbound requests when the name is missing
    async fn rejects_missing_name() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_storage_put_endpoint("notes", 200, 0)
            .with_create_endpoint(CREATE_NOTE_PATH, 201, json!({}), 0)
            .build()
            .await?;
        sign_in(&test.session).await;

        let form = FormBuilder::new().pdf("notespdf").text("subjectid", "1");
        let result = upload_note(
            State(test.to_app_state()),
            test.session.clone(),
            form.into_multipart().await,
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(resp).await,
            json!({ "error": "Missing file or required fields" })
        );
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect 401 without any storage or backend request when nobody is signed in
    async fn rejects_missing_session_before_storage() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_storage_put_endpoint("notes", 200, 0)
            .with_create_endpoint(CREATE_NOTE_PATH, 201, json!({}), 0)
            .build()
            .await?;

        let result = upload_note(
            State(test.to_app_state()),
            test.session.clone(),
            note_form().into_multipart().await,
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            json_body(resp).await,
            json!({ "error": "Unauthorized: No access token" })
        );
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect 502 with the storage message and no backend call when the bucket rejects the PUT
    async fn maps_storage_failure_to_bad_gateway() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_storage_put_endpoint("notes", 403, 1)
            .with_create_endpoint(CREATE_NOTE_PATH, 201, json!({}), 0)
            .build()
            .await?;
        sign_in(&test.session).await;

        let result = upload_note(
            State(test.to_app_state()),
            test.session.clone(),
            note_form().into_multipart().await,
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(json_body(resp).await, json!({ "error": "Access Denied" }));
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect 502 with the backend's message when note creation fails
    async fn maps_backend_failure_to_bad_gateway() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_storage_put_endpoint("notes", 200, 1)
            .with_create_endpoint(
                CREATE_NOTE_PATH,
                404,
                json!({ "message": "Subject not found" }),
                1,
            )
            .build()
            .await?;
        sign_in(&test.session).await;

        let result = upload_note(
            State(test.to_app_state()),
            test.session.clone(),
            note_form().into_multipart().await,
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(json_body(resp).await, json!({ "error": "Subject not found" }));
        test.assert_mocks();

        Ok(())
    }
}

mod upload_pyq {
    use super::*;

    #[tokio::test]
    /// Expect the exam type normalized to upper case on the wire
    async fn creates_pyq_with_normalized_exam_type() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_storage_put_endpoint("pyqs", 200, 1)
            .with_mock_endpoint(|server| {
                server
                    .mock("POST", CREATE_PYQ_PATH)
                    .match_header("authorization", "Bearer tok123")
                    .match_body(Matcher::AllOf(vec![
                        Matcher::Regex(r#""pyqtype":"MID""#.to_string()),
                        Matcher::Regex(r#""pyqyear":"2023""#.to_string()),
                        Matcher::Regex(r#""subjectId":4"#.to_string()),
                        Matcher::Regex(
                            r#""links":"https://[^"]+/uploads/pyqs/ds-mid-2023-\d+\.pdf""#
                                .to_string(),
                        ),
                    ]))
                    .with_status(201)
                    .with_header("content-type", "application/json")
                    .with_body(r#"{"id":5}"#)
                    .expect(1)
                    .create()
            })
            .build()
            .await?;
        sign_in(&test.session).await;

        let result = upload_pyq(
            State(test.to_app_state()),
            test.session.clone(),
            pyq_form("mid").into_multipart().await,
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            json_body(resp).await,
            json!({ "success": true, "file": { "id": 5 } })
        );
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 for an exam type other than MID or END
    async fn rejects_unknown_exam_type() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_storage_put_endpoint("pyqs", 200, 0)
            .build()
            .await?;
        sign_in(&test.session).await;

        let result = upload_pyq(
            State(test.to_app_state()),
            test.session.clone(),
            pyq_form("FINAL").into_multipart().await,
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect 401 without any storage or backend request when nobody is signed in
    async fn rejects_missing_session() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_storage_put_endpoint("pyqs", 200, 0)
            .with_create_endpoint(CREATE_PYQ_PATH, 201, json!({}), 0)
            .build()
            .await?;

        let result = upload_pyq(
            State(test.to_app_state()),
            test.session.clone(),
            pyq_form("END").into_multipart().await,
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            json_body(resp).await,
            json!({ "error": "Unauthorized: No access token" })
        );
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect 502 and no backend call when the bucket rejects the paper
    async fn maps_storage_failure_to_bad_gateway() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_storage_put_endpoint("pyqs", 403, 1)
            .with_create_endpoint(CREATE_PYQ_PATH, 201, json!({}), 0)
            .build()
            .await?;
        sign_in(&test.session).await;

        let result = upload_pyq(
            State(test.to_app_state()),
            test.session.clone(),
            pyq_form("END").into_multipart().await,
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(json_body(resp).await, json!({ "error": "Access Denied" }));
        test.assert_mocks();

        Ok(())
    }
}

mod upload_video {
    use super::*;

    fn video(link: &str) -> Json<VideoLinkDto> {
        Json(VideoLinkDto {
            videoname: "Intro".to_string(),
            link: link.to_string(),
            subjectid: "3".to_string(),
        })
    }

    #[tokio::test]
    /// Expect the link passed to the backend without any storage upload
    async fn creates_video_without_storage() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_mock_endpoint(|server| {
                server
                    .mock("POST", CREATE_VIDEO_PATH)
                    .match_header("authorization", "Bearer tok123")
                    .match_body(Matcher::Json(json!({
                        "subjectId": 3,
                        "link": "https://youtu.be/abc",
                        "videoname": "Intro"
                    })))
                    .with_status(201)
                    .with_header("content-type", "application/json")
                    .with_body(r#"{"id":8}"#)
                    .expect(1)
                    .create()
            })
            .with_storage_put_endpoint("notes", 200, 0)
            .build()
            .await?;
        sign_in(&test.session).await;

        let result = upload_video(
            State(test.to_app_state()),
            test.session.clone(),
            video("https://youtu.be/abc"),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            json_body(resp).await,
            json!({ "success": true, "file": { "id": 8 } })
        );
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 for a link outside YouTube
    async fn rejects_non_youtube_link() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_create_endpoint(CREATE_VIDEO_PATH, 201, json!({}), 0)
            .build()
            .await?;
        sign_in(&test.session).await;

        let result = upload_video(
            State(test.to_app_state()),
            test.session.clone(),
            video("https://vimeo.com/123"),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(resp).await,
            json!({ "error": "Please enter a valid YouTube URL." })
        );
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect 401 when nobody is signed in
    async fn rejects_missing_session() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_create_endpoint(CREATE_VIDEO_PATH, 201, json!({}), 0)
            .build()
            .await?;

        let result = upload_video(
            State(test.to_app_state()),
            test.session.clone(),
            video("https://www.youtube.com/watch?v=abc"),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        test.assert_mocks();

        Ok(())
    }
}

mod create_branch {
    use super::*;

    #[tokio::test]
    /// Expect the image stored under the branches prefix and the result under `data`
    async fn stores_image_and_creates_branch() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_storage_put_endpoint("branches", 200, 1)
            .with_mock_endpoint(|server| {
                server
                    .mock("POST", CREATE_BRANCH_PATH)
                    .match_header("authorization", "Bearer tok123")
                    .match_body(Matcher::AllOf(vec![
                        Matcher::Regex(r#""branchname":"Computer Science""#.to_string()),
                        Matcher::Regex(r#""branchcode":"CSE""#.to_string()),
                        Matcher::Regex(
                            r#""displayimage":"https://[^"]+/uploads/branches/computer-science-\d+\.png""#
                                .to_string(),
                        ),
                    ]))
                    .with_status(201)
                    .with_header("content-type", "application/json")
                    .with_body(r#"{"branch_id":3}"#)
                    .expect(1)
                    .create()
            })
            .build()
            .await?;
        sign_in(&test.session).await;

        let result = create_branch(
            State(test.to_app_state()),
            test.session.clone(),
            branch_form().into_multipart().await,
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            json_body(resp).await,
            json!({ "success": true, "data": { "branch_id": 3 } })
        );
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 with the branch message when the image is missing
    async fn rejects_missing_image() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_storage_put_endpoint("branches", 200, 0)
            .build()
            .await?;
        sign_in(&test.session).await;

        let form = FormBuilder::new()
            .text("branchname", "Computer Science")
            .text("branchcode", "CSE");
        let result = create_branch(
            State(test.to_app_state()),
            test.session.clone(),
            form.into_multipart().await,
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(resp).await, json!({ "error": "Missing fields" }));
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect 401 without any storage or backend request when nobody is signed in
    async fn rejects_missing_session() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_storage_put_endpoint("branches", 200, 0)
            .with_create_endpoint(CREATE_BRANCH_PATH, 201, json!({}), 0)
            .build()
            .await?;

        let result = create_branch(
            State(test.to_app_state()),
            test.session.clone(),
            branch_form().into_multipart().await,
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect 502 and no backend call when the bucket rejects the image
    async fn maps_storage_failure_to_bad_gateway() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_storage_put_endpoint("branches", 403, 1)
            .with_create_endpoint(CREATE_BRANCH_PATH, 201, json!({}), 0)
            .build()
            .await?;
        sign_in(&test.session).await;

        let result = create_branch(
            State(test.to_app_state()),
            test.session.clone(),
            branch_form().into_multipart().await,
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(json_body(resp).await, json!({ "error": "Access Denied" }));
        test.assert_mocks();

        Ok(())
    }
}
