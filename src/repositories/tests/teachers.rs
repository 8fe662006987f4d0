use crate::repositories::{self, ErrorKind};
use crate::test_support;

#[tokio::test]
async fn create_hashes_password_and_looks_up_by_username() {
    let ctx = test_support::setup_test_context().await;

    let teacher = test_support::insert_teacher(&ctx.db, "frau.keller").await;
    assert_ne!(teacher.hashed_password, test_support::TEST_PASSWORD);

    let by_name = repositories::teachers::find_by_username(&ctx.db, "frau.keller")
        .await
        .expect("find by username")
        .expect("teacher exists");
    assert_eq!(by_name.id, teacher.id);

    let by_id = repositories::teachers::find_by_id(&ctx.db, teacher.id).await.expect("find by id");
    assert_eq!(by_id.map(|found| found.username), Some("frau.keller".to_string()));

    assert!(repositories::teachers::find_by_username(&ctx.db, "nobody")
        .await
        .expect("find unknown")
        .is_none());
}

#[tokio::test]
async fn duplicate_username_is_a_store_error() {
    let ctx = test_support::setup_test_context().await;

    test_support::insert_teacher(&ctx.db, "herr.wolf").await;
    let err = repositories::teachers::create(&ctx.db, "herr.wolf", "another-pass")
        .await
        .expect_err("duplicate username");

    assert_eq!(err.kind(), ErrorKind::Store);
}

#[tokio::test]
async fn authenticate_checks_password() {
    let ctx = test_support::setup_test_context().await;

    let teacher = test_support::insert_teacher(&ctx.db, "frau.berg").await;

    let ok = repositories::teachers::authenticate(&ctx.db, "frau.berg", test_support::TEST_PASSWORD)
        .await
        .expect("authenticate");
    assert_eq!(ok.map(|found| found.id), Some(teacher.id));

    let wrong = repositories::teachers::authenticate(&ctx.db, "frau.berg", "wrong-password")
        .await
        .expect("authenticate wrong");
    assert!(wrong.is_none());

    let unknown = repositories::teachers::authenticate(&ctx.db, "ghost", "whatever")
        .await
        .expect("authenticate unknown");
    assert!(unknown.is_none());
}

#[tokio::test]
async fn list_paginates() {
    let ctx = test_support::setup_test_context().await;

    for name in ["a.teacher", "b.teacher", "c.teacher"] {
        test_support::insert_teacher(&ctx.db, name).await;
    }

    let all = repositories::teachers::list(&ctx.db, 0, repositories::teachers::DEFAULT_LIMIT)
        .await
        .expect("list");
    assert_eq!(all.len(), 3);

    let page = repositories::teachers::list(&ctx.db, 1, 1).await.expect("page");
    assert_eq!(page.len(), 1);
}

#[tokio::test]
async fn list_clamps_negative_skip_and_limit() {
    let ctx = test_support::setup_test_context().await;

    let first = test_support::insert_teacher(&ctx.db, "a.teacher").await;
    test_support::insert_teacher(&ctx.db, "b.teacher").await;

    let from_start = repositories::teachers::list(&ctx.db, -5, 1).await.expect("negative skip");
    assert_eq!(from_start.len(), 1);
    assert_eq!(from_start[0].id, first.id);

    let empty = repositories::teachers::list(&ctx.db, 0, -1).await.expect("negative limit");
    assert!(empty.is_empty());
}
