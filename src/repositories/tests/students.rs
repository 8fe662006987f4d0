use crate::repositories;
use crate::schemas::StudentCreate;
use crate::test_support;

#[tokio::test]
async fn soft_delete_hides_student_from_class_listing() {
    let ctx = test_support::setup_test_context().await;

    let teacher = test_support::insert_teacher(&ctx.db, "teacher").await;
    let class = test_support::insert_class(&ctx.db, teacher.id, "4a").await;
    let kept = test_support::insert_student(&ctx.db, class.id, "Greta", "Hahn").await;
    let removed = test_support::insert_student(&ctx.db, class.id, "Hans", "Ebert").await;
    assert!(removed.is_active());

    let deleted = repositories::students::soft_delete(&ctx.db, removed.id)
        .await
        .expect("soft delete")
        .expect("student exists");
    assert!(deleted.is_deleted);
    assert!(!deleted.is_active());
    assert!(deleted.deleted_at.is_some());

    let listed = repositories::students::list_by_class(
        &ctx.db,
        class.id,
        0,
        repositories::students::DEFAULT_LIMIT,
    )
    .await
    .expect("list");
    let ids: Vec<i64> = listed.iter().map(|student| student.id).collect();
    assert_eq!(ids, vec![kept.id]);

    let still_stored = repositories::students::find_by_id(&ctx.db, removed.id).await.expect("find");
    assert!(still_stored.is_some());
}

#[tokio::test]
async fn soft_delete_missing_student_is_none() {
    let ctx = test_support::setup_test_context().await;

    let result = repositories::students::soft_delete(&ctx.db, 999).await.expect("soft delete");
    assert!(result.is_none());
}

#[tokio::test]
async fn search_matches_either_name_case_insensitively() {
    let ctx = test_support::setup_test_context().await;

    let teacher = test_support::insert_teacher(&ctx.db, "teacher").await;
    let class = test_support::insert_class(&ctx.db, teacher.id, "3b").await;
    let other_class = test_support::insert_class(&ctx.db, teacher.id, "3c").await;
    let mara = test_support::insert_student(&ctx.db, class.id, "Mara", "Fischer").await;
    let jonas = test_support::insert_student(&ctx.db, class.id, "Jonas", "Amaral").await;
    test_support::insert_student(&ctx.db, class.id, "Paul", "Weber").await;
    test_support::insert_student(&ctx.db, other_class.id, "Marek", "Nowak").await;
    repositories::students::soft_delete(&ctx.db, jonas.id).await.expect("soft delete");

    let mut found = repositories::students::search_in_class(&ctx.db, class.id, "MAR", 0, 100)
        .await
        .expect("search");
    found.sort_by_key(|student| student.id);

    let ids: Vec<i64> = found.iter().map(|student| student.id).collect();
    assert_eq!(ids, vec![mara.id, jonas.id]);

    let wildcard = repositories::students::search_in_class(&ctx.db, class.id, "%", 0, 100)
        .await
        .expect("search wildcard");
    assert!(wildcard.is_empty());
}

#[tokio::test]
async fn update_and_touch_last_interaction() {
    let ctx = test_support::setup_test_context().await;

    let teacher = test_support::insert_teacher(&ctx.db, "teacher").await;
    let class = test_support::insert_class(&ctx.db, teacher.id, "2a").await;
    let student = test_support::insert_student(&ctx.db, class.id, "Ida", "Kraus").await;

    let updated = repositories::students::update(
        &ctx.db,
        student.id,
        &StudentCreate { first_name: "Ida-Marie".to_string(), last_name: "Krause".to_string() },
    )
    .await
    .expect("update")
    .expect("student exists");
    assert_eq!(updated.first_name, "Ida-Marie");
    assert_eq!(updated.last_name, "Krause");
    assert_eq!(updated.class_id, class.id);

    let marker = test_support::at(12, 14);
    let touched =
        repositories::students::touch_last_interaction(&ctx.db, student.id, Some(marker))
            .await
            .expect("touch")
            .expect("student exists");
    assert_eq!(touched.last_interaction_update_timestamp, marker);

    let now_touched = repositories::students::touch_last_interaction(&ctx.db, student.id, None)
        .await
        .expect("touch now")
        .expect("student exists");
    assert!(now_touched.last_interaction_update_timestamp > marker);
}
