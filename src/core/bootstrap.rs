use crate::core::security;
use crate::core::state::AppState;
use crate::repositories;

pub(crate) async fn ensure_teacher(state: &AppState) -> anyhow::Result<()> {
    let bootstrap = state.settings().bootstrap();
    if bootstrap.teacher_password.is_empty() {
        tracing::warn!("BOOTSTRAP_TEACHER_PASSWORD not configured; skipping teacher bootstrap");
        return Ok(());
    }

    let username = &bootstrap.teacher_username;
    let teacher = repositories::teachers::find_by_username(state.db(), username).await?;

    let Some(teacher) = teacher else {
        let created =
            repositories::teachers::create(state.db(), username, &bootstrap.teacher_password)
                .await?;
        tracing::info!(teacher_id = created.id, "Created bootstrap teacher {username}");
        return Ok(());
    };

    let verified = security::verify_password(&bootstrap.teacher_password, &teacher.hashed_password)
        .unwrap_or(false);

    if verified {
        tracing::info!(teacher_id = teacher.id, "Bootstrap teacher already up to date");
        return Ok(());
    }

    let hashed_password = security::hash_password(&bootstrap.teacher_password)?;
    repositories::teachers::update_password(state.db(), teacher.id, &hashed_password).await?;
    tracing::info!(teacher_id = teacher.id, "Updated bootstrap teacher {username}");

    Ok(())
}
