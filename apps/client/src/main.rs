use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_client::api::{resume, scoped_resumes};
use resume_client::config::Config;
use resume_client::models::resume::format_date_range;
use resume_client::mutations::TracingNotifier;
use resume_client::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume client v{}", env!("CARGO_PKG_VERSION"));
    info!("Backend: {}", config.api_base_url);

    let state = AppState::new(config, Arc::new(TracingNotifier));

    match resume::get_resume(&state.api).await {
        Ok(main_resume) => {
            if let Some(contact) = &main_resume.contact {
                info!("Main resume for {} <{}>", contact.full_name, contact.email);
            }
            info!(
                "{} skills, {} education entries, {} work experiences",
                main_resume.skills.len(),
                main_resume.education.len(),
                main_resume.work_experiences.len()
            );
            for we in &main_resume.work_experiences {
                info!("  {} at {} ({})", we.title, we.company, we.date_range());
            }
        }
        Err(e) => warn!("Could not load main resume (status {}): {e}", e.status()),
    }

    let scoped = scoped_resumes::list_scoped_resumes(&state.api).await?;
    info!("{} scoped resumes", scoped.len());
    for r in &scoped {
        info!(
            "  {} {} (updated {})",
            r.id,
            r.name,
            format_date_range(None, Some(r.updated_at.date_naive()))
        );
    }

    Ok(())
}
