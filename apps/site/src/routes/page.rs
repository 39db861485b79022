use axum::{extract::State, response::Html};
use tracing::{info, warn};

use crate::dom::parse_html;
use crate::errors::AppError;
use crate::loader::load_resume_document;
use crate::render::{render_resume, show_blocking_notice, RenderContext};
use crate::state::AppState;

/// GET /
/// One page load: read the skeleton, fetch the data document, populate every
/// section, serve the result. A failed fetch serves the untouched skeleton
/// behind a blocking notice.
pub async fn handle_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let template = tokio::fs::read_to_string(&state.config.page_template).await?;
    let loaded = load_resume_document(state.source.as_ref()).await;

    let mut doc = parse_html(&template);
    let resume = match loaded {
        Ok(resume) => resume,
        Err(source) => {
            show_blocking_notice(&mut doc, &source);
            return Err(AppError::ResumeUnavailable {
                source,
                page: doc.to_html(),
            });
        }
    };

    let ctx = RenderContext::new(&state.config.site_origin)
        .with_icon_scanner(state.icon_scanner.as_deref());
    let report = render_resume(&mut doc, &resume, &ctx);
    if report.is_complete() {
        info!("Resume page rendered");
    } else {
        warn!("Resume page rendered with skipped sections: {:?}", report.outcomes);
    }

    Ok(Html(doc.to_html()))
}
