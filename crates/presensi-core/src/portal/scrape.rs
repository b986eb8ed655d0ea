//! Attendance overview walk.
//!
//! Blocks with a link are pending and need their detail page fetched to find the
//! submission link; those fetches run with bounded concurrency and are collected
//! back in document order. Blocks without a link are completed and cost nothing.

use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, info, warn};

use presensi_types::{
    AttendanceReport, CompletedSession, PendingSession, PortalConfig, PortalError, Stage,
};

use super::html::{self, SessionBlock};
use super::session::PortalSession;
use crate::metrics;

/// Scrape the overview page of an authenticated `session`.
///
/// Any failed fetch fails the whole scrape; partial reports are never returned.
pub async fn scrape_attendance(
    session: &PortalSession,
    config: &PortalConfig,
) -> Result<AttendanceReport, PortalError> {
    let page = session.get(Stage::Overview, &config.overview_url).await?;
    let blocks = html::session_blocks(&page.body);
    debug!(blocks = blocks.len(), "parsed overview page");

    let mut completed = Vec::new();
    let mut to_resolve = Vec::new();
    for mut block in blocks {
        match block.detail_href.take() {
            Some(href) => to_resolve.push((block, href)),
            None => completed.push(CompletedSession {
                course_name: block.course_name,
                time_slot: block.time_slot,
                lecturer_name: block.lecturer_name,
            }),
        }
    }

    // `buffered` yields in submission order regardless of completion order.
    let pending: Vec<PendingSession> = stream::iter(to_resolve)
        .map(|(block, href)| resolve_pending(session, config, block, href))
        .buffered(config.detail_concurrency.max(1))
        .try_collect()
        .await?;

    info!(completed = completed.len(), pending = pending.len(), "attendance scraped");
    let report = AttendanceReport::success(completed, pending);
    if report.is_empty() {
        debug!("overview page lists no sessions");
    }
    Ok(report)
}

async fn resolve_pending(
    session: &PortalSession,
    config: &PortalConfig,
    block: SessionBlock,
    href: String,
) -> Result<PendingSession, PortalError> {
    let detail_url = html::join_origin(&config.base_origin, &href);
    let page = session.get(Stage::Detail, &detail_url).await?;
    let action_href = html::detail_action_href(&page.body).unwrap_or_else(|| {
        warn!(detail_url = %detail_url, "detail page has no submission link");
        metrics::record_blank_field("linkPresensi");
        String::new()
    });

    Ok(PendingSession {
        course_name: block.course_name,
        time_slot: block.time_slot,
        lecturer_name: block.lecturer_name,
        action_link: html::join_origin(&config.base_origin, &action_href),
    })
}
