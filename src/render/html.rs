//! HTML fragment builders for the schedule modal.
//!
//! Markup mirrors the dashboard's Bootstrap layout: a grid of per-day cards,
//! each with a header (day number, weekday, badge) and a body of per-site
//! topic lines. All interpolated text is escaped; class names derived from
//! site identifiers go through the same escaper since they land in attribute
//! position.

use crate::schedule::{DayEntry, MonthAnchor, NormalizedSchedule, SitePlan, Topic};
use chrono::Datelike;
use std::fmt::Write;

/// Escape text for interpolation into element or attribute content.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Placeholder shown while the fetch is in flight.
pub fn loading_panel() -> String {
    concat!(
        r#"<div class="loading">"#,
        r#"<div class="spinner"></div>"#,
        "<div>계획표를 불러오는 중...</div>",
        "</div>"
    )
    .to_string()
}

/// Terminal-failure panel: message plus a retry control that re-invokes the
/// lifecycle.
pub fn error_panel(message: &str) -> String {
    format!(
        concat!(
            r#"<div class="text-center text-danger">"#,
            "<h6>계획표를 불러올 수 없습니다</h6>",
            r#"<p class="small">오류: {message}</p>"#,
            r#"<button class="btn btn-sm btn-outline-primary" onclick="showSchedule()">다시 시도</button>"#,
            "</div>"
        ),
        message = escape(message)
    )
}

/// Assemble the full schedule fragment: month heading plus the day-card grid,
/// or the no-data placeholder when the payload carried no schedule.
pub fn schedule_grid(
    month_name: Option<&str>,
    schedule: &NormalizedSchedule,
    anchor: MonthAnchor,
) -> String {
    let heading = match month_name {
        Some(name) => escape(name),
        None => escape(&anchor.display_name()),
    };

    let mut html = format!(
        concat!(
            r#"<div class="text-center mb-4">"#,
            r#"<h5 class="text-primary">{heading} 전체 발행 계획</h5>"#,
            r#"<p class="text-muted">🔥 실시간 트렌드가 반영된 스케줄</p>"#,
            "</div>",
            r#"<div class="row">"#
        ),
        heading = heading
    );

    match schedule {
        NormalizedSchedule::Days(entries) => {
            for entry in entries {
                html.push_str(&day_card(entry));
            }
        }
        NormalizedSchedule::Missing => {
            html.push_str(
                r#"<div class="col-12 text-center text-muted">스케줄 데이터가 없습니다.</div>"#,
            );
        }
    }

    html.push_str("</div>");
    html
}

/// One calendar day as a card. A day with no sites renders as a holiday card
/// with a placeholder body; it is never omitted from the grid.
pub fn day_card(entry: &DayEntry) -> String {
    let has_schedule = entry.has_schedule();

    let mut body = String::new();
    if let Some(sites) = &entry.sites {
        for (site_name, plan) in sites {
            if let Some(plan) = plan {
                body.push_str(&site_block(site_name, plan));
            }
        }
    }
    if body.is_empty() {
        body.push_str(r#"<div class="text-muted">스케줄 없음</div>"#);
    }

    // The badge text is a fixed label, not a computed count.
    let badge = if has_schedule {
        r#"<span class="badge bg-success">8개</span>"#
    } else {
        r#"<span class="badge bg-light text-muted">휴일</span>"#
    };
    let border = if has_schedule {
        "border-primary"
    } else {
        "border-light"
    };

    format!(
        concat!(
            r#"<div class="col-md-4 col-lg-3 mb-3">"#,
            r#"<div class="card {border}">"#,
            r#"<div class="card-header bg-light d-flex justify-content-between">"#,
            "<strong>{day}일 ({day_name})</strong>",
            "{badge}",
            "</div>",
            r#"<div class="card-body p-2 small">{body}</div>"#,
            "</div>",
            "</div>"
        ),
        border = border,
        day = entry.date.day(),
        day_name = escape(&entry.day_name),
        badge = badge,
        body = body
    )
}

/// Labeled block for one site's plan.
///
/// A pair renders exactly two numbered lines (primary first); a sequence
/// renders one numbered line per topic, numbered from 1; anything else
/// renders the label alone.
fn site_block(site_name: &str, plan: &SitePlan) -> String {
    let mut block = format!(
        concat!(
            r#"<div class="mb-2">"#,
            r#"<strong class="site-badge site-{class}">{label}</strong>"#
        ),
        class = escape(site_name),
        label = escape(&site_name.to_uppercase())
    );

    match plan {
        SitePlan::Pair { primary, secondary } => {
            push_topic_line(&mut block, 1, primary);
            push_topic_line(&mut block, 2, secondary);
        }
        SitePlan::Sequence(topics) => {
            for (index, topic) in topics.iter().enumerate() {
                push_topic_line(&mut block, index + 1, topic);
            }
        }
        SitePlan::Other(_) => {}
    }

    block.push_str("</div>");
    block
}

fn push_topic_line(block: &mut String, number: usize, topic: &Topic) {
    let _ = write!(
        block,
        r#"<div class="small mt-1">{number}. {title}</div>"#,
        number = number,
        title = escape(topic.title())
    );
}
