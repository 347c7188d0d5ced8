use std::fmt::Write;

use chrono::{DateTime, Utc};

use feedback_types::messages;
use feedback_types::models::Feedback;

/// "3분 전" style age of an entry relative to `now`.
pub fn relative_time(created_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(created_at) = created_at else {
        return messages::JUST_NOW.to_string();
    };

    let secs = (now - created_at).num_seconds();
    let mins = secs / 60;
    let hours = mins / 60;
    let days = hours / 24;

    if secs < 60 {
        messages::JUST_NOW.to_string()
    } else if mins < 60 {
        format!("{}분 전", mins)
    } else if hours < 24 {
        format!("{}시간 전", hours)
    } else if days < 30 {
        format!("{}일 전", days)
    } else if days < 365 {
        format!("{}개월 전", days / 30)
    } else {
        format!("{}년 전", days / 365)
    }
}

/// Plain-text board: a header with the entry count, then one block per entry.
pub fn render_board(feedbacks: &[Feedback], now: DateTime<Utc>) -> String {
    if feedbacks.is_empty() {
        return format!("{}\n", messages::EMPTY_BOARD);
    }

    let mut out = format!("의견 목록 ({})\n", feedbacks.len());
    for f in feedbacks {
        let _ = writeln!(out, "\n#{} {} · {}", f.id, f.name, relative_time(f.created_at, now));
        for line in f.content.lines() {
            let _ = writeln!(out, "  {}", line);
        }
    }
    out
}
