use std::sync::Arc;
use chrono::{DateTime, Duration, NaiveTime, Utc};
use teloxide::prelude::*;
use fd_digest::DigestService;
use crate::send_digest;

/// Next occurrence of `hour:minute` UTC strictly after `now`.
pub fn next_run(now: DateTime<Utc>, hour: u32, minute: u32) -> DateTime<Utc> {
    let target = NaiveTime::from_hms_opt(hour, minute, 0).expect("schedule time is validated");
    let today = now.date_naive().and_time(target).and_utc();
    if today > now {
        today
    } else {
        today + Duration::days(1)
    }
}

/// Sleep until the configured wall-clock time, run one digest cycle against
/// the configured chat, repeat. A failed cycle is logged and the loop keeps
/// going; uncommitted articles come back in the next cycle.
pub async fn run_daily(
    bot: Bot,
    chat_id: ChatId,
    service: Arc<DigestService>,
    hour: u32,
    minute: u32,
) {
    loop {
        let now = Utc::now();
        let next = next_run(now, hour, minute);
        let wait = (next - now).to_std().unwrap_or_default();
        tracing::info!("⏰ Next scheduled digest at {}", next);
        tokio::time::sleep(wait).await;

        tracing::info!("Starting scheduled digest cycle");
        if let Err(e) = send_digest(&bot, chat_id, &service).await {
            tracing::error!("Scheduled digest failed: {}", e);
        }
    }
}
