use std::sync::Arc;
use teloxide::prelude::*;
use fd_core::{Error, Result};
use fd_digest::DigestService;

pub mod commands;
pub mod schedule;

use commands::{Command, DIGEST_FAILED, GREETING, NOTHING_NEW};

/// The Telegram surface: command dispatcher plus the daily schedule loop.
pub struct BotApp {
    bot: Bot,
    chat_id: ChatId,
    service: Arc<DigestService>,
    digest_hour: u32,
    digest_minute: u32,
}

impl BotApp {
    pub fn new(
        token: &str,
        chat_id: i64,
        service: Arc<DigestService>,
        digest_hour: u32,
        digest_minute: u32,
    ) -> Self {
        Self {
            bot: Bot::new(token),
            chat_id: ChatId(chat_id),
            service,
            digest_hour,
            digest_minute,
        }
    }

    /// Run until the process is stopped.
    pub async fn run(self) -> Result<()> {
        tokio::spawn(schedule::run_daily(
            self.bot.clone(),
            self.chat_id,
            self.service.clone(),
            self.digest_hour,
            self.digest_minute,
        ));

        let handler = Update::filter_message()
            .filter_command::<Command>()
            .endpoint(answer);

        Dispatcher::builder(self.bot, handler)
            .dependencies(teloxide::dptree::deps![self.service])
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        Ok(())
    }
}

async fn answer(
    bot: Bot,
    msg: Message,
    cmd: Command,
    service: Arc<DigestService>,
) -> ResponseResult<()> {
    match cmd {
        Command::Start => {
            bot.send_message(msg.chat.id, GREETING).await?;
        }
        // On-demand digests reply to the chat the command came from
        Command::Digest => {
            if let Err(e) = send_digest(&bot, msg.chat.id, &service).await {
                tracing::error!("On-demand digest failed: {}", e);
                bot.send_message(msg.chat.id, DIGEST_FAILED).await?;
            }
        }
    }
    Ok(())
}

/// Build the digest, deliver it chunk by chunk, then record the links.
/// Links are committed only after every chunk went out, so a partial
/// delivery is re-sent whole on the next cycle.
pub async fn send_digest(bot: &Bot, chat_id: ChatId, service: &DigestService) -> Result<()> {
    let digest = service.build().await?;

    if digest.is_empty() {
        bot.send_message(chat_id, NOTHING_NEW)
            .await
            .map_err(|e| Error::Delivery(e.to_string()))?;
        return Ok(());
    }

    for chunk in &digest.chunks {
        bot.send_message(chat_id, chunk.as_str())
            .await
            .map_err(|e| Error::Delivery(e.to_string()))?;
    }

    service.commit(&digest.articles).await?;
    tracing::info!("💾 Recorded {} delivered link(s)", digest.articles.len());
    Ok(())
}
