//! Message Handler module for processing incoming Telegram messages

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info, warn};
use teloxide::prelude::*;
use teloxide::types::FileId;

use crate::analysis::{AnalysisOutcome, AnalysisRequest, ImageAsset};
use crate::classifier::{classify, download_failure_reply};
use crate::download::{download_photo, select_largest_photo};
use crate::messages;
use crate::mime::detect_mime_type;
use crate::provider::AnalysisProvider;

pub async fn message_handler(
    bot: Bot,
    msg: Message,
    provider: Arc<dyn AnalysisProvider>,
) -> Result<()> {
    if msg.text().is_some() {
        handle_text_message(&bot, &msg).await?;
    } else if msg.photo().is_some() {
        handle_photo_message(&bot, &msg, provider.as_ref()).await?;
    } else {
        debug!(
            "Ignoring unsupported update shape from chat {}",
            msg.chat.id
        );
    }

    Ok(())
}

async fn handle_text_message(bot: &Bot, msg: &Message) -> Result<()> {
    if let Some(text) = msg.text() {
        info!("Received text message from chat {}", msg.chat.id);

        if is_capability_command(text) {
            bot.send_message(msg.chat.id, messages::WELCOME).await?;
        } else {
            // No provider interaction for plain text
            bot.send_message(msg.chat.id, messages::SEND_PHOTO).await?;
        }
    }
    Ok(())
}

/// Commands answered with the static capability description
pub fn is_capability_command(text: &str) -> bool {
    text == "/start" || text == "/help"
}

async fn handle_photo_message(
    bot: &Bot,
    msg: &Message,
    provider: &dyn AnalysisProvider,
) -> Result<()> {
    let chat_id = msg.chat.id;
    info!("Received photo from chat {chat_id}");

    let Some(photos) = msg.photo() else {
        return Ok(());
    };
    let Some(photo) = select_largest_photo(photos) else {
        warn!("Photo update without size variants from chat {chat_id}");
        return Ok(());
    };

    let notice = bot.send_message(chat_id, messages::PROCESSING).await?;

    let reply = analyze_photo(bot, chat_id, photo.file.id.clone(), provider).await;
    let send_result = bot.send_message(chat_id, reply.as_str()).await;

    // Retire the processing notice on every path, even when the final
    // reply could not be sent. A deletion failure is logged, not raised.
    if let Err(e) = bot.delete_message(chat_id, notice.id).await {
        error!("Failed to delete processing notice for chat {chat_id}: {e:?}");
    }

    send_result?;
    Ok(())
}

/// Run download → format detection → analysis → classification
///
/// Always yields the user-facing reply text; every failure is folded
/// into one of the fixed notices.
async fn analyze_photo(
    bot: &Bot,
    chat_id: ChatId,
    file_id: FileId,
    provider: &dyn AnalysisProvider,
) -> String {
    let bytes = match download_photo(bot, file_id).await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Failed to download photo for chat {chat_id}: {e}");
            return download_failure_reply();
        }
    };
    debug!("Downloaded {} bytes for chat {chat_id}", bytes.len());

    let mime_type = detect_mime_type(&bytes);
    let request = AnalysisRequest::new(
        ImageAsset { bytes, mime_type },
        provider.model_id().to_string(),
    );

    let outcome = provider.analyze(request).await;
    match &outcome {
        AnalysisOutcome::Success { text } => {
            info!(
                "Analysis succeeded for chat {chat_id} ({} chars)",
                text.len()
            );
        }
        AnalysisOutcome::Blocked { reason } => {
            warn!("Analysis blocked for chat {chat_id}: {reason}");
        }
        AnalysisOutcome::Empty => {
            warn!("Provider returned an empty result for chat {chat_id}");
        }
        AnalysisOutcome::ProviderError { category, detail } => {
            error!("Provider error for chat {chat_id} ({category}): {detail}");
        }
    }

    classify(&outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test command recognition for the capability description
    #[test]
    fn test_capability_command_recognition() {
        assert!(is_capability_command("/start"));
        assert!(is_capability_command("/help"));
        assert!(!is_capability_command("hello"));
        assert!(!is_capability_command("/start now"));
        assert!(!is_capability_command(""));
    }
}
