mod ai_helper;
mod config;
mod quiz;
mod topics;
mod tutor;
mod view;

use std::sync::Arc;

use ai_helper::{CompletionBackend, OpenAiBackend};
use config::{AssistantConfig, TutorConfig};
use dotenv::dotenv;
use log::{debug, info, warn};
use teloxide::{
    dispatching::dialogue::{serializer::Json, ErasedStorage, SqliteStorage, Storage},
    prelude::*,
    types::{ChatAction, KeyboardButton, KeyboardMarkup, ParseMode},
};
use topics::Topic;
use tutor::State;
use view::{Keyboard, Screen, MENU_BUTTON};

type TutorDialogue = Dialogue<State, ErasedStorage<State>>;
type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

type TutorStorage = std::sync::Arc<ErasedStorage<State>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A .env file is optional, the variables may come from the environment directly
    dotenv().ok();

    pretty_env_logger::init();
    info!("Starting organic chemistry tutor...");

    let config = TutorConfig::from_env();
    let bot = Bot::from_env();

    info!("Opening dialogue storage at {}", config.db_path);
    let storage: TutorStorage = SqliteStorage::open(&config.db_path, Json).await?.erase();
    info!("Storage ready");

    let backend: Arc<dyn CompletionBackend> = Arc::new(OpenAiBackend::new(&config.assistant.model));
    let assistant = Arc::new(config.assistant);

    Dispatcher::builder(
        bot,
        Update::filter_message()
            .enter_dialogue::<Message, ErasedStorage<State>, State>()
            .endpoint(
                move |bot: Bot, dialogue: TutorDialogue, state: State, msg: Message| {
                    receive_input(
                        backend.clone(),
                        assistant.clone(),
                        bot,
                        dialogue,
                        state,
                        msg,
                    )
                },
            ),
    )
    .dependencies(dptree::deps![storage])
    .enable_ctrlc_handler()
    .build()
    .dispatch()
    .await;

    Ok(())
}

async fn receive_input(
    backend: Arc<dyn CompletionBackend>,
    assistant: Arc<AssistantConfig>,
    bot: Bot,
    dialogue: TutorDialogue,
    state: State,
    msg: Message,
) -> HandlerResult {
    let Some(text) = msg.text() else {
        show(&bot, msg.chat.id, vec![view::text_only()]).await?;
        return Ok(());
    };

    let transition = tutor::advance(state, text);
    debug!("Chat {} moves to {:?}", msg.chat.id.0, transition.next);

    show(&bot, msg.chat.id, transition.screens).await?;
    dialogue.update(transition.next).await?;

    if let Some(prompt) = transition.assistant_prompt {
        // Only a busy indicator, the answer is sent either way
        if let Err(e) = bot.send_chat_action(msg.chat.id, ChatAction::Typing).await {
            warn!("Could not show the typing indicator: {}", e);
        }

        let reply = ai_helper::ask(backend.as_ref(), &assistant, &prompt).await;
        show(&bot, msg.chat.id, vec![view::assistant_reply(&reply)]).await?;
    }

    Ok(())
}

async fn show(bot: &Bot, chat_id: ChatId, screens: Vec<Screen>) -> HandlerResult {
    for screen in screens {
        let message = bot
            .send_message(chat_id, screen.text)
            .parse_mode(ParseMode::Html);
        match keyboard_markup(screen.keyboard) {
            Some(keyboard) => message.reply_markup(keyboard).await?,
            None => message.await?,
        };
    }
    Ok(())
}

fn keyboard_markup(keyboard: Keyboard) -> Option<KeyboardMarkup> {
    let rows = match keyboard {
        Keyboard::Topics => Topic::ALL
            .iter()
            .map(|topic| vec![KeyboardButton::new(topic.label())])
            .collect::<Vec<_>>(),
        Keyboard::Choices(rows) => rows
            .into_iter()
            .map(|row| row.into_iter().map(KeyboardButton::new).collect())
            .chain(std::iter::once(vec![KeyboardButton::new(MENU_BUTTON)]))
            .collect::<Vec<_>>(),
        Keyboard::Keep => return None,
    };
    Some(KeyboardMarkup::new(rows))
}
