//! Pure rendering: every function turns domain data into a [`Screen`], which the bot
//! shell then sends as an HTML message. Nothing here talks to Telegram.

use teloxide::utils::html::escape;

use crate::ai_helper::AiError;
use crate::quiz::Question;
use crate::topics::series::{FormulaSet, SeriesError, SERIES_RANGE};
use crate::topics::{groups, naming, Topic};

pub const TITLE: &str = "🌿 Organic Chemistry Tutor";
pub const MENU_BUTTON: &str = "☰ Topics";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keyboard {
    /// The topic menu, one topic per row.
    Topics,
    /// Custom rows of buttons; a row with [`MENU_BUTTON`] is always appended.
    Choices(Vec<Vec<String>>),
    /// Leave whatever keyboard the user already has.
    Keep,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub text: String,
    pub keyboard: Keyboard,
}

impl Screen {
    fn new(text: impl Into<String>, keyboard: Keyboard) -> Self {
        Self {
            text: text.into(),
            keyboard,
        }
    }
}

fn header(topic: Topic) -> String {
    format!("<b>{}</b>", topic.header())
}

pub fn welcome() -> Screen {
    Screen::new(
        format!("<b>{}</b>\n\nChoose a topic:", TITLE),
        Keyboard::Topics,
    )
}

pub fn topic_menu() -> Screen {
    Screen::new("Choose a topic:", Keyboard::Topics)
}

pub fn unknown_topic() -> Screen {
    Screen::new("Please choose one of the topics below.", Keyboard::Topics)
}

pub fn text_only() -> Screen {
    Screen::new("Please send your answer as text.", Keyboard::Keep)
}

pub fn functional_groups() -> Screen {
    let entries = groups::list_groups()
        .iter()
        .map(|g| {
            format!(
                "<b>{}</b>\n<blockquote expandable><b>Functional Group:</b> {}\n<b>Example:</b> {}\n<b>Description:</b> {}</blockquote>",
                escape(g.name),
                escape(g.bond_pattern),
                escape(g.example),
                escape(g.description)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    Screen::new(
        format!("{}\n\n{}", header(Topic::FunctionalGroups), entries),
        Keyboard::Topics,
    )
}

pub fn naming_prompt() -> Screen {
    Screen::new(
        format!(
            "{}\n\nUse the IUPAC naming rules to identify the compound name.\nEnter a compound formula (e.g., CH3COOH, C2H5OH):",
            header(Topic::IupacNaming)
        ),
        Keyboard::Topics,
    )
}

pub fn naming_result(formula: &str) -> Screen {
    Screen::new(escape(&naming::lookup(formula)), Keyboard::Keep)
}

fn slider() -> Keyboard {
    let values = SERIES_RANGE.map(|n| n.to_string()).collect::<Vec<_>>();
    Keyboard::Choices(values.chunks(5).map(|row| row.to_vec()).collect())
}

pub fn series_prompt() -> Screen {
    Screen::new(
        format!(
            "{}\n\nEnter a value for \"n\" to generate general formulas.\nValue of n (1–10):",
            header(Topic::HomologousSeries)
        ),
        slider(),
    )
}

pub fn series(set: &FormulaSet) -> Screen {
    let alkyne = match &set.alkyne {
        Some(formula) => format!("Formula: {}", formula),
        None => "Formula not valid for n &lt; 2".to_string(),
    };
    Screen::new(
        format!(
            "<b>n = {}</b>\n\n<b>Alkanes (CₙH₂ₙ₊₂)</b>\nFormula: {}\n\n<b>Alkenes (CₙH₂ₙ)</b>\nFormula: {}\n\n<b>Alkynes (CₙH₂ₙ₋₂)</b>\n{}\n\n<b>Alcohols (CₙH₂ₙ₊₁OH)</b>\nFormula: {}",
            set.n, set.alkane, set.alkene, alkyne, set.alcohol
        ),
        Keyboard::Keep,
    )
}

pub fn series_error(error: &SeriesError) -> Screen {
    Screen::new(format!("⚠️ {}", escape(&error.to_string())), Keyboard::Keep)
}

pub fn quiz_intro() -> Screen {
    Screen::new(header(Topic::QuickQuiz), Keyboard::Keep)
}

pub fn quiz_question(number: usize, total: usize, question: &Question) -> Screen {
    Screen::new(
        format!(
            "<b>Question {}/{}</b>\n{}\n\nSelect one:",
            number + 1,
            total,
            escape(&question.text)
        ),
        Keyboard::Choices(question.options().into_iter().map(|o| vec![o]).collect()),
    )
}

pub fn quiz_not_an_option() -> Screen {
    Screen::new("Select one of the options below.", Keyboard::Keep)
}

pub fn quiz_feedback(question: &Question, selected: &str) -> Screen {
    let text = if question.is_correct(selected) {
        "✅ Correct!".to_string()
    } else {
        let correct = question
            .correct_answer()
            .map(|a| a.text.as_str())
            .unwrap_or_default();
        format!("❌ Incorrect! The correct answer is: {}", escape(correct))
    };
    Screen::new(text, Keyboard::Keep)
}

pub fn quiz_summary(score: usize, total: usize) -> Screen {
    Screen::new(
        format!("🏁 Final Score: <b>{} / {}</b>", score, total),
        Keyboard::Topics,
    )
}

pub fn assistant_prompt() -> Screen {
    Screen::new(
        format!(
            "{}\n\nType a molecular formula or structure and let AI suggest the IUPAC name and explanation.\nEnter a compound formula or description (e.g., CH3CH2OH, a 3-carbon alcohol):",
            header(Topic::AiNaming)
        ),
        Keyboard::Topics,
    )
}

pub fn assistant_reply(reply: &Result<String, AiError>) -> Screen {
    let text = match reply {
        Ok(content) => format!("✅ AI Response:\n\n{}", escape(content)),
        Err(e @ (AiError::MissingCredential | AiError::EmptyPrompt)) => {
            format!("⚠️ Warning: {}", e)
        }
        Err(e) => format!("⚠️ Error: {}", escape(&e.to_string())),
    };
    Screen::new(text, Keyboard::Keep)
}
