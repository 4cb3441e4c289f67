use crate::quiz::{Quiz, Selections};
use crate::topics::series;
use crate::topics::Topic;
use crate::view::{self, Screen, MENU_BUTTON};

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum State {
    #[default]
    Start,
    ChoosingTopic,
    NamingCompound,
    ChoosingSeriesLength,
    Quiz {
        question_number: usize,
        selections: Selections,
    },
    AskingAssistant,
}

/// Outcome of one user message: what to show, where the dialogue goes next and,
/// for the assistant topic, the prompt still to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub next: State,
    pub screens: Vec<Screen>,
    pub assistant_prompt: Option<String>,
}

impl Transition {
    fn to(next: State, screens: Vec<Screen>) -> Self {
        Self {
            next,
            screens,
            assistant_prompt: None,
        }
    }
}

/// Routes one text message. Topic labels and the menu button work from any state,
/// like a sidebar that is always on screen.
pub fn advance(state: State, input: &str) -> Transition {
    let trimmed = input.trim();

    if state == State::Start || trimmed == "/start" {
        return Transition::to(State::ChoosingTopic, vec![view::welcome()]);
    }
    if trimmed == MENU_BUTTON {
        return Transition::to(State::ChoosingTopic, vec![view::topic_menu()]);
    }
    if let Some(topic) = Topic::from_label(trimmed) {
        return open_topic(topic);
    }

    match state {
        State::Start | State::ChoosingTopic => {
            Transition::to(State::ChoosingTopic, vec![view::unknown_topic()])
        }
        State::NamingCompound if trimmed.is_empty() => {
            Transition::to(State::NamingCompound, vec![view::naming_prompt()])
        }
        State::NamingCompound => {
            Transition::to(State::NamingCompound, vec![view::naming_result(input)])
        }
        State::ChoosingSeriesLength => {
            let screen = match series::parse_length(input).and_then(series::generate) {
                Ok(set) => view::series(&set),
                Err(e) => view::series_error(&e),
            };
            Transition::to(State::ChoosingSeriesLength, vec![screen])
        }
        State::Quiz {
            question_number,
            selections,
        } => answer_question(question_number, selections, trimmed),
        State::AskingAssistant => Transition {
            next: State::AskingAssistant,
            screens: Vec::new(),
            assistant_prompt: Some(input.to_string()),
        },
    }
}

fn open_topic(topic: Topic) -> Transition {
    match topic {
        Topic::FunctionalGroups => {
            Transition::to(State::ChoosingTopic, vec![view::functional_groups()])
        }
        Topic::IupacNaming => Transition::to(State::NamingCompound, vec![view::naming_prompt()]),
        Topic::HomologousSeries => {
            // The picker starts at n = 1, which is always in range.
            let first = series::generate(1)
                .map(|set| view::series(&set))
                .unwrap_or_else(|e| view::series_error(&e));
            Transition::to(
                State::ChoosingSeriesLength,
                vec![view::series_prompt(), first],
            )
        }
        Topic::QuickQuiz => {
            let quiz = Quiz::functional_groups();
            let mut screens = vec![view::quiz_intro()];
            screens.extend(
                quiz.questions
                    .first()
                    .map(|q| view::quiz_question(0, quiz.len(), q)),
            );
            Transition::to(
                State::Quiz {
                    question_number: 0,
                    selections: Selections::new(),
                },
                screens,
            )
        }
        Topic::AiNaming => Transition::to(State::AskingAssistant, vec![view::assistant_prompt()]),
    }
}

fn answer_question(question_number: usize, mut selections: Selections, answer: &str) -> Transition {
    let quiz = Quiz::functional_groups();

    let Some(question) = quiz.questions.get(question_number) else {
        let summary = view::quiz_summary(quiz.score(&selections), quiz.len());
        return Transition::to(State::ChoosingTopic, vec![summary]);
    };

    if !question.has_option(answer) {
        return Transition::to(
            State::Quiz {
                question_number,
                selections,
            },
            vec![
                view::quiz_not_an_option(),
                view::quiz_question(question_number, quiz.len(), question),
            ],
        );
    }

    let mut screens = vec![view::quiz_feedback(question, answer)];
    selections.insert(question_number, answer.to_string());

    let next_number = question_number + 1;
    match quiz.questions.get(next_number) {
        Some(next) => {
            screens.push(view::quiz_question(next_number, quiz.len(), next));
            Transition::to(
                State::Quiz {
                    question_number: next_number,
                    selections,
                },
                screens,
            )
        }
        None => {
            log::debug!("Quiz finished with selections {:?}", selections);
            screens.push(view::quiz_summary(quiz.score(&selections), quiz.len()));
            Transition::to(State::ChoosingTopic, screens)
        }
    }
}
