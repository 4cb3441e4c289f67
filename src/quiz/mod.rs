use std::collections::BTreeMap;

/// Chosen option per question, keyed by the question's position in the quiz.
pub type Selections = BTreeMap<usize, String>;

#[derive(Debug, Clone, Default)]
pub struct Quiz {
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// The fixed functional groups & naming quiz. Question and option order never change.
    pub fn functional_groups() -> Self {
        Self::new(vec![
            Question::with_options(
                "Which functional group does ethanol contain?",
                ["Ketone", "Alcohol", "Alkene"],
                "Alcohol",
            ),
            Question::with_options(
                "What is the general formula for alkenes?",
                ["CₙH₂ₙ", "CₙH₂ₙ₊₂", "CₙH₂ₙ₋₂"],
                "CₙH₂ₙ",
            ),
            Question::with_options(
                "Which group is represented by -COOH?",
                ["Alcohol", "Ester", "Carboxylic Acid"],
                "Carboxylic Acid",
            ),
            Question::with_options(
                "Which hydrocarbon has a triple bond?",
                ["Alkene", "Alkyne", "Alkane"],
                "Alkyne",
            ),
            Question::with_options(
                "Which functional group is present in esters?",
                ["-OH", "-COOH", "-COO-"],
                "-COO-",
            ),
        ])
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Number of selections that exactly match their question's answer.
    /// Indices with no matching question count as wrong.
    pub fn score(&self, selections: &Selections) -> usize {
        selections
            .iter()
            .filter(|(idx, selected)| {
                self.questions
                    .get(**idx)
                    .is_some_and(|q| q.is_correct(selected))
            })
            .count()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Question {
    pub text: String,
    pub answers: Vec<Answer>,
}
impl Question {
    pub fn new(text: String, answers: Vec<Answer>) -> Self {
        Self { text, answers }
    }

    fn with_options(text: &str, options: [&str; 3], correct: &str) -> Self {
        let answers = options
            .iter()
            .map(|o| Answer::new(o.to_string(), *o == correct))
            .collect();
        Self::new(text.to_string(), answers)
    }

    pub fn options(&self) -> Vec<String> {
        self.answers.iter().map(|a| a.text.clone()).collect()
    }

    pub fn has_option(&self, text: &str) -> bool {
        self.answers.iter().any(|a| a.text == text)
    }

    pub fn correct_answer(&self) -> Option<&Answer> {
        self.answers.iter().find(|a| a.is_correct)
    }

    pub fn is_correct(&self, selected: &str) -> bool {
        self.correct_answer().is_some_and(|a| a.text == selected)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Answer {
    pub text: String,
    pub is_correct: bool,
}
impl Answer {
    pub fn new(text: String, is_correct: bool) -> Self {
        Self { text, is_correct }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn correct_selections(quiz: &Quiz) -> Selections {
        quiz.questions
            .iter()
            .enumerate()
            .map(|(i, q)| (i, q.correct_answer().unwrap().text.clone()))
            .collect()
    }

    #[test]
    fn five_questions_with_three_options_and_one_answer() {
        let quiz = Quiz::functional_groups();
        assert_eq!(quiz.len(), 5);
        assert!(!quiz.is_empty());
        assert!(Quiz::default().is_empty());
        for q in &quiz.questions {
            assert_eq!(q.answers.len(), 3);
            assert_eq!(q.answers.iter().filter(|a| a.is_correct).count(), 1);
        }
    }

    #[test]
    fn all_correct_scores_five() {
        let quiz = Quiz::functional_groups();
        assert_eq!(quiz.score(&correct_selections(&quiz)), 5);
    }

    #[test]
    fn empty_selections_score_zero() {
        let quiz = Quiz::functional_groups();
        assert_eq!(quiz.score(&Selections::new()), 0);
    }

    #[test]
    fn partial_and_wrong_selections() {
        let quiz = Quiz::functional_groups();
        let mut selections = Selections::new();
        selections.insert(3, "Alkyne".to_string());
        selections.insert(0, "Ketone".to_string());
        selections.insert(4, "-COO-".to_string());
        assert_eq!(quiz.score(&selections), 2);
    }

    #[test]
    fn exact_match_only() {
        let quiz = Quiz::functional_groups();
        let mut selections = Selections::new();
        selections.insert(0, "alcohol".to_string());
        selections.insert(1, "CnH2n".to_string());
        selections.insert(9, "Alcohol".to_string());
        assert_eq!(quiz.score(&selections), 0);
    }

    #[test]
    fn order_of_answering_does_not_matter() {
        let quiz = Quiz::functional_groups();
        let forward = correct_selections(&quiz);
        let mut backward = Selections::new();
        for (i, answer) in forward.iter().rev() {
            backward.insert(*i, answer.clone());
        }
        assert_eq!(quiz.score(&forward), quiz.score(&backward));
    }
}
