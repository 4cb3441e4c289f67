pub mod groups;
pub mod naming;
pub mod series;

/// Topics offered by the main menu, in the order they are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    FunctionalGroups,
    IupacNaming,
    HomologousSeries,
    QuickQuiz,
    AiNaming,
}

impl Topic {
    pub const ALL: [Topic; 5] = [
        Topic::FunctionalGroups,
        Topic::IupacNaming,
        Topic::HomologousSeries,
        Topic::QuickQuiz,
        Topic::AiNaming,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Topic::FunctionalGroups => "Functional Groups",
            Topic::IupacNaming => "IUPAC Naming",
            Topic::HomologousSeries => "Homologous Series",
            Topic::QuickQuiz => "Quick Quiz",
            Topic::AiNaming => "AI-Powered Compound Naming",
        }
    }

    pub fn header(&self) -> &'static str {
        match self {
            Topic::FunctionalGroups => "🧬 Common Functional Groups",
            Topic::IupacNaming => "🔤 IUPAC Naming of Organic Compounds",
            Topic::HomologousSeries => "📈 Homologous Series and General Formulas",
            Topic::QuickQuiz => "🧠 Quick Quiz: Functional Groups & Naming",
            Topic::AiNaming => "🤖 AI Compound Naming Assistant",
        }
    }

    pub fn from_label(label: &str) -> Option<Topic> {
        let label = label.trim();
        Topic::ALL.into_iter().find(|t| t.label() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_label_routes_back_to_its_topic() {
        for topic in Topic::ALL {
            assert_eq!(Topic::from_label(topic.label()), Some(topic));
        }
    }

    #[test]
    fn labels_match_exactly() {
        assert_eq!(Topic::from_label(" Quick Quiz "), Some(Topic::QuickQuiz));
        assert_eq!(Topic::from_label("quick quiz"), None);
        assert_eq!(Topic::from_label("Organic stuff"), None);
    }
}
