//! Quick Wins Panel Model

use crate::model::QuickWin;

pub const EMPTY_TEXT: &str = "No suggestions available.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Testing,
    Docs,
    Refactor,
    Bugfix,
    Feature,
}

impl Category {
    /// Unknown categories are styled as features
    pub fn parse(raw: &str) -> Self {
        match raw {
            "testing" => Category::Testing,
            "docs" => Category::Docs,
            "refactor" => Category::Refactor,
            "bugfix" => Category::Bugfix,
            _ => Category::Feature,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Category::Testing => "category-testing",
            Category::Docs => "category-docs",
            Category::Refactor => "category-refactor",
            Category::Bugfix => "category-bugfix",
            Category::Feature => "category-feature",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuickWinCard {
    pub task: String,
    pub repo: String,
    pub minutes_label: String,
    pub category: Category,
    /// Shown as-is, even when it is not a known category
    pub category_label: String,
    pub prompt: String,
}

impl From<&QuickWin> for QuickWinCard {
    fn from(win: &QuickWin) -> Self {
        Self {
            task: win.task.clone(),
            repo: win.repo.clone(),
            minutes_label: format!("~{} min", win.estimated_minutes),
            category: Category::parse(&win.category),
            category_label: win.category.clone(),
            prompt: win.prompt.clone(),
        }
    }
}

/// Body of the quick wins list once suggestions have loaded
#[derive(Clone, Debug, PartialEq)]
pub enum SuggestionList {
    Cards(Vec<QuickWinCard>),
    Empty(&'static str),
}

pub fn suggestion_list(suggestions: &[QuickWin]) -> SuggestionList {
    if suggestions.is_empty() {
        SuggestionList::Empty(EMPTY_TEXT)
    } else {
        SuggestionList::Cards(suggestions.iter().map(QuickWinCard::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn win(category: &str) -> QuickWin {
        QuickWin {
            task: "Add tests for parser".into(),
            repo: "codefluent".into(),
            estimated_minutes: 15,
            category: category.into(),
            prompt: "Write unit tests".into(),
        }
    }

    #[test]
    fn test_card_fields() {
        let card = QuickWinCard::from(&win("testing"));
        assert_eq!(card.minutes_label, "~15 min");
        assert_eq!(card.category, Category::Testing);
        assert_eq!(card.category.css_class(), "category-testing");
    }

    #[test]
    fn test_unknown_category_keeps_text() {
        let card = QuickWinCard::from(&win("performance"));
        assert_eq!(card.category, Category::Feature);
        assert_eq!(card.category_label, "performance");
    }

    #[test]
    fn test_empty_list_shows_empty_text() {
        assert_eq!(
            suggestion_list(&[]),
            SuggestionList::Empty("No suggestions available.")
        );
    }

    #[test]
    fn test_suggestions_become_cards_in_order() {
        match suggestion_list(&[win("docs"), win("bugfix")]) {
            SuggestionList::Cards(cards) => {
                assert_eq!(cards.len(), 2);
                assert_eq!(cards[0].category, Category::Docs);
                assert_eq!(cards[1].category, Category::Bugfix);
            }
            other => panic!("expected cards, got {:?}", other),
        }
    }
}
