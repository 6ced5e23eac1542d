pub mod ai_helper;
pub mod assign;
pub mod fallback;
pub mod prompt;
pub mod scoring;
pub mod statement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ar,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "ar" => Some(Language::Ar),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    Kids,
    Adults,
}

impl Audience {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "kids" => Some(Audience::Kids),
            "adults" => Some(Audience::Adults),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Sweets,
    Culture,
    History,
    Spices,
    Religion,
    Mixed,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Food,
        Category::Sweets,
        Category::Culture,
        Category::History,
        Category::Spices,
        Category::Religion,
        Category::Mixed,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Sweets => "sweets",
            Category::Culture => "culture",
            Category::History => "history",
            Category::Spices => "spices",
            Category::Religion => "religion",
            Category::Mixed => "mixed",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }
}

/// Presentation style a question is rendered with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionType {
    #[default]
    Standard,
    FlipCard,
    TrueFalse,
    SpeedRound,
}

/// A question as it comes out of the backend or the fallback bank,
/// before a presentation type is attached.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuestion {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fun_fact: Option<String>,
}

impl RawQuestion {
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_index).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fun_fact: Option<String>,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<u32>,
}

impl Question {
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_index
    }
}
