pub mod config;
pub mod quiz;
pub mod session;

pub use config::TriviaConfig;
pub use quiz::ai_helper::{GenerationError, QuizHelper};
pub use quiz::{Audience, Category, Language, Question, QuestionType, RawQuestion};
pub use session::{load_round, GameSession, Phase};
