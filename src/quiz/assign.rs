use super::statement::to_statement;
use super::{Question, QuestionType, RawQuestion};

pub const SPEED_ROUND_SECONDS: u32 = 10;

pub const TRUE_FALSE_OPTIONS: [&str; 2] = ["True", "False"];

// Slot layout for a batch; anything past the end of the table is standard.
const LAYOUT: [QuestionType; 10] = [
    QuestionType::Standard,
    QuestionType::FlipCard,
    QuestionType::Standard,
    QuestionType::TrueFalse,
    QuestionType::SpeedRound,
    QuestionType::FlipCard,
    QuestionType::Standard,
    QuestionType::TrueFalse,
    QuestionType::SpeedRound,
    QuestionType::Standard,
];

pub fn type_for_position(position: usize) -> QuestionType {
    LAYOUT.get(position).copied().unwrap_or_default()
}

/// Attaches a presentation type to every question of a batch, by position.
///
/// True/false slots are rewritten into a statement built from the correct
/// option, so their answer is always "True" (index 0).
pub fn assign_types(raw_questions: Vec<RawQuestion>) -> Vec<Question> {
    raw_questions
        .into_iter()
        .enumerate()
        .map(|(position, raw)| typed(raw, type_for_position(position)))
        .collect()
}

fn typed(raw: RawQuestion, kind: QuestionType) -> Question {
    match kind {
        QuestionType::TrueFalse => {
            let statement = to_statement(&raw.question, raw.correct_option().unwrap_or_default());
            Question {
                id: raw.id,
                question: statement,
                options: TRUE_FALSE_OPTIONS.iter().map(|o| o.to_string()).collect(),
                correct_index: 0,
                fun_fact: raw.fun_fact,
                kind,
                time_limit: None,
            }
        }
        QuestionType::SpeedRound => Question {
            id: raw.id,
            question: raw.question,
            options: raw.options,
            correct_index: raw.correct_index,
            fun_fact: raw.fun_fact,
            kind,
            time_limit: Some(SPEED_ROUND_SECONDS),
        },
        QuestionType::Standard | QuestionType::FlipCard => Question {
            id: raw.id,
            question: raw.question,
            options: raw.options,
            correct_index: raw.correct_index,
            fun_fact: raw.fun_fact,
            kind,
            time_limit: None,
        },
    }
}
