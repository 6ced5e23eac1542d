use super::assign::SPEED_ROUND_SECONDS;
use super::{Question, QuestionType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Answered { choice: usize, seconds_left: u32 },
    /// The speed-round countdown ran out before a choice was made.
    TimedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub correct: bool,
    /// Correct speed-round answer given with more than half the time left.
    pub speed_bonus: bool,
}

pub fn evaluate(question: &Question, response: Response) -> Outcome {
    match response {
        Response::TimedOut => Outcome {
            correct: false,
            speed_bonus: false,
        },
        Response::Answered {
            choice,
            seconds_left,
        } => {
            let correct = question.is_correct(choice);
            let speed_bonus = correct
                && question.kind == QuestionType::SpeedRound
                && seconds_left.saturating_mul(2) > question.time_limit.unwrap_or(SPEED_ROUND_SECONDS);
            Outcome {
                correct,
                speed_bonus,
            }
        }
    }
}

/// Whether the fun fact is revealed once the question is answered.
pub fn shows_fun_fact(question: &Question) -> bool {
    question.fun_fact.is_some() && question.kind != QuestionType::SpeedRound
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(kind: QuestionType, time_limit: Option<u32>) -> Question {
        Question {
            id: "t".to_string(),
            question: "What is sumac?".to_string(),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_index: 2,
            fun_fact: Some("tangy".to_string()),
            kind,
            time_limit,
        }
    }

    #[test]
    fn fast_correct_answer_earns_bonus() {
        let q = question(QuestionType::SpeedRound, Some(10));
        let outcome = evaluate(&q, Response::Answered { choice: 2, seconds_left: 6 });
        assert_eq!(outcome, Outcome { correct: true, speed_bonus: true });
    }

    #[test]
    fn exactly_half_time_left_is_no_bonus() {
        let q = question(QuestionType::SpeedRound, Some(10));
        let outcome = evaluate(&q, Response::Answered { choice: 2, seconds_left: 5 });
        assert!(outcome.correct);
        assert!(!outcome.speed_bonus);
    }

    #[test]
    fn wrong_or_timed_out_answers_score_nothing() {
        let q = question(QuestionType::SpeedRound, None);
        assert_eq!(
            evaluate(&q, Response::Answered { choice: 0, seconds_left: 9 }),
            Outcome { correct: false, speed_bonus: false }
        );
        assert_eq!(
            evaluate(&q, Response::TimedOut),
            Outcome { correct: false, speed_bonus: false }
        );
    }

    #[test]
    fn bonus_is_only_for_speed_rounds() {
        let q = question(QuestionType::Standard, None);
        let outcome = evaluate(&q, Response::Answered { choice: 2, seconds_left: 10 });
        assert!(outcome.correct);
        assert!(!outcome.speed_bonus);
    }

    #[test]
    fn fun_fact_hidden_for_speed_rounds() {
        assert!(shows_fun_fact(&question(QuestionType::FlipCard, None)));
        assert!(!shows_fun_fact(&question(QuestionType::SpeedRound, Some(10))));
    }
}
