//! In-memory game session: the player's selections, the current batch and
//! the score. Owned by the UI layer and changed only through the actions
//! below.

use log::{debug, info};
use thiserror::Error;

use crate::config::DEFAULT_QUESTION_COUNT;
use crate::quiz::ai_helper::{CompletionBackend, QuizHelper};
use crate::quiz::{Audience, Category, Language, Question};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("no language selected")]
    LanguageNotSelected,

    #[error("no audience selected")]
    AudienceNotSelected,

    #[error("no category selected")]
    CategoryNotSelected,
}

/// Screen the session is on, derived from its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NeedLanguage,
    NeedAudience,
    NeedCategory,
    Loading,
    Playing,
    Finished,
}

/// Everything needed to fetch one batch. The ticket ties the result back to
/// the round that asked for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub ticket: u64,
    pub category: Category,
    pub audience: Audience,
    pub language: Language,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Perfect,
    Amazing,
    AlmostThere,
    GoodTry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub score: u32,
    pub total: usize,
    pub percentage: u32,
    pub verdict: Verdict,
    pub celebrate: bool,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    pub language: Option<Language>,
    pub audience: Option<Audience>,
    pub category: Option<Category>,
    pub questions: Vec<Question>,
    pub current_question: usize,
    pub score: u32,
    pub total_answered: u32,
    pub is_loading: bool,
    pub game_started: bool,
    question_count: usize,
    ticket: u64,
}

// The ticket only orders fetches, it is not part of the game state.
impl PartialEq for GameSession {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language
            && self.audience == other.audience
            && self.category == other.category
            && self.questions == other.questions
            && self.current_question == other.current_question
            && self.score == other.score
            && self.total_answered == other.total_answered
            && self.is_loading == other.is_loading
            && self.game_started == other.game_started
            && self.question_count == other.question_count
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self::with_question_count(DEFAULT_QUESTION_COUNT)
    }

    pub fn with_question_count(question_count: usize) -> Self {
        Self {
            language: None,
            audience: None,
            category: None,
            questions: Vec::new(),
            current_question: 0,
            score: 0,
            total_answered: 0,
            is_loading: false,
            game_started: false,
            question_count,
            ticket: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.language.is_none() {
            return Phase::NeedLanguage;
        }
        if self.audience.is_none() {
            return Phase::NeedAudience;
        }
        if self.category.is_none() || !self.game_started {
            return Phase::NeedCategory;
        }
        if self.is_loading || self.questions.is_empty() {
            return Phase::Loading;
        }
        if self.current_question >= self.questions.len() {
            return Phase::Finished;
        }
        Phase::Playing
    }

    pub fn select_language(&mut self, language: Language) {
        if self.language != Some(language) {
            self.invalidate_pending();
        }
        self.language = Some(language);
    }

    pub fn select_audience(&mut self, audience: Audience) {
        if self.audience != Some(audience) {
            self.invalidate_pending();
        }
        self.audience = Some(audience);
    }

    pub fn select_category(&mut self, category: Option<Category>) {
        if self.category != category {
            self.invalidate_pending();
        }
        self.category = category;
    }

    /// Starts a round for the current selections and returns the fetch it needs.
    pub fn start_game(&mut self) -> Result<FetchRequest, SessionError> {
        let request = self.next_request()?;
        self.clear_round();
        self.is_loading = true;
        self.game_started = true;
        info!("Round {} started", request.ticket);
        Ok(request)
    }

    /// Same category, fresh batch.
    pub fn play_again(&mut self) -> Result<FetchRequest, SessionError> {
        self.start_game()
    }

    /// The outstanding fetch, if the session is waiting for one.
    pub fn pending_fetch(&self) -> Option<FetchRequest> {
        if !self.is_loading || !self.questions.is_empty() {
            return None;
        }
        self.request_for(self.ticket).ok()
    }

    /// Installs a batch. An empty batch leaves the session waiting so the
    /// fetch is issued again.
    pub fn replace_questions(&mut self, questions: Vec<Question>) {
        self.is_loading = self.is_loading && questions.is_empty();
        self.questions = questions;
    }

    /// Applies a fetched batch unless the session has moved on since the
    /// fetch was issued. Returns whether the batch was applied.
    pub fn complete_fetch(&mut self, ticket: u64, questions: Vec<Question>) -> bool {
        if ticket != self.ticket || !self.game_started {
            debug!("Discarding stale batch for round {} (current {})", ticket, self.ticket);
            return false;
        }
        self.replace_questions(questions);
        true
    }

    pub fn record_answer(&mut self, is_correct: bool) {
        if is_correct {
            self.score += 1;
        }
        self.total_answered += 1;
    }

    /// Moves to the next question; never past the end of the batch.
    pub fn advance(&mut self) {
        if self.current_question < self.questions.len() {
            self.current_question += 1;
        }
    }

    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.current_question)
    }

    /// 1-based position of the current question and the batch size.
    pub fn progress(&self) -> (usize, usize) {
        let total = self.questions.len();
        ((self.current_question + 1).min(total), total)
    }

    pub fn summary(&self) -> Summary {
        let total = self.questions.len();
        let percentage = if total == 0 {
            0
        } else {
            (self.score as f64 / total as f64 * 100.0).round() as u32
        };
        let verdict = if percentage >= 100 {
            Verdict::Perfect
        } else if percentage >= 80 {
            Verdict::Amazing
        } else if percentage >= 60 {
            Verdict::AlmostThere
        } else {
            Verdict::GoodTry
        };

        Summary {
            score: self.score,
            total,
            percentage,
            verdict,
            celebrate: percentage >= 70,
        }
    }

    /// Back to the very first screen.
    pub fn reset(&mut self) {
        let question_count = self.question_count;
        let ticket = self.ticket + 1;
        *self = Self::with_question_count(question_count);
        self.ticket = ticket;
    }

    /// Back to category selection, keeping language and audience.
    pub fn reset_category(&mut self) {
        self.category = None;
        self.clear_round();
        self.is_loading = false;
        self.game_started = false;
    }

    fn clear_round(&mut self) {
        self.questions.clear();
        self.current_question = 0;
        self.score = 0;
        self.total_answered = 0;
        self.ticket += 1;
    }

    // A batch already in flight was asked for under the old selections.
    fn invalidate_pending(&mut self) {
        if self.is_loading {
            self.ticket += 1;
        }
    }

    fn next_request(&self) -> Result<FetchRequest, SessionError> {
        self.request_for(self.ticket + 1)
    }

    fn request_for(&self, ticket: u64) -> Result<FetchRequest, SessionError> {
        Ok(FetchRequest {
            ticket,
            language: self.language.ok_or(SessionError::LanguageNotSelected)?,
            audience: self.audience.ok_or(SessionError::AudienceNotSelected)?,
            category: self.category.ok_or(SessionError::CategoryNotSelected)?,
            count: self.question_count,
        })
    }
}

/// Runs the session's pending fetch, if any, and applies the batch.
pub async fn load_round<B: CompletionBackend>(
    session: &mut GameSession,
    helper: &QuizHelper<B>,
) -> bool {
    let request = match session.pending_fetch() {
        Some(request) => request,
        None => return false,
    };

    let questions = helper
        .request_questions(
            Some(request.category),
            request.audience,
            request.language,
            request.count,
        )
        .await;

    session.complete_fetch(request.ticket, questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::assign::assign_types;
    use crate::quiz::fallback::get_fallback;

    fn ready_session() -> GameSession {
        let mut session = GameSession::new();
        session.select_language(Language::Ar);
        session.select_audience(Audience::Kids);
        session.select_category(Some(Category::Food));
        session
    }

    fn batch() -> Vec<Question> {
        assign_types(get_fallback(Language::En))
    }

    #[test]
    fn fresh_session_needs_language() {
        let session = GameSession::new();
        assert_eq!(session.phase(), Phase::NeedLanguage);
        assert_eq!(session.score, 0);
        assert!(!session.is_loading);
        assert!(!session.game_started);
    }

    #[test]
    fn selections_walk_through_phases() {
        let mut session = GameSession::new();
        session.select_language(Language::En);
        assert_eq!(session.phase(), Phase::NeedAudience);
        session.select_audience(Audience::Adults);
        assert_eq!(session.phase(), Phase::NeedCategory);
        session.select_category(Some(Category::History));
        assert_eq!(session.phase(), Phase::NeedCategory);
        session.start_game().unwrap();
        assert_eq!(session.phase(), Phase::Loading);
    }

    #[test]
    fn start_then_replace_clears_loading() {
        let mut session = ready_session();
        session.start_game().unwrap();
        assert!(session.is_loading);
        assert!(session.game_started);
        assert!(session.questions.is_empty());

        session.replace_questions(batch());
        assert!(!session.is_loading);
        assert_eq!(session.phase(), Phase::Playing);
    }

    #[test]
    fn start_requires_selections() {
        let mut session = GameSession::new();
        assert_eq!(session.start_game(), Err(SessionError::LanguageNotSelected));
        session.select_language(Language::En);
        assert_eq!(session.start_game(), Err(SessionError::AudienceNotSelected));
        session.select_audience(Audience::Kids);
        assert_eq!(session.start_game(), Err(SessionError::CategoryNotSelected));
        assert!(!session.is_loading);
    }

    #[test]
    fn pending_fetch_only_while_waiting() {
        let mut session = ready_session();
        assert_eq!(session.pending_fetch(), None);

        let request = session.start_game().unwrap();
        assert_eq!(session.pending_fetch(), Some(request.clone()));
        assert_eq!(request.category, Category::Food);
        assert_eq!(request.language, Language::Ar);
        assert_eq!(request.count, DEFAULT_QUESTION_COUNT);

        assert!(session.complete_fetch(request.ticket, batch()));
        assert_eq!(session.pending_fetch(), None);
    }

    #[test]
    fn stale_batches_are_discarded() {
        let mut session = ready_session();
        let first = session.start_game().unwrap();
        session.reset_category();
        assert!(!session.complete_fetch(first.ticket, batch()));
        assert!(session.questions.is_empty());

        session.select_category(Some(Category::Sweets));
        let second = session.start_game().unwrap();
        assert!(!session.complete_fetch(first.ticket, batch()));
        assert!(session.complete_fetch(second.ticket, batch()));
    }

    #[test]
    fn score_counts_correct_answers() {
        let mut session = ready_session();
        session.start_game().unwrap();
        session.replace_questions(batch());

        let answers = [true, false, true, true, false];
        for correct in answers {
            session.record_answer(correct);
            session.advance();
        }

        assert_eq!(session.total_answered, 5);
        assert_eq!(session.score, 3);
        assert_eq!(session.current_question, 5);
    }

    #[test]
    fn finishing_and_playing_again() {
        let mut session = ready_session();
        session.start_game().unwrap();
        session.replace_questions(batch());
        for _ in 0..12 {
            session.record_answer(true);
            session.advance();
        }
        assert_eq!(session.current_question, 10);
        assert_eq!(session.phase(), Phase::Finished);
        assert_eq!(session.current(), None);

        let request = session.play_again().unwrap();
        assert_eq!(request.category, Category::Food);
        assert_eq!(session.phase(), Phase::Loading);
        assert_eq!(session.score, 0);
        assert_eq!(session.current_question, 0);
        assert_eq!(session.pending_fetch(), Some(request));
    }

    #[test]
    fn new_category_keeps_language_and_audience() {
        let mut session = ready_session();
        session.start_game().unwrap();
        session.replace_questions(batch());
        session.record_answer(true);
        session.advance();

        session.reset_category();
        assert_eq!(session.phase(), Phase::NeedCategory);
        assert_eq!(session.language, Some(Language::Ar));
        assert_eq!(session.audience, Some(Audience::Kids));
        assert_eq!(session.category, None);
        assert!(session.questions.is_empty());
        assert_eq!(session.score, 0);
        assert_eq!(session.total_answered, 0);
        assert_eq!(session.current_question, 0);
    }

    #[test]
    fn full_reset_restores_initial_state() {
        let mut session = ready_session();
        session.start_game().unwrap();
        session.replace_questions(batch());
        session.record_answer(true);
        session.advance();

        session.reset();
        assert_eq!(session, GameSession::new());
        assert_eq!(session.phase(), Phase::NeedLanguage);
    }

    #[test]
    fn reset_while_loading_matches_fresh_session_and_drops_fetch() {
        let mut session = ready_session();
        let request = session.start_game().unwrap();

        session.reset();
        assert_eq!(session, GameSession::new());
        assert!(!session.complete_fetch(request.ticket, batch()));
    }

    #[test]
    fn changing_selections_while_loading_discards_old_batch() {
        let mut session = ready_session();
        let food = session.start_game().unwrap();

        session.select_category(Some(Category::Sweets));
        assert!(!session.complete_fetch(food.ticket, batch()));
        assert!(session.questions.is_empty());
        assert_eq!(session.phase(), Phase::Loading);

        let sweets = session.pending_fetch().unwrap();
        assert_eq!(sweets.category, Category::Sweets);
        assert_ne!(sweets.ticket, food.ticket);

        session.select_language(Language::En);
        assert!(!session.complete_fetch(sweets.ticket, batch()));
        let english = session.pending_fetch().unwrap();
        assert_eq!(english.language, Language::En);
        assert!(session.complete_fetch(english.ticket, batch()));
        assert_eq!(session.phase(), Phase::Playing);
    }

    #[test]
    fn reselecting_the_same_value_keeps_the_fetch() {
        let mut session = ready_session();
        let request = session.start_game().unwrap();
        session.select_category(Some(Category::Food));
        session.select_audience(Audience::Kids);
        assert!(session.complete_fetch(request.ticket, batch()));
    }

    #[test]
    fn empty_batch_keeps_waiting_for_a_fetch() {
        let mut session = ready_session();
        let request = session.start_game().unwrap();

        session.replace_questions(Vec::new());
        assert!(session.is_loading);
        assert_eq!(session.phase(), Phase::Loading);
        assert_eq!(session.pending_fetch(), Some(request.clone()));

        assert!(session.complete_fetch(request.ticket, batch()));
        assert!(!session.is_loading);
    }

    #[test]
    fn summary_tiers() {
        let mut session = ready_session();
        session.start_game().unwrap();
        session.replace_questions(batch());

        let cases = [
            (10, 100, Verdict::Perfect, true),
            (8, 80, Verdict::Amazing, true),
            (7, 70, Verdict::AlmostThere, true),
            (6, 60, Verdict::AlmostThere, false),
            (3, 30, Verdict::GoodTry, false),
        ];
        for (score, percentage, verdict, celebrate) in cases {
            session.score = score;
            let summary = session.summary();
            assert_eq!(summary.total, 10);
            assert_eq!(summary.percentage, percentage);
            assert_eq!(summary.verdict, verdict);
            assert_eq!(summary.celebrate, celebrate);
        }
    }

    #[test]
    fn summary_of_empty_batch_is_zero() {
        let summary = GameSession::new().summary();
        assert_eq!(summary.percentage, 0);
        assert_eq!(summary.verdict, Verdict::GoodTry);
    }

    #[test]
    fn progress_is_one_based() {
        let mut session = ready_session();
        assert_eq!(session.progress(), (0, 0));
        session.start_game().unwrap();
        session.replace_questions(batch());
        assert_eq!(session.progress(), (1, 10));
        session.advance();
        assert_eq!(session.progress(), (2, 10));
    }
}
