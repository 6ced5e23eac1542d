use anyhow::{anyhow, Context, Result};
use dotenv::dotenv;
use log::info;

use aleppo_trivia::quiz::ai_helper::chat_gpt_backend;
use aleppo_trivia::{load_round, Audience, Category, GameSession, Language, QuizHelper, TriviaConfig};

// Generates one round and prints it as JSON:
//   aleppo-trivia [en|ar] [kids|adults] [food|sweets|culture|history|spices|religion|mixed]
#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    pretty_env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let language_code = args.get(1).map(String::as_str).unwrap_or("en");
    let audience_code = args.get(2).map(String::as_str).unwrap_or("adults");
    let category_code = args.get(3).map(String::as_str).unwrap_or("mixed");

    let language = Language::from_code(language_code)
        .ok_or_else(|| anyhow!("Unknown language {:?}, expected en or ar", language_code))?;
    let audience = Audience::from_code(audience_code)
        .ok_or_else(|| anyhow!("Unknown audience {:?}, expected kids or adults", audience_code))?;
    let category = Category::from_code(category_code)
        .ok_or_else(|| anyhow!("Unknown category {:?}", category_code))?;

    let config = TriviaConfig::from_env().context("failed to load configuration")?;
    let helper = QuizHelper::new(chat_gpt_backend(&config).context("failed to create ChatGPT client")?);

    let mut session = GameSession::with_question_count(config.question_count);
    session.select_language(language);
    session.select_audience(audience);
    session.select_category(Some(category));
    session.start_game()?;

    info!("Requesting questions...");
    load_round(&mut session, &helper).await;

    println!(
        "{}",
        serde_json::to_string_pretty(&session.questions).context("failed to encode questions")?
    );

    Ok(())
}
