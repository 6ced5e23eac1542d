use super::{Audience, Category, Language};

pub const SYSTEM_PROMPT: &str = "You are a friendly trivia game host who creates fun, educational questions about Aleppo, Syria - its amazing food, rich culture, ancient history, and traditions. You always generate valid JSON responses. You NEVER mention politics, war, government, or anything controversial. You never mention pork, alcohol, or anything haram. All content is positive, fun, and educational about this beautiful ancient city.";

pub fn category_context(category: Option<Category>) -> &'static str {
    match category.unwrap_or(Category::Mixed) {
        Category::Food => "traditional Aleppo cuisine, famous dishes like kibbeh Halabiya, kebab Halabi, muhammara, shanklish, fattoush, hummus, falafel, shawarma, and Aleppo's unique cooking techniques",
        Category::Sweets => "Aleppo's famous sweets and desserts like mamouniyeh, sbiseh, halawet el jibn, baklava, kunafa, maamoul, and traditional Aleppian pastries",
        Category::Culture => "Aleppo's rich culture, traditions, customs, hospitality, traditional crafts like soap-making and textile weaving, music, and daily life in this ancient city",
        Category::History => "Aleppo's ancient history as one of the oldest continuously inhabited cities, the Citadel of Aleppo, the Great Mosque, ancient souks, the Silk Road, and its role as a trading hub",
        Category::Spices => "Aleppo's famous spices especially Aleppo pepper (biber), za'atar, cumin, sumac, seven spice blend, and the city's historic spice markets",
        Category::Religion => "Islamic traditions in Aleppo, beautiful mosques, Ramadan and Eid celebrations, interfaith harmony, and the spiritual heritage of this ancient city",
        Category::Mixed => "a mix of Aleppo's food, sweets, culture, history, spices, and traditions - celebrating this beautiful ancient city",
    }
}

fn audience_register(audience: Audience) -> &'static str {
    match audience {
        Audience::Kids => "children aged 6-12, using simple words and fun facts",
        Audience::Adults => "adults, with more detailed and interesting information",
    }
}

fn language_instruction(language: Language) -> &'static str {
    match language {
        Language::Ar => "Write everything in Arabic (العربية). All questions, options, and fun facts must be in Arabic.",
        Language::En => "Write everything in English.",
    }
}

/// Builds the user message asking the model for `count` questions.
pub fn build_prompt(
    category: Option<Category>,
    audience: Audience,
    language: Language,
    count: usize,
) -> String {
    format!(
        r#"Generate {count} fun trivia questions about {context} for {register}.

{language}

Each question should:
- Be educational and fun
- Have 4 multiple choice options
- Include a brief fun fact related to the answer
- Focus on Aleppo's beautiful heritage, food, culture, and history
- STRICTLY NO politics, war, government, or anything controversial - only positive, fun, educational content
- IMPORTANT: Never mention pork, alcohol, or anything forbidden (haram) in Islam. Only halal food and drinks.

Return as JSON array with this exact structure:
[
  {{
    "question": "The question text",
    "options": ["Option A", "Option B", "Option C", "Option D"],
    "correctIndex": 0,
    "funFact": "An interesting fact about the correct answer"
  }}
]

Only return the JSON array, no other text."#,
        count = count,
        context = category_context(category),
        register = audience_register(audience),
        language = language_instruction(language),
    )
}
