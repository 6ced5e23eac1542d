//! Turns "What is X?" + answer into a statement that is true by construction.
//! Best effort only: anything outside the table gets the "answer - question." form.

type Rewrite = fn(rest: &str, answer: &str) -> String;

const PATTERNS: [(&str, Rewrite); 6] = [
    ("what is ", what_is),
    ("what are ", what_are),
    ("which ", answer_first),
    ("who ", answer_first),
    ("where ", located_in),
    ("how many ", there_are),
];

fn what_is(rest: &str, answer: &str) -> String {
    format!("{} is {}.", rest, answer)
}

fn what_are(rest: &str, answer: &str) -> String {
    format!("{} are {}.", rest, answer)
}

fn answer_first(rest: &str, answer: &str) -> String {
    format!("{} {}.", answer, lowercase_first(rest))
}

fn located_in(rest: &str, answer: &str) -> String {
    format!("{} is in {}.", rest, answer)
}

fn there_are(rest: &str, answer: &str) -> String {
    format!("There are {} {}.", answer, rest)
}

pub fn to_statement(question: &str, correct_answer: &str) -> String {
    let text = question
        .trim()
        .trim_end_matches(|c: char| c == '?' || c == '؟')
        .trim_end();

    for (prefix, rewrite) in PATTERNS.iter() {
        if let Some(rest) = strip_prefix_ignore_case(text, prefix) {
            return rewrite(rest, correct_answer);
        }
    }

    format!("{} - {}.", correct_answer, text)
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    // `get` refuses to split a multi-byte char, so Arabic text never matches
    let head = text.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&text[prefix.len()..])
    } else {
        None
    }
}

fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
