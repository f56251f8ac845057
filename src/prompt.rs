/// Prompt used when the user listed ingredients.
///
/// Contains `{{INGREDIENTS}}` and `{{MESSAGE}}` placeholders filled in by
/// [`build_prompt`].
pub const INGREDIENTS_PROMPT: &str = include_str!("prompts/with_ingredients.txt");

/// Prompt used for plain chat messages. Contains a `{{MESSAGE}}` placeholder.
pub const CHAT_PROMPT: &str = include_str!("prompts/chat.txt");

/// Build the generation prompt for a user message.
///
/// Ingredients are trimmed and joined with `", "`; a list with no non-blank
/// entries is treated like no list at all.
pub fn build_prompt<S: AsRef<str>>(message: &str, ingredients: Option<&[S]>) -> String {
    let ingredients: Vec<&str> = ingredients
        .unwrap_or_default()
        .iter()
        .map(|i| i.as_ref().trim())
        .filter(|i| !i.is_empty())
        .collect();

    if ingredients.is_empty() {
        CHAT_PROMPT.replace("{{MESSAGE}}", message)
    } else {
        INGREDIENTS_PROMPT
            .replace("{{INGREDIENTS}}", &ingredients.join(", "))
            .replace("{{MESSAGE}}", message)
    }
}
