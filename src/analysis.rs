// Prompt building for the profile analysis
use crate::models::User;
use crate::utils::errors::AppResult;

const INSTRUCTIONS: &str = "You are an analyst for the Lolzteam Market, a marketplace for digital goods and accounts. \
Below is the JSON profile of a market user. Write a short, friendly analysis of this profile: \
summarise the account's standing, comment on its balance and funds on hold, its selling activity \
(active listings, items sold, restores), how long it has been registered and how recently it was active. \
Point out anything notable or risky. Timestamps are UNIX seconds. \
Answer in plain text with a few short paragraphs and no markdown tables.";

/// Embed the pretty-printed profile in the fixed instructional prompt
pub fn build_prompt(user: &User) -> AppResult<String> {
    let profile = serde_json::to_string_pretty(user)?;
    Ok(format!("{}\n\nUser profile:\n```json\n{}\n```", INSTRUCTIONS, profile))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        serde_json::from_str(
            r#"{"user_id":5,"username":"seller","balance":"99.90","hold":"5","currency":"rub","sold_items_count":12}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_prompt_contains_instructions_and_profile() {
        let prompt = build_prompt(&user()).unwrap();
        assert!(prompt.starts_with(INSTRUCTIONS));
        assert!(prompt.contains("\"username\": \"seller\""));
        assert!(prompt.contains("\"sold_items_count\": 12"));
    }

    #[test]
    fn test_prompt_embeds_valid_json() {
        let prompt = build_prompt(&user()).unwrap();
        let start = prompt.find("```json\n").unwrap() + "```json\n".len();
        let end = prompt.rfind("\n```").unwrap();
        let parsed: User = serde_json::from_str(&prompt[start..end]).unwrap();
        assert_eq!(parsed, user());
    }
}
