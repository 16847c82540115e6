//! Preview token generation.

use uuid::Uuid;

/// Generate an unguessable public preview token: 64 lowercase hex
/// characters (256 bits of randomness).
pub fn generate_preview_token() -> String {
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tokens_have_the_expected_length_and_alphabet() {
        let token = generate_preview_token();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn tokens_are_unique() {
        let tokens: HashSet<String> = (0..1000).map(|_| generate_preview_token()).collect();
        assert_eq!(tokens.len(), 1000);
    }
}
