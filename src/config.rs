use crate::Error;

/// The environment variable holding the Starling personal access token
pub static TOKEN_VAR: &str = "STARLING_ACCESS_TOKEN";

pub static BIN_NAME: &str = std::env!("CARGO_PKG_NAME");

/// Read the API credential from the environment.
///
/// Checked before any network call is made; an unset or blank variable is a
/// fatal startup error.
pub fn access_token() -> Result<String, Error> {
    non_blank(std::env::var(TOKEN_VAR).ok())
}

fn non_blank(token: Option<String>) -> Result<String, Error> {
    match token {
        Some(token) if !token.trim().is_empty() => Ok(token),
        _ => Err(Error::MissingCredential),
    }
}

#[cfg(test)]
mod tests {
    use super::non_blank;
    use crate::Error;

    #[test]
    fn a_token_is_passed_through() {
        assert_eq!(non_blank(Some("token".to_string())).unwrap(), "token");
    }

    #[test]
    fn unset_is_a_missing_credential() {
        assert!(matches!(non_blank(None), Err(Error::MissingCredential)));
    }

    #[test]
    fn blank_is_a_missing_credential() {
        assert!(matches!(
            non_blank(Some("  ".to_string())),
            Err(Error::MissingCredential)
        ));
    }
}
