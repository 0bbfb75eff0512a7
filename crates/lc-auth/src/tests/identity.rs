use crate::{ExternalIdentity, IdentityProvider, JwtIdentityProvider, JwtValidator, SessionClaims};

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

fn identity(first: Option<&str>, last: Option<&str>) -> ExternalIdentity {
    ExternalIdentity {
        external_id: "idp_user_123".to_string(),
        emails: vec![
            "primary@example.com".to_string(),
            "secondary@example.com".to_string(),
        ],
        first_name: first.map(str::to_string),
        last_name: last.map(str::to_string),
        image_url: None,
    }
}

#[test]
fn primary_email_is_the_first_entry() {
    assert_eq!(
        identity(None, None).primary_email(),
        Some("primary@example.com")
    );
}

#[test]
fn given_no_emails_then_primary_email_is_none() {
    let mut id = identity(None, None);
    id.emails.clear();

    assert_eq!(id.primary_email(), None);
}

#[test]
fn display_name_joins_present_parts_and_trims_missing_ones() {
    assert_eq!(identity(Some("Ada"), Some("Lovelace")).display_name(), "Ada Lovelace");
    assert_eq!(identity(Some("Ada"), None).display_name(), "Ada");
    assert_eq!(identity(None, Some("Lovelace")).display_name(), "Lovelace");
    assert_eq!(identity(None, None).display_name(), "");
}

#[test]
fn profile_image_defaults_to_empty_string() {
    let mut id = identity(None, None);
    assert_eq!(id.profile_image(), "");

    id.image_url = Some("https://img.example.com/a.png".to_string());
    assert_eq!(id.profile_image(), "https://img.example.com/a.png");
}

#[tokio::test]
async fn given_missing_token_then_provider_resolves_no_identity() {
    let provider = JwtIdentityProvider::new(JwtValidator::with_hs256(b"secret-0123456789abcdef"));

    let resolved = provider.current_identity(None).await.unwrap();

    assert!(resolved.is_none());
}

#[tokio::test]
async fn given_garbage_token_then_provider_resolves_no_identity() {
    let provider = JwtIdentityProvider::new(JwtValidator::with_hs256(b"secret-0123456789abcdef"));

    let resolved = provider.current_identity(Some("garbage")).await.unwrap();

    assert!(resolved.is_none());
}

#[tokio::test]
async fn given_valid_token_then_provider_resolves_the_claimed_identity() {
    let secret = b"secret-0123456789abcdef";
    let provider = JwtIdentityProvider::new(JwtValidator::with_hs256(secret));

    let claims = SessionClaims {
        sub: "idp_user_123".to_string(),
        exp: chrono::Utc::now().timestamp() + 3600,
        iat: chrono::Utc::now().timestamp(),
        emails: vec!["host@example.com".to_string()],
        first_name: Some("Ada".to_string()),
        last_name: None,
        image_url: Some("https://img.example.com/ada.png".to_string()),
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .unwrap();

    let resolved = provider
        .current_identity(Some(&token))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(resolved.external_id, "idp_user_123");
    assert_eq!(resolved.primary_email(), Some("host@example.com"));
    assert_eq!(resolved.display_name(), "Ada");
    assert_eq!(
        resolved.profile_image(),
        "https://img.example.com/ada.png"
    );
}
