use advisor_auth::{Role, VerificationError, create_access_token, verify_token};
use advisor_config::JwtConfig;
use uuid::Uuid;

fn get_test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 3600,
        leeway_seconds: 60,
    }
}

#[test]
fn test_create_access_token_all_roles() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4().to_string();

    for role in Role::ALL {
        let token =
            create_access_token(&user_id, "test@example.com", role, "session-1", &jwt_config)
                .unwrap();
        let principal = verify_token(&token, &jwt_config).unwrap();

        assert_eq!(principal.role, role);
        assert_eq!(principal.sub, user_id);
        assert_eq!(principal.session_id, "session-1");
    }
}

#[test]
fn test_token_expiry_matches_config() {
    let jwt_config = get_test_jwt_config();

    let token =
        create_access_token("user-1", "test@example.com", Role::Faculty, "s", &jwt_config)
            .unwrap();
    let principal = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(principal.exp - principal.iat, jwt_config.access_token_expiry);
}

#[test]
fn test_expired_within_leeway_is_accepted() {
    let mut jwt_config = get_test_jwt_config();
    jwt_config.access_token_expiry = -30;

    let token =
        create_access_token("user-1", "test@example.com", Role::Student, "s", &jwt_config)
            .unwrap();

    assert!(verify_token(&token, &jwt_config).is_ok());
}

#[test]
fn test_expired_beyond_leeway_is_rejected() {
    let mut jwt_config = get_test_jwt_config();
    jwt_config.access_token_expiry = -3600;

    let token =
        create_access_token("user-1", "test@example.com", Role::Student, "s", &jwt_config)
            .unwrap();

    assert!(matches!(
        verify_token(&token, &jwt_config),
        Err(VerificationError::Invalid(_))
    ));
}

#[test]
fn test_tampered_token_is_rejected() {
    let jwt_config = get_test_jwt_config();
    let token =
        create_access_token("user-1", "test@example.com", Role::Student, "s", &jwt_config)
            .unwrap();

    let mut parts: Vec<&str> = token.split('.').collect();
    let forged_payload = "eyJzdWIiOiJ1c2VyLTEiLCJyb2xlIjoiYWRtaW4ifQ";
    parts[1] = forged_payload;
    let tampered = parts.join(".");

    assert!(verify_token(&tampered, &jwt_config).is_err());
}
