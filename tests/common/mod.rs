//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use campus_chat::{
    AuthClient, ChatClient, MemoryStore, RecordingNavigator, ReqwestBackend, Session,
    TokenStore, User,
};
use serde_json::{json, Value};

pub type TestAuth = AuthClient<ReqwestBackend, MemoryStore, RecordingNavigator>;
pub type TestChat = ChatClient<ReqwestBackend, MemoryStore, RecordingNavigator>;

pub fn admin_user() -> User {
    User {
        username: "admin".to_string(),
        name: Some("Admin".to_string()),
        email: Some("a@x.com".to_string()),
        role: "staff".to_string(),
    }
}

/// Body of a successful `/auth/login` response.
pub fn login_body(token: &str) -> Value {
    json!({
        "access_token": token,
        "token_type": "bearer",
        "user": {
            "username": "admin",
            "name": "Admin",
            "email": "a@x.com",
            "role": "staff"
        }
    })
}

/// Auth client against `api_url` with an empty in-memory store.
pub fn auth_client(api_url: &str) -> TestAuth {
    AuthClient::new(
        api_url,
        ReqwestBackend::new(),
        TokenStore::new(MemoryStore::new()),
        RecordingNavigator::new(),
    )
}

/// Auth client that already holds a session for `admin` with `token`.
pub fn signed_in(api_url: &str, token: &str) -> TestAuth {
    let auth = auth_client(api_url);
    auth.store()
        .save(&Session {
            token: token.to_string(),
            user: admin_user(),
        })
        .expect("memory store never fails");
    auth
}

/// Unsigned JWT whose payload is `claims`.
pub fn jwt(claims: Value) -> String {
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;

    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{}.{}.sig", header, payload)
}

/// A local URL nothing is listening on.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
