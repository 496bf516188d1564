use super::*;

#[test]
fn client_trims_trailing_slashes_from_the_base_url() {
    let client = AuthClient::new("https://auth.example.com//", "anon");
    assert_eq!(client.base_url(), "https://auth.example.com");

    let client = AuthClient::new("https://auth.example.com", "anon");
    assert_eq!(client.base_url(), "https://auth.example.com");
}

#[test]
fn context_starts_with_no_observers() {
    let auth = AuthContext::new(AuthClient::new("http://localhost:54321", "anon"));
    assert_eq!(auth.changes().listener_count(), 0);
}

#[test]
fn on_session_change_registers_until_the_handle_drops() {
    let auth = AuthContext::new(AuthClient::new("http://localhost:54321", "anon"));
    let subscription = auth.on_session_change(|_| {});
    assert_eq!(auth.changes().listener_count(), 1);
    subscription.unsubscribe();
    assert_eq!(auth.changes().listener_count(), 0);
}
