// std
use std::fs;
// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use pax8_client::{
	_preludet::*,
	auth::CachedBundle,
	client::Pax8Client,
	error::AuthError,
	filter::InvoiceItemFilter,
};

const COMPANY_PAGE: &str = r#"{"content":[],"size":10,"totalElements":0,"totalPages":0,"number":0}"#;

fn write_cache(path: &Path, token: &str, expiry: f64) {
	let cached = json!({
		"token": token,
		"expiry": expiry,
		"default_headers": {"Authorization": token},
	});

	fs::create_dir_all(path.parent().expect("Cache path should have a parent."))
		.expect("Failed to create cache directory.");
	fs::write(path, cached.to_string()).expect("Failed to seed token cache.");
}

fn read_cache(path: &Path) -> CachedBundle {
	serde_json::from_slice(&fs::read(path).expect("Cache file should exist."))
		.expect("Cache file should hold a cached bundle.")
}

fn cleanup(path: &Path) {
	if let Some(dir) = path.parent() {
		let _ = fs::remove_dir_all(dir);
	}
}

#[test]
fn valid_cache_avoids_issuance() {
	let server = MockServer::start();
	let path = temp_cache_path("valid");
	let future = (OffsetDateTime::now_utc() + Duration::hours(1)).unix_timestamp() as f64;

	write_cache(&path, "Bearer cached", future);

	let token = server.mock(|when, then| {
		when.method(POST).path("/oauth/token");
		then.status(200).body(token_response("fresh", 3600));
	});
	let companies = server.mock(|when, then| {
		when.method(GET).path("/v1/companies").header("Authorization", "Bearer cached");
		then.status(200).header("content-type", "application/json").body(COMPANY_PAGE);
	});
	let config = mock_config(&server.base_url())
		.cache_path(&path)
		.build()
		.expect("Cached mock config should be valid.");
	let client = Pax8Client::new(config).expect("Client should build.");

	assert_eq!(client.to_string(), "Pax8Client (Inactive)");

	let listed = client
		.companies()
		.list(&Default::default())
		.expect("Listing with a cached token should succeed.");

	assert!(listed.is_empty());
	assert_eq!(client.to_string(), "Pax8Client (Active)");
	assert_eq!(client.issuance_metrics().cache_hits(), 1);

	token.assert_calls(0);
	companies.assert_calls(1);

	cleanup(&path);
}

#[test]
fn expired_cache_triggers_one_issuance_and_is_overwritten() {
	let server = MockServer::start();
	let path = temp_cache_path("expired");
	let past = (OffsetDateTime::now_utc() - Duration::hours(1)).unix_timestamp() as f64;

	write_cache(&path, "Bearer stale", past);

	let token = server.mock(|when, then| {
		when.method(POST)
			.path("/oauth/token")
			.header("content-type", "application/json")
			.json_body(json!({
				"client_id": TEST_CLIENT_ID,
				"client_secret": TEST_CLIENT_SECRET,
				"audience": "api://p8p.client",
				"grant_type": "client_credentials",
			}));
		then.status(200).body(token_response("fresh", 3600));
	});
	let companies = server.mock(|when, then| {
		when.method(GET).path("/v1/companies").header("Authorization", "Bearer fresh");
		then.status(200).body(COMPANY_PAGE);
	});
	let config = mock_config(&server.base_url())
		.cache_path(&path)
		.build()
		.expect("Cached mock config should be valid.");
	let client = Pax8Client::new(config).expect("Client should build.");

	client.companies().list(&Default::default()).expect("First listing should succeed.");
	client.companies().list(&Default::default()).expect("Second listing should succeed.");

	token.assert_calls(1);
	companies.assert_calls(2);

	let cached = read_cache(&path);
	let now = OffsetDateTime::now_utc().unix_timestamp() as f64;

	assert_eq!(cached.token.as_ref().map(|token| token.expose()), Some("Bearer fresh"));
	assert!(cached.expiry.is_some_and(|expiry| expiry > now));

	cleanup(&path);
}

#[test]
fn malformed_cache_is_ignored() {
	let server = MockServer::start();
	let path = temp_cache_path("malformed");

	fs::create_dir_all(path.parent().expect("Cache path should have a parent."))
		.expect("Failed to create cache directory.");
	fs::write(&path, "{\"token\": ").expect("Failed to seed malformed cache.");

	let token = server.mock(|when, then| {
		when.method(POST).path("/oauth/token");
		then.status(200).body(token_response("fresh", 3600));
	});
	let config = mock_config(&server.base_url())
		.cache_path(&path)
		.build()
		.expect("Cached mock config should be valid.");
	let client =
		Pax8Client::connect(config).expect("Connecting past a malformed cache should succeed.");

	assert!(client.is_connected());

	token.assert_calls(1);

	cleanup(&path);
}

#[test]
fn rejected_issuance_is_fatal_and_not_retried() {
	let server = MockServer::start();
	let token = server.mock(|when, then| {
		when.method(POST).path("/oauth/token");
		then.status(401).body(r#"{"error":"access_denied"}"#);
	});
	let products = server.mock(|when, then| {
		when.method(GET).path("/v1/products");
		then.status(200).body(COMPANY_PAGE);
	});
	let client = build_test_client(&server.base_url());
	let err = client
		.products()
		.list(&Default::default())
		.expect_err("A rejected issuance should fail the call.");

	match err {
		Error::Authentication(AuthError::Rejected { status, reason, body }) => {
			assert_eq!(status, 401);
			assert_eq!(reason, "Unauthorized");
			assert!(body.contains("access_denied"));
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}

	assert!(!client.is_connected());

	token.assert_calls(1);
	products.assert_calls(0);
}

#[test]
fn forced_renewal_reissues_without_cache() {
	let server = MockServer::start();
	let token = server.mock(|when, then| {
		when.method(POST).path("/oauth/token");
		then.status(200).body(token_response("fresh", 3600));
	});
	let client = build_test_client(&server.base_url());

	client.renew_token(false).expect("Initial renewal should succeed.");
	client.renew_token(false).expect("Valid token should be reused.");
	client.renew_token(true).expect("Forced renewal should succeed.");

	token.assert_calls(2);

	assert_eq!(client.issuance_metrics().successes(), 2);
}

#[test]
fn unwritable_cache_still_serves_requests() {
	let server = MockServer::start();
	let blocker = temp_cache_path("blocked");

	fs::create_dir_all(blocker.parent().expect("Cache path should have a parent."))
		.expect("Failed to create cache directory.");
	// A regular file standing where the cache directory should be.
	fs::write(&blocker, b"").expect("Failed to create blocking file.");

	let token = server.mock(|when, then| {
		when.method(POST).path("/oauth/token");
		then.status(200).body(token_response("fresh", 3600));
	});
	let items = server.mock(|when, then| {
		when.method(GET).path("/v1/invoices/inv-1/items").query_param("page", "0");
		then.status(200).body(COMPANY_PAGE);
	});
	let config = mock_config(&server.base_url())
		.cache_path(blocker.join("token.json"))
		.build()
		.expect("Cached mock config should be valid.");
	let client = Pax8Client::new(config).expect("Client should build.");

	assert!(matches!(client.renew_token(false), Err(Error::CacheWrite(_))));
	assert!(client.is_connected());

	let listed = client
		.invoices()
		.list_items("inv-1", &InvoiceItemFilter::new().page(0))
		.expect("Requests should proceed with the in-memory token.");

	assert!(listed.is_empty());

	token.assert_calls(1);
	items.assert_calls(1);

	cleanup(&blocker);
}
