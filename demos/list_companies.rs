//! Lists companies against a local mock of the partner API using the default reqwest transport.
//!
//! The first listing issues a token; the second reuses it from memory.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use pax8_client::{
	client::Pax8Client,
	config::ClientConfig,
	filter::CompanyFilter,
	model::{CompanySortBy, SortDirection},
};

fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start();
	let token_mock = server.mock(|when, then| {
		when.method(POST).path("/oauth/token");
		then.status(200).header("content-type", "application/json").body(
			"{\"access_token\":\"demo-access\",\"token_type\":\"Bearer\",\"expires_in\":900}",
		);
	});
	let companies_mock = server.mock(|when, then| {
		when.method(GET).path("/v1/companies").query_param("sort", "name");
		then.status(200).header("content-type", "application/json").body(
			"{\"content\":[{\"id\":\"c-1\",\"name\":\"Acme\",\"website\":\"acme.example\",\
			\"billOnBehalfOfEnabled\":false,\"orderApprovalRequired\":true,\
			\"address\":{\"street\":\"1 Main St\",\"city\":\"Denver\",\"postalCode\":\"80202\",\
			\"country\":\"US\"}}],\"size\":10,\"totalElements\":1,\"totalPages\":1,\"number\":0}",
		);
	});
	let config = ClientConfig::builder("demo-client", "super-secret")
		.token_endpoint(server.url("/oauth/token"))
		.api_base(server.url("/v1/"))
		.tenant_base(server.url("/p8p/api/v3/"))
		.cache_token(false)
		.build()?;
	let client = Pax8Client::new(config)?;
	let filter = CompanyFilter::new().sort(CompanySortBy::Name).sort_direction(SortDirection::Ascending);

	for company in client.companies().list(&filter)? {
		println!("{} ({}).", company.name, company.address.city);
	}

	let page = client.companies().list_page(&filter)?;

	println!("{client}: {} of {} companies.", page.content.len(), page.info.total_elements);

	token_mock.assert_calls(1);
	companies_mock.assert_calls(2);

	Ok(())
}
