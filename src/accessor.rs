//! Per-family resource facades composing the gateway and the codec.
//!
//! [`Accessor`] is generic over the resource it serves. The `list`, `get`, `list_nested`, and
//! `get_nested` operations work for every family; the inherent impls at the bottom add the
//! family-specific calls (contacts, tenant lookup, dependencies, history, usage lines). Nothing is
//! cached: every call fetches again.

// self
use crate::{
	_prelude::*,
	codec::{Resource, SchemaError},
	filter::{
		CompanyFilter, ContactFilter, InvoiceFilter, InvoiceItemFilter, ListFilter, OrderFilter,
		ProductFilter, QueryFilter, SubscriptionFilter, UsageLineFilter, UsageSummaryFilter,
	},
	gateway::{Api, CONTENT_KEY, Gateway},
	http::HttpTransport,
	model::{
		Company, CompanyMsTenantId, Contact, Dependencies, Invoice, InvoiceItem, Order, PageInfo,
		Product, ProductPricing, ProvisioningDetail, Subscription, UsageLine, UsageSummary,
	},
};

/// Resources addressable under the resource API.
pub trait Endpoint
where
	Self: Resource,
{
	/// Path segment naming the resource collection.
	const PATH: &'static str;
}

/// Resources with a top-level list endpoint.
pub trait Listable
where
	Self: Endpoint,
{
	/// Filter accepted by the list endpoint.
	type Filter: QueryFilter;
}

macro_rules! def_endpoints {
	($($resource:ty => $path:literal $(, $filter:ty)?;)+) => {
		$(
			impl Endpoint for $resource {
				const PATH: &'static str = $path;
			}
			$(
				impl Listable for $resource {
					type Filter = $filter;
				}
			)?
		)+
	};
}

def_endpoints! {
	Company => "companies", CompanyFilter;
	Contact => "contacts";
	Product => "products", ProductFilter;
	ProvisioningDetail => "provisioning-details";
	Dependencies => "dependencies";
	ProductPricing => "pricing";
	Order => "orders", OrderFilter;
	Subscription => "subscriptions", SubscriptionFilter;
	Invoice => "invoices", InvoiceFilter;
	InvoiceItem => "items";
	UsageSummary => "usage-summaries";
	UsageLine => "usage-lines";
}

/// One page of a list response together with its position.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<R> {
	/// Items of this page.
	pub content: Vec<R>,
	/// Page size, totals, and index.
	pub info: PageInfo,
}

/// Typed operations for the resource family `R`.
pub struct Accessor<'a, R, T>
where
	T: ?Sized + HttpTransport,
{
	gateway: &'a Gateway<T>,
	_resource: PhantomData<fn() -> R>,
}
impl<'a, R, T> Accessor<'a, R, T>
where
	R: Endpoint,
	T: ?Sized + HttpTransport,
{
	pub(crate) fn new(gateway: &'a Gateway<T>) -> Self {
		Self { gateway, _resource: PhantomData }
	}

	/// Fetches one resource by id.
	pub fn get(&self, id: &str) -> Result<R> {
		let url = self.gateway.url(Api::Resource, &[R::PATH, id])?;

		Ok(R::materialize(self.gateway.get(url, &[])?)?)
	}

	/// Lists the child resources `C` beneath resource `id`.
	pub fn list_nested<C>(&self, id: &str, filter: &impl QueryFilter) -> Result<Vec<C>>
	where
		C: Endpoint,
	{
		let url = self.gateway.url(Api::Resource, &[R::PATH, id, C::PATH])?;

		materialize_all(self.gateway.list(url, &filter.query(), true)?)
	}

	/// Fetches child resource `child_id` of type `C` beneath resource `id`.
	pub fn get_nested<C>(&self, id: &str, child_id: &str) -> Result<C>
	where
		C: Endpoint,
	{
		let url = self.gateway.url(Api::Resource, &[R::PATH, id, C::PATH, child_id])?;

		Ok(C::materialize(self.gateway.get(url, &[])?)?)
	}
}
impl<R, T> Accessor<'_, R, T>
where
	R: Listable,
	T: ?Sized + HttpTransport,
{
	/// Lists resources matching `filter`.
	pub fn list(&self, filter: &R::Filter) -> Result<Vec<R>> {
		let url = self.gateway.url(Api::Resource, &[R::PATH])?;

		materialize_all(self.gateway.list(url, &filter.query(), true)?)
	}

	/// Lists one page of resources matching `filter`, keeping the page metadata.
	pub fn list_page(&self, filter: &R::Filter) -> Result<Page<R>> {
		let url = self.gateway.url(Api::Resource, &[R::PATH])?;

		materialize_page(self.gateway.list(url, &filter.query(), false)?)
	}
}
impl<R, T> Debug for Accessor<'_, R, T>
where
	R: Endpoint,
	T: ?Sized + HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Accessor").field("resource", &R::SCHEMA.name).finish()
	}
}

/// Company operations.
pub type Companies<'a, T> = Accessor<'a, Company, T>;
/// Product operations.
pub type Products<'a, T> = Accessor<'a, Product, T>;
/// Order operations.
pub type Orders<'a, T> = Accessor<'a, Order, T>;
/// Subscription operations.
pub type Subscriptions<'a, T> = Accessor<'a, Subscription, T>;
/// Invoice operations.
pub type Invoices<'a, T> = Accessor<'a, Invoice, T>;
/// Usage-summary operations.
pub type UsageSummaries<'a, T> = Accessor<'a, UsageSummary, T>;

impl<T> Accessor<'_, Company, T>
where
	T: ?Sized + HttpTransport,
{
	/// Looks up the Microsoft tenant of company `id` through the tenant API.
	///
	/// The result always carries `clientId`; a `clientId` returned by the API takes precedence.
	pub fn get_ms_tenant_id(&self, id: &str) -> Result<CompanyMsTenantId> {
		let url = self.gateway.url(Api::Tenant, &[Company::PATH, id, "msTenantId"])?;
		let mut document = self.gateway.get(url, &[])?;

		if let Value::Object(fields) = &mut document {
			fields.entry("clientId").or_insert_with(|| Value::from(id));
		}

		Ok(CompanyMsTenantId::materialize(document)?)
	}

	/// Lists the contacts of company `id`.
	pub fn list_contacts(&self, id: &str, filter: &ContactFilter) -> Result<Vec<Contact>> {
		self.list_nested(id, filter)
	}

	/// Fetches contact `contact_id` of company `id`.
	pub fn get_contact(&self, id: &str, contact_id: &str) -> Result<Contact> {
		self.get_nested(id, contact_id)
	}
}

impl<T> Accessor<'_, Product, T>
where
	T: ?Sized + HttpTransport,
{
	/// Lists the provisioning details required to order product `id`.
	pub fn list_provisioning_details(&self, id: &str) -> Result<Vec<ProvisioningDetail>> {
		self.list_nested(id, &ListFilter::default())
	}

	/// Fetches the dependency envelope of product `id`.
	pub fn list_dependencies(&self, id: &str) -> Result<Dependencies> {
		let url = self.gateway.url(Api::Resource, &[Product::PATH, id, Dependencies::PATH])?;

		Ok(Dependencies::materialize(self.gateway.list(url, &[], false)?)?)
	}

	/// Lists the price sheets of product `id`.
	pub fn list_pricing(&self, id: &str) -> Result<Vec<ProductPricing>> {
		self.list_nested(id, &ListFilter::default())
	}
}

impl<T> Accessor<'_, Subscription, T>
where
	T: ?Sized + HttpTransport,
{
	/// Lists the historical versions of subscription `id`.
	pub fn get_history(&self, id: &str) -> Result<Vec<Subscription>> {
		let url = self.gateway.url(Api::Resource, &[Subscription::PATH, id, "history"])?;

		materialize_all(self.gateway.list(url, &[], false)?)
	}

	/// Lists the usage summaries of subscription `id`.
	pub fn list_usage_summaries(
		&self,
		id: &str,
		filter: &UsageSummaryFilter,
	) -> Result<Vec<UsageSummary>> {
		self.list_nested(id, filter)
	}
}

impl<T> Accessor<'_, Invoice, T>
where
	T: ?Sized + HttpTransport,
{
	/// Lists the lines of invoice `id`.
	pub fn list_items(&self, id: &str, filter: &InvoiceItemFilter) -> Result<Vec<InvoiceItem>> {
		self.list_nested(id, filter)
	}
}

impl<T> Accessor<'_, UsageSummary, T>
where
	T: ?Sized + HttpTransport,
{
	/// Lists the usage summaries of subscription `subscription_id`.
	pub fn list_for_subscription(
		&self,
		subscription_id: &str,
		filter: &UsageSummaryFilter,
	) -> Result<Vec<UsageSummary>> {
		let url = self
			.gateway
			.url(Api::Resource, &[Subscription::PATH, subscription_id, UsageSummary::PATH])?;

		materialize_all(self.gateway.list(url, &filter.query(), true)?)
	}

	/// Lists the daily usage lines of summary `id`.
	pub fn list_usage_lines(&self, id: &str, filter: &UsageLineFilter) -> Result<Vec<UsageLine>> {
		self.list_nested(id, filter)
	}
}

fn materialize_all<R>(items: Value) -> Result<Vec<R>>
where
	R: Resource,
{
	match items {
		Value::Array(items) =>
			Ok(items.into_iter().map(R::materialize).collect::<Result<Vec<_>, _>>()?),
		_ => Err(SchemaError::InvalidValue {
			resource: R::SCHEMA.name,
			field: CONTENT_KEY,
			reason: "expected a list of items".into(),
		}
		.into()),
	}
}

fn materialize_page<R>(document: Value) -> Result<Page<R>>
where
	R: Resource,
{
	let Value::Object(mut envelope) = document else {
		return Err(SchemaError::NotAnObject { resource: "Page", found: "a non-object value" }.into());
	};
	let content = envelope.remove(CONTENT_KEY).unwrap_or_else(|| Value::Array(Vec::new()));
	let content = materialize_all(content)?;
	// Some endpoints nest the counters under `page`; others keep them beside `content`.
	let info = match envelope.remove("page") {
		Some(nested @ Value::Object(_)) => nested,
		_ => Value::Object(envelope),
	};

	Ok(Page { content, info: PageInfo::materialize(info)? })
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	#[test]
	fn pages_accept_flat_and_nested_counters() {
		let flat: Page<PageInfo> = materialize_page(json!({
			"content": [{"size": 1, "totalElements": 1, "totalPages": 1, "number": 0}],
			"size": 10,
			"totalElements": 31,
			"totalPages": 4,
			"number": 2,
		}))
		.expect("Flat envelope should materialize.");

		assert_eq!(flat.content.len(), 1);
		assert_eq!(flat.info.total_elements, 31);
		assert_eq!(flat.info.number, 2);

		let nested: Page<PageInfo> = materialize_page(json!({
			"content": [],
			"page": {"size": 10, "totalElements": 0, "totalPages": 0, "number": 0},
		}))
		.expect("Nested envelope should materialize.");

		assert!(nested.content.is_empty());
		assert_eq!(nested.info.size, 10);
	}

	#[test]
	fn non_list_content_is_a_schema_error() {
		assert!(matches!(
			materialize_all::<PageInfo>(json!({"id": "x"})),
			Err(Error::Schema(SchemaError::InvalidValue { field: "content", .. }))
		));
	}

	#[test]
	fn endpoint_paths_match_the_api() {
		assert_eq!(Company::PATH, "companies");
		assert_eq!(ProvisioningDetail::PATH, "provisioning-details");
		assert_eq!(UsageSummary::PATH, "usage-summaries");
		assert_eq!(UsageLine::PATH, "usage-lines");
	}
}
