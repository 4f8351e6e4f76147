//! Immutable query filters for list endpoints.
//!
//! Filters are plain values: builder methods consume and return a new filter, and a filter is
//! built fresh for each call. [`QueryFilter::query`] projects the set parameters onto ordered
//! query pairs. Enumerations render as their wire value and booleans as `true`/`false`.

// self
use crate::model::{
	BillingTerm, CompanySortBy, CompanyStatus, InvoiceSortBy, InvoiceStatus, ProductSortBy,
	SortDirection, SubscriptionSortBy, SubscriptionStatus, UsageSummarySortBy,
};

/// Projection of a filter onto query-string pairs.
pub trait QueryFilter {
	/// Returns the set parameters in declaration order; unset parameters are absent.
	fn query(&self) -> Vec<(&'static str, String)>;
}

def_filter! {
	/// Pagination-only filter.
	ListFilter {}
}

def_filter! {
	/// Filter for listing companies.
	CompanyFilter {
		sort_direction: "sort_direction" => SortDirection,
		sort: "sort" => CompanySortBy,
		city: "city" => String,
		country: "country" => String,
		state_or_province: "stateOrProvince" => String,
		postal_code: "postalCode" => String,
		self_service_allowed: "selfServiceAllowed" => bool,
		bill_on_behalf_of_enabled: "billOnBehalfOfEnabled" => bool,
		order_approval_required: "orderApprovalRequired" => bool,
		status: "status" => CompanyStatus,
	}
}

def_filter! {
	/// Filter for listing the contacts of a company.
	ContactFilter {}
}

def_filter! {
	/// Filter for listing products.
	ProductFilter {
		sort: "sort" => ProductSortBy,
		sort_direction: "sortDirection" => SortDirection,
		vendor_name: "vendorName" => String,
	}
}

def_filter! {
	/// Filter for listing orders.
	OrderFilter {
		company_id: "companyId" => String,
	}
}

def_filter! {
	/// Filter for listing subscriptions.
	SubscriptionFilter {
		sort: "sort" => SubscriptionSortBy,
		sort_direction: "sort_direction" => SortDirection,
		status: "status" => SubscriptionStatus,
		billing_term: "billingTerm" => BillingTerm,
		company_id: "companyId" => String,
		product_id: "productId" => String,
	}
}

def_filter! {
	/// Filter for listing invoices. Dates are `YYYY-MM-DD` strings.
	InvoiceFilter {
		sort: "sort" => InvoiceSortBy,
		sort_direction: "sort_direction" => SortDirection,
		status: "status" => InvoiceStatus,
		invoice_date: "invoiceDate" => String,
		invoice_date_range_start: "invoiceDateRangeStart" => String,
		invoice_date_range_end: "invoiceDateRangeEnd" => String,
		due_date: "dueDate" => String,
		total: "total" => f64,
		balance: "balance" => f64,
		carried_balance: "carriedBalance" => f64,
		company_id: "companyId" => String,
	}
}

def_filter! {
	/// Filter for listing the lines of an invoice.
	InvoiceItemFilter {}
}

def_filter! {
	/// Filter for listing usage summaries.
	UsageSummaryFilter {
		sort: "sort" => UsageSummarySortBy,
		sort_direction: "sort_direction" => SortDirection,
		resource_group: "resourceGroup" => String,
		company_id: "companyId" => String,
	}
}

def_filter! {
	/// Filter for listing the lines of a usage summary.
	UsageLineFilter {}
}
