//! Orders and their line items.

// crates.io
use serde_json::{Map, Value};
// self
use crate::{
	codec::WireEnum,
	model::enums::{BillingTerm, OrderedBy},
};

/// Spelling the API uses for partner-placed orders when reading them back.
const ORDERED_BY_PARTNER_READ: &str = "Pax8Partner";

def_resource! {
	/// Provisioning answer attached to an order line.
	ProvisioningSetting {
		key: "key" => scalar String, required;
		value: "value" => scalar Vec<String>, required;
	}
}

def_resource! {
	/// One product line of an order.
	OrderLineItem {
		product_id: "productId" => scalar String, required;
		subscription_id: "subscriptionId" => scalar String, optional;
		commitment_term_id: "commitmentTermId" => scalar String, optional;
		provision_start_date: "provisionStartDate" => scalar String, optional;
		line_item_number: "lineItemNumber" => scalar i64, required;
		billing_term: "billingTerm" => enumerated BillingTerm, required;
		parent_subscription_id: "parentSubscriptionId" => scalar String, optional;
		parent_line_item_number: "parentLineItemNumber" => scalar i64, optional;
		quantity: "quantity" => scalar i64, required;
		provisioning_details: "provisioningDetails" => list ProvisioningSetting, optional;
	}
}

def_resource! {
	/// An order placed for a company.
	Order with normalize_ordered_by {
		company_id: "companyId" => scalar String, required;
		created_date: "createdDate" => scalar String, required;
		line_items: "lineItems" => list OrderLineItem, required;
		id: "id" => scalar String, optional;
		ordered_by: "orderedBy" => enumerated OrderedBy, optional;
		ordered_by_user_id: "orderedByUserId" => scalar String, optional;
		ordered_by_user_email: "orderedByUserEmail" => scalar String, optional;
	}
}

// Orders are written with "Pax8 Partner" but read back as "Pax8Partner".
fn normalize_ordered_by(object: &mut Map<String, Value>) {
	if let Some(value) = object
		.get_mut("orderedBy")
		.filter(|value| value.as_str() == Some(ORDERED_BY_PARTNER_READ))
	{
		*value = OrderedBy::Pax8Partner.wire().into();
	}
}
