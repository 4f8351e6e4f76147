//! Catalog products with their provisioning, dependency, and pricing data.

// self
use crate::model::enums::{BillingTerm, ChargeType, PricingType, ProvisioningDetailTypes};

def_resource! {
	/// A product offered in the catalog.
	Product {
		id: "id" => scalar String, required;
		name: "name" => scalar String, required;
		vendor_name: "vendorName" => scalar String, required;
		short_description: "shortDescription" => scalar String, required;
		sku: "sku" => scalar String, required;
		vendor_sku: "vendorSku" => scalar String, required;
	}
}

def_resource! {
	/// A value the partner must supply when ordering a product.
	ProvisioningDetail {
		label: "label" => scalar String, required;
		key: "key" => scalar String, required;
		value_type: "valueType" => enumerated ProvisioningDetailTypes, required;
		description: "description" => scalar String, omit;
		possible_values: "possibleValues" => scalar Vec<serde_json::Value>, omit;
		partner_shell_template_id: "partnerShellTemplateId" => scalar i64, omit;
	}
}

def_resource! {
	/// Commitment terms a product depends on.
	CommitmentDependency {
		id: "id" => scalar String, required;
		term: "term" => scalar String, required;
		auto_renew: "autoRenew" => scalar bool, required;
		renewal_window_days_before_term_end: "renewalWindowDaysBeforeTermEnd" => scalar i64, required;
		renewal_window_days_after_term_end: "renewalWindowDaysAfterTermEnd" => scalar i64, required;
		allow_for_quantity_increase: "allowForQuantityIncrease" => scalar i64, required;
		allow_for_quantity_decrease: "allowForQuantityDecrease" => scalar i64, required;
		allow_for_early_cancellation: "allowForEarlyCancellation" => scalar bool, required;
		cancellation_fee_applied: "cancellationFeeApplied" => scalar bool, required;
		is_transferable: "isTransferable" => scalar bool, required;
	}
}

def_resource! {
	/// Products that must be owned before this one can be ordered.
	ProductDependency {
		name: "name" => scalar String, required;
		products: "products" => list Product, required;
	}
}

def_resource! {
	/// Dependency envelope returned for a product.
	Dependencies {
		product_dependencies: "productDependencies" => list ProductDependency, required;
		commitment_dependencies: "commitmentDependencies" => list CommitmentDependency, required;
	}
}

def_resource! {
	/// One quantity band of a price sheet.
	ProductRate {
		partner_buy_rate: "partnerBuyRate" => scalar f64, required;
		suggested_retail_price: "suggestedRetailPrice" => scalar f64, required;
		start_quantity_range: "startQuantityRange" => scalar i64, required;
		end_quantity_range: "endQuantityRange" => scalar i64, optional;
		charge_type: "chargeType" => enumerated ChargeType, required;
	}
}

def_resource! {
	/// Price sheet for one billing term.
	ProductPricing {
		billing_term: "billingTerm" => enumerated BillingTerm, required;
		kind: "type" => enumerated PricingType, required;
		unit_of_measurement: "unitOfMeasurement" => scalar String, required;
		rates: "rates" => list ProductRate, required;
	}
}
