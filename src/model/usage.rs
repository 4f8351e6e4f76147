//! Usage summaries of metered subscriptions and their daily lines.

def_resource! {
	/// Usage rolled up per resource group for one subscription.
	UsageSummary {
		id: "id" => scalar String, required;
		company_id: "companyId" => scalar String, required;
		product_id: "productId" => scalar String, required;
		resource_group: "resourceGroup" => scalar String, optional;
		vendor_name: "vendorName" => scalar String, optional;
		current_charges: "currentCharges" => scalar f64, required;
		partner_total: "partnerTotal" => scalar f64, required;
		is_trial: "isTrial" => scalar bool, required;
	}
}

def_resource! {
	/// One day of usage within a summary.
	UsageLine {
		usage_summary_id: "usageSummaryId" => scalar String, required;
		usage_date: "usageDate" => scalar String, required;
		product_name: "productName" => scalar String, optional;
		product_id: "productId" => scalar String, required;
		unit_of_measure: "unitOfMeasure" => scalar String, optional;
		quantity: "quantity" => scalar f64, required;
		current_charges: "currentCharges" => scalar f64, required;
		current_profit: "currentProfit" => scalar f64, required;
		partner_total: "partnerTotal" => scalar f64, required;
		unit_price: "unitPrice" => scalar f64, required;
		is_trial: "isTrial" => scalar bool, required;
	}
}
