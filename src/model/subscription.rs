//! Subscriptions and their commitment terms.

// self
use crate::model::enums::{BillingTerm, SubscriptionStatus};

def_resource! {
	/// Commitment window a subscription is bound to.
	CommitmentTerm {
		id: "id" => scalar String, required;
		term: "term" => scalar String, required;
		end_date: "endDate" => scalar String, optional;
	}
}

def_resource! {
	/// An active or historical product subscription of a company.
	Subscription {
		company_id: "companyId" => scalar String, required;
		product_id: "productId" => scalar String, required;
		quantity: "quantity" => scalar f64, required;
		start_date: "startDate" => scalar String, required;
		created_date: "createdDate" => scalar String, required;
		billing_start: "billingStart" => scalar String, optional;
		status: "status" => enumerated SubscriptionStatus, required;
		price: "price" => scalar f64, required;
		billing_term: "billingTerm" => enumerated BillingTerm, required;
		commitment_term: "commitmentTerm" => resource CommitmentTerm, optional;
		id: "id" => scalar String, optional;
	}
}
