//! Wire enumerations shared by resources and filters.

def_enum! {
	/// Sort order for list endpoints.
	SortDirection(str) {
		Ascending = "asc",
		Descending = "desc",
	}
}

def_enum! {
	/// Lifecycle state of a company.
	CompanyStatus(str) {
		Active = "Active",
		Inactive = "Inactive",
		Deleted = "Deleted",
	}
}

def_enum! {
	/// Sort keys accepted by the company list endpoint.
	CompanySortBy(str) {
		Name = "name",
		City = "city",
		Country = "country",
		StateOrProvince = "stateOrProvince",
		PostalCode = "postalCode",
	}
}

def_enum! {
	/// Sort keys accepted by the product list endpoint.
	ProductSortBy(str) {
		Name = "name",
		Vendor = "vendor",
	}
}

def_enum! {
	/// Sort keys accepted by the subscription list endpoint.
	SubscriptionSortBy(str) {
		Quantity = "quantity",
		StartDate = "startDate",
		EndDate = "endDate",
		CreatedDate = "createdDate",
		BillingStart = "billingStart",
		Price = "price",
	}
}

def_enum! {
	/// Sort keys accepted by the invoice list endpoint.
	InvoiceSortBy(str) {
		InvoiceDate = "invoiceDate",
		DueDate = "dueDate",
		Status = "status",
		PartnerName = "partnerName",
		Total = "total",
		Balance = "balance",
		CarriedBalance = "carriedBalance",
	}
}

def_enum! {
	/// Sort keys accepted by the usage-summary list endpoint.
	UsageSummarySortBy(str) {
		ResourceGroup = "resourceGroup",
		CurrentCharges = "currentCharges",
		PartnerTotal = "partnerTotal",
	}
}

def_enum! {
	/// Input style of a provisioning detail.
	ProvisioningDetailTypes(int) {
		MultipleChoice = 1,
		Input = 2,
	}
}

def_enum! {
	/// Billing cadence of a product or subscription.
	BillingTerm(str) {
		Monthly = "Monthly",
		Annual = "Annual",
		TwoYear = "2-Year",
		ThreeYear = "3-Year",
		OneTime = "One-Time",
		Trial = "Trial",
		Activation = "Activation",
	}
}

def_enum! {
	/// Pricing model of a product.
	PricingType(str) {
		Flat = "Flat",
		Volume = "Volume",
		Tiered = "Tiered",
		MarkUp = "Mark-Up",
	}
}

def_enum! {
	/// How a product rate is charged.
	ChargeType(str) {
		PerUnit = "per_unit",
		FlatRate = "flat_rate",
	}
}

def_enum! {
	/// Who placed an order.
	OrderedBy(str) {
		Pax8Partner = "Pax8 Partner",
		Customer = "Customer",
		Pax8 = "Pax8",
	}
}

def_enum! {
	/// Lifecycle state of a subscription.
	SubscriptionStatus(str) {
		Active = "Active",
		Cancelled = "Cancelled",
		PendingManual = "PendingManual",
		PendingAutomated = "PendingAutomated",
		PendingCancel = "PendingCancel",
		WaitingForDetails = "WaitingForDetails",
		Trial = "Trial",
		Converted = "Converted",
		PendingActivation = "PendingActivation",
		Activated = "Activated",
	}
}

def_enum! {
	/// Role of a company contact.
	ContactTypes(str) {
		Billing = "Billing",
		Admin = "Admin",
		Technical = "Technical",
	}
}

def_enum! {
	/// Kind of invoice line.
	InvoiceItemType(str) {
		Rebate = "rebate",
		Prorate = "prorate",
		Subscription = "subscription",
		PaymentCredit = "payment_credit",
		OneTime = "one_time",
		ServiceCharge = "service_charge",
		ServiceCredit = "service_credit",
		InvoiceCredit = "invoice_credit",
	}
}

def_enum! {
	/// Term an invoice line was billed under.
	InvoiceItemTerm(str) {
		ThreeYear = "3 Year",
		Annual = "Annual",
		TwoYear = "2 Year",
		Activation = "Activation",
		OneTime = "One Time",
		Arrears = "Arrears",
		Trial = "Trial",
		Rebate = "Rebate",
		Monthly = "Monthly",
	}
}

def_enum! {
	/// Rate model of an invoice line.
	InvoiceItemRateTypes(str) {
		Markup = "markup",
		Flat = "flat",
		Single = "single",
		Volume = "volume",
		Tiered = "tiered",
	}
}

def_enum! {
	/// Charge model of an invoice line.
	InvoiceItemChargeTypes(str) {
		PerUnit = "per_unit",
		FlatRate = "flat_rate",
	}
}

def_enum! {
	/// Payment state of an invoice.
	InvoiceStatus(str) {
		Unpaid = "Unpaid",
		Paid = "Paid",
		Void = "Void",
		Carried = "Carried",
		NothingDue = "Nothing Due",
	}
}
