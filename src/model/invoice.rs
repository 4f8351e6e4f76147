//! Invoices and invoice lines.

// self
use crate::model::enums::{
	InvoiceItemChargeTypes, InvoiceItemRateTypes, InvoiceItemTerm, InvoiceItemType, InvoiceStatus,
};

def_resource! {
	/// A partner invoice.
	Invoice {
		id: "id" => scalar String, required;
		invoice_date: "invoiceDate" => scalar String, required;
		due_date: "dueDate" => scalar String, required;
		status: "status" => enumerated InvoiceStatus, omit;
		balance: "balance" => scalar f64, required;
		carried_balance: "carriedBalance" => scalar f64, required;
		total: "total" => scalar f64, required;
		partner_name: "partnerName" => scalar String, required;
		company_id: "companyId" => scalar String, optional;
		external_id: "externalId" => scalar String, optional;
	}
}

def_resource! {
	/// One line of an invoice.
	InvoiceItem {
		id: "id" => scalar String, required;
		purchase_order_number: "purchaseOrderNumber" => scalar String, optional;
		kind: "type" => enumerated InvoiceItemType, required;
		company_id: "companyId" => scalar String, required;
		external_id: "externalId" => scalar String, optional;
		company_name: "companyName" => scalar String, optional;
		start_period: "startPeriod" => scalar String, optional;
		end_period: "endPeriod" => scalar String, optional;
		quantity: "quantity" => scalar f64, optional;
		unit_of_measure: "unitOfMeasure" => scalar String, optional;
		term: "term" => enumerated InvoiceItemTerm, optional;
		sku: "sku" => scalar String, optional;
		description: "description" => scalar String, optional;
		details: "details" => scalar String, optional;
		rate_type: "rateType" => enumerated InvoiceItemRateTypes, optional;
		charge_type: "chargeType" => enumerated InvoiceItemChargeTypes, optional;
		price: "price" => scalar f64, optional;
		subtotal: "subtotal" => scalar f64, optional;
		cost: "cost" => scalar f64, optional;
		cost_total: "costTotal" => scalar f64, optional;
		offered_by: "offeredBy" => scalar String, optional;
		billed_by_pax8: "billedByPax8" => scalar bool, optional;
		total: "total" => scalar f64, required;
		product_id: "productId" => scalar String, optional;
		product_name: "productName" => scalar String, optional;
		billing_fee: "billingFee" => scalar f64, optional;
		billing_fee_rate: "billingFeeRate" => scalar f64, optional;
		amount_due: "amountDue" => scalar f64, optional;
		currency_code: "currencyCode" => scalar String, optional;
	}
}
