//! Companies, their addresses, contacts, and Microsoft tenant links.

// self
use crate::model::enums::{CompanyStatus, ContactTypes};

def_resource! {
	/// Postal address of a company.
	CompanyAddress {
		street: "street" => scalar String, required;
		city: "city" => scalar String, required;
		postal_code: "postalCode" => scalar String, required;
		country: "country" => scalar String, required;
		street2: "street2" => scalar String, omit;
		state_or_province: "stateOrProvince" => scalar String, omit;
	}
}

def_resource! {
	/// A customer company managed by the partner.
	Company {
		name: "name" => scalar String, required;
		address: "address" => resource CompanyAddress, required;
		website: "website" => scalar String, required;
		bill_on_behalf_of_enabled: "billOnBehalfOfEnabled" => scalar bool, required;
		order_approval_required: "orderApprovalRequired" => scalar bool, required;
		self_service_allowed: "selfServiceAllowed" => scalar bool, optional;
		phone: "phone" => scalar String, optional;
		id: "id" => scalar String, omit;
		external_id: "externalId" => scalar String, omit;
		status: "status" => enumerated CompanyStatus, omit;
	}
}

def_resource! {
	/// Microsoft tenant linked to a company, tagged with the company id it was requested for.
	CompanyMsTenantId {
		client_id: "clientId" => scalar String, required;
		tenant_id: "tenantId" => scalar String, optional;
	}
}

def_resource! {
	/// One role held by a contact.
	ContactType {
		kind: "type" => enumerated ContactTypes, required;
		primary: "primary" => scalar bool, required;
	}
}

def_resource! {
	/// A person attached to a company.
	Contact {
		first_name: "firstName" => scalar String, required;
		last_name: "lastName" => scalar String, required;
		email: "email" => scalar String, required;
		phone: "phone" => scalar String, optional;
		types: "types" => list ContactType, required;
		id: "id" => scalar String, optional;
		created_date: "createdDate" => scalar String, optional;
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;
	use crate::codec::{Resource, SchemaError};

	fn company_payload() -> serde_json::Value {
		json!({
			"id": "c-1",
			"name": "Acme",
			"address": {
				"street": "1 Main St",
				"city": "Denver",
				"postalCode": "80202",
				"country": "US",
				"stateOrProvince": "CO",
			},
			"website": "acme.example",
			"billOnBehalfOfEnabled": false,
			"orderApprovalRequired": true,
			"selfServiceAllowed": false,
			"phone": null,
			"status": "Active",
		})
	}

	#[test]
	fn company_materializes_nested_address_and_status() {
		let company = Company::materialize(company_payload()).expect("Company payload should materialize.");

		assert_eq!(company.id.as_deref(), Some("c-1"));
		assert_eq!(company.status, Some(CompanyStatus::Active));
		assert_eq!(company.address.city, "Denver");
		assert_eq!(company.address.state_or_province.as_deref(), Some("CO"));
		assert_eq!(company.address.street2, None);
		assert_eq!(company.phone, None);
	}

	#[test]
	fn company_serializes_address_as_object_and_drops_empty_ids() {
		let mut company =
			Company::materialize(company_payload()).expect("Company payload should materialize.");

		company.id = None;
		company.status = None;

		let value = company.to_value().expect("Company should serialize.");

		assert!(value["address"].is_object());
		assert_eq!(value["address"]["postalCode"], "80202");
		assert!(value["address"].get("street2").is_none());
		assert!(value.get("id").is_none());
		assert!(value.get("externalId").is_none());
		assert!(value.get("status").is_none());
		assert_eq!(value.get("phone"), Some(&serde_json::Value::Null));
	}

	#[test]
	fn company_with_unknown_status_is_rejected() {
		let mut payload = company_payload();

		payload["status"] = json!("Archived");

		assert!(matches!(
			Company::materialize(payload),
			Err(SchemaError::UnknownEnumValue { enumeration: "CompanyStatus", field: "status", .. })
		));
	}

	#[test]
	fn contact_decodes_typed_roles() {
		let contact = Contact::materialize(json!({
			"id": "p-1",
			"firstName": "Ada",
			"lastName": "Lovelace",
			"email": "ada@example.com",
			"phone": "555-0100",
			"types": [{"type": "Admin", "primary": true}, {"type": "Billing", "primary": false}],
			"createdDate": "2024-03-01",
		}))
		.expect("Contact payload should materialize.");

		assert_eq!(
			contact.types,
			vec![
				ContactType { kind: ContactTypes::Admin, primary: true },
				ContactType { kind: ContactTypes::Billing, primary: false },
			]
		);
	}
}
