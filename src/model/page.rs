//! Pagination metadata of list responses.

def_resource! {
	/// Position of a page within a list response.
	PageInfo {
		size: "size" => scalar u64, required;
		total_elements: "totalElements" => scalar u64, required;
		total_pages: "totalPages" => scalar u64, required;
		number: "number" => scalar u64, required;
	}
}
