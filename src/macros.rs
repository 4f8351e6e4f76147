// Declarative builders for wire enumerations, schema-backed resources, and query filters.

/// Declares a wire enumeration and its [`WireEnum`](crate::codec::WireEnum) descriptor.
///
/// `str` enumerations carry string wire values, `int` enumerations integer codes.
macro_rules! def_enum {
	(@wire str $wire:literal) => {
		$crate::codec::WireValue::Str($wire)
	};
	(@wire int $wire:literal) => {
		$crate::codec::WireValue::Int($wire)
	};
	(
		$(#[$meta:meta])*
		$name:ident($kind:ident) {
			$($variant:ident = $wire:literal),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
		pub enum $name {
			$(
				#[doc = concat!("Wire value `", stringify!($wire), "`.")]
				$variant,
			)+
		}
		impl $name {
			/// Every variant in declaration order.
			pub const ALL: &'static [Self] = &[$(Self::$variant),+];
		}
		impl $crate::codec::WireEnum for $name {
			const DESCRIPTOR: &'static $crate::codec::EnumDescriptor = &$crate::codec::EnumDescriptor {
				name: stringify!($name),
				values: &[$(def_enum!(@wire $kind $wire)),+],
			};

			fn from_index(index: usize) -> Option<Self> {
				Self::ALL.get(index).copied()
			}

			fn index(self) -> usize {
				self as usize
			}

			fn wire(self) -> $crate::codec::WireValue {
				match self {
					$(Self::$variant => def_enum!(@wire $kind $wire),)+
				}
			}
		}
		impl ::std::fmt::Display for $name {
			fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
				::std::fmt::Display::fmt(&$crate::codec::WireEnum::wire(*self), f)
			}
		}
	};
}

/// Declares a schema-backed resource: the struct, its static schema, and record conversions.
///
/// Each field reads `rust_name: "wireName" => kind Type, presence;` where `kind` is one of
/// `scalar`, `resource`, `enumerated`, or `list`, and `presence` is one of `required`,
/// `optional`, or `omit` (optional and dropped from output while empty). `Name with path { .. }`
/// attaches a payload normalizer.
macro_rules! def_resource {
	(@ty list $ty:ty, required) => { ::std::vec::Vec<$ty> };
	(@ty list $ty:ty, $presence:ident) => { ::std::option::Option<::std::vec::Vec<$ty>> };
	(@ty $kind:ident $ty:ty, required) => { $ty };
	(@ty $kind:ident $ty:ty, $presence:ident) => { ::std::option::Option<$ty> };
	(@kind scalar $ty:ty) => { $crate::codec::FieldKind::Scalar };
	(@kind resource $ty:ty) => {
		$crate::codec::FieldKind::Resource(<$ty as $crate::codec::Resource>::SCHEMA)
	};
	(@kind enumerated $ty:ty) => {
		$crate::codec::FieldKind::Enum(<$ty as $crate::codec::WireEnum>::DESCRIPTOR)
	};
	(@kind list $ty:ty) => {
		$crate::codec::FieldKind::List(<$ty as $crate::codec::Resource>::SCHEMA)
	};
	(@presence required) => { $crate::codec::Presence::Required };
	(@presence optional) => { $crate::codec::Presence::Optional };
	(@presence omit) => { $crate::codec::Presence::OmitIfEmpty };
	(@normalize) => { None };
	(@normalize $normalize:path) => { Some($normalize) };
	(@read $reader:ident scalar $ty:ty) => { $reader.scalar::<$ty>()? };
	(@read $reader:ident resource $ty:ty) => { $reader.resource::<$ty>()? };
	(@read $reader:ident enumerated $ty:ty) => { $reader.enumeration::<$ty>()? };
	(@read $reader:ident list $ty:ty) => { $reader.list::<$ty>()? };
	(@take $reader:ident $kind:ident $ty:ty, required) => {{
		let value = def_resource!(@read $reader $kind $ty);

		$reader.require(value)?
	}};
	(@take $reader:ident $kind:ident $ty:ty, $presence:ident) => {
		def_resource!(@read $reader $kind $ty)
	};
	(@ref required $value:expr) => { Some(&$value) };
	(@ref $presence:ident $value:expr) => { $value.as_ref() };
	(@write $writer:ident scalar $value:expr) => { $writer.scalar($value)? };
	(@write $writer:ident resource $value:expr) => { $writer.resource($value)? };
	(@write $writer:ident enumerated $value:expr) => { $writer.enumeration($value)? };
	(@write $writer:ident list $value:expr) => { $writer.list($value)? };
	(
		$(#[$meta:meta])*
		$name:ident $(with $normalize:path)? {
			$($field:ident: $wire:literal => $kind:ident $ty:ty, $presence:ident;)+
		}
	) => {
		$(#[$meta])*
		#[derive(Clone, Debug, PartialEq)]
		pub struct $name {
			$(
				#[doc = concat!("Wire field `", $wire, "`.")]
				pub $field: def_resource!(@ty $kind $ty, $presence),
			)+
		}
		impl $crate::codec::Resource for $name {
			const SCHEMA: &'static $crate::codec::Schema = &$crate::codec::Schema {
				name: stringify!($name),
				fields: &[$(
					$crate::codec::FieldSpec {
						name: $wire,
						kind: def_resource!(@kind $kind $ty),
						presence: def_resource!(@presence $presence),
					},
				)+],
				normalize: def_resource!(@normalize $($normalize)?),
			};

			fn from_record(
				record: $crate::codec::Record,
			) -> ::std::result::Result<Self, $crate::codec::SchemaError> {
				let mut reader = $crate::codec::FieldReader::new(record, Self::SCHEMA)?;
				$(let $field = def_resource!(@take reader $kind $ty, $presence);)+

				Ok(Self { $($field),+ })
			}

			fn to_record(
				&self,
			) -> ::std::result::Result<$crate::codec::Record, $crate::codec::SchemaError> {
				let mut writer = $crate::codec::FieldWriter::new(Self::SCHEMA);

				$(def_resource!(@write writer $kind def_resource!(@ref $presence self.$field));)+

				writer.finish()
			}
		}
	};
}

/// Declares an immutable query filter with `page`/`size` plus per-family predicates.
///
/// Every parameter gets a consuming builder method of the same name; unset parameters never reach
/// the query string.
macro_rules! def_filter {
	(
		$(#[$meta:meta])*
		$name:ident {
			$($field:ident: $wire:literal => $ty:ty),* $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Clone, Debug, Default, PartialEq)]
		pub struct $name {
			/// Zero-based page index (`page`).
			pub page: Option<u32>,
			/// Page size (`size`).
			pub size: Option<u32>,
			$(
				#[doc = concat!("Query parameter `", $wire, "`.")]
				pub $field: Option<$ty>,
			)*
		}
		impl $name {
			/// Creates an empty filter.
			pub fn new() -> Self {
				Self::default()
			}

			/// Returns a copy requesting page `page`.
			pub fn page(self, page: u32) -> Self {
				Self { page: Some(page), ..self }
			}

			/// Returns a copy requesting `size` items per page.
			pub fn size(self, size: u32) -> Self {
				Self { size: Some(size), ..self }
			}

			$(
				#[doc = concat!("Returns a copy with `", $wire, "` set.")]
				pub fn $field(self, value: impl Into<$ty>) -> Self {
					Self { $field: Some(value.into()), ..self }
				}
			)*
		}
		impl $crate::filter::QueryFilter for $name {
			fn query(&self) -> ::std::vec::Vec<(&'static str, ::std::string::String)> {
				let mut pairs = ::std::vec::Vec::new();

				if let Some(page) = &self.page {
					pairs.push(("page", page.to_string()));
				}
				if let Some(size) = &self.size {
					pairs.push(("size", size.to_string()));
				}
				$(
					if let Some(value) = &self.$field {
						pairs.push(($wire, value.to_string()));
					}
				)*

				pairs
			}
		}
	};
}
