//! Schema-driven conversion between JSON documents and resource instances.
//!
//! Every resource type carries a static [`Schema`]: its fields in declaration order, each with a
//! [`FieldKind`] (scalar, nested resource, enumeration, or list of resources) and a [`Presence`]
//! rule. One generic pair of functions interprets those schemas:
//!
//! - [`materialize`] validates a raw JSON object into a [`Record`], recursing into nested kinds.
//! - [`serialize`] renders a [`Record`] back to a JSON object with sorted keys, dropping
//!   omit-if-empty fields that are null. Nested resources are embedded as objects.
//!
//! Typed structs declared with `def_resource!` implement [`Resource`], converting to and from
//! records through [`FieldReader`] and [`FieldWriter`].

// std
use std::{ptr, vec::IntoIter};
// self
use crate::_prelude::*;

/// Rewrites a raw payload in place before it is materialized.
pub type Normalizer = fn(&mut Map<String, Value>);

/// Errors raised when a payload does not fit its schema.
#[derive(Debug, ThisError)]
pub enum SchemaError {
	/// The payload for a resource was not a JSON object.
	#[error("{resource} payload must be a JSON object, found {found}.")]
	NotAnObject {
		/// Resource being decoded.
		resource: &'static str,
		/// JSON kind that was found instead.
		found: &'static str,
	},
	/// A required field was absent or null.
	#[error("{resource} is missing required field `{field}`.")]
	MissingField {
		/// Resource being decoded.
		resource: &'static str,
		/// Wire name of the missing field.
		field: &'static str,
	},
	/// An enumerated field held a value outside its allowed set.
	#[error("Field `{field}` holds {value}, which is not a valid {enumeration}.")]
	UnknownEnumValue {
		/// Enumeration name.
		enumeration: &'static str,
		/// Wire name of the offending field.
		field: &'static str,
		/// Offending raw value, rendered as JSON.
		value: String,
	},
	/// A field value has the wrong JSON shape for its declared type.
	#[error("{resource}.{field} is invalid: {reason}.")]
	InvalidValue {
		/// Resource being decoded.
		resource: &'static str,
		/// Wire name of the offending field.
		field: &'static str,
		/// Human-readable mismatch description.
		reason: String,
	},
	/// A record was converted into a type with a different schema.
	#[error("A {found} record cannot build a {expected}.")]
	WrongSchema {
		/// Schema the target type declares.
		expected: &'static str,
		/// Schema the record was built with.
		found: &'static str,
	},
	/// Text handed to a deserializer was not JSON at all.
	#[error("Payload is not valid JSON.")]
	InvalidJson(#[source] serde_json::Error),
}

/// Static description of one resource type.
pub struct Schema {
	/// Resource type name, used in error messages.
	pub name: &'static str,
	/// Fields in declaration order.
	pub fields: &'static [FieldSpec],
	/// Optional rewrite applied to raw payloads of this type only.
	pub normalize: Option<Normalizer>,
}
impl Schema {
	/// Looks up a field by wire name.
	pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
		self.fields.iter().find(|field| field.name == name)
	}

	/// Checks that field names are unique, recursing into nested schemas.
	pub fn validate(&'static self) -> Result<(), SchemaError> {
		for (idx, field) in self.fields.iter().enumerate() {
			if self.fields[..idx].iter().any(|earlier| earlier.name == field.name) {
				return Err(SchemaError::InvalidValue {
					resource: self.name,
					field: field.name,
					reason: "field is declared twice".into(),
				});
			}

			match field.kind {
				FieldKind::Resource(child) | FieldKind::List(child) => child.validate()?,
				FieldKind::Scalar | FieldKind::Enum(_) => {},
			}
		}

		Ok(())
	}

	fn same_as(&self, other: &Schema) -> bool {
		ptr::eq(self, other) || self.name == other.name
	}
}
impl Debug for Schema {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Schema")
			.field("name", &self.name)
			.field("fields", &self.fields)
			.field("normalize", &self.normalize.is_some())
			.finish()
	}
}

/// One declared field.
#[derive(Debug)]
pub struct FieldSpec {
	/// Wire (JSON) name.
	pub name: &'static str,
	/// How the raw value is decoded.
	pub kind: FieldKind,
	/// Default and omission rule.
	pub presence: Presence,
}

/// Decoding rule for a field.
#[derive(Clone, Copy)]
pub enum FieldKind {
	/// Passed through as a JSON scalar (or any JSON value).
	Scalar,
	/// Materialized recursively with the child schema.
	Resource(&'static Schema),
	/// Validated against an enumeration's allowed wire values.
	Enum(&'static EnumDescriptor),
	/// A JSON array whose elements are materialized with the element schema.
	List(&'static Schema),
}
impl Debug for FieldKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::Scalar => f.write_str("Scalar"),
			Self::Resource(schema) => write!(f, "Resource({})", schema.name),
			Self::Enum(descriptor) => write!(f, "Enum({})", descriptor.name),
			Self::List(schema) => write!(f, "List({})", schema.name),
		}
	}
}

/// Default and omission rule for a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presence {
	/// Must be present and non-null.
	Required,
	/// Defaults to null; always serialized.
	Optional,
	/// Defaults to null; dropped from serialized output while null.
	OmitIfEmpty,
}
impl Presence {
	/// Returns `true` for [`Presence::Required`].
	pub fn is_required(self) -> bool {
		matches!(self, Self::Required)
	}
}

/// Scalar representation of an enumeration value on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WireValue {
	/// String spelling.
	Str(&'static str),
	/// Integer code.
	Int(i64),
}
impl WireValue {
	/// Returns `true` when `raw` is exactly this wire value.
	pub fn matches(self, raw: &Value) -> bool {
		match (self, raw) {
			(Self::Str(expected), Value::String(found)) => expected == found,
			(Self::Int(expected), Value::Number(found)) => found.as_i64() == Some(expected),
			_ => false,
		}
	}
}
impl From<WireValue> for Value {
	fn from(value: WireValue) -> Self {
		match value {
			WireValue::Str(text) => Value::from(text),
			WireValue::Int(code) => Value::from(code),
		}
	}
}
impl Display for WireValue {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::Str(text) => f.write_str(text),
			Self::Int(code) => write!(f, "{code}"),
		}
	}
}

/// Static description of an enumeration.
#[derive(Debug)]
pub struct EnumDescriptor {
	/// Enumeration name.
	pub name: &'static str,
	/// Allowed wire values in declaration order.
	pub values: &'static [WireValue],
}
impl EnumDescriptor {
	/// Decodes a raw value, or `None` when it is not one of the allowed values.
	pub fn decode(&'static self, raw: &Value) -> Option<EnumValue> {
		self.values
			.iter()
			.position(|value| value.matches(raw))
			.map(|index| EnumValue { descriptor: self, index })
	}
}

/// A decoded enumeration value inside a [`Record`].
#[derive(Clone, Copy)]
pub struct EnumValue {
	descriptor: &'static EnumDescriptor,
	index: usize,
}
impl EnumValue {
	/// Returns the enumeration this value belongs to.
	pub fn descriptor(self) -> &'static EnumDescriptor {
		self.descriptor
	}

	/// Returns the declaration index of the value.
	pub fn index(self) -> usize {
		self.index
	}

	/// Returns the wire representation.
	pub fn wire(self) -> Option<WireValue> {
		self.descriptor.values.get(self.index).copied()
	}
}
impl PartialEq for EnumValue {
	fn eq(&self, other: &Self) -> bool {
		self.descriptor.name == other.descriptor.name && self.index == other.index
	}
}
impl Debug for EnumValue {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self.wire() {
			Some(wire) => write!(f, "{}({wire})", self.descriptor.name),
			None => write!(f, "{}(#{})", self.descriptor.name, self.index),
		}
	}
}

/// One materialized field value.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
	/// Absent or null.
	Null,
	/// Raw JSON value for scalar fields.
	Scalar(Value),
	/// Materialized child resource.
	Resource(Record),
	/// Decoded enumeration value.
	Enum(EnumValue),
	/// Materialized child resources.
	List(Vec<Record>),
}
impl FieldValue {
	/// Returns `true` for [`FieldValue::Null`].
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}
}

/// A materialized resource: one value per schema field, in declaration order.
#[derive(Clone)]
pub struct Record {
	schema: &'static Schema,
	values: Vec<FieldValue>,
}
impl Record {
	/// Returns the schema the record was built with.
	pub fn schema(&self) -> &'static Schema {
		self.schema
	}

	/// Looks up a field value by wire name.
	pub fn get(&self, name: &str) -> Option<&FieldValue> {
		let idx = self.schema.fields.iter().position(|field| field.name == name)?;

		self.values.get(idx)
	}

	/// Iterates fields and values in declaration order.
	pub fn iter(&self) -> impl Iterator<Item = (&'static FieldSpec, &FieldValue)> {
		self.schema.fields.iter().zip(self.values.iter())
	}
}
impl PartialEq for Record {
	fn eq(&self, other: &Self) -> bool {
		self.schema.same_as(other.schema) && self.values == other.values
	}
}
impl Debug for Record {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let mut map = f.debug_map();

		for (field, value) in self.iter() {
			map.entry(&field.name, value);
		}

		map.finish()
	}
}

/// Validates `raw` against `schema` and builds a [`Record`].
///
/// The schema's normalizer runs first. Scalar fields pass through unchanged; nested fields are
/// decoded by kind. Keys the schema does not declare are ignored.
pub fn materialize(raw: Value, schema: &'static Schema) -> Result<Record, SchemaError> {
	let mut object = match raw {
		Value::Object(object) => object,
		other => return Err(SchemaError::NotAnObject { resource: schema.name, found: json_kind(&other) }),
	};

	if let Some(normalize) = schema.normalize {
		normalize(&mut object);
	}

	let values = schema
		.fields
		.iter()
		.map(|field| match object.remove(field.name) {
			None | Some(Value::Null) if field.presence.is_required() =>
				Err(SchemaError::MissingField { resource: schema.name, field: field.name }),
			None | Some(Value::Null) => Ok(FieldValue::Null),
			Some(raw) => decode_field(schema, field, raw),
		})
		.collect::<Result<Vec<_>, _>>()?;

	Ok(Record { schema, values })
}

fn decode_field(
	schema: &'static Schema,
	field: &'static FieldSpec,
	raw: Value,
) -> Result<FieldValue, SchemaError> {
	match field.kind {
		FieldKind::Scalar => Ok(FieldValue::Scalar(raw)),
		FieldKind::Resource(child) => materialize(raw, child).map(FieldValue::Resource),
		FieldKind::Enum(descriptor) =>
			descriptor.decode(&raw).map(FieldValue::Enum).ok_or_else(|| {
				SchemaError::UnknownEnumValue {
					enumeration: descriptor.name,
					field: field.name,
					value: raw.to_string(),
				}
			}),
		FieldKind::List(child) => match raw {
			Value::Array(items) => items
				.into_iter()
				.map(|item| materialize(item, child))
				.collect::<Result<Vec<_>, _>>()
				.map(FieldValue::List),
			other => Err(SchemaError::InvalidValue {
				resource: schema.name,
				field: field.name,
				reason: format!("expected an array, found {}", json_kind(&other)),
			}),
		},
	}
}

/// Renders a record as a JSON object.
///
/// Keys are sorted lexicographically at every level; null omit-if-empty fields are dropped;
/// nested resources become embedded objects and enumerations become their wire scalar.
pub fn to_value(record: &Record) -> Value {
	let entries: BTreeMap<&str, Value> = record
		.iter()
		.filter(|(field, value)| !(value.is_null() && field.presence == Presence::OmitIfEmpty))
		.map(|(field, value)| (field.name, encode_field(value)))
		.collect();

	Value::Object(entries.into_iter().map(|(key, value)| (key.to_owned(), value)).collect())
}

/// Renders a record as a compact JSON string (see [`to_value`]).
pub fn serialize(record: &Record) -> String {
	to_value(record).to_string()
}

fn encode_field(value: &FieldValue) -> Value {
	match value {
		FieldValue::Null => Value::Null,
		FieldValue::Scalar(raw) => raw.clone(),
		FieldValue::Resource(child) => to_value(child),
		FieldValue::Enum(choice) => choice.wire().map(Value::from).unwrap_or(Value::Null),
		FieldValue::List(children) => Value::Array(children.iter().map(to_value).collect()),
	}
}

fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}

/// Rust enumerations with a fixed set of wire values.
pub trait WireEnum
where
	Self: 'static + Copy,
{
	/// Static descriptor consumed by the codec.
	const DESCRIPTOR: &'static EnumDescriptor;

	/// Returns the variant declared at `index`.
	fn from_index(index: usize) -> Option<Self>;

	/// Returns the declaration index of the variant.
	fn index(self) -> usize;

	/// Returns the wire representation of the variant.
	fn wire(self) -> WireValue;

	/// Decodes a raw wire value.
	fn from_wire(raw: &Value) -> Option<Self> {
		Self::DESCRIPTOR.decode(raw).and_then(|value| Self::from_index(value.index()))
	}
}

/// Typed resources backed by a static [`Schema`].
pub trait Resource
where
	Self: Sized,
{
	/// Static schema consumed by the codec.
	const SCHEMA: &'static Schema;

	/// Builds the typed value from a record of this schema.
	fn from_record(record: Record) -> Result<Self, SchemaError>;

	/// Converts the typed value into a record of this schema.
	fn to_record(&self) -> Result<Record, SchemaError>;

	/// Materializes a raw JSON document into the typed value.
	fn materialize(raw: Value) -> Result<Self, SchemaError> {
		Self::from_record(materialize(raw, Self::SCHEMA)?)
	}

	/// Parses JSON text and materializes it.
	fn deserialize(json: &str) -> Result<Self, SchemaError> {
		let raw: Value = serde_json::from_str(json).map_err(SchemaError::InvalidJson)?;

		Self::materialize(raw)
	}

	/// Renders the value as a JSON object (see [`to_value`]).
	fn to_value(&self) -> Result<Value, SchemaError> {
		Ok(to_value(&self.to_record()?))
	}

	/// Renders the value as compact JSON text with sorted keys (see [`serialize`]).
	fn serialize(&self) -> Result<String, SchemaError> {
		Ok(serialize(&self.to_record()?))
	}
}

/// Sequential reader used by generated [`Resource::from_record`] implementations.
pub struct FieldReader {
	schema: &'static Schema,
	values: IntoIter<FieldValue>,
	position: usize,
}
impl FieldReader {
	/// Starts reading `record`, which must have been built with `schema`.
	pub fn new(record: Record, schema: &'static Schema) -> Result<Self, SchemaError> {
		if !record.schema.same_as(schema) || record.values.len() != schema.fields.len() {
			return Err(SchemaError::WrongSchema { expected: schema.name, found: record.schema.name });
		}

		Ok(Self { schema, values: record.values.into_iter(), position: 0 })
	}

	/// Reads a scalar field.
	pub fn scalar<V>(&mut self) -> Result<Option<V>, SchemaError>
	where
		V: DeserializeOwned,
	{
		match self.advance()? {
			FieldValue::Null => Ok(None),
			FieldValue::Scalar(raw) =>
				serde_json::from_value(raw).map(Some).map_err(|e| self.invalid(e.to_string())),
			_ => Err(self.invalid("expected a scalar value".into())),
		}
	}

	/// Reads a nested resource field.
	pub fn resource<R>(&mut self) -> Result<Option<R>, SchemaError>
	where
		R: Resource,
	{
		match self.advance()? {
			FieldValue::Null => Ok(None),
			FieldValue::Resource(record) => R::from_record(record).map(Some),
			_ => Err(self.invalid("expected a nested resource".into())),
		}
	}

	/// Reads an enumerated field.
	pub fn enumeration<E>(&mut self) -> Result<Option<E>, SchemaError>
	where
		E: WireEnum,
	{
		match self.advance()? {
			FieldValue::Null => Ok(None),
			FieldValue::Enum(value) if value.descriptor().name == E::DESCRIPTOR.name =>
				E::from_index(value.index())
					.map(Some)
					.ok_or_else(|| self.invalid("enumeration index out of range".into())),
			_ => Err(self.invalid(format!("expected a {} value", E::DESCRIPTOR.name))),
		}
	}

	/// Reads a list-of-resources field.
	pub fn list<R>(&mut self) -> Result<Option<Vec<R>>, SchemaError>
	where
		R: Resource,
	{
		match self.advance()? {
			FieldValue::Null => Ok(None),
			FieldValue::List(records) =>
				records.into_iter().map(R::from_record).collect::<Result<Vec<_>, _>>().map(Some),
			_ => Err(self.invalid("expected a list of resources".into())),
		}
	}

	/// Unwraps the value just read, failing when a required field is null.
	pub fn require<V>(&self, value: Option<V>) -> Result<V, SchemaError> {
		value.ok_or_else(|| SchemaError::MissingField {
			resource: self.schema.name,
			field: self.current_name(),
		})
	}

	fn advance(&mut self) -> Result<FieldValue, SchemaError> {
		let value = self.values.next().ok_or(SchemaError::WrongSchema {
			expected: self.schema.name,
			found: self.schema.name,
		})?;

		self.position += 1;

		Ok(value)
	}

	fn current_name(&self) -> &'static str {
		self.position
			.checked_sub(1)
			.and_then(|idx| self.schema.fields.get(idx))
			.map_or("<none>", |field| field.name)
	}

	fn invalid(&self, reason: String) -> SchemaError {
		SchemaError::InvalidValue { resource: self.schema.name, field: self.current_name(), reason }
	}
}

/// Sequential writer used by generated [`Resource::to_record`] implementations.
pub struct FieldWriter {
	schema: &'static Schema,
	values: Vec<FieldValue>,
}
impl FieldWriter {
	/// Starts a record for `schema`.
	pub fn new(schema: &'static Schema) -> Self {
		Self { schema, values: Vec::with_capacity(schema.fields.len()) }
	}

	/// Writes a scalar field.
	pub fn scalar<V>(&mut self, value: Option<&V>) -> Result<(), SchemaError>
	where
		V: ?Sized + Serialize,
	{
		let encoded = match value {
			None => FieldValue::Null,
			Some(value) => match serde_json::to_value(value) {
				Ok(Value::Null) => FieldValue::Null,
				Ok(raw) => FieldValue::Scalar(raw),
				Err(e) => return Err(self.invalid(e.to_string())),
			},
		};

		self.values.push(encoded);

		Ok(())
	}

	/// Writes a nested resource field.
	pub fn resource<R>(&mut self, value: Option<&R>) -> Result<(), SchemaError>
	where
		R: Resource,
	{
		let encoded = match value {
			None => FieldValue::Null,
			Some(child) => FieldValue::Resource(child.to_record()?),
		};

		self.values.push(encoded);

		Ok(())
	}

	/// Writes an enumerated field.
	pub fn enumeration<E>(&mut self, value: Option<&E>) -> Result<(), SchemaError>
	where
		E: WireEnum,
	{
		let encoded = match value {
			None => FieldValue::Null,
			Some(choice) =>
				FieldValue::Enum(EnumValue { descriptor: E::DESCRIPTOR, index: choice.index() }),
		};

		self.values.push(encoded);

		Ok(())
	}

	/// Writes a list-of-resources field.
	pub fn list<R>(&mut self, value: Option<&Vec<R>>) -> Result<(), SchemaError>
	where
		R: Resource,
	{
		let encoded = match value {
			None => FieldValue::Null,
			Some(children) => FieldValue::List(
				children.iter().map(Resource::to_record).collect::<Result<Vec<_>, _>>()?,
			),
		};

		self.values.push(encoded);

		Ok(())
	}

	/// Finishes the record.
	pub fn finish(self) -> Result<Record, SchemaError> {
		if self.values.len() != self.schema.fields.len() {
			return Err(SchemaError::WrongSchema { expected: self.schema.name, found: self.schema.name });
		}

		Ok(Record { schema: self.schema, values: self.values })
	}

	fn invalid(&self, reason: String) -> SchemaError {
		let field = self.schema.fields.get(self.values.len()).map_or("<none>", |field| field.name);

		SchemaError::InvalidValue { resource: self.schema.name, field, reason }
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	def_enum! {
		/// Test enumeration with string wire values.
		Color(str) {
			Red = "red",
			Blue = "blue",
		}
	}

	def_enum! {
		/// Test enumeration with integer wire values.
		Level(int) {
			Low = 1,
			High = 2,
		}
	}

	def_resource! {
		/// Test child resource.
		Leaf {
			label: "label" => scalar String, required;
			note: "note" => scalar String, omit;
		}
	}

	def_resource! {
		/// Test parent resource covering every field kind.
		Tree with shout_name {
			name: "name" => scalar String, required;
			count: "count" => scalar i64, optional;
			color: "color" => enumerated Color, omit;
			level: "level" => enumerated Level, optional;
			root: "root" => resource Leaf, optional;
			leaves: "leaves" => list Leaf, required;
		}
	}

	fn shout_name(object: &mut Map<String, Value>) {
		if let Some(Value::String(name)) = object.get_mut("name") {
			if name == "quiet" {
				*name = "QUIET".into();
			}
		}
	}

	fn sample() -> Value {
		json!({
			"name": "oak",
			"count": 3,
			"color": "red",
			"level": 2,
			"root": {"label": "r"},
			"leaves": [{"label": "a", "note": "n"}, {"label": "b"}],
			"undeclared": true,
		})
	}

	#[test]
	fn materialize_decodes_every_kind() {
		let tree = Tree::materialize(sample()).expect("Sample payload should materialize.");

		assert_eq!(tree.name, "oak");
		assert_eq!(tree.count, Some(3));
		assert_eq!(tree.color, Some(Color::Red));
		assert_eq!(tree.level, Some(Level::High));
		assert_eq!(tree.root, Some(Leaf { label: "r".into(), note: None }));
		assert_eq!(tree.leaves.len(), 2);
		assert_eq!(tree.leaves[0].note.as_deref(), Some("n"));
	}

	#[test]
	fn record_exposes_decoded_values() {
		let record = materialize(sample(), Tree::SCHEMA).expect("Sample payload should materialize.");

		assert!(matches!(record.get("root"), Some(FieldValue::Resource(_))));
		assert!(matches!(record.get("leaves"), Some(FieldValue::List(items)) if items.len() == 2));
		assert!(matches!(record.get("level"), Some(FieldValue::Enum(value)) if value.wire() == Some(WireValue::Int(2))));
		assert!(record.get("undeclared").is_none());
	}

	#[test]
	fn missing_required_field_names_field() {
		let err = Tree::materialize(json!({"name": "oak"})).expect_err("Missing leaves should fail.");

		assert!(matches!(err, SchemaError::MissingField { resource: "Tree", field: "leaves" }));

		let err = Tree::materialize(json!({"name": null, "leaves": []}))
			.expect_err("Null required field should fail.");

		assert!(matches!(err, SchemaError::MissingField { field: "name", .. }));
	}

	#[test]
	fn nested_missing_field_is_reported_on_child() {
		let err = Tree::materialize(json!({"name": "oak", "leaves": [{"note": "x"}]}))
			.expect_err("Leaf without label should fail.");

		assert!(matches!(err, SchemaError::MissingField { resource: "Leaf", field: "label" }));
	}

	#[test]
	fn unknown_enum_value_is_rejected() {
		let err = Tree::materialize(json!({"name": "oak", "leaves": [], "color": "green"}))
			.expect_err("Unknown color should fail.");

		match err {
			SchemaError::UnknownEnumValue { enumeration, field, value } => {
				assert_eq!(enumeration, "Color");
				assert_eq!(field, "color");
				assert_eq!(value, "\"green\"");
			},
			other => panic!("Unexpected error variant: {other:?}."),
		}

		let err = Tree::materialize(json!({"name": "oak", "leaves": [], "level": "2"}))
			.expect_err("String spelling of an integer code should fail.");

		assert!(matches!(err, SchemaError::UnknownEnumValue { enumeration: "Level", .. }));
	}

	#[test]
	fn wrong_shapes_are_rejected() {
		assert!(matches!(
			Tree::materialize(json!([1, 2])),
			Err(SchemaError::NotAnObject { resource: "Tree", found: "an array" })
		));
		assert!(matches!(
			Tree::materialize(json!({"name": "oak", "leaves": {"label": "a"}})),
			Err(SchemaError::InvalidValue { field: "leaves", .. })
		));
		assert!(matches!(
			Tree::materialize(json!({"name": "oak", "leaves": [], "count": "three"})),
			Err(SchemaError::InvalidValue { field: "count", .. })
		));
		assert!(matches!(Tree::deserialize("{oops"), Err(SchemaError::InvalidJson(_))));
	}

	#[test]
	fn normalizer_runs_before_decoding() {
		let tree = Tree::materialize(json!({"name": "quiet", "leaves": []}))
			.expect("Normalized payload should materialize.");

		assert_eq!(tree.name, "QUIET");

		let leaf = Leaf::materialize(json!({"label": "quiet"})).expect("Leaf should materialize.");

		assert_eq!(leaf.label, "quiet");
	}

	#[test]
	fn serialize_sorts_keys_and_embeds_children() {
		let tree = Tree::materialize(sample()).expect("Sample payload should materialize.");
		let text = tree.serialize().expect("Tree should serialize.");

		assert_eq!(
			text,
			r#"{"color":"red","count":3,"leaves":[{"label":"a","note":"n"},{"label":"b"}],"level":2,"name":"oak","root":{"label":"r"}}"#
		);
	}

	#[test]
	fn omission_only_applies_to_omit_if_empty_fields() {
		let tree = Tree {
			name: "bare".into(),
			count: None,
			color: None,
			level: None,
			root: None,
			leaves: Vec::new(),
		};
		let value = tree.to_value().expect("Bare tree should serialize.");
		let object = value.as_object().expect("Serialized tree should be an object.");

		assert!(!object.contains_key("color"));
		assert_eq!(object.get("count"), Some(&Value::Null));
		assert_eq!(object.get("root"), Some(&Value::Null));
		assert_eq!(object.get("leaves"), Some(&json!([])));
	}

	#[test]
	fn serialized_output_materializes_to_equal_value() {
		let tree = Tree::materialize(sample()).expect("Sample payload should materialize.");
		let restored = Tree::deserialize(&tree.serialize().expect("Tree should serialize."))
			.expect("Serialized tree should materialize.");

		assert_eq!(restored, tree);
		assert_eq!(
			restored.to_record().expect("Record conversion should succeed."),
			materialize(sample(), Tree::SCHEMA).expect("Sample payload should materialize.")
		);
	}

	#[test]
	fn records_of_other_schemas_are_refused() {
		let record = materialize(json!({"label": "x"}), Leaf::SCHEMA).expect("Leaf should materialize.");

		assert!(matches!(
			Tree::from_record(record),
			Err(SchemaError::WrongSchema { expected: "Tree", found: "Leaf" })
		));
	}

	#[test]
	fn wire_enums_round_trip_through_descriptor() {
		for color in Color::ALL {
			assert_eq!(Color::from_wire(&Value::from(color.wire())), Some(*color));
		}

		assert_eq!(Level::High.to_string(), "2");
		assert_eq!(Color::Blue.to_string(), "blue");
		assert_eq!(Color::from_wire(&json!("purple")), None);
	}

	#[test]
	fn schemas_validate() {
		Tree::SCHEMA.validate().expect("Test schema should be valid.");

		assert!(Tree::SCHEMA.field("leaves").is_some());
		assert!(Tree::SCHEMA.field("missing").is_none());
	}
}
