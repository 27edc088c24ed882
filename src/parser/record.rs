use serde_json::Value;

/// Read-only view over one JSON object of an ingested tree.
///
/// Every accessor resolves a missing or mistyped field to its default (empty
/// string, zero, empty list) instead of failing, so a partial record degrades
/// into an empty entity while the rest of the tree is still ingested.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    value: &'a Value,
}

static NULL: Value = Value::Null;

impl<'a> Record<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    pub fn empty() -> Record<'static> {
        Record { value: &NULL }
    }

    pub fn is_object(&self) -> bool {
        self.value.is_object()
    }

    fn field(&self, key: &str) -> Option<&'a Value> {
        self.value.as_object().and_then(|map| map.get(key))
    }

    pub fn string(&self, key: &str) -> String {
        self.field(key)
            .and_then(Value::as_str)
            .map(str::to_owned)
            .unwrap_or_default()
    }

    /// Integer field; floats are accepted only when integral.
    pub fn int(&self, key: &str) -> i64 {
        match self.field(key) {
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| {
                    n.as_f64()
                        .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                        .map(|f| f as i64)
                })
                .unwrap_or(0),
            _ => 0,
        }
    }

    /// Non-negative pixel dimension; negative or oversized values become 0.
    pub fn dimension(&self, key: &str) -> u32 {
        u32::try_from(self.int(key)).unwrap_or(0)
    }

    /// Child records of an array field. Non-object elements become empty
    /// records rather than being dropped, so element counts are preserved.
    pub fn records(&self, key: &str) -> Vec<Record<'a>> {
        match self.field(key) {
            Some(Value::Array(items)) => items.iter().map(Record::new).collect(),
            _ => Vec::new(),
        }
    }
}
