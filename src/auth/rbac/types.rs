//! RBAC type definitions

use crate::core::models::user::UserRole;
use crate::utils::error::{AccademiaError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Key of a permission condition or a context attribute
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConditionKey {
    /// The target record belongs to the caller
    Own,
    /// The target record is publicly visible
    Public,
    /// Any other attribute
    Custom(String),
}

impl ConditionKey {
    pub fn as_str(&self) -> &str {
        match self {
            ConditionKey::Own => "own",
            ConditionKey::Public => "public",
            ConditionKey::Custom(key) => key,
        }
    }
}

impl From<&str> for ConditionKey {
    fn from(key: &str) -> Self {
        match key {
            "own" => ConditionKey::Own,
            "public" => ConditionKey::Public,
            other => ConditionKey::Custom(other.to_string()),
        }
    }
}

impl From<String> for ConditionKey {
    fn from(key: String) -> Self {
        ConditionKey::from(key.as_str())
    }
}

impl From<ConditionKey> for String {
    fn from(key: ConditionKey) -> Self {
        key.as_str().to_string()
    }
}

/// Expected attribute values of a conditional permission
pub type Conditions = BTreeMap<ConditionKey, Value>;

/// Caller-supplied facts about the current request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PermissionContext {
    #[serde(flatten)]
    attributes: BTreeMap<ConditionKey, Value>,
}

impl PermissionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for a request on the caller's own record
    pub fn own(is_own: bool) -> Self {
        Self::new().with(ConditionKey::Own, is_own)
    }

    /// Context for a request on a public or restricted record
    pub fn public(is_public: bool) -> Self {
        Self::new().with(ConditionKey::Public, is_public)
    }

    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<ConditionKey>,
        V: Into<Value>,
    {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &ConditionKey) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

/// A single grant: `resource.action`, optionally narrowed by conditions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    /// Resource name or `*`
    pub resource: String,
    /// Action name or `*`
    pub action: String,
    /// Conditions the caller context must satisfy
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub conditions: Conditions,
}

impl Permission {
    pub fn new<R: Into<String>, A: Into<String>>(resource: R, action: A) -> Self {
        Self {
            resource: resource.into(),
            action: action.into(),
            conditions: Conditions::new(),
        }
    }

    /// Match-all grant
    pub fn all() -> Self {
        Self::new("*", "*")
    }

    pub fn with_condition<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<ConditionKey>,
        V: Into<Value>,
    {
        self.conditions.insert(key.into(), value.into());
        self
    }

    /// Canonical name, e.g. `profile.read:own` or `reports.read:department=safety`.
    ///
    /// String values that would read back as another type are quoted
    /// (`reports.read:level="5"`), so `parse(name())` yields the same permission for
    /// string, bool and number conditions.
    pub fn name(&self) -> String {
        self.to_string()
    }

    /// Parse a permission name
    pub fn parse(name: &str) -> Result<Self> {
        let name = name.trim();
        if name == "*" {
            return Ok(Self::all());
        }

        let (head, conditions) = match name.split_once(':') {
            Some((head, conditions)) => (head, Some(conditions)),
            None => (name, None),
        };

        let (resource, action) = head.split_once('.').ok_or_else(|| {
            AccademiaError::validation(format!("Permission must be resource.action: {}", name))
        })?;
        validate_segment(resource, name)?;
        validate_segment(action, name)?;

        let mut permission = Self::new(resource, action);
        if let Some(conditions) = conditions {
            for part in split_conditions(conditions) {
                let part = part.trim();
                if part.is_empty() {
                    return Err(AccademiaError::validation(format!(
                        "Empty condition in permission: {}",
                        name
                    )));
                }
                let (key, value) = match part.split_once('=') {
                    Some((key, value)) => (key.trim(), parse_literal(value.trim())),
                    None => (part, Value::Bool(true)),
                };
                if key.is_empty() || !key.chars().all(is_name_char) {
                    return Err(AccademiaError::validation(format!(
                        "Invalid condition key in permission: {}",
                        name
                    )));
                }
                permission.conditions.insert(ConditionKey::from(key), value);
            }
        }

        Ok(permission)
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

fn validate_segment(segment: &str, name: &str) -> Result<()> {
    let valid = segment == "*" || (!segment.is_empty() && segment.chars().all(is_name_char));
    if valid {
        Ok(())
    } else {
        Err(AccademiaError::validation(format!(
            "Invalid permission name: {}",
            name
        )))
    }
}

/// Split a condition list on commas outside double-quoted values
fn split_conditions(conditions: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut quoted = false;
    let mut escaped = false;
    for (index, c) in conditions.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' if quoted => escaped = true,
            '"' => quoted = !quoted,
            ',' if !quoted => {
                parts.push(&conditions[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    parts.push(&conditions[start..]);
    parts
}

/// Whether a string value must be quoted to read back as the same string
fn needs_quotes(text: &str) -> bool {
    text.is_empty()
        || text.trim() != text
        || text.contains([',', '"', '\\'])
        || !matches!(parse_literal(text), Value::String(_))
}

fn parse_literal(raw: &str) -> Value {
    let quoted = raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"');
    if let Some(Ok(text)) = quoted.then(|| serde_json::from_str::<String>(raw)) {
        return Value::String(text);
    }
    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => {
            if let Ok(number) = raw.parse::<i64>() {
                Value::from(number)
            } else if let Ok(number) = raw.parse::<f64>() {
                serde_json::Number::from_f64(number)
                    .map(Value::Number)
                    .unwrap_or_else(|| Value::String(raw.to_string()))
            } else {
                Value::String(raw.to_string())
            }
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.resource, self.action)?;
        for (index, (key, value)) in self.conditions.iter().enumerate() {
            f.write_str(if index == 0 { ":" } else { "," })?;
            match value {
                Value::Bool(true) => write!(f, "{}", key.as_str())?,
                Value::String(text) if needs_quotes(text) => {
                    write!(f, "{}={}", key.as_str(), Value::String(text.clone()))?
                }
                Value::String(text) => write!(f, "{}={}", key.as_str(), text)?,
                other => write!(f, "{}={}", key.as_str(), other)?,
            }
        }
        Ok(())
    }
}

impl FromStr for Permission {
    type Err = AccademiaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Static definition of a role
#[derive(Debug, Clone)]
pub struct RoleDefinition {
    pub role: UserRole,
    pub level: i32,
    pub permissions: Vec<Permission>,
    /// Roles whose grants are also granted to this role
    pub inherits_from: Vec<UserRole>,
}

impl RoleDefinition {
    pub fn new(role: UserRole, permissions: Vec<Permission>) -> Self {
        Self {
            role,
            level: role.level(),
            permissions,
            inherits_from: Vec::new(),
        }
    }

    pub fn inheriting(mut self, parents: Vec<UserRole>) -> Self {
        self.inherits_from = parents;
        self
    }
}

/// Permission check result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PermissionCheck {
    /// Whether permission is granted
    pub granted: bool,
    /// Role that was checked
    pub role: String,
    /// Name of the grant that matched
    pub granted_by: Option<String>,
    /// Reason for denial (if not granted)
    pub denial_reason: Option<String>,
}
