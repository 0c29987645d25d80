//! Synchronous field rules. Each check returns the first failing rule's
//! message, in a fixed order: required, length bounds, caller pattern, then
//! the kind-specific shape checks. Availability is a separate asynchronous
//! concern layered on top by [`super::field`].

/// Semantic kind of a validated field, driving the kind-specific checks and
/// the wording of generic messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Username,
    Email,
    Password,
}

impl FieldKind {
    fn label(self) -> &'static str {
        match self {
            FieldKind::Username => "Username",
            FieldKind::Email => "Email",
            FieldKind::Password => "Password",
        }
    }

    fn name(self) -> &'static str {
        match self {
            FieldKind::Username => "username",
            FieldKind::Email => "email",
            FieldKind::Password => "password",
        }
    }
}

/// Caller-supplied shape restriction, checked after the length bounds.
#[derive(Clone, Copy)]
pub struct PatternRule {
    pub matches: fn(&str) -> bool,
}

/// Rule set for one field. Defaults come from [`FieldRules::new`]; call sites
/// override with struct update syntax.
#[derive(Clone, Copy)]
pub struct FieldRules {
    pub kind: FieldKind,
    pub required: bool,
    pub min_length: usize,
    pub max_length: usize,
    pub pattern: Option<PatternRule>,
}

impl FieldRules {
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            required: false,
            min_length: 0,
            max_length: 100,
            pattern: None,
        }
    }
}

/// Runs the rule chain and returns the first failure, or `None` when the
/// value passes every synchronous rule.
pub fn first_error(value: &str, rules: &FieldRules) -> Option<String> {
    if rules.required && value.is_empty() {
        return Some(format!("{} is required", rules.kind.label()));
    }

    let length = value.chars().count();
    if length < rules.min_length {
        return Some(format!("Must be at least {} characters", rules.min_length));
    }
    if length > rules.max_length {
        return Some(format!("Must be less than {} characters", rules.max_length));
    }

    if let Some(pattern) = &rules.pattern {
        if !(pattern.matches)(value) {
            return Some(format!("Invalid {} format", rules.kind.name()));
        }
    }

    match rules.kind {
        FieldKind::Email if !value.is_empty() && !looks_like_email(value) => {
            Some("Please enter a valid email address".to_string())
        }
        FieldKind::Username if !value.is_empty() && !username_charset(value) => Some(
            "Username can only contain letters, numbers, underscores, and hyphens".to_string(),
        ),
        FieldKind::Password if !value.is_empty() => password_error(value).map(str::to_string),
        _ => None,
    }
}

/// Letters, digits, underscore, hyphen; nothing else.
pub fn username_charset(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Non-empty local part, one `@`, and a dotted domain, with no whitespace
/// anywhere. Deliberately loose; the server owns real address validation.
fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.contains('@') || domain.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Composition chain for passwords; the first failing class wins.
fn password_error(value: &str) -> Option<&'static str> {
    if value.chars().count() < 8 {
        return Some("Password must be at least 8 characters long");
    }
    if !value.chars().any(|c| c.is_ascii_uppercase()) {
        return Some("Password must contain at least one uppercase letter");
    }
    if !value.chars().any(|c| c.is_ascii_lowercase()) {
        return Some("Password must contain at least one lowercase letter");
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return Some("Password must contain at least one number");
    }
    if !value.chars().any(is_password_symbol) {
        return Some("Password must contain at least one special character");
    }
    None
}

fn is_password_symbol(c: char) -> bool {
    "!@#$%^&*(),.?\":{}|<>".contains(c)
}
