//! Package name validation.
//!
//! Implements the npm package naming rules. A name is only acceptable for a
//! new project when it produces neither errors nor warnings, so both are
//! reported as problems: errors first, then warnings, each in rule order.

use crate::domain::error::DomainError;

/// Names that can never be published.
const BLACKLISTED_NAMES: &[&str] = &["node_modules", "favicon.ico"];

/// Node.js core module names; shadowing them is discouraged.
const CORE_MODULE_NAMES: &[&str] = &[
    "assert",
    "async_hooks",
    "buffer",
    "child_process",
    "cluster",
    "console",
    "constants",
    "crypto",
    "dgram",
    "dns",
    "domain",
    "events",
    "fs",
    "http",
    "http2",
    "https",
    "inspector",
    "module",
    "net",
    "os",
    "path",
    "perf_hooks",
    "process",
    "punycode",
    "querystring",
    "readline",
    "repl",
    "stream",
    "string_decoder",
    "sys",
    "timers",
    "tls",
    "trace_events",
    "tty",
    "url",
    "util",
    "v8",
    "vm",
    "wasi",
    "worker_threads",
    "zlib",
];

const MAX_NAME_LENGTH: usize = 214;

/// Characters no longer allowed in the unscoped part of a name.
const SPECIAL_CHARACTERS: &[char] = &['~', '\'', '!', '(', ')', '*'];

/// Outcome of [`NameValidator::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameValidation {
    Valid,
    Invalid { problems: Vec<String> },
}

impl NameValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Every problem found, empty when valid.
    pub fn problems(&self) -> &[String] {
        match self {
            Self::Valid => &[],
            Self::Invalid { problems } => problems,
        }
    }

    /// Convert into a domain result for `name`.
    pub fn into_result(self, name: &str) -> Result<(), DomainError> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid { problems } => Err(DomainError::InvalidProjectName {
                name: name.to_owned(),
                problems,
            }),
        }
    }
}

/// Checks proposed project names against the package naming rules.
///
/// Pure and deterministic: no I/O, no state.
pub struct NameValidator;

impl NameValidator {
    pub fn validate(name: &str) -> NameValidation {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if name.is_empty() {
            errors.push("name length must be greater than zero".to_owned());
        }
        if name.starts_with('.') {
            errors.push("name cannot start with a period".to_owned());
        }
        if name.starts_with('_') {
            errors.push("name cannot start with an underscore".to_owned());
        }
        if name.trim() != name {
            errors.push("name cannot contain leading or trailing spaces".to_owned());
        }

        let lowered = name.to_lowercase();
        for blacklisted in BLACKLISTED_NAMES {
            if lowered == *blacklisted {
                errors.push(format!("{blacklisted} is a blacklisted name"));
            }
        }
        for core_module in CORE_MODULE_NAMES {
            if lowered == *core_module {
                warnings.push(format!("{core_module} is a core module name"));
            }
        }

        if name.chars().count() > MAX_NAME_LENGTH {
            warnings.push(format!(
                "name can no longer contain more than {MAX_NAME_LENGTH} characters"
            ));
        }
        if lowered != name {
            warnings.push("name can no longer contain capital letters".to_owned());
        }

        let unscoped = name.rsplit('/').next().unwrap_or(name);
        if unscoped.contains(SPECIAL_CHARACTERS) {
            let problem = "name can no longer contain special characters (\"~'!()*\")";
            warnings.push(problem.to_owned());
        }

        if !is_url_safe(name) && !is_url_safe_scoped(name) {
            errors.push("name can only contain URL-friendly characters".to_owned());
        }

        errors.extend(warnings);
        if errors.is_empty() {
            NameValidation::Valid
        } else {
            NameValidation::Invalid { problems: errors }
        }
    }
}

/// `true` when URI component encoding would leave `s` unchanged.
fn is_url_safe(s: &str) -> bool {
    s.chars().all(|c| {
        c.is_ascii_alphanumeric()
            || matches!(c, '-' | '_' | '.' | '!' | '~' | '*' | '\'' | '(' | ')')
    })
}

/// Accepts `@scope/name` when both halves are URL-safe on their own.
fn is_url_safe_scoped(name: &str) -> bool {
    let Some(rest) = name.strip_prefix('@') else {
        return false;
    };
    match rest.split_once('/') {
        Some((scope, package)) => {
            !scope.is_empty()
                && !package.is_empty()
                && !package.contains('/')
                && is_url_safe(scope)
                && is_url_safe(package)
        }
        None => false,
    }
}
