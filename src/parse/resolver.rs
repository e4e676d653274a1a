use crate::oracle::{TypeInfo, TypeOracle};
use crate::parse::index::ImportIndex;
use serde::Serialize;

/// How a candidate name was derived from the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Via {
    /// The query was already dotted and is looked up verbatim
    Qualified,
    /// A single-type import whose last segment equals the query
    Exact { import: String, line: Option<usize> },
    /// `prefix + query` for an on-demand import, package or the implicit root
    Wildcard { prefix: String },
}

/// One fully-qualified name to try, in resolution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub name: String,
    pub via: Via,
}

/// A query that resolved to a known type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedType {
    pub query: String,
    pub fqn: String,
    pub info: TypeInfo,
    pub via: Via,
}

/// Normalize a raw selection into a lookup query.
///
/// Surrounding whitespace is dropped; dotted names also lose internal
/// whitespace since selections may span `java.util.\n    List`.
pub fn normalize_query(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.contains('.') {
        trimmed.chars().filter(|c| !c.is_whitespace()).collect()
    } else {
        trimmed.to_string()
    }
}

/// Ordered list of fully-qualified names to try for `query`.
///
/// A dotted query yields only itself; imports are not consulted and
/// `Outer.Inner` is never expanded against them. A simple name yields
/// every matching exact import, then every wildcard prefix, each in
/// source order.
pub fn candidates(query: &str, index: &ImportIndex) -> Vec<Candidate> {
    let query = normalize_query(query);
    if query.is_empty() {
        return vec![];
    }

    if query.contains('.') {
        return vec![Candidate {
            name: query,
            via: Via::Qualified,
        }];
    }

    let exact = index
        .exact
        .iter()
        .filter(|decl| decl.last_segment() == query)
        .map(|decl| Candidate {
            name: decl.path.clone(),
            via: Via::Exact {
                import: decl.path.clone(),
                line: decl.line,
            },
        });

    let wildcard = index.wildcard.iter().filter_map(|decl| {
        let prefix = decl.wildcard_prefix()?;
        Some(Candidate {
            name: format!("{prefix}{query}"),
            via: Via::Wildcard {
                prefix: prefix.to_string(),
            },
        })
    });

    exact.chain(wildcard).collect()
}

/// Resolve `query` against `index`, confirming each candidate with `oracle`.
///
/// The first confirmed candidate wins. An exact import that cannot be
/// confirmed does not end the search; later exact imports and then the
/// wildcards are still tried.
pub fn resolve(query: &str, index: &ImportIndex, oracle: &dyn TypeOracle) -> Option<ResolvedType> {
    let normalized = normalize_query(query);
    for candidate in candidates(&normalized, index) {
        match oracle.confirm(&candidate.name) {
            Some(info) => {
                return Some(ResolvedType {
                    query: normalized,
                    fqn: info.canonical_name(),
                    info,
                    via: candidate.via,
                });
            }
            None => tracing::debug!(candidate = %candidate.name, "candidate not confirmed"),
        }
    }
    None
}
