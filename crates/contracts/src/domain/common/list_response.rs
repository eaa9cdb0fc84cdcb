use serde::{Deserialize, Serialize};

/// List endpoint payload.
///
/// Paginated endpoints answer `{count, next, previous, results}`; an
/// unpaginated one answers a bare array. Both are accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Paginated { count: usize, results: Vec<T> },
    Bare(Vec<T>),
}

impl<T> ListResponse<T> {
    /// Rows plus the total count reported by the server
    /// (array length for bare arrays).
    pub fn into_parts(self) -> (Vec<T>, usize) {
        match self {
            ListResponse::Paginated { count, results } => (results, count),
            ListResponse::Bare(rows) => {
                let count = rows.len();
                (rows, count)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_paginated_shape() {
        let json = r#"{"count": 120, "next": "http://x/?page=2", "previous": null, "results": [1, 2, 3]}"#;
        let parsed: ListResponse<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.into_parts(), (vec![1, 2, 3], 120));
    }

    #[test]
    fn accepts_bare_array() {
        let parsed: ListResponse<u32> = serde_json::from_str("[4, 5]").unwrap();
        assert_eq!(parsed.into_parts(), (vec![4, 5], 2));
    }
}
