use crate::dto::prelude::*;

///
/// Page
/// Generic pagination envelope
///

#[derive(CandidType, Clone, Debug, Deserialize, Serialize)]
pub struct Page<T> {
    pub entries: Vec<T>,
    pub total: u64,
}

///
/// PageRequest
/// Pagination envelope to avoid passing raw integers around
///

#[derive(CandidType, Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PageRequest {
    pub limit: u64,
    pub offset: u64,
}

impl PageRequest {
    pub const MAX_LIMIT: u64 = 100;

    pub const DEFAULT: Self = Self {
        limit: 50,
        offset: 0,
    };

    #[must_use]
    pub const fn new(limit: u64, offset: u64) -> Self {
        Self { limit, offset }
    }

    /// Limit capped to [`Self::MAX_LIMIT`].
    #[must_use]
    pub const fn clamped(self) -> Self {
        let limit = if self.limit > Self::MAX_LIMIT {
            Self::MAX_LIMIT
        } else {
            self.limit
        };

        Self { limit, ..self }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_caps_limit_only() {
        assert_eq!(PageRequest::new(1_000, 7).clamped(), PageRequest::new(100, 7));
        assert_eq!(PageRequest::new(3, 0).clamped(), PageRequest::new(3, 0));
    }
}
