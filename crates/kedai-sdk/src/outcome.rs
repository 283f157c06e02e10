//! Result of a single catalog fetch.

use kedai_data::FetchError;

/// What came back from one request to the catalog.
///
/// `NotFound` is split out from other failures because an unknown product
/// id is an ordinary answer, not a fault.
#[derive(Debug)]
pub enum FetchOutcome<T> {
    /// The server answered 2xx with a decodable body.
    Found(T),
    /// The server answered 404.
    NotFound,
    /// Transport failure, any other status, or an undecodable body.
    NetworkError(FetchError),
}

impl<T> FetchOutcome<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, FetchOutcome::Found(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchOutcome::NotFound)
    }

    /// The value, discarding any failure.
    pub fn found(self) -> Option<T> {
        match self {
            FetchOutcome::Found(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_found(&self) -> Option<&T> {
        match self {
            FetchOutcome::Found(value) => Some(value),
            _ => None,
        }
    }

    /// The failure, if this is a `NetworkError`.
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            FetchOutcome::NetworkError(e) => Some(e),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchOutcome<U> {
        match self {
            FetchOutcome::Found(value) => FetchOutcome::Found(f(value)),
            FetchOutcome::NotFound => FetchOutcome::NotFound,
            FetchOutcome::NetworkError(e) => FetchOutcome::NetworkError(e),
        }
    }
}

impl<T> From<Result<T, FetchError>> for FetchOutcome<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => FetchOutcome::Found(value),
            Err(e) if e.is_not_found() => FetchOutcome::NotFound,
            Err(e) => FetchOutcome::NetworkError(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_is_found() {
        let outcome: FetchOutcome<u32> = Ok(7).into();
        assert!(outcome.is_found());
        assert_eq!(outcome.as_found(), Some(&7));
        assert_eq!(outcome.map(|v| v * 2).found(), Some(14));
    }

    #[test]
    fn test_404_is_not_found() {
        let outcome: FetchOutcome<u32> = Err(FetchError::HttpError {
            status: 404,
            message: "Product with id 'invalidId' not found".to_string(),
        })
        .into();
        assert!(outcome.is_not_found());
        assert!(outcome.error().is_none());
        assert_eq!(outcome.found(), None);
    }

    #[test]
    fn test_other_failures_keep_reason() {
        let outcome: FetchOutcome<u32> = Err(FetchError::HttpError {
            status: 503,
            message: "upstream down".to_string(),
        })
        .into();
        let err = outcome.error().unwrap();
        assert_eq!(err.status(), Some(503));
        assert!(!outcome.is_found());

        let outcome: FetchOutcome<u32> =
            Err(FetchError::RequestError("connection refused".to_string())).into();
        assert!(matches!(outcome, FetchOutcome::NetworkError(FetchError::RequestError(_))));
    }
}
