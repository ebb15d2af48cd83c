use async_trait::async_trait;
use crate::domain::entities::{CommandType, LookupResult};

/// Term lookup service
///
/// Implementations issue exactly one request per call and never retry.
/// Every outcome, including transport failures, is folded into a
/// [`LookupResult`].
#[async_trait]
pub trait TermLookup: Send + Sync {
    async fn fetch(&self, term: &str, kind: CommandType) -> LookupResult;
}
