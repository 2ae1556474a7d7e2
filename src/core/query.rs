//! Declarative query slots.
//!
//! A slot is told on every state change whether its query is enabled and with
//! which parameters. A disabled slot exposes no data. The last successful
//! result is kept until different parameters supersede it, so toggling a
//! query off and on again restores its previous result without a request.

use super::navigation::QueryPlan;
use crate::Result;

/// Visible status of a query slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryStatus {
    /// Disabled; nothing to show.
    Idle,
    Loading,
    Ready,
    /// The last fetch for the current parameters failed.
    Failed(String),
}

/// One upstream query with a single-entry result cache.
#[derive(Debug)]
pub struct Query<P, T> {
    cached: Option<(P, T)>,
    current: Option<P>,
    status: QueryStatus,
}

impl<P, T> Default for Query<P, T> {
    fn default() -> Self {
        Self {
            cached: None,
            current: None,
            status: QueryStatus::Idle,
        }
    }
}

impl<P, T> Query<P, T>
where
    P: Clone + Eq,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a plan. Returns the parameters that need fetching, if any.
    pub fn sync(&mut self, plan: QueryPlan<P>) -> Option<P> {
        if !plan.enabled {
            self.current = None;
            self.status = QueryStatus::Idle;
            return None;
        }

        if self.current.as_ref() == Some(&plan.params) && self.status == QueryStatus::Loading {
            return None;
        }

        self.current = Some(plan.params.clone());
        if self.cached_for(&plan.params).is_some() {
            self.status = QueryStatus::Ready;
            None
        } else {
            // New parameters supersede whatever was fetched before
            self.cached = None;
            self.status = QueryStatus::Loading;
            Some(plan.params)
        }
    }

    /// Record the outcome of a fetch for `params`.
    ///
    /// Outcomes for parameters that are no longer current are dropped and
    /// leave the visible status alone.
    pub fn finish(&mut self, params: P, outcome: Result<T>) {
        let is_current = self.current.as_ref() == Some(&params);
        match outcome {
            Ok(value) => {
                if is_current {
                    self.cached = Some((params, value));
                    self.status = QueryStatus::Ready;
                } else {
                    tracing::debug!("Dropping superseded query result");
                }
            }
            Err(e) => {
                tracing::warn!("Catalog query failed: {}", e);
                if is_current {
                    self.status = QueryStatus::Failed(e.to_string());
                }
            }
        }
    }

    /// Data for the current parameters, if enabled and fetched.
    pub fn data(&self) -> Option<&T> {
        self.current.as_ref().and_then(|p| self.cached_for(p))
    }

    fn cached_for(&self, params: &P) -> Option<&T> {
        match &self.cached {
            Some((key, value)) if key == params => Some(value),
            _ => None,
        }
    }

    pub fn status(&self) -> &QueryStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == QueryStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            QueryStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn plan(enabled: bool, params: &str) -> QueryPlan<String> {
        QueryPlan {
            enabled,
            params: params.to_string(),
        }
    }

    #[test]
    fn test_disabled_query_never_fetches() {
        let mut query: Query<String, u32> = Query::new();
        assert_eq!(query.sync(plan(false, "")), None);
        assert_eq!(query.status(), &QueryStatus::Idle);
        assert!(query.data().is_none());
    }

    #[test]
    fn test_fetch_then_serve_from_cache() {
        let mut query: Query<String, u32> = Query::new();
        assert_eq!(query.sync(plan(true, "heat")), Some("heat".to_string()));
        assert!(query.is_loading());
        // A second sync while loading does not issue another fetch
        assert_eq!(query.sync(plan(true, "heat")), None);

        query.finish("heat".to_string(), Ok(3));
        assert_eq!(query.data(), Some(&3));

        // Disabling hides the data, re-enabling serves it without a fetch
        query.sync(plan(false, "heat"));
        assert!(query.data().is_none());
        assert_eq!(query.sync(plan(true, "heat")), None);
        assert_eq!(query.data(), Some(&3));
        assert_eq!(query.status(), &QueryStatus::Ready);
    }

    #[test]
    fn test_failure_is_not_cached() {
        let mut query: Query<String, u32> = Query::new();
        query.sync(plan(true, "heat"));
        query.finish("heat".to_string(), Err(Error::CatalogStatus(502)));
        assert!(query.error().is_some());
        assert!(query.data().is_none());

        query.sync(plan(false, "heat"));
        assert_eq!(query.sync(plan(true, "heat")), Some("heat".to_string()));
    }

    #[test]
    fn test_outdated_outcome_keeps_status() {
        let mut query: Query<String, u32> = Query::new();
        query.sync(plan(true, "heat"));
        query.sync(plan(true, "alien"));
        query.finish("heat".to_string(), Ok(1));
        assert!(query.is_loading());
        assert!(query.data().is_none());

        query.finish("alien".to_string(), Ok(2));
        assert_eq!(query.data(), Some(&2));

        // The superseded result was not kept
        assert_eq!(query.sync(plan(true, "heat")), Some("heat".to_string()));
    }

    #[test]
    fn test_new_params_replace_cached_result() {
        let mut query: Query<String, u32> = Query::new();
        for n in 0..1000 {
            let term = format!("term {}", n);
            assert_eq!(query.sync(plan(true, &term)), Some(term.clone()));
            query.finish(term, Ok(n));
        }

        // Only the latest result survives a disable/enable cycle
        query.sync(plan(false, "term 999"));
        assert_eq!(query.sync(plan(true, "term 999")), None);
        assert_eq!(query.data(), Some(&999));
        assert!(matches!(&query.cached, Some((key, _)) if key == "term 999"));

        // Earlier terms have to be fetched again
        assert_eq!(query.sync(plan(true, "term 0")), Some("term 0".to_string()));
        assert!(query.cached.is_none());
    }
}
