use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    trends::value_objects::{TrendFilter, TrendReport},
};

pub trait TrendService: Send + Sync {
    /// Recomputes records, statistics and classification from the session's current logs.
    fn trend_report(
        &self,
        filter: TrendFilter,
    ) -> impl Future<Output = Result<TrendReport, CoreError>> + Send;
}
