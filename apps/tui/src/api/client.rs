use futures::future::{BoxFuture, FutureExt};

use super::models::parse_report;
use super::query::{AccidentQuery, Region};
use super::TransportFailure;
use crate::config::ApiConfig;
use crate::domain::{AccidentReport, YearSelection};

pub type FetchFuture = BoxFuture<'static, Result<AccidentReport, TransportFailure>>;

/// Anything that can produce the hotspot report for a year.
///
/// Calling [`AccidentSource::fetch`] is the invocation: implementations
/// prepare exactly one request up front, and the returned future performs
/// that single round trip. Nothing is cached between calls.
pub trait AccidentSource: Send + Sync {
    fn fetch(&self, year: YearSelection) -> FetchFuture;
}

/// [`AccidentSource`] backed by the public data portal.
#[derive(Debug, Clone)]
pub struct OpenDataClient {
    http: reqwest::Client,
    endpoint: String,
    service_key: String,
    region: Region,
}

impl OpenDataClient {
    pub fn new(config: &ApiConfig) -> Result<Self, TransportFailure> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            endpoint: config.endpoint.clone(),
            service_key: config.service_key.clone(),
            region: config.region,
        })
    }

    pub fn request_url(&self, year: YearSelection) -> String {
        let mut query = AccidentQuery::new(&self.service_key, year);
        query.region = self.region;
        query.url(&self.endpoint)
    }
}

impl AccidentSource for OpenDataClient {
    fn fetch(&self, year: YearSelection) -> FetchFuture {
        log::debug!("requesting hotspots for {year} from {}", self.endpoint);
        let request = self.http.get(self.request_url(year));

        async move {
            let response = request.send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(TransportFailure::Status(status.as_u16()));
            }

            let body = response.bytes().await?;
            parse_report(&body)
        }
        .boxed()
    }
}
