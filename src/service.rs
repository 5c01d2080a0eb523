//! # Print Service Client
//!
//! HTTP exchanges with the local print service:
//!
//! | Call | Request | Success |
//! |------|---------|---------|
//! | [`PrintService::print`] | `POST /print` with a [`PrintRequest`] | any 2xx |
//! | [`PrintService::print_raw`] | `POST /print` with a [`RawPrintRequest`], byte-for-byte | any 2xx |
//! | [`PrintService::printers`] | `GET /printers` | 2xx with a JSON string array |
//!
//! Each call makes exactly one attempt. Retrying is up to the caller.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, Response};
use std::sync::OnceLock;
use tracing::{debug, info, warn};

use crate::config::ServiceConfig;
use crate::error::{RelayError, Result, ServiceFailure};
use crate::request::{PrintOutcome, PrintRequest, RawPrintRequest};

/// Client for the default configuration, built on first use and shared by
/// every [`PrintService::default`].
static DEFAULT_CLIENT: OnceLock<Client> = OnceLock::new();

fn default_client(config: &ServiceConfig) -> Client {
    DEFAULT_CLIENT
        .get_or_init(|| {
            Client::builder()
                .user_agent(config.user_agent.clone())
                .build()
                .expect("failed to build HTTP client")
        })
        .clone()
}

/// Handle to a print service endpoint.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct PrintService {
    client: Client,
    config: ServiceConfig,
}

impl Default for PrintService {
    /// Service at `http://localhost:8000` with no timeout.
    fn default() -> Self {
        let config = ServiceConfig::default();
        let client = default_client(&config);
        Self { client, config }
    }
}

impl PrintService {
    /// Create a client for the configured service.
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| RelayError::Config(format!("HTTP client error: {}", e)))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Submit a print request.
    ///
    /// Transport errors and non-success statuses both yield
    /// [`RelayError::PrintFailed`].
    pub async fn print(&self, request: &PrintRequest) -> Result<PrintOutcome> {
        let url = self.config.endpoint("print")?;
        info!(
            printer = %request.printer,
            actions = request.payload.len(),
            %url,
            "submitting print job"
        );
        self.submit(&request.printer, self.client.post(url).json(request)).await
    }

    /// Submit a prepared request body exactly as it was written.
    ///
    /// Nothing beyond the envelope check in [`RawPrintRequest::parse`] is
    /// applied: no defaults are filled in and no values are range-checked.
    pub async fn print_raw(&self, request: &RawPrintRequest) -> Result<PrintOutcome> {
        let url = self.config.endpoint("print")?;
        info!(
            printer = %request.printer(),
            actions = request.kinds().len(),
            %url,
            "submitting prepared print job"
        );
        let builder = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(request.as_str().to_owned());
        self.submit(request.printer(), builder).await
    }

    async fn submit(&self, printer: &str, builder: RequestBuilder) -> Result<PrintOutcome> {
        match accept(builder.send().await).await {
            Ok(_) => {
                info!(printer = %printer, "print job accepted");
                Ok(PrintOutcome::succeeded())
            }
            Err(failure) => {
                warn!(printer = %printer, error = %failure, "print job failed");
                Err(RelayError::PrintFailed(failure))
            }
        }
    }

    /// Fetch the names of the printers the service knows about, unmodified.
    pub async fn printers(&self) -> Result<Vec<String>> {
        let url = self.config.endpoint("printers")?;
        debug!(%url, "requesting printer list");

        let result = match accept(self.client.get(url).send().await).await {
            Ok(response) => response.json::<Vec<String>>().await.map_err(ServiceFailure::from),
            Err(failure) => Err(failure),
        };

        match result {
            Ok(printers) => {
                info!(count = printers.len(), "received printer list");
                Ok(printers)
            }
            Err(failure) => {
                warn!(error = %failure, "printer list request failed");
                Err(RelayError::PrinterListFailed(failure))
            }
        }
    }
}

/// Turn a send result into a successful response or the reason it is not one.
async fn accept(sent: reqwest::Result<Response>) -> std::result::Result<Response, ServiceFailure> {
    let response = sent?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    // The body is diagnostic only; an unreadable body still means rejection.
    let body = response.text().await.unwrap_or_default();
    Err(ServiceFailure::Rejected { status, body })
}
