//! HTTP request handlers.

use super::negotiate::negotiate;
use crate::aggregator::StatisticsReport;
use crate::parser::parse_users;
use crate::utils::error::ApiError;
use axum::body::Bytes;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use log::{debug, info};
use std::time::Instant;

/// `POST /users/statistics`
///
/// Negotiates the response format first, so an unacceptable `Accept`
/// header is answered with 406 regardless of the body. Then decodes the
/// `results` array, computes the report and renders it.
///
/// # Errors
/// * 406 - no supported format admitted by `Accept`
/// * 400 - payload without a `results` array, or a batch the statistics
///   cannot be computed over (e.g. empty)
pub async fn users_statistics(headers: HeaderMap, body: Bytes) -> Result<Response, ApiError> {
    let started = Instant::now();

    let accept = headers.get(header::ACCEPT).and_then(|v| v.to_str().ok());
    let format = negotiate(accept).ok_or(ApiError::NotAcceptable)?;

    debug!("Received {} byte payload, responding as {:?}", body.len(), format);

    let users = parse_users(&body)?;
    let report = StatisticsReport::compute(&users)?;
    let rendered = format.render(&report)?;

    info!(
        "Computed statistics for {} users in {:?}",
        report.user_count,
        started.elapsed()
    );

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, format.content_type())],
        rendered,
    )
        .into_response())
}
