//! Order reconciliation
//!
//! Fetches the purchase-order line items already associated with a receipt
//! so the completion ledger can use them as its ordered bucket, and pushes
//! the completion detail back to the order backend.

use crate::{ClientError, ClientResult, HttpClient};
use serde::Serialize;
use shared::ApiResponse;
use shared::dto::{OrderedPartDto, PartLineDto, RepairDetailSubmission};
use shared::models::{CompletionSummary, PartLine};
use tokio_util::sync::CancellationToken;
use tracing::debug;
use uuid::Uuid;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OrderedPartsQuery<'a> {
    receipt_id: &'a str,
    vehicle_plate: &'a str,
}

/// Client for the order backend
#[derive(Clone)]
pub struct OrderReconciliationService {
    http: HttpClient,
}

impl OrderReconciliationService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Fetch the ordered-parts lines for a receipt.
    ///
    /// Line items with missing identity fields are dropped, not defaulted.
    /// A network or decode failure surfaces as an error — an empty result
    /// always means "no parts ordered", never "couldn't find out".
    pub async fn fetch_ordered_parts(
        &self,
        receipt_id: &str,
        vehicle_plate: &str,
        cancel: &CancellationToken,
    ) -> ClientResult<Vec<PartLine>> {
        let query = OrderedPartsQuery {
            receipt_id,
            vehicle_plate,
        };
        let dtos = self
            .http
            .get_query::<ApiResponse<Vec<OrderedPartDto>>, _>("api/orders/parts", &query, cancel)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing order line items".to_string()))?;

        Ok(map_ordered_parts(dtos))
    }

    /// Push a completed repair's description, cause, and extra-used parts
    /// to the order backend
    pub async fn submit_repair_detail(
        &self,
        receipt_id: &str,
        summary: &CompletionSummary,
        cancel: &CancellationToken,
    ) -> ClientResult<()> {
        let submission = RepairDetailSubmission {
            request_id: Uuid::new_v4().to_string(),
            receipt_id: receipt_id.to_string(),
            completion_date: summary.completion_date.clone(),
            repair_description: summary.repair_description.clone(),
            cause: summary.cause.clone(),
            extra_parts: summary
                .extra_lines
                .iter()
                .cloned()
                .map(PartLineDto::from)
                .collect(),
        };

        self.http
            .post::<ApiResponse<serde_json::Value>, _>(
                "api/orders/repair-detail",
                &submission,
                cancel,
            )
            .await?;
        Ok(())
    }
}

/// Map order line DTOs into part lines, dropping unusable entries
fn map_ordered_parts(dtos: Vec<OrderedPartDto>) -> Vec<PartLine> {
    let mut lines = Vec::with_capacity(dtos.len());
    let mut dropped = 0usize;
    for dto in dtos {
        match dto.into_part_line() {
            Some(line) => lines.push(line),
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        debug!(dropped, kept = lines.len(), "Dropped incomplete order line items");
    }
    lines
}
