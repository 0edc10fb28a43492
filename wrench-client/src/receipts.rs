//! Receipt backend endpoints

use crate::{ClientError, ClientResult, HttpClient};
use shared::ApiResponse;
use shared::dto::ReceiptDto;
use shared::models::RepairRecord;
use tokio_util::sync::CancellationToken;

impl HttpClient {
    // ========== Receipt API ==========

    /// List receipts not yet picked up by any engineer
    pub async fn list_unprocessed_receipts(
        &self,
        cancel: &CancellationToken,
    ) -> ClientResult<Vec<RepairRecord>> {
        let dtos = self
            .get::<ApiResponse<Vec<ReceiptDto>>>("api/receipts/unprocessed", cancel)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing receipt list".to_string()))?;

        Ok(dtos.into_iter().map(RepairRecord::from).collect())
    }

    /// List receipts assigned to the logged-in engineer
    pub async fn list_my_receipts(
        &self,
        cancel: &CancellationToken,
    ) -> ClientResult<Vec<RepairRecord>> {
        let dtos = self
            .get::<ApiResponse<Vec<ReceiptDto>>>("api/receipts/mine", cancel)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing receipt list".to_string()))?;

        Ok(dtos.into_iter().map(RepairRecord::from).collect())
    }

    /// Fetch one receipt by id
    pub async fn receipt_detail(
        &self,
        receipt_id: &str,
        cancel: &CancellationToken,
    ) -> ClientResult<RepairRecord> {
        let dto = self
            .get::<ApiResponse<ReceiptDto>>(&format!("api/receipts/{receipt_id}"), cancel)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing receipt data".to_string()))?;

        Ok(RepairRecord::from(dto))
    }
}
