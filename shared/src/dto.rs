//! Backend DTOs
//!
//! Wire shapes for the receipt and order backends. Status arrives as a
//! loosely-typed string and is normalized into [`RepairStatus`] at this
//! boundary; order line payloads are Option-heavy and map into clean
//! [`PartLine`] values, dropping lines whose identity fields are missing.

use serde::{Deserialize, Serialize};

use crate::models::{PartLine, RepairRecord, RepairStatus};

/// Receipt payload as returned by the receipt backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptDto {
    pub id: String,
    pub vehicle_plate: String,
    pub owner_name: String,
    pub vehicle_model: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub request_description: String,
    pub intake_date: String,
    /// Loosely-typed status string, normalized on mapping
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub manager: Option<String>,
}

impl From<ReceiptDto> for RepairRecord {
    fn from(dto: ReceiptDto) -> Self {
        RepairRecord {
            id: dto.id,
            vehicle_plate: dto.vehicle_plate,
            owner_name: dto.owner_name,
            vehicle_model: dto.vehicle_model,
            phone_number: dto.phone_number,
            request_description: dto.request_description,
            intake_date: dto.intake_date,
            manager: dto.manager,
            status: RepairStatus::from_backend(&dto.status),
            completion: None,
            lead_time_days: None,
        }
    }
}

/// Purchase-order line item as returned by the order backend
///
/// Every field is optional on the wire; [`OrderedPartDto::into_part_line`]
/// decides which lines are usable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderedPartDto {
    #[serde(default)]
    pub part_code: Option<String>,
    #[serde(default)]
    pub part_name: Option<String>,
    #[serde(default)]
    pub quantity: Option<i32>,
    #[serde(default)]
    pub unit_price: Option<f64>,
}

impl OrderedPartDto {
    /// Map into a [`PartLine`], or `None` when the line is unusable.
    ///
    /// A line missing its part code, name, quantity, or unit price is
    /// dropped rather than defaulted; fabricating a zero/empty placeholder
    /// would corrupt the completion totals.
    pub fn into_part_line(self) -> Option<PartLine> {
        let part_code = self.part_code.map(|c| c.trim().to_string())?;
        let part_name = self.part_name.map(|n| n.trim().to_string())?;
        if part_code.is_empty() || part_name.is_empty() {
            return None;
        }
        let quantity = self.quantity?;
        let unit_price = self.unit_price?;
        Some(PartLine {
            part_code,
            part_name,
            quantity,
            unit_price,
        })
    }
}

/// Part line in wire shape, for payloads pushed to the order backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartLineDto {
    pub part_code: String,
    pub part_name: String,
    pub quantity: i32,
    pub unit_price: f64,
}

impl From<PartLine> for PartLineDto {
    fn from(line: PartLine) -> Self {
        Self {
            part_code: line.part_code,
            part_name: line.part_name,
            quantity: line.quantity,
            unit_price: line.unit_price,
        }
    }
}

/// Payload pushed to the order backend when a repair is completed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepairDetailSubmission {
    /// Client-generated idempotency token
    pub request_id: String,
    pub receipt_id: String,
    pub completion_date: String,
    pub repair_description: String,
    pub cause: String,
    /// Extra-used parts entered at completion time
    pub extra_parts: Vec<PartLineDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_dto_maps_status_and_metadata() {
        let dto = ReceiptDto {
            id: "r-100".to_string(),
            vehicle_plate: "12가3456".to_string(),
            owner_name: "이영희".to_string(),
            vehicle_model: "Avante".to_string(),
            phone_number: "010-1234-5678".to_string(),
            request_description: "engine noise".to_string(),
            intake_date: "2025-10-01".to_string(),
            status: "수리중".to_string(),
            manager: Some("Kim".to_string()),
        };

        let record = RepairRecord::from(dto);
        assert_eq!(record.status, RepairStatus::InProgress);
        assert_eq!(record.manager.as_deref(), Some("Kim"));
        assert_eq!(record.intake_date, "2025-10-01");
        assert!(record.completion.is_none());
        assert!(record.lead_time_days.is_none());
    }

    #[test]
    fn test_receipt_dto_unknown_status_defaults() {
        let json = r#"{
            "id": "r-1",
            "vehiclePlate": "34나5678",
            "ownerName": "박민수",
            "vehicleModel": "Sonata",
            "intakeDate": "2025-10-02",
            "status": "???"
        }"#;
        let dto: ReceiptDto = serde_json::from_str(json).unwrap();
        let record = RepairRecord::from(dto);
        assert_eq!(record.status, RepairStatus::CheckedIn);
        assert_eq!(record.phone_number, "");
    }

    #[test]
    fn test_ordered_part_complete_line_maps() {
        let dto = OrderedPartDto {
            part_code: Some("BRK-01".to_string()),
            part_name: Some("brake pad".to_string()),
            quantity: Some(4),
            unit_price: Some(32000.0),
        };
        let line = dto.into_part_line().unwrap();
        assert_eq!(line.part_code, "BRK-01");
        assert_eq!(line.quantity, 4);
    }

    #[test]
    fn test_ordered_part_missing_code_dropped() {
        let dto = OrderedPartDto {
            part_code: None,
            part_name: Some("brake pad".to_string()),
            quantity: Some(4),
            unit_price: Some(32000.0),
        };
        assert!(dto.into_part_line().is_none());
    }

    #[test]
    fn test_ordered_part_blank_name_dropped() {
        let dto = OrderedPartDto {
            part_code: Some("BRK-01".to_string()),
            part_name: Some("   ".to_string()),
            quantity: Some(4),
            unit_price: Some(32000.0),
        };
        assert!(dto.into_part_line().is_none());
    }

    #[test]
    fn test_submission_wire_shape_is_camel_case() {
        let submission = RepairDetailSubmission {
            request_id: "req-1".to_string(),
            receipt_id: "r-1".to_string(),
            completion_date: "2025-10-05".to_string(),
            repair_description: "oil change".to_string(),
            cause: "mileage".to_string(),
            extra_parts: vec![PartLineDto::from(PartLine::new("E1", "oil", 2, 45000.0))],
        };
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["receiptId"], "r-1");
        assert_eq!(json["completionDate"], "2025-10-05");
        assert_eq!(json["extraParts"][0]["partCode"], "E1");
        assert_eq!(json["extraParts"][0]["unitPrice"], 45000.0);
    }

    #[test]
    fn test_ordered_part_missing_quantity_or_price_dropped() {
        let no_qty = OrderedPartDto {
            part_code: Some("BRK-01".to_string()),
            part_name: Some("brake pad".to_string()),
            quantity: None,
            unit_price: Some(32000.0),
        };
        assert!(no_qty.into_part_line().is_none());

        let no_price = OrderedPartDto {
            part_code: Some("BRK-01".to_string()),
            part_name: Some("brake pad".to_string()),
            quantity: Some(4),
            unit_price: None,
        };
        assert!(no_price.into_part_line().is_none());
    }
}
