use serde::Deserialize;

use super::TransportFailure;
use crate::domain::{AccidentRecord, AccidentReport};

/// Top level of a `getRestFrequentzoneOldman` JSON response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseEnvelope {
    total_count: u64,
    #[serde(default)]
    items: ItemsField,
}

/// `items` is an object when there are matches, but the portal sends an
/// empty string (or drops the key) when there are none.
#[derive(Debug, Deserialize, Default)]
#[serde(untagged)]
enum ItemsField {
    Wrapped {
        #[serde(default)]
        item: OneOrMany,
    },
    Blank(String),
    #[default]
    Missing,
}

/// A lone match is serialized as an object rather than a one-element array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<AccidentRecord>),
    One(Box<AccidentRecord>),
}

impl Default for OneOrMany {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl From<ItemsField> for Vec<AccidentRecord> {
    fn from(items: ItemsField) -> Self {
        match items {
            ItemsField::Wrapped {
                item: OneOrMany::Many(records),
            } => records,
            ItemsField::Wrapped {
                item: OneOrMany::One(record),
            } => vec![*record],
            ItemsField::Blank(_) | ItemsField::Missing => Vec::new(),
        }
    }
}

/// Parses a response body into an [`AccidentReport`], keeping the record
/// order the service returned.
pub fn parse_report(body: &[u8]) -> Result<AccidentReport, TransportFailure> {
    let envelope: ResponseEnvelope = serde_json::from_slice(body)?;

    Ok(AccidentReport {
        total_count: envelope.total_count,
        records: envelope.items.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const THREE_SPOTS: &str = r#"{
        "resultCode": "00",
        "resultMsg": "NORMAL_CODE",
        "totalCount": 3,
        "numOfRows": 10,
        "pageNo": 1,
        "items": {
            "item": [
                {"spot_nm": "인천광역시 부평구 부평동(부평역 부근)", "la_crd": 37.4895, "lo_crd": 126.7245, "occrrnc_cnt": 6, "se_dnv_cnt": 3, "dth_dnv_cnt": 1, "caslt_cnt": 7, "sl_dnv_cnt": 3, "wnd_dnv_cnt": 0},
                {"spot_nm": "인천광역시 부평구 십정동(동암역 부근)", "la_crd": 37.4712, "lo_crd": 126.7027, "occrrnc_cnt": 4, "se_dnv_cnt": 2, "dth_dnv_cnt": 0},
                {"spot_nm": "인천광역시 부평구 산곡동(산곡사거리 부근)", "la_crd": 37.5031, "lo_crd": 126.7089, "occrrnc_cnt": 3, "se_dnv_cnt": 1, "dth_dnv_cnt": 0}
            ]
        }
    }"#;

    #[test]
    fn parses_records_in_service_order() -> Result<(), TransportFailure> {
        let report = parse_report(THREE_SPOTS.as_bytes())?;

        assert_eq!(report.total_count, 3);
        assert_eq!(report.records.len(), 3);
        assert_eq!(report.records[0].occurrences, 6);
        assert_eq!(report.records[0].casualties, 7);
        assert_eq!(report.records[2].spot_name, "인천광역시 부평구 산곡동(산곡사거리 부근)");
        Ok(())
    }

    #[test]
    fn blank_items_is_an_empty_report() -> Result<(), TransportFailure> {
        let report = parse_report(br#"{"totalCount": 0, "items": ""}"#)?;
        assert_eq!(report.total_count, 0);
        assert!(report.records.is_empty());

        let report = parse_report(br#"{"totalCount": 0}"#)?;
        assert!(report.records.is_empty());
        Ok(())
    }

    #[test]
    fn single_item_object_becomes_one_record() -> Result<(), TransportFailure> {
        let body = r#"{
            "totalCount": 1,
            "items": {"item": {"spot_nm": "인천광역시 부평구 갈산동(갈산역 부근)", "la_crd": 37.5122, "lo_crd": 126.7215, "occrrnc_cnt": 3, "se_dnv_cnt": 1, "dth_dnv_cnt": 0}}
        }"#;

        let report = parse_report(body.as_bytes())?;
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].occurrences, 3);
        Ok(())
    }

    #[test]
    fn error_pages_are_transport_failures() {
        let xml = b"<OpenAPI_ServiceResponse><cmmMsgHeader><errMsg>SERVICE ERROR</errMsg></cmmMsgHeader></OpenAPI_ServiceResponse>";
        assert!(matches!(parse_report(xml), Err(TransportFailure::Body(_))));

        let missing_total = br#"{"items": ""}"#;
        assert!(matches!(
            parse_report(missing_total),
            Err(TransportFailure::Body(_))
        ));
    }
}
