use contracts::projections::p001_planning::dto::{
    PlanningFactDto, PlanningImportError, PlanningImportResult,
};
use contracts::shared::error::ValidationError;
use serde::Deserialize;

use super::{repository::PlanningRepository, service};
use crate::domain::a001_store::repository::StoreRepository;
use crate::domain::a002_sku::repository::SkuRepository;
use crate::shared::error::ServiceError;

/// Строка CSV: `store_id,sku_id,week,sales_units`
#[derive(Debug, Deserialize)]
struct CsvRow {
    store_id: String,
    sku_id: String,
    week: String,
    sales_units: i64,
}

/// Импорт плановых фактов из CSV.
///
/// Каждая строка проходит ту же проверку, что и одиночная запись.
/// Ошибочные строки попадают в `errors` и не прерывают импорт;
/// сбой хранилища прерывает импорт (уже записанные строки остаются).
pub async fn import_csv<R>(repo: &R, csv_text: &str) -> Result<PlanningImportResult, ServiceError>
where
    R: StoreRepository + SkuRepository + PlanningRepository + ?Sized,
{
    // Strip UTF-8 BOM if present
    let text = csv_text.trim_start_matches('\u{FEFF}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let mut headers = reader
        .headers()
        .map_err(|e| ValidationError::InvalidValue {
            field: "csv",
            reason: format!("unreadable header: {}", e),
        })?
        .clone();
    headers.trim();

    let mut result = PlanningImportResult::default();
    let mut record = csv::StringRecord::new();

    loop {
        match reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or_default();
                tracing::warn!("Skipping malformed CSV line {}: {}", line, e);
                result.errors.push(PlanningImportError {
                    line,
                    message: e.to_string(),
                });
                continue;
            }
        }
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        record.trim();

        let row: CsvRow = match record.deserialize(Some(&headers)) {
            Ok(row) => row,
            Err(e) => {
                tracing::warn!("Skipping malformed CSV line {}: {}", line, e);
                result.errors.push(PlanningImportError {
                    line,
                    message: e.to_string(),
                });
                continue;
            }
        };

        let dto = PlanningFactDto::new(&row.store_id, &row.sku_id, &row.week, row.sales_units);
        match service::record_fact(repo, dto).await {
            Ok(_) => result.imported += 1,
            Err(ServiceError::Validation(e)) => {
                tracing::warn!("Rejected CSV line {}: {}", line, e);
                result.errors.push(PlanningImportError {
                    line,
                    message: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        }
    }

    tracing::info!(
        "Planning CSV import: {} imported, {} rejected",
        result.imported,
        result.errors.len()
    );
    Ok(result)
}
