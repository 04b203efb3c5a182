//! Reported post entity <-> model mapper

use conserve_core::entities::ReportedPost;
use conserve_core::error::DomainError;
use conserve_core::value_objects::ReportedTable;

use crate::models::ReportedPostModel;

impl TryFrom<ReportedPostModel> for ReportedPost {
    type Error = DomainError;

    fn try_from(model: ReportedPostModel) -> Result<Self, Self::Error> {
        let table_name = model
            .table_name
            .parse::<ReportedTable>()
            .map_err(|e| DomainError::InternalError(e.to_string()))?;

        Ok(ReportedPost {
            id: model.id,
            reported_by: model.reported_by,
            post_id: model.post_id,
            table_name,
            report_desc: model.report_desc,
            reported_at: model.reported_at,
        })
    }
}
