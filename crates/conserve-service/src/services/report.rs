//! Report service
//!
//! Intake and moderation of abuse reports against campaigns, comments,
//! campaign updates and users.

use tracing::{info, instrument};

use conserve_core::entities::{NewReport, REPORT_DESC_MAX_LEN};
use conserve_core::value_objects::ReportedTable;
use conserve_core::DomainError;

use crate::dto::{CreateReportRequest, ReportResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Report service
pub struct ReportService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReportService<'a> {
    /// Create a new ReportService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// File a report
    #[instrument(skip(self, request), fields(reported_by = request.reported_by))]
    pub async fn create(&self, request: CreateReportRequest) -> ServiceResult<ReportResponse> {
        let table_name = request
            .table_name
            .parse::<ReportedTable>()
            .map_err(|e| DomainError::UnknownReportedTable(e.0))?;

        if request
            .report_desc
            .as_ref()
            .is_some_and(|desc| desc.chars().count() > REPORT_DESC_MAX_LEN)
        {
            return Err(ServiceError::validation(format!(
                "Report description must be at most {REPORT_DESC_MAX_LEN} characters"
            )));
        }

        let report = NewReport {
            reported_by: request.reported_by,
            post_id: request.post_id,
            table_name,
            report_desc: request.report_desc,
        };
        let created = self.ctx.report_repo().create(&report).await?;

        info!(report_id = created.id, table = %created.table_name, post_id = created.post_id, "Report filed");

        Ok(created.into())
    }

    /// List all reports, newest first
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<ReportResponse>> {
        let reports = self.ctx.report_repo().find_all().await?;
        Ok(reports.into_iter().map(ReportResponse::from).collect())
    }

    /// Get a report by ID
    #[instrument(skip(self))]
    pub async fn find(&self, id: i32) -> ServiceResult<ReportResponse> {
        let report = self
            .ctx
            .report_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Report", id))?;

        Ok(report.into())
    }

    /// Dismiss a report
    #[instrument(skip(self))]
    pub async fn remove(&self, id: i32) -> ServiceResult<()> {
        self.ctx.report_repo().delete(id).await?;
        info!(report_id = id, "Report dismissed");
        Ok(())
    }
}
