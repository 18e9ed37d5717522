use crate::{
    model::resource::{BranchListDto, StatsResponseDto, UploadDataResponseDto},
    server::{
        client::backend::BackendClient,
        error::{auth::AuthError, Error},
        model::session::admin::AdminSession,
    },
};

/// Read-only dashboard data, only served to signed-in staff.
pub struct DashboardService<'a> {
    backend: &'a BackendClient,
}

impl<'a> DashboardService<'a> {
    pub fn new(backend: &'a BackendClient) -> Self {
        Self { backend }
    }

    /// Branches and subjects used to populate the upload forms
    pub async fn upload_data(
        &self,
        admin: Option<&AdminSession>,
    ) -> Result<UploadDataResponseDto, Error> {
        require_admin(admin)?;

        Ok(self.backend.get_upload_data().await?)
    }

    pub async fn branches(&self, admin: Option<&AdminSession>) -> Result<BranchListDto, Error> {
        require_admin(admin)?;

        Ok(self.backend.get_branches().await?)
    }

    pub async fn stats(&self, admin: Option<&AdminSession>) -> Result<StatsResponseDto, Error> {
        require_admin(admin)?;

        Ok(self.backend.get_stats().await?)
    }
}

fn require_admin(admin: Option<&AdminSession>) -> Result<&AdminSession, Error> {
    admin.ok_or_else(|| AuthError::MissingAccessToken.into())
}
