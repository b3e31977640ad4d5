use std::sync::Arc;
use std::time::Duration;

use tonic::Status;

use super::require_non_empty;
use super::with_deadline;
use crate::domain::auth::models::AppId;
use crate::domain::auth::ports::AuthServicePort;
use crate::proto::LoginRequest;
use crate::proto::LoginResponse;

pub async fn login<S: AuthServicePort>(
    service: Arc<S>,
    timeout: Duration,
    request: LoginRequest,
) -> Result<LoginResponse, Status> {
    require_non_empty(&request.email, "email")?;
    require_non_empty(&request.password, "password")?;
    if request.app_id == 0 {
        return Err(Status::invalid_argument("app_id is required"));
    }

    let access_token = with_deadline(
        timeout,
        service.login(&request.email, &request.password, AppId(request.app_id)),
    )
    .await?;

    Ok(LoginResponse { access_token })
}
