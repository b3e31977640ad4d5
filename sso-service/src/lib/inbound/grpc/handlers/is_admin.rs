use std::sync::Arc;
use std::time::Duration;

use tonic::Status;

use super::with_deadline;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::AuthServicePort;
use crate::proto::IsAdminRequest;
use crate::proto::IsAdminResponse;

pub async fn is_admin<S: AuthServicePort>(
    service: Arc<S>,
    timeout: Duration,
    request: IsAdminRequest,
) -> Result<IsAdminResponse, Status> {
    if request.user_id == 0 {
        return Err(Status::invalid_argument("user_id is required"));
    }

    let is_admin = with_deadline(timeout, service.check_is_admin(UserId(request.user_id))).await?;

    Ok(IsAdminResponse { is_admin })
}
