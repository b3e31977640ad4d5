use std::sync::Arc;
use std::time::Duration;

use tonic::Status;

use super::require_non_empty;
use super::with_deadline;
use crate::domain::auth::ports::AuthServicePort;
use crate::proto::RegisterRequest;
use crate::proto::RegisterResponse;

pub async fn register<S: AuthServicePort>(
    service: Arc<S>,
    timeout: Duration,
    request: RegisterRequest,
) -> Result<RegisterResponse, Status> {
    require_non_empty(&request.email, "email")?;
    require_non_empty(&request.password, "password")?;

    let user_id = with_deadline(
        timeout,
        service.register_new_user(&request.email, &request.password),
    )
    .await?;

    Ok(RegisterResponse { user_id: user_id.0 })
}
