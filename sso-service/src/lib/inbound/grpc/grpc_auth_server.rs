use std::sync::Arc;
use std::time::Duration;

use tonic::Request;
use tonic::Response;
use tonic::Status;

use super::handlers::is_admin;
use super::handlers::login;
use super::handlers::register;
use crate::domain::auth::ports::AuthServicePort;
use crate::proto::auth_server::Auth;
use crate::proto::IsAdminRequest;
use crate::proto::IsAdminResponse;
use crate::proto::LoginRequest;
use crate::proto::LoginResponse;
use crate::proto::RegisterRequest;
use crate::proto::RegisterResponse;

/// gRPC front of the auth service.
///
/// Every call is bounded by `timeout`; an elapsed call is dropped, which
/// cancels any storage round-trip still in flight.
pub struct AuthGrpcService<S>
where
    S: AuthServicePort,
{
    service: Arc<S>,
    timeout: Duration,
}

impl<S> AuthGrpcService<S>
where
    S: AuthServicePort,
{
    pub fn new(service: Arc<S>, timeout: Duration) -> Self {
        Self { service, timeout }
    }
}

#[tonic::async_trait]
impl<S> Auth for AuthGrpcService<S>
where
    S: AuthServicePort,
{
    async fn register(
        &self,
        request: Request<RegisterRequest>,
    ) -> Result<Response<RegisterResponse>, Status> {
        let response =
            register::register(self.service.clone(), self.timeout, request.into_inner()).await?;
        Ok(Response::new(response))
    }

    async fn login(
        &self,
        request: Request<LoginRequest>,
    ) -> Result<Response<LoginResponse>, Status> {
        let response =
            login::login(self.service.clone(), self.timeout, request.into_inner()).await?;
        Ok(Response::new(response))
    }

    async fn is_admin(
        &self,
        request: Request<IsAdminRequest>,
    ) -> Result<Response<IsAdminResponse>, Status> {
        let response =
            is_admin::is_admin(self.service.clone(), self.timeout, request.into_inner()).await?;
        Ok(Response::new(response))
    }
}
