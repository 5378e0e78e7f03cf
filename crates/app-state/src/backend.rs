//! Backend seam: typed procedures the state container calls, and an adapter
//! that builds them on top of a raw JSON transport.

use std::future::Future;
use std::pin::Pin;

use nsemu_protocol::{FirmwareInfo, GameData, Method, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::StateError;

/// Boxed future returned by [`Backend`] procedures.
pub type BackendFuture<'a, T> =
    Pin<Box<dyn Future<Output = Result<Response<T>, StateError>> + Send + 'a>>;

/// Abstract backend process.
///
/// The desktop app implements this over its RPC bridge; tests use scripted
/// mocks. An `Err` means the reply never arrived in usable form, an `Ok` with
/// a non-zero code means the backend itself reported a failure. The state
/// container treats both the same way.
pub trait Backend: Send + Sync {
    /// Lists firmware builds, newest (default selection) first.
    fn get_available_firmware_infos(&self) -> BackendFuture<'_, Vec<FirmwareInfo>>;

    /// Fetches the game title dictionary.
    fn get_game_data(&self) -> BackendFuture<'_, GameData>;
}

/// Raw request/response channel to the backend process.
pub trait RpcTransport: Send + Sync {
    /// Invokes `method` without arguments and returns the undecoded reply.
    fn call(
        &self,
        method: Method,
    ) -> Pin<Box<dyn Future<Output = Result<serde_json::Value, StateError>> + Send + '_>>;
}

impl<T: RpcTransport + ?Sized> RpcTransport for std::sync::Arc<T> {
    fn call(
        &self,
        method: Method,
    ) -> Pin<Box<dyn Future<Output = Result<serde_json::Value, StateError>> + Send + '_>> {
        (**self).call(method)
    }
}

/// [`Backend`] that decodes `{code, data, msg}` envelopes from a transport.
pub struct JsonBackend<T> {
    transport: T,
}

impl<T: RpcTransport> JsonBackend<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn request<P: DeserializeOwned>(
        &self,
        method: Method,
    ) -> Result<Response<P>, StateError> {
        let raw = self.transport.call(method).await?;

        // Failed replies may carry a payload of any shape; `data` is only
        // decoded on success.
        let envelope: Response<serde_json::Value> = serde_json::from_value(raw)?;
        debug!(%method, code = envelope.code, "backend replied");

        if !envelope.is_success() {
            return Ok(Response::failure(envelope.code, envelope.msg));
        }

        let data = match envelope.data {
            Some(value) => Some(serde_json::from_value(value)?),
            None => None,
        };
        Ok(Response {
            code: envelope.code,
            data,
            msg: envelope.msg,
        })
    }
}

impl<T: RpcTransport> Backend for JsonBackend<T> {
    fn get_available_firmware_infos(&self) -> BackendFuture<'_, Vec<FirmwareInfo>> {
        Box::pin(self.request(Method::GetAvailableFirmwareInfos))
    }

    fn get_game_data(&self) -> BackendFuture<'_, GameData> {
        Box::pin(self.request(Method::GetGameData))
    }
}
